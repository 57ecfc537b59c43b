// ABOUTME: Renders a derived token map for stdout
// ABOUTME: JSON object or a CSS :root block of custom property declarations

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use std::fmt::Write;
use toneprops_core::Properties;

pub fn render(properties: &Properties, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(properties).context("Failed to serialize tokens")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Css => Ok(render_css(properties)),
    }
}

fn render_css(properties: &Properties) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in properties {
        // Writing to a String cannot fail
        let _ = writeln!(css, "  {name}: {value};");
    }
    css.push_str("}\n");
    css
}
