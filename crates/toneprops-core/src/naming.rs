// ABOUTME: Token naming policy: identifier tokenization and custom property key composition
// ABOUTME: Shared by every deriver so palette and scheme tokens line up lexically

/// Uppercase the first character.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a hyphen- or space-separated phrase into camelCase.
///
/// `"Custom Color"` becomes `customColor`, `"surface-dim"` becomes `surfaceDim`.
pub fn camelize(input: &str) -> String {
    let joined: String = input
        .split(|c: char| c == '-' || c.is_whitespace())
        .enumerate()
        .map(|(index, word)| {
            if index == 0 {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect();

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            first.to_ascii_lowercase().to_string() + chars.as_str()
        }
        _ => joined,
    }
}

/// Insert a hyphen at every lower-to-upper boundary, then lowercase.
pub fn hyphenate(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;
    for c in input.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            out.push('-');
        }
        out.push(c);
        prev = Some(c);
    }
    out.to_lowercase()
}

/// Turn an identifier or phrase into a hyphenated token fragment.
///
/// `onPrimaryContainer` becomes `on-primary-container` and `"Custom Color"`
/// becomes `custom-color`.
pub fn tokenize(name: &str) -> String {
    hyphenate(&camelize(name))
}

/// Split an identifier into space-separated words with a leading capital.
///
/// `onPrimaryContainer` becomes `On Primary Container`; digit runs form their own word.
pub fn humanize(input: &str) -> String {
    let mut spaced = String::with_capacity(input.len() + 4);
    let mut in_digits = false;
    for c in input.chars() {
        if c.is_ascii_uppercase() || (c.is_ascii_digit() && !in_digits) {
            spaced.push(' ');
        }
        in_digits = c.is_ascii_digit();
        spaced.push(c);
    }
    capitalize(&spaced)
}

/// `--{prefix}{base}{suffix}`. No escaping is applied.
pub fn compose_token(prefix: &str, base: &str, suffix: &str) -> String {
    format!("--{prefix}{base}{suffix}")
}

/// Default prefix for [`contrast_token`].
pub const CONTRAST_TOKEN_PREFIX: &str = "md-sys-color-";

/// Name of the role that contrasts with `role`.
///
/// `onPrimary` pairs with `primary`, `inversePrimary` with `primary`, and any
/// other role with its `on-` counterpart.
pub fn contrast_token(role: &str, prefix: &str, suffix: &str) -> String {
    let lowered = humanize(role).to_lowercase();
    let mut words: Vec<&str> = lowered.split(' ').filter(|w| !w.is_empty()).collect();

    if let Some(index) = words.iter().position(|w| *w == "on") {
        words.remove(index);
        return format!("{prefix}{}{suffix}", words.join("-"));
    }

    if let Some(index) = words.iter().position(|w| *w == "inverse") {
        words.remove(index);
        return format!("{prefix}{}{suffix}", words.join("-"));
    }

    format!("{prefix}on-{}{suffix}", words.join("-"))
}
