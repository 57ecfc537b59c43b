// ABOUTME: System color tokens for one scheme's fixed role set
// ABOUTME: Works on any RoleMap so brightness variants differ only by suffix

use crate::Properties;
use crate::error::Result;
use crate::naming::{compose_token, tokenize};
use toneprops_types::RoleMap;

/// `--{prefix}{role}{suffix}` for every role, e.g. `--md-sys-color-on-primary-dark`.
pub fn derive_scheme_properties(
    scheme: &dyn RoleMap,
    prefix: &str,
    suffix: &str,
) -> Result<Properties> {
    Ok(scheme
        .roles()
        .into_iter()
        .map(|(role, color)| (compose_token(prefix, &tokenize(role), suffix), color.to_hex()))
        .collect())
}
