//! `${key}` placeholder expansion for archetype templates.
//!
//! Used when rendering the versioned-docs index page from
//! `doc/archetypes/doc-version.md`. A placeholder with no matching value is
//! a hard error: an archetype referencing an unknown key means the template
//! and the driver are out of sync.

use anyhow::{Result, bail};
use regex::Regex;
use std::sync::OnceLock;

static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_RE.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder regex is valid")
    })
}

/// Expand every `${key}` in `template` from the given (key, value) pairs.
///
/// # Errors
/// Fails on the first placeholder whose key has no value.
pub fn expand(template: &str, values: &[(&str, String)]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in placeholder_regex().captures_iter(template) {
        let whole = caps.get(0).expect("capture 0 always present");
        let key = &caps[1];

        let Some((_, value)) = values.iter().find(|(k, _)| *k == key) else {
            bail!("Template placeholder `${{{key}}}` has no value");
        };

        out.push_str(&template[last..whole.start()]);
        out.push_str(value);
        last = whole.end();
    }
    out.push_str(&template[last..]);

    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================
