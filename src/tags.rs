//! Span-tag substitution in markdown content.
//!
//! Hand-written pages carry inline placeholders that the build fills with
//! computed values (download links, version lists):
//!
//! ```markdown
//! <span id="download/desktop/linux/latest"></span>
//! <span id="doc/versions">stale content gets replaced wholesale</span>
//! ```
//!
//! Using RegEx to parse HTML doesn't work in general, but for picking out an
//! isolated, non-nesting tag in a markdown document it works just fine.
//! A marker whose key has no substitution is left untouched, stale inner
//! content included.

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::{fs, path::Path, sync::OnceLock};

static SPAN_RE: OnceLock<Regex> = OnceLock::new();

/// Matches `<span id="KEY">INNER</span>` where INNER contains no tags.
fn span_regex() -> &'static Regex {
    SPAN_RE.get_or_init(|| {
        Regex::new(r#"<span id="([^"]+)">[^<]*</span>"#).expect("span regex is valid")
    })
}

/// Replace the inner content of every marker whose key appears in `subs`.
///
/// Pure on its input; markers with unknown keys (and anything that fails to
/// match the marker syntax) pass through verbatim. Applying the same
/// substitutions twice yields the same result as applying them once, as long
/// as replacement values contain no marker syntax themselves.
pub fn substitute<K, V>(content: &str, subs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    span_regex()
        .replace_all(content, |caps: &Captures| {
            let id = &caps[1];
            match subs.iter().find(|(key, _)| key.as_ref() == id) {
                Some((_, value)) => format!("<span id=\"{id}\">{}</span>", value.as_ref()),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Rewrite the given file with the given span tag substitutions.
pub fn update_file<K, V>(path: &Path, subs: &[(K, V)]) -> Result<()>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    fs::write(path, substitute(&content, subs))
        .with_context(|| format!("Failed to write {}", path.display()))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_substitutions_is_identity() {
        let content = "# Page\n<span id=\"doc/versions\">old</span> and text\n";
        let none: &[(&str, &str)] = &[];
        assert_eq!(substitute(content, none), content);
    }

    #[test]
    fn test_unknown_key_keeps_stale_inner_content() {
        let content = "<span id=\"download/a/latest\">v1.0 link</span>";
        let out = substitute(content, &[("other/key", "new")]);
        assert_eq!(out, content);
    }

    #[test]
    fn test_replaces_inner_content_wholesale() {
        let content = "Get it: <span id=\"download/desktop/linux/latest\">old</span>!";
        let out = substitute(
            content,
            &[("download/desktop/linux/latest", "[app-4.2](https://x/app-4.2)")],
        );
        assert_eq!(
            out,
            "Get it: <span id=\"download/desktop/linux/latest\">[app-4.2](https://x/app-4.2)</span>!"
        );
    }

    #[test]
    fn test_empty_inner_content_is_filled() {
        let out = substitute(
            "<span id=\"doc/versions\"></span>",
            &[("doc/versions", " * [v4.2](v4.2)")],
        );
        assert_eq!(out, "<span id=\"doc/versions\"> * [v4.2](v4.2)</span>");
    }

    #[test]
    fn test_idempotent() {
        let content = "a <span id=\"k\">x</span> b <span id=\"other\"></span>";
        let pairs = [("k", "value")];
        let once = substitute(content, &pairs);
        let twice = substitute(&once, &pairs);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_multiple_markers_and_keys() {
        let content = "<span id=\"a\"></span> mid <span id=\"b\"></span> <span id=\"a\"></span>";
        let out = substitute(content, &[("a", "A"), ("b", "B")]);
        assert_eq!(
            out,
            "<span id=\"a\">A</span> mid <span id=\"b\">B</span> <span id=\"a\">A</span>"
        );
    }

    #[test]
    fn test_owned_keys_and_values() {
        let out = substitute(
            "<span id=\"download/server/osx/all\"></span>",
            &[("download/server/osx/all".to_string(), "list".to_string())],
        );
        assert_eq!(out, "<span id=\"download/server/osx/all\">list</span>");
    }

    #[test]
    fn test_malformed_marker_passes_through() {
        // No id attribute, unclosed tag: neither matches, both survive
        let content = "<span class=\"x\">keep</span> <span id=\"k\">unclosed";
        let out = substitute(content, &[("k", "new")]);
        assert_eq!(out, content);
    }

    #[test]
    fn test_update_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_index.md");
        fs::write(&path, "downloads: <span id=\"dl\"></span>\n").unwrap();

        update_file(&path, &[("dl", "[latest](https://x)")]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "downloads: <span id=\"dl\">[latest](https://x)</span>\n"
        );
    }
}
