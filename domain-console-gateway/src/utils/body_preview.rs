//! Response body previews
//!
//! A full domain list can run to many kilobytes of JSON. Logs and error
//! messages only get the head of it, folded onto one line.

use std::fmt::{self, Write};

/// Characters kept before the preview is cut.
const PREVIEW_CHARS: usize = 200;

/// Lazily formatted preview of a body.
///
/// Formatting happens only when the record is actually emitted, so
/// `log::debug!("{}", BodyPreview(&text))` costs nothing when debug is off.
#[derive(Debug, Clone, Copy)]
pub struct BodyPreview<'a>(pub &'a str);

impl fmt::Display for BodyPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self.0.trim();
        let mut chars = body.char_indices();
        let mut last_was_space = false;

        for (_, c) in chars.by_ref().take(PREVIEW_CHARS) {
            if c.is_whitespace() {
                if !last_was_space {
                    f.write_char(' ')?;
                }
                last_was_space = true;
            } else {
                f.write_char(c)?;
                last_was_space = false;
            }
        }

        if let Some((cut, _)) = chars.next() {
            write!(f, " …(+{} bytes)", body.len() - cut)?;
        }
        Ok(())
    }
}

/// Owned preview, for storing in errors.
pub fn preview(body: &str) -> String {
    BodyPreview(body).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_kept() {
        assert_eq!(preview(r#"{"id":"1"}"#), r#"{"id":"1"}"#);
    }

    #[test]
    fn newlines_fold_into_single_spaces() {
        let body = "[\n  {\n    \"id\": \"1\"\n  }\n]\n";
        assert_eq!(preview(body), r#"[ { "id": "1" } ]"#);
    }

    #[test]
    fn body_at_limit_is_not_cut() {
        let body = "x".repeat(PREVIEW_CHARS);
        assert_eq!(preview(&body), body);
    }

    #[test]
    fn long_domain_list_reports_remaining_bytes() {
        let body = format!(
            "[{}]",
            (0..20)
                .map(|i| format!(r#"{{"id":"{i}","domain":"https://site{i}.test"}}"#))
                .collect::<Vec<_>>()
                .join(",")
        );
        let out = preview(&body);

        assert!(out.starts_with(r#"[{"id":"0""#));
        assert!(out.ends_with(&format!(" …(+{} bytes)", body.len() - PREVIEW_CHARS)));
    }

    #[test]
    fn cut_never_splits_a_character() {
        // 3 bytes each
        let body = "域".repeat(PREVIEW_CHARS + 10);
        let out = preview(&body);

        assert!(out.starts_with(&"域".repeat(PREVIEW_CHARS)));
        assert!(out.ends_with(" …(+30 bytes)"));
    }
}
