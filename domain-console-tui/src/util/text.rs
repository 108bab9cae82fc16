//! 文本显示宽度处理

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Keep the end of `text` that fits in `width` columns.
///
/// Input fields show their tail so the cursor stays visible.
pub fn fit_tail(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }

    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_unchanged() {
        assert_eq!(fit_tail("a.com", 10), "a.com");
    }

    #[test]
    fn long_text_keeps_tail() {
        assert_eq!(fit_tail("https://example.com", 7), "ple.com");
    }

    #[test]
    fn wide_chars_counted_by_columns() {
        // 每个汉字占两列
        assert_eq!(fit_tail("域名控制台", 5), "制台");
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(fit_tail("abc", 0), "");
    }
}
