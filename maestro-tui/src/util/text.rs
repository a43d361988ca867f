//! 按显示宽度处理文本（CJK 与 emoji 占两列）

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 截断到不超过 `width` 列
pub fn truncate_to_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > width {
            return &text[..idx];
        }
    }
    text
}

/// 右侧补空格到恰好 `width` 列，过长时截断
pub fn pad_right(text: &str, width: usize) -> String {
    let text = truncate_to_width(text, width);
    let pad = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(pad))
}
