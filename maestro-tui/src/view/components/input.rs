//! 单行输入框

use ratatui::text::Span;

use crate::view::theme::Palette;

/// 输入框光标
const CURSOR: &str = "█";

/// 渲染输入框内容
///
/// 空文本显示占位符；`mask` 为真时每个字符显示为 `•`；聚焦时追加光标。
pub fn spans(
    text: &str,
    placeholder: &str,
    focused: bool,
    mask: bool,
    palette: &Palette,
) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(2);
    if text.is_empty() {
        if focused {
            spans.push(Span::styled(CURSOR, palette.input(true)));
        }
        spans.push(Span::styled(placeholder.to_string(), palette.dim()));
        return spans;
    }

    let shown = if mask {
        "•".repeat(text.chars().count())
    } else {
        text.to_string()
    };
    spans.push(Span::styled(shown, palette.input(focused)));
    if focused {
        spans.push(Span::styled(CURSOR, palette.input(true)));
    }
    spans
}
