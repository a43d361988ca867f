//! 底部帮助栏

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel};

/// 渲染帮助栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let palette = &app.palette;
    let mut spans = vec![Span::raw(" ")];

    for (i, (key, desc)) in hints(app.focus).iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, palette.hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, palette.hint_desc()));
    }

    if let Some(session) = &app.session {
        spans.push(Span::styled(format!("  │ {}", session.endpoint), palette.dim()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 根据焦点面板生成快捷键提示
fn hints(focus: FocusPanel) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("[Tab]", "panel")];

    match focus {
        FocusPanel::Consumers => hints.extend([
            ("[n]", "new"),
            ("[d]", "del"),
            ("[y]", "copy"),
            ("[r]", "refresh"),
            ("[↑↓]", "nav"),
            ("[Enter]", "select"),
        ]),
        FocusPanel::Work => hints.extend([
            ("[/]", "filter"),
            ("[w]", "watch"),
            ("[v]", "view mode"),
            ("[y]", "copy"),
            ("[d]", "del"),
            ("[r]", "refresh"),
            ("[↑↓]", "nav"),
        ]),
        FocusPanel::Detail => hints.extend([
            ("[/]", "search"),
            ("[w]", "watch"),
            ("[v]", "view mode"),
            ("[y]", "copy"),
            ("[r]", "refresh"),
            ("[↑↓/PgUp/PgDn]", "scroll"),
        ]),
    }

    hints.push(("[Ctrl+C]", "quit"));
    hints
}
