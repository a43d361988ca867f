//! 详情面板

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, StatusMessage};
use crate::render::ansi_text::to_text;

/// 渲染详情面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let palette = &app.palette;
    let focused = app.focus.is_detail();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // 标题行
    let mut title = vec![Span::styled(
        "ManifestWork Detail",
        palette.title(focused || app.watch.enabled),
    )];
    if app.watch.enabled {
        title.push(Span::raw(" "));
        title.push(Span::styled("[WATCH]", palette.watch_badge()));
    }
    title.push(Span::raw(" "));
    title.push(Span::styled(format!("[{}]", app.detail.mode.label()), palette.badge()));
    if app.loading {
        title.push(Span::styled(format!(" {}", app.spinner()), palette.badge()));
    }

    // 状态行
    let status = match &app.status {
        Some(StatusMessage::Info(text)) => Line::styled(text.clone(), palette.status_ok()),
        Some(StatusMessage::Error(text)) => Line::styled(text.clone(), palette.status_error()),
        None => Line::default(),
    };

    let mut lines = vec![Line::from(title), status, search_bar(app)];

    // 视口
    let rows = app.layout().detail_rows();
    if app.detail.detail.is_none() {
        lines.push(Line::styled("Select a ManifestWork to view details", palette.dim()));
    } else {
        let text = to_text(app.detail.display());
        lines.extend(text.lines.into_iter().skip(app.detail.scroll).take(rows));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 搜索栏：输入中 / 已关闭但保留高亮 / 提示
fn search_bar(app: &App) -> Line<'static> {
    let palette = &app.palette;
    let search = &app.detail.search;
    let position = search
        .current_index()
        .map(|i| format!("{}/{}", i + 1, search.matches().len()));

    if app.is_searching() {
        let mut spans = vec![
            Span::styled(format!("/ {}", search.query), palette.hint_key()),
            Span::styled("█", palette.input(true)),
        ];
        match position {
            Some(position) => spans.push(Span::styled(format!(" {position}"), palette.badge())),
            None if !search.is_empty() => {
                spans.push(Span::styled(" (no matches)", palette.status_error()));
            }
            None => {}
        }
        Line::from(spans)
    } else if !search.is_empty() {
        Line::from(vec![
            Span::styled(format!("/ {}", search.query), palette.hint_key()),
            Span::raw(" "),
            Span::styled(position.unwrap_or_else(|| "0/0".to_string()), palette.badge()),
            Span::raw("  "),
            Span::styled("[n] next  [N] prev  [/] reopen  [Esc] clear", palette.hint_desc()),
        ])
    } else {
        Line::styled("[/] search", palette.hint_desc())
    }
}
