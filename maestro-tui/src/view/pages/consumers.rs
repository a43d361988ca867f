//! Consumer 面板

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::util::pad_right;

/// 渲染 Consumer 面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let palette = &app.palette;
    let focused = app.focus.is_consumers();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::styled("Consumers", palette.title(focused))];

    let rows = app.layout().consumer_rows();
    let width = usize::from(inner.width.saturating_sub(2));
    let cursor = app.consumers.cursor;

    for (i, consumer) in app
        .consumers
        .items
        .iter()
        .enumerate()
        .skip(cursor.offset)
        .take(rows)
    {
        if i == cursor.selected {
            lines.push(Line::from(vec![
                Span::styled("> ", palette.selected()),
                Span::styled(pad_right(&consumer.name, width), palette.selected()),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(consumer.name.clone(), palette.item()),
            ]));
        }
    }

    if app.consumers.items.is_empty() {
        lines.push(Line::styled("  (no consumers)", palette.dim()));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
