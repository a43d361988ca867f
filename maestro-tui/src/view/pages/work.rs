//! ManifestWork 面板

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use maestro_client::WorkHealth;

use crate::model::App;
use crate::util::pad_right;
use crate::view::theme::Palette;

/// 渲染 ManifestWork 面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let palette = &app.palette;
    let focused = app.focus.is_work();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut title = vec![Span::styled("ManifestWorks", palette.title(focused))];
    if app.watch.enabled {
        title.push(Span::raw(" "));
        title.push(Span::styled("[WATCH]", palette.watch_badge()));
    }

    let mut lines = vec![Line::from(title), filter_row(app)];

    let rows = app.layout().work_rows();
    let name_width = usize::from(inner.width.saturating_sub(5));
    let row_width = usize::from(inner.width.saturating_sub(2));
    let cursor = app.work.cursor;
    let visible = app.work.visible();

    for (i, work) in visible.iter().enumerate().skip(cursor.offset).take(rows) {
        let (icon, icon_style) = health_icon(work.health(), palette);
        let name = pad_right(&work.name, name_width);
        if i == cursor.selected {
            lines.push(Line::from(vec![
                Span::styled("> ", palette.selected()),
                Span::styled(pad_right(&format!("{name} {icon}"), row_width), palette.selected()),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(name, palette.item()),
                Span::raw(" "),
                Span::styled(icon, icon_style),
            ]));
        }
    }

    if visible.is_empty() {
        lines.push(Line::styled("  (no manifests)", palette.dim()));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 过滤行：输入中 / 已过滤 / 提示
fn filter_row(app: &App) -> Line<'static> {
    let palette = &app.palette;
    let active = palette.hint_key();
    if app.is_filtering() {
        Line::from(vec![
            Span::styled("[/] ", active),
            Span::styled(app.work.filter.clone(), palette.input(true)),
            Span::styled("█", palette.input(true)),
        ])
    } else if !app.work.filter.is_empty() {
        Line::from(vec![
            Span::styled("[/] filter: ", active),
            Span::styled(app.work.filter.clone(), palette.item()),
        ])
    } else {
        Line::styled("[/] to filter", palette.hint_desc())
    }
}

fn health_icon(health: WorkHealth, palette: &Palette) -> (&'static str, Style) {
    match health {
        WorkHealth::Healthy => ("✓", palette.status_ok()),
        WorkHealth::Degraded => ("✗", palette.status_error()),
        WorkHealth::Unknown => ("?", palette.dim()),
    }
}
