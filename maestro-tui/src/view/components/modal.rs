//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::input;
use crate::model::state::Capture;
use crate::model::App;
use crate::view::theme::Palette;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let palette = &app.palette;
    match &app.capture {
        Some(Capture::CreatingConsumer { name, error }) => {
            let mut lines = vec![
                Line::styled("Create Consumer", palette.title(true)),
                Line::default(),
                Line::from(
                    [
                        vec![Span::styled("Name: ", palette.dim())],
                        input::spans(name, "", true, false, palette),
                    ]
                    .concat(),
                ),
            ];
            if let Some(error) = error {
                lines.push(Line::styled(format!("Error: {error}"), palette.status_error()));
            }
            lines.push(Line::default());
            lines.push(Line::styled("[Enter] create  [Esc] cancel", palette.hint_desc()));
            render_box(frame, palette, lines, 50);
        }
        Some(Capture::ConfirmingDelete(target)) => {
            let lines = vec![
                Line::styled("Confirm Delete", palette.title(true)),
                Line::default(),
                Line::styled(target.prompt(), palette.item()),
                Line::default(),
                Line::styled("[y] confirm  [Esc] cancel", palette.hint_desc()),
            ];
            render_box(frame, palette, lines, 50);
        }
        _ => {}
    }
}

/// 在屏幕中央绘制带边框的内容框
pub fn render_box(frame: &mut Frame, palette: &Palette, lines: Vec<Line<'static>>, width: u16) {
    // 内容行 + 上下边框与留白
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(4);
    let area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = Rect::new(
        inner.x.saturating_add(2),
        inner.y.saturating_add(1),
        inner.width.saturating_sub(4),
        inner.height.saturating_sub(2),
    );
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), content);
}

/// 计算居中弹窗区域
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
