//! 鼠标命中测试
//!
//! 用与绘制相同的 `MainLayout` 把屏幕坐标换算为面板与列表下标。

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::message::{AppMessage, MouseMessage};
use crate::model::state::ListCursor;
use crate::model::{App, FocusPanel, MainLayout, CONSUMERS_HEADER_ROWS, WORK_HEADER_ROWS};

/// 处理鼠标事件
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    let layout = app.layout();
    let hit = |column, row| {
        hit_test(
            &layout,
            column,
            row,
            (&app.consumers.cursor, app.consumers.items.len()),
            (&app.work.cursor, app.work.visible_len()),
        )
    };

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => hit(mouse.column, mouse.row)
            .map_or(AppMessage::Noop, AppMessage::Mouse),
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            let up = matches!(mouse.kind, MouseEventKind::ScrollUp);
            panel_at(&layout, mouse.column, mouse.row).map_or(AppMessage::Noop, |panel| {
                AppMessage::Mouse(MouseMessage::Wheel { panel, up })
            })
        }
        _ => AppMessage::Noop,
    }
}

/// 坐标所在的面板
pub fn panel_at(layout: &MainLayout, column: u16, row: u16) -> Option<FocusPanel> {
    let position = Position::new(column, row);
    if layout.consumers.contains(position) {
        Some(FocusPanel::Consumers)
    } else if layout.work.contains(position) {
        Some(FocusPanel::Work)
    } else if layout.detail.contains(position) {
        Some(FocusPanel::Detail)
    } else {
        None
    }
}

/// 左键点击的命中测试
///
/// 点中列表项返回选择消息（绝对下标 = 行 + 滚动偏移），
/// 点中面板其它位置只切换焦点，面板外（帮助栏）返回 None。
pub fn hit_test(
    layout: &MainLayout,
    column: u16,
    row: u16,
    consumers: (&ListCursor, usize),
    work: (&ListCursor, usize),
) -> Option<MouseMessage> {
    let panel = panel_at(layout, column, row)?;
    let message = match panel {
        FocusPanel::Consumers => list_index(layout.consumers, CONSUMERS_HEADER_ROWS, row, consumers)
            .map(MouseMessage::SelectConsumer),
        FocusPanel::Work => {
            list_index(layout.work, WORK_HEADER_ROWS, row, work).map(MouseMessage::SelectWork)
        }
        FocusPanel::Detail => None,
    };
    Some(message.unwrap_or(MouseMessage::Focus(panel)))
}

/// 点击行对应的列表下标；表头、下边框或越过列表末尾时为 None
fn list_index(
    area: Rect,
    header_rows: u16,
    row: u16,
    (cursor, len): (&ListCursor, usize),
) -> Option<usize> {
    let first = area.y + header_rows;
    let last = area.bottom().saturating_sub(1);
    if row < first || row >= last {
        return None;
    }
    let index = cursor.offset + usize::from(row - first);
    (index < len).then_some(index)
}
