//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::keymap::{any, DefaultKeymap};
use super::mouse::handle_mouse_event;
use crate::message::{AppMessage, CaptureMessage, ConnectMessage, ContentMessage};
use crate::model::state::{Capture, ConnectField};
use crate::model::{App, FocusPanel, Screen};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => {
            // 捕获模式与连接页不响应鼠标
            if app.screen == Screen::Main && app.capture.is_none() {
                handle_mouse_event(mouse_event, app)
            } else {
                AppMessage::Noop
            }
        }
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C 在任何状态下都退出
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.screen == Screen::Connect {
        return handle_connect_keys(key, app);
    }

    if let Some(capture) = &app.capture {
        return handle_capture_keys(key, capture);
    }

    // 全局快捷键
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }
    if DefaultKeymap::FOCUS_PREV.matches(&key) {
        return AppMessage::FocusPrev;
    }
    if DefaultKeymap::WATCH.matches(&key) {
        return AppMessage::Content(ContentMessage::ToggleWatch);
    }
    if DefaultKeymap::CYCLE_VIEW.matches(&key) {
        return AppMessage::Content(ContentMessage::CycleView);
    }
    if DefaultKeymap::COPY.matches(&key) {
        return AppMessage::Content(ContentMessage::Copy);
    }

    handle_panel_keys(key, app.focus)
}

/// 连接表单
fn handle_connect_keys(key: KeyEvent, app: &App) -> AppMessage {
    let msg = match key.code {
        KeyCode::Tab | KeyCode::Down => ConnectMessage::NextField,
        KeyCode::BackTab | KeyCode::Up => ConnectMessage::PrevField,
        KeyCode::Enter => ConnectMessage::Submit,
        KeyCode::Backspace => ConnectMessage::Backspace,
        KeyCode::Char(' ') if app.connect.focus == ConnectField::Insecure => {
            ConnectMessage::ToggleInsecure
        }
        KeyCode::Char(c) if is_text(&key) => ConnectMessage::Input(c),
        _ => return AppMessage::Noop,
    };
    AppMessage::Connect(msg)
}

/// 捕获模式：按键全部交给当前模式
fn handle_capture_keys(key: KeyEvent, capture: &Capture) -> AppMessage {
    let msg = match key.code {
        KeyCode::Esc => CaptureMessage::Cancel,
        KeyCode::Enter => CaptureMessage::Commit,
        KeyCode::Backspace => CaptureMessage::Backspace,
        KeyCode::Char(c) if is_text(&key) => CaptureMessage::Input(c),
        // 过滤 / 搜索中 Tab 先提交再切换焦点；弹窗吞掉 Tab
        KeyCode::Tab if !capture.is_modal() => return AppMessage::FocusNext,
        KeyCode::BackTab if !capture.is_modal() => return AppMessage::FocusPrev,
        _ => return AppMessage::Noop,
    };
    AppMessage::Capture(msg)
}

/// Ctrl / Alt 组合键不是文本输入
fn is_text(key: &KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// 面板按键：同一按键按焦点面板解释
fn handle_panel_keys(key: KeyEvent, focus: FocusPanel) -> AppMessage {
    let msg = if any(&DefaultKeymap::NAV_UP, &key) {
        ContentMessage::SelectPrevious
    } else if any(&DefaultKeymap::NAV_DOWN, &key) {
        ContentMessage::SelectNext
    } else if any(&DefaultKeymap::NAV_TOP, &key) {
        ContentMessage::SelectFirst
    } else if any(&DefaultKeymap::NAV_BOTTOM, &key) {
        ContentMessage::SelectLast
    } else if DefaultKeymap::PAGE_UP.matches(&key) {
        ContentMessage::PageUp
    } else if DefaultKeymap::PAGE_DOWN.matches(&key) {
        ContentMessage::PageDown
    } else if DefaultKeymap::CONFIRM.matches(&key) {
        ContentMessage::Confirm
    } else if DefaultKeymap::REFRESH.matches(&key) {
        ContentMessage::Refresh
    } else if DefaultKeymap::DELETE.matches(&key) {
        ContentMessage::Delete
    } else if DefaultKeymap::BACK.matches(&key) {
        ContentMessage::ClearFind
    } else if DefaultKeymap::FIND.matches(&key) && !focus.is_consumers() {
        ContentMessage::OpenFind
    } else if focus.is_detail() && DefaultKeymap::NEXT_MATCH.matches(&key) {
        ContentMessage::NextMatch
    } else if focus.is_detail() && DefaultKeymap::PREV_MATCH.matches(&key) {
        ContentMessage::PrevMatch
    } else if focus.is_consumers() && DefaultKeymap::CREATE.matches(&key) {
        ContentMessage::Create
    } else {
        return AppMessage::Noop;
    };
    AppMessage::Content(msg)
}
