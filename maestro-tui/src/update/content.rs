//! 面板消息处理
//!
//! 同一条消息按当前焦点面板解释：列表面板移动光标，详情面板滚动。

use super::{begin_loading, load_selected_detail, load_selected_work};
use crate::backend::Command;
use crate::message::{ContentMessage, DetailOrigin};
use crate::model::state::{Capture, DeleteTarget};
use crate::model::{App, FocusPanel};

pub fn update(app: &mut App, msg: ContentMessage, commands: &mut Vec<Command>) {
    // 面板之间共用的操作
    match msg {
        ContentMessage::ToggleWatch => {
            toggle_watch(app, commands);
            return;
        }
        ContentMessage::CycleView => {
            let rows = app.layout().detail_rows();
            app.detail.cycle_mode(rows);
            return;
        }
        ContentMessage::Copy => {
            copy(app, commands);
            return;
        }
        _ => {}
    }

    match app.focus {
        FocusPanel::Consumers => consumers(app, msg, commands),
        FocusPanel::Work => work(app, msg, commands),
        FocusPanel::Detail => detail(app, msg, commands),
    }
}

fn consumers(app: &mut App, msg: ContentMessage, commands: &mut Vec<Command>) {
    let rows = app.layout().consumer_rows();
    match msg {
        ContentMessage::SelectPrevious => app.consumers.select_previous(rows),
        ContentMessage::SelectNext => app.consumers.select_next(rows),
        ContentMessage::SelectFirst => app.consumers.select_first(rows),
        ContentMessage::SelectLast => app.consumers.select_last(rows),
        ContentMessage::Confirm => {
            if let Some(cmd) = load_selected_work(app) {
                app.work.clear();
                app.detail.clear();
                begin_loading(app, commands);
                commands.push(cmd);
            }
        }
        ContentMessage::Create => {
            if app.session.is_some() {
                app.capture = Some(Capture::CreatingConsumer {
                    name: String::new(),
                    error: None,
                });
            }
        }
        ContentMessage::Delete => {
            if let Some(consumer) = app.consumers.selected_consumer() {
                app.capture = Some(Capture::ConfirmingDelete(DeleteTarget::Consumer {
                    id: consumer.id.clone(),
                    name: consumer.name.clone(),
                }));
            }
        }
        ContentMessage::Refresh => {
            if let Some(client) = app.client() {
                begin_loading(app, commands);
                commands.push(Command::LoadConsumers { client });
            }
        }
        _ => {}
    }
}

fn work(app: &mut App, msg: ContentMessage, commands: &mut Vec<Command>) {
    let rows = app.layout().work_rows();
    let before = app.work.cursor.selected;
    match msg {
        ContentMessage::SelectPrevious => app.work.select_previous(rows),
        ContentMessage::SelectNext => app.work.select_next(rows),
        ContentMessage::SelectFirst => app.work.select_first(rows),
        ContentMessage::SelectLast => app.work.select_last(rows),
        ContentMessage::Confirm => {
            if let Some(cmd) = load_selected_detail(app, DetailOrigin::User) {
                begin_loading(app, commands);
                commands.push(cmd);
                app.focus = FocusPanel::Detail;
            }
            return;
        }
        ContentMessage::OpenFind => {
            app.capture = Some(Capture::Filtering);
            return;
        }
        ContentMessage::ClearFind => {
            if !app.work.filter.is_empty() {
                app.work.clear_filter();
                commands.extend(load_selected_detail(app, DetailOrigin::User));
            }
            return;
        }
        ContentMessage::Delete => {
            if let Some(work) = app.work.selected_work() {
                app.capture = Some(Capture::ConfirmingDelete(DeleteTarget::Work {
                    id: work.id.clone(),
                    name: work.name.clone(),
                }));
            }
            return;
        }
        ContentMessage::Refresh => {
            if let Some(cmd) = load_selected_work(app) {
                begin_loading(app, commands);
                commands.push(cmd);
            }
            return;
        }
        _ => return,
    }

    // 光标移动到新的一项时加载它的详情
    if app.work.cursor.selected != before {
        commands.extend(load_selected_detail(app, DetailOrigin::User));
    }
}

fn detail(app: &mut App, msg: ContentMessage, commands: &mut Vec<Command>) {
    let rows = app.layout().detail_rows();
    let page = isize::try_from(rows).unwrap_or(isize::MAX);
    match msg {
        ContentMessage::SelectPrevious => app.detail.scroll_by(-1, rows),
        ContentMessage::SelectNext => app.detail.scroll_by(1, rows),
        ContentMessage::PageUp => app.detail.scroll_by(-page, rows),
        ContentMessage::PageDown => app.detail.scroll_by(page, rows),
        ContentMessage::SelectFirst => app.detail.scroll_to_top(),
        ContentMessage::SelectLast => app.detail.scroll_to_bottom(rows),
        ContentMessage::OpenFind => {
            if app.detail.detail.is_some() {
                app.capture = Some(Capture::Searching);
            }
        }
        ContentMessage::NextMatch => app.detail.next_match(rows),
        ContentMessage::PrevMatch => app.detail.prev_match(rows),
        ContentMessage::ClearFind => app.detail.clear_search(rows),
        ContentMessage::Refresh => {
            let target = app.detail.detail.as_ref().map(|d| d.id.clone());
            if let (Some(client), Some(id)) = (app.client(), target) {
                begin_loading(app, commands);
                commands.push(Command::LoadDetail {
                    client,
                    id,
                    origin: DetailOrigin::User,
                });
            }
        }
        _ => {}
    }
}

fn toggle_watch(app: &mut App, commands: &mut Vec<Command>) {
    if app.watch.toggle() {
        commands.push(Command::ScheduleWatch);
    }
    tracing::debug!(enabled = app.watch.enabled, "Watch toggled");
    if app.watch.enabled {
        app.set_status("Watch mode ON");
    } else {
        app.set_status("Watch mode OFF");
    }
}

fn copy(app: &mut App, commands: &mut Vec<Command>) {
    match app.detail.clipboard_text() {
        Some(text) => commands.push(Command::CopyToClipboard(text)),
        None => app.set_error("Nothing to copy"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::message::AppMessage;
    use crate::model::StatusMessage;
    use crate::update::test_support::*;
    use crate::update::update as run;

    fn content(app: &mut App, msg: ContentMessage) -> Vec<Command> {
        run(app, AppMessage::Content(msg))
    }

    #[test]
    fn test_consumer_moves_do_not_load() {
        let mut app = connected_app();
        let cmds = content(&mut app, ContentMessage::SelectNext);
        assert!(cmds.is_empty());
        assert_eq!(app.consumers.cursor.selected, 1);

        let cmds = content(&mut app, ContentMessage::Confirm);
        assert!(app.work.items.is_empty());
        assert!(cmds
            .iter()
            .any(|c| matches!(c, Command::LoadWork { consumer, .. } if consumer == "agent2")));
    }

    #[test]
    fn test_work_move_loads_detail_without_spinner() {
        let mut app = connected_app();
        app.focus = FocusPanel::Work;
        let cmds = content(&mut app, ContentMessage::SelectNext);
        assert!(!app.loading);
        assert!(matches!(&cmds[..], [Command::LoadDetail { id, .. }] if id == "id-nginx-b"));

        // 已在第一项，上移不产生请求
        content(&mut app, ContentMessage::SelectFirst);
        assert!(content(&mut app, ContentMessage::SelectPrevious).is_empty());
    }

    #[test]
    fn test_work_enter_focuses_detail() {
        let mut app = connected_app();
        app.focus = FocusPanel::Work;
        let cmds = content(&mut app, ContentMessage::Confirm);
        assert_eq!(app.focus, FocusPanel::Detail);
        assert!(app.loading);
        assert_eq!(count(&cmds, |c| matches!(c, Command::LoadDetail { .. })), 1);
    }

    #[test]
    fn test_delete_opens_confirmation() {
        let mut app = connected_app();
        app.focus = FocusPanel::Work;
        content(&mut app, ContentMessage::Delete);
        assert_eq!(
            app.capture,
            Some(Capture::ConfirmingDelete(DeleteTarget::Work {
                id: "id-nginx-a".to_string(),
                name: "nginx-a".to_string(),
            }))
        );
    }

    #[test]
    fn test_copy_without_detail_is_an_error() {
        let mut app = connected_app();
        let cmds = content(&mut app, ContentMessage::Copy);
        assert!(cmds.is_empty());
        assert_eq!(app.status, Some(StatusMessage::Error("Nothing to copy".to_string())));

        detail_loaded(&mut app, "nginx-a", DetailOrigin::User);
        let cmds = content(&mut app, ContentMessage::Copy);
        assert!(matches!(&cmds[..], [Command::CopyToClipboard(text)] if text.contains("nginx-a")));
    }

    #[test]
    fn test_toggle_watch_status() {
        let mut app = connected_app();
        content(&mut app, ContentMessage::ToggleWatch);
        assert_eq!(app.status, Some(StatusMessage::Info("Watch mode ON".to_string())));
        let cmds = content(&mut app, ContentMessage::ToggleWatch);
        assert!(cmds.is_empty());
        assert_eq!(app.status, Some(StatusMessage::Info("Watch mode OFF".to_string())));
    }

    #[test]
    fn test_detail_scroll_and_refresh() {
        let mut app = connected_app();
        app.focus = FocusPanel::Detail;
        detail_loaded(&mut app, "nginx-a", DetailOrigin::User);

        content(&mut app, ContentMessage::SelectLast);
        let bottom = app.detail.scroll;
        content(&mut app, ContentMessage::SelectNext);
        assert_eq!(app.detail.scroll, bottom);

        let cmds = content(&mut app, ContentMessage::Refresh);
        assert!(cmds
            .iter()
            .any(|c| matches!(c, Command::LoadDetail { id, .. } if id == "id-nginx-a")));
    }
    #[test]
    fn test_detail_pages_by_viewport_height() {
        let mut app = connected_app();
        run(&mut app, AppMessage::Resize(100, 12));
        app.focus = FocusPanel::Detail;
        detail_loaded(&mut app, "nginx-a", DetailOrigin::User);
        let rows = app.layout().detail_rows();

        content(&mut app, ContentMessage::SelectLast);
        let bottom = app.detail.scroll;
        content(&mut app, ContentMessage::PageUp);
        assert_eq!(app.detail.scroll, bottom.saturating_sub(rows));

        content(&mut app, ContentMessage::SelectFirst);
        content(&mut app, ContentMessage::PageDown);
        assert_eq!(app.detail.scroll, rows.min(bottom));
        content(&mut app, ContentMessage::PageUp);
        assert_eq!(app.detail.scroll, 0);
    }
}
