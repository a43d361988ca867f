//! 捕获模式消息处理（过滤、搜索、新建弹窗、删除确认）

use super::{begin_loading, load_selected_detail};
use crate::backend::Command;
use crate::message::{CaptureMessage, DetailOrigin};
use crate::model::state::{Capture, DeleteTarget};
use crate::model::App;

pub fn update(app: &mut App, msg: CaptureMessage, commands: &mut Vec<Command>) {
    let Some(capture) = app.capture.take() else {
        return;
    };

    // 返回 Some 表示捕获模式继续
    app.capture = match capture {
        Capture::Filtering => filtering(app, msg, commands),
        Capture::Searching => searching(app, msg),
        Capture::CreatingConsumer { name, error } => creating(app, name, error, msg, commands),
        Capture::ConfirmingDelete(target) => confirming(app, target, msg, commands),
    };
}

fn filtering(app: &mut App, msg: CaptureMessage, commands: &mut Vec<Command>) -> Option<Capture> {
    match msg {
        CaptureMessage::Input(ch) => {
            app.work.push_filter(ch);
            Some(Capture::Filtering)
        }
        CaptureMessage::Backspace => {
            app.work.pop_filter();
            Some(Capture::Filtering)
        }
        CaptureMessage::Commit => {
            commands.extend(load_selected_detail(app, DetailOrigin::User));
            None
        }
        CaptureMessage::Cancel => {
            app.work.clear_filter();
            // 清除过滤会把光标移回顶部，显示的详情需跟上新的选中项
            let shown = app.detail.detail.as_ref().map(|d| d.id.as_str());
            let selected = app.work.selected_work().map(|w| w.id.as_str());
            if selected.is_some() && selected != shown {
                commands.extend(load_selected_detail(app, DetailOrigin::User));
            }
            None
        }
    }
}

fn searching(app: &mut App, msg: CaptureMessage) -> Option<Capture> {
    let rows = app.layout().detail_rows();
    match msg {
        CaptureMessage::Input(ch) => {
            app.detail.push_query(ch, rows);
            Some(Capture::Searching)
        }
        CaptureMessage::Backspace => {
            app.detail.pop_query(rows);
            Some(Capture::Searching)
        }
        // 提交后保留查询与高亮，n / N 继续跳转
        CaptureMessage::Commit => None,
        CaptureMessage::Cancel => {
            app.detail.clear_search(rows);
            None
        }
    }
}

fn creating(
    app: &mut App,
    mut name: String,
    error: Option<String>,
    msg: CaptureMessage,
    commands: &mut Vec<Command>,
) -> Option<Capture> {
    match msg {
        CaptureMessage::Input(ch) => {
            name.push(ch);
            Some(Capture::CreatingConsumer { name, error: None })
        }
        CaptureMessage::Backspace => {
            name.pop();
            Some(Capture::CreatingConsumer { name, error })
        }
        CaptureMessage::Commit => {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Some(Capture::CreatingConsumer {
                    name,
                    error: Some("Name must not be empty".to_string()),
                });
            }
            if let Some(client) = app.client() {
                let name = trimmed.to_string();
                begin_loading(app, commands);
                commands.push(Command::CreateConsumer { client, name });
            }
            None
        }
        CaptureMessage::Cancel => None,
    }
}

fn confirming(
    app: &mut App,
    target: DeleteTarget,
    msg: CaptureMessage,
    commands: &mut Vec<Command>,
) -> Option<Capture> {
    match msg {
        CaptureMessage::Input('y' | 'Y') | CaptureMessage::Commit => {
            let Some(client) = app.client() else {
                return None;
            };
            tracing::info!(item = ?target, "Deleting");
            begin_loading(app, commands);
            commands.push(match target {
                DeleteTarget::Consumer { id, .. } => Command::DeleteConsumer { client, id },
                DeleteTarget::Work { id, .. } => Command::DeleteWork { client, id },
            });
            None
        }
        CaptureMessage::Input('n' | 'N') | CaptureMessage::Cancel => None,
        CaptureMessage::Input(_) | CaptureMessage::Backspace => {
            Some(Capture::ConfirmingDelete(target))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::message::{AppMessage, ContentMessage};
    use crate::model::FocusPanel;
    use crate::update::test_support::*;
    use crate::update::update as run;

    fn capture(app: &mut App, msg: CaptureMessage) -> Vec<Command> {
        run(app, AppMessage::Capture(msg))
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            capture(app, CaptureMessage::Input(ch));
        }
    }

    fn visible_names(app: &App) -> Vec<String> {
        app.work.visible().iter().map(|w| w.name.clone()).collect()
    }

    #[test]
    fn test_filter_narrows_and_cancel_restores() {
        let mut app = connected_app();
        app.focus = FocusPanel::Work;
        run(&mut app, AppMessage::Content(ContentMessage::OpenFind));
        type_text(&mut app, "NGINX");
        assert_eq!(visible_names(&app), vec!["nginx-a", "nginx-b"]);
        assert_eq!(app.work.cursor.selected, 0);

        capture(&mut app, CaptureMessage::Cancel);
        assert!(app.capture.is_none());
        assert_eq!(visible_names(&app).len(), 3);
    }

    #[test]
    fn test_filter_cancel_fetches_new_selection() {
        let mut app = connected_app();
        app.focus = FocusPanel::Work;
        app.work.cursor.selected = 2;
        detail_loaded(&mut app, "redis-1", DetailOrigin::User);

        run(&mut app, AppMessage::Content(ContentMessage::OpenFind));
        type_text(&mut app, "nginx");
        let cmds = capture(&mut app, CaptureMessage::Cancel);

        assert_eq!(
            app.work.selected_work().map(|w| w.name.as_str()),
            Some("nginx-a")
        );
        assert!(matches!(&cmds[..], [Command::LoadDetail { id, .. }] if id == "id-nginx-a"));
    }

    #[test]
    fn test_filter_cancel_on_shown_selection_does_not_refetch() {
        let mut app = connected_app();
        app.focus = FocusPanel::Work;
        detail_loaded(&mut app, "nginx-a", DetailOrigin::User);

        app.capture = Some(Capture::Filtering);
        type_text(&mut app, "nginx");
        let cmds = capture(&mut app, CaptureMessage::Cancel);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_filter_commit_loads_selection() {
        let mut app = connected_app();
        app.capture = Some(Capture::Filtering);
        type_text(&mut app, "redis");
        let cmds = capture(&mut app, CaptureMessage::Commit);
        assert!(app.capture.is_none());
        assert_eq!(app.work.filter, "redis");
        assert!(matches!(&cmds[..], [Command::LoadDetail { id, .. }] if id == "id-redis-1"));
    }

    #[test]
    fn test_search_commit_keeps_highlights() {
        let mut app = connected_app();
        detail_loaded(&mut app, "nginx-a", DetailOrigin::User);
        app.capture = Some(Capture::Searching);
        type_text(&mut app, "nginx");
        assert!(!app.detail.search.is_empty());

        capture(&mut app, CaptureMessage::Commit);
        assert!(app.capture.is_none());
        assert_eq!(app.detail.search.query, "nginx");
        assert!(!app.detail.search.is_empty());

        app.capture = Some(Capture::Searching);
        capture(&mut app, CaptureMessage::Cancel);
        assert!(app.detail.search.query.is_empty());
    }

    #[test]
    fn test_blank_consumer_name_keeps_modal_open() {
        let mut app = connected_app();
        app.capture = Some(Capture::CreatingConsumer {
            name: String::new(),
            error: None,
        });
        type_text(&mut app, "  ");
        let cmds = capture(&mut app, CaptureMessage::Commit);
        assert!(cmds.is_empty());
        assert!(matches!(
            &app.capture,
            Some(Capture::CreatingConsumer { error: Some(e), .. }) if e == "Name must not be empty"
        ));

        type_text(&mut app, "agent3 ");
        let cmds = capture(&mut app, CaptureMessage::Commit);
        assert!(app.capture.is_none());
        assert!(cmds
            .iter()
            .any(|c| matches!(c, Command::CreateConsumer { name, .. } if name == "agent3")));
    }

    #[test]
    fn test_confirm_delete() {
        let mut app = connected_app();
        let target = DeleteTarget::Consumer {
            id: "id-agent1".to_string(),
            name: "agent1".to_string(),
        };

        app.capture = Some(Capture::ConfirmingDelete(target.clone()));
        capture(&mut app, CaptureMessage::Input('x'));
        assert!(app.capture.is_some());
        let cmds = capture(&mut app, CaptureMessage::Input('n'));
        assert!(cmds.is_empty());
        assert!(app.capture.is_none());

        app.capture = Some(Capture::ConfirmingDelete(target));
        let cmds = capture(&mut app, CaptureMessage::Input('y'));
        assert!(cmds
            .iter()
            .any(|c| matches!(c, Command::DeleteConsumer { id, .. } if id == "id-agent1")));
    }
}
