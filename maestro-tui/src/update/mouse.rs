//! 鼠标消息处理

use super::{begin_loading, load_selected_detail, load_selected_work};
use crate::backend::Command;
use crate::message::{DetailOrigin, MouseMessage};
use crate::model::{App, FocusPanel};

/// 详情面板每格滚轮滚动的行数
const WHEEL_LINES: isize = 3;

pub fn update(app: &mut App, msg: MouseMessage, commands: &mut Vec<Command>) {
    let layout = app.layout();
    match msg {
        MouseMessage::Focus(panel) => app.focus = panel,
        MouseMessage::SelectConsumer(index) => {
            app.focus = FocusPanel::Consumers;
            if app.consumers.cursor.select(index, app.consumers.items.len()) {
                app.consumers.cursor.ensure_visible(layout.consumer_rows());
                if let Some(cmd) = load_selected_work(app) {
                    app.work.clear();
                    app.detail.clear();
                    begin_loading(app, commands);
                    commands.push(cmd);
                }
            }
        }
        MouseMessage::SelectWork(index) => {
            app.focus = FocusPanel::Work;
            if app.work.cursor.select(index, app.work.visible_len()) {
                app.work.cursor.ensure_visible(layout.work_rows());
                if let Some(cmd) = load_selected_detail(app, DetailOrigin::User) {
                    begin_loading(app, commands);
                    commands.push(cmd);
                }
            }
        }
        MouseMessage::Wheel { panel, up } => match panel {
            FocusPanel::Consumers => {
                if up {
                    app.consumers.select_previous(layout.consumer_rows());
                } else {
                    app.consumers.select_next(layout.consumer_rows());
                }
            }
            FocusPanel::Work => {
                let before = app.work.cursor.selected;
                if up {
                    app.work.select_previous(layout.work_rows());
                } else {
                    app.work.select_next(layout.work_rows());
                }
                if app.work.cursor.selected != before {
                    commands.extend(load_selected_detail(app, DetailOrigin::User));
                }
            }
            FocusPanel::Detail => {
                let delta = if up { -WHEEL_LINES } else { WHEEL_LINES };
                app.detail.scroll_by(delta, layout.detail_rows());
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::message::AppMessage;
    use crate::update::test_support::*;
    use crate::update::update as run;

    fn mouse(app: &mut App, msg: MouseMessage) -> Vec<Command> {
        run(app, AppMessage::Mouse(msg))
    }

    #[test]
    fn test_click_consumer_loads_work() {
        let mut app = connected_app();
        let cmds = mouse(&mut app, MouseMessage::SelectConsumer(1));
        assert_eq!(app.consumers.cursor.selected, 1);
        assert!(app.loading);
        assert!(app.work.items.is_empty());
        assert!(cmds
            .iter()
            .any(|c| matches!(c, Command::LoadWork { consumer, .. } if consumer == "agent2")));
    }

    #[test]
    fn test_click_past_end_only_focuses() {
        let mut app = connected_app();
        let cmds = mouse(&mut app, MouseMessage::SelectWork(9));
        assert_eq!(app.focus, FocusPanel::Work);
        assert_eq!(app.work.cursor.selected, 0);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_click_work_loads_detail() {
        let mut app = connected_app();
        let cmds = mouse(&mut app, MouseMessage::SelectWork(2));
        assert!(cmds
            .iter()
            .any(|c| matches!(c, Command::LoadDetail { id, .. } if id == "id-redis-1")));
    }

    #[test]
    fn test_wheel() {
        let mut app = connected_app();
        let cmds = mouse(
            &mut app,
            MouseMessage::Wheel {
                panel: FocusPanel::Consumers,
                up: false,
            },
        );
        assert!(cmds.is_empty());
        assert_eq!(app.consumers.cursor.selected, 1);

        let cmds = mouse(
            &mut app,
            MouseMessage::Wheel {
                panel: FocusPanel::Work,
                up: false,
            },
        );
        assert_eq!(count(&cmds, |c| matches!(c, Command::LoadDetail { .. })), 1);
        assert!(!app.loading);
    }
}
