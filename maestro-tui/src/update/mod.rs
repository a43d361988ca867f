//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//! 需要 I/O 的操作不在这里执行，而是以 Command 描述返回给主循环。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod connect;        // 连接表单
//!         mod content;        // 面板操作
//!         mod capture;        // 过滤 / 搜索 / 弹窗
//!         mod mouse;          // 鼠标
//!         mod backend;        // 合并异步命令的结果
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command> {...}
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一轮更新
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     AppMessage ──▶ update() ──┬──▶ 修改 App
//!                               └──▶ Vec<Command> ──▶ Executor（事件循环之外）
//!
//!     失败语义：
//!         任何命令失败都只清除 loading，并把错误写入唯一的状态行，
//!         其它状态保持不变，事件循环继续运行。
//!
//!     加载动画：
//!         begin_loading() 置位 loading，并保证同一时刻只排期一个 SpinnerTick。
//!
//!     Watch：
//!         WatchTick 交给 WatchState::on_tick() 判定，
//!         watch 发起的详情结果应用之后才排期下一次 tick。
//!

mod backend;
mod capture;
mod connect;
mod content;
mod mouse;

use ratatui::layout::Rect;

use crate::backend::Command;
use crate::error::AppError;
use crate::message::{AppMessage, CaptureMessage, DetailOrigin};
use crate::model::state::{Capture, WatchAction};
use crate::model::{App, Screen};

/// 处理应用消息，更新状态，返回需要执行的命令
pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command> {
    let mut commands = Vec::new();

    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }
        AppMessage::FocusNext | AppMessage::FocusPrev => {
            if app.screen != Screen::Main || app.capture.as_ref().is_some_and(Capture::is_modal) {
                return commands;
            }
            // 过滤 / 搜索中切换焦点等同于提交
            if app.capture.is_some() {
                capture::update(app, CaptureMessage::Commit, &mut commands);
            }
            app.focus = if matches!(msg, AppMessage::FocusNext) {
                app.focus.next()
            } else {
                app.focus.prev()
            };
        }
        AppMessage::Connect(connect_msg) => {
            connect::update(app, connect_msg, &mut commands);
        }
        AppMessage::Content(content_msg) => {
            content::update(app, content_msg, &mut commands);
        }
        AppMessage::Capture(capture_msg) => {
            capture::update(app, capture_msg, &mut commands);
        }
        AppMessage::Mouse(mouse_msg) => {
            mouse::update(app, mouse_msg, &mut commands);
        }
        AppMessage::Backend(backend_msg) => {
            backend::update(app, backend_msg, &mut commands);
        }
        AppMessage::SpinnerTick => {
            app.spinner_pending = false;
            if app.loading {
                app.spinner_frame = app.spinner_frame.wrapping_add(1);
                app.spinner_pending = true;
                commands.push(Command::ScheduleSpinner);
            }
        }
        AppMessage::WatchTick => {
            on_watch_tick(app, &mut commands);
        }
        AppMessage::Resize(width, height) => {
            resize(app, width, height);
        }
        AppMessage::Noop => {}
    }

    commands
}

/// 开始加载：置位 loading，必要时排期加载动画
fn begin_loading(app: &mut App, commands: &mut Vec<Command>) {
    app.loading = true;
    if !app.spinner_pending {
        app.spinner_pending = true;
        commands.push(Command::ScheduleSpinner);
    }
}

/// 命令失败：清除 loading，错误写入状态行
fn fail(app: &mut App, error: &AppError) {
    if error.is_expected() {
        tracing::warn!(error = %error, "Command failed");
    } else {
        tracing::error!(error = %error, "Command failed");
    }
    app.loading = false;
    app.set_error(format!("Error: {error}"));
}

/// 为当前选中的 ManifestWork 生成详情请求
fn load_selected_detail(app: &App, origin: DetailOrigin) -> Option<Command> {
    let client = app.client()?;
    let work = app.work.selected_work()?;
    Some(Command::LoadDetail {
        client,
        id: work.id.clone(),
        origin,
    })
}

/// 为当前选中的 Consumer 生成 ManifestWork 列表请求
fn load_selected_work(app: &App) -> Option<Command> {
    let client = app.client()?;
    let consumer = app.consumers.selected_consumer()?;
    Some(Command::LoadWork {
        client,
        consumer: consumer.name.clone(),
    })
}

fn on_watch_tick(app: &mut App, commands: &mut Vec<Command>) {
    let request = load_selected_detail(app, DetailOrigin::Watch);
    match app.watch.on_tick(request.is_some()) {
        WatchAction::Fetch => commands.extend(request),
        WatchAction::Reschedule => commands.push(Command::ScheduleWatch),
        WatchAction::Idle => {}
    }
}

fn resize(app: &mut App, width: u16, height: u16) {
    app.area = Rect::new(0, 0, width, height);
    let layout = app.layout();
    app.consumers.cursor.ensure_visible(layout.consumer_rows());
    app.work.cursor.ensure_visible(layout.work_rows());
    app.detail.scroll_by(0, layout.detail_rows());
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::message::{ContentMessage, MouseMessage};
    use crate::model::FocusPanel;

    fn is_watch_fetch(c: &Command) -> bool {
        matches!(
            c,
            Command::LoadDetail {
                origin: DetailOrigin::Watch,
                ..
            }
        )
    }

    #[test]
    fn test_watch_ticks_do_not_overlap() {
        let mut app = connected_app();
        app.focus = FocusPanel::Work;

        let cmds = update(&mut app, AppMessage::Content(ContentMessage::ToggleWatch));
        assert_eq!(count(&cmds, |c| matches!(c, Command::ScheduleWatch)), 1);

        let first = update(&mut app, AppMessage::WatchTick);
        let second = update(&mut app, AppMessage::WatchTick);
        assert_eq!(count(&first, is_watch_fetch), 1);
        assert_eq!(count(&first, |c| matches!(c, Command::ScheduleWatch)), 0);
        assert!(second.is_empty());

        // 结果应用后才排期下一次 tick
        let applied = detail_loaded(&mut app, "nginx-a", DetailOrigin::Watch);
        assert_eq!(count(&applied, |c| matches!(c, Command::ScheduleWatch)), 1);
        assert_eq!(app.detail.detail.as_ref().map(|d| d.name.as_str()), Some("nginx-a"));
    }

    #[test]
    fn test_watch_failure_still_reschedules() {
        let mut app = connected_app();
        app.focus = FocusPanel::Work;
        update(&mut app, AppMessage::Content(ContentMessage::ToggleWatch));
        update(&mut app, AppMessage::WatchTick);

        let cmds = update(
            &mut app,
            AppMessage::Backend(crate::message::BackendMessage::DetailLoaded {
                origin: DetailOrigin::Watch,
                result: Err(AppError::Validation("boom".to_string())),
            }),
        );
        assert_eq!(count(&cmds, |c| matches!(c, Command::ScheduleWatch)), 1);
        assert!(matches!(app.status, Some(crate::model::StatusMessage::Error(_))));
    }

    #[test]
    fn test_watch_off_applies_in_flight_result_without_rescheduling() {
        let mut app = connected_app();
        app.focus = FocusPanel::Work;
        update(&mut app, AppMessage::Content(ContentMessage::ToggleWatch));
        update(&mut app, AppMessage::WatchTick);
        update(&mut app, AppMessage::Content(ContentMessage::ToggleWatch));

        let cmds = detail_loaded(&mut app, "nginx-a", DetailOrigin::Watch);
        assert!(cmds.is_empty());
        assert!(app.detail.detail.is_some());
    }

    #[test]
    fn test_spinner_runs_only_while_loading() {
        let mut app = connected_app();
        let cmds = update(&mut app, AppMessage::Content(ContentMessage::Refresh));
        assert_eq!(count(&cmds, |c| matches!(c, Command::ScheduleSpinner)), 1);

        // 再次开始加载不会排期第二个 tick
        let again = update(&mut app, AppMessage::Content(ContentMessage::Refresh));
        assert_eq!(count(&again, |c| matches!(c, Command::ScheduleSpinner)), 0);

        let tick = update(&mut app, AppMessage::SpinnerTick);
        assert_eq!(app.spinner_frame, 1);
        assert_eq!(count(&tick, |c| matches!(c, Command::ScheduleSpinner)), 1);

        app.loading = false;
        assert!(update(&mut app, AppMessage::SpinnerTick).is_empty());
    }

    #[test]
    fn test_focus_cycles_and_commits_filter() {
        let mut app = connected_app();
        app.focus = FocusPanel::Work;
        app.capture = Some(Capture::Filtering);
        app.work.push_filter('r');

        let cmds = update(&mut app, AppMessage::FocusNext);
        assert_eq!(app.focus, FocusPanel::Detail);
        assert!(app.capture.is_none());
        assert_eq!(app.work.filter, "r");
        assert_eq!(count(&cmds, |c| matches!(c, Command::LoadDetail { .. })), 1);

        update(&mut app, AppMessage::FocusPrev);
        assert_eq!(app.focus, FocusPanel::Work);
    }

    #[test]
    fn test_modal_swallows_focus_change() {
        let mut app = connected_app();
        app.capture = Some(Capture::CreatingConsumer {
            name: String::new(),
            error: None,
        });
        update(&mut app, AppMessage::FocusNext);
        assert_eq!(app.focus, FocusPanel::Consumers);
    }

    #[test]
    fn test_resize_keeps_cursor_visible() {
        let mut app = connected_app();
        app.consumers.set_items((0..30).map(|i| consumer(&format!("c{i}"))).collect());
        app.consumers.select_last(13);
        assert_eq!(app.consumers.cursor.offset, 17);

        update(&mut app, AppMessage::Resize(100, 81));
        assert!(app.consumers.cursor.offset <= 29);
        update(&mut app, AppMessage::Mouse(MouseMessage::Focus(FocusPanel::Detail)));
        assert_eq!(app.focus, FocusPanel::Detail);
    }
}
