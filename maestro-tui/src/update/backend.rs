//! 合并异步命令的结果
//!
//! 结果按到达顺序应用，不检查它是否仍对应当前选中项。

use maestro_client::WorkDetail;

use super::{fail, load_selected_detail, load_selected_work};
use crate::backend::Command;
use crate::error::AppError;
use crate::message::{BackendMessage, DetailOrigin};
use crate::model::{App, FocusPanel, Screen, Session};
use crate::render::RenderedDetail;

pub fn update(app: &mut App, msg: BackendMessage, commands: &mut Vec<Command>) {
    match msg {
        BackendMessage::Connected(Ok((client, consumers))) => {
            app.loading = false;
            app.connect.error = None;
            app.screen = Screen::Main;
            app.session = Some(Session {
                client,
                endpoint: app.connect.endpoint.trim().to_string(),
            });
            app.set_status(format!("Connected: {} consumer(s)", consumers.len()));
            if consumers.len() == 1 {
                app.focus = FocusPanel::Work;
            }
            app.consumers.set_items(consumers);
            commands.extend(load_selected_work(app));
        }
        BackendMessage::Connected(Err(e)) => {
            tracing::warn!(error = %e, "Connect failed");
            app.loading = false;
            app.connect.error = Some(e.to_string());
        }

        BackendMessage::ConsumersLoaded(result) => match result {
            Ok(consumers) => {
                app.loading = false;
                app.consumers.set_items(consumers);
            }
            Err(e) => fail(app, &e),
        },

        BackendMessage::WorkLoaded { consumer, result } => match result {
            Ok(items) => {
                tracing::debug!(consumer = %consumer, count = items.len(), "Work loaded");
                app.loading = false;
                app.work.set_items(items);
                if let Some(cmd) = load_selected_detail(app, DetailOrigin::User) {
                    commands.push(cmd);
                }
            }
            Err(e) => fail(app, &e),
        },

        BackendMessage::DetailLoaded { origin, result } => {
            if origin == DetailOrigin::Watch {
                if app.watch.on_fetch_done() {
                    commands.push(Command::ScheduleWatch);
                }
            } else {
                app.loading = false;
            }
            match result.and_then(|work| apply_detail(app, work, origin)) {
                Ok(()) => {}
                Err(e) => fail(app, &e),
            }
        }

        BackendMessage::ConsumerCreated(result) => match result {
            Ok(consumer) => {
                app.set_status(format!("Consumer \"{}\" created", consumer.name));
                reload_consumers(app, commands);
            }
            Err(e) => fail(app, &e),
        },

        BackendMessage::ConsumerDeleted(result) => match result {
            Ok(()) => {
                app.set_status("Consumer deleted");
                app.work.clear();
                app.detail.clear();
                reload_consumers(app, commands);
            }
            Err(e) => fail(app, &e),
        },

        BackendMessage::WorkDeleted(result) => match result {
            Ok(()) => {
                app.set_status("ManifestWork deleted");
                app.detail.clear();
                match load_selected_work(app) {
                    Some(cmd) => commands.push(cmd),
                    None => app.loading = false,
                }
            }
            Err(e) => fail(app, &e),
        },

        BackendMessage::Copied(result) => match result {
            Ok(()) => app.set_status("Copied to clipboard!"),
            Err(e) => fail(app, &e),
        },
    }
}

/// 渲染三种视图并替换当前详情；watch 刷新保留滚动位置
fn apply_detail(app: &mut App, work: WorkDetail, origin: DetailOrigin) -> Result<(), AppError> {
    let rendered = RenderedDetail::build(&work, &app.palette)?;
    let rows = app.layout().detail_rows();
    app.detail
        .set_detail(work, rendered, origin == DetailOrigin::Watch, rows);
    Ok(())
}

fn reload_consumers(app: &mut App, commands: &mut Vec<Command>) {
    match app.client() {
        Some(client) => commands.push(Command::LoadConsumers { client }),
        None => app.loading = false,
    }
}
