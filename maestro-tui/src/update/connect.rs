//! 连接表单消息处理

use super::begin_loading;
use crate::backend::Command;
use crate::message::ConnectMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: ConnectMessage, commands: &mut Vec<Command>) {
    match msg {
        ConnectMessage::Input(ch) => app.connect.input(ch),
        ConnectMessage::Backspace => app.connect.backspace(),
        ConnectMessage::NextField => app.connect.next_field(),
        ConnectMessage::PrevField => app.connect.prev_field(),
        ConnectMessage::ToggleInsecure => app.connect.toggle_insecure(),
        ConnectMessage::Submit => submit(app, commands),
    }
}

fn submit(app: &mut App, commands: &mut Vec<Command>) {
    // 握手进行中，忽略重复提交
    if app.loading {
        return;
    }
    if !app.connect.focus.submits() {
        app.connect.next_field();
        return;
    }

    match app.connect.to_config() {
        Ok(config) => {
            tracing::info!(endpoint = %config.http_endpoint, "Connecting");
            app.connect.error = None;
            begin_loading(app, commands);
            commands.push(Command::Connect(config));
        }
        Err(e) => {
            app.connect.error = Some(e.to_string());
        }
    }
}
