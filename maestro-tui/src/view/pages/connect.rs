//! 连接页

use ratatui::{
    style::Modifier,
    text::{Line, Span},
    Frame,
};

use crate::model::state::{ConnectField, ConnectState};
use crate::model::App;
use crate::view::components::{input, modal};

/// Token 输入框的占位符
const TOKEN_PLACEHOLDER: &str = "Bearer token (optional)";

/// 渲染连接表单
pub fn render(app: &App, frame: &mut Frame) {
    let palette = &app.palette;
    let form = &app.connect;

    let label = |text: &'static str| Span::styled(text, palette.dim().add_modifier(Modifier::BOLD));

    let mut endpoint = vec![label("HTTP Endpoint: ")];
    endpoint.extend(input::spans(
        &form.endpoint,
        ConnectState::endpoint_placeholder(),
        form.focus == ConnectField::Endpoint,
        false,
        palette,
    ));

    let mut token = vec![label("Token:         ")];
    token.extend(input::spans(
        &form.token,
        TOKEN_PLACEHOLDER,
        form.focus == ConnectField::Token,
        true,
        palette,
    ));

    let checkbox = if form.insecure { "[x] Skip TLS" } else { "[ ] Skip TLS" };
    let button_style = if form.focus == ConnectField::Button {
        palette.selected()
    } else {
        palette.badge().add_modifier(Modifier::REVERSED)
    };

    let mut button = vec![Span::styled("  Connect  ", button_style)];
    if app.loading {
        button.push(Span::styled(format!(" {}", app.spinner()), palette.badge()));
    }

    let mut lines = vec![
        Line::styled("Connect to Maestro", palette.title(true)),
        Line::default(),
        Line::from(endpoint),
        Line::from(token),
        Line::default(),
        Line::styled(checkbox, palette.input(form.focus == ConnectField::Insecure)),
        Line::default(),
        Line::from(button),
    ];
    if let Some(error) = &form.error {
        lines.push(Line::styled(format!("Error: {error}"), palette.status_error()));
    }
    lines.push(Line::default());
    lines.push(Line::styled(
        "[Tab] next  [Enter] connect  [Ctrl+C] quit",
        palette.hint_desc(),
    ));

    modal::render_box(frame, palette, lines, 60);
}
