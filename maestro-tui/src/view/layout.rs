//! 主界面布局渲染

use ratatui::Frame;

use super::components;
use super::pages;
use crate::model::App;

/// 渲染主界面：三个面板 + 帮助栏 + 弹窗
pub fn render(app: &App, frame: &mut Frame) {
    let layout = app.layout();

    pages::consumers::render(app, frame, layout.consumers);
    pages::work::render(app, frame, layout.work);
    pages::detail::render(app, frame, layout.detail);
    components::helpbar::render(app, frame, layout.help);

    // 弹窗在最上层
    components::modal::render(app, frame);
}
