//!
//! src/view/mod.rs
//! View 层：只读地把 App 绘制到终端
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主界面：三面板 + 帮助栏
//!         mod components;     // 帮助栏、输入框、弹窗
//!         mod pages;          // 连接页与三个面板
//!         pub mod theme;      // 调色板与 ANSI 着色
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 主界面
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ┌ Consumers ─────┐┌ ManifestWork Detail [WATCH] [JSON] ⠋ ──────────┐
//!     │> agent1        ││Connected: 2 consumer(s)                        │
//!     │  agent2        ││/ nginx 1/3  [n] next  [N] prev ...             │
//!     └────────────────┘│{                                               │
//!     ┌ ManifestWorks ─┐│  "name": "nginx-a",                            │
//!     │[/] to filter   ││  ...                                           │
//!     │> nginx-a     ✓ ││                                                │
//!     └────────────────┘└────────────────────────────────────────────────┘
//!      [Tab] panel  [/] filter  [w] watch  ...  [Ctrl+C] quit
//!
//!     几何布局来自 MainLayout（与鼠标命中测试共用），
//!     面板内第一行是标题，列表从表头之后开始。
//!
//!     详情文本带 ANSI 转义，绘制前由 render::ansi_text 转为 ratatui Text，
//!     只取视口内的行。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::{App, Screen};

/// 渲染当前屏幕
pub fn render(app: &App, frame: &mut Frame) {
    match app.screen {
        Screen::Connect => pages::connect::render(app, frame),
        Screen::Main => layout::render(app, frame),
    }
}
