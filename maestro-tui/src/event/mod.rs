//!
//! src/event/mod.rs
//! Event 层：把终端原始事件翻译为 AppMessage
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 按键路由：连接页 / 捕获模式 / 全局 / 面板
//!         mod keymap;         // 默认快捷键
//!         mod mouse;          // 鼠标命中测试
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 按键路由顺序
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Ctrl+C                      → Quit（任何状态）
//!     Screen::Connect             → ConnectMessage
//!     app.capture = Some(..)      → CaptureMessage（q、n 等都是普通字符）
//!     q / Tab / w / v / y         → 全局
//!     其它                         → ContentMessage，按焦点面板解释
//!
//!     鼠标只在主界面、且没有捕获模式时响应。
//!

mod handler;
mod keymap;
mod mouse;

pub use handler::{handle_event, poll_event};
