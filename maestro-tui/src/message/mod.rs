//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 键盘、鼠标、定时器与异步命令的完成，全部被翻译成 AppMessage，
//! 排进同一条队列，由 Update 层逐条处理。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息
//!         mod connect;        // 连接表单
//!         mod content;        // 面板操作
//!         mod capture;        // 捕获模式（过滤 / 搜索 / 弹窗）
//!         mod mouse;          // 命中测试之后的鼠标消息
//!         mod backend;        // 异步命令完成
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 消息来源
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ┌──────────────┐
//!     │ 输入线程      │ ── Event ── handle_event() ──┐
//!     └──────────────┘                              │
//!     ┌──────────────┐                              ▼
//!     │ 定时器任务    │ ── SpinnerTick / WatchTick ──▶ mpsc 队列 ──▶ update()
//!     └──────────────┘                              ▲
//!     ┌──────────────┐                              │
//!     │ 命令任务      │ ── Backend(BackendMessage) ──┘
//!     └──────────────┘
//!
//!     命令任务从不直接修改状态，只发送一条完成消息。
//!     结果按到达顺序应用，过期的详情结果同样会被应用。
//!

mod app;
mod backend;
mod capture;
mod connect;
mod content;
mod mouse;

pub use app::AppMessage;
pub use backend::{BackendMessage, DetailOrigin};
pub use capture::CaptureMessage;
pub use connect::ConnectMessage;
pub use content::ContentMessage;
pub use mouse::MouseMessage;
