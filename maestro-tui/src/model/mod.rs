//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! Model 层独占全部 UI 与会话状态，只被 Update 层修改，被 View 层读取。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // App：应用主状态
//!         mod focus;          // Screen / FocusPanel
//!         mod layout;         // MainLayout：绘制与命中测试共用的几何布局
//!         pub mod state;      // 各面板与各模式的状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 状态机
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Screen::Connect ──(握手成功)──▶ Screen::Main
//!
//!     Screen::Main 内：
//!         焦点：Consumers ⇄ Work ⇄ Detail     （Tab / Shift+Tab 循环）
//!
//!         捕获模式（Option<Capture>，同一时刻至多一个）：
//!             Filtering             Work 面板按 / 进入
//!             Searching             详情面板按 / 进入
//!             CreatingConsumer      Consumer 面板按 n 进入
//!             ConfirmingDelete      按 d 进入
//!
//!         捕获期间全部按键交给捕获模式，Esc 取消、Enter 提交后恢复面板路由。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 状态一览
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     App {
//!         screen, session, focus, capture,
//!         connect:   ConnectState     连接表单
//!         consumers: ConsumersState   Consumer 列表 + 光标
//!         work:      WorkState        ManifestWork 列表 + 过滤 + 光标
//!         detail:    DetailState      当前详情 + 三种预渲染文本 + 搜索 + 滚动
//!         watch:     WatchState       watch 开关与防重叠标记
//!         status, loading, spinner_frame, area, palette
//!     }
//!

mod app;
mod focus;
mod layout;
pub mod state;

pub use app::{App, Session, StatusMessage, SPINNER_FRAMES, SPINNER_INTERVAL};
pub use focus::{FocusPanel, Screen};
pub use layout::{MainLayout, CONSUMERS_HEADER_ROWS, DETAIL_HEADER_ROWS, WORK_HEADER_ROWS};
