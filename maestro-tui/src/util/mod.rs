//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化与恢复，以及按显示宽度对齐文本。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!         mod text;           // 显示宽度（unicode-width）
//!
//!
//!     初始化终端：
//!         enable_raw_mode()                   // 1. 原始模式：按键立即生效、不回显
//!         EnterAlternateScreen                // 2. 备用屏幕：退出后恢复原有内容
//!         EnableMouseCapture                  // 3. 鼠标点击与滚轮
//!
//!     恢复终端（逆序）：
//!         DisableMouseCapture → LeaveAlternateScreen → disable_raw_mode → show_cursor
//!
//!         注意：无论主循环是正常退出还是返回错误，都必须先恢复终端，
//!               否则 shell 会停留在原始模式。
//!

mod terminal;
mod text;

pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::{pad_right, truncate_to_width};
