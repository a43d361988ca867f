//! 各面板与各模式的状态

mod capture;
mod connect;
mod consumers;
mod detail;
mod list;
mod watch;
mod work;

pub use capture::{Capture, DeleteTarget};
pub use connect::{ConnectField, ConnectState};
pub use consumers::ConsumersState;
pub use detail::{DetailState, ViewMode};
pub use list::ListCursor;
pub use watch::{WatchAction, WatchState, WATCH_INTERVAL};
pub use work::WorkState;
