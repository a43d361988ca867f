//! 各页面与面板

pub mod connect;
pub mod consumers;
pub mod detail;
pub mod work;
