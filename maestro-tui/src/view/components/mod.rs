//! 可复用的界面组件

pub mod helpbar;
pub mod input;
pub mod modal;
