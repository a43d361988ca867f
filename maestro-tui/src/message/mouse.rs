//! 鼠标消息（已完成命中测试）

use crate::model::FocusPanel;

/// 鼠标消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseMessage {
    /// 点中面板但没有点中列表项：只切换焦点
    Focus(FocusPanel),
    /// 点中 Consumer 列表的第 n 项（绝对下标）
    SelectConsumer(usize),
    /// 点中 Work 列表的第 n 项（绝对下标）
    SelectWork(usize),
    /// 滚轮
    Wheel { panel: FocusPanel, up: bool },
}
