//! 捕获模式消息
//!
//! 过滤、搜索、新建弹窗与删除确认期间的全部按键

/// 捕获模式消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMessage {
    /// 输入字符
    Input(char),
    /// 删除一个字符
    Backspace,
    /// Enter：提交（过滤、搜索保留高亮、新建、确认删除）
    Commit,
    /// Esc：取消
    Cancel,
}
