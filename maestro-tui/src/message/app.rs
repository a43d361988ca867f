//! 应用主消息枚举

use super::{BackendMessage, CaptureMessage, ConnectMessage, ContentMessage, MouseMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 下一个 / 上一个焦点面板
    FocusNext,
    FocusPrev,

    /// 连接表单消息
    Connect(ConnectMessage),

    /// 面板消息
    Content(ContentMessage),

    /// 捕获模式消息
    Capture(CaptureMessage),

    /// 鼠标消息
    Mouse(MouseMessage),

    /// 异步命令完成
    Backend(BackendMessage),

    /// 加载动画帧
    SpinnerTick,

    /// watch 定时器
    WatchTick,

    /// 终端尺寸变化
    Resize(u16, u16),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
