//! 连接表单消息

/// 连接表单消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectMessage {
    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
    /// 下一个字段
    NextField,
    /// 上一个字段
    PrevField,
    /// 切换跳过 TLS 校验
    ToggleInsecure,
    /// Enter：在 token 或按钮上连接，其它字段前进
    Submit,
}
