//! 面板消息
//!
//! 没有捕获模式时，焦点面板上的操作

/// 面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 / 详情滚动 ==========
    /// 上一项（详情面板：上滚一行）
    SelectPrevious,
    /// 下一项（详情面板：下滚一行）
    SelectNext,
    /// 第一项（详情面板：顶部）
    SelectFirst,
    /// 最后一项（详情面板：底部）
    SelectLast,
    /// 详情面板翻页
    PageUp,
    PageDown,
    /// 确认选择
    Confirm,

    // ========== 增删刷 ==========
    /// 新建 Consumer
    Create,
    /// 删除当前选中项（先弹出确认）
    Delete,
    /// 重新加载当前面板
    Refresh,
    /// 复制当前详情到剪贴板
    Copy,

    // ========== 详情相关 ==========
    /// 打开过滤（Work 面板）或搜索（详情面板）
    OpenFind,
    /// 下一个 / 上一个匹配
    NextMatch,
    PrevMatch,
    /// 清除过滤或搜索
    ClearFind,
    /// 开关 watch
    ToggleWatch,
    /// 切换显示形式
    CycleView,
}
