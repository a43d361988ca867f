//! 焦点状态定义

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// 连接表单
    #[default]
    Connect,
    /// 三栏主界面
    Main,
}

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左上：Consumer 列表
    #[default]
    Consumers,
    /// 左下：ManifestWork 列表
    Work,
    /// 右侧：详情
    Detail,
}

impl FocusPanel {
    /// 下一个面板（循环）
    pub fn next(self) -> Self {
        match self {
            FocusPanel::Consumers => FocusPanel::Work,
            FocusPanel::Work => FocusPanel::Detail,
            FocusPanel::Detail => FocusPanel::Consumers,
        }
    }

    /// 上一个面板（循环）
    pub fn prev(self) -> Self {
        match self {
            FocusPanel::Consumers => FocusPanel::Detail,
            FocusPanel::Work => FocusPanel::Consumers,
            FocusPanel::Detail => FocusPanel::Work,
        }
    }

    pub fn is_consumers(self) -> bool {
        matches!(self, FocusPanel::Consumers)
    }

    pub fn is_work(self) -> bool {
        matches!(self, FocusPanel::Work)
    }

    pub fn is_detail(self) -> bool {
        matches!(self, FocusPanel::Detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        let start = FocusPanel::Consumers;
        assert_eq!(start.next().next().next(), start);
        assert_eq!(start.prev(), FocusPanel::Detail);
        assert_eq!(start.next().prev(), start);
    }
}
