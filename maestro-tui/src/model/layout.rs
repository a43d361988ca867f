//! 主界面几何布局
//!
//! 绘制与鼠标命中测试共用同一个 `MainLayout`，两者不会出现偏差。
//!
//! ┌──────────────┬──────────────────────────┐
//! │ Consumers    │                          │
//! │ (40% 高)     │                          │
//! ├──────────────┤        Detail            │
//! │ ManifestWorks│                          │
//! │              │                          │
//! ├──────────────┴──────────────────────────┤
//! │ 帮助栏（1 行）                            │
//! └─────────────────────────────────────────┘
//!   ← 40% 宽 →

use ratatui::layout::Rect;

/// 左栏宽度占比
pub const LEFT_WIDTH_PERCENT: u32 = 40;
/// Consumer 区域占主体高度的比例
pub const CONSUMERS_HEIGHT_PERCENT: u32 = 40;

/// Consumer 面板表头：上边框 + 标题
pub const CONSUMERS_HEADER_ROWS: u16 = 2;
/// Work 面板表头：上边框 + 标题 + 过滤行
pub const WORK_HEADER_ROWS: u16 = 3;
/// 详情面板表头：上边框 + 标题 + 状态行 + 搜索行
pub const DETAIL_HEADER_ROWS: u16 = 4;

/// 主界面各区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub consumers: Rect,
    pub work: Rect,
    pub detail: Rect,
    pub help: Rect,
}

impl MainLayout {
    /// 按终端区域计算布局
    pub fn new(area: Rect) -> Self {
        let body_height = area.height.saturating_sub(1);
        let left_width = percent(area.width, LEFT_WIDTH_PERCENT);
        let consumers_height = percent(body_height, CONSUMERS_HEIGHT_PERCENT);

        Self {
            consumers: Rect::new(area.x, area.y, left_width, consumers_height),
            work: Rect::new(
                area.x,
                area.y + consumers_height,
                left_width,
                body_height - consumers_height,
            ),
            detail: Rect::new(
                area.x + left_width,
                area.y,
                area.width - left_width,
                body_height,
            ),
            help: Rect::new(area.x, area.y + body_height, area.width, area.height.min(1)),
        }
    }

    /// Consumer 列表可见行数（表头 + 下边框）
    pub fn consumer_rows(&self) -> usize {
        usize::from(self.consumers.height.saturating_sub(CONSUMERS_HEADER_ROWS + 1))
    }

    /// Work 列表可见行数
    pub fn work_rows(&self) -> usize {
        usize::from(self.work.height.saturating_sub(WORK_HEADER_ROWS + 1))
    }

    /// 详情视口行数
    pub fn detail_rows(&self) -> usize {
        usize::from(self.detail.height.saturating_sub(DETAIL_HEADER_ROWS + 1))
    }
}

/// 向下取整的百分比
fn percent(value: u16, pct: u32) -> u16 {
    u16::try_from(u32::from(value) * pct / 100).unwrap_or(value)
}
