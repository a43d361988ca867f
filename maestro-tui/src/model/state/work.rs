//! ManifestWork 面板状态

use maestro_client::WorkSummary;

use super::ListCursor;

/// ManifestWork 面板状态
#[derive(Debug, Default)]
pub struct WorkState {
    /// 当前 Consumer 的全部 ManifestWork
    pub items: Vec<WorkSummary>,
    /// 过滤文本（按名称，不区分大小写）
    pub filter: String,
    /// 光标与滚动偏移，作用于过滤后的列表
    pub cursor: ListCursor,
}

impl WorkState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置列表，光标回到顶部，过滤文本保留
    pub fn set_items(&mut self, items: Vec<WorkSummary>) {
        self.items = items;
        self.cursor.reset();
    }

    /// 清空列表（切换 Consumer 或删除 Consumer 时）
    pub fn clear(&mut self) {
        self.items.clear();
        self.cursor.reset();
    }

    /// 过滤后的可见列表
    pub fn visible(&self) -> Vec<&WorkSummary> {
        if self.filter.is_empty() {
            return self.items.iter().collect();
        }
        let needle = self.filter.to_lowercase();
        self.items
            .iter()
            .filter(|w| w.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible().len()
    }

    /// 获取当前选中的 ManifestWork
    pub fn selected_work(&self) -> Option<&WorkSummary> {
        self.visible().get(self.cursor.selected).copied()
    }

    // === 过滤 ===

    /// 追加过滤字符；任何改动都让光标与滚动回到顶部
    pub fn push_filter(&mut self, ch: char) {
        self.filter.push(ch);
        self.cursor.reset();
    }

    pub fn pop_filter(&mut self) {
        if self.filter.pop().is_some() {
            self.cursor.reset();
        }
    }

    /// 清除过滤，恢复完整列表并回到顶部
    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.cursor.reset();
    }

    // === 导航 ===

    pub fn select_previous(&mut self, rows: usize) {
        self.cursor.select_previous();
        self.cursor.ensure_visible(rows);
    }

    pub fn select_next(&mut self, rows: usize) {
        self.cursor.select_next(self.visible_len());
        self.cursor.ensure_visible(rows);
    }

    pub fn select_first(&mut self, rows: usize) {
        self.cursor.select_first();
        self.cursor.ensure_visible(rows);
    }

    pub fn select_last(&mut self, rows: usize) {
        self.cursor.select_last(self.visible_len());
        self.cursor.ensure_visible(rows);
    }
}
