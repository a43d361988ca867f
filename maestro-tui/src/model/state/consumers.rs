//! Consumer 面板状态

use maestro_client::Consumer;

use super::ListCursor;

/// Consumer 面板状态
#[derive(Debug, Default)]
pub struct ConsumersState {
    /// Consumer 列表（整体刷新，不做增量修改）
    pub items: Vec<Consumer>,
    /// 光标与滚动偏移
    pub cursor: ListCursor,
}

impl ConsumersState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置 Consumer 列表，光标回到顶部
    pub fn set_items(&mut self, items: Vec<Consumer>) {
        self.items = items;
        self.cursor.reset();
    }

    /// 获取当前选中的 Consumer
    pub fn selected_consumer(&self) -> Option<&Consumer> {
        self.items.get(self.cursor.selected)
    }

    pub fn select_previous(&mut self, rows: usize) {
        self.cursor.select_previous();
        self.cursor.ensure_visible(rows);
    }

    pub fn select_next(&mut self, rows: usize) {
        self.cursor.select_next(self.items.len());
        self.cursor.ensure_visible(rows);
    }

    pub fn select_first(&mut self, rows: usize) {
        self.cursor.select_first();
        self.cursor.ensure_visible(rows);
    }

    pub fn select_last(&mut self, rows: usize) {
        self.cursor.select_last(self.items.len());
        self.cursor.ensure_visible(rows);
    }
}
