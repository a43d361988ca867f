//! 列表光标与滚动偏移

/// 列表光标
///
/// `offset` 是第一条可见项的下标，由 `ensure_visible` 维护，
/// 命中测试用它把屏幕行换算成绝对下标。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    pub selected: usize,
    pub offset: usize,
}

impl ListCursor {
    /// 回到顶部
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// 直接选择某项（越界时忽略）
    pub fn select(&mut self, index: usize, len: usize) -> bool {
        if index < len {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// 调整偏移使光标处于 `rows` 行的视口内
    pub fn ensure_visible(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + rows {
            self.offset = self.selected + 1 - rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let mut cursor = ListCursor::default();
        cursor.select_previous();
        assert_eq!(cursor.selected, 0);

        cursor.select_next(2);
        cursor.select_next(2);
        assert_eq!(cursor.selected, 1);

        cursor.select_next(0);
        assert_eq!(cursor.selected, 1);

        cursor.select_last(5);
        assert_eq!(cursor.selected, 4);
        assert!(!cursor.select(9, 5));
        assert_eq!(cursor.selected, 4);
    }

    #[test]
    fn test_ensure_visible_scrolls_both_ways() {
        let mut cursor = ListCursor::default();
        cursor.select_last(10);
        cursor.ensure_visible(4);
        assert_eq!(cursor.offset, 6);

        cursor.select_first();
        cursor.ensure_visible(4);
        assert_eq!(cursor.offset, 0);
    }
}
