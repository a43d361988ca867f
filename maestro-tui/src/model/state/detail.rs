//! 详情面板状态

use maestro_client::WorkDetail;

use crate::render::RenderedDetail;
use crate::search::ansi::strip_ansi;
use crate::search::SearchState;

/// 详情的显示形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// 格式化摘要
    #[default]
    Formatted,
    /// JSON
    Structured,
    /// YAML
    Mapping,
}

impl ViewMode {
    /// 下一个显示形式（循环）
    pub fn next(self) -> Self {
        match self {
            ViewMode::Formatted => ViewMode::Structured,
            ViewMode::Structured => ViewMode::Mapping,
            ViewMode::Mapping => ViewMode::Formatted,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Formatted => "Formatted",
            ViewMode::Structured => "JSON",
            ViewMode::Mapping => "YAML",
        }
    }
}

/// 详情面板状态
#[derive(Debug, Default)]
pub struct DetailState {
    /// 当前详情（至多一个）
    pub detail: Option<WorkDetail>,
    /// 三种预渲染文本
    rendered: RenderedDetail,
    /// 当前显示形式
    pub mode: ViewMode,
    /// 内联搜索
    pub search: SearchState,
    /// 当前显示的文本（含搜索高亮）
    display: String,
    /// 显示文本的行数
    line_count: usize,
    /// 视口首行
    pub scroll: usize,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前形式的未高亮文本
    pub fn content(&self) -> &str {
        if self.detail.is_none() {
            return "";
        }
        match self.mode {
            ViewMode::Formatted => &self.rendered.formatted,
            ViewMode::Structured => &self.rendered.json_colored,
            ViewMode::Mapping => &self.rendered.yaml_colored,
        }
    }

    /// 视图层绘制的文本
    pub fn display(&self) -> &str {
        &self.display
    }

    #[cfg(test)]
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// 替换当前详情
    ///
    /// `keep_scroll` 为真时（watch 刷新）保留滚动位置，否则回到顶部；
    /// 有活动查询时按新内容重建匹配并滚动到当前匹配。
    pub fn set_detail(
        &mut self,
        detail: WorkDetail,
        rendered: RenderedDetail,
        keep_scroll: bool,
        rows: usize,
    ) {
        self.detail = Some(detail);
        self.rendered = rendered;
        if !keep_scroll {
            self.scroll = 0;
        }
        self.refresh(rows, !keep_scroll);
    }

    /// 清空详情（切换 Consumer、删除后）
    pub fn clear(&mut self) {
        self.detail = None;
        self.rendered = RenderedDetail::default();
        self.scroll = 0;
        self.refresh(0, false);
    }

    /// 切换显示形式，沿用缓存文本并重新应用搜索
    pub fn cycle_mode(&mut self, rows: usize) {
        self.mode = self.mode.next();
        self.scroll = 0;
        self.refresh(rows, true);
    }

    /// 重建匹配与显示文本
    fn refresh(&mut self, rows: usize, follow_match: bool) {
        let content = self.content().to_string();
        self.search.rebuild(&content);
        self.display = self.search.highlight_content(&content);
        self.line_count = if self.display.is_empty() {
            0
        } else {
            self.display.split('\n').count()
        };

        if follow_match {
            if let Some(target) = self.search.scroll_target(rows) {
                self.scroll = target;
            }
        }
        self.clamp_scroll(rows);
    }

    // === 搜索 ===

    /// 修改查询词（逐字输入）
    pub fn set_query(&mut self, query: String, rows: usize) {
        self.search.query = query;
        self.refresh(rows, true);
    }

    pub fn push_query(&mut self, ch: char, rows: usize) {
        let mut query = std::mem::take(&mut self.search.query);
        query.push(ch);
        self.set_query(query, rows);
    }

    pub fn pop_query(&mut self, rows: usize) {
        let mut query = std::mem::take(&mut self.search.query);
        query.pop();
        self.set_query(query, rows);
    }

    pub fn next_match(&mut self, rows: usize) {
        self.search.next();
        self.refresh(rows, true);
    }

    pub fn prev_match(&mut self, rows: usize) {
        self.search.prev();
        self.refresh(rows, true);
    }

    /// 清除搜索与高亮
    pub fn clear_search(&mut self, rows: usize) {
        self.search.clear();
        self.refresh(rows, false);
    }

    // === 滚动 ===

    fn max_scroll(&self, rows: usize) -> usize {
        self.line_count.saturating_sub(rows)
    }

    fn clamp_scroll(&mut self, rows: usize) {
        self.scroll = self.scroll.min(self.max_scroll(rows));
    }

    /// 按行滚动，限制在有效范围内
    pub fn scroll_by(&mut self, delta: isize, rows: usize) {
        self.scroll = self.scroll.saturating_add_signed(delta);
        self.clamp_scroll(rows);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self, rows: usize) {
        self.scroll = self.max_scroll(rows);
    }

    // === 剪贴板 ===

    /// 导出文本：JSON/YAML 为未着色的规范序列化，Formatted 去掉全部转义
    pub fn clipboard_text(&self) -> Option<String> {
        self.detail.as_ref()?;
        Some(match self.mode {
            ViewMode::Formatted => strip_ansi(&self.rendered.formatted),
            ViewMode::Structured => self.rendered.json.clone(),
            ViewMode::Mapping => self.rendered.yaml.clone(),
        })
    }
}
