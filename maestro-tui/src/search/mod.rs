//!
//! src/search/mod.rs
//! 详情面板的内联搜索
//!
//!
//! 有模块结构：
//!     src/search/mod.rs
//!         mod ansi;           // 纯文本下标 ↔ 装饰字符串字节偏移
//!         mod highlight;      // 背景色注入
//!
//!         pub struct SearchState   // 查询词 + 匹配列表 + 当前匹配
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     详情内容（带前景色的 ANSI 文本）
//!         │
//!         │  逐行 strip_ansi()，按字符小写化
//!         ▼
//!     纯文本行 ──── 查询词 ────▶ SearchMatch { line, start, end }（字符坐标）
//!         │
//!         │  highlight_content()：OffsetMap 把字符坐标换回字节偏移
//!         ▼
//!     带背景高亮的 ANSI 文本 ───▶ view 层转换为 ratatui Line
//!
//!
//!     匹配在同一行内互不重叠（命中后从命中结尾继续查找），不跨行。
//!     当前匹配使用绿色背景，其余使用黄色背景，前景色保持不变。
//!
//!     查询词或内容变化时调用 rebuild()：
//!         - 重新计算全部匹配
//!         - 当前下标仍有效则保留，否则归零
//!

pub mod ansi;
pub mod highlight;

use ansi::strip_ansi;
use highlight::{inject_highlights, LineHighlight};

/// 一个匹配（纯文本字符坐标）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    /// 行号（从 0 开始）
    pub line: usize,
    /// 起始字符下标
    pub start: usize,
    /// 结束字符下标（不含）
    pub end: usize,
}

/// 搜索状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// 查询词（原样保留，用于显示）
    pub query: String,
    /// 全部匹配，按文档顺序
    matches: Vec<SearchMatch>,
    /// 当前匹配的绝对下标
    current: usize,
}

/// 按字符小写化，保证字符数不变
fn fold(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    pub fn matches(&self) -> &[SearchMatch] {
        &self.matches
    }

    pub fn current_index(&self) -> Option<usize> {
        (!self.matches.is_empty()).then_some(self.current)
    }

    pub fn current_match(&self) -> Option<&SearchMatch> {
        self.matches.get(self.current)
    }

    /// 清空查询词与匹配
    pub fn clear(&mut self) {
        self.query.clear();
        self.matches.clear();
        self.current = 0;
    }

    /// 根据当前查询词重新计算 `content` 中的匹配
    pub fn rebuild(&mut self, content: &str) {
        self.matches.clear();
        if self.query.is_empty() {
            self.current = 0;
            return;
        }

        let needle: Vec<char> = self.query.chars().map(fold).collect();
        for (line_idx, line) in content.split('\n').enumerate() {
            let hay: Vec<char> = strip_ansi(line).chars().map(fold).collect();
            let mut from = 0;
            while from + needle.len() <= hay.len() {
                if hay[from..from + needle.len()] == needle[..] {
                    self.matches.push(SearchMatch {
                        line: line_idx,
                        start: from,
                        end: from + needle.len(),
                    });
                    from += needle.len();
                } else {
                    from += 1;
                }
            }
        }

        if self.current >= self.matches.len() {
            self.current = 0;
        }
    }

    /// 下一个匹配（循环）
    pub fn next(&mut self) {
        if !self.matches.is_empty() {
            self.current = (self.current + 1) % self.matches.len();
        }
    }

    /// 上一个匹配（循环）
    pub fn prev(&mut self) {
        if !self.matches.is_empty() {
            self.current = (self.current + self.matches.len() - 1) % self.matches.len();
        }
    }

    /// 让当前匹配位于视口约 1/4 处的滚动偏移
    pub fn scroll_target(&self, viewport_height: usize) -> Option<usize> {
        self.current_match()
            .map(|m| m.line.saturating_sub(viewport_height / 4))
    }

    /// 把全部匹配注入为背景高亮
    pub fn highlight_content(&self, content: &str) -> String {
        if self.matches.is_empty() {
            return content.to_string();
        }

        let mut out = String::with_capacity(content.len() + self.matches.len() * 10);
        let mut cursor = 0;
        for (line_idx, line) in content.split('\n').enumerate() {
            if line_idx > 0 {
                out.push('\n');
            }

            let mut line_hl = Vec::new();
            while let Some(m) = self.matches.get(cursor) {
                if m.line != line_idx {
                    break;
                }
                line_hl.push(LineHighlight {
                    start: m.start,
                    end: m.end,
                    current: cursor == self.current,
                });
                cursor += 1;
            }
            out.push_str(&inject_highlights(line, &line_hl));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn search(query: &str, content: &str) -> SearchState {
        let mut state = SearchState::new();
        state.query = query.to_string();
        state.rebuild(content);
        state
    }

    const DOC: &str = "kind: Job\nname: pi\n\x1b[1mJob\x1b[22m restarts: JOB\nstatus: ok";

    #[test]
    fn test_job_matches_in_document_order() {
        let state = search("job", DOC);
        assert_eq!(
            state.matches(),
            &[
                SearchMatch { line: 0, start: 6, end: 9 },
                SearchMatch { line: 2, start: 0, end: 3 },
                SearchMatch { line: 2, start: 14, end: 17 },
            ]
        );
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn test_matches_do_not_overlap() {
        let state = search("aa", "aaaaa\naa");
        let spans: Vec<(usize, usize, usize)> =
            state.matches().iter().map(|m| (m.line, m.start, m.end)).collect();
        assert_eq!(spans, vec![(0, 0, 2), (0, 2, 4), (1, 0, 2)]);
    }

    #[test]
    fn test_segments_reconstruct_plain_line() {
        let line = "\x1b[38;2;1;2;3m\"name\"\x1b[39m: \"name-nAme\",";
        let state = search("name", line);
        let plain: Vec<char> = strip_ansi(line).chars().collect();

        let mut rebuilt = String::new();
        let mut prev = 0;
        for m in state.matches() {
            assert!(m.start >= prev);
            rebuilt.extend(&plain[prev..m.start]);
            rebuilt.extend(&plain[m.start..m.end]);
            prev = m.end;
        }
        rebuilt.extend(&plain[prev..]);
        assert_eq!(rebuilt, strip_ansi(line));
        assert_eq!(state.matches().len(), 3);
    }

    #[test]
    fn test_highlight_preserves_plain_text() {
        let state = search("job", DOC);
        let highlighted = state.highlight_content(DOC);
        assert_eq!(strip_ansi(&highlighted), strip_ansi(DOC));
        assert_eq!(highlighted.matches(highlight::BG_CURRENT).count(), 1);
        assert_eq!(highlighted.matches(highlight::BG_MATCH).count(), 2);
    }

    #[test]
    fn test_wrap_around_navigation() {
        let mut state = search("job", DOC);
        let n = state.matches().len();
        for _ in 0..n {
            state.next();
        }
        assert_eq!(state.current_index(), Some(0));

        state.prev();
        assert_eq!(state.current_index(), Some(n - 1));
    }

    #[test]
    fn test_navigation_without_matches_is_noop() {
        let mut state = search("zzz", DOC);
        state.next();
        state.prev();
        assert_eq!(state.current_index(), None);
        assert_eq!(state.scroll_target(20), None);
    }

    #[test]
    fn test_rebuild_resets_out_of_range_index() {
        let mut state = search("job", DOC);
        state.prev();
        assert_eq!(state.current_index(), Some(2));

        state.rebuild("only one job here");
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn test_scroll_target() {
        let content = (0..40).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let mut state = search("line 30", &content);
        assert_eq!(state.scroll_target(20), Some(25));

        state.query = "line 2".to_string();
        state.rebuild(&content);
        assert_eq!(state.scroll_target(20), Some(0));
    }

    #[test]
    fn test_empty_query_clears_matches() {
        let state = search("", DOC);
        assert!(state.matches().is_empty());
        assert_eq!(state.highlight_content(DOC), DOC);
    }
}
