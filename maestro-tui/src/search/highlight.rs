//! 匹配高亮注入

use super::ansi::OffsetMap;

/// 当前匹配的背景色（绿）
pub const BG_CURRENT: &str = "\x1b[42m";
/// 其它匹配的背景色（黄）
pub const BG_MATCH: &str = "\x1b[43m";
/// 背景色复位，不影响前景色
pub const BG_RESET: &str = "\x1b[49m";

/// 一行内的一个高亮区间（纯文本字符坐标）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineHighlight {
    pub start: usize,
    pub end: usize,
    pub current: bool,
}

/// 在装饰过的单行中按纯文本区间注入背景色
///
/// 区间需按起点升序；起点落在前一个区间终点之前的区间会被跳过。
pub fn inject_highlights(line: &str, highlights: &[LineHighlight]) -> String {
    if highlights.is_empty() {
        return line.to_string();
    }

    let map = OffsetMap::build(line);
    let mut out = String::with_capacity(line.len() + highlights.len() * 10);
    let mut prev = 0;

    for hl in highlights {
        if hl.start >= map.plain_len() || hl.end <= hl.start {
            continue;
        }
        let range = map.byte_range(hl.start, hl.end);
        if range.start < prev {
            continue;
        }

        out.push_str(&line[prev..range.start]);
        out.push_str(if hl.current { BG_CURRENT } else { BG_MATCH });
        out.push_str(&line[range.clone()]);
        out.push_str(BG_RESET);
        prev = range.end;
    }

    out.push_str(&line[prev..]);
    out
}
