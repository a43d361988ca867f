//! ANSI 偏移映射
//!
//! 把纯文本中的字符下标映射到带 CSI 转义序列的字符串中的字节偏移。

/// 转义序列起始字节
const ESC: u8 = 0x1b;

/// 扫描得到的片段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    /// 一个 CSI 转义序列（字节区间）
    Escape { start: usize, end: usize },
    /// 一个可见字符及其起始字节
    Char { start: usize, ch: char },
}

/// 从左到右扫描，跳过 `ESC [ <params> <final>` 序列
fn segments(decorated: &str) -> impl Iterator<Item = Segment> + '_ {
    let bytes = decorated.as_bytes();
    let mut i = 0;

    std::iter::from_fn(move || {
        if i >= bytes.len() {
            return None;
        }

        if bytes[i] == ESC && bytes.get(i + 1) == Some(&b'[') {
            let start = i;
            let mut j = i + 2;
            while j < bytes.len() && matches!(bytes[j], b'0'..=b'9' | b';' | b':' | b'?') {
                j += 1;
            }
            // 终止字节；未终止的序列一直吞到结尾
            if j < bytes.len() && (0x40..=0x7e).contains(&bytes[j]) {
                j += 1;
            }
            i = j;
            return Some(Segment::Escape { start, end: j });
        }

        let ch = decorated[i..].chars().next()?;
        let start = i;
        i += ch.len_utf8();
        Some(Segment::Char { start, ch })
    })
}

/// 纯文本字符下标 → 装饰字符串字节偏移
///
/// 末尾带一个等于装饰字符串长度的哨兵，
/// 所以 `[a, b)` 对应的切片是 `byte_offset(a)..byte_offset(b)`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetMap {
    offsets: Vec<usize>,
}

impl OffsetMap {
    /// 为装饰字符串建立映射
    pub fn build(decorated: &str) -> Self {
        let mut offsets: Vec<usize> = segments(decorated)
            .filter_map(|seg| match seg {
                Segment::Char { start, .. } => Some(start),
                Segment::Escape { .. } => None,
            })
            .collect();
        offsets.push(decorated.len());
        Self { offsets }
    }

    /// 纯文本字符数
    pub fn plain_len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// 第 `plain_idx` 个纯文本字符的起始字节，越界时返回哨兵
    pub fn byte_offset(&self, plain_idx: usize) -> usize {
        let idx = plain_idx.min(self.offsets.len() - 1);
        self.offsets[idx]
    }

    /// 纯文本区间 `[start, end)` 在装饰字符串中的字节区间
    pub fn byte_range(&self, start: usize, end: usize) -> std::ops::Range<usize> {
        self.byte_offset(start)..self.byte_offset(end.max(start))
    }
}

/// 去掉所有 CSI 转义序列
pub fn strip_ansi(decorated: &str) -> String {
    segments(decorated)
        .filter_map(|seg| match seg {
            Segment::Char { ch, .. } => Some(ch),
            Segment::Escape { .. } => None,
        })
        .collect()
}

/// 是否含有转义序列
pub fn has_escapes(decorated: &str) -> bool {
    segments(decorated).any(|seg| matches!(seg, Segment::Escape { .. }))
}

/// 按转义序列切分后的片段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// 连续的可见文本
    Text(&'a str),
    /// CSI 序列的参数与终止字节；未终止时 `action` 为 `None`
    Csi { params: &'a str, action: Option<char> },
}

/// 把装饰字符串切分为文本段与 CSI 序列
pub fn tokenize(decorated: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut text_start: Option<usize> = None;

    for seg in segments(decorated) {
        match seg {
            Segment::Char { start, .. } => {
                text_start.get_or_insert(start);
            }
            Segment::Escape { start, end } => {
                if let Some(from) = text_start.take() {
                    tokens.push(Token::Text(&decorated[from..start]));
                }
                let body = &decorated[start + 2..end];
                let action = body
                    .chars()
                    .last()
                    .filter(|c| ('\u{40}'..='\u{7e}').contains(c));
                let params = match action {
                    Some(c) => &body[..body.len() - c.len_utf8()],
                    None => body,
                };
                tokens.push(Token::Csi { params, action });
            }
        }
    }
    if let Some(from) = text_start {
        tokens.push(Token::Text(&decorated[from..]));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DECORATED: &str = "\x1b[38;2;125;211;252m\"kind\"\x1b[39m: \x1b[1mJob\x1b[22m ✓";

    #[test]
    fn test_plain_chars_are_mapped() {
        let map = OffsetMap::build(DECORATED);
        let plain = strip_ansi(DECORATED);
        assert_eq!(plain, "\"kind\": Job ✓");
        assert_eq!(map.plain_len(), plain.chars().count());
        assert_eq!(map.byte_offset(map.plain_len()), DECORATED.len());
    }

    #[test]
    fn test_slices_reproduce_plain_ranges() {
        let map = OffsetMap::build(DECORATED);
        let plain: Vec<char> = strip_ansi(DECORATED).chars().collect();

        for a in 0..=plain.len() {
            for b in a..=plain.len() {
                let slice = &DECORATED[map.byte_range(a, b)];
                let expected: String = plain[a..b].iter().collect();
                assert_eq!(strip_ansi(slice), expected, "range {a}..{b}");
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let map = OffsetMap::build("");
        assert_eq!(map.plain_len(), 0);
        assert_eq!(map.byte_offset(0), 0);
        assert_eq!(map.byte_offset(5), 0);
        assert_eq!(strip_ansi(""), "");
    }

    #[test]
    fn test_unterminated_escape_consumes_rest() {
        let s = "ab\x1b[38;2;1";
        let map = OffsetMap::build(s);
        assert_eq!(map.plain_len(), 2);
        assert_eq!(strip_ansi(s), "ab");
        assert_eq!(map.byte_offset(2), s.len());
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("a\x1b[1mbc\x1b[22m\x1b[38;2"),
            vec![
                Token::Text("a"),
                Token::Csi { params: "1", action: Some('m') },
                Token::Text("bc"),
                Token::Csi { params: "22", action: Some('m') },
                Token::Csi { params: "38;2", action: None },
            ]
        );
    }

    #[test]
    fn test_lone_escape_is_a_character() {
        let s = "a\x1bb";
        assert_eq!(strip_ansi(s), s);
        assert!(!has_escapes(s));
    }
}
