//! JSON 着色
//!
//! 逐行处理 `serde_json::to_string_pretty` 的输出，不重新解析。

use crate::view::theme::{paint, Palette};

/// 为整段 JSON 文本着色
pub fn colorize_json(text: &str, palette: &Palette) -> String {
    text.lines()
        .map(|line| colorize_json_line(line, palette))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 为单行着色：缩进 + 键 + 冒号 + 值
pub fn colorize_json_line(line: &str, palette: &Palette) -> String {
    let trimmed = line.trim_start_matches([' ', '\t']);
    let indent = &line[..line.len() - trimmed.len()];

    if let Some(end) = closing_quote(trimmed) {
        if let Some(value) = trimmed[end + 1..].strip_prefix(':') {
            let key = &trimmed[..=end];
            return format!(
                "{indent}{}{}{}",
                paint(palette.json_key, key),
                paint(palette.json_punct, ":"),
                colorize_value(value, palette)
            );
        }
    }

    format!("{indent}{}", colorize_value(trimmed, palette))
}

/// 字符串字面量的结束引号下标（跳过转义）
fn closing_quote(s: &str) -> Option<usize> {
    if !s.starts_with('"') {
        return None;
    }
    let mut escaped = false;
    for (i, b) in s.bytes().enumerate().skip(1) {
        match b {
            _ if escaped => escaped = false,
            b'\\' => escaped = true,
            b'"' => return Some(i),
            _ => {}
        }
    }
    None
}

/// 值：保留一个前导空格，末尾逗号按标点着色
fn colorize_value(value: &str, palette: &Palette) -> String {
    let (lead, value) = match value.strip_prefix(' ') {
        Some(rest) => (" ", rest),
        None => ("", value),
    };
    let (value, comma) = match value.strip_suffix(',') {
        Some(rest) => (rest, true),
        None => (value, false),
    };

    let color = match value {
        "" => None,
        "true" | "false" => Some(palette.json_bool),
        "null" => Some(palette.json_null),
        v if v.starts_with('"') => Some(palette.json_string),
        v if v.starts_with(['{', '}', '[', ']']) => Some(palette.json_punct),
        v if v.starts_with('-') || v.starts_with(|c: char| c.is_ascii_digit()) => {
            Some(palette.json_number)
        }
        _ => None,
    };

    let mut out = String::from(lead);
    match color {
        Some(color) => out.push_str(&paint(color, value)),
        None => out.push_str(value),
    }
    if comma {
        out.push_str(&paint(palette.json_punct, ","));
    }
    out
}
