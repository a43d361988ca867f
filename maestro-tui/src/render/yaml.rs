//! YAML 着色
//!
//! 逐行处理 `serde_yaml::to_string` 的输出。

use crate::view::theme::{paint, Palette};

/// 为整段 YAML 文本着色
pub fn colorize_yaml(text: &str, palette: &Palette) -> String {
    text.lines()
        .map(|line| colorize_yaml_line(line, palette))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 为单行着色
pub fn colorize_yaml_line(line: &str, palette: &Palette) -> String {
    let trimmed = line.trim_start_matches(' ');
    let indent = &line[..line.len() - trimmed.len()];

    // 文档分隔符
    if trimmed == "---" || trimmed == "..." {
        return format!("{indent}{}", paint(palette.json_punct, trimmed));
    }

    // 序列项
    let (dash, body) = if let Some(rest) = trimmed.strip_prefix("- ") {
        (paint(palette.json_punct, "- "), rest)
    } else if trimmed == "-" {
        return format!("{indent}{}", paint(palette.json_punct, "-"));
    } else {
        (String::new(), trimmed)
    };

    format!("{indent}{dash}{}", colorize_entry(body, palette))
}

/// `key: value`、`key:` 或纯值
fn colorize_entry(body: &str, palette: &Palette) -> String {
    if let Some((key, value)) = body.split_once(": ") {
        if !key.starts_with(['"', '\'']) {
            return format!(
                "{}{}{}",
                paint(palette.json_key, key),
                paint(palette.json_punct, ": "),
                colorize_scalar(value, palette)
            );
        }
    }

    if let Some(key) = body.strip_suffix(':') {
        if !key.contains(':') && !key.is_empty() {
            return format!(
                "{}{}",
                paint(palette.json_key, key),
                paint(palette.json_punct, ":")
            );
        }
    }

    colorize_scalar(body, palette)
}

fn colorize_scalar(value: &str, palette: &Palette) -> String {
    let color = match value {
        "" => return String::new(),
        "true" | "false" | "True" | "False" | "TRUE" | "FALSE" | "yes" | "no" => palette.json_bool,
        "null" | "~" | "Null" | "NULL" => palette.json_null,
        v if v.starts_with(['"', '\'']) => palette.json_string,
        v if v.starts_with('-') || v.starts_with(|c: char| c.is_ascii_digit()) => {
            palette.json_number
        }
        _ => palette.json_string,
    };
    paint(color, value)
}
