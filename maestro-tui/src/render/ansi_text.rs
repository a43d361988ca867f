//! ANSI 文本 → ratatui `Text`
//!
//! 只解释 SGR（`ESC[...m`），其它 CSI 序列直接丢弃。
//! 样式在行与行之间延续。

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

use crate::search::ansi::{tokenize, Token};

/// 转换整段文本
pub fn to_text(decorated: &str) -> Text<'static> {
    let mut style = Style::default();
    let lines: Vec<Line<'static>> = decorated
        .split('\n')
        .map(|line| to_line(line, &mut style))
        .collect();
    Text::from(lines)
}

/// 转换单行，`style` 为行首样式，返回时更新为行尾样式
pub fn to_line(decorated: &str, style: &mut Style) -> Line<'static> {
    let mut spans = Vec::new();
    for token in tokenize(decorated) {
        match token {
            Token::Text(text) => spans.push(Span::styled(text.to_string(), *style)),
            Token::Csi {
                params,
                action: Some('m'),
            } => *style = apply_sgr(*style, params),
            Token::Csi { .. } => {}
        }
    }
    Line::from(spans)
}

/// 应用一个 SGR 参数串
fn apply_sgr(mut style: Style, params: &str) -> Style {
    let codes: Vec<u16> = params
        .split([';', ':'])
        .map(|p| p.parse().unwrap_or(0))
        .collect();

    let mut i = 0;
    while i < codes.len() {
        match codes[i] {
            0 => style = Style::default(),
            1 => style = style.add_modifier(Modifier::BOLD),
            2 => style = style.add_modifier(Modifier::DIM),
            3 => style = style.add_modifier(Modifier::ITALIC),
            4 => style = style.add_modifier(Modifier::UNDERLINED),
            7 => style = style.add_modifier(Modifier::REVERSED),
            22 => style = style.remove_modifier(Modifier::BOLD | Modifier::DIM),
            23 => style = style.remove_modifier(Modifier::ITALIC),
            24 => style = style.remove_modifier(Modifier::UNDERLINED),
            27 => style = style.remove_modifier(Modifier::REVERSED),
            c @ 30..=37 => style.fg = Some(basic_color(c - 30)),
            c @ 90..=97 => style.fg = Some(bright_color(c - 90)),
            39 => style.fg = None,
            c @ 40..=47 => style.bg = Some(basic_color(c - 40)),
            c @ 100..=107 => style.bg = Some(bright_color(c - 100)),
            49 => style.bg = None,
            38 | 48 => {
                let (color, used) = extended_color(&codes[i + 1..]);
                if let Some(color) = color {
                    if codes[i] == 38 {
                        style.fg = Some(color);
                    } else {
                        style.bg = Some(color);
                    }
                }
                i += used;
            }
            _ => {}
        }
        i += 1;
    }
    style
}

/// `5;n` 或 `2;r;g;b`，返回颜色与消耗的参数个数
fn extended_color(rest: &[u16]) -> (Option<Color>, usize) {
    match rest {
        [5, n, ..] => (u8::try_from(*n).ok().map(Color::Indexed), 2),
        [2, r, g, b, ..] => {
            let rgb = (u8::try_from(*r), u8::try_from(*g), u8::try_from(*b));
            match rgb {
                (Ok(r), Ok(g), Ok(b)) => (Some(Color::Rgb(r, g, b)), 4),
                _ => (None, 4),
            }
        }
        _ => (None, rest.len()),
    }
}

fn basic_color(n: u16) -> Color {
    match n {
        0 => Color::Black,
        1 => Color::Red,
        2 => Color::Green,
        3 => Color::Yellow,
        4 => Color::Blue,
        5 => Color::Magenta,
        6 => Color::Cyan,
        _ => Color::Gray,
    }
}

fn bright_color(n: u16) -> Color {
    match n {
        0 => Color::DarkGray,
        1 => Color::LightRed,
        2 => Color::LightGreen,
        3 => Color::LightYellow,
        4 => Color::LightBlue,
        5 => Color::LightMagenta,
        6 => Color::LightCyan,
        _ => Color::White,
    }
}
