//! 主题和样式定义
//!
//! 所有颜色集中在一个不可变的 `Palette` 中，启动时构造一次，
//! 随 `App` 传入渲染层与着色函数。

use ratatui::style::{Color, Modifier, Style};

/// 调色板
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    pub border_focused: Color,
    pub selected_bg: Color,
    pub item: Color,
    pub badge: Color,

    // 结构化内容着色
    pub json_key: Color,
    pub json_string: Color,
    pub json_number: Color,
    pub json_bool: Color,
    pub json_null: Color,
    pub json_punct: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

impl Palette {
    /// 深色主题
    pub fn dark() -> Self {
        let muted = Color::Rgb(107, 114, 128);
        Self {
            primary: Color::Rgb(124, 58, 237),
            secondary: Color::Rgb(6, 182, 212),
            success: Color::Rgb(16, 185, 129),
            warning: Color::Rgb(245, 158, 11),
            error: Color::Rgb(239, 68, 68),
            muted,
            border_focused: Color::Rgb(59, 130, 246),
            selected_bg: Color::Rgb(30, 64, 175),
            item: Color::Rgb(229, 231, 235),
            badge: Color::Rgb(148, 163, 184),
            json_key: Color::Rgb(125, 211, 252),
            json_string: Color::Rgb(134, 239, 172),
            json_number: Color::Rgb(253, 230, 138),
            json_bool: Color::Rgb(196, 181, 253),
            json_null: muted,
            json_punct: Color::Rgb(148, 163, 184),
        }
    }

    /// 面板边框
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// 面板标题；未聚焦时使用普通文本颜色
    pub fn title(&self, focused: bool) -> Style {
        let color = if focused { self.primary } else { self.item };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// 选中项
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selected_bg)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// 普通列表项
    pub fn item(&self) -> Style {
        Style::default().fg(self.item)
    }

    /// 次要文本（占位符、空列表提示）
    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// 标题徽标（[WATCH]、视图模式）
    pub fn badge(&self) -> Style {
        Style::default().fg(self.badge)
    }

    pub fn watch_badge(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_ok(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn status_error(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// 快捷键提示样式
    pub fn hint_key(&self) -> Style {
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// 输入框文本
    pub fn input(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(self.item)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ANSI 着色
// ═══════════════════════════════════════════════════════════════════════════

/// 用 24 位前景色包裹文本，以 `ESC[39m` 复位前景
///
/// 非 RGB 颜色不着色。
pub fn paint(color: Color, text: &str) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[39m"),
        _ => text.to_string(),
    }
}

/// 粗体
pub fn bold(text: &str) -> String {
    format!("\x1b[1m{text}\x1b[22m")
}

/// 下划线
pub fn underline(text: &str) -> String {
    format!("\x1b[4m{text}\x1b[24m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_rgb() {
        assert_eq!(
            paint(Color::Rgb(1, 2, 3), "x"),
            "\x1b[38;2;1;2;3mx\x1b[39m"
        );
        assert_eq!(paint(Color::Reset, "x"), "x");
    }
}
