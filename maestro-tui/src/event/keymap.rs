//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键与 BackTab 忽略 SHIFT：它已经体现在 `code` 中。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = if matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab) {
            key.modifiers.difference(KeyModifiers::SHIFT)
        } else {
            key.modifiers
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 任一绑定匹配
pub fn any(bindings: &[KeyBinding], key: &KeyEvent) -> bool {
    bindings.iter().any(|b| b.matches(key))
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 面板切换
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const FOCUS_PREV: KeyBinding = KeyBinding::key(KeyCode::BackTab);

    // 导航
    pub const NAV_UP: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Up),
        KeyBinding::key(KeyCode::Char('k')),
    ];
    pub const NAV_DOWN: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Down),
        KeyBinding::key(KeyCode::Char('j')),
    ];
    pub const NAV_TOP: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Home),
        KeyBinding::key(KeyCode::Char('g')),
    ];
    pub const NAV_BOTTOM: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::End),
        KeyBinding::key(KeyCode::Char('G')),
    ];
    pub const PAGE_UP: KeyBinding = KeyBinding::key(KeyCode::PageUp);
    pub const PAGE_DOWN: KeyBinding = KeyBinding::key(KeyCode::PageDown);

    // 操作
    pub const CREATE: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
    pub const DELETE: KeyBinding = KeyBinding::key(KeyCode::Char('d'));
    pub const REFRESH: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const COPY: KeyBinding = KeyBinding::key(KeyCode::Char('y'));
    pub const WATCH: KeyBinding = KeyBinding::key(KeyCode::Char('w'));
    pub const CYCLE_VIEW: KeyBinding = KeyBinding::key(KeyCode::Char('v'));

    // 过滤 / 搜索
    pub const FIND: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const NEXT_MATCH: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
    pub const PREV_MATCH: KeyBinding = KeyBinding::key(KeyCode::Char('N'));

    // 连接表单
    pub const TOGGLE: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shifted_letters_match() {
        let upper = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert!(any(&DefaultKeymap::NAV_BOTTOM, &upper));
        assert!(DefaultKeymap::PREV_MATCH.matches(&KeyEvent::new(
            KeyCode::Char('N'),
            KeyModifiers::SHIFT
        )));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(DefaultKeymap::FORCE_QUIT.matches(&ctrl_c));
        assert!(!DefaultKeymap::QUIT.matches(&ctrl_c));
    }

    #[test]
    fn test_back_tab() {
        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert!(DefaultKeymap::FOCUS_PREV.matches(&back_tab));
        assert!(!DefaultKeymap::FOCUS_NEXT.matches(&back_tab));
    }
}
