//! 快捷键配置
//!
//! 定义可配置的快捷键映射（未来可支持用户自定义）

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

    /// 事件是否命中此绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.modifiers == key.modifiers && self.code == key.code
    }
}

/// 默认快捷键
pub struct DefaultKeymap;

impl DefaultKeymap {
    /// 退出
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    /// 强制退出
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    /// 清除状态消息
    pub const CLEAR_STATUS: KeyBinding = KeyBinding::key(KeyCode::Esc);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        let mut event = KeyEvent::new(code, modifiers);
        event.kind = KeyEventKind::Press;
        event
    }

    #[test]
    fn bindings_match_exact_modifier_combinations() {
        assert!(DefaultKeymap::QUIT.matches(&key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(!DefaultKeymap::QUIT.matches(&key(KeyCode::Char('q'), KeyModifiers::CONTROL)));
        assert!(DefaultKeymap::FORCE_QUIT.matches(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }
}
