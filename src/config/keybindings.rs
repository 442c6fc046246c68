//! Keyboard bindings configuration.

use crate::model::{KeyAction, ModuleVariant};
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Direct module selection, in declaration order
        for (digit, variant) in ('1'..='9').zip(ModuleVariant::iter()) {
            bindings.insert(
                KeyEvent::new(KeyCode::Char(digit), KeyModifiers::NONE),
                KeyAction::SelectModule(variant),
            );
        }

        // Cycling
        bindings.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::NextModule,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::PrevModule,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            KeyAction::NextModule,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            KeyAction::PrevModule,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
            KeyAction::NextModule,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            KeyAction::PrevModule,
        );

        // Module controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE),
            KeyAction::FlipToggle,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyAction::FlipToggle,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE),
            KeyAction::ToggleSettings,
        );

        // Quit
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_select_modules_in_order() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char('1'))),
            Some(KeyAction::SelectModule(ModuleVariant::Globe))
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('2'))),
            Some(KeyAction::SelectModule(ModuleVariant::Orbit))
        );
        assert_eq!(
            bindings.get(key(KeyCode::Char('3'))),
            Some(KeyAction::SelectModule(ModuleVariant::Solar))
        );
    }

    #[test]
    fn digits_beyond_module_count_are_unbound() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('4'))), None);
    }

    #[test]
    fn tab_and_backtab_cycle() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Tab)), Some(KeyAction::NextModule));
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(KeyAction::PrevModule)
        );
    }

    #[test]
    fn space_and_t_flip_toggle() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char(' '))), Some(KeyAction::FlipToggle));
        assert_eq!(bindings.get(key(KeyCode::Char('t'))), Some(KeyAction::FlipToggle));
    }

    #[test]
    fn s_toggles_settings() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char('s'))),
            Some(KeyAction::ToggleSettings)
        );
    }

    #[test]
    fn quit_keys() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(bindings.get(key(KeyCode::Esc)), Some(KeyAction::Quit));
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn unbound_key_returns_none() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('z'))), None);
    }
}
