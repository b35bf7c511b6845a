//! Hotkey system - keyboard shortcuts management

use eframe::egui;
use std::collections::HashMap;

use super::prefs_events::HotkeyAction;

/// Hotkey handler for managing keyboard shortcuts
pub struct HotkeyHandler {
    bindings: HashMap<String, HotkeyAction>,
}

impl Default for HotkeyHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl HotkeyHandler {
    /// Create handler with the default bindings
    pub fn new() -> Self {
        let mut handler = Self {
            bindings: HashMap::new(),
        };
        handler.setup_default_bindings();
        handler
    }

    /// Handle key press
    pub fn handle_key(&self, key: &str) -> Option<HotkeyAction> {
        self.bindings.get(key).copied()
    }

    /// Handle key with modifiers
    pub fn handle_key_with_modifiers(
        &self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
    ) -> Option<HotkeyAction> {
        let mut key_combo = String::new();
        if ctrl {
            key_combo.push_str("Ctrl+");
        }
        if shift {
            key_combo.push_str("Shift+");
        }
        if alt {
            key_combo.push_str("Alt+");
        }
        key_combo.push_str(key);

        self.handle_key(&key_combo)
    }

    pub fn add_binding(&mut self, key: &str, action: HotkeyAction) {
        self.bindings.insert(key.to_string(), action);
    }

    /// Setup default hotkey bindings
    pub fn setup_default_bindings(&mut self) {
        use HotkeyAction::*;

        self.add_binding("F1", ToggleHelp);
        self.add_binding("F12", ToggleSettings);
        self.add_binding("PageUp", NextFrame);
        self.add_binding("PageDown", PrevFrame);
        self.add_binding("ArrowUp", NextLayer);
        self.add_binding("ArrowDown", PrevLayer);
        self.add_binding("C", ShowCube);
        self.add_binding("L", ShowLayer);
    }

    /// Collect actions for keys pressed this frame
    pub fn handle_input(&self, input: &egui::InputState) -> Vec<HotkeyAction> {
        let mut actions = Vec::new();
        // key_pressed events only, so held keys don't retrigger
        for event in &input.events {
            if let egui::Event::Key { key, pressed: true, repeat: false, modifiers, .. } = event {
                let key_str = format!("{:?}", key);
                let action = self
                    .handle_key_with_modifiers(&key_str, modifiers.ctrl, modifiers.shift, modifiers.alt)
                    .or_else(|| (!modifiers.any()).then(|| self.handle_key(&key_str)).flatten());
                if let Some(action) = action {
                    actions.push(action);
                }
            }
        }
        actions
    }
}
