//! Preferences/settings events.

#[derive(Clone, Debug)]
pub struct ResetSettingsEvent;

/// Hotkey actions, resolved from key presses by the input handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotkeyAction {
    ToggleHelp,
    ToggleSettings,
    NextFrame,
    PrevFrame,
    NextLayer,
    PrevLayer,
    ShowCube,
    ShowLayer,
}
