// Maps raw key presses to the toy's command set. Pure classification; the
// window-close request is turned into Quit by the main loop itself.

use minifb::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleEmission,
    IncreaseLimit,
    DecreaseLimit,
    Clear,
}

/// Classify one key-down event. Unrecognized keys are ignored.
pub fn classify(key: Key) -> Option<Command> {
    match key {
        Key::Space => Some(Command::ToggleEmission),
        // '+' sits on the '=' key on most layouts; accept the numpad too
        Key::Equal | Key::NumPadPlus => Some(Command::IncreaseLimit),
        Key::Minus | Key::NumPadMinus => Some(Command::DecreaseLimit),
        Key::C => Some(Command::Clear),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotkeys_map_to_their_commands() {
        assert_eq!(classify(Key::Space), Some(Command::ToggleEmission));
        assert_eq!(classify(Key::Equal), Some(Command::IncreaseLimit));
        assert_eq!(classify(Key::NumPadPlus), Some(Command::IncreaseLimit));
        assert_eq!(classify(Key::Minus), Some(Command::DecreaseLimit));
        assert_eq!(classify(Key::NumPadMinus), Some(Command::DecreaseLimit));
        assert_eq!(classify(Key::C), Some(Command::Clear));
    }

    #[test]
    fn other_keys_are_ignored() {
        for key in [Key::A, Key::Enter, Key::Escape, Key::LeftShift, Key::Key1] {
            assert_eq!(classify(key), None);
        }
    }
}
