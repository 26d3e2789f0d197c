//! Keyboard and gamepad bindings

use std::collections::HashSet;

use crate::sim::TickInput;

/// A physical key or gamepad button the host can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    KeyW,
    KeyS,
    KeyUp,
    KeyDown,
    KeyEnter,
    KeyEscape,
    Gamepad1Up,
    Gamepad1Down,
    Gamepad1Start,
    Gamepad2Up,
    Gamepad2Down,
    Gamepad2Start,
}

/// What a held control means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Confirm,
    Quit,
}

impl Action {
    /// Controls bound to this action, keyboard first
    pub fn bindings(&self) -> &'static [Control] {
        match self {
            Action::LeftUp => &[Control::KeyW, Control::Gamepad1Up],
            Action::LeftDown => &[Control::KeyS, Control::Gamepad1Down],
            Action::RightUp => &[Control::KeyUp, Control::Gamepad2Up],
            Action::RightDown => &[Control::KeyDown, Control::Gamepad2Down],
            Action::Confirm => &[
                Control::KeyEnter,
                Control::Gamepad1Start,
                Control::Gamepad2Start,
            ],
            Action::Quit => &[Control::KeyEscape],
        }
    }
}

/// Level-triggered control state supplied by the host
pub trait Controls {
    /// Whether `control` is currently held down
    fn is_held(&self, control: Control) -> bool;

    /// Whether any control bound to `action` is held
    fn action_held(&self, action: Action) -> bool {
        action.bindings().iter().any(|c| self.is_held(*c))
    }
}

/// Snapshot the held controls into a tick input
pub fn poll(controls: &impl Controls) -> TickInput {
    TickInput {
        left_up: controls.action_held(Action::LeftUp),
        left_down: controls.action_held(Action::LeftDown),
        right_up: controls.action_held(Action::RightUp),
        right_down: controls.action_held(Action::RightDown),
        confirm: controls.action_held(Action::Confirm),
    }
}

/// A plain set of held controls, for headless hosts and replays
#[derive(Debug, Clone, Default)]
pub struct HeldControls {
    held: HashSet<Control>,
}

impl HeldControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, control: Control) {
        self.held.insert(control);
    }

    pub fn release(&mut self, control: Control) {
        self.held.remove(&control);
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl FromIterator<Control> for HeldControls {
    fn from_iter<I: IntoIterator<Item = Control>>(iter: I) -> Self {
        Self {
            held: iter.into_iter().collect(),
        }
    }
}

impl Controls for HeldControls {
    fn is_held(&self, control: Control) -> bool {
        self.held.contains(&control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_nothing_held() {
        assert_eq!(poll(&HeldControls::new()), TickInput::default());
    }

    #[test]
    fn test_keyboard_and_gamepad_both_drive_paddles() {
        let controls: HeldControls = [Control::KeyW, Control::Gamepad2Down].into_iter().collect();
        let input = poll(&controls);
        assert!(input.left_up);
        assert!(input.right_down);
        assert!(!input.left_down);
        assert!(!input.right_up);
        assert!(!input.confirm);
    }

    #[test]
    fn test_simultaneous_presses_all_honored() {
        let controls: HeldControls = [
            Control::Gamepad1Up,
            Control::KeyS,
            Control::KeyUp,
            Control::KeyDown,
            Control::Gamepad2Start,
        ]
        .into_iter()
        .collect();
        let input = poll(&controls);
        assert!(input.left_up && input.left_down && input.right_up && input.right_down);
        assert!(input.confirm);
    }

    #[test]
    fn test_press_release() {
        let mut controls = HeldControls::new();
        controls.press(Control::KeyEscape);
        assert!(controls.action_held(Action::Quit));
        controls.release(Control::KeyEscape);
        assert!(!controls.action_held(Action::Quit));
        controls.press(Control::KeyEnter);
        controls.clear();
        assert!(!controls.action_held(Action::Confirm));
    }
}
