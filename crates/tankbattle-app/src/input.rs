//! Input adapter: raw key codes to player commands.
//!
//! Key codes follow the DOM `KeyboardEvent.code` names. Unknown codes are
//! ignored.

use tankbattle_core::commands::{HeldKeys, PlayerCommand};
use tankbattle_core::enums::InputAction;

/// Logical action bound to a key code.
pub fn action_for_key(code: &str) -> Option<InputAction> {
    match code {
        "ArrowUp" | "KeyW" => Some(InputAction::MoveUp),
        "ArrowDown" | "KeyS" => Some(InputAction::MoveDown),
        "ArrowLeft" | "KeyA" => Some(InputAction::MoveLeft),
        "ArrowRight" | "KeyD" => Some(InputAction::MoveRight),
        "Space" => Some(InputAction::Fire),
        _ => None,
    }
}

/// Tracks held keys on the shell side so auto-repeat and duplicate events
/// never reach the simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputAdapter {
    held: HeldKeys,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> HeldKeys {
        self.held
    }

    /// A key went down. Returns a command only for a newly held action.
    pub fn key_down(&mut self, code: &str) -> Option<PlayerCommand> {
        let action = action_for_key(code)?;
        let flag = HeldKeys::from_action(action);
        if self.held.contains(flag) {
            return None;
        }
        self.held.insert(flag);
        Some(PlayerCommand::Press { action })
    }

    /// A key went up. Returns a command only if the action was held.
    pub fn key_up(&mut self, code: &str) -> Option<PlayerCommand> {
        let action = action_for_key(code)?;
        let flag = HeldKeys::from_action(action);
        if !self.held.contains(flag) {
            return None;
        }
        self.held.remove(flag);
        Some(PlayerCommand::Release { action })
    }

    /// Focus was lost; every key counts as released.
    pub fn release_all(&mut self) -> PlayerCommand {
        self.held = HeldKeys::empty();
        PlayerCommand::ReleaseAll
    }

    /// Apply one console line of whitespace-separated tokens: `+Code` presses,
    /// `-Code` releases, `!` releases everything.
    pub fn apply_line(&mut self, line: &str) -> Vec<PlayerCommand> {
        line.split_whitespace()
            .filter_map(|token| {
                if token == "!" {
                    Some(self.release_all())
                } else if let Some(code) = token.strip_prefix('+') {
                    self.key_down(code)
                } else if let Some(code) = token.strip_prefix('-') {
                    self.key_up(code)
                } else {
                    None
                }
            })
            .collect()
    }
}
