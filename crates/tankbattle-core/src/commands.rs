//! Player commands sent from the input adapter to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::enums::{Direction, InputAction};

bitflags! {
    /// Set of input actions currently held down.
    ///
    /// `Copy`, so the engine reads a stable value once per tick.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct HeldKeys: u8 {
        const MOVE_UP = 1 << 0;
        const MOVE_DOWN = 1 << 1;
        const MOVE_LEFT = 1 << 2;
        const MOVE_RIGHT = 1 << 3;
        const FIRE = 1 << 4;
    }
}

impl HeldKeys {
    pub fn from_action(action: InputAction) -> Self {
        match action {
            InputAction::MoveUp => HeldKeys::MOVE_UP,
            InputAction::MoveDown => HeldKeys::MOVE_DOWN,
            InputAction::MoveLeft => HeldKeys::MOVE_LEFT,
            InputAction::MoveRight => HeldKeys::MOVE_RIGHT,
            InputAction::Fire => HeldKeys::FIRE,
        }
    }

    /// Movement direction to apply, resolving multiple held keys with
    /// priority Up > Down > Left > Right.
    pub fn movement(self) -> Option<Direction> {
        if self.contains(HeldKeys::MOVE_UP) {
            Some(Direction::Up)
        } else if self.contains(HeldKeys::MOVE_DOWN) {
            Some(Direction::Down)
        } else if self.contains(HeldKeys::MOVE_LEFT) {
            Some(Direction::Left)
        } else if self.contains(HeldKeys::MOVE_RIGHT) {
            Some(Direction::Right)
        } else {
            None
        }
    }

    pub fn firing(self) -> bool {
        self.contains(HeldKeys::FIRE)
    }
}

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// An action key went down.
    Press { action: InputAction },
    /// An action key went up.
    Release { action: InputAction },
    /// Drop every held key (focus loss).
    ReleaseAll,
}
