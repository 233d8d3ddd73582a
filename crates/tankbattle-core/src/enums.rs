//! Enumeration types used throughout the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Terrain occupying one cell of the arena grid.
///
/// Serialises as the numeric code used by mission payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Tile {
    #[default]
    Empty,
    /// Destructible; becomes Empty when a projectile lands in it.
    Brick,
    /// Indestructible; stops tanks and projectiles.
    Steel,
    /// Stops tanks, lets projectiles pass.
    Water,
    /// Cosmetic cover drawn over tanks. No collision effect.
    Bush,
    /// The defended objective. Its destruction ends the run.
    Base,
}

impl Tile {
    /// Numeric payload code of this tile.
    pub fn code(self) -> u8 {
        match self {
            Tile::Empty => 0,
            Tile::Brick => 1,
            Tile::Steel => 2,
            Tile::Water => 3,
            Tile::Bush => 4,
            Tile::Base => 9,
        }
    }

    /// Parse a numeric payload code.
    pub fn from_code(code: u8) -> Option<Tile> {
        match code {
            0 => Some(Tile::Empty),
            1 => Some(Tile::Brick),
            2 => Some(Tile::Steel),
            3 => Some(Tile::Water),
            4 => Some(Tile::Bush),
            9 => Some(Tile::Base),
            _ => None,
        }
    }

    /// Whether a tank may not enter this tile.
    pub fn blocks_movement(self) -> bool {
        matches!(self, Tile::Brick | Tile::Steel | Tile::Water | Tile::Base)
    }

    /// Whether a projectile is absorbed by this tile without destroying it.
    /// Brick is not included: it absorbs the projectile and is destroyed.
    pub fn blocks_projectile(self) -> bool {
        matches!(self, Tile::Steel | Tile::Base)
    }
}

impl TryFrom<u8> for Tile {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Tile::from_code(code).ok_or_else(|| format!("unknown tile code {code}"))
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.code()
    }
}

/// Cardinal heading of a tank or projectile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step in arena coordinates (y grows downward).
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Distinguishes the single player tank from AI-controlled enemies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TankRole {
    #[default]
    Player,
    Enemy,
}

/// Top-level status of a running mission.
///
/// `GameOver` and `Victory` are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    GameOver,
    Victory,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Logical input actions the player can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Fire,
}
