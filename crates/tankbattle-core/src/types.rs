//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Unique identifier of a tank or projectile within one simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// The player tank always owns the first identifier.
    pub const PLAYER: EntityId = EntityId(0);
}

/// Axis-aligned rectangle in arena units. `origin` is the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Open-interval overlap test: rectangles that only touch along an edge
    /// do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Whether the rectangle lies entirely inside `[0, extent]` on both axes.
    pub fn within_square(&self, extent: f32) -> bool {
        self.left() >= 0.0 && self.top() >= 0.0 && self.right() <= extent && self.bottom() <= extent
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in time units (milliseconds).
    pub elapsed_ms: u64,
}

impl SimTime {
    /// Advance by one tick of `tick_ms` time units.
    pub fn advance(&mut self, tick_ms: u64) {
        self.tick += 1;
        self.elapsed_ms += tick_ms;
    }
}

/// Top-left pixel position of a tank placed in the tile at (row, col).
pub fn tank_origin_for_tile(row: usize, col: usize) -> Vec2 {
    use crate::constants::{TANK_TILE_INSET, TILE_SIZE};
    Vec2::new(
        col as f32 * TILE_SIZE + TANK_TILE_INSET,
        row as f32 * TILE_SIZE + TANK_TILE_INSET,
    )
}
