//! Collision resolver: spatial queries for tank movement.
//!
//! Pure functions over the grid and a set of other tank rectangles. Projectile
//! motion has its own, more permissive rules in `systems::projectiles`.

use tankbattle_core::constants::ARENA_SIZE;
use tankbattle_core::grid::{tile_index, TileGrid};
use tankbattle_core::types::{EntityId, Rect};

/// Whether a tank occupying `rect` would be blocked.
///
/// Checked in order: arena bounds, movement-blocking tiles under the
/// rectangle, then overlap with any of `others` except `exclude`.
pub fn is_blocked(
    rect: &Rect,
    grid: &TileGrid,
    others: impl IntoIterator<Item = (EntityId, Rect)>,
    exclude: Option<EntityId>,
) -> bool {
    if !rect.within_square(ARENA_SIZE) {
        return true;
    }

    if covered_tiles(rect).any(|(row, col)| grid.tile_at(row, col).blocks_movement()) {
        return true;
    }

    others
        .into_iter()
        .filter(|(id, _)| Some(*id) != exclude)
        .any(|(_, other)| rect.overlaps(&other))
}

/// Tile coordinates (row, col) covered by `rect`, inclusive.
///
/// `rect` must lie inside the arena. The far edges are pulled in by one unit
/// so a rectangle ending exactly on a tile boundary does not claim the next
/// tile.
pub fn covered_tiles(rect: &Rect) -> impl Iterator<Item = (usize, usize)> {
    let first_col = tile_index(rect.left());
    let last_col = tile_index((rect.right() - 1.0).max(rect.left()));
    let first_row = tile_index(rect.top());
    let last_row = tile_index((rect.bottom() - 1.0).max(rect.top()));
    (first_row..=last_row).flat_map(move |row| (first_col..=last_col).map(move |col| (row, col)))
}
