//! Text render adapter: one character per tile.
//!
//! Pure consumer of `GameStateSnapshot`. Layers are drawn terrain first,
//! then projectiles, then tanks, and Bush last so it hides whatever is under
//! it.

use std::fmt::Write;

use glam::Vec2;

use tankbattle_core::constants::{ARENA_SIZE, GRID_SIZE};
use tankbattle_core::enums::{Direction, GameStatus, Tile};
use tankbattle_core::grid::tile_index;
use tankbattle_core::state::GameStateSnapshot;

fn tile_glyph(tile: Tile) -> char {
    match tile {
        Tile::Empty => '.',
        Tile::Brick => '#',
        Tile::Steel => '@',
        Tile::Water => '~',
        Tile::Bush => '%',
        Tile::Base => 'B',
    }
}

fn player_glyph(direction: Direction) -> char {
    match direction {
        Direction::Up => '^',
        Direction::Down => 'v',
        Direction::Left => '<',
        Direction::Right => '>',
    }
}

/// Cell holding the point `center`, or `None` outside the arena.
fn cell_of(center: Vec2) -> Option<(usize, usize)> {
    let inside = (0.0..ARENA_SIZE).contains(&center.x) && (0.0..ARENA_SIZE).contains(&center.y);
    inside.then(|| (tile_index(center.y), tile_index(center.x)))
}

/// Draw the arena as `GRID_SIZE` lines of glyphs.
pub fn render_arena(snapshot: &GameStateSnapshot) -> Vec<String> {
    let mut canvas: Vec<Vec<char>> = snapshot
        .grid
        .rows()
        .iter()
        .map(|row| row.iter().copied().map(tile_glyph).collect())
        .collect();

    let mut plot = |center: Vec2, glyph: char| {
        if let Some((row, col)) = cell_of(center) {
            canvas[row][col] = glyph;
        }
    };

    for projectile in &snapshot.projectiles {
        plot(projectile.position + projectile.size * 0.5, '*');
    }
    for enemy in &snapshot.enemies {
        plot(enemy.position + enemy.size * 0.5, 'E');
    }
    let player = &snapshot.player;
    if player.health > 0 {
        plot(player.position + player.size * 0.5, player_glyph(player.direction));
    }

    for (row, col, tile) in snapshot.grid.iter() {
        if tile == Tile::Bush {
            canvas[row][col] = tile_glyph(Tile::Bush);
        }
    }

    canvas
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect()
}

/// One-line heads-up display.
pub fn render_status(snapshot: &GameStateSnapshot) -> String {
    let status = match snapshot.status {
        GameStatus::Playing => "PLAYING",
        GameStatus::GameOver => "MISSION FAILED",
        GameStatus::Victory => "VICTORY",
    };
    format!(
        "LEVEL {}  SCORE {}  HP {}  ENEMIES {}/{}  {}",
        snapshot.level,
        snapshot.score,
        snapshot.player.health,
        snapshot.enemies_spawned,
        snapshot.enemy_quota,
        status
    )
}

/// Full frame: status line followed by the arena.
pub fn render_frame(snapshot: &GameStateSnapshot) -> String {
    let mut frame = String::with_capacity((GRID_SIZE + 1) * 48);
    let _ = writeln!(frame, "{}", render_status(snapshot));
    for line in render_arena(snapshot) {
        let _ = writeln!(frame, "{line}");
    }
    frame
}
