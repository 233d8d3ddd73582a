//! Simulation constants and tuning defaults.

// --- Arena ---

/// Number of tiles along each edge of the square grid.
pub const GRID_SIZE: usize = 13;

/// Edge length of one tile in arena units (pixels).
pub const TILE_SIZE: f32 = 40.0;

/// Edge length of the whole arena in arena units.
pub const ARENA_SIZE: f32 = GRID_SIZE as f32 * TILE_SIZE;

/// Fixed row of the Base tile.
pub const BASE_ROW: usize = 12;

/// Fixed column of the Base tile.
pub const BASE_COL: usize = 6;

// --- Timing ---

/// Nominal display refresh rate the loop is paced at (Hz).
pub const TICK_RATE: u32 = 60;

/// Simulation time units (milliseconds) that one tick advances by default.
pub const DEFAULT_TICK_MS: u64 = 16;

// --- Tanks ---

/// Edge length of a tank's square bounding box.
pub const TANK_SIZE: f32 = 36.0;

/// Offset of a freshly placed tank from its tile's top-left corner.
pub const TANK_TILE_INSET: f32 = (TILE_SIZE - TANK_SIZE) / 2.0;

/// Player movement per tick.
pub const PLAYER_SPEED: f32 = 3.0;

/// Enemy movement per tick.
pub const ENEMY_SPEED: f32 = 2.0;

/// Starting health of the player tank.
pub const PLAYER_HEALTH: u32 = 3;

/// Starting health of an enemy tank. One hit destroys it.
pub const ENEMY_HEALTH: u32 = 1;

/// Player start tile as (row, col).
pub const PLAYER_START_TILE: (usize, usize) = (12, 4);

/// Enemy spawn tiles as (row, col).
pub const ENEMY_SPAWN_TILES: [(usize, usize); 3] = [(0, 0), (0, 6), (0, 12)];

// --- Projectiles ---

/// Edge length of a projectile's square bounding box.
pub const PROJECTILE_SIZE: f32 = 8.0;

/// Projectile movement per tick.
pub const PROJECTILE_SPEED: f32 = 6.0;

// --- Cooldowns and timers (time units) ---

/// Minimum time between two player shots.
pub const PLAYER_SHOT_COOLDOWN_MS: u64 = 500;

/// An enemy may fire again only after strictly more than this time.
pub const ENEMY_SHOT_COOLDOWN_MS: u64 = 1500;

/// Minimum time between two enemy spawns.
pub const ENEMY_SPAWN_INTERVAL_MS: u64 = 3000;

// --- Enemy AI ---

/// Per-tick probability that an enemy picks a new random heading.
pub const ENEMY_TURN_CHANCE: f64 = 0.02;

/// Per-tick probability that an enemy off cooldown fires.
pub const ENEMY_FIRE_CHANCE: f64 = 0.05;

// --- Scoring ---

/// Points awarded to the player for each destroyed enemy.
pub const KILL_REWARD: u32 = 100;

// --- Missions ---

/// Fallback missions defend against `FALLBACK_BASE_QUOTA + level` enemies.
pub const FALLBACK_BASE_QUOTA: u32 = 4;

/// Row filled with the fallback barrier pattern.
pub const FALLBACK_BARRIER_ROW: usize = 5;
