//! Tests for the simulation engine: tick ordering, hits, spawning and terminal status.

use glam::Vec2;
use proptest::prelude::*;

use tankbattle_core::commands::{HeldKeys, PlayerCommand};
use tankbattle_core::components::{Body, Projectile};
use tankbattle_core::constants::*;
use tankbattle_core::enums::*;
use tankbattle_core::events::GameEvent;
use tankbattle_core::grid::TileGrid;
use tankbattle_core::mission::Mission;
use tankbattle_core::state::GameStateSnapshot;
use tankbattle_core::types::{tank_origin_for_tile, EntityId};

use crate::collision;
use crate::config::Tuning;
use crate::engine::{SimConfig, SimulationEngine};
use crate::random::ScriptedRandom;
use crate::world::World;
use crate::world_setup;

fn mission(grid: TileGrid, enemy_count: u32) -> Mission {
    Mission {
        name: "Test Operation".into(),
        description: "Test".into(),
        level: 1,
        grid,
        enemy_count,
    }
}

/// A barrier row and a water strip, leaving every start cell clear.
fn skirmish_grid() -> TileGrid {
    let mut grid = TileGrid::empty();
    for col in 0..GRID_SIZE {
        let tile = if col % 3 == 0 { Tile::Steel } else { Tile::Brick };
        grid.set_tile(5, col, tile);
    }
    for col in 2..5 {
        grid.set_tile(8, col, Tile::Water);
    }
    grid.set_tile(BASE_ROW, BASE_COL, Tile::Base);
    grid
}

/// Engine whose AI never turns or fires and always spawns at the first point.
fn quiet_engine(grid: TileGrid, enemy_count: u32) -> SimulationEngine<ScriptedRandom> {
    SimulationEngine::with_random(
        &mission(grid, enemy_count),
        Tuning::default(),
        ScriptedRandom::quiet(),
    )
}

/// Pushes the first spawn out to the regular interval.
fn delay_spawns(engine: &mut SimulationEngine<ScriptedRandom>) {
    engine.world_mut().last_spawn_ms = Some(0);
}

fn add_projectile(world: &mut World, owner: EntityId, center: Vec2, direction: Direction) {
    let id = world.allocate_id();
    let size = Vec2::splat(PROJECTILE_SIZE);
    world.projectiles.push(Projectile {
        body: Body {
            id,
            position: center - size * 0.5,
            size,
            direction,
            speed: PROJECTILE_SPEED,
            health: 1,
        },
        owner,
    });
}

fn add_enemy(world: &mut World, row: usize, col: usize) -> EntityId {
    let id = world.allocate_id();
    let enemy = world_setup::enemy_tank(id, tank_origin_for_tile(row, col), &Tuning::default());
    world.enemies.push(enemy);
    world.enemies_spawned += 1;
    id
}

fn shots_by(snapshot: &GameStateSnapshot, shooter: EntityId) -> usize {
    snapshot
        .events
        .iter()
        .filter(|event| matches!(event, GameEvent::ShotFired { owner, .. } if *owner == shooter))
        .count()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mission = mission(skirmish_grid(), 6);
    let config = SimConfig {
        seed: 12345,
        ..Default::default()
    };
    let mut engine_a = SimulationEngine::new(config, &mission);
    let mut engine_b = SimulationEngine::new(config, &mission);

    for engine in [&mut engine_a, &mut engine_b] {
        engine.queue_command(PlayerCommand::Press {
            action: InputAction::Fire,
        });
    }

    for _ in 0..1200 {
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mission = mission(skirmish_grid(), 6);
    let mut engine_a = SimulationEngine::new(
        SimConfig {
            seed: 111,
            ..Default::default()
        },
        &mission,
    );
    let mut engine_b = SimulationEngine::new(
        SimConfig {
            seed: 222,
            ..Default::default()
        },
        &mission,
    );

    let diverged = (0..1200).any(|_| {
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        json_a != json_b
    });
    assert!(diverged, "Different seeds should produce divergent output");
}

// ---- Time and events ----

#[test]
fn test_tick_advances_time_and_drains_events() {
    let mut engine = quiet_engine(TileGrid::empty(), 2);

    let first = engine.tick();
    assert_eq!(first.time.tick, 1);
    assert_eq!(first.time.elapsed_ms, DEFAULT_TICK_MS);
    assert!(first
        .events
        .iter()
        .any(|event| matches!(event, GameEvent::EnemySpawned { .. })));

    let second = engine.tick();
    assert!(second.events.is_empty(), "events must not repeat");
    assert_eq!(second.enemies.len(), 1);
    assert_eq!(second.enemies_spawned, 1);
    assert_eq!(second.enemy_quota, 2);
    assert_eq!(second.level, 1);
}

#[test]
fn test_reset_restores_fresh_world() {
    let mission = mission(skirmish_grid(), 3);
    let mut engine = SimulationEngine::new(SimConfig::default(), &mission);
    engine.queue_command(PlayerCommand::Press {
        action: InputAction::MoveLeft,
    });
    for _ in 0..50 {
        engine.tick();
    }

    engine.reset(&mission);
    assert_eq!(engine.time().tick, 0);
    assert_eq!(engine.status(), GameStatus::Playing);
    assert!(engine.held_keys().is_empty());
    assert_eq!(engine.world(), &World::new(&mission, engine.tuning()));
}

#[test]
fn test_mission_grid_is_never_mutated() {
    let mut grid = TileGrid::empty();
    grid.set_tile(6, 4, Tile::Brick);
    let mission = mission(grid.clone(), 1);
    let mut engine =
        SimulationEngine::with_random(&mission, Tuning::default(), ScriptedRandom::quiet());
    delay_spawns(&mut engine);
    engine.queue_command(PlayerCommand::Press {
        action: InputAction::Fire,
    });
    for _ in 0..60 {
        engine.tick();
    }

    assert_eq!(engine.world().grid.tile_at(6, 4), Tile::Empty);
    assert_eq!(mission.grid, grid);
}

// ---- Player ----

#[test]
fn test_player_starts_at_start_tile() {
    let engine = quiet_engine(TileGrid::empty(), 1);
    let player = &engine.world().player.body;
    assert_eq!(player.position, Vec2::new(162.0, 482.0));
    assert_eq!(player.direction, Direction::Up);
    assert_eq!(player.health, PLAYER_HEALTH);
    assert_eq!(player.id, EntityId::PLAYER);
}

#[test]
fn test_key_priority_prefers_vertical() {
    let mut engine = quiet_engine(TileGrid::empty(), 1);
    delay_spawns(&mut engine);
    engine.set_held_keys(HeldKeys::MOVE_UP | HeldKeys::MOVE_LEFT);
    engine.tick();

    let player = &engine.world().player.body;
    assert_eq!(player.position, Vec2::new(162.0, 479.0));
    assert_eq!(player.direction, Direction::Up);
}

#[test]
fn test_blocked_player_still_turns() {
    let mut grid = TileGrid::empty();
    grid.set_tile(12, 3, Tile::Steel);
    let mut engine = quiet_engine(grid, 1);
    delay_spawns(&mut engine);
    engine.queue_command(PlayerCommand::Press {
        action: InputAction::MoveLeft,
    });
    engine.tick();

    let player = &engine.world().player.body;
    assert_eq!(player.position, Vec2::new(162.0, 482.0), "move must be discarded");
    assert_eq!(player.direction, Direction::Left);
}

#[test]
fn test_player_stops_at_arena_edge() {
    let mut engine = quiet_engine(TileGrid::empty(), 1);
    delay_spawns(&mut engine);
    engine.set_held_keys(HeldKeys::MOVE_DOWN);
    for _ in 0..10 {
        engine.tick();
    }
    // 482 + 36 = 518; one more step of 3 would cross 520.
    assert_eq!(engine.world().player.body.position.y, 482.0);
}

#[test]
fn test_player_fire_cooldown() {
    let mut engine = quiet_engine(TileGrid::empty(), 1);
    delay_spawns(&mut engine);
    engine.set_held_keys(HeldKeys::FIRE);

    // now = 0 fires, then nothing until now - 0 >= 500 (tick 32, now = 512).
    let shots: usize = (0..32)
        .map(|_| shots_by(&engine.tick(), EntityId::PLAYER))
        .sum();
    assert_eq!(shots, 1);
    assert_eq!(shots_by(&engine.tick(), EntityId::PLAYER), 1);
    assert_eq!(engine.world().player.last_shot_ms, Some(512));
}

#[test]
fn test_projectile_spawns_centred_on_shooter() {
    let mut engine = quiet_engine(TileGrid::empty(), 1);
    delay_spawns(&mut engine);
    engine.set_held_keys(HeldKeys::FIRE);
    let snapshot = engine.tick();

    assert_eq!(snapshot.projectiles.len(), 1);
    let projectile = &snapshot.projectiles[0];
    assert_eq!(projectile.owner, EntityId::PLAYER);
    assert_eq!(projectile.direction, Direction::Up);
    // Centre (180, 500) minus half size, then one step up.
    assert_eq!(projectile.position, Vec2::new(176.0, 490.0));
}

// ---- Enemies ----

#[test]
fn test_blocked_enemy_turns_without_moving() {
    let mut grid = TileGrid::empty();
    grid.set_tile(1, 0, Tile::Steel);
    let mut engine = quiet_engine(grid, 1);

    // Tick 0 spawns at (2, 2); tick 1 moves to y = 4; tick 2 would enter row 1.
    for _ in 0..3 {
        engine.tick();
    }
    let enemy = &engine.world().enemies[0].body;
    assert_eq!(enemy.position, Vec2::new(2.0, 4.0));
    assert_eq!(enemy.direction, Direction::ALL[0]);
}

#[test]
fn test_enemy_fire_cooldown_is_strict() {
    let mut engine = SimulationEngine::with_random(
        &mission(TileGrid::empty(), 1),
        Tuning::default(),
        ScriptedRandom::new(vec![true], vec![0]),
    );
    engine.tick();
    let enemy_id = engine.world().enemies[0].body.id;

    // First shot at now = 16; the next needs now - 16 > 1500, so now = 1520.
    let mut shot_ticks = Vec::new();
    for tick in 1..=95u64 {
        if shots_by(&engine.tick(), enemy_id) > 0 {
            shot_ticks.push(tick);
        }
    }
    assert_eq!(shot_ticks, vec![1, 95]);
}

// ---- Projectiles ----

#[test]
fn test_brick_scenario_single_shot() {
    let mut grid = TileGrid::empty();
    grid.set_tile(6, 6, Tile::Brick);
    let mut engine = quiet_engine(grid, 1);
    delay_spawns(&mut engine);
    engine.world_mut().player.body.position = tank_origin_for_tile(10, 6);

    engine.queue_command(PlayerCommand::Press {
        action: InputAction::Fire,
    });
    engine.tick();
    engine.queue_command(PlayerCommand::Release {
        action: InputAction::Fire,
    });

    // Top-left starts at y = 416 and must drop below 280: 23 advances.
    for _ in 1..22 {
        engine.tick();
    }
    assert_eq!(engine.world().grid.tile_at(6, 6), Tile::Brick);
    assert_eq!(engine.world().projectiles.len(), 1);

    let snapshot = engine.tick();
    assert!(snapshot.projectiles.is_empty());
    assert_eq!(snapshot.grid, TileGrid::empty(), "only the Brick cell changes");
    assert_eq!(
        snapshot.events,
        vec![GameEvent::BrickDestroyed { row: 6, col: 6 }]
    );
}

#[test]
fn test_simultaneous_brick_hits_destroy_once() {
    let mut grid = TileGrid::empty();
    grid.set_tile(6, 6, Tile::Brick);
    let mut engine = quiet_engine(grid, 1);
    delay_spawns(&mut engine);
    let world = engine.world_mut();
    add_projectile(world, EntityId::PLAYER, Vec2::new(250.0, 282.0), Direction::Up);
    add_projectile(world, EntityId::PLAYER, Vec2::new(270.0, 284.0), Direction::Up);
    add_projectile(world, EntityId(77), Vec2::new(260.0, 238.0), Direction::Down);

    let snapshot = engine.tick();
    assert!(snapshot.projectiles.is_empty(), "all projectiles absorbed");
    assert_eq!(snapshot.grid.tile_at(6, 6), Tile::Empty);
    let destroyed = snapshot
        .events
        .iter()
        .filter(|event| matches!(event, GameEvent::BrickDestroyed { .. }))
        .count();
    assert_eq!(destroyed, 1);
}

#[test]
fn test_tile_hit_uses_projectile_corner() {
    // Top-left sits in column 5, centre in column 6.
    let mut grid = TileGrid::empty();
    grid.set_tile(6, 5, Tile::Brick);
    grid.set_tile(6, 6, Tile::Brick);
    let mut engine = quiet_engine(grid, 1);
    delay_spawns(&mut engine);
    add_projectile(
        engine.world_mut(),
        EntityId::PLAYER,
        Vec2::new(240.0, 290.0),
        Direction::Up,
    );

    // Corner y: 286 -> 280 (row 7), then 274 (row 6).
    engine.tick();
    assert_eq!(engine.world().projectiles.len(), 1);
    let snapshot = engine.tick();
    assert!(snapshot.projectiles.is_empty());
    assert_eq!(snapshot.grid.tile_at(6, 5), Tile::Empty);
    assert_eq!(snapshot.grid.tile_at(6, 6), Tile::Brick);
    assert_eq!(
        snapshot.events,
        vec![GameEvent::BrickDestroyed { row: 6, col: 5 }]
    );
}

#[test]
fn test_steel_absorbs_without_damage() {
    let mut grid = TileGrid::empty();
    grid.set_tile(6, 6, Tile::Steel);
    let mut engine = quiet_engine(grid.clone(), 1);
    delay_spawns(&mut engine);
    add_projectile(
        engine.world_mut(),
        EntityId::PLAYER,
        Vec2::new(260.0, 282.0),
        Direction::Up,
    );

    let snapshot = engine.tick();
    assert!(snapshot.projectiles.is_empty());
    assert_eq!(snapshot.grid, grid);
    assert!(snapshot.events.is_empty());
}

#[test]
fn test_water_and_bush_never_stop_projectiles() {
    for tile in [Tile::Water, Tile::Bush] {
        let mut grid = TileGrid::empty();
        grid.set_tile(6, 6, tile);
        let mut engine = quiet_engine(grid.clone(), 1);
        delay_spawns(&mut engine);
        add_projectile(
            engine.world_mut(),
            EntityId::PLAYER,
            Vec2::new(260.0, 282.0),
            Direction::Up,
        );

        // The corner crosses the cell at y 272..240 and keeps going.
        for _ in 0..10 {
            let snapshot = engine.tick();
            assert_eq!(snapshot.projectiles.len(), 1, "{tile:?} stopped a projectile");
        }
        assert_eq!(engine.world().grid, grid);
    }
}

#[test]
fn test_projectile_removed_on_leaving_arena() {
    let mut engine = quiet_engine(TileGrid::empty(), 1);
    delay_spawns(&mut engine);
    add_projectile(
        engine.world_mut(),
        EntityId::PLAYER,
        Vec2::new(260.0, 3.0),
        Direction::Up,
    );
    add_projectile(
        engine.world_mut(),
        EntityId::PLAYER,
        Vec2::new(520.0, 100.0),
        Direction::Right,
    );

    let snapshot = engine.tick();
    assert!(snapshot.projectiles.is_empty());
    assert_eq!(snapshot.grid, TileGrid::empty());
}

#[test]
fn test_base_hit_is_game_over() {
    let mut grid = TileGrid::empty();
    grid.set_tile(BASE_ROW, BASE_COL, Tile::Base);
    let mut engine = quiet_engine(grid, 3);
    delay_spawns(&mut engine);
    add_projectile(
        engine.world_mut(),
        EntityId(50),
        Vec2::new(260.0, 482.0),
        Direction::Down,
    );

    let snapshot = engine.tick();
    assert_eq!(snapshot.status, GameStatus::GameOver);
    assert_eq!(
        snapshot.events,
        vec![GameEvent::BaseDestroyed, GameEvent::GameOver { score: 0 }]
    );
    assert_eq!(snapshot.grid.tile_at(BASE_ROW, BASE_COL), Tile::Base);
}

#[test]
fn test_enemy_projectiles_pass_through_enemies() {
    let mut engine = quiet_engine(TileGrid::empty(), 1);
    delay_spawns(&mut engine);
    let world = engine.world_mut();
    add_enemy(world, 6, 6);
    add_projectile(world, EntityId(99), Vec2::new(260.0, 250.0), Direction::Down);

    let snapshot = engine.tick();
    assert_eq!(snapshot.enemies.len(), 1);
    assert_eq!(snapshot.enemies[0].health, ENEMY_HEALTH);
    assert_eq!(snapshot.projectiles.len(), 1);
}

#[test]
fn test_enemy_kill_awards_score_and_victory() {
    let mut engine = quiet_engine(TileGrid::empty(), 1);
    let enemy_id = add_enemy(engine.world_mut(), 6, 4);
    engine.set_held_keys(HeldKeys::FIRE);

    let snapshot = (0..100)
        .map(|_| engine.tick())
        .find(|snapshot| snapshot.status != GameStatus::Playing)
        .expect("mission should end");

    assert_eq!(snapshot.status, GameStatus::Victory);
    assert_eq!(snapshot.score, KILL_REWARD);
    assert!(snapshot.enemies.is_empty());
    assert!(snapshot.events.contains(&GameEvent::EnemyDestroyed {
        id: enemy_id,
        score: KILL_REWARD,
    }));
    assert_eq!(
        snapshot.outcome(),
        Some(&GameEvent::Victory { score: KILL_REWARD })
    );
    assert_eq!(engine.world().player.score, KILL_REWARD);
}

#[test]
fn test_no_victory_while_quota_remains() {
    let mut engine = quiet_engine(TileGrid::empty(), 2);
    delay_spawns(&mut engine);
    add_enemy(engine.world_mut(), 6, 4);
    engine.set_held_keys(HeldKeys::FIRE);

    for _ in 0..100 {
        engine.tick();
    }
    let world = engine.world();
    assert!(world.enemies.is_empty(), "the only live enemy was destroyed");
    assert_eq!(world.score, KILL_REWARD);
    assert_eq!(world.status, GameStatus::Playing);
}

#[test]
fn test_player_death_is_game_over() {
    let mut engine = quiet_engine(TileGrid::empty(), 1);
    delay_spawns(&mut engine);
    let world = engine.world_mut();
    world.player.body.health = 1;
    add_projectile(world, EntityId(99), Vec2::new(180.0, 474.0), Direction::Down);

    let snapshot = engine.tick();
    assert_eq!(snapshot.player.health, 0);
    assert_eq!(snapshot.status, GameStatus::GameOver);
    assert_eq!(
        snapshot.events,
        vec![
            GameEvent::PlayerHit { health: 0 },
            GameEvent::GameOver { score: 0 }
        ]
    );
}

#[test]
fn test_player_survives_non_lethal_hit() {
    let mut engine = quiet_engine(TileGrid::empty(), 1);
    delay_spawns(&mut engine);
    add_projectile(
        engine.world_mut(),
        EntityId(99),
        Vec2::new(180.0, 474.0),
        Direction::Down,
    );

    let snapshot = engine.tick();
    assert_eq!(snapshot.player.health, PLAYER_HEALTH - 1);
    assert_eq!(snapshot.status, GameStatus::Playing);
    assert!(snapshot.projectiles.is_empty());
}

#[test]
fn test_terminal_ticks_are_noops() {
    let mut engine = quiet_engine(TileGrid::empty(), 1);
    delay_spawns(&mut engine);
    let world = engine.world_mut();
    world.player.body.health = 1;
    add_projectile(world, EntityId(99), Vec2::new(180.0, 474.0), Direction::Down);
    engine.tick();
    assert_eq!(engine.status(), GameStatus::GameOver);

    let frozen = engine.world().clone();
    let time = engine.time();
    engine.queue_commands([
        PlayerCommand::Press {
            action: InputAction::MoveUp,
        },
        PlayerCommand::Press {
            action: InputAction::Fire,
        },
    ]);
    for _ in 0..50 {
        let snapshot = engine.tick();
        assert!(snapshot.events.is_empty(), "terminal event emitted twice");
        assert_eq!(snapshot.status, GameStatus::GameOver);
    }
    assert_eq!(engine.world(), &frozen);
    assert_eq!(engine.time(), time);
}

// ---- Spawning ----

#[test]
fn test_first_spawn_is_immediate_then_interval() {
    let mut engine = quiet_engine(TileGrid::empty(), 3);
    engine.tick();
    assert_eq!(engine.world().enemies_spawned, 1);
    assert_eq!(engine.world().enemies[0].body.position, Vec2::new(2.0, 2.0));
    assert_eq!(engine.world().enemies[0].body.direction, Direction::Down);

    // Next spawn once now >= 3000: tick 188 (now = 3008).
    for _ in 1..188 {
        engine.tick();
    }
    assert_eq!(engine.world().enemies_spawned, 1);
    engine.tick();
    assert_eq!(engine.world().enemies_spawned, 2);
    assert_eq!(engine.world().last_spawn_ms, Some(3008));
}

#[test]
fn test_spawn_ignores_occupied_point() {
    let mut engine = quiet_engine(TileGrid::empty(), 2);
    engine.world_mut().player.body.position = Vec2::new(2.0, 2.0);
    engine.tick();
    assert_eq!(engine.world().enemies_spawned, 1);
    assert_eq!(engine.world().last_spawn_ms, Some(0));
    assert_eq!(engine.world().enemies[0].body.position, Vec2::new(2.0, 2.0));

    // Both tanks are stuck while they overlap.
    engine.tick();
    assert_eq!(engine.world().enemies[0].body.position, Vec2::new(2.0, 2.0));
}

// ---- Properties ----

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn prop_invariants_hold_over_random_play(
        seed in any::<u64>(),
        quota in 0u32..5,
        moves in proptest::collection::vec(0u8..32, 1..20),
    ) {
        let mission = mission(skirmish_grid(), quota);
        let mut engine = SimulationEngine::new(SimConfig { seed, ..Default::default() }, &mission);
        let mut last_score = 0;

        for (step, bits) in moves.iter().cycle().take(1500).enumerate() {
            if step % 40 == 0 {
                engine.set_held_keys(HeldKeys::from_bits_truncate(*bits));
            }
            let snapshot = engine.tick();
            let world = engine.world();

            prop_assert!(world.enemies_spawned <= world.enemy_quota);
            prop_assert!(snapshot.score >= last_score);
            prop_assert_eq!((snapshot.score - last_score) % KILL_REWARD, 0);
            last_score = snapshot.score;

            for tank in std::iter::once(&world.player).chain(world.enemies.iter()) {
                let rect = tank.body.rect();
                prop_assert!(rect.within_square(ARENA_SIZE));
                prop_assert!(collision::covered_tiles(&rect)
                    .all(|(row, col)| !world.grid.tile_at(row, col).blocks_movement()));
            }
        }
    }
}
