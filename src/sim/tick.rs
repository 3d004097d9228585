//! Per-frame simulation tick
//!
//! Runs one step of the game in a fixed order: clocks, entity updates, map
//! loop, wall blocking, movement input, enemy targeting, waves, spawning and
//! finally combat.

use glam::Vec2;

use super::combat::{ContactOutcome, resolve_player_contact, resolve_sword_hits, resolve_wall_overlap};
use super::enemy::EnemyStep;
use super::player::Facing;
use super::state::{GameEvent, GamePhase, World};
use crate::consts::STICK_DEAD_ZONE;
use crate::direction_to;

/// Held logical actions for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Sword swing (acts on press, not while held)
    pub attack: bool,
    /// Toggles the wall overlay (acts on press)
    pub special: bool,
    /// Analog stick, each axis in [-1, 1], y down
    pub stick: Vec2,
}

impl TickInput {
    /// Summed movement direction (not normalized) and the facing it implies,
    /// which is `None` when the held directions cancel out.
    /// The stick counts as a held direction on any axis beyond the dead zone.
    pub fn movement(&self) -> (Vec2, Option<Facing>) {
        let stick = if self.stick.length() > STICK_DEAD_ZONE {
            self.stick
        } else {
            Vec2::ZERO
        };

        let held = [
            (self.left || stick.x < -STICK_DEAD_ZONE, Facing::Left),
            (self.right || stick.x > STICK_DEAD_ZONE, Facing::Right),
            (self.up || stick.y < -STICK_DEAD_ZONE, Facing::Up),
            (self.down || stick.y > STICK_DEAD_ZONE, Facing::Down),
        ];

        let mut dir = Vec2::ZERO;
        let mut facing = None;
        for (pressed, f) in held {
            if pressed {
                dir += f.unit();
                facing = Some(f);
            }
        }
        // Opposites cancel: standing still keeps the old facing
        if dir == Vec2::ZERO {
            facing = None;
        }
        (dir, facing)
    }
}

impl World {
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        tick(self, input, dt);
    }
}

/// Advance the world by `dt` seconds
pub fn tick(world: &mut World, input: &TickInput, dt: f32) {
    if world.phase == GamePhase::GameOver {
        return;
    }

    if input.special && !world.special_held {
        world.show_walls = !world.show_walls;
    }
    world.special_held = input.special;

    if input.attack && !world.attack_held {
        world.try_attack();
    }
    world.attack_held = input.attack;

    world.time_ticks += 1;

    // --- Clocks and entity updates ---
    world
        .backgrounds
        .advance(world.map, dt, &world.animations);
    world.player.tick(dt, &world.tuning, &world.animations);

    let tuning = &world.tuning;
    let table = &world.animations;
    world
        .enemies
        .retain_mut(|enemy| enemy.tick(dt, tuning, table) == EnemyStep::Alive);

    let owner_pos = world.player.pos;
    let player_id = world.player.id;
    let mut released = false;
    world.swords.retain_mut(|sword| {
        let finished = sword.tick(dt, owner_pos, table);
        if finished && sword.owner == player_id {
            released = true;
        }
        !finished
    });
    if released {
        world.player.attacking = false;
    }

    // --- Map loop and walls ---
    world.check_map_transition();
    resolve_wall_overlap(&mut world.player, &world.walls, dt);

    // Input lands after movement, so it drives the next tick's step
    let (direction, facing) = input.movement();
    world.player.set_movement_input(direction, facing);

    // --- Enemy targeting ---
    let target = world.player.pos;
    let range = world.tuning.enemy_attack_range;
    for enemy in world.enemies.iter_mut().filter(|e| !e.is_dying()) {
        if enemy.pos.distance(target) <= range {
            enemy.dir = Vec2::ZERO;
            enemy.trigger_attack();
        } else {
            enemy.dir = direction_to(enemy.pos, target);
        }
    }

    // --- Waves and spawning ---
    if world.director.advance(dt, &world.tuning) {
        let wave = world.director.wave;
        log::info!(
            "Wave {}: spawn every {:.2}s, cap {}",
            wave,
            world.director.spawn_interval,
            world.director.max_enemies
        );
        world.events.push(GameEvent::WaveStarted { wave });
    }
    if world.director.spawn_due(dt, world.enemies.len()) {
        world.spawn_enemy();
    }

    // --- Combat ---
    for id in resolve_sword_hits(&world.swords, &mut world.enemies) {
        world.score += world.tuning.kill_reward;
        world.events.push(GameEvent::EnemyKilled { id });
        world.player.trigger_kill_animation(&world.tuning);
        log::debug!("Enemy #{} slain, score {}", id, world.score);
    }

    match resolve_player_contact(&mut world.player, &world.enemies, &world.tuning) {
        ContactOutcome::Clear => {}
        ContactOutcome::Hit => {
            let lives_left = world.player.lives;
            world.events.push(GameEvent::PlayerHit { lives_left });
            log::debug!("Player hit, {} lives left", lives_left);
        }
        ContactOutcome::Fatal => {
            world.events.push(GameEvent::PlayerHit { lives_left: 0 });
            world.events.push(GameEvent::GameOver { score: world.score });
            world.phase = GamePhase::GameOver;
            log::info!(
                "Game over: score {}, wave {}",
                world.score,
                world.director.wave
            );
        }
    }
}
