//! Enemies: homing walkers with a short attack and a one-shot death
//!
//! State machine: Walk -> Attack -> Walk -> ... -> Death. Death is absorbing;
//! a dying enemy neither moves, hurts nor changes state again.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::{AnimClock, AnimId, AnimationTable};
use super::entity::{Drawable, EntityId, EntityKind, SpriteRef};
use super::player::Facing;
use super::rect::Rect;
use crate::consts::ENEMY_SIZE;
use crate::{Tuning, wrap_position};

/// Seconds per frame in each state
pub const WALK_FRAME_DELAY: f32 = 0.18;
pub const ATTACK_FRAME_DELAY: f32 = 0.12;
pub const DEATH_FRAME_DELAY: f32 = 0.10;

/// Sprite family (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Vampire,
    Skeleton,
}

impl EnemyKind {
    pub fn anim(self) -> AnimId {
        match self {
            EnemyKind::Vampire => AnimId::Vampire,
            EnemyKind::Skeleton => AnimId::Skeleton,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    Walk,
    Attack,
    Death,
}

/// Outcome of one enemy update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyStep {
    Alive,
    /// Death animation finished; remove from the world
    Finished,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub kind: EnemyKind,
    pub pos: Vec2,
    /// Unit or zero, set by the targeting pass
    pub dir: Vec2,
    pub speed: f32,
    pub hp: i32,
    pub facing: Facing,
    pub attack_cooldown: f32,
    pub state: EnemyState,
    pub anim: AnimClock,
}

impl Enemy {
    pub fn new(id: EntityId, kind: EnemyKind, pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            kind,
            pos,
            dir: Vec2::ZERO,
            speed: tuning.enemy_speed,
            hp: tuning.enemy_hit_points,
            facing: Facing::Right,
            attack_cooldown: 0.0,
            state: EnemyState::Walk,
            anim: AnimClock::default(),
        }
    }

    pub fn is_dying(&self) -> bool {
        self.state == EnemyState::Death
    }

    pub fn tick(&mut self, dt: f32, tuning: &Tuning, table: &AnimationTable) -> EnemyStep {
        self.attack_cooldown = (self.attack_cooldown - dt).max(0.0);

        let len = table.frames(self.kind.anim());
        match self.state {
            EnemyState::Walk => {
                self.pos += self.dir * self.speed * dt;
                if self.dir.x < 0.0 {
                    self.facing = Facing::Left;
                } else if self.dir.x > 0.0 {
                    self.facing = Facing::Right;
                }
                self.anim.advance_loop(dt, WALK_FRAME_DELAY, len);
            }
            EnemyState::Attack => {
                if self.anim.advance_once(dt, ATTACK_FRAME_DELAY, len) {
                    self.state = EnemyState::Walk;
                    self.attack_cooldown = tuning.enemy_attack_cooldown;
                }
            }
            EnemyState::Death => {
                if self.anim.advance_once(dt, DEATH_FRAME_DELAY, len) {
                    return EnemyStep::Finished;
                }
            }
        }

        self.pos = wrap_position(self.pos, tuning.width, tuning.height);
        EnemyStep::Alive
    }

    /// Begin an attack if walking and off cooldown
    pub fn trigger_attack(&mut self) {
        if self.state == EnemyState::Walk && self.attack_cooldown <= 0.0 {
            self.state = EnemyState::Attack;
            self.anim.reset();
        }
    }

    pub fn take_damage(&mut self, amount: i32) {
        if self.is_dying() {
            return;
        }
        self.hp -= amount;
        if self.hp <= 0 {
            self.state = EnemyState::Death;
            self.dir = Vec2::ZERO;
            self.anim.reset();
        }
    }
}

impl Drawable for Enemy {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Enemy
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn sprite(&self, table: &AnimationTable) -> SpriteRef {
        let anim = self.kind.anim();
        SpriteRef {
            anim,
            frame: self.anim.frame_in(table.frames(anim)),
            flip_x: self.facing == Facing::Left,
        }
    }

    fn bounds(&self) -> Rect {
        Rect::centered(self.pos, ENEMY_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn enemy() -> Enemy {
        Enemy::new(7, EnemyKind::Skeleton, Vec2::new(100.0, 100.0), &Tuning::default())
    }

    #[test]
    fn test_walk_moves_and_faces_by_x_only() {
        let tuning = Tuning::default();
        let table = AnimationTable::default();
        let mut e = enemy();
        e.dir = Vec2::new(-0.6, 0.8);
        e.tick(0.1, &tuning, &table);
        assert_eq!(e.facing, Facing::Left);
        assert!(e.pos.x < 100.0 && e.pos.y > 100.0);

        e.dir = Vec2::Y;
        e.tick(0.1, &tuning, &table);
        assert_eq!(e.facing, Facing::Left);
    }

    #[test]
    fn test_walk_wraps_toroidally() {
        let tuning = Tuning::default();
        let mut e = enemy();
        e.pos = Vec2::new(tuning.width - 1.0, 5.0);
        e.dir = Vec2::X;
        e.tick(0.1, &tuning, &AnimationTable::default());
        assert!(e.pos.x >= 0.0 && e.pos.x < 10.0);
    }

    #[test]
    fn test_attack_plays_once_then_cools_down() {
        let tuning = Tuning::default();
        let table = AnimationTable::default();
        let mut e = enemy();
        e.trigger_attack();
        assert_eq!(e.state, EnemyState::Attack);
        for _ in 0..table.frames(AnimId::Skeleton) {
            e.tick(ATTACK_FRAME_DELAY, &tuning, &table);
        }
        assert_eq!(e.state, EnemyState::Walk);
        assert_eq!(e.attack_cooldown, tuning.enemy_attack_cooldown);

        e.trigger_attack();
        assert_eq!(e.state, EnemyState::Walk);
    }

    #[test]
    fn test_attack_does_not_move() {
        let tuning = Tuning::default();
        let mut e = enemy();
        e.dir = Vec2::X;
        e.trigger_attack();
        e.tick(0.05, &tuning, &AnimationTable::default());
        assert_eq!(e.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_death_finishes_after_sequence() {
        let tuning = Tuning::default();
        let table = AnimationTable::default();
        let mut e = enemy();
        e.take_damage(1);
        assert!(e.is_dying());
        let mut steps = Vec::new();
        for _ in 0..table.frames(AnimId::Skeleton) {
            steps.push(e.tick(DEATH_FRAME_DELAY, &tuning, &table));
        }
        assert_eq!(steps.last(), Some(&EnemyStep::Finished));
        assert!(steps[..steps.len() - 1].iter().all(|s| *s == EnemyStep::Alive));
    }

    #[test]
    fn test_flip_when_facing_left() {
        let mut e = enemy();
        e.facing = Facing::Left;
        assert!(e.sprite(&AnimationTable::default()).flip_x);
    }

    #[derive(Debug, Clone)]
    enum Poke {
        Damage(i32),
        Attack,
        Tick(f32),
    }

    fn poke() -> impl Strategy<Value = Poke> {
        prop_oneof![
            (1..5i32).prop_map(Poke::Damage),
            Just(Poke::Attack),
            (0.0f32..0.05).prop_map(Poke::Tick),
        ]
    }

    proptest! {
        #[test]
        fn prop_death_is_absorbing(pokes in proptest::collection::vec(poke(), 0..30)) {
            let tuning = Tuning::default();
            let table = AnimationTable::default();
            let mut e = enemy();
            e.dir = Vec2::X;
            e.take_damage(1);
            let hp = e.hp;
            let pos = e.pos;
            for p in pokes {
                match p {
                    Poke::Damage(n) => e.take_damage(n),
                    Poke::Attack => e.trigger_attack(),
                    Poke::Tick(dt) => {
                        e.tick(dt, &tuning, &table);
                    }
                }
                prop_assert_eq!(e.state, EnemyState::Death);
                prop_assert_eq!(e.hp, hp);
                prop_assert_eq!(e.pos, pos);
            }
        }
    }
}
