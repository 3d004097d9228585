//! The player: movement, facing, sword cooldown and the finishing-move pose

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::{AnimClock, AnimationTable, PlayerPose};
use super::entity::{Drawable, EntityId, EntityKind, SpriteRef};
use super::rect::Rect;
use super::sword::Sword;
use crate::Tuning;
use crate::consts::PLAYER_SIZE;

/// Cardinal facing, drives sprite mirroring and sword placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    /// Unit vector in screen coordinates (y down)
    pub fn unit(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::NEG_Y,
            Facing::Down => Vec2::Y,
            Facing::Left => Vec2::NEG_X,
            Facing::Right => Vec2::X,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: EntityId,
    /// Sprite center
    pub pos: Vec2,
    pub vel: Vec2,
    /// Velocity integrated on the last tick (used to undo wall overlaps)
    pub last_applied_vel: Vec2,
    pub facing: Facing,
    pub speed: f32,
    /// Seconds until the next swing is allowed
    pub attack_cooldown: f32,
    /// Seconds of remaining post-hit grace
    pub invulnerable: f32,
    /// A sword is in flight
    pub attacking: bool,
    /// Seconds left on the finishing-move pose
    pub kill_timer: f32,
    pub lives: u32,
    pub anim: AnimClock,
}

impl Player {
    pub fn new(id: EntityId, pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            last_applied_vel: Vec2::ZERO,
            facing: Facing::Right,
            speed: tuning.player_speed,
            attack_cooldown: 0.0,
            invulnerable: 0.0,
            attacking: false,
            kill_timer: 0.0,
            lives: tuning.start_lives,
            anim: AnimClock::default(),
        }
    }

    /// Apply held movement. `direction` is summed from the held directions;
    /// `facing` is the last of them in left, right, up, down order.
    pub fn set_movement_input(&mut self, direction: Vec2, facing: Option<Facing>) {
        let dir = direction.normalize_or_zero();
        if dir != Vec2::ZERO {
            if let Some(facing) = facing {
                self.facing = facing;
            }
            // Moving cancels the finishing pose
            self.kill_timer = 0.0;
        }
        self.vel = dir * self.speed;
    }

    pub fn tick(&mut self, dt: f32, tuning: &Tuning, table: &AnimationTable) {
        self.attack_cooldown = (self.attack_cooldown - dt).max(0.0);
        self.invulnerable = (self.invulnerable - dt).max(0.0);
        self.kill_timer = (self.kill_timer - dt).max(0.0);

        self.last_applied_vel = self.vel;
        self.pos += self.vel * dt;

        // Vertical crossing is how the map loop triggers, so only x is held in
        // max/min rather than clamp: an unvalidated tuning must not panic
        self.pos.x = self
            .pos
            .x
            .max(tuning.player_radius)
            .min(tuning.width - tuning.player_radius);

        let pose = self.pose();
        self.anim
            .advance_loop(dt, pose.frame_delay(), table.frames(pose.anim()));
    }

    /// Start a swing. Rejected while a sword is out or the cooldown runs.
    pub fn attack(&mut self, sword_id: EntityId, tuning: &Tuning) -> Option<Sword> {
        if self.attacking || self.attack_cooldown > 0.0 {
            return None;
        }
        self.attacking = true;
        self.attack_cooldown = tuning.attack_cooldown;
        Some(Sword::new(sword_id, self.id, self.facing, self.pos))
    }

    /// Finishing-move pose, only shown while standing still
    pub fn trigger_kill_animation(&mut self, tuning: &Tuning) {
        if self.vel == Vec2::ZERO {
            self.kill_timer = tuning.kill_pose_duration;
            self.anim.timer = 0.0;
        }
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable > 0.0
    }

    pub fn pose(&self) -> PlayerPose {
        if self.kill_timer > 0.0 {
            if self.facing == Facing::Right {
                PlayerPose::KillRight
            } else {
                PlayerPose::KillLeft
            }
        } else if self.vel != Vec2::ZERO {
            if self.facing == Facing::Left {
                PlayerPose::WalkLeft
            } else {
                PlayerPose::WalkRight
            }
        } else if self.facing == Facing::Left {
            PlayerPose::IdleLeft
        } else {
            PlayerPose::IdleRight
        }
    }
}

impl Drawable for Player {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn sprite(&self, table: &AnimationTable) -> SpriteRef {
        let anim = self.pose().anim();
        SpriteRef {
            anim,
            frame: self.anim.frame_in(table.frames(anim)),
            // Left-facing art is drawn separately, never mirrored
            flip_x: false,
        }
    }

    fn bounds(&self) -> Rect {
        Rect::centered(self.pos, PLAYER_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player() -> Player {
        Player::new(1, Vec2::new(480.0, 360.0), &Tuning::default())
    }

    #[test]
    fn test_movement_sets_velocity_and_facing() {
        let mut p = player();
        p.set_movement_input(Vec2::new(1.0, 1.0), Some(Facing::Down));
        assert_eq!(p.facing, Facing::Down);
        assert!((p.vel.length() - p.speed).abs() < 0.001);
    }

    #[test]
    fn test_zero_input_keeps_facing() {
        let mut p = player();
        p.set_movement_input(Vec2::NEG_X, Some(Facing::Left));
        p.set_movement_input(Vec2::ZERO, None);
        assert_eq!(p.facing, Facing::Left);
        assert_eq!(p.vel, Vec2::ZERO);

        p.set_movement_input(Vec2::ZERO, Some(Facing::Right));
        assert_eq!(p.facing, Facing::Left);
    }

    #[test]
    fn test_x_clamped_y_free() {
        let tuning = Tuning::default();
        let table = AnimationTable::default();
        let mut p = player();
        p.pos = Vec2::new(5.0, -100.0);
        p.set_movement_input(Vec2::new(-1.0, -1.0), Some(Facing::Up));
        p.tick(0.5, &tuning, &table);
        assert_eq!(p.pos.x, tuning.player_radius);
        assert!(p.pos.y < -100.0);
    }

    #[test]
    fn test_oversized_radius_does_not_panic() {
        let tuning = Tuning {
            player_radius: 600.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
        let mut p = player();
        p.set_movement_input(Vec2::X, Some(Facing::Right));
        p.tick(0.1, &tuning, &AnimationTable::default());
        assert!(p.pos.x.is_finite());
    }

    #[test]
    fn test_timers_floor_at_zero() {
        let tuning = Tuning::default();
        let mut p = player();
        p.attack_cooldown = 0.1;
        p.invulnerable = 0.1;
        p.kill_timer = 0.1;
        p.tick(1.0, &tuning, &AnimationTable::default());
        assert_eq!(p.attack_cooldown, 0.0);
        assert_eq!(p.invulnerable, 0.0);
        assert_eq!(p.kill_timer, 0.0);
    }

    #[test]
    fn test_attack_rejected_while_cooling_down() {
        let tuning = Tuning::default();
        let mut p = player();
        assert!(p.attack(2, &tuning).is_some());
        p.attacking = false;
        let cooldown = p.attack_cooldown;
        assert!(p.attack(3, &tuning).is_none());
        assert_eq!(p.attack_cooldown, cooldown);
    }

    #[test]
    fn test_sword_bound_to_facing() {
        let tuning = Tuning::default();
        let mut p = player();
        p.facing = Facing::Up;
        let sword = p.attack(2, &tuning).unwrap();
        assert_eq!(sword.facing, Facing::Up);
        assert_eq!(sword.owner, p.id);
        assert!(sword.pos.y < p.pos.y);
    }

    #[test]
    fn test_kill_pose_only_when_still() {
        let tuning = Tuning::default();
        let mut p = player();
        p.set_movement_input(Vec2::X, Some(Facing::Right));
        p.trigger_kill_animation(&tuning);
        assert_eq!(p.kill_timer, 0.0);

        p.set_movement_input(Vec2::ZERO, None);
        p.trigger_kill_animation(&tuning);
        assert_eq!(p.kill_timer, tuning.kill_pose_duration);
        assert_eq!(p.pose(), PlayerPose::KillRight);
    }

    #[test]
    fn test_kill_pose_faces_left_unless_right() {
        let tuning = Tuning::default();
        let mut p = player();
        p.facing = Facing::Up;
        p.trigger_kill_animation(&tuning);
        assert_eq!(p.pose(), PlayerPose::KillLeft);
    }

    #[test]
    fn test_moving_cancels_kill_pose() {
        let tuning = Tuning::default();
        let mut p = player();
        p.trigger_kill_animation(&tuning);
        p.set_movement_input(Vec2::Y, Some(Facing::Down));
        assert_eq!(p.kill_timer, 0.0);
        assert_eq!(p.pose(), PlayerPose::WalkRight);
    }

    proptest! {
        #[test]
        fn prop_single_sword_in_flight(calls in proptest::collection::vec(any::<bool>(), 1..40)) {
            let tuning = Tuning::default();
            let mut p = player();
            let mut alive = 0;
            for (i, finish_previous) in calls.into_iter().enumerate() {
                if finish_previous && alive == 1 {
                    // the sword completing is the only way an attack ends
                    p.attacking = false;
                    alive = 0;
                }
                if alive == 0 {
                    p.attack_cooldown = 0.0;
                }
                let before = (p.attack_cooldown, p.attacking);
                match p.attack(i as EntityId + 10, &tuning) {
                    Some(_) => alive += 1,
                    None => prop_assert_eq!(before, (p.attack_cooldown, p.attacking)),
                }
                prop_assert!(alive <= 1);
            }
        }
    }
}
