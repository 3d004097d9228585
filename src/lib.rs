//! Inverted World - a top-down wave-survival sword game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, combat, waves, map loop)
//! - `tuning`: Data-driven game balance
//! - `audio`: Sound effect seam fed by simulation events

pub mod audio;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the stepper will account for
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Play-field dimensions
    pub const SCREEN_WIDTH: f32 = 960.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Sprite boxes (width == height)
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const ENEMY_SIZE: f32 = 50.0;
    pub const SWORD_SIZE: f32 = 60.0;

    /// Distance from player center to sword center
    pub const SWORD_OFFSET: f32 = 40.0;

    /// How far inside the new map the player lands after a transition
    pub const MAP_ENTRY_OFFSET: f32 = 20.0;

    /// Stick magnitude below which analog input is ignored
    pub const STICK_DEAD_ZONE: f32 = 0.25;
}

/// Wrap a position onto the torus `[0, width) x [0, height)`
#[inline]
pub fn wrap_position(pos: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(wrap_axis(pos.x, width), wrap_axis(pos.y, height))
}

#[inline]
fn wrap_axis(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid rounds tiny negatives up to `extent`
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Unit vector toward `target`, or zero when the points coincide
#[inline]
pub fn direction_to(from: Vec2, target: Vec2) -> Vec2 {
    (target - from).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_is_modulo_not_clamp() {
        let p = wrap_position(Vec2::new(970.0, -10.0), 960.0, 720.0);
        assert!((p.x - 10.0).abs() < 0.001);
        assert!((p.y - 710.0).abs() < 0.001);
    }

    #[test]
    fn test_wrap_keeps_edge_in_half_open_range() {
        let p = wrap_position(Vec2::new(960.0, 720.0), 960.0, 720.0);
        assert_eq!(p, Vec2::ZERO);
    }

    #[test]
    fn test_direction_to_same_point_is_zero() {
        assert_eq!(direction_to(Vec2::ONE, Vec2::ONE), Vec2::ZERO);
        let d = direction_to(Vec2::ZERO, Vec2::new(3.0, 4.0));
        assert!((d.length() - 1.0).abs() < 0.0001);
    }
}
