//! Wave clock and spawn pacing
//!
//! Every `wave_duration` seconds the wave counter ticks up, spawns come
//! faster (down to a floor) and the concurrent-enemy cap rises.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveDirector {
    /// 1-based wave number
    pub wave: u32,
    /// Seconds into the current wave
    pub wave_timer: f32,
    /// Seconds between spawn attempts
    pub spawn_interval: f32,
    /// Seconds until the next spawn attempt
    pub spawn_countdown: f32,
    pub max_enemies: u32,
}

impl WaveDirector {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            wave: 1,
            wave_timer: 0.0,
            spawn_interval: tuning.base_spawn_interval,
            spawn_countdown: tuning.base_spawn_interval,
            max_enemies: tuning.base_max_enemies,
        }
    }

    /// Advance the wave clock. Returns true when a new wave began.
    pub fn advance(&mut self, dt: f32, tuning: &Tuning) -> bool {
        self.wave_timer += dt;
        if self.wave_timer < tuning.wave_duration {
            return false;
        }

        self.wave_timer = 0.0;
        self.wave += 1;
        self.spawn_interval =
            (self.spawn_interval * tuning.spawn_interval_factor).max(tuning.min_spawn_interval);
        self.max_enemies += tuning.enemy_cap_increment;
        true
    }

    /// Run the spawn countdown. Returns true if one enemy should spawn now.
    /// A due spawn at the cap is dropped, not queued.
    pub fn spawn_due(&mut self, dt: f32, live_enemies: usize) -> bool {
        self.spawn_countdown -= dt;
        if self.spawn_countdown > 0.0 {
            return false;
        }
        self.spawn_countdown = self.spawn_interval;
        live_enemies < self.max_enemies as usize
    }
}

/// Random point on the play-field border: a side edge or a top/bottom edge
/// with equal odds, uniform along it
pub fn edge_spawn_point<R: Rng>(rng: &mut R, width: f32, height: f32) -> Vec2 {
    if rng.random_bool(0.5) {
        let x = if rng.random_bool(0.5) { 0.0 } else { width };
        Vec2::new(x, rng.random_range(0.0..height))
    } else {
        let y = if rng.random_bool(0.5) { 0.0 } else { height };
        Vec2::new(rng.random_range(0.0..width), y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_wave_rollover() {
        let tuning = Tuning::default();
        let mut d = WaveDirector::new(&tuning);
        assert!(!d.advance(tuning.wave_duration - 1.0, &tuning));
        assert!(d.advance(1.0, &tuning));
        assert_eq!(d.wave, 2);
        assert_eq!(d.wave_timer, 0.0);
        assert!((d.spawn_interval - tuning.base_spawn_interval * 0.9).abs() < 1e-6);
        assert_eq!(d.max_enemies, tuning.base_max_enemies + tuning.enemy_cap_increment);
    }

    #[test]
    fn test_interval_floor() {
        let tuning = Tuning::default();
        let mut d = WaveDirector::new(&tuning);
        for _ in 0..100 {
            d.advance(tuning.wave_duration, &tuning);
        }
        assert_eq!(d.spawn_interval, tuning.min_spawn_interval);
    }

    #[test]
    fn test_spawn_skipped_at_cap_still_resets() {
        let tuning = Tuning::default();
        let mut d = WaveDirector::new(&tuning);
        let cap = d.max_enemies as usize;
        assert!(!d.spawn_due(tuning.base_spawn_interval, cap));
        assert_eq!(d.spawn_countdown, d.spawn_interval);
        assert!(d.spawn_due(tuning.base_spawn_interval, cap - 1));
    }

    #[test]
    fn test_edge_points_lie_on_border() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let p = edge_spawn_point(&mut rng, 960.0, 720.0);
            let on_side = p.x == 0.0 || p.x == 960.0;
            let on_cap = p.y == 0.0 || p.y == 720.0;
            assert!(on_side || on_cap, "{:?} not on the border", p);
            assert!((0.0..=960.0).contains(&p.x) && (0.0..=720.0).contains(&p.y));
        }
    }

    proptest! {
        #[test]
        fn prop_waves_are_monotone(waves in 0u32..25, split in 0u32..4) {
            let tuning = Tuning::default();
            let mut d = WaveDirector::new(&tuning);
            // power-of-two slices sum back to the wave duration exactly
            let slices = 1u32 << split;
            let dt = tuning.wave_duration / slices as f32;
            let mut last_interval = d.spawn_interval;
            let mut last_cap = d.max_enemies;
            for _ in 0..waves {
                for _ in 0..slices {
                    d.advance(dt, &tuning);
                }
                prop_assert!(d.spawn_interval <= last_interval);
                prop_assert!(d.spawn_interval >= tuning.min_spawn_interval);
                prop_assert!(d.max_enemies >= last_cap);
                last_interval = d.spawn_interval;
                last_cap = d.max_enemies;
            }
            prop_assert_eq!(d.wave, 1 + waves);
        }

        #[test]
        fn prop_never_spawns_past_cap(live in proptest::collection::vec(0usize..20, 1..50)) {
            let tuning = Tuning::default();
            let mut d = WaveDirector::new(&tuning);
            for n in live {
                let due = d.spawn_due(tuning.base_spawn_interval, n);
                prop_assert!(!due || n < d.max_enemies as usize);
                prop_assert!(d.spawn_countdown > 0.0);
            }
        }
    }
}
