//! Fixed-timestep driver
//!
//! Converts variable frame times into whole `SIM_DT` ticks so the same seed
//! and inputs always produce the same world.

use serde::{Deserialize, Serialize};

use super::state::World;
use super::tick::{TickInput, tick};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedStepper {
    accumulator: f32,
}

impl FixedStepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leftover time not yet simulated
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    /// Run as many fixed ticks as the elapsed frame time allows.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, frame_dt: f32, world: &mut World, input: &TickInput) -> u32 {
        // Long stalls (tab switch, debugger) are dropped, not replayed
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(world, input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    /// Forget accumulated time, e.g. after a pause
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
