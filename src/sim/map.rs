//! The two looped maps: wall layouts and animated backgrounds
//!
//! Walking off the bottom of the upper map lands on the lower map and walking
//! off the top of the lower map returns. Each map has an off-screen strip on
//! the edge that does not lead anywhere.

use serde::{Deserialize, Serialize};

use super::anim::{AnimClock, AnimId, AnimationTable};
use super::rect::Rect;

/// Background frame delay (seconds)
pub const BACKGROUND_FRAME_DELAY: f32 = 0.1;

/// Which map the player is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapId {
    /// Starting map; exits through the bottom edge
    Upper,
    /// Exits through the top edge
    Lower,
}

impl MapId {
    pub fn index(self) -> usize {
        match self {
            MapId::Upper => 0,
            MapId::Lower => 1,
        }
    }
}

/// Solid rectangles for a map, in screen pixels
pub fn walls_for(map: MapId, width: f32, height: f32) -> Vec<Rect> {
    let (boundary, layout): (Rect, &[(f32, f32, f32, f32)]) = match map {
        MapId::Upper => (Rect::new(0.0, -50.0, width, 50.0), UPPER_WALLS),
        MapId::Lower => (Rect::new(0.0, height, width, 50.0), LOWER_WALLS),
    };

    let mut walls = Vec::with_capacity(layout.len() + 1);
    walls.push(boundary);
    walls.extend(layout.iter().map(|&(x, y, w, h)| Rect::new(x, y, w, h)));
    walls
}

/// Animated backdrop clocks, one per map
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Backgrounds {
    upper: AnimClock,
    lower: AnimClock,
}

impl Backgrounds {
    /// Only the visible map's backdrop advances
    pub fn advance(&mut self, map: MapId, dt: f32, table: &AnimationTable) {
        let len = table.frames(AnimId::Background(map));
        self.clock_mut(map)
            .advance_loop(dt, BACKGROUND_FRAME_DELAY, len);
    }

    pub fn frame(&self, map: MapId, table: &AnimationTable) -> usize {
        let clock = match map {
            MapId::Upper => &self.upper,
            MapId::Lower => &self.lower,
        };
        clock.frame_in(table.frames(AnimId::Background(map)))
    }

    fn clock_mut(&mut self, map: MapId) -> &mut AnimClock {
        match map {
            MapId::Upper => &mut self.upper,
            MapId::Lower => &mut self.lower,
        }
    }
}

#[rustfmt::skip]
const UPPER_WALLS: &[(f32, f32, f32, f32)] = &[
    (580.0, 305.0, 25.0, 100.0),
    (607.0, 380.0, 100.0, 25.0),
    (707.0, 341.0, 50.0, 50.0),
    (610.0, 284.0, 50.0, 50.0),
    (623.0, 273.0, 50.0, 50.0),
    (642.0, 274.0, 50.0, 50.0),
    (667.0, 274.0, 50.0, 50.0),
    (683.0, 261.0, 50.0, 50.0),
    (701.0, 248.0, 50.0, 50.0),
    (714.0, 232.0, 50.0, 50.0),
    (727.0, 228.0, 50.0, 50.0),
    (747.0, 230.0, 50.0, 50.0),
    (771.0, 283.0, 50.0, 50.0),
    (772.0, 315.0, 50.0, 50.0),
    (759.0, 323.0, 50.0, 50.0),
    (147.0, 228.0, 100.0, 120.0),
    (337.0, 306.0, 50.0, 100.0),
    (245.0, 303.0, 100.0, 100.0),
    (286.0, 272.0, 50.0, 50.0),
    (327.0, 279.0, 50.0, 50.0),
    (239.0, 244.0, 50.0, 50.0),
    (191.0, 349.0, 50.0, 50.0),
    (535.0, 631.0, 50.0, 100.0),
    (567.0, 595.0, 50.0, 50.0),
    (622.0, 592.0, 50.0, 100.0),
    (289.0, 597.0, 50.0, 120.0),
    (336.0, 597.0, 50.0, 50.0),
    (387.0, 625.0, 50.0, 100.0),
    (635.0, 1.0, 160.0, 50.0),
    (146.0, 3.0, 160.0, 50.0),
    (918.0, 241.0, 50.0, 50.0),
    (2.0, 198.0, 30.0, 50.0),
    (147.0, 63.0, 30.0, 50.0),
    (770.0, 62.0, 30.0, 50.0),
    (776.0, 458.0, 80.0, 50.0),
    (152.0, 452.0, 80.0, 50.0),
    (671.0, 662.0, 280.0, 50.0),
    (0.0, 633.0, 280.0, 50.0),
];

#[rustfmt::skip]
const LOWER_WALLS: &[(f32, f32, f32, f32)] = &[
    (395.0, 2.0, 45.0, 50.0),
    (534.0, 4.0, 30.0, 50.0),
    (0.0, 620.0, 280.0, 50.0),
    (718.0, 618.0, 280.0, 50.0),
    (633.0, 664.0, 100.0, 50.0),
    (689.0, 636.0, 50.0, 50.0),
    (291.0, 662.0, 50.0, 50.0),
    (625.0, 251.0, 50.0, 50.0),
    (677.0, 248.0, 50.0, 50.0),
    (731.0, 209.0, 50.0, 50.0),
    (728.0, 162.0, 50.0, 50.0),
    (727.0, 107.0, 50.0, 50.0),
    (627.0, 50.0, 50.0, 50.0),
    (672.0, 54.0, 50.0, 50.0),
    (578.0, 33.0, 50.0, 50.0),
    (188.0, 104.0, 50.0, 50.0),
    (189.0, 151.0, 50.0, 50.0),
    (192.0, 205.0, 50.0, 50.0),
    (191.0, 254.0, 50.0, 50.0),
    (238.0, 249.0, 50.0, 50.0),
    (280.0, 245.0, 50.0, 50.0),
    (314.0, 248.0, 50.0, 50.0),
    (336.0, 273.0, 50.0, 50.0),
    (337.0, 290.0, 50.0, 50.0),
    (380.0, 293.0, 50.0, 50.0),
    (244.0, 53.0, 50.0, 50.0),
    (295.0, 51.0, 50.0, 50.0),
    (324.0, 38.0, 50.0, 50.0),
    (339.0, 23.0, 50.0, 50.0),
    (811.0, 62.0, 50.0, 50.0),
    (814.0, 111.0, 50.0, 50.0),
    (798.0, 144.0, 50.0, 50.0),
    (787.0, 177.0, 50.0, 50.0),
    (766.0, 185.0, 50.0, 50.0),
    (768.0, 225.0, 50.0, 50.0),
    (768.0, 259.0, 50.0, 50.0),
    (768.0, 294.0, 50.0, 50.0),
    (763.0, 312.0, 50.0, 50.0),
    (861.0, 12.0, 50.0, 50.0),
    (897.0, 8.0, 50.0, 50.0),
    (724.0, 351.0, 50.0, 50.0),
    (697.0, 357.0, 50.0, 50.0),
    (696.0, 383.0, 50.0, 50.0),
    (660.0, 361.0, 50.0, 50.0),
    (640.0, 348.0, 50.0, 50.0),
    (641.0, 333.0, 50.0, 50.0),
    (595.0, 330.0, 50.0, 50.0),
    (567.0, 330.0, 50.0, 50.0),
    (536.0, 294.0, 50.0, 50.0),
    (579.0, 294.0, 50.0, 50.0),
    (599.0, 271.0, 50.0, 50.0),
    (870.0, 256.0, 30.0, 50.0),
    (873.0, 291.0, 30.0, 50.0),
    (877.0, 346.0, 30.0, 50.0),
    (824.0, 312.0, 30.0, 50.0),
    (823.0, 285.0, 30.0, 50.0),
    (107.0, 65.0, 50.0, 50.0),
    (105.0, 111.0, 50.0, 50.0),
    (110.0, 151.0, 50.0, 50.0),
    (158.0, 212.0, 50.0, 50.0),
    (151.0, 274.0, 50.0, 50.0),
    (152.0, 273.0, 50.0, 50.0),
    (1.0, 2.0, 50.0, 50.0),
    (26.0, 3.0, 50.0, 50.0),
    (44.0, 3.0, 50.0, 50.0),
    (80.0, 7.0, 50.0, 50.0),
    (86.0, 8.0, 50.0, 50.0),
    (171.0, 323.0, 50.0, 50.0),
    (203.0, 340.0, 50.0, 50.0),
    (208.0, 355.0, 50.0, 50.0),
    (233.0, 362.0, 50.0, 50.0),
    (246.0, 381.0, 50.0, 50.0),
    (269.0, 375.0, 50.0, 50.0),
    (270.0, 373.0, 50.0, 50.0),
    (298.0, 358.0, 50.0, 50.0),
    (309.0, 342.0, 50.0, 50.0),
    (321.0, 339.0, 50.0, 50.0),
    (350.0, 338.0, 50.0, 50.0),
    (372.0, 337.0, 50.0, 50.0),
    (379.0, 340.0, 50.0, 50.0),
];
