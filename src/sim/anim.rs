//! Animation ids, frame clocks and the frame-count table
//!
//! Frames themselves belong to the asset layer. The simulation only needs to
//! know how many frames each sequence has so it can step and finish them.

use serde::{Deserialize, Serialize};

use super::map::MapId;

/// Every frame sequence the simulation can ask the renderer to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimId {
    PlayerIdleLeft,
    PlayerIdleRight,
    PlayerWalkLeft,
    PlayerWalkRight,
    PlayerKillLeft,
    PlayerKillRight,
    SwordUp,
    SwordDown,
    SwordLeft,
    SwordRight,
    /// Vampire walk/attack/death (one shared sequence)
    Vampire,
    /// Skeleton walk/attack/death (one shared sequence)
    Skeleton,
    Background(MapId),
}

impl AnimId {
    pub const COUNT: usize = 14;

    pub const ALL: [AnimId; Self::COUNT] = [
        AnimId::PlayerIdleLeft,
        AnimId::PlayerIdleRight,
        AnimId::PlayerWalkLeft,
        AnimId::PlayerWalkRight,
        AnimId::PlayerKillLeft,
        AnimId::PlayerKillRight,
        AnimId::SwordUp,
        AnimId::SwordDown,
        AnimId::SwordLeft,
        AnimId::SwordRight,
        AnimId::Vampire,
        AnimId::Skeleton,
        AnimId::Background(MapId::Upper),
        AnimId::Background(MapId::Lower),
    ];

    fn index(self) -> usize {
        match self {
            AnimId::PlayerIdleLeft => 0,
            AnimId::PlayerIdleRight => 1,
            AnimId::PlayerWalkLeft => 2,
            AnimId::PlayerWalkRight => 3,
            AnimId::PlayerKillLeft => 4,
            AnimId::PlayerKillRight => 5,
            AnimId::SwordUp => 6,
            AnimId::SwordDown => 7,
            AnimId::SwordLeft => 8,
            AnimId::SwordRight => 9,
            AnimId::Vampire => 10,
            AnimId::Skeleton => 11,
            AnimId::Background(MapId::Upper) => 12,
            AnimId::Background(MapId::Lower) => 13,
        }
    }

    /// Frame count shipped with the game's art
    pub fn default_frames(self) -> usize {
        match self {
            AnimId::PlayerIdleLeft
            | AnimId::PlayerIdleRight
            | AnimId::PlayerWalkLeft
            | AnimId::PlayerWalkRight => 3,
            AnimId::PlayerKillLeft | AnimId::PlayerKillRight => 1,
            AnimId::SwordUp | AnimId::SwordDown | AnimId::SwordLeft | AnimId::SwordRight => 2,
            AnimId::Vampire | AnimId::Skeleton => 4,
            AnimId::Background(_) => 8,
        }
    }
}

/// Visual state of the player, resolved each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPose {
    IdleLeft,
    IdleRight,
    WalkLeft,
    WalkRight,
    KillLeft,
    KillRight,
}

impl PlayerPose {
    pub fn anim(self) -> AnimId {
        match self {
            PlayerPose::IdleLeft => AnimId::PlayerIdleLeft,
            PlayerPose::IdleRight => AnimId::PlayerIdleRight,
            PlayerPose::WalkLeft => AnimId::PlayerWalkLeft,
            PlayerPose::WalkRight => AnimId::PlayerWalkRight,
            PlayerPose::KillLeft => AnimId::PlayerKillLeft,
            PlayerPose::KillRight => AnimId::PlayerKillRight,
        }
    }

    /// Seconds per frame
    pub fn frame_delay(self) -> f32 {
        match self {
            PlayerPose::IdleLeft | PlayerPose::IdleRight => 0.3,
            PlayerPose::WalkLeft | PlayerPose::WalkRight => 0.15,
            PlayerPose::KillLeft | PlayerPose::KillRight => 0.2,
        }
    }
}

/// Asset provider seam: how many frames the loaded art has per sequence
pub trait FrameSource {
    fn frame_count(&self, anim: AnimId) -> usize;
}

/// Frame counts per animation, never zero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationTable {
    frames: [usize; AnimId::COUNT],
}

impl Default for AnimationTable {
    fn default() -> Self {
        let mut frames = [1; AnimId::COUNT];
        for anim in AnimId::ALL {
            frames[anim.index()] = anim.default_frames();
        }
        Self { frames }
    }
}

impl AnimationTable {
    /// Build from whatever the asset layer managed to load.
    /// Missing sequences fall back to a single placeholder frame.
    pub fn from_source(source: &dyn FrameSource) -> Self {
        let mut frames = [1; AnimId::COUNT];
        for anim in AnimId::ALL {
            let count = source.frame_count(anim);
            if count == 0 {
                log::warn!("No frames for {:?}, using placeholder", anim);
            }
            frames[anim.index()] = count.max(1);
        }
        Self { frames }
    }

    #[inline]
    pub fn frames(&self, anim: AnimId) -> usize {
        self.frames[anim.index()]
    }
}

/// Frame index plus time accumulated toward the next frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimClock {
    pub frame: usize,
    pub timer: f32,
}

impl AnimClock {
    pub fn reset(&mut self) {
        self.frame = 0;
        self.timer = 0.0;
    }

    /// Step a looping sequence
    pub fn advance_loop(&mut self, dt: f32, delay: f32, len: usize) {
        self.timer += dt;
        if self.timer >= delay {
            self.timer = 0.0;
            self.frame = (self.frame + 1) % len.max(1);
        }
    }

    /// Step a one-shot sequence. Returns true on the step that runs past the
    /// last frame; the frame index wraps back to 0 at that point.
    pub fn advance_once(&mut self, dt: f32, delay: f32, len: usize) -> bool {
        self.timer += dt;
        if self.timer >= delay {
            self.timer = 0.0;
            self.frame += 1;
            if self.frame >= len {
                self.frame = 0;
                return true;
            }
        }
        false
    }

    /// Frame to draw from a sequence of `len` frames
    #[inline]
    pub fn frame_in(&self, len: usize) -> usize {
        self.frame % len.max(1)
    }
}
