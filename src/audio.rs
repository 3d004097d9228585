//! Audio seam
//!
//! The simulation only raises `GameEvent`s; a sink turns the ones that make
//! noise into sound effects. Playback itself lives outside this crate.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player swings the sword
    SwordSwing,
    /// Enemy enters the field
    EnemySpawn,
    /// Enemy slain
    EnemyDeath,
    /// Player loses a life
    PlayerHit,
}

impl SoundEffect {
    /// Effect for a simulation event, if it makes a sound
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::SwordSwing => Some(SoundEffect::SwordSwing),
            GameEvent::EnemySpawned { .. } => Some(SoundEffect::EnemySpawn),
            GameEvent::EnemyKilled { .. } => Some(SoundEffect::EnemyDeath),
            GameEvent::PlayerHit { .. } => Some(SoundEffect::PlayerHit),
            GameEvent::WaveStarted { .. }
            | GameEvent::MapChanged { .. }
            | GameEvent::GameOver { .. } => None,
        }
    }
}

/// Fire-and-forget audio output
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
    fn start_music(&mut self);
    fn stop_music(&mut self);
}

/// Sink that only logs, for headless runs
#[derive(Debug, Clone, Default)]
pub struct LogAudio {
    music_playing: bool,
    effects_played: u64,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects played since creation
    pub fn effects_played(&self) -> u64 {
        self.effects_played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.effects_played += 1;
        log::debug!("sfx {:?}", effect);
    }

    fn start_music(&mut self) {
        if !self.music_playing {
            self.music_playing = true;
            log::debug!("music started");
        }
    }

    fn stop_music(&mut self) {
        if self.music_playing {
            self.music_playing = false;
            log::debug!("music stopped");
        }
    }
}

/// Play the sound for each event, in order. Returns how many were played.
pub fn dispatch_events(sink: &mut dyn AudioSink, events: &[GameEvent]) -> usize {
    let mut played = 0;
    for effect in events.iter().filter_map(SoundEffect::for_event) {
        sink.play(effect);
        played += 1;
    }
    played
}
