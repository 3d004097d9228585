//! World state: every entity, the session counters and the seeded RNG
//!
//! The world is the single owner of all mutable game state. Entities refer to
//! each other only by id; all mutation happens inside `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::anim::{AnimId, AnimationTable};
use super::director::{WaveDirector, edge_spawn_point};
use super::enemy::{Enemy, EnemyKind};
use super::entity::{Drawable, EntityId, EntityKind, RenderItem, SpriteRef};
use super::map::{Backgrounds, MapId, walls_for};
use super::player::Player;
use super::rect::Rect;
use super::sword::Sword;
use crate::Tuning;
use crate::consts::MAP_ENTRY_OFFSET;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Lives exhausted; the world no longer ticks
    GameOver,
}

/// Things that happened during a tick, for audio and UI feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    SwordSwing,
    EnemySpawned { id: EntityId },
    EnemyKilled { id: EntityId },
    PlayerHit { lives_left: u32 },
    WaveStarted { wave: u32 },
    MapChanged { map: MapId },
    GameOver { score: u64 },
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub animations: AnimationTable,
    pub phase: GamePhase,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub map: MapId,
    pub backgrounds: Backgrounds,
    pub player: Player,
    /// Sorted by id (creation order)
    pub enemies: Vec<Enemy>,
    /// At most one in flight
    pub swords: Vec<Sword>,
    pub walls: Vec<Rect>,
    pub director: WaveDirector,
    /// Debug overlay of wall rectangles
    pub show_walls: bool,
    /// Buttons held on the previous tick (for press detection)
    pub(crate) attack_held: bool,
    pub(crate) special_held: bool,
    /// Pending feedback events, drained by the caller
    pub events: Vec<GameEvent>,
    next_id: EntityId,
}

impl World {
    /// New session with the stock animation frame counts
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self::with_animations(tuning, AnimationTable::default(), seed)
    }

    /// New session using frame counts reported by the asset layer.
    ///
    /// `tuning` is expected to have passed `Tuning::validate`; out-of-range
    /// values are logged and the session still runs.
    pub fn with_animations(tuning: Tuning, animations: AnimationTable, seed: u64) -> Self {
        if let Err(e) = tuning.validate() {
            log::warn!("Starting with unvalidated tuning: {}", e);
        }
        let map = MapId::Upper;
        let center = Vec2::new(tuning.width / 2.0, tuning.height / 2.0);
        let player = Player::new(1, center, &tuning);
        let walls = walls_for(map, tuning.width, tuning.height);
        let director = WaveDirector::new(&tuning);

        log::info!(
            "New session: seed={}, field={}x{}, lives={}",
            seed,
            tuning.width,
            tuning.height,
            tuning.start_lives
        );

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            animations,
            phase: GamePhase::Playing,
            score: 0,
            time_ticks: 0,
            map,
            backgrounds: Backgrounds::default(),
            player,
            enemies: Vec::new(),
            swords: Vec::new(),
            walls,
            director,
            show_walls: false,
            attack_held: false,
            special_held: false,
            events: Vec::new(),
            next_id: 2,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.player.lives
    }

    pub fn wave(&self) -> u32 {
        self.director.wave
    }

    /// 0 for the upper map, 1 for the lower
    pub fn current_map(&self) -> usize {
        self.map.index()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn spawn_interval(&self) -> f32 {
        self.director.spawn_interval
    }

    pub fn max_enemies(&self) -> u32 {
        self.director.max_enemies
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Swing the sword if the player is able to
    pub fn try_attack(&mut self) -> bool {
        let id = self.next_id;
        match self.player.attack(id, &self.tuning) {
            Some(sword) => {
                self.next_id += 1;
                self.swords.push(sword);
                self.events.push(GameEvent::SwordSwing);
                true
            }
            None => false,
        }
    }

    /// Spawn one enemy on a random border point
    pub fn spawn_enemy(&mut self) -> EntityId {
        let pos = edge_spawn_point(&mut self.rng, self.tuning.width, self.tuning.height);
        let kind = if self.rng.random_bool(0.5) {
            EnemyKind::Vampire
        } else {
            EnemyKind::Skeleton
        };
        let id = self.next_entity_id();
        self.enemies.push(Enemy::new(id, kind, pos, &self.tuning));
        self.events.push(GameEvent::EnemySpawned { id });
        log::debug!("Spawned {:?} #{} at ({:.0}, {:.0})", kind, id, pos.x, pos.y);
        id
    }

    /// Switch maps: load its walls and drop any swing in progress
    pub fn change_map(&mut self, map: MapId) {
        self.map = map;
        self.walls = walls_for(map, self.tuning.width, self.tuning.height);
        if !self.swords.is_empty() {
            self.swords.clear();
            self.player.attacking = false;
        }
        self.events.push(GameEvent::MapChanged { map });
        log::info!("Map changed to {:?}", map);
    }

    /// Move to the other map if the player crossed its open edge
    pub(crate) fn check_map_transition(&mut self) -> bool {
        let height = self.tuning.height;
        match self.map {
            MapId::Upper if self.player.pos.y > height => {
                self.change_map(MapId::Lower);
                self.player.pos.y = MAP_ENTRY_OFFSET;
                true
            }
            MapId::Lower if self.player.pos.y < 0.0 => {
                self.change_map(MapId::Upper);
                self.player.pos.y = height - MAP_ENTRY_OFFSET;
                true
            }
            _ => false,
        }
    }

    /// Draw list: background first, then entities in creation order
    pub fn render_list(&self) -> Vec<RenderItem> {
        let table = &self.animations;
        let mut items = Vec::with_capacity(2 + self.enemies.len() + self.swords.len());

        items.push(RenderItem {
            id: 0,
            kind: EntityKind::Background,
            sprite: SpriteRef {
                anim: AnimId::Background(self.map),
                frame: self.backgrounds.frame(self.map, table),
                flip_x: false,
            },
            pos: Vec2::new(self.tuning.width / 2.0, self.tuning.height / 2.0),
        });

        let mut entities: Vec<&dyn Drawable> = Vec::with_capacity(1 + self.enemies.len() + self.swords.len());
        entities.push(&self.player);
        entities.extend(self.enemies.iter().map(|e| e as &dyn Drawable));
        entities.extend(self.swords.iter().map(|s| s as &dyn Drawable));
        entities.sort_by_key(|e| e.id());

        items.extend(entities.into_iter().map(|e| RenderItem::of(e, table)));
        items
    }
}
