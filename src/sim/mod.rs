//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep via `FixedStepper`
//! - Seeded RNG only, owned by the `World`
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or platform dependencies

pub mod anim;
pub mod combat;
pub mod director;
pub mod enemy;
pub mod entity;
pub mod map;
pub mod player;
pub mod rect;
pub mod state;
pub mod stepper;
pub mod sword;
pub mod tick;

pub use anim::{AnimClock, AnimId, AnimationTable, FrameSource, PlayerPose};
pub use combat::{ContactOutcome, resolve_player_contact, resolve_sword_hits, resolve_wall_overlap};
pub use director::{WaveDirector, edge_spawn_point};
pub use enemy::{Enemy, EnemyKind, EnemyState, EnemyStep};
pub use entity::{Drawable, EntityId, EntityKind, RenderItem, SpriteRef};
pub use map::{Backgrounds, MapId, walls_for};
pub use player::{Facing, Player};
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, World};
pub use stepper::FixedStepper;
pub use sword::Sword;
pub use tick::{TickInput, tick};
