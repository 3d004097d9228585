//! What the renderer and the collision pass can ask of any entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::{AnimId, AnimationTable};
use super::rect::Rect;

/// Stable identifier, allocated in creation order
pub type EntityId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Background,
    Player,
    Enemy,
    Sword,
}

/// The frame an entity wants drawn this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteRef {
    pub anim: AnimId,
    pub frame: usize,
    /// Mirror horizontally when drawing
    pub flip_x: bool,
}

/// Capability shared by every on-screen entity
pub trait Drawable {
    fn id(&self) -> EntityId;
    fn kind(&self) -> EntityKind;
    /// Sprite center in screen pixels
    fn position(&self) -> Vec2;
    fn sprite(&self, table: &AnimationTable) -> SpriteRef;
    /// Hit-volume used by the combat pass
    fn bounds(&self) -> Rect;
}

/// One entry of the per-tick draw list
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderItem {
    pub id: EntityId,
    pub kind: EntityKind,
    pub sprite: SpriteRef,
    pub pos: Vec2,
}

impl RenderItem {
    pub fn of(entity: &dyn Drawable, table: &AnimationTable) -> Self {
        Self {
            id: entity.id(),
            kind: entity.kind(),
            sprite: entity.sprite(table),
            pos: entity.position(),
        }
    }
}
