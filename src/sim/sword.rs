//! Sword swing: a short-lived hit-volume pinned in front of the player

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::{AnimClock, AnimId, AnimationTable};
use super::entity::{Drawable, EntityId, EntityKind, SpriteRef};
use super::player::Facing;
use super::rect::Rect;
use crate::consts::{SWORD_OFFSET, SWORD_SIZE};

/// Seconds per swing frame
pub const SWORD_FRAME_DELAY: f32 = 0.1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sword {
    pub id: EntityId,
    /// Player that swung it
    pub owner: EntityId,
    pub facing: Facing,
    pub pos: Vec2,
    pub anim: AnimClock,
}

impl Sword {
    pub fn new(id: EntityId, owner: EntityId, facing: Facing, owner_pos: Vec2) -> Self {
        Self {
            id,
            owner,
            facing,
            pos: Self::anchor(facing, owner_pos),
            anim: AnimClock::default(),
        }
    }

    fn anchor(facing: Facing, owner_pos: Vec2) -> Vec2 {
        owner_pos + facing.unit() * SWORD_OFFSET
    }

    pub fn anim_id(&self) -> AnimId {
        match self.facing {
            Facing::Up => AnimId::SwordUp,
            Facing::Down => AnimId::SwordDown,
            Facing::Left => AnimId::SwordLeft,
            Facing::Right => AnimId::SwordRight,
        }
    }

    /// Track the owner and play the swing once. Returns true when finished.
    pub fn tick(&mut self, dt: f32, owner_pos: Vec2, table: &AnimationTable) -> bool {
        self.pos = Self::anchor(self.facing, owner_pos);
        self.anim
            .advance_once(dt, SWORD_FRAME_DELAY, table.frames(self.anim_id()))
    }
}

impl Drawable for Sword {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Sword
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn sprite(&self, table: &AnimationTable) -> SpriteRef {
        let anim = self.anim_id();
        SpriteRef {
            anim,
            frame: self.anim.frame_in(table.frames(anim)),
            flip_x: false,
        }
    }

    fn bounds(&self) -> Rect {
        Rect::centered(self.pos, SWORD_SIZE)
    }
}
