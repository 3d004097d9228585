//! Overlap resolution: sword hits, enemy contact and wall blocking
//!
//! All tests are box-vs-box on the entities' `bounds()`.

use super::enemy::Enemy;
use super::entity::{Drawable, EntityId};
use super::player::Player;
use super::rect::Rect;
use super::sword::Sword;
use crate::Tuning;

/// Result of checking the player against live enemies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// No hit this tick (or the player is still invulnerable)
    Clear,
    /// Lost a life, grace period started
    Hit,
    /// Lost the last life
    Fatal,
}

/// Apply one point of damage for every overlapping (sword, live enemy) pair.
/// Returns the ids of enemies killed this tick.
pub fn resolve_sword_hits(swords: &[Sword], enemies: &mut [Enemy]) -> Vec<EntityId> {
    let mut killed = Vec::new();
    for sword in swords {
        let blade = sword.bounds();
        for enemy in enemies.iter_mut() {
            if enemy.is_dying() || !blade.intersects(&enemy.bounds()) {
                continue;
            }
            enemy.take_damage(1);
            if enemy.is_dying() {
                killed.push(enemy.id);
            }
        }
    }
    killed
}

/// At most one life is lost per tick, however many enemies overlap
pub fn resolve_player_contact(
    player: &mut Player,
    enemies: &[Enemy],
    tuning: &Tuning,
) -> ContactOutcome {
    if player.is_invulnerable() {
        return ContactOutcome::Clear;
    }

    let body = player.bounds();
    let touched = enemies
        .iter()
        .any(|e| !e.is_dying() && e.bounds().intersects(&body));
    if !touched {
        return ContactOutcome::Clear;
    }

    player.lives = player.lives.saturating_sub(1);
    if player.lives > 0 {
        player.invulnerable = tuning.invulnerability_duration;
        ContactOutcome::Hit
    } else {
        ContactOutcome::Fatal
    }
}

/// Undo the last movement step if it ended inside a wall.
/// Returns true when the position was rolled back.
pub fn resolve_wall_overlap(player: &mut Player, walls: &[Rect], dt: f32) -> bool {
    let body = player.bounds();
    if walls.iter().any(|w| w.intersects(&body)) {
        player.pos -= player.last_applied_vel * dt;
        true
    } else {
        false
    }
}
