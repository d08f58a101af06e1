//! Hand-entity collision resolution
//!
//! Each tracked hand is tested against every live entity. A hand may hit
//! several entities in one frame; an entity scores only on the hit that
//! destroys it.

use glam::Vec2;

use super::entity::Entity;
use super::geometry::{HandKeypoints, collide_circle};

/// A scoring hit produced by a hand this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreHit {
    pub entity_id: u32,
    pub delta: i64,
    /// Entity position at the moment of the hit
    pub pos: Vec2,
}

/// Test one hand against a group of entities, destroying what it touches
pub fn resolve_hand(hand: Vec2, entities: &mut [Entity], hits: &mut Vec<ScoreHit>) {
    for entity in entities.iter_mut() {
        let policy = entity.kind.policy();
        if policy.requires_shown && !entity.is_shown() {
            continue;
        }
        if !collide_circle(hand, policy.hand_radius, entity.pos, entity.radius()) {
            continue;
        }
        if entity.destroy() {
            log::debug!("{:?} {} hit at {:?}", entity.kind, entity.id, entity.pos);
            hits.push(ScoreHit {
                entity_id: entity.id,
                delta: policy.score,
                pos: entity.pos,
            });
        }
    }
}

/// Resolve both hands against fruit then bombs, left hand first
pub fn resolve_collisions(
    hands: &HandKeypoints,
    fruits: &mut [Entity],
    bombs: &mut [Entity],
) -> Vec<ScoreHit> {
    let mut hits = Vec::new();
    for hand in hands.iter() {
        resolve_hand(hand, fruits, &mut hits);
        resolve_hand(hand, bombs, &mut hits);
    }
    hits
}
