//! Per-frame motion and optional pruning

use super::entity::Entity;
use crate::assets::Canvas;
use crate::settings::PruneConfig;

/// Advance every entity one step in spawn order, destroyed ones included
pub fn physics_step(entities: &mut [Entity], canvas: &Canvas) {
    for entity in entities.iter_mut() {
        entity.advance();
        entity.settle(canvas);
    }
}

/// Whether pruning should drop this entity now
pub fn is_finished(entity: &Entity, canvas: &Canvas, config: &PruneConfig) -> bool {
    (entity.is_destroyed() && entity.destroyed_frames() >= config.grace_frames)
        || entity.is_below(canvas)
}

/// Remove finished entities, keeping the rest in order. Returns how many were removed.
pub fn prune(entities: &mut Vec<Entity>, canvas: &Canvas, config: &PruneConfig) -> usize {
    let before = entities.len();
    entities.retain(|e| !is_finished(e, canvas, config));
    before - entities.len()
}
