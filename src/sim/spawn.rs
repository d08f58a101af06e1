//! Probabilistic entity spawning
//!
//! Every running frame makes four independent trials, one per kind and side.
//! Draw order is fixed (fruit left, fruit right, bomb left, bomb right) so a
//! seed replays the same spawns.

use glam::Vec2;
use rand::Rng;

use super::entity::{Entity, EntityKind, Side};
use super::state::Session;
use crate::assets::SkinPair;
use crate::settings::LaunchStyle;

/// Pick a fruit skin index uniformly from `[0, len - 1)`.
///
/// The last skin in the pool is never picked. A single-skin pool reuses
/// index 0 and an empty pool yields nothing.
pub fn pick_skin_index<R: Rng>(rng: &mut R, len: usize) -> Option<usize> {
    match len {
        0 => None,
        1 => Some(0),
        n => Some(rng.random_range(0..n - 1)),
    }
}

/// Initial vertical velocity for a uniform draw `u` in [0, 1)
pub fn initial_vy(launch: LaunchStyle, vy_random_factor: f32, u: f32) -> f32 {
    match launch {
        LaunchStyle::Toss => -(u * vy_random_factor),
        LaunchStyle::Drop => u * vy_random_factor,
    }
}

/// Starting position for an entity of the given radius entering from `x`
pub fn spawn_position(launch: LaunchStyle, x: f32, radius: f32, canvas_height: f32) -> Vec2 {
    match launch {
        LaunchStyle::Toss => Vec2::new(x, canvas_height + radius),
        LaunchStyle::Drop => Vec2::new(x, -radius),
    }
}

/// Build one entity of `kind` on `side`, or `None` if no skin is available
fn make_entity(state: &mut Session, kind: EntityKind, side: Side) -> Option<Entity> {
    let skin: SkinPair = match kind {
        EntityKind::Fruit => {
            let Some(index) = pick_skin_index(&mut state.rng, state.assets.fruit_skins.len()) else {
                log::warn!("No fruit skins loaded, skipping spawn");
                return None;
            };
            state.assets.fruit_skins[index]
        }
        EntityKind::Bomb => state.assets.bomb_skin,
    };

    let x = match side {
        Side::Left => state.boundaries.left,
        Side::Right => state.boundaries.right,
    };
    let u: f32 = state.rng.random();
    let launch = state.settings.launch;
    let vy = initial_vy(launch, state.profile.vy_random_factor, u);
    let radius = kind.policy().diameter / 2.0;
    let pos = spawn_position(launch, x, radius, state.assets.canvas.height);

    let id = state.next_entity_id();
    let entity = Entity::new(id, kind, side, pos, vy, state.profile.gravity, skin)
        .with_drift(side.drift_sign() * state.settings.drift_speed);
    log::debug!("Spawned {:?} {} on {:?} at x={:.1} vy={:.2}", kind, id, side, x, vy);
    Some(entity)
}

/// Run this frame's spawn trials, appending new entities in spawn order.
/// Returns the number spawned.
pub fn spawn(state: &mut Session) -> usize {
    let mut spawned = 0;
    for kind in EntityKind::ALL {
        let threshold = state.profile.trigger_constant(kind);
        for side in Side::ALL {
            let roll: f32 = state.rng.random();
            if roll < threshold {
                continue;
            }
            let Some(entity) = make_entity(state, kind, side) else {
                continue;
            };
            match kind {
                EntityKind::Fruit => state.fruits.push(entity),
                EntityKind::Bomb => state.bombs.push(entity),
            }
            spawned += 1;
        }
    }
    spawned
}
