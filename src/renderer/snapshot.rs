//! Serializable frame snapshots

use serde::{Deserialize, Serialize};

use crate::assets::ImageHandle;
use crate::sim::{Boundaries, Entity, EntityKind, Session, SessionPhase, Side};

/// What the renderer needs to draw one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub id: u32,
    pub kind: EntityKind,
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub diameter: f32,
    pub is_shown: bool,
    pub is_destroyed: bool,
    /// Active or explode sprite, whichever applies now
    pub image: ImageHandle,
}

impl From<&Entity> for EntitySnapshot {
    fn from(entity: &Entity) -> Self {
        Self {
            id: entity.id,
            kind: entity.kind,
            side: entity.side,
            x: entity.pos.x,
            y: entity.pos.y,
            diameter: entity.diameter,
            is_shown: entity.is_shown(),
            is_destroyed: entity.is_destroyed(),
            image: entity.visual(),
        }
    }
}

/// HUD text values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub score: i64,
    pub time: i32,
    pub phase: SessionPhase,
    pub game_over: bool,
    /// Seconds until start while counting down
    pub countdown: Option<f32>,
}

/// Everything drawn for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub hud: HudSnapshot,
    /// Spawn boundaries, for debug overlays
    pub boundaries: Boundaries,
    pub entities: Vec<EntitySnapshot>,
}

impl FrameSnapshot {
    pub fn capture(state: &Session) -> Self {
        Self {
            hud: HudSnapshot {
                score: state.score,
                time: state.time,
                phase: state.phase(),
                game_over: state.game_over,
                countdown: state.countdown_remaining(),
            },
            boundaries: state.boundaries,
            entities: state.entities().map(EntitySnapshot::from).collect(),
        }
    }
}

/// Host-side drawing hook, called once per entity per frame
pub trait EntityRenderer {
    fn show(&mut self, entity: &EntitySnapshot);
}

/// Hand every entity to the renderer in draw order (fruit, then bombs)
pub fn show_all<R: EntityRenderer + ?Sized>(state: &Session, renderer: &mut R) {
    for entity in state.entities() {
        renderer.show(&EntitySnapshot::from(entity));
    }
}
