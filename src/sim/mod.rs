//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time supplied by the host, never read from a clock
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies beyond the `PoseSource` trait

pub mod collision;
pub mod entity;
pub mod geometry;
pub mod physics;
pub mod profile;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{ScoreHit, resolve_collisions};
pub use entity::{Entity, EntityKind, KindPolicy, Side};
pub use geometry::{HandKeypoints, Joint, Keypoint, collide_circle, create_hand_keypoints, find_coord};
pub use physics::{physics_step, prune};
pub use profile::{DifficultyProfile, PROFILES};
pub use spawn::spawn;
pub use state::{Boundaries, Session, SessionEvent, SessionPhase};
pub use tick::{frame, set_calibrated, start_game, timer_tick, update};
pub use timer::{DelayedTrigger, IntervalTimer};
