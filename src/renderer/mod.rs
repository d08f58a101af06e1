//! Renderer-facing output
//!
//! The host draws. This module only describes what to draw: per-entity
//! snapshots and HUD values, plus packed instance data for a sprite batch.

pub mod instance;
pub mod snapshot;

pub use instance::{EntityInstance, build_instances};
pub use snapshot::{EntityRenderer, EntitySnapshot, FrameSnapshot, HudSnapshot, show_all};
