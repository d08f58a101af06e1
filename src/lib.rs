//! Fruit Swipe - session loop of a pose-controlled arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, collisions, session lifecycle)
//! - `renderer`: Snapshots and instance data handed to the host renderer
//! - `platform`: Pose source abstraction and browser bindings
//! - `assets`: Preloaded image handles and canvas size
//! - `audio`: Background music driven by session events
//! - `settings`: Difficulty and session tuning

pub mod assets;
pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetBundle, Canvas, ImageHandle, SkinPair};
pub use settings::{Difficulty, LaunchStyle, PruneConfig, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Hand reach when testing against fruit (fruit is easier to hit)
    pub const FRUIT_HAND_RADIUS: f32 = 100.0;
    /// Hand reach when testing against bombs
    pub const BOMB_HAND_RADIUS: f32 = 80.0;

    /// Score awarded for slicing a fruit
    pub const FRUIT_SCORE: i64 = 100;
    /// Score lost for touching a bomb
    pub const BOMB_SCORE: i64 = -100;

    /// Entity sprite diameters (pixels)
    pub const FRUIT_DIAMETER: f32 = 80.0;
    pub const BOMB_DIAMETER: f32 = 70.0;

    /// Horizontal offset from a shoulder to its side's spawn boundary
    pub const SHOULDER_OFFSET: f32 = 120.0;

    /// Round length in seconds
    pub const ROUND_SECONDS: i32 = 60;
    /// Delay between calibration and game start
    pub const START_DELAY_SECS: f32 = 4.0;
    /// Countdown timer period
    pub const TIMER_PERIOD_SECS: f32 = 1.0;

    /// Default canvas size (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Background music volume
    pub const MUSIC_VOLUME: f32 = 0.2;
}
