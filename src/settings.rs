//! Session settings
//!
//! Supplied by the host's menu as JSON. Missing fields fall back to defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::DifficultyProfile;

/// Difficulty preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Map the menu's integer game mode
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Difficulty::Easy),
            1 => Some(Difficulty::Medium),
            2 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    /// Tuning profile for this preset
    pub fn profile(&self) -> DifficultyProfile {
        crate::sim::profile::PROFILES[self.index()]
    }
}

/// Where entities enter the canvas and which way they start moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LaunchStyle {
    /// Spawn below the bottom edge, launched upward with vy in (-factor, 0]
    #[default]
    Toss,
    /// Spawn above the top edge, falling with vy in [0, factor)
    Drop,
}

/// Removal of finished entities from the live set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneConfig {
    /// Frames a destroyed entity stays around (explode sprite) before removal
    pub grace_frames: u32,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self { grace_frames: 30 }
    }
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    /// Round length in seconds
    pub round_seconds: i32,
    /// Delay between calibration and game start
    pub start_delay_secs: f32,
    pub launch: LaunchStyle,
    /// Horizontal drift magnitude (pixels/frame), signed by spawn side
    pub drift_speed: f32,
    /// Opt-in pruning; `None` keeps every entity for the whole session
    pub prune: Option<PruneConfig>,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            round_seconds: ROUND_SECONDS,
            start_delay_secs: START_DELAY_SECS,
            launch: LaunchStyle::Toss,
            drift_speed: 0.0,
            prune: None,
            music_volume: MUSIC_VOLUME,
        }
    }
}

/// Rejected settings
#[derive(Debug)]
pub enum SettingsError {
    Parse(serde_json::Error),
    RoundSeconds(i32),
    StartDelay(f32),
    DriftSpeed(f32),
    MusicVolume(f32),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(e) => write!(f, "invalid settings JSON: {e}"),
            SettingsError::RoundSeconds(v) => write!(f, "round length must be positive, got {v}"),
            SettingsError::StartDelay(v) => {
                write!(f, "start delay must be finite and non-negative, got {v}")
            }
            SettingsError::DriftSpeed(v) => write!(f, "drift speed must be finite, got {v}"),
            SettingsError::MusicVolume(v) => write!(f, "music volume must be in 0..=1, got {v}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

impl Settings {
    /// Settings for a menu game mode index, defaults otherwise
    pub fn for_game_mode(index: usize) -> Option<Self> {
        Difficulty::from_index(index).map(|difficulty| Self {
            difficulty,
            ..Self::default()
        })
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.round_seconds <= 0 {
            return Err(SettingsError::RoundSeconds(self.round_seconds));
        }
        if !self.start_delay_secs.is_finite() || self.start_delay_secs < 0.0 {
            return Err(SettingsError::StartDelay(self.start_delay_secs));
        }
        if !self.drift_speed.is_finite() {
            return Err(SettingsError::DriftSpeed(self.drift_speed));
        }
        if !(0.0..=1.0).contains(&self.music_volume) {
            return Err(SettingsError::MusicVolume(self.music_volume));
        }
        Ok(())
    }

    /// Active tuning profile
    pub fn profile(&self) -> DifficultyProfile {
        self.difficulty.profile()
    }
}
