//! Difficulty tuning profiles

use serde::{Deserialize, Serialize};

/// Spawn and motion tuning for one difficulty level.
///
/// Trigger constants are per-frame thresholds: a uniform draw at or above the
/// constant spawns an entity, so values near 1.0 make spawns rare.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub fruit_trigger_constant: f32,
    pub bomb_trigger_constant: f32,
    /// Bounds the magnitude of the initial vertical velocity (pixels/frame)
    pub vy_random_factor: f32,
    /// Vertical acceleration (pixels/frame²)
    pub gravity: f32,
}

/// Profiles ordered easy, medium, hard
pub const PROFILES: [DifficultyProfile; 3] = [
    DifficultyProfile {
        fruit_trigger_constant: 0.98,
        bomb_trigger_constant: 0.995,
        vy_random_factor: 15.0,
        gravity: 0.15,
    },
    DifficultyProfile {
        fruit_trigger_constant: 0.97,
        bomb_trigger_constant: 0.99,
        vy_random_factor: 20.0,
        gravity: 0.3,
    },
    DifficultyProfile {
        fruit_trigger_constant: 0.96,
        bomb_trigger_constant: 0.99,
        vy_random_factor: 24.0,
        gravity: 0.4,
    },
];

impl DifficultyProfile {
    /// Profile for a `gameMode` index, `None` if out of range
    pub fn by_index(index: usize) -> Option<Self> {
        PROFILES.get(index).copied()
    }

    /// Trigger threshold for the given entity kind
    pub fn trigger_constant(&self, kind: super::EntityKind) -> f32 {
        match kind {
            super::EntityKind::Fruit => self.fruit_trigger_constant,
            super::EntityKind::Bomb => self.bomb_trigger_constant,
        }
    }
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        PROFILES[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_increase_in_difficulty() {
        for pair in PROFILES.windows(2) {
            assert!(pair[1].fruit_trigger_constant < pair[0].fruit_trigger_constant);
            assert!(pair[1].bomb_trigger_constant <= pair[0].bomb_trigger_constant);
            assert!(pair[1].gravity > pair[0].gravity);
        }
    }

    #[test]
    fn test_by_index() {
        assert_eq!(DifficultyProfile::by_index(1), Some(PROFILES[1]));
        assert_eq!(DifficultyProfile::by_index(3), None);
    }
}
