//! Geometry helpers and keypoint lookup
//!
//! Pure functions only. Keypoints arrive from the pose estimator already
//! filtered for confidence; lookups here match by joint name and nothing else.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Circle-circle overlap test.
///
/// True iff the distance between centers is strictly less than the sum of the
/// radii. Touching circles do not collide.
#[inline]
pub fn collide_circle(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// A named joint reported by the pose estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub name: String,
    pub x: f32,
    pub y: f32,
    #[serde(default, alias = "score")]
    pub confidence: Option<f32>,
}

impl Keypoint {
    pub fn new(name: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            confidence: None,
        }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Joints the session reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joint {
    LeftWrist,
    RightWrist,
    LeftShoulder,
    RightShoulder,
}

impl Joint {
    /// Estimator's name for this joint
    pub fn as_str(&self) -> &'static str {
        match self {
            Joint::LeftWrist => "leftWrist",
            Joint::RightWrist => "rightWrist",
            Joint::LeftShoulder => "leftShoulder",
            Joint::RightShoulder => "rightShoulder",
        }
    }
}

/// Look up a named joint. Returns `None` when the estimator did not report it.
pub fn find_coord(name: &str, keypoints: &[Keypoint]) -> Option<Vec2> {
    keypoints.iter().find(|k| k.name == name).map(Keypoint::pos)
}

/// Tracked hand positions for one frame; either hand may be missing
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HandKeypoints {
    pub left: Option<Vec2>,
    pub right: Option<Vec2>,
}

impl HandKeypoints {
    /// Hands present this frame, left first
    pub fn iter(&self) -> impl Iterator<Item = Vec2> {
        self.left.into_iter().chain(self.right)
    }
}

/// Extract both hands (wrists) from a frame of keypoints
pub fn create_hand_keypoints(keypoints: &[Keypoint]) -> HandKeypoints {
    HandKeypoints {
        left: find_coord(Joint::LeftWrist.as_str(), keypoints),
        right: find_coord(Joint::RightWrist.as_str(), keypoints),
    }
}
