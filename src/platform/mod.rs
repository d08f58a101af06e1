//! Platform abstraction layer
//!
//! The pose estimator runs outside the simulation. It is read through
//! `PoseSource`, a non-blocking view of the latest keypoints and the
//! calibration flag.
//!
//! On wasm32 the `web` module exposes the session to the browser host.

#[cfg(target_arch = "wasm32")]
pub mod web;

use serde::{Deserialize, Serialize};

use crate::sim::Keypoint;

/// Latest output of the pose estimator
pub trait PoseSource {
    /// Keypoints detected in the most recent frame
    fn keypoints(&self) -> &[Keypoint];
    /// Whether the player has completed calibration
    fn is_calibrated(&self) -> bool;
}

/// Owned snapshot of one estimator frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    #[serde(default)]
    pub keypoints: Vec<Keypoint>,
    #[serde(default)]
    pub calibrated: bool,
}

impl PoseFrame {
    pub fn new(keypoints: Vec<Keypoint>, calibrated: bool) -> Self {
        Self {
            keypoints,
            calibrated,
        }
    }

    /// Decode `{"keypoints":[{"name":..,"x":..,"y":..,"score":..}], "calibrated":..}`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Decode a bare keypoint array, keeping the given calibration flag
    pub fn from_keypoints_json(json: &str, calibrated: bool) -> Result<Self, serde_json::Error> {
        let keypoints: Vec<Keypoint> = serde_json::from_str(json)?;
        Ok(Self::new(keypoints, calibrated))
    }
}

impl PoseSource for PoseFrame {
    fn keypoints(&self) -> &[Keypoint] {
        &self.keypoints
    }

    fn is_calibrated(&self) -> bool {
        self.calibrated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_frame_from_json() {
        let frame = PoseFrame::from_json(
            r#"{"keypoints":[{"name":"leftWrist","x":12.5,"y":40,"score":0.8}],"calibrated":true}"#,
        )
        .unwrap();
        assert!(frame.is_calibrated());
        assert_eq!(frame.keypoints().len(), 1);
        assert_eq!(frame.keypoints()[0].x, 12.5);
    }

    #[test]
    fn test_pose_frame_defaults() {
        let frame = PoseFrame::from_json("{}").unwrap();
        assert!(!frame.is_calibrated());
        assert!(frame.keypoints().is_empty());
        assert!(PoseFrame::from_json("[").is_err());
    }

    #[test]
    fn test_bare_keypoint_array() {
        let frame =
            PoseFrame::from_keypoints_json(r#"[{"name":"rightShoulder","x":1,"y":2}]"#, false).unwrap();
        assert_eq!(frame.keypoints()[0].name, "rightShoulder");
        assert!(!frame.is_calibrated());
    }
}
