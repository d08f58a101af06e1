//! Browser bindings
//!
//! The JS host owns the pose estimator, the canvas and the animation loop.
//! It pushes keypoints in, calls `update` once per frame and reads back
//! JSON snapshots, instance bytes and events.

use wasm_bindgen::prelude::*;

use super::PoseFrame;
use crate::assets::AssetBundle;
use crate::audio::{BackgroundMusic, HtmlMusic};
use crate::renderer::{FrameSnapshot, build_instances, instance};
use crate::settings::Settings;
use crate::sim::{self, Session, SessionEvent};

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Fruit Swipe loaded");
}

/// One play-through driven from JS
#[wasm_bindgen]
pub struct WebSession {
    state: Session,
    pose: PoseFrame,
    music: BackgroundMusic<HtmlMusic>,
    pending: Vec<SessionEvent>,
}

#[wasm_bindgen]
impl WebSession {
    /// Build a session from settings JSON, asset bundle JSON and a music URL
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str, assets_json: &str, music_src: &str) -> Result<WebSession, JsValue> {
        let settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            Settings::from_json(settings_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let assets: AssetBundle =
            serde_json::from_str(assets_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let seed = js_sys::Date::now() as u64;
        log::info!(
            "Session created: {} with {} fruit skins, seed {}",
            settings.difficulty.as_str(),
            assets.fruit_skins.len(),
            seed
        );
        let music = BackgroundMusic::new(HtmlMusic::new(music_src), settings.music_volume);
        Ok(WebSession {
            state: Session::new(seed, settings, assets),
            pose: PoseFrame::default(),
            music,
            pending: Vec::new(),
        })
    }

    /// Replace the latest keypoints (JSON array). Malformed input keeps the previous frame.
    pub fn set_keypoints(&mut self, json: &str) {
        match PoseFrame::from_keypoints_json(json, self.pose.calibrated) {
            Ok(frame) => self.pose = frame,
            Err(e) => log::warn!("Ignoring malformed keypoints: {e}"),
        }
    }

    pub fn set_calibrated(&mut self, calibrated: bool) {
        self.pose.calibrated = calibrated;
    }

    /// External start signal (menu or countdown overlay)
    pub fn start_game(&mut self) {
        sim::start_game(&mut self.state);
        self.route_events();
    }

    /// Advance one animation frame of `dt` seconds
    pub fn update(&mut self, dt: f32) {
        sim::update(&mut self.state, &self.pose, dt);
        self.route_events();
    }

    /// Events since the last call, as a JSON array
    pub fn events_json(&mut self) -> String {
        let events = std::mem::take(&mut self.pending);
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    /// Entities and HUD for this frame, as JSON
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&FrameSnapshot::capture(&self.state)).unwrap_or_else(|e| {
            log::error!("Snapshot serialization failed: {e}");
            "{}".to_string()
        })
    }

    /// Packed `EntityInstance` bytes for a sprite batch
    pub fn instances(&self) -> Vec<u8> {
        instance::as_bytes(&build_instances(&self.state)).to_vec()
    }

    pub fn score(&self) -> f64 {
        self.state.score as f64
    }

    pub fn time(&self) -> i32 {
        self.state.time
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over
    }
}

impl WebSession {
    fn route_events(&mut self) {
        for event in self.state.drain_events() {
            self.music.handle(&event);
            self.pending.push(event);
        }
    }
}
