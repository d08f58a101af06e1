//! Session state and core simulation types
//!
//! Everything one play-through mutates lives in `Session`. The host builds a
//! new session for a restart; dropping the old one drops its timers with it.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::profile::DifficultyProfile;
use super::timer::{DelayedTrigger, IntervalTimer};
use crate::assets::{AssetBundle, Canvas};
use crate::consts::TIMER_PERIOD_SECS;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the pose estimator to report calibration
    Calibrating,
    /// Calibrated, start trigger pending
    Countdown,
    /// Active gameplay
    Running,
    /// Round ended
    GameOver,
}

/// Notifications for the host's side-effect sinks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Start trigger scheduled
    CountdownStarted { seconds: f32 },
    /// Calibration lost before the start trigger fired
    CountdownCancelled,
    GameStarted,
    /// Floating score popup at the entity's position
    Score { delta: i64, x: f32, y: f32 },
    GameOver { score: i64 },
}

/// Spawn boundaries derived from the shoulders
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundaries {
    /// Spawn x for left-side entities
    pub left: f32,
    /// Spawn x for right-side entities
    pub right: f32,
    /// Midpoint between the shoulders
    pub center: f32,
}

impl Boundaries {
    /// Canvas edges until the shoulders are first seen
    pub fn for_canvas(canvas: &Canvas) -> Self {
        Self {
            left: 0.0,
            right: canvas.width,
            center: canvas.width / 2.0,
        }
    }
}

/// State of one play-through
#[derive(Debug, Clone)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    pub settings: Settings,
    pub profile: DifficultyProfile,
    pub assets: AssetBundle,
    pub score: i64,
    /// Seconds remaining
    pub time: i32,
    pub game_over: bool,
    /// Set by the start trigger (or an external start signal)
    pub is_game_started: bool,
    /// Last calibration state reported by the pose source
    pub calibrated: bool,
    /// Live fruit in spawn order
    pub fruits: Vec<Entity>,
    /// Live bombs in spawn order
    pub bombs: Vec<Entity>,
    pub boundaries: Boundaries,
    /// Frames simulated while running
    pub frame: u64,
    pub(crate) timer: IntervalTimer,
    pub(crate) start_trigger: DelayedTrigger,
    pub(crate) rng: Pcg32,
    events: Vec<SessionEvent>,
    next_id: u32,
}

impl Session {
    /// Create a session waiting for calibration
    pub fn new(seed: u64, settings: Settings, assets: AssetBundle) -> Self {
        let profile = settings.profile();
        let boundaries = Boundaries::for_canvas(&assets.canvas);
        Self {
            seed,
            profile,
            score: 0,
            time: settings.round_seconds,
            game_over: false,
            is_game_started: false,
            calibrated: false,
            fruits: Vec::new(),
            bombs: Vec::new(),
            boundaries,
            frame: 0,
            timer: IntervalTimer::new(TIMER_PERIOD_SECS),
            start_trigger: DelayedTrigger::new(settings.start_delay_secs),
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            next_id: 1,
            settings,
            assets,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn phase(&self) -> SessionPhase {
        if self.game_over {
            SessionPhase::GameOver
        } else if self.is_game_started {
            SessionPhase::Running
        } else if self.start_trigger.is_armed() {
            SessionPhase::Countdown
        } else {
            SessionPhase::Calibrating
        }
    }

    pub fn is_timer_on(&self) -> bool {
        self.timer.is_running()
    }

    /// Seconds until the game starts, while the start trigger is pending
    pub fn countdown_remaining(&self) -> Option<f32> {
        self.start_trigger.remaining()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.assets.canvas
    }

    /// All entities, fruit first, each group in spawn order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.fruits.iter().chain(self.bombs.iter())
    }

    pub(crate) fn push_event(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}
