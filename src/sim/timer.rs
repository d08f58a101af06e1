//! Session-owned timers
//!
//! Both timers are plain state advanced by the session with the frame's
//! elapsed time, so their callbacks run on the same scheduler as the frame
//! update and are dropped together with the session.

use serde::{Deserialize, Serialize};

/// Repeating timer firing once per `period` seconds while running
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalTimer {
    period: f32,
    elapsed: f32,
    running: bool,
}

impl IntervalTimer {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
            running: false,
        }
    }

    /// Start the timer. Starting a running timer is a no-op and returns false.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.elapsed = 0.0;
        true
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Accumulate `dt` seconds and return how many periods completed
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.running || self.period <= 0.0 || !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }
}

/// One-shot timer that can be cancelled before it fires
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayedTrigger {
    delay: f32,
    remaining: Option<f32>,
}

impl DelayedTrigger {
    pub fn new(delay: f32) -> Self {
        Self {
            delay,
            remaining: None,
        }
    }

    /// Schedule the trigger. Returns false if it is already pending.
    pub fn arm(&mut self) -> bool {
        if self.remaining.is_some() {
            return false;
        }
        self.remaining = Some(self.delay);
        true
    }

    /// Drop a pending trigger. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.remaining.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Seconds until the trigger fires, if pending
    pub fn remaining(&self) -> Option<f32> {
        self.remaining
    }

    /// Count down; returns true on the call where the trigger fires
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.remaining.as_mut() else {
            return false;
        };
        *remaining -= dt.max(0.0);
        if *remaining <= 0.0 {
            self.remaining = None;
            true
        } else {
            false
        }
    }
}
