//! Idle procedural motion — breathing, eye sparkle, and blink scheduling.
//!
//! Advances as a pure function of elapsed time, independent of the
//! emotion state; the step is the real elapsed time since the last tick
//! so the signals stay correct under variable tick rates. The blink
//! interval draw goes through a seedable generator so tests can force
//! exact timing.

use std::f32::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::events::FaceEvent;
use crate::config::FaceConfig;

/// Continuously computed cosmetic signals, consumed once per paint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IdleSignals {
    /// Vertical breathing offset in pixels.
    pub breathe_offset: f32,
    /// Eye highlight intensity in [0, 1].
    pub sparkle: f32,
    /// Multiplier applied to eye openness: 1.0 outside a blink, dipping
    /// to 0.0 at the midpoint of one.
    pub blink_openness: f32,
}

#[derive(Debug)]
pub struct IdleMotionGenerator {
    time: f32,
    time_since_blink: f32,
    next_blink_at: f32,
    blinking: bool,
    blink_phase: f32,
    breathe_offset: f32,
    sparkle: f32,
    breathe_amplitude: f32,
    breathe_frequency: f32,
    sparkle_frequency: f32,
    blink_min_interval: f32,
    blink_max_interval: f32,
    blink_duration: f32,
    rng: StdRng,
}

impl IdleMotionGenerator {
    pub fn new(config: &FaceConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Deterministic generator for tests.
    pub fn with_seed(config: &FaceConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: &FaceConfig, mut rng: StdRng) -> Self {
        let next_blink_at =
            rng.gen_range(config.blink_min_interval_secs..=config.blink_max_interval_secs);
        Self {
            time: 0.0,
            time_since_blink: 0.0,
            next_blink_at,
            blinking: false,
            blink_phase: 0.0,
            breathe_offset: 0.0,
            sparkle: 0.5,
            breathe_amplitude: config.breathe_amplitude,
            breathe_frequency: config.breathe_frequency,
            sparkle_frequency: config.sparkle_frequency,
            blink_min_interval: config.blink_min_interval_secs,
            blink_max_interval: config.blink_max_interval_secs,
            blink_duration: config.blink_duration_secs,
            rng,
        }
    }

    /// Advance by the real elapsed step since the last tick.
    pub fn advance(&mut self, step_secs: f32) -> Vec<FaceEvent> {
        let mut events = Vec::new();

        self.time += step_secs;
        self.time_since_blink += step_secs;

        self.breathe_offset = (self.time * self.breathe_frequency).sin() * self.breathe_amplitude;
        self.sparkle = ((self.time * self.sparkle_frequency).sin() + 1.0) * 0.5;

        if self.blinking {
            self.blink_phase += step_secs / self.blink_duration;
            if self.blink_phase >= 1.0 {
                self.blinking = false;
                self.blink_phase = 0.0;
                events.push(FaceEvent::BlinkEnded);
            }
        } else if self.time_since_blink > self.next_blink_at {
            self.blinking = true;
            self.blink_phase = 0.0;
            self.time_since_blink = 0.0;
            self.next_blink_at = self
                .rng
                .gen_range(self.blink_min_interval..=self.blink_max_interval);
            events.push(FaceEvent::BlinkStarted);
        }

        events
    }

    pub fn signals(&self) -> IdleSignals {
        IdleSignals {
            breathe_offset: self.breathe_offset,
            sparkle: self.sparkle,
            blink_openness: self.blink_openness(),
        }
    }

    /// Eye openness multiplier: a closed-then-reopened shape peaking at
    /// full closure mid-blink.
    pub fn blink_openness(&self) -> f32 {
        if self.blinking {
            (1.0 - (self.blink_phase.min(1.0) * PI).sin()).max(0.0)
        } else {
            1.0
        }
    }

    pub fn is_blinking(&self) -> bool {
        self.blinking
    }

    /// Progress through the current blink, in [0, 1]. Zero when not
    /// blinking.
    pub fn blink_phase(&self) -> f32 {
        self.blink_phase
    }

    /// Seconds since the last blink ended (or since startup).
    pub fn time_since_blink(&self) -> f32 {
        self.time_since_blink
    }

    /// The randomized idle interval after which the next blink begins.
    pub fn next_blink_at(&self) -> f32 {
        self.next_blink_at
    }
}
