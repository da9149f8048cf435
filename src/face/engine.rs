//! Engine facade tying presets, transitions, idle motion, orientation,
//! and the battery override together behind the renderer contract.
//!
//! Single-threaded cooperative model: a host scheduler calls
//! [`FaceEngine::tick`] at a steady cadence (~60 Hz reference) and the
//! telemetry/command collaborators call the setters from the same
//! logical thread. The engine holds no locks; multi-threaded callers
//! serialize externally.

use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use super::animation::AnimationStateMachine;
use super::battery::{BatteryOverridePolicy, OverrideAction};
use super::events::FaceEvent;
use super::idle::{IdleMotionGenerator, IdleSignals};
use super::orientation::{Orientation, OrientationController};
use super::preset::{FaceError, PresetTable, DEFAULT_EMOTION};
use super::state::AnimationState;
use crate::config::FaceConfig;

/// Safety face forced while battery voltage is critically low.
pub const OVERRIDE_EMOTION: &str = "fearful";

/// Seconds an emotion must hold before the status glyph shows.
const STATUS_ICON_HOLD_SECS: f32 = 0.5;

/// One paint-ready snapshot of everything the renderer consumes.
#[derive(Debug, Clone, Serialize)]
pub struct FaceFrame {
    /// Targeted emotion name, for on-screen diagnostic labeling.
    pub emotion: String,
    /// The resolved (possibly mid-transition) parameter vector.
    pub state: AnimationState,
    /// Accent color rounded for display.
    pub accent_rgb: [u8; 3],
    pub orientation: Orientation,
    pub idle: IdleSignals,
    /// Last reported battery voltage, for the telemetry readout.
    pub battery_voltage: Option<f32>,
    pub override_active: bool,
    /// Whether to draw the emotion status glyph; hidden for the default
    /// face and briefly after every change.
    pub show_status_icon: bool,
}

pub struct FaceEngine {
    presets: PresetTable,
    animation: AnimationStateMachine,
    orientation: OrientationController,
    battery: BatteryOverridePolicy,
    idle: IdleMotionGenerator,
    emotion_hold_secs: f32,
}

impl FaceEngine {
    pub fn new(config: &FaceConfig) -> Self {
        Self::build(config, IdleMotionGenerator::new(config))
    }

    /// Engine with a deterministic blink schedule, for tests.
    pub fn with_seed(config: &FaceConfig, seed: u64) -> Self {
        Self::build(config, IdleMotionGenerator::with_seed(config, seed))
    }

    fn build(config: &FaceConfig, idle: IdleMotionGenerator) -> Self {
        let presets = PresetTable::builtin();
        let animation =
            AnimationStateMachine::new(presets.default_preset(), config.transition_ms as f32);
        Self {
            presets,
            animation,
            orientation: OrientationController::new(),
            battery: BatteryOverridePolicy::new(config.low_voltage_threshold),
            idle,
            emotion_hold_secs: 0.0,
        }
    }

    /// Advance the engine by the real elapsed time since the last tick.
    ///
    /// Fixed order every tick: battery policy first (it may force a
    /// transition), then idle motion, then the active transition.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<FaceEvent> {
        let step_secs = elapsed.as_secs_f32();

        let mut events = self.check_battery();
        events.extend(self.idle.advance(step_secs));
        if let Some(event) = self.animation.advance(step_secs * 1000.0) {
            events.push(event);
        }
        self.emotion_hold_secs += step_secs;

        events
    }

    /// Animate toward the named preset. A no-op when `name` is already
    /// the targeted emotion; `UnknownEmotion` when it is not in the
    /// table.
    pub fn request_emotion(&mut self, name: &str) -> Result<Vec<FaceEvent>, FaceError> {
        self.transition_to(name, false)
    }

    /// Update head orientation; supplied axes clamp to their per-axis
    /// limits. Returns whether the stored orientation changed.
    pub fn set_orientation(
        &mut self,
        yaw: Option<f32>,
        pitch: Option<f32>,
        roll: Option<f32>,
    ) -> bool {
        self.orientation.set(yaw, pitch, roll)
    }

    /// Record a battery voltage reading and run the override check
    /// immediately. The same check also runs every tick; both paths are
    /// idempotent.
    pub fn set_battery_voltage(&mut self, voltage: f32) -> Vec<FaceEvent> {
        self.battery.set_voltage(voltage);
        self.check_battery()
    }

    fn transition_to(&mut self, name: &str, forced: bool) -> Result<Vec<FaceEvent>, FaceError> {
        let preset = self.presets.lookup(name)?;
        let from = self.animation.current_emotion().to_string();
        if !self.animation.begin_transition(preset) {
            return Ok(Vec::new());
        }
        self.emotion_hold_secs = 0.0;
        Ok(vec![FaceEvent::EmotionChanged {
            from,
            to: name.to_string(),
            forced,
        }])
    }

    fn check_battery(&mut self) -> Vec<FaceEvent> {
        let Some(action) = self.battery.evaluate() else {
            return Vec::new();
        };
        let voltage = self.battery.voltage().unwrap_or_default();
        let mut events = Vec::new();
        match action {
            OverrideAction::Engage => {
                warn!(voltage, "battery critically low, forcing safety face");
                events.push(FaceEvent::OverrideEngaged { voltage });
                if self.animation.current_emotion() != OVERRIDE_EMOTION {
                    if let Ok(more) = self.transition_to(OVERRIDE_EMOTION, true) {
                        events.extend(more);
                    }
                }
            }
            OverrideAction::Release => {
                info!(voltage, "battery recovered, releasing safety face");
                events.push(FaceEvent::OverrideReleased { voltage });
                // Only restore if nothing else retargeted the face while
                // the override held.
                if self.animation.current_emotion() == OVERRIDE_EMOTION {
                    if let Ok(more) = self.transition_to(DEFAULT_EMOTION, true) {
                        events.extend(more);
                    }
                }
            }
        }
        events
    }

    // ── Renderer contract ──────────────────────────────────────

    /// The resolved parameter vector, consumed once per paint.
    pub fn current_state(&self) -> &AnimationState {
        self.animation.state()
    }

    /// The targeted emotion identifier.
    pub fn current_emotion(&self) -> &str {
        self.animation.current_emotion()
    }

    pub fn current_orientation(&self) -> Orientation {
        self.orientation.current()
    }

    pub fn idle_signals(&self) -> IdleSignals {
        self.idle.signals()
    }

    /// Available emotion identifiers, in table order.
    pub fn available_emotions(&self) -> Vec<&str> {
        self.presets.names()
    }

    /// Last reported battery voltage, if any.
    pub fn battery_voltage(&self) -> Option<f32> {
        self.battery.voltage()
    }

    /// Whether the battery override currently holds the face.
    pub fn override_active(&self) -> bool {
        self.battery.is_forced()
    }

    /// Seconds the current emotion has been held.
    pub fn emotion_hold_secs(&self) -> f32 {
        self.emotion_hold_secs
    }

    pub fn in_transition(&self) -> bool {
        self.animation.in_transition()
    }

    /// Progress of the active transition, if any, in [0, 1].
    pub fn transition_progress(&self) -> Option<f32> {
        self.animation.progress()
    }

    /// Bundle everything the renderer consumes for one paint.
    pub fn frame(&self) -> FaceFrame {
        let state = *self.animation.state();
        let emotion = self.animation.current_emotion();
        FaceFrame {
            emotion: emotion.to_string(),
            accent_rgb: state.accent_rgb(),
            state,
            orientation: self.orientation.current(),
            idle: self.idle.signals(),
            battery_voltage: self.battery.voltage(),
            override_active: self.battery.is_forced(),
            show_status_icon: emotion != DEFAULT_EMOTION
                && self.emotion_hold_secs >= STATUS_ICON_HOLD_SECS,
        }
    }
}
