//! State-change events returned by engine entry points.
//!
//! Replaces UI-toolkit signal emission: every mutating call returns the
//! events it produced, and the host reacts after the call. No callbacks,
//! no subscriber registry.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FaceEvent {
    /// A new emotion became the transition target. `forced` marks
    /// battery-policy transitions.
    EmotionChanged {
        from: String,
        to: String,
        forced: bool,
    },
    /// The active transition reached its target vector exactly.
    TransitionCompleted { emotion: String },
    BlinkStarted,
    BlinkEnded,
    /// Battery voltage dropped below the safety threshold.
    OverrideEngaged { voltage: f32 },
    /// Battery voltage recovered to or above the safety threshold.
    OverrideReleased { voltage: f32 },
}
