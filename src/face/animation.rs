//! Timed, eased transitions between emotion presets.

use tracing::debug;

use super::events::FaceEvent;
use super::preset::EmotionPreset;
use super::state::AnimationState;

/// Decelerating ease-out cubic: `1 - (1 - p)^3`.
pub fn ease_out_cubic(p: f32) -> f32 {
    let inv = 1.0 - p;
    1.0 - inv * inv * inv
}

/// An in-flight interpolation from a snapshot toward a preset vector.
#[derive(Debug, Clone)]
struct Transition {
    start: AnimationState,
    target: AnimationState,
    progress: f32,
    duration_ms: f32,
}

/// Owns the live parameter vector and drives the eased interpolation
/// toward the targeted preset.
#[derive(Debug)]
pub struct AnimationStateMachine {
    state: AnimationState,
    current_emotion: String,
    transition: Option<Transition>,
    duration_ms: f32,
}

impl AnimationStateMachine {
    pub fn new(initial: &EmotionPreset, duration_ms: f32) -> Self {
        Self {
            state: AnimationState::from(initial),
            current_emotion: initial.name.clone(),
            transition: None,
            duration_ms,
        }
    }

    /// Begin animating toward `preset`.
    ///
    /// A strict no-op when the preset is already the targeted emotion:
    /// re-requesting the current target must not restart or disturb an
    /// in-flight transition. Otherwise the *current interpolated* state
    /// is snapshotted as the start — never the previous target — so
    /// retargeting mid-flight is visually continuous. The emotion
    /// identifier updates immediately, independent of interpolation
    /// completion. Returns whether a transition began.
    pub fn begin_transition(&mut self, preset: &EmotionPreset) -> bool {
        if preset.name == self.current_emotion {
            return false;
        }
        debug!(from = %self.current_emotion, to = %preset.name, "emotion transition started");
        self.current_emotion = preset.name.clone();
        self.transition = Some(Transition {
            start: self.state,
            target: AnimationState::from(preset),
            progress: 0.0,
            duration_ms: self.duration_ms,
        });
        true
    }

    /// Advance the active transition, if any, by `elapsed_ms`.
    pub fn advance(&mut self, elapsed_ms: f32) -> Option<FaceEvent> {
        let transition = self.transition.as_mut()?;
        transition.progress = (transition.progress + elapsed_ms / transition.duration_ms).min(1.0);
        if transition.progress >= 1.0 {
            // Apply the target exactly; the eased formula at p = 1 would
            // leave floating-point residue.
            self.state = transition.target;
            self.transition = None;
            debug!(emotion = %self.current_emotion, "emotion transition completed");
            return Some(FaceEvent::TransitionCompleted {
                emotion: self.current_emotion.clone(),
            });
        }
        let eased = ease_out_cubic(transition.progress);
        self.state = AnimationState::lerp(&transition.start, &transition.target, eased);
        None
    }

    /// The currently displayed (possibly mid-transition) parameters.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// The targeted emotion identifier. Tracks the most recent request,
    /// whether or not the interpolation has finished.
    pub fn current_emotion(&self) -> &str {
        &self.current_emotion
    }

    pub fn in_transition(&self) -> bool {
        self.transition.is_some()
    }

    /// Progress of the active transition, if any, in [0, 1].
    pub fn progress(&self) -> Option<f32> {
        self.transition.as_ref().map(|t| t.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::preset::PresetTable;

    const DURATION_MS: f32 = 550.0;

    fn machine() -> (PresetTable, AnimationStateMachine) {
        let table = PresetTable::builtin();
        let machine = AnimationStateMachine::new(table.default_preset(), DURATION_MS);
        (table, machine)
    }

    #[test]
    fn ease_has_fixed_endpoints_and_decelerates() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Ease-out: the first half covers more ground than the second.
        assert!(ease_out_cubic(0.5) > 0.5);
        // Monotonic on a coarse grid.
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_out_cubic(i as f32 / 100.0);
            assert!(v >= prev, "easing must be monotonic");
            prev = v;
        }
    }

    #[test]
    fn full_duration_lands_exactly_on_target() {
        let (table, mut machine) = machine();
        let happy = table.lookup("happy").unwrap();
        assert!(machine.begin_transition(happy));

        let event = machine.advance(DURATION_MS);
        assert_eq!(
            event,
            Some(FaceEvent::TransitionCompleted {
                emotion: "happy".to_string()
            })
        );
        assert_eq!(
            *machine.state(),
            AnimationState::from(happy),
            "state must equal the target exactly at completion"
        );
        assert!(!machine.in_transition());
    }

    #[test]
    fn emotion_identifier_updates_before_completion() {
        let (table, mut machine) = machine();
        machine.begin_transition(table.lookup("sad").unwrap());
        assert_eq!(machine.current_emotion(), "sad");
        assert!(machine.in_transition());
    }

    #[test]
    fn re_requesting_target_does_not_disturb_flight() {
        let (table, mut machine) = machine();
        let happy = table.lookup("happy").unwrap();
        machine.begin_transition(happy);
        machine.advance(100.0);

        let progress_before = machine.progress();
        let state_before = *machine.state();
        assert!(
            !machine.begin_transition(happy),
            "re-requesting the current target must be a no-op"
        );
        assert_eq!(machine.progress(), progress_before);
        assert_eq!(*machine.state(), state_before);

        // The untouched transition still lands exactly.
        machine.advance(DURATION_MS);
        assert_eq!(*machine.state(), AnimationState::from(happy));
    }

    #[test]
    fn retarget_mid_flight_starts_from_displayed_state() {
        let (table, mut machine) = machine();
        machine.begin_transition(table.lookup("happy").unwrap());
        machine.advance(100.0);

        let displayed = *machine.state();
        machine.begin_transition(table.lookup("sad").unwrap());
        // The retarget itself must not move the displayed state.
        assert_eq!(*machine.state(), displayed);

        // A tiny step keeps it continuous (no jump toward either target).
        machine.advance(1.0);
        let after = *machine.state();
        assert!(
            (after.eye_openness - displayed.eye_openness).abs() < 0.05,
            "retarget should not jump: {} -> {}",
            displayed.eye_openness,
            after.eye_openness
        );
    }

    #[test]
    fn progress_clamps_at_one_on_oversized_step() {
        let (table, mut machine) = machine();
        machine.begin_transition(table.lookup("angry").unwrap());
        let event = machine.advance(10_000.0);
        assert!(matches!(
            event,
            Some(FaceEvent::TransitionCompleted { .. })
        ));
        assert_eq!(
            *machine.state(),
            AnimationState::from(table.lookup("angry").unwrap())
        );
    }

    #[test]
    fn advance_without_transition_is_inert() {
        let (_, mut machine) = machine();
        let before = *machine.state();
        assert_eq!(machine.advance(16.0), None);
        assert_eq!(*machine.state(), before);
    }
}
