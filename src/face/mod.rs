//! The face animation core: presets, eased transitions, idle motion,
//! head orientation, and the battery safety override.

pub mod animation;
pub mod battery;
pub mod engine;
pub mod events;
pub mod idle;
pub mod orientation;
pub mod preset;
pub mod state;


pub use animation::AnimationStateMachine;
pub use battery::{BatteryOverridePolicy, OverrideAction};
pub use engine::{FaceEngine, FaceFrame, OVERRIDE_EMOTION};
pub use events::FaceEvent;
pub use idle::{IdleMotionGenerator, IdleSignals};
pub use orientation::{Orientation, OrientationController};
pub use preset::{EmotionPreset, FaceError, PresetTable, DEFAULT_EMOTION};
pub use state::AnimationState;
