//! Procedural animation engine for the Axon robot's expressive face.
//!
//! Every tick the engine resolves a paint-ready set of face parameters
//! from three independent input streams: discrete emotion requests,
//! continuous idle motion (breathing, blinking, eye sparkle), and a
//! battery-telemetry safety override. Pixel rendering, transports, and
//! window chrome live elsewhere — this crate only produces the numbers
//! they consume.
//!
//! ```
//! use std::time::Duration;
//! use axon_face::{FaceConfig, FaceEngine};
//!
//! let mut engine = FaceEngine::new(&FaceConfig::default());
//! engine.request_emotion("happy").unwrap();
//! engine.tick(Duration::from_millis(16));
//! let frame = engine.frame();
//! assert_eq!(frame.emotion, "happy");
//! ```

pub mod config;
pub mod face;

pub use config::{load_config, save_config, ConfigError, FaceConfig};
pub use face::{
    AnimationState, AnimationStateMachine, BatteryOverridePolicy, EmotionPreset, FaceEngine,
    FaceError, FaceEvent, FaceFrame, IdleMotionGenerator, IdleSignals, Orientation,
    OrientationController, OverrideAction, PresetTable, DEFAULT_EMOTION,
};
