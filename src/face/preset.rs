//! Built-in emotion presets for the robotic face.
//!
//! Each preset is a fixed target vector of face parameters. The table is
//! built once at startup and never mutated; exact numeric tuning is
//! cosmetic, but every documented emotion name must be present.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors the animation core can surface to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FaceError {
    /// The requested name is not in the preset table. Recoverable: the
    /// caller should log and carry on with the current face.
    #[error("unknown emotion '{0}'")]
    UnknownEmotion(String),
}

/// Emotion the face rests in when nothing else is requested.
pub const DEFAULT_EMOTION: &str = "neutral";

/// A named, fixed target vector of face parameters for one emotion.
///
/// Scalar fields are roughly in [-1.5, 1.5]; they are not hard-clamped
/// here because the renderer applies its own display limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionPreset {
    pub name: String,
    pub eye_openness: f32,
    pub eye_curve: f32,
    pub brow_raise: f32,
    pub brow_tilt: f32,
    pub mouth_curve: f32,
    pub mouth_open: f32,
    pub mouth_width: f32,
    pub mouth_height: f32,
    pub iris_size: f32,
    /// Accent color as 8-bit RGB.
    pub accent_color: [u8; 3],
}

/// Registry of the built-in presets, in declaration order.
#[derive(Debug, Clone)]
pub struct PresetTable {
    presets: Vec<EmotionPreset>,
}

impl Default for PresetTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PresetTable {
    /// Look up a preset by name.
    pub fn lookup(&self, name: &str) -> Result<&EmotionPreset, FaceError> {
        self.presets
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| FaceError::UnknownEmotion(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.iter().any(|p| p.name == name)
    }

    /// Available emotion identifiers, in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    /// The distinguished default preset ([`DEFAULT_EMOTION`], declared
    /// first in the table).
    pub fn default_preset(&self) -> &EmotionPreset {
        &self.presets[0]
    }

    /// The fixed startup table.
    pub fn builtin() -> Self {
        let presets = vec![
            EmotionPreset {
                name: "neutral".into(),
                eye_openness: 1.0,
                eye_curve: 0.0,
                brow_raise: 0.0,
                brow_tilt: 0.0,
                mouth_curve: 0.0,
                mouth_open: 0.05,
                mouth_width: 1.0,
                mouth_height: 1.0,
                iris_size: 1.0,
                accent_color: [70, 200, 255],
            },
            EmotionPreset {
                name: "happy".into(),
                eye_openness: 1.2,
                eye_curve: 0.35,
                brow_raise: 0.35,
                brow_tilt: -0.2,
                mouth_curve: 0.8,
                mouth_open: 0.3,
                mouth_width: 1.05,
                mouth_height: 1.2,
                iris_size: 1.05,
                accent_color: [90, 240, 210],
            },
            EmotionPreset {
                name: "sad".into(),
                eye_openness: 0.85,
                eye_curve: -0.45,
                brow_raise: -0.3,
                brow_tilt: 0.35,
                mouth_curve: -0.6,
                mouth_open: 0.05,
                mouth_width: 0.85,
                mouth_height: 0.9,
                iris_size: 0.95,
                accent_color: [140, 120, 255],
            },
            EmotionPreset {
                name: "surprised".into(),
                eye_openness: 1.45,
                eye_curve: 0.1,
                brow_raise: 0.5,
                brow_tilt: 0.0,
                mouth_curve: 0.0,
                mouth_open: 0.9,
                mouth_width: 0.95,
                mouth_height: 1.4,
                iris_size: 1.15,
                accent_color: [255, 200, 120],
            },
            EmotionPreset {
                name: "sleepy".into(),
                eye_openness: 0.35,
                eye_curve: -0.2,
                brow_raise: -0.15,
                brow_tilt: -0.1,
                mouth_curve: 0.0,
                mouth_open: 0.05,
                mouth_width: 0.9,
                mouth_height: 0.7,
                iris_size: 0.9,
                accent_color: [120, 180, 255],
            },
            EmotionPreset {
                name: "curious".into(),
                eye_openness: 1.1,
                eye_curve: 0.15,
                brow_raise: 0.15,
                brow_tilt: 0.4,
                mouth_curve: 0.35,
                mouth_open: 0.18,
                mouth_width: 1.0,
                mouth_height: 1.0,
                iris_size: 1.1,
                accent_color: [255, 120, 210],
            },
            EmotionPreset {
                name: "excited".into(),
                eye_openness: 1.35,
                eye_curve: 0.45,
                brow_raise: 0.4,
                brow_tilt: -0.25,
                mouth_curve: 1.1,
                mouth_open: 0.75,
                mouth_width: 1.1,
                mouth_height: 1.3,
                iris_size: 1.08,
                accent_color: [255, 140, 100],
            },
            EmotionPreset {
                name: "angry".into(),
                eye_openness: 0.7,
                eye_curve: -0.55,
                brow_raise: -0.45,
                brow_tilt: 0.55,
                mouth_curve: -0.4,
                mouth_open: 0.2,
                mouth_width: 0.95,
                mouth_height: 0.85,
                iris_size: 0.92,
                accent_color: [255, 90, 90],
            },
            EmotionPreset {
                name: "fearful".into(),
                eye_openness: 1.5,
                eye_curve: -0.1,
                brow_raise: 0.35,
                brow_tilt: 0.25,
                mouth_curve: -0.1,
                mouth_open: 0.85,
                mouth_width: 0.9,
                mouth_height: 1.35,
                iris_size: 1.12,
                accent_color: [255, 220, 160],
            },
            EmotionPreset {
                name: "disgusted".into(),
                eye_openness: 0.75,
                eye_curve: -0.25,
                brow_raise: -0.35,
                brow_tilt: -0.45,
                mouth_curve: -0.2,
                mouth_open: 0.12,
                mouth_width: 0.88,
                mouth_height: 0.8,
                iris_size: 0.9,
                accent_color: [140, 220, 110],
            },
            EmotionPreset {
                name: "smirk".into(),
                eye_openness: 0.95,
                eye_curve: 0.1,
                brow_raise: 0.05,
                brow_tilt: 0.5,
                mouth_curve: 0.55,
                mouth_open: 0.12,
                mouth_width: 1.02,
                mouth_height: 0.95,
                iris_size: 1.0,
                accent_color: [255, 170, 200],
            },
            EmotionPreset {
                name: "proud".into(),
                eye_openness: 1.05,
                eye_curve: 0.25,
                brow_raise: 0.28,
                brow_tilt: -0.15,
                mouth_curve: 0.65,
                mouth_open: 0.18,
                mouth_width: 1.08,
                mouth_height: 1.05,
                iris_size: 1.02,
                accent_color: [255, 200, 150],
            },
        ];
        Self { presets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_documented_emotions_present() {
        let table = PresetTable::builtin();
        for name in [
            "neutral",
            "happy",
            "sad",
            "surprised",
            "sleepy",
            "curious",
            "excited",
            "angry",
            "fearful",
            "disgusted",
            "smirk",
            "proud",
        ] {
            assert!(table.contains(name), "preset table should contain '{name}'");
        }
    }

    #[test]
    fn default_preset_is_neutral() {
        let table = PresetTable::builtin();
        assert_eq!(table.default_preset().name, DEFAULT_EMOTION);
        assert_eq!(table.names()[0], DEFAULT_EMOTION);
    }

    #[test]
    fn lookup_unknown_name_errors() {
        let table = PresetTable::builtin();
        let err = table.lookup("bogus").unwrap_err();
        assert_eq!(err, FaceError::UnknownEmotion("bogus".to_string()));
    }

    #[test]
    fn names_are_unique() {
        let table = PresetTable::builtin();
        let names = table.names();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len(), "preset names must be unique");
    }
}
