//! The live face parameter vector.

use serde::Serialize;

use super::preset::EmotionPreset;

/// The currently displayed (possibly mid-transition) face parameters.
///
/// Color is stored as three independent f32 channels so it interpolates
/// under the same formula as every other field; rounding to 8-bit
/// happens only at the point of consumption ([`AnimationState::accent_rgb`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationState {
    pub eye_openness: f32,
    pub eye_curve: f32,
    pub brow_raise: f32,
    pub brow_tilt: f32,
    pub mouth_curve: f32,
    pub mouth_open: f32,
    pub mouth_width: f32,
    pub mouth_height: f32,
    pub iris_size: f32,
    pub accent_color: [f32; 3],
}

impl AnimationState {
    /// Interpolate every field as `start + (target - start) * t`.
    pub fn lerp(start: &Self, target: &Self, t: f32) -> Self {
        fn mix(a: f32, b: f32, t: f32) -> f32 {
            a + (b - a) * t
        }
        Self {
            eye_openness: mix(start.eye_openness, target.eye_openness, t),
            eye_curve: mix(start.eye_curve, target.eye_curve, t),
            brow_raise: mix(start.brow_raise, target.brow_raise, t),
            brow_tilt: mix(start.brow_tilt, target.brow_tilt, t),
            mouth_curve: mix(start.mouth_curve, target.mouth_curve, t),
            mouth_open: mix(start.mouth_open, target.mouth_open, t),
            mouth_width: mix(start.mouth_width, target.mouth_width, t),
            mouth_height: mix(start.mouth_height, target.mouth_height, t),
            iris_size: mix(start.iris_size, target.iris_size, t),
            accent_color: [
                mix(start.accent_color[0], target.accent_color[0], t),
                mix(start.accent_color[1], target.accent_color[1], t),
                mix(start.accent_color[2], target.accent_color[2], t),
            ],
        }
    }

    /// Accent color rounded to displayable 8-bit channels.
    pub fn accent_rgb(&self) -> [u8; 3] {
        self.accent_color
            .map(|channel| channel.round().clamp(0.0, 255.0) as u8)
    }
}

impl From<&EmotionPreset> for AnimationState {
    fn from(preset: &EmotionPreset) -> Self {
        Self {
            eye_openness: preset.eye_openness,
            eye_curve: preset.eye_curve,
            brow_raise: preset.brow_raise,
            brow_tilt: preset.brow_tilt,
            mouth_curve: preset.mouth_curve,
            mouth_open: preset.mouth_open,
            mouth_width: preset.mouth_width,
            mouth_height: preset.mouth_height,
            iris_size: preset.iris_size,
            accent_color: [
                preset.accent_color[0] as f32,
                preset.accent_color[1] as f32,
                preset.accent_color[2] as f32,
            ],
        }
    }
}
