//! Head orientation with per-axis clamping.

use serde::Serialize;

/// Yaw clamp limit, degrees either side of center.
pub const YAW_LIMIT_DEG: f32 = 45.0;
/// Pitch clamp limit, degrees either side of center.
pub const PITCH_LIMIT_DEG: f32 = 30.0;
/// Roll clamp limit, degrees either side of center.
pub const ROLL_LIMIT_DEG: f32 = 30.0;

/// Head orientation in degrees. The renderer applies roll as a
/// whole-frame rotation and yaw/pitch as positional offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Orientation {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

/// Clamps and stores head yaw/pitch/roll. Clamping, never rejection:
/// out-of-range input saturates at the limit.
#[derive(Debug, Default)]
pub struct OrientationController {
    current: Orientation,
}

impl OrientationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update any subset of the axes. Absent axes keep their prior
    /// value; supplied axes are clamped before storage. Returns whether
    /// the stored orientation changed (the host's cue to repaint).
    pub fn set(&mut self, yaw: Option<f32>, pitch: Option<f32>, roll: Option<f32>) -> bool {
        let before = self.current;
        if let Some(yaw) = yaw {
            self.current.yaw = yaw.clamp(-YAW_LIMIT_DEG, YAW_LIMIT_DEG);
        }
        if let Some(pitch) = pitch {
            self.current.pitch = pitch.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        }
        if let Some(roll) = roll {
            self.current.roll = roll.clamp(-ROLL_LIMIT_DEG, ROLL_LIMIT_DEG);
        }
        self.current != before
    }

    pub fn current(&self) -> Orientation {
        self.current
    }
}
