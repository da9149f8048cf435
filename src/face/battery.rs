//! Battery-driven safety override.
//!
//! A two-state threshold machine (`Normal` / `Forced`) evaluated on
//! every voltage update and again on every tick. It only reports the
//! edges; resting in either state produces nothing, so repeated checks
//! are idempotent.
//!
//! There is deliberately no hysteresis band: a voltage oscillating
//! exactly at the threshold thrashes between states. Known edge case,
//! kept to match the deployed telemetry behavior.

/// Transition requested by the policy on a threshold edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideAction {
    /// Voltage dropped below the threshold — force the safety face.
    Engage,
    /// Voltage recovered — restore the default face if still forced.
    Release,
}

#[derive(Debug, Clone)]
pub struct BatteryOverridePolicy {
    threshold: f32,
    voltage: Option<f32>,
    forced: bool,
}

impl BatteryOverridePolicy {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            voltage: None,
            forced: false,
        }
    }

    /// Record a voltage reading. The next [`evaluate`](Self::evaluate)
    /// acts on it. Any real value is accepted and stored as-is.
    pub fn set_voltage(&mut self, voltage: f32) {
        self.voltage = Some(voltage);
    }

    /// Last reported voltage. `None` until telemetry delivers a reading,
    /// which is distinct from a reading of zero.
    pub fn voltage(&self) -> Option<f32> {
        self.voltage
    }

    /// Whether the override currently holds the face.
    pub fn is_forced(&self) -> bool {
        self.forced
    }

    /// Run the threshold check. Returns an action only on the
    /// `Normal -> Forced` or `Forced -> Normal` edge, and never before
    /// the first voltage reading.
    pub fn evaluate(&mut self) -> Option<OverrideAction> {
        let voltage = self.voltage?;
        let low = voltage < self.threshold;
        if low && !self.forced {
            self.forced = true;
            Some(OverrideAction::Engage)
        } else if !low && self.forced {
            self.forced = false;
            Some(OverrideAction::Release)
        } else {
            None
        }
    }
}
