use serde::{Deserialize, Serialize};
use std::fmt;

/// One whole per-axis velocity command. Always replaced as a unit behind a
/// lock; a reader never observes fields from two different writes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisCommand {
    roll: f64,
    pitch: f64,
    yaw_rate: f64,
    vertical_rate: f64,
}

impl AxisCommand {
    pub fn new(roll: f64, pitch: f64, yaw_rate: f64, vertical_rate: f64) -> Self {
        Self {
            roll,
            pitch,
            yaw_rate,
            vertical_rate,
        }
    }

    /// Clamps every field into `[-limit, limit]`. Out-of-range values are
    /// pulled to the limit, never rejected.
    #[must_use]
    pub fn clamped(self, limit: f64) -> Self {
        Self {
            roll: self.roll.clamp(-limit, limit),
            pitch: self.pitch.clamp(-limit, limit),
            yaw_rate: self.yaw_rate.clamp(-limit, limit),
            vertical_rate: self.vertical_rate.clamp(-limit, limit),
        }
    }

    pub fn is_within(&self, limit: f64) -> bool {
        self.roll.abs() <= limit
            && self.pitch.abs() <= limit
            && self.yaw_rate.abs() <= limit
            && self.vertical_rate.abs() <= limit
    }

    pub fn roll(&self) -> f64 { self.roll }

    pub fn pitch(&self) -> f64 { self.pitch }

    pub fn yaw_rate(&self) -> f64 { self.yaw_rate }

    pub fn vertical_rate(&self) -> f64 { self.vertical_rate }
}

impl fmt::Display for AxisCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(roll {:.3}, pitch {:.3}, yaw {:.3}, vert {:.3})",
            self.roll, self.pitch, self.yaw_rate, self.vertical_rate
        )
    }
}
