//! Wheel configuration and spin tuning
//!
//! Both structs are plain data: serde round-trippable, validated once at the
//! boundary when a `SpinWheel` is built. Tuning values mirror the animation
//! driver's knobs (decay deceleration, snap duration), not algorithm choices.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::WheelError;

/// One prize entry: a display label plus an optional image asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    /// Display name shown on the segment and announced as the winner
    pub label: String,
    /// Image URL for the segment artwork (resolved by an external loader)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Prize {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            image_url: None,
        }
    }
}

/// Static wheel configuration: how many segments, what they hold, how they look
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Number of equal segments (>= 2)
    pub segment_count: usize,
    /// Prize per segment, in segment order; length must equal `segment_count`
    pub prizes: Vec<Prize>,
    /// Fill colors, cycled by segment index; must be non-empty
    pub palette: Vec<String>,
}

impl WheelConfig {
    /// Build a config from a prize list, one segment per prize
    pub fn from_prizes(prizes: Vec<Prize>, palette: Vec<String>) -> Self {
        Self {
            segment_count: prizes.len(),
            prizes,
            palette,
        }
    }

    /// The 7-prize demo wheel
    pub fn demo() -> Self {
        let labels = [
            "La Lumiere",
            "Primarasa",
            "KartikaSari",
            "Gokana",
            "Solaria",
            "DunkinDonuts",
            "Yoshinoya",
        ];
        let palette = ["grey", "blue", "red", "pink", "green", "yellow", "cyan"];
        Self::from_prizes(
            labels.into_iter().map(Prize::new).collect(),
            palette.into_iter().map(String::from).collect(),
        )
    }

    /// Check segment/prize/palette counts
    pub fn validate(&self) -> Result<(), WheelError> {
        if self.segment_count < 2 {
            return Err(WheelError::InvalidConfig(format!(
                "segment_count must be >= 2, got {}",
                self.segment_count
            )));
        }
        if self.prizes.len() != self.segment_count {
            return Err(WheelError::InvalidConfig(format!(
                "expected {} prizes, got {}",
                self.segment_count,
                self.prizes.len()
            )));
        }
        if self.palette.is_empty() {
            return Err(WheelError::InvalidConfig("palette is empty".into()));
        }
        Ok(())
    }
}

/// Spin animation tuning
///
/// Degrees everywhere; the fling velocity arrives in pixels/sec from the
/// gesture layer and is scaled into degrees/sec by `fling_scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinTuning {
    /// Fraction of angular velocity retained per millisecond of decay
    pub deceleration_per_ms: f32,
    /// Snap-to-segment animation duration (seconds)
    pub snap_duration_secs: f32,
    /// Speed below which the decay is considered settled (degrees/sec)
    pub rest_velocity_deg_per_sec: f32,
    /// Degrees/sec of rotation per pixel/sec of release velocity
    pub fling_scale: f32,
    /// Outer radius of the wheel annulus (logical pixels)
    pub outer_radius: f32,
    /// Inner radius of the wheel annulus (logical pixels)
    pub inner_radius: f32,
    /// Visual gap between adjacent segments (degrees)
    pub pad_deg: f32,
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            deceleration_per_ms: DECELERATION_PER_MS,
            snap_duration_secs: SNAP_DURATION_SECS,
            rest_velocity_deg_per_sec: REST_VELOCITY_DEG_PER_SEC,
            fling_scale: FLING_SCALE,
            outer_radius: WHEEL_OUTER_RADIUS,
            inner_radius: WHEEL_INNER_RADIUS,
            pad_deg: SEGMENT_PAD_DEG,
        }
    }
}

impl SpinTuning {
    /// Check tuning values are usable by the spin state machine
    pub fn validate(&self) -> Result<(), WheelError> {
        if !(self.deceleration_per_ms > 0.0 && self.deceleration_per_ms < 1.0) {
            return Err(WheelError::InvalidConfig(format!(
                "deceleration_per_ms must be in (0, 1), got {}",
                self.deceleration_per_ms
            )));
        }
        if !(self.snap_duration_secs > 0.0) {
            return Err(WheelError::InvalidConfig(
                "snap_duration_secs must be positive".into(),
            ));
        }
        if !(self.rest_velocity_deg_per_sec > 0.0) {
            return Err(WheelError::InvalidConfig(
                "rest_velocity_deg_per_sec must be positive".into(),
            ));
        }
        if !(self.inner_radius >= 0.0 && self.outer_radius > self.inner_radius) {
            return Err(WheelError::InvalidConfig(format!(
                "radii must satisfy 0 <= inner < outer, got inner={} outer={}",
                self.inner_radius, self.outer_radius
            )));
        }
        if !(self.pad_deg >= 0.0) {
            return Err(WheelError::InvalidConfig(
                "pad_deg must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
