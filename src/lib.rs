//! Prize Wheel - a spinning prize-wheel widget core
//!
//! Core modules:
//! - `wheel`: Deterministic wheel logic (segment layout, spin state machine, winner resolution)
//! - `config`: Data-driven wheel configuration and spin tuning
//! - `error`: Validation error taxonomy
//!
//! Rendering, gesture capture, and image loading are external collaborators:
//! the wheel exposes arc geometry and consumes release velocities, nothing more.

pub mod config;
pub mod error;
pub mod wheel;

pub use config::{Prize, SpinTuning, WheelConfig};
pub use error::WheelError;
pub use wheel::{
    Segment, SpinEvent, SpinPhase, SpinWheel, angle_offset, angle_per_segment, build_segments,
    resolve_winner, snap_to_step,
};

use glam::Vec2;

/// Wheel configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz, matches a smooth animation driver)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// One full turn in degrees
    pub const FULL_TURN: f32 = 360.0;

    /// Default number of prize segments
    pub const DEFAULT_SEGMENT_COUNT: usize = 7;

    /// Wheel annulus radii (logical pixels)
    pub const WHEEL_OUTER_RADIUS: f32 = 180.0;
    pub const WHEEL_INNER_RADIUS: f32 = 20.0;

    /// Visual gap between adjacent segments (degrees, presentational only)
    pub const SEGMENT_PAD_DEG: f32 = 0.29;

    /// Velocity retained per millisecond during the decay phase
    pub const DECELERATION_PER_MS: f32 = 0.999;
    /// Duration of the snap-to-segment animation (seconds)
    pub const SNAP_DURATION_SECS: f32 = 0.3;
    /// Angular speed below which the decay is considered settled (degrees/sec)
    pub const REST_VELOCITY_DEG_PER_SEC: f32 = 6.0;
    /// Degrees/sec of wheel rotation per pixel/sec of fling velocity
    pub const FLING_SCALE: f32 = 1.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_deg(mut deg: f32) -> f32 {
    deg %= consts::FULL_TURN;
    if deg < 0.0 {
        deg += consts::FULL_TURN;
    }
    deg
}

/// Point on the wheel at `radius` and `deg`, in screen coordinates
/// (0° at 12 o'clock, angles increasing clockwise, y-axis pointing down).
#[inline]
pub fn wheel_point(radius: f32, deg: f32) -> Vec2 {
    let rad = deg.to_radians();
    Vec2::new(radius * rad.sin(), -radius * rad.cos())
}
