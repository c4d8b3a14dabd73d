//! Deterministic wheel module
//!
//! All wheel logic lives here. This module must be pure and deterministic:
//! - Degrees-based angular math only
//! - Fixed timestep advance, no wall clock
//! - No rendering, gesture, or platform dependencies

pub mod segment;
pub mod spin;
pub mod winner;

pub use segment::{Segment, angle_offset, angle_per_segment, build_segments};
pub use spin::{SpinEvent, SpinPhase, SpinWheel, snap_to_step};
pub use winner::resolve_winner;
