//! Winner resolution: mapping a settled rotation angle to a segment index
//!
//! The knob is fixed; the wheel rotates beneath it. The sign of the
//! cumulative angle encodes the rotation direction, which is opposite the
//! visual direction, hence the two branches below. The branch asymmetry and
//! the modulo wrap on the non-negative branch are part of the wheel's
//! rotation convention and must not be "simplified".

use crate::consts::FULL_TURN;
use crate::error::WheelError;

/// Resolve the winning segment index for a settled cumulative rotation.
///
/// `final_angle_deg` is the cumulative signed angle after the snap animation
/// has finished; it may be many turns in either direction. The result is
/// always in `[0, segment_count)`.
///
/// Steps:
/// 1. reduce the angle to a `[0, 360)` magnitude, rounding to the nearest
///    whole degree (half-degree ties round toward +∞) so float noise at
///    segment boundaries cannot flip the result;
/// 2. negative rotations index segments directly;
/// 3. non-negative rotations count from the other end, with a wrap so a zero
///    magnitude maps to index 0 instead of `segment_count`.
pub fn resolve_winner(final_angle_deg: f32, segment_count: usize) -> Result<usize, WheelError> {
    if segment_count == 0 {
        return Err(WheelError::InvalidConfig(
            "segment_count must be positive".into(),
        ));
    }
    if !final_angle_deg.is_finite() {
        return Err(WheelError::InvalidInput(format!(
            "final angle must be finite, got {final_angle_deg}"
        )));
    }

    let step = FULL_TURN / segment_count as f32;
    // Round ties toward +∞; `f32::round` would pull negative half-degree
    // remainders one whole degree further from zero.
    let mut deg = (final_angle_deg % FULL_TURN + 0.5).floor().abs();
    if deg >= FULL_TURN {
        // Rounding can land a near-full-turn remainder exactly on 360
        deg = 0.0;
    }
    let slot = (deg / step).floor() as usize;

    if final_angle_deg < 0.0 {
        Ok(slot)
    } else {
        Ok((segment_count - slot) % segment_count)
    }
}
