//! Spin state machine: fling → decay → snap → resolve
//!
//! The interaction is a strict pipeline. A fling starts a velocity-driven
//! exponential decay; when the wheel is slow enough the angle is wrapped to
//! one turn and eased onto the nearest segment boundary grid; only the fully
//! snapped angle is handed to the winner resolver. Input is disabled from
//! fling until the snap completes, so a spin can never be re-entered mid
//! flight. Advancing happens only through [`SpinWheel::tick`] at a fixed
//! timestep; there is no wall clock and no hidden state.

use serde::{Deserialize, Serialize};

use crate::config::{Prize, SpinTuning, WheelConfig};
use crate::consts::FULL_TURN;
use crate::error::WheelError;
use crate::wheel::segment::{Segment, angle_offset, angle_per_segment, build_segments};
use crate::wheel::winner::resolve_winner;

/// Round `value` to the nearest multiple of `step`
#[inline]
pub fn snap_to_step(value: f32, step: f32) -> f32 {
    (value / step).round() * step
}

/// Cubic ease-in-out over [0, 1], used for the snap animation
fn ease_in_out(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Current phase of a spin interaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpinPhase {
    /// No spin in progress; input enabled
    Idle,
    /// Decay in progress after a fling; input disabled
    Spinning {
        /// Current angular velocity (degrees/sec, signed)
        velocity: f32,
    },
    /// Easing onto the segment grid; input disabled
    Settling {
        /// Angle when the snap started (degrees)
        from_deg: f32,
        /// Snapped target angle (degrees, multiple of the segment step)
        target_deg: f32,
        /// Time spent settling so far (seconds)
        elapsed: f32,
    },
    /// Winner resolved and displayed; input enabled again
    Resolved {
        /// Winning segment index
        winner: usize,
    },
}

/// Events emitted by [`SpinWheel::tick`] on phase transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinEvent {
    /// Decay finished; the snap animation toward `target_deg` started
    SnapStarted { target_deg: f32 },
    /// Snap finished and the winner was resolved
    Settled { winner: usize },
}

/// A prize wheel instance: layout plus the one piece of mutable state, the
/// cumulative rotation angle and its phase.
#[derive(Debug, Clone)]
pub struct SpinWheel {
    config: WheelConfig,
    tuning: SpinTuning,
    segments: Vec<Segment>,
    /// Cumulative signed rotation (degrees); mutated only in `tick`
    angle_deg: f32,
    phase: SpinPhase,
}

impl SpinWheel {
    /// Build a wheel, validating config and tuning up front
    pub fn new(config: WheelConfig, tuning: SpinTuning) -> Result<Self, WheelError> {
        let segments = build_segments(&config, &tuning)?;
        Ok(Self {
            config,
            tuning,
            segments,
            angle_deg: 0.0,
            phase: SpinPhase::Idle,
        })
    }

    /// The segment arcs, in index order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Current cumulative rotation (degrees)
    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    /// Current spin phase
    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    /// Angular width of one segment (degrees)
    pub fn angle_per_segment(&self) -> f32 {
        angle_per_segment(self.config.segment_count)
    }

    /// Knob offset for renderers: half a segment (degrees)
    pub fn angle_offset(&self) -> f32 {
        angle_offset(self.config.segment_count)
    }

    /// Whether a new fling would be accepted right now. Input stays disabled
    /// from fling until the snap animation completes.
    pub fn input_enabled(&self) -> bool {
        matches!(self.phase, SpinPhase::Idle | SpinPhase::Resolved { .. })
    }

    /// Winning segment index of the last resolved spin, if any
    pub fn winner_index(&self) -> Option<usize> {
        match self.phase {
            SpinPhase::Resolved { winner } => Some(winner),
            _ => None,
        }
    }

    /// Winning prize of the last resolved spin, if any
    pub fn winner_prize(&self) -> Option<&Prize> {
        self.winner_index().and_then(|i| self.segments.get(i)).map(|s| &s.prize)
    }

    /// Start a spin from a gesture release velocity (pixels/sec).
    ///
    /// Returns `true` if the spin started. Rejected (with a log, `false`)
    /// while a spin is already in flight or when the velocity is non-finite
    /// or too slow to beat the rest threshold.
    pub fn fling(&mut self, release_velocity: f32) -> bool {
        if !self.input_enabled() {
            log::debug!("fling ignored: spin in progress ({:?})", self.phase);
            return false;
        }
        if !release_velocity.is_finite() {
            log::warn!("fling ignored: non-finite velocity");
            return false;
        }

        let velocity = release_velocity * self.tuning.fling_scale;
        if velocity.abs() < self.tuning.rest_velocity_deg_per_sec {
            log::debug!("fling ignored: velocity {velocity:.1}°/s below rest threshold");
            return false;
        }

        log::info!("spin started at {velocity:.1}°/s");
        self.phase = SpinPhase::Spinning { velocity };
        true
    }

    /// Cancel an in-flight spin: reset the rotation and re-enable input.
    pub fn cancel(&mut self) {
        if !matches!(self.phase, SpinPhase::Idle) {
            log::info!("spin cancelled");
        }
        self.angle_deg = 0.0;
        self.phase = SpinPhase::Idle;
    }

    /// Advance the spin by one fixed timestep.
    ///
    /// Returns an event on the decay→snap and snap→resolved transitions.
    /// Idle and Resolved phases are no-ops.
    pub fn tick(&mut self, dt: f32) -> Option<SpinEvent> {
        match self.phase {
            SpinPhase::Idle | SpinPhase::Resolved { .. } => None,

            SpinPhase::Spinning { velocity } => {
                self.angle_deg += velocity * dt;
                // Exponential decay, parameterized per millisecond
                let velocity = velocity * self.tuning.deceleration_per_ms.powf(dt * 1000.0);

                if velocity.abs() >= self.tuning.rest_velocity_deg_per_sec {
                    self.phase = SpinPhase::Spinning { velocity };
                    return None;
                }

                // Decay settled: fold the accumulated turns away, then ease
                // onto the segment grid from there.
                self.angle_deg %= FULL_TURN;
                let target_deg = snap_to_step(self.angle_deg, self.angle_per_segment());
                log::debug!(
                    "decay settled at {:.2}°, snapping to {:.2}°",
                    self.angle_deg,
                    target_deg
                );
                self.phase = SpinPhase::Settling {
                    from_deg: self.angle_deg,
                    target_deg,
                    elapsed: 0.0,
                };
                Some(SpinEvent::SnapStarted { target_deg })
            }

            SpinPhase::Settling {
                from_deg,
                target_deg,
                elapsed,
            } => {
                let elapsed = elapsed + dt;
                if elapsed < self.tuning.snap_duration_secs {
                    let t = ease_in_out(elapsed / self.tuning.snap_duration_secs);
                    self.angle_deg = from_deg + (target_deg - from_deg) * t;
                    self.phase = SpinPhase::Settling {
                        from_deg,
                        target_deg,
                        elapsed,
                    };
                    return None;
                }

                // Snap complete; only now is the angle allowed to reach the
                // resolver.
                self.angle_deg = target_deg;
                match resolve_winner(self.angle_deg, self.config.segment_count) {
                    Ok(winner) => {
                        log::info!(
                            "spin settled at {:.2}°, winner {} ({})",
                            self.angle_deg,
                            winner,
                            self.segments[winner].prize.label
                        );
                        self.phase = SpinPhase::Resolved { winner };
                        Some(SpinEvent::Settled { winner })
                    }
                    Err(err) => {
                        // Unreachable with a validated config and finite
                        // velocities; recover to Idle instead of wedging the
                        // wheel with input disabled.
                        log::error!("winner resolution failed: {err}");
                        self.phase = SpinPhase::Idle;
                        None
                    }
                }
            }
        }
    }
}
