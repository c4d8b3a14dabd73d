//! Prize wheel demo entry point
//!
//! Headless spin: draws a fling velocity from a seeded RNG, runs the
//! fixed-timestep decay/snap pipeline to completion, and logs the winner.
//! Pass a seed as the first argument for a reproducible spin.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use prize_wheel::consts::SIM_DT;
use prize_wheel::{SpinEvent, SpinPhase, SpinTuning, SpinWheel, WheelConfig};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    log::info!("prize wheel demo, seed {seed}");

    let mut wheel = match SpinWheel::new(WheelConfig::demo(), SpinTuning::default()) {
        Ok(wheel) => wheel,
        Err(err) => {
            log::error!("failed to build wheel: {err}");
            std::process::exit(1);
        }
    };

    // A downward fling on the right side of the wheel, like the touch demo
    let mut rng = Pcg32::seed_from_u64(seed);
    let release_velocity: f32 = -rng.random_range(600.0..3000.0);
    if !wheel.fling(release_velocity) {
        log::error!("fling rejected");
        std::process::exit(1);
    }

    let mut ticks = 0u32;
    loop {
        match wheel.tick(SIM_DT) {
            Some(SpinEvent::SnapStarted { target_deg }) => {
                log::info!("snapping to {target_deg:.2}° after {ticks} ticks");
            }
            Some(SpinEvent::Settled { .. }) | None => {}
        }
        ticks += 1;

        if let SpinPhase::Resolved { winner } = wheel.phase() {
            let prize = &wheel.segments()[winner].prize;
            println!(
                "Winner is: {} (segment {winner}, settled at {:.2}° after {:.1}s)",
                prize.label,
                wheel.angle_deg(),
                ticks as f32 * SIM_DT
            );
            break;
        }

        // A spin bounded by the rest threshold cannot run this long
        if ticks > 120 * 120 {
            log::error!("spin failed to settle");
            std::process::exit(1);
        }
    }
}
