use basteria::constants::{FIXED_TIMESTEP, MAX_CYCLES};
use basteria::{SimulationConfig, SimulationState};
use glam::Vec3;

// Headless demo driver: runs the core at the installation's 60 Hz tick
// with a scripted hand path standing in for the camera/hand-tracking
// collaborator. Wall-clock pacing and rendering are the real host's job.

const RUN_SECS: f32 = 260.0; // two full thermal cycles
const STATS_INTERVAL_SECS: f32 = 10.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut simulation = SimulationState::new(SimulationConfig::new());
    let mut instances = Vec::new();
    let steps = (RUN_SECS / FIXED_TIMESTEP) as u32;
    let stats_every = (STATS_INTERVAL_SECS / FIXED_TIMESTEP) as u32;

    for step in 0..steps {
        let t = step as f32 * FIXED_TIMESTEP;
        let hands = scripted_hands(t);
        simulation.update(FIXED_TIMESTEP, &hands);

        if step % stats_every == 0 {
            let stats = simulation.stats();
            println!(
                "t={:6.1}s  stage={:<12}  cycle {:>2}/{}  active {:>2}/{}  mean {:5.1} °C  divisions {}",
                t,
                simulation.stage.current().label(),
                simulation.stage.cycle_count(),
                MAX_CYCLES,
                stats.active,
                stats.total,
                stats.mean_temperature,
                stats.divisions,
            );
        }
    }

    simulation.fill_instances(&mut instances);
    let stats = simulation.stats();
    println!(
        "final frame: {} instances, {} active, {} divisions recorded",
        instances.len(),
        stats.active,
        stats.divisions
    );
    Ok(())
}

// One hand sweeping slow ellipses through the population; a second hand
// joins after a minute, mirrored on the opposite side.
fn scripted_hands(t: f32) -> Vec<Vec3> {
    let first = Vec3::new(
        6.0 * (0.4 * t).cos(),
        2.0 * (0.7 * t).sin(),
        2.0 * (0.3 * t).sin(),
    );
    if t < 60.0 {
        vec![first]
    } else {
        vec![first, -first]
    }
}
