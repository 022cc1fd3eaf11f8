// --- Global Simulation Constants ---
use glam::Vec3;

pub const INITIAL_CELL_COUNT: usize = 50;
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
// Display limit only; the thermal cycle itself never halts.
pub const MAX_CYCLES: u32 = 30;

// --- PCR stage targets (°C) and nominal durations (s) ---
pub const DENATURATION_TEMP: f32 = 94.0;
pub const DENATURATION_SECS: f32 = 30.0;
pub const ANNEALING_TEMP: f32 = 55.0;
pub const ANNEALING_SECS: f32 = 30.0;
pub const EXTENSION_TEMP: f32 = 72.0;
pub const EXTENSION_SECS: f32 = 60.0;
pub const COOLING_TEMP: f32 = 25.0;
pub const COOLING_SECS: f32 = 10.0;

pub const AMBIENT_TEMPERATURE: f32 = 25.0;
// First-order relaxation rate toward the stage target.
pub const THERMAL_RATE: f32 = 2.0;

// --- Space ---
// Spawn volume matches the installation's stage box.
pub const SPAWN_EXTENT: Vec3 = Vec3::new(8.0, 4.0, 5.0);
// Hard per-axis position bound; agents reflect off it.
pub const WORLD_BOUND: f32 = 10.0;
pub const VELOCITY_DAMPING: f32 = 0.95;
pub const BOUNCE_FACTOR: f32 = -0.5;

// --- Hand interaction ---
pub const HAND_INFLUENCE_RADIUS: f32 = 3.0;
pub const HAND_CONTACT_RADIUS: f32 = 1.0;
pub const HAND_REPULSION_STRENGTH: f32 = 2.0;
// Energy gained per second of contact, before kind efficiency.
pub const HAND_ENERGY_RATE: f32 = 15.0;
// Keeps the repulsion finite when a hand sits exactly on an agent.
pub const HAND_DISTANCE_EPSILON: f32 = 0.1;

// --- Energy budget ---
pub const MAX_ENERGY: f32 = 100.0;
pub const ENERGY_DRAIN_RATE: f32 = 3.0;
// Degrees above optimal that double the drain.
pub const THERMAL_STRESS_DIVISOR: f32 = 20.0;
// Extra drain multiplier past the kind's survivable maximum.
pub const HEAT_SHOCK_DRAIN_FACTOR: f32 = 2.0;

// --- Division ---
pub const DIVISION_ENERGY_THRESHOLD: f32 = 80.0;
// Bernoulli trial per tick, NOT scaled by dt (tick-rate dependent).
pub const DIVISION_PROBABILITY: f64 = 0.01;
pub const DIVISION_ENERGY_FACTOR: f32 = 0.5;

// --- Animation ---
pub const PULSE_RATE: f32 = 3.0;
pub const PULSE_AMPLITUDE: f32 = 0.05;
pub const ROTATION_SPEED_MIN: f32 = 0.5;
pub const ROTATION_SPEED_MAX: f32 = 2.0;
pub const SIZE_JITTER_MIN: f32 = 0.8;
pub const SIZE_JITTER_MAX: f32 = 1.2;

// --- Temperature color ramp ---
pub const TEMP_RAMP_SPAN: f32 = 70.0;
pub const HOT_YELLOW: Vec3 = Vec3::new(0.8, 0.8, 0.2);
pub const HOT_RED: Vec3 = Vec3::new(0.8, 0.2, 0.2);
pub const INACTIVE_COLOR: Vec3 = Vec3::new(0.5, 0.5, 0.5);
