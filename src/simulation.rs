use crate::config::{CellKind, KindConfig, SimulationConfig};
use crate::constants::*;
use crate::interaction::sample_hands;
use crate::stage::StageController;
use crate::utils::cell_color;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type SimRng = StdRng;

// --- Core Data Structures ---

/// One simulated thermophilic organism. All dynamics live in [`CellAgent::update`];
/// the agent owns its kinematic state exclusively and mutates nothing else.
#[derive(Debug, Clone)]
pub struct CellAgent {
    pub kind: CellKind,
    pub position: Vec3,
    pub velocity: Vec3,
    /// °C, driven toward the stage target; no hard clamp.
    pub temperature: f32,
    /// 0..=100. Zero forces `active = false`.
    pub energy: f32,
    pub active: bool,
    pub division_count: u32,
    pub rotation: Vec3,
    pub pulse_phase: f32,
    /// Display scale, fixed at spawn (kind base size with jitter).
    pub size: f32,
    pub config: KindConfig,
    rotation_speed: Vec3,
    spawn_position: Vec3,
}

impl CellAgent {
    /// Advances the agent by one tick. Step order is fixed: thermal
    /// relaxation, hand interaction, energy accounting, division trial,
    /// animation, physics. Later steps read values written by earlier ones.
    pub fn update(&mut self, dt: f32, target_temperature: f32, hands: &[Vec3], rng: &mut SimRng) {
        // 1. First-order approach toward the stage target; no overshoot
        //    while dt * THERMAL_RATE < 1.
        self.temperature += (target_temperature - self.temperature) * dt * THERMAL_RATE;

        // 2. Hand field: repulsion plus contact energy. Contact revives
        //    deactivated agents.
        let sample = sample_hands(self.position, hands, dt);
        self.velocity += sample.impulse;
        if sample.contacts > 0 {
            let gain =
                sample.contacts as f32 * HAND_ENERGY_RATE * self.config.energy_efficiency * dt;
            self.energy = (self.energy + gain).min(MAX_ENERGY);
            self.active = true;
        }

        // 3. Energy budget. Drain grows linearly past the optimum and
        //    doubles again past the survivable maximum.
        if self.active {
            let mut drain = ENERGY_DRAIN_RATE * dt;
            if self.temperature > self.config.optimal_temp {
                drain *=
                    1.0 + (self.temperature - self.config.optimal_temp) / THERMAL_STRESS_DIVISOR;
            }
            if self.temperature > self.config.max_temp {
                drain *= HEAT_SHOCK_DRAIN_FACTOR;
            }
            self.energy -= drain;
            if self.energy <= 0.0 {
                self.energy = 0.0;
                self.active = false;
            }
        }

        // 4. Division trial. Probability is per tick, not per second, so
        //    the effective rate depends on the host tick rate; kept as the
        //    installation ran. Division records count and cost only, it
        //    does not spawn a new agent.
        if self.active
            && self.energy > DIVISION_ENERGY_THRESHOLD
            && self.temperature > self.config.division_threshold
            && self.division_count < self.config.max_divisions
            && rng.gen_bool(DIVISION_PROBABILITY)
        {
            self.division_count += 1;
            self.energy *= DIVISION_ENERGY_FACTOR;
        }

        // 5. Animation clocks.
        self.rotation += self.rotation_speed * dt;
        self.pulse_phase += PULSE_RATE * dt;

        // 6. Bounded-space physics: integrate, damp, reflect off ±WORLD_BOUND.
        self.position += self.velocity * dt;
        self.velocity *= VELOCITY_DAMPING;
        for axis in 0..3 {
            if self.position[axis] > WORLD_BOUND {
                self.position[axis] = WORLD_BOUND;
                self.velocity[axis] *= BOUNCE_FACTOR;
            } else if self.position[axis] < -WORLD_BOUND {
                self.position[axis] = -WORLD_BOUND;
                self.velocity[axis] *= BOUNCE_FACTOR;
            }
        }
    }

    /// Restores the agent to its as-spawned state without recreating it.
    /// Animation clocks keep running.
    pub fn reset(&mut self) {
        self.temperature = AMBIENT_TEMPERATURE;
        self.energy = MAX_ENERGY;
        self.active = true;
        self.position = self.spawn_position;
        self.velocity = Vec3::ZERO;
        self.division_count = 0;
    }

    pub fn color(&self) -> Vec3 {
        cell_color(self.active, self.temperature, Vec3::from(self.config.base_color))
    }

    pub fn spawn_position(&self) -> Vec3 {
        self.spawn_position
    }
}

/// Derived snapshot, recomputed every tick from the agent collection.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PopulationStats {
    pub total: usize,
    pub active: usize,
    pub divisions: u32,
    /// Mean over active agents only; 0.0 when none are active.
    pub mean_temperature: f32,
}

/// One renderable row per agent, the full contract toward the renderer.
#[derive(Debug, Clone, Copy)]
pub struct CellInstance {
    pub position: Vec3,
    pub size: f32,
    pub rotation: Vec3,
    pub color: Vec3,
    pub temperature: f32,
    pub active: bool,
}

/// Owns the agent collection and the stage controller, and drives the
/// per-tick update. The host loop calls `update` once per tick with that
/// tick's hand positions, then reads `stats`/`fill_instances`.
pub struct SimulationState {
    pub cells: Vec<CellAgent>,
    pub stage: StageController,
    rng: SimRng,
    config: SimulationConfig,
    stats: PopulationStats,
    is_paused: bool,
}

impl SimulationState {
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_rng(config, SimRng::from_entropy())
    }

    /// Deterministic construction for tests and replays.
    pub fn with_rng(config: SimulationConfig, rng: SimRng) -> Self {
        let mut state = Self {
            cells: Vec::new(),
            stage: StageController::new(),
            rng,
            config,
            stats: PopulationStats::default(),
            is_paused: false,
        };
        state.generate(INITIAL_CELL_COUNT, &CellKind::ALL);
        state
    }

    /// Replaces the population with `count` fresh agents, kinds drawn
    /// uniformly from `kinds`, positions uniform over the spawn box.
    pub fn generate(&mut self, count: usize, kinds: &[CellKind]) {
        self.cells.clear();
        self.cells.reserve(count);
        for _ in 0..count {
            let kind = kinds[self.rng.gen_range(0..kinds.len())];
            let cell = Self::create_cell(&mut self.rng, kind, &self.config);
            self.cells.push(cell);
        }
        self.stats = Self::compute_stats(&self.cells);
    }

    fn create_cell(rng: &mut SimRng, kind: CellKind, config: &SimulationConfig) -> CellAgent {
        let profile = config.kind(kind);
        let position = Vec3::new(
            rng.gen_range(-SPAWN_EXTENT.x..SPAWN_EXTENT.x),
            rng.gen_range(-SPAWN_EXTENT.y..SPAWN_EXTENT.y),
            rng.gen_range(-SPAWN_EXTENT.z..SPAWN_EXTENT.z),
        );
        let size = profile.base_size * rng.gen_range(SIZE_JITTER_MIN..SIZE_JITTER_MAX);
        let rotation_speed = Vec3::new(
            rng.gen_range(ROTATION_SPEED_MIN..ROTATION_SPEED_MAX),
            rng.gen_range(ROTATION_SPEED_MIN..ROTATION_SPEED_MAX),
            rng.gen_range(ROTATION_SPEED_MIN..ROTATION_SPEED_MAX),
        );
        let pulse_phase = rng.gen_range(0.0..std::f32::consts::TAU);
        CellAgent {
            kind,
            position,
            velocity: Vec3::ZERO,
            temperature: AMBIENT_TEMPERATURE,
            energy: MAX_ENERGY,
            active: true,
            division_count: 0,
            rotation: Vec3::ZERO,
            pulse_phase,
            size,
            config: profile.clone(),
            rotation_speed,
            spawn_position: position,
        }
    }

    /// One simulation tick: stage timer, then every agent against this
    /// tick's hand list, then the stats snapshot.
    pub fn update(&mut self, dt: f32, hands: &[Vec3]) {
        if self.is_paused || dt <= 0.0 {
            return;
        }
        self.stage.tick(dt);
        let target = self.stage.target_temperature();
        for cell in &mut self.cells {
            cell.update(dt, target, hands, &mut self.rng);
        }
        self.stats = Self::compute_stats(&self.cells);
    }

    fn compute_stats(cells: &[CellAgent]) -> PopulationStats {
        let mut stats = PopulationStats {
            total: cells.len(),
            ..PopulationStats::default()
        };
        let mut temperature_sum = 0.0;
        for cell in cells {
            stats.divisions += cell.division_count;
            if cell.active {
                stats.active += 1;
                temperature_sum += cell.temperature;
            }
        }
        if stats.active > 0 {
            stats.mean_temperature = temperature_sum / stats.active as f32;
        }
        stats
    }

    pub fn stats(&self) -> PopulationStats {
        self.stats
    }

    /// Full state reset without recreating agents: every cell returns to
    /// its spawn position and as-spawned budget, the cycle restarts at
    /// Cooling.
    pub fn reset(&mut self) {
        self.stage.reset();
        for cell in &mut self.cells {
            cell.reset();
        }
        self.stats = Self::compute_stats(&self.cells);
    }

    /// Fresh population under a fresh seed, as opposed to the in-place
    /// `reset`.
    pub fn restart(&mut self) {
        log::info!("Restarting simulation with new seed");
        self.rng = SimRng::from_entropy();
        self.stage.reset();
        self.generate(INITIAL_CELL_COUNT, &CellKind::ALL);
        self.is_paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
        log::info!(
            "Simulation {}",
            if self.is_paused { "paused" } else { "resumed" }
        );
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// Writes one renderable row per agent into a caller-owned buffer.
    /// The pulse clock is baked into the instance size.
    pub fn fill_instances(&self, out: &mut Vec<CellInstance>) {
        out.clear();
        out.extend(self.cells.iter().map(|cell| CellInstance {
            position: cell.position,
            size: cell.size * (1.0 + PULSE_AMPLITUDE * cell.pulse_phase.sin()),
            rotation: cell.rotation,
            color: cell.color(),
            temperature: cell.temperature,
            active: cell.active,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Stage;

    const DT: f32 = 1.0 / 60.0;

    fn seeded_state(seed: u64, count: usize, kinds: &[CellKind]) -> SimulationState {
        let mut state =
            SimulationState::with_rng(SimulationConfig::new(), SimRng::seed_from_u64(seed));
        state.generate(count, kinds);
        state
    }

    /// Holds the controller in denaturation so the target stays at 94 °C.
    fn pin_denaturation(state: &mut SimulationState) {
        state.stage.set_auto_advance(false);
        state.stage.advance();
        assert_eq!(state.stage.current(), Stage::Denaturation);
    }

    #[test]
    fn temperature_approaches_target_without_overshoot() {
        let mut state = seeded_state(7, 1, &[CellKind::PyrococcusFuriosus]);
        pin_denaturation(&mut state);
        let target = state.stage.target_temperature();
        let mut previous_gap = (target - state.cells[0].temperature).abs();
        for _ in 0..200 {
            state.update(DT, &[]);
            let gap = (target - state.cells[0].temperature).abs();
            assert!(gap < previous_gap, "gap must shrink every tick");
            assert!(state.cells[0].temperature <= target);
            previous_gap = gap;
        }
    }

    #[test]
    fn energy_stays_bounded_under_constant_contact() {
        let mut state = seeded_state(11, 4, &CellKind::ALL);
        for _ in 0..2000 {
            let hands: Vec<Vec3> = state.cells.iter().map(|c| c.position).collect();
            state.update(DT, &hands[..2.min(hands.len())]);
            for cell in &state.cells {
                assert!((0.0..=MAX_ENERGY).contains(&cell.energy));
            }
        }
    }

    #[test]
    fn contact_gain_is_at_most_rate_times_dt_for_every_kind() {
        let dt = 0.1;
        for kind in CellKind::ALL {
            let mut state = seeded_state(3, 1, &[kind]);
            state.stage.set_auto_advance(false); // stay cooling, minimal drain
            state.cells[0].energy = 40.0;
            let hand = state.cells[0].position;
            state.update(dt, &[hand]);
            let cell = &state.cells[0];
            assert!(cell.active);
            assert!(cell.energy > 40.0, "{} gained no energy", kind.label());
            assert!(
                cell.energy - 40.0 <= HAND_ENERGY_RATE * dt,
                "{} gained more than the contact rate allows",
                kind.label()
            );
        }
    }

    #[test]
    fn depleted_cell_deactivates_and_stops_draining() {
        let mut state = seeded_state(5, 1, &[CellKind::Generic]);
        state.stage.set_auto_advance(false);
        state.cells[0].energy = 0.5;
        for _ in 0..60 {
            state.update(DT, &[]);
        }
        assert!(!state.cells[0].active);
        assert_eq!(state.cells[0].energy, 0.0);
        // A deactivated agent holds at zero.
        state.update(DT, &[]);
        assert_eq!(state.cells[0].energy, 0.0);
    }

    #[test]
    fn contact_revives_a_deactivated_cell() {
        let mut state = seeded_state(13, 1, &[CellKind::ThermusAquaticus]);
        state.stage.set_auto_advance(false);
        state.cells[0].energy = 0.0;
        state.cells[0].active = false;
        let hand = state.cells[0].position;
        state.update(DT, &[hand]);
        assert!(state.cells[0].active);
        assert!(state.cells[0].energy > 0.0);
    }

    #[test]
    fn division_count_saturates_at_kind_maximum() {
        let mut state = seeded_state(17, 1, &[CellKind::PyrococcusFuriosus]);
        pin_denaturation(&mut state);
        let cap = state.cells[0].config.max_divisions;
        // A parked hand keeps energy pegged; 94 °C clears pyrococcus'
        // division threshold without heat shock.
        for _ in 0..20_000 {
            let hand = state.cells[0].position;
            state.update(DT, &[hand]);
            assert!(state.cells[0].division_count <= cap);
            assert!((0.0..=MAX_ENERGY).contains(&state.cells[0].energy));
        }
        assert_eq!(state.cells[0].division_count, cap);
        assert_eq!(state.stats().divisions, cap);
    }

    #[test]
    fn positions_never_leave_world_bounds() {
        let mut state = seeded_state(19, 8, &CellKind::ALL);
        for cell in &mut state.cells {
            cell.velocity = Vec3::splat(500.0);
        }
        for _ in 0..600 {
            state.update(DT, &[]);
            for cell in &state.cells {
                for axis in 0..3 {
                    assert!(cell.position[axis].abs() <= WORLD_BOUND);
                }
            }
        }
    }

    #[test]
    fn boundary_reflection_flips_and_halves_velocity() {
        let mut state = seeded_state(23, 1, &[CellKind::Generic]);
        state.cells[0].position = Vec3::new(9.9, 0.0, 0.0);
        state.cells[0].velocity = Vec3::new(60.0, 0.0, 0.0);
        state.update(DT, &[]);
        let cell = &state.cells[0];
        assert_eq!(cell.position.x, WORLD_BOUND);
        assert!(cell.velocity.x < 0.0);
    }

    #[test]
    fn reset_restores_spawn_positions_bit_for_bit() {
        let mut state = seeded_state(29, 12, &CellKind::ALL);
        let spawned: Vec<Vec3> = state.cells.iter().map(|c| c.position).collect();
        for step in 0..300 {
            let t = step as f32 * DT;
            let hand = Vec3::new(6.0 * t.cos(), 2.0 * t.sin(), 0.0);
            state.update(DT, &[hand]);
        }
        state.reset();
        for (cell, original) in state.cells.iter().zip(&spawned) {
            assert_eq!(cell.position.x.to_bits(), original.x.to_bits());
            assert_eq!(cell.position.y.to_bits(), original.y.to_bits());
            assert_eq!(cell.position.z.to_bits(), original.z.to_bits());
            assert_eq!(cell.temperature, AMBIENT_TEMPERATURE);
            assert_eq!(cell.energy, MAX_ENERGY);
            assert!(cell.active);
            assert_eq!(cell.division_count, 0);
            assert_eq!(cell.velocity, Vec3::ZERO);
        }
        assert_eq!(state.stage.current(), Stage::Cooling);
        assert_eq!(state.stage.cycle_count(), 0);
    }

    #[test]
    fn stats_count_active_agents_only() {
        let mut state = seeded_state(31, 6, &CellKind::ALL);
        state.stage.set_auto_advance(false);
        state.cells[0].energy = 0.0;
        state.cells[0].active = false;
        state.cells[1].energy = 0.0;
        state.cells[1].active = false;
        state.update(DT, &[]);
        let stats = state.stats();
        assert_eq!(stats.total, 6);
        assert_eq!(stats.active, 4);
        assert!(stats.mean_temperature > 0.0);
    }

    #[test]
    fn depleted_cell_renders_gray_regardless_of_temperature() {
        let mut state = seeded_state(37, 1, &[CellKind::ThermusAquaticus]);
        state.cells[0].energy = 0.0;
        state.cells[0].active = false;
        state.cells[0].temperature = 94.0;
        assert_eq!(state.cells[0].color(), Vec3::splat(0.5));
        let mut instances = Vec::new();
        state.fill_instances(&mut instances);
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].color, Vec3::splat(0.5));
        assert!(!instances[0].active);
    }

    #[test]
    fn paused_state_ignores_updates() {
        let mut state = seeded_state(41, 3, &CellKind::ALL);
        let before: Vec<f32> = state.cells.iter().map(|c| c.temperature).collect();
        state.toggle_pause();
        state.update(1.0, &[]);
        let after: Vec<f32> = state.cells.iter().map(|c| c.temperature).collect();
        assert_eq!(before, after);
        assert_eq!(state.stage.stage_timer(), 0.0);
    }

    #[test]
    fn generate_draws_kinds_from_the_requested_set() {
        let state = seeded_state(43, 40, &[CellKind::Generic, CellKind::ThermusAquaticus]);
        assert_eq!(state.cells.len(), 40);
        assert!(state.cells.iter().all(|c| matches!(
            c.kind,
            CellKind::Generic | CellKind::ThermusAquaticus
        )));
        // Uniform draw over two kinds: both should appear in 40 cells.
        assert!(state.cells.iter().any(|c| c.kind == CellKind::Generic));
        assert!(state
            .cells
            .iter()
            .any(|c| c.kind == CellKind::ThermusAquaticus));
    }
}
