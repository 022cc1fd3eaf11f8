//! Finite-state controller for the PCR thermal cycle.

use crate::constants::*;

/// One phase of the thermal cycle. Ordering is cyclic:
/// Cooling → Denaturation → Annealing → Extension → Cooling.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stage {
    Denaturation,
    Annealing,
    Extension,
    Cooling,
}

impl Stage {
    pub fn target_temperature(self) -> f32 {
        match self {
            Stage::Denaturation => DENATURATION_TEMP,
            Stage::Annealing => ANNEALING_TEMP,
            Stage::Extension => EXTENSION_TEMP,
            Stage::Cooling => COOLING_TEMP,
        }
    }

    /// Nominal duration (s) used by auto-advance.
    pub fn duration(self) -> f32 {
        match self {
            Stage::Denaturation => DENATURATION_SECS,
            Stage::Annealing => ANNEALING_SECS,
            Stage::Extension => EXTENSION_SECS,
            Stage::Cooling => COOLING_SECS,
        }
    }

    pub fn next(self) -> Stage {
        match self {
            Stage::Cooling => Stage::Denaturation,
            Stage::Denaturation => Stage::Annealing,
            Stage::Annealing => Stage::Extension,
            Stage::Extension => Stage::Cooling,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Denaturation => "denaturation",
            Stage::Annealing => "annealing",
            Stage::Extension => "extension",
            Stage::Cooling => "cooling",
        }
    }
}

/// Owns the active stage, its timer, and the completed-cycle count.
/// `advance` is also the hook for the external gesture/key trigger.
#[derive(Debug, Clone)]
pub struct StageController {
    stage: Stage,
    stage_timer: f32,
    cycle_count: u32,
    auto_advance: bool,
}

impl StageController {
    pub fn new() -> Self {
        Self {
            stage: Stage::Cooling,
            stage_timer: 0.0,
            cycle_count: 0,
            auto_advance: true,
        }
    }

    /// Moves to the next stage and resets the timer. The cycle count
    /// increments only on the Extension → Cooling wraparound.
    pub fn advance(&mut self) {
        if self.stage == Stage::Extension {
            self.cycle_count += 1;
        }
        self.stage = self.stage.next();
        self.stage_timer = 0.0;
        log::info!(
            "PCR stage -> {} ({:.0} °C), cycle {}",
            self.stage.label(),
            self.stage.target_temperature(),
            self.cycle_count
        );
    }

    /// Accumulates elapsed time; fires at most one auto-advance per call.
    pub fn tick(&mut self, dt: f32) {
        self.stage_timer += dt;
        if self.auto_advance && self.stage_timer >= self.stage.duration() {
            self.advance();
        }
    }

    pub fn reset(&mut self) {
        self.stage = Stage::Cooling;
        self.stage_timer = 0.0;
        self.cycle_count = 0;
    }

    pub fn current(&self) -> Stage {
        self.stage
    }

    pub fn target_temperature(&self) -> f32 {
        self.stage.target_temperature()
    }

    pub fn stage_timer(&self) -> f32 {
        self.stage_timer
    }

    pub fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.auto_advance = enabled;
    }
}

impl Default for StageController {
    fn default() -> Self {
        Self::new()
    }
}
