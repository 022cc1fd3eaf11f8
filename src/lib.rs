//! Core simulation for the basteria PCR installation: a finite-state
//! thermal-cycle controller, a population of thermophilic cell agents,
//! and a hand-interaction force field. Camera capture, hand-landmark
//! extraction and 3D rendering live outside this crate and talk to it
//! through plain data: a list of hand positions in, one renderable row
//! per agent out.

pub mod config;
pub mod constants;
pub mod interaction;
pub mod simulation;
pub mod stage;
pub mod utils;

pub use config::{CellKind, KindConfig, SimulationConfig};
pub use simulation::{CellAgent, CellInstance, PopulationStats, SimRng, SimulationState};
pub use stage::{Stage, StageController};
