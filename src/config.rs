use crate::constants::AMBIENT_TEMPERATURE;

/// Closed set of species profiles. Each variant resolves to an immutable
/// [`KindConfig`] once at agent construction; there is no per-agent tuning
/// beyond the size jitter applied at spawn time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellKind {
    ThermusAquaticus,
    PyrococcusFuriosus,
    ThermococcusLitoralis,
    Generic,
}

impl CellKind {
    pub const ALL: [CellKind; 4] = [
        CellKind::ThermusAquaticus,
        CellKind::PyrococcusFuriosus,
        CellKind::ThermococcusLitoralis,
        CellKind::Generic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CellKind::ThermusAquaticus => "thermus_aquaticus",
            CellKind::PyrococcusFuriosus => "pyrococcus_furiosus",
            CellKind::ThermococcusLitoralis => "thermococcus_litoralis",
            CellKind::Generic => "generic",
        }
    }
}

#[derive(Debug, Clone)]
pub struct KindConfig {
    /// Temperature (°C) below which the kind drains energy at the base rate.
    pub optimal_temp: f32,
    /// Survivable maximum; above it the drain is additionally heat-shocked.
    pub max_temp: f32,
    pub base_color: [f32; 3],
    pub base_size: f32,
    /// Scales hand-contact energy gain, 0..=1.
    pub energy_efficiency: f32,
    /// Temperature (°C) the kind must exceed before division is possible.
    pub division_threshold: f32,
    pub max_divisions: u32,
}

impl Default for KindConfig {
    fn default() -> Self {
        Self {
            optimal_temp: AMBIENT_TEMPERATURE,
            max_temp: 60.0,
            base_color: [0.2, 0.8, 0.2],
            base_size: 1.0,
            energy_efficiency: 1.0,
            division_threshold: 40.0,
            max_divisions: 2,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimulationConfig {
    pub thermus_aquaticus: KindConfig,
    pub pyrococcus_furiosus: KindConfig,
    pub thermococcus_litoralis: KindConfig,
    pub generic: KindConfig,
}

impl SimulationConfig {
    pub fn new() -> Self {
        let mut config = Self::default();

        // --- Thermus aquaticus (Yellowstone hot springs) ---
        config.thermus_aquaticus.optimal_temp = 70.0;
        config.thermus_aquaticus.max_temp = 80.0;
        config.thermus_aquaticus.base_color = [0.8, 0.6, 0.2]; // Amber
        config.thermus_aquaticus.base_size = 1.2;
        config.thermus_aquaticus.energy_efficiency = 0.9;
        config.thermus_aquaticus.division_threshold = 60.0;
        config.thermus_aquaticus.max_divisions = 4;

        // --- Pyrococcus furiosus (hyperthermophile) ---
        config.pyrococcus_furiosus.optimal_temp = 100.0;
        config.pyrococcus_furiosus.max_temp = 105.0;
        config.pyrococcus_furiosus.base_color = [0.8, 0.2, 0.2]; // Red
        config.pyrococcus_furiosus.base_size = 1.0;
        config.pyrococcus_furiosus.energy_efficiency = 0.95;
        config.pyrococcus_furiosus.division_threshold = 85.0;
        config.pyrococcus_furiosus.max_divisions = 6;

        // --- Thermococcus litoralis (marine) ---
        config.thermococcus_litoralis.optimal_temp = 88.0;
        config.thermococcus_litoralis.max_temp = 98.0;
        config.thermococcus_litoralis.base_color = [0.6, 0.8, 0.2]; // Olive
        config.thermococcus_litoralis.base_size = 0.8;
        config.thermococcus_litoralis.energy_efficiency = 0.85;
        config.thermococcus_litoralis.division_threshold = 75.0;
        config.thermococcus_litoralis.max_divisions = 3;

        // --- Generic mesophile, suffers through the whole cycle ---
        config.generic.optimal_temp = 55.0;
        config.generic.max_temp = 75.0;
        config.generic.base_color = [0.2, 0.8, 0.2]; // Green
        config.generic.base_size = 1.0;
        config.generic.energy_efficiency = 0.75;
        config.generic.division_threshold = 45.0;
        config.generic.max_divisions = 2;

        config
    }

    pub fn kind(&self, kind: CellKind) -> &KindConfig {
        match kind {
            CellKind::ThermusAquaticus => &self.thermus_aquaticus,
            CellKind::PyrococcusFuriosus => &self.pyrococcus_furiosus,
            CellKind::ThermococcusLitoralis => &self.thermococcus_litoralis,
            CellKind::Generic => &self.generic,
        }
    }
}
