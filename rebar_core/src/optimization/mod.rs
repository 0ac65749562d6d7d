//! # Layout Optimization
//!
//! Searches bar diameter/spacing combinations for a cheaper, more
//! constructible slab layout than the code-minimum baseline.
//!
//! ## Modules
//!
//! - [`cost`] - steel weight, bar count and cost model
//! - [`genetic`] - genetic algorithm over [`RebarSolution`]s
//! - [`alternatives`] - named strategies (minimum weight, minimum variety, balanced)
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::calculations::slab::{design, SlabInput};
//! use rebar_core::optimization::{genetic::optimize_seeded, cost::CostRates, OptimizerConfig};
//!
//! let baseline = design(&SlabInput::new("S-1", 10000.0, 15000.0, 150.0, 3.0)).unwrap();
//! let config = OptimizerConfig { population_size: 20, generations: 10, ..Default::default() };
//! let result = optimize_seeded(&baseline, &config, &CostRates::default(), 7).unwrap();
//!
//! assert!(result.best.main_spacing_mm >= 100.0);
//! println!("saves {:.1}%", result.cost_savings_percent);
//! ```

pub mod alternatives;
pub mod cost;
pub mod genetic;

use serde::{Deserialize, Serialize};

use crate::calculations::slab::SlabDesign;
use crate::design::BarRole;
use crate::errors::{CalcError, CalcResult};
use crate::rebar::{provided_area_per_metre, spacing_cap};

pub use alternatives::{generate_alternatives, AlternativeDesign, Strategy};
pub use cost::{calculate_cost, cost_of_design, CostBreakdown, CostRates};
pub use genetic::{
    is_valid_solution, optimize, optimize_seeded, optimize_with_config, Evaluation,
    GeneticOptimizer,
};

/// Inclusive integer spacing band (mm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingRange {
    pub min_mm: u32,
    pub max_mm: u32,
}

impl SpacingRange {
    pub fn new(min_mm: u32, max_mm: u32) -> Self {
        SpacingRange { min_mm, max_mm }
    }

    /// True when `spacing_mm` lies inside the band
    pub fn contains(&self, spacing_mm: f64) -> bool {
        spacing_mm >= f64::from(self.min_mm) && spacing_mm <= f64::from(self.max_mm)
    }

    /// Band narrowed so it never exceeds `cap_mm`
    pub fn capped(&self, cap_mm: f64) -> SpacingRange {
        SpacingRange {
            min_mm: self.min_mm,
            max_mm: self.max_mm.min(cap_mm.floor() as u32),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_mm > self.max_mm
    }
}

/// Genetic algorithm settings.
///
/// ## JSON Example
///
/// ```json
/// {
///   "population_size": 50,
///   "generations": 100,
///   "mutation_rate": 0.1,
///   "seed": 42
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Individuals per generation
    pub population_size: usize,
    /// Fixed number of generations; there is no early stopping
    pub generations: usize,
    /// Contestants drawn (with replacement) per tournament
    pub tournament_size: usize,
    /// Probability that an offspring is mutated
    pub mutation_rate: f64,
    /// Share of the population copied unchanged into the next generation
    pub elite_fraction: f64,
    /// Diameters the search may use (mm), ascending
    pub candidate_diameters_mm: Vec<u32>,
    /// Legal main bar spacing
    pub main_spacing: SpacingRange,
    /// Legal distribution bar spacing
    pub distribution_spacing: SpacingRange,
    /// Fraction of the baseline's required steel a solution must provide
    pub steel_tolerance: f64,
    /// Offspring attempts before a tournament winner is carried over instead
    pub max_offspring_attempts: usize,
    /// Seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        OptimizerConfig {
            population_size: 50,
            generations: 100,
            tournament_size: 5,
            mutation_rate: 0.1,
            elite_fraction: 0.10,
            candidate_diameters_mm: vec![8, 10, 12, 16, 20, 25],
            main_spacing: SpacingRange::new(100, 300),
            distribution_spacing: SpacingRange::new(150, 450),
            steel_tolerance: 0.95,
            max_offspring_attempts: 100,
            seed: None,
        }
    }
}

impl OptimizerConfig {
    /// Validate settings.
    pub fn validate(&self) -> CalcResult<()> {
        if self.population_size < 2 {
            return Err(CalcError::invalid_input(
                "population_size",
                self.population_size.to_string(),
                "Population needs at least 2 individuals",
            ));
        }
        if self.tournament_size == 0 {
            return Err(CalcError::invalid_input(
                "tournament_size",
                "0",
                "Tournament size must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(CalcError::invalid_input(
                "mutation_rate",
                self.mutation_rate.to_string(),
                "Mutation rate must be between 0 and 1",
            ));
        }
        if !(0.0..1.0).contains(&self.elite_fraction) {
            return Err(CalcError::invalid_input(
                "elite_fraction",
                self.elite_fraction.to_string(),
                "Elite fraction must be at least 0 and below 1",
            ));
        }
        if self.candidate_diameters_mm.is_empty() {
            return Err(CalcError::missing_field("candidate_diameters_mm"));
        }
        if self.candidate_diameters_mm.contains(&0) {
            return Err(CalcError::invalid_input(
                "candidate_diameters_mm",
                format!("{:?}", self.candidate_diameters_mm),
                "Bar diameters must be positive",
            ));
        }
        let bands = [
            ("main_spacing", self.main_spacing),
            ("distribution_spacing", self.distribution_spacing),
        ];
        for (field, band) in bands {
            if band.min_mm == 0 || band.is_empty() {
                return Err(CalcError::invalid_input(
                    field,
                    format!("[{}, {}]", band.min_mm, band.max_mm),
                    "Spacing band must be positive and not inverted",
                ));
            }
        }
        if self.steel_tolerance <= 0.0 || self.steel_tolerance > 1.0 {
            return Err(CalcError::invalid_input(
                "steel_tolerance",
                self.steel_tolerance.to_string(),
                "Steel tolerance must be in (0, 1]",
            ));
        }
        if self.max_offspring_attempts == 0 {
            return Err(CalcError::invalid_input(
                "max_offspring_attempts",
                "0",
                "At least one offspring attempt is needed",
            ));
        }
        Ok(())
    }

    /// Number of elite individuals carried over each generation
    pub fn elite_count(&self) -> usize {
        let count = (self.population_size as f64 * self.elite_fraction).round() as usize;
        count.min(self.population_size)
    }
}

/// A candidate layout: diameter pair plus spacing pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RebarSolution {
    pub main_diameter_mm: u32,
    pub distribution_diameter_mm: u32,
    pub main_spacing_mm: f64,
    pub distribution_spacing_mm: f64,
    /// Higher is better; zero until evaluated
    pub fitness: f64,
}

impl RebarSolution {
    pub fn new(
        main_diameter_mm: u32,
        distribution_diameter_mm: u32,
        main_spacing_mm: f64,
        distribution_spacing_mm: f64,
    ) -> Self {
        RebarSolution {
            main_diameter_mm,
            distribution_diameter_mm,
            main_spacing_mm,
            distribution_spacing_mm,
            fitness: 0.0,
        }
    }

    /// The layout chosen by the bar selector for a finished design
    pub fn from_design(design: &SlabDesign) -> Self {
        RebarSolution::new(
            design.main_bars.choice.diameter_mm,
            design.distribution_bars.choice.diameter_mm,
            design.main_bars.choice.spacing_mm,
            design.distribution_bars.choice.spacing_mm,
        )
    }

    /// Same layout ignoring fitness
    pub fn same_layout(&self, other: &RebarSolution) -> bool {
        self.main_diameter_mm == other.main_diameter_mm
            && self.distribution_diameter_mm == other.distribution_diameter_mm
            && self.main_spacing_mm == other.main_spacing_mm
            && self.distribution_spacing_mm == other.distribution_spacing_mm
    }

    pub fn main_area_mm2_per_m(&self) -> f64 {
        provided_area_per_metre(self.main_diameter_mm, self.main_spacing_mm)
    }

    pub fn distribution_area_mm2_per_m(&self) -> f64 {
        provided_area_per_metre(self.distribution_diameter_mm, self.distribution_spacing_mm)
    }

    /// "Ø12 @ 150 / Ø10 @ 200"; recombined spacings keep their fraction ("@ 157.5")
    pub fn describe(&self) -> String {
        format!(
            "Ø{} @ {} / Ø{} @ {}",
            self.main_diameter_mm,
            self.main_spacing_mm,
            self.distribution_diameter_mm,
            self.distribution_spacing_mm
        )
    }
}

/// Panel extents that bar counts and lengths are taken from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    pub short_span_mm: f64,
    pub long_span_mm: f64,
}

impl PanelGeometry {
    pub fn from_design(design: &SlabDesign) -> Self {
        PanelGeometry {
            short_span_mm: design.analysis.short_span_mm,
            long_span_mm: design.analysis.long_span_mm,
        }
    }
}

/// Everything that decides whether a [`RebarSolution`] is admissible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSpace {
    pub candidate_diameters_mm: Vec<u32>,
    /// Main spacing band, already narrowed to the code cap
    pub main_spacing: SpacingRange,
    /// Distribution spacing band, already narrowed to the code cap
    pub distribution_spacing: SpacingRange,
    /// Baseline required main steel (mm²/m)
    pub main_required_mm2_per_m: f64,
    /// Baseline required distribution steel (mm²/m)
    pub distribution_required_mm2_per_m: f64,
    pub steel_tolerance: f64,
}

impl SearchSpace {
    /// Build the search space for a baseline design.
    pub fn new(baseline: &SlabDesign, config: &OptimizerConfig) -> CalcResult<Self> {
        let thickness = baseline.input.thickness_mm;
        let space = SearchSpace {
            candidate_diameters_mm: config.candidate_diameters_mm.clone(),
            main_spacing: config.main_spacing.capped(spacing_cap(BarRole::Main, thickness)),
            distribution_spacing: config
                .distribution_spacing
                .capped(spacing_cap(BarRole::Distribution, thickness)),
            main_required_mm2_per_m: baseline.analysis.main_steel_required_mm2_per_m,
            distribution_required_mm2_per_m: baseline
                .analysis
                .distribution_steel_required_mm2_per_m,
            steel_tolerance: config.steel_tolerance,
        };
        if space.main_spacing.is_empty() || space.distribution_spacing.is_empty() {
            return Err(CalcError::calculation_failed(
                "Optimization",
                format!(
                    "Spacing bands are empty after applying code caps for a {:.0} mm slab",
                    thickness
                ),
            ));
        }
        Ok(space)
    }

    /// Area a role must provide (mm²/m)
    pub fn target_area(&self, role: BarRole) -> f64 {
        let required = match role {
            BarRole::Main => self.main_required_mm2_per_m,
            BarRole::Distribution => self.distribution_required_mm2_per_m,
        };
        self.steel_tolerance * required
    }

    pub fn band(&self, role: BarRole) -> SpacingRange {
        match role {
            BarRole::Main => self.main_spacing,
            BarRole::Distribution => self.distribution_spacing,
        }
    }
}

/// Baseline against optimized comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Layout chosen by the bar selector
    pub baseline: RebarSolution,
    /// Fittest layout seen over the whole run
    pub best: RebarSolution,
    pub baseline_cost: CostBreakdown,
    pub optimized_cost: CostBreakdown,
    /// Positive when the optimized layout is cheaper
    pub cost_savings_percent: f64,
    pub material_savings_percent: f64,
    pub labor_savings_percent: f64,
    /// Best fitness after each generation, initial population first
    pub fitness_history: Vec<f64>,
}

/// Percentage saved going from `before` to `after`; zero when `before` is zero
pub(crate) fn savings_percent(before: f64, after: f64) -> f64 {
    if before > 0.0 {
        100.0 * (before - after) / before
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::slab::{design, SlabInput};

    #[test]
    fn test_default_config_is_valid() {
        let config = OptimizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.elite_count(), 5);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let mut config = OptimizerConfig::default();
        config.mutation_rate = 1.5;
        assert!(config.validate().is_err());

        let mut config = OptimizerConfig::default();
        config.main_spacing = SpacingRange::new(300, 100);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_json() {
        let config: OptimizerConfig =
            serde_json::from_str(r#"{"generations": 5, "seed": 3}"#).unwrap();
        assert_eq!(config.generations, 5);
        assert_eq!(config.population_size, 50);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_search_space_caps_bands() {
        let baseline = design(&SlabInput::new("Thin", 3000.0, 4000.0, 80.0, 2.0)).unwrap();
        let space = SearchSpace::new(&baseline, &OptimizerConfig::default()).unwrap();
        // 3 × 80 = 240, 5 × 80 = 400
        assert_eq!(space.main_spacing, SpacingRange::new(100, 240));
        assert_eq!(space.distribution_spacing, SpacingRange::new(150, 400));
    }

    #[test]
    fn test_solution_from_design() {
        let baseline = design(&SlabInput::new("S-1", 10000.0, 15000.0, 150.0, 3.0)).unwrap();
        let s = RebarSolution::from_design(&baseline);
        assert_eq!(s.main_diameter_mm, 12);
        assert_eq!(s.distribution_spacing_mm, 200.0);
        assert_eq!(s.describe(), "Ø12 @ 150 / Ø10 @ 200");
    }

    #[test]
    fn test_savings_percent() {
        assert_eq!(savings_percent(200.0, 150.0), 25.0);
        assert_eq!(savings_percent(0.0, 10.0), 0.0);
        assert!(savings_percent(100.0, 120.0) < 0.0);
    }
}
