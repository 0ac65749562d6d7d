//! Cost model shared by the optimizer and the baseline comparison.
//!
//! ```text
//! weight = Σ count × length × d²/162        (kg)
//! total  = weight × steel price + bars × labour rate per bar
//! material = share × total, labour = (1 − share) × total
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::slab::SlabDesign;
use crate::materials::bar_unit_weight_kg_per_m;
use crate::rebar::bar_count;

use super::{PanelGeometry, RebarSolution};

/// Unit prices used to cost a layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostRates {
    /// Steel price per kilogram
    pub steel_price_per_kg: f64,
    /// Cutting, bending and fixing cost per bar
    pub labor_per_bar: f64,
    /// Share of total cost attributed to material
    pub material_share: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        CostRates {
            steel_price_per_kg: 60.0,
            labor_per_bar: 15.0,
            material_share: 0.8,
        }
    }
}

/// Weight and cost of a layout over a whole panel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub steel_weight_kg: f64,
    pub bar_count: u32,
    pub material_cost: f64,
    pub labor_cost: f64,
    pub total_cost: f64,
}

/// One layer: `count` bars of `length_mm` at `diameter_mm`.
fn layer_weight_kg(diameter_mm: u32, count: u32, length_mm: f64) -> f64 {
    f64::from(count) * (length_mm / 1000.0) * bar_unit_weight_kg_per_m(diameter_mm)
}

fn breakdown(steel_weight_kg: f64, bars: u32, rates: &CostRates) -> CostBreakdown {
    let total = steel_weight_kg * rates.steel_price_per_kg + f64::from(bars) * rates.labor_per_bar;
    CostBreakdown {
        steel_weight_kg,
        bar_count: bars,
        material_cost: rates.material_share * total,
        labor_cost: (1.0 - rates.material_share) * total,
        total_cost: total,
    }
}

/// Cost a candidate layout on a panel.
///
/// Main bars run along the long span and are counted across the short
/// span; distribution bars the other way round.
pub fn calculate_cost(
    solution: &RebarSolution,
    panel: &PanelGeometry,
    rates: &CostRates,
) -> CostBreakdown {
    let main_count = bar_count(panel.short_span_mm, solution.main_spacing_mm);
    let distribution_count = bar_count(panel.long_span_mm, solution.distribution_spacing_mm);
    let main_weight = layer_weight_kg(solution.main_diameter_mm, main_count, panel.long_span_mm);
    let distribution_weight = layer_weight_kg(
        solution.distribution_diameter_mm,
        distribution_count,
        panel.short_span_mm,
    );
    let weight = main_weight + distribution_weight;
    breakdown(weight, main_count + distribution_count, rates)
}

/// Cost the bars a finished design actually specifies.
pub fn cost_of_design(design: &SlabDesign, rates: &CostRates) -> CostBreakdown {
    let main = &design.main_bars;
    let distribution = &design.distribution_bars;
    let weight = layer_weight_kg(main.choice.diameter_mm, main.count, main.bar_length_mm)
        + layer_weight_kg(
            distribution.choice.diameter_mm,
            distribution.count,
            distribution.bar_length_mm,
        );
    breakdown(weight, main.count + distribution.count, rates)
}
