//! Named alternative layouts drawn from one genetic search.
//!
//! The search runs once; the final population plus the best individual form
//! a pool from which three strategies pick:
//!
//! - **Minimum weight**: lightest steel
//! - **Minimum variety**: one diameter for both layers where possible,
//!   otherwise the closest pair; cheapest among those
//! - **Balanced**: highest fitness
//!
//! The returned list is ordered by ascending total cost.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::calculations::slab::SlabDesign;
use crate::errors::CalcResult;

use super::cost::{calculate_cost, CostBreakdown, CostRates};
use super::genetic::GeneticOptimizer;
use super::{OptimizerConfig, RebarSolution};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    MinimumWeight,
    MinimumVariety,
    Balanced,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::MinimumWeight,
        Strategy::MinimumVariety,
        Strategy::Balanced,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Strategy::MinimumWeight => "Minimum weight",
            Strategy::MinimumVariety => "Minimum bar variety",
            Strategy::Balanced => "Balanced",
        }
    }
}

/// One named layout with its cost and trade-offs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeDesign {
    pub strategy: Strategy,
    pub solution: RebarSolution,
    pub cost: CostBreakdown,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

struct Candidate {
    solution: RebarSolution,
    cost: CostBreakdown,
}

fn diameter_gap(s: &RebarSolution) -> u32 {
    s.main_diameter_mm.abs_diff(s.distribution_diameter_mm)
}

/// Run one search and derive the three named alternatives.
pub fn generate_alternatives<R: Rng + ?Sized>(
    baseline: &SlabDesign,
    config: &OptimizerConfig,
    rates: &CostRates,
    rng: &mut R,
) -> CalcResult<Vec<AlternativeDesign>> {
    let optimizer = GeneticOptimizer::new(baseline, config, rates)?;
    let evolution = optimizer.run(rng)?;

    let mut pool: Vec<Candidate> = Vec::new();
    for solution in std::iter::once(evolution.best).chain(evolution.final_population) {
        if pool.iter().all(|c| !c.solution.same_layout(&solution)) {
            pool.push(Candidate {
                cost: calculate_cost(&solution, optimizer.panel(), rates),
                solution,
            });
        }
    }

    // Pool always holds at least the best individual
    let lightest = pool
        .iter()
        .min_by(|a, b| {
            a.cost
                .steel_weight_kg
                .total_cmp(&b.cost.steel_weight_kg)
                .then(a.cost.total_cost.total_cmp(&b.cost.total_cost))
        })
        .unwrap_or(&pool[0]);
    let smallest_gap = pool.iter().map(|c| diameter_gap(&c.solution)).min().unwrap_or(0);
    let simplest = pool
        .iter()
        .filter(|c| diameter_gap(&c.solution) == smallest_gap)
        .min_by(|a, b| a.cost.total_cost.total_cmp(&b.cost.total_cost))
        .unwrap_or(&pool[0]);
    let balanced = &pool[0];

    let mut alternatives = vec![
        describe(Strategy::MinimumWeight, lightest, lightest, balanced),
        describe(Strategy::MinimumVariety, simplest, lightest, balanced),
        describe(Strategy::Balanced, balanced, lightest, balanced),
    ];
    alternatives.sort_by(|a, b| a.cost.total_cost.total_cmp(&b.cost.total_cost));
    Ok(alternatives)
}

fn describe(
    strategy: Strategy,
    chosen: &Candidate,
    lightest: &Candidate,
    balanced: &Candidate,
) -> AlternativeDesign {
    let s = &chosen.solution;
    let cost = &chosen.cost;
    let mut pros = Vec::new();
    let mut cons = Vec::new();

    match strategy {
        Strategy::MinimumWeight => {
            pros.push(format!("Lightest layout found: {:.0} kg of steel", cost.steel_weight_kg));
            pros.push("Lowest steel material cost".to_string());
            if cost.bar_count > balanced.cost.bar_count {
                cons.push(format!(
                    "{} more bars to cut and fix than the balanced layout",
                    cost.bar_count - balanced.cost.bar_count
                ));
            }
            if diameter_gap(s) > 0 {
                cons.push("Two bar sizes to stock and schedule".to_string());
            }
        }
        Strategy::MinimumVariety => {
            if diameter_gap(s) == 0 {
                pros.push(format!("Single bar size (Ø{}) for both layers", s.main_diameter_mm));
            } else {
                pros.push(format!(
                    "Closest bar sizes available (Ø{} / Ø{})",
                    s.main_diameter_mm, s.distribution_diameter_mm
                ));
            }
            pros.push("Simpler procurement and fewer placement errors".to_string());
            let extra = cost.steel_weight_kg - lightest.cost.steel_weight_kg;
            if extra > 0.0 {
                cons.push(format!("{:.0} kg heavier than the minimum-weight layout", extra));
            }
        }
        Strategy::Balanced => {
            pros.push("Highest combined cost and constructability score".to_string());
            if s.main_spacing_mm % 50.0 == 0.0 && s.distribution_spacing_mm % 50.0 == 0.0 {
                pros.push("Spacings on a 50 mm module".to_string());
            }
            let extra = cost.steel_weight_kg - lightest.cost.steel_weight_kg;
            if extra > 0.0 {
                cons.push(format!("{:.0} kg heavier than the minimum-weight layout", extra));
            }
        }
    }

    AlternativeDesign {
        strategy,
        solution: *s,
        cost: *cost,
        pros,
        cons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::slab::{design, SlabInput};
    use crate::optimization::genetic::is_valid_solution;
    use crate::optimization::SearchSpace;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run() -> (SlabDesign, OptimizerConfig, Vec<AlternativeDesign>) {
        let baseline = design(&SlabInput::new("S-1", 10000.0, 15000.0, 150.0, 3.0)).unwrap();
        let config = OptimizerConfig {
            population_size: 24,
            generations: 10,
            ..Default::default()
        };
        let alternatives = generate_alternatives(
            &baseline,
            &config,
            &CostRates::default(),
            &mut StdRng::seed_from_u64(3),
        )
        .unwrap();
        (baseline, config, alternatives)
    }

    #[test]
    fn test_three_strategies_sorted_by_cost() {
        let (_, _, alternatives) = run();
        assert_eq!(alternatives.len(), 3);
        for strategy in Strategy::ALL {
            assert!(alternatives.iter().any(|a| a.strategy == strategy));
        }
        assert!(alternatives.windows(2).all(|w| w[0].cost.total_cost <= w[1].cost.total_cost));
    }

    #[test]
    fn test_minimum_weight_is_lightest() {
        let (_, _, alternatives) = run();
        let lightest = alternatives
            .iter()
            .find(|a| a.strategy == Strategy::MinimumWeight)
            .map(|a| a.cost.steel_weight_kg)
            .unwrap();
        assert!(alternatives.iter().all(|a| a.cost.steel_weight_kg >= lightest));
    }

    #[test]
    fn test_alternatives_are_admissible() {
        let (baseline, config, alternatives) = run();
        let space = SearchSpace::new(&baseline, &config).unwrap();
        for a in &alternatives {
            assert!(is_valid_solution(&a.solution, &space));
            assert!(!a.pros.is_empty());
        }
    }
}
