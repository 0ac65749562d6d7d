//! # Genetic Algorithm
//!
//! Maximizes layout fitness over [`RebarSolution`]s:
//!
//! ```text
//! fitness = 1000 / material cost + 500 / labour cost + 100 × variety + 50 × regularity
//! ```
//!
//! - **variety** is 1 when main and distribution bars share a diameter
//! - **regularity** is the share of the two spacings that are multiples of 50 mm
//!
//! ## Generation Loop
//!
//! 1. Initial population sampled from the admissible region only
//! 2. Sort by fitness; the top `elite_fraction` carries over unchanged
//! 3. Remaining slots: two tournament winners, coin-flip diameters, mean
//!    spacing (real-valued), then one gene mutated with probability
//!    `mutation_rate`; a mutated diameter always changes
//! 4. Offspring that break the steel or spacing constraints are discarded and
//!    bred again; after `max_offspring_attempts` a tournament winner is
//!    carried over instead
//! 5. Repeat for the fixed generation count; the best individual ever seen
//!    is tracked across all generations
//!
//! Randomness comes only from the caller's [`Rng`], so a seeded generator
//! reproduces a run exactly.

use log::{debug, info};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::calculations::slab::SlabDesign;
use crate::design::BarRole;
use crate::errors::{CalcError, CalcResult};
use crate::materials::bar_area_mm2;

use super::cost::{calculate_cost, cost_of_design, CostBreakdown, CostRates};
use super::{
    savings_percent, OptimizationResult, OptimizerConfig, PanelGeometry, RebarSolution,
    SearchSpace,
};

/// Fitness weight on inverse material cost
const MATERIAL_WEIGHT: f64 = 1000.0;
/// Fitness weight on inverse labour cost
const LABOR_WEIGHT: f64 = 500.0;
/// Fitness bonus for a single diameter across both layers
const VARIETY_WEIGHT: f64 = 100.0;
/// Fitness bonus for 50 mm multiples
const REGULARITY_WEIGHT: f64 = 50.0;
/// Spacings that are multiples of this count as regular (mm)
const REGULAR_SPACING_MM: f64 = 50.0;

/// Main spacing mutation step (mm)
const MAIN_SPACING_STEP_MM: f64 = 20.0;
/// Distribution spacing mutation step (mm)
const DISTRIBUTION_SPACING_STEP_MM: f64 = 30.0;

/// A solution is admissible when both layers provide at least the tolerated
/// share of the baseline's required steel and both spacings are in band.
pub fn is_valid_solution(solution: &RebarSolution, space: &SearchSpace) -> bool {
    solution.main_area_mm2_per_m() >= space.target_area(BarRole::Main)
        && solution.distribution_area_mm2_per_m() >= space.target_area(BarRole::Distribution)
        && space.main_spacing.contains(solution.main_spacing_mm)
        && space.distribution_spacing.contains(solution.distribution_spacing_mm)
}

/// Cost and fitness of one solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub cost: CostBreakdown,
    pub variety_bonus: f64,
    pub regularity_bonus: f64,
    pub fitness: f64,
}

/// Final state of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evolution {
    /// Fittest individual seen in any generation
    pub best: RebarSolution,
    /// Last generation, sorted fittest first
    pub final_population: Vec<RebarSolution>,
    /// Best-so-far fitness: initial population, then after each generation
    pub fitness_history: Vec<f64>,
}

fn inverse(value: f64) -> f64 {
    if value > 0.0 {
        1.0 / value
    } else {
        0.0
    }
}

fn sort_by_fitness(population: &mut [RebarSolution]) {
    population.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
}

/// Genetic search bound to one baseline design.
#[derive(Debug, Clone)]
pub struct GeneticOptimizer<'a> {
    config: &'a OptimizerConfig,
    rates: &'a CostRates,
    space: SearchSpace,
    panel: PanelGeometry,
}

impl<'a> GeneticOptimizer<'a> {
    /// Prepare a search for `baseline`.
    ///
    /// Fails with `CalculationFailed` when no candidate diameter can deliver
    /// the required steel inside a spacing band.
    pub fn new(
        baseline: &SlabDesign,
        config: &'a OptimizerConfig,
        rates: &'a CostRates,
    ) -> CalcResult<Self> {
        config.validate()?;
        let optimizer = GeneticOptimizer {
            config,
            rates,
            space: SearchSpace::new(baseline, config)?,
            panel: PanelGeometry::from_design(baseline),
        };
        for role in [BarRole::Main, BarRole::Distribution] {
            if optimizer.feasible_spacings(role).is_empty() {
                return Err(CalcError::calculation_failed(
                    "Optimization",
                    format!(
                        "No candidate diameter provides {:.0} mm²/m of {} steel within [{}, {}] mm",
                        optimizer.space.target_area(role),
                        role.display_name().to_lowercase(),
                        optimizer.space.band(role).min_mm,
                        optimizer.space.band(role).max_mm
                    ),
                ));
            }
        }
        Ok(optimizer)
    }

    pub fn search_space(&self) -> &SearchSpace {
        &self.space
    }

    pub fn panel(&self) -> &PanelGeometry {
        &self.panel
    }

    /// Cost breakdown, bonuses and fitness of a solution.
    pub fn evaluate_solution(&self, solution: &RebarSolution) -> Evaluation {
        let cost = calculate_cost(solution, &self.panel, self.rates);
        let variety_bonus = if solution.main_diameter_mm == solution.distribution_diameter_mm {
            1.0
        } else {
            0.0
        };
        let regular = [solution.main_spacing_mm, solution.distribution_spacing_mm]
            .iter()
            .filter(|s| *s % REGULAR_SPACING_MM == 0.0)
            .count();
        let regularity_bonus = regular as f64 / 2.0;

        let fitness = MATERIAL_WEIGHT * inverse(cost.material_cost)
            + LABOR_WEIGHT * inverse(cost.labor_cost)
            + VARIETY_WEIGHT * variety_bonus
            + REGULARITY_WEIGHT * regularity_bonus;

        Evaluation {
            cost,
            variety_bonus,
            regularity_bonus,
            fitness,
        }
    }

    fn evaluated(&self, mut solution: RebarSolution) -> RebarSolution {
        solution.fitness = self.evaluate_solution(&solution).fitness;
        solution
    }

    /// For each candidate diameter that can satisfy `role`, the widest
    /// admissible integer spacing.
    fn feasible_spacings(&self, role: BarRole) -> Vec<(u32, u32)> {
        let band = self.space.band(role);
        let target = self.space.target_area(role);
        self.space
            .candidate_diameters_mm
            .iter()
            .filter_map(|&diameter| {
                let widest = (1000.0 * bar_area_mm2(diameter) / target - 1e-9).floor();
                let widest = if widest.is_finite() {
                    widest.min(f64::from(band.max_mm)) as u32
                } else {
                    band.max_mm
                };
                (widest >= band.min_mm).then_some((diameter, widest))
            })
            .collect()
    }

    /// Draw one layer uniformly from its admissible (diameter, spacing) pairs.
    fn sample_layer<R: Rng + ?Sized>(&self, role: BarRole, rng: &mut R) -> CalcResult<(u32, f64)> {
        let options = self.feasible_spacings(role);
        let min = self.space.band(role).min_mm;
        let weights: Vec<u32> = options.iter().map(|&(_, widest)| widest - min + 1).collect();
        let index = WeightedIndex::new(&weights).map_err(|e| CalcError::Internal {
            message: format!("Sampling weights for {} bars: {}", role.display_name(), e),
        })?;
        let (diameter, widest) = options[index.sample(rng)];
        Ok((diameter, f64::from(rng.gen_range(min..=widest))))
    }

    /// A random admissible solution, already evaluated.
    pub fn random_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> CalcResult<RebarSolution> {
        let (main_diameter, main_spacing) = self.sample_layer(BarRole::Main, rng)?;
        let (distribution_diameter, distribution_spacing) =
            self.sample_layer(BarRole::Distribution, rng)?;
        let solution = RebarSolution::new(
            main_diameter,
            distribution_diameter,
            main_spacing,
            distribution_spacing,
        );
        if !is_valid_solution(&solution, &self.space) {
            return Err(CalcError::Internal {
                message: format!("Sampled layout {} is not admissible", solution.describe()),
            });
        }
        Ok(self.evaluated(solution))
    }

    fn tournament<'p, R: Rng + ?Sized>(
        &self,
        population: &'p [RebarSolution],
        rng: &mut R,
    ) -> &'p RebarSolution {
        let mut winner = &population[rng.gen_range(0..population.len())];
        for _ in 1..self.config.tournament_size {
            let contestant = &population[rng.gen_range(0..population.len())];
            if contestant.fitness > winner.fitness {
                winner = contestant;
            }
        }
        winner
    }

    fn crossover<R: Rng + ?Sized>(
        &self,
        a: &RebarSolution,
        b: &RebarSolution,
        rng: &mut R,
    ) -> RebarSolution {
        let main_diameter = if rng.gen_bool(0.5) {
            a.main_diameter_mm
        } else {
            b.main_diameter_mm
        };
        let distribution_diameter = if rng.gen_bool(0.5) {
            a.distribution_diameter_mm
        } else {
            b.distribution_diameter_mm
        };
        RebarSolution::new(
            main_diameter,
            distribution_diameter,
            (a.main_spacing_mm + b.main_spacing_mm) / 2.0,
            (a.distribution_spacing_mm + b.distribution_spacing_mm) / 2.0,
        )
    }

    fn mutate<R: Rng + ?Sized>(&self, solution: &mut RebarSolution, rng: &mut R) {
        let step = |size: f64, rng: &mut R| if rng.gen_bool(0.5) { size } else { -size };
        // A single-diameter candidate set leaves only the spacing gene to move
        match rng.gen_range(0..4) {
            0 => match self.other_diameter(solution.main_diameter_mm, rng) {
                Some(d) => solution.main_diameter_mm = d,
                None => solution.main_spacing_mm += step(MAIN_SPACING_STEP_MM, rng),
            },
            1 => match self.other_diameter(solution.distribution_diameter_mm, rng) {
                Some(d) => solution.distribution_diameter_mm = d,
                None => solution.distribution_spacing_mm += step(DISTRIBUTION_SPACING_STEP_MM, rng),
            },
            2 => solution.main_spacing_mm += step(MAIN_SPACING_STEP_MM, rng),
            _ => solution.distribution_spacing_mm += step(DISTRIBUTION_SPACING_STEP_MM, rng),
        }
    }

    /// A candidate diameter different from `current`, if any.
    fn other_diameter<R: Rng + ?Sized>(&self, current: u32, rng: &mut R) -> Option<u32> {
        let others: Vec<u32> = self
            .space
            .candidate_diameters_mm
            .iter()
            .copied()
            .filter(|&d| d != current)
            .collect();
        others.choose(rng).copied()
    }

    fn offspring<R: Rng + ?Sized>(
        &self,
        population: &[RebarSolution],
        rng: &mut R,
    ) -> RebarSolution {
        for _ in 0..self.config.max_offspring_attempts {
            let first = self.tournament(population, rng);
            let second = self.tournament(population, rng);
            let mut child = self.crossover(first, second, rng);
            if rng.gen_bool(self.config.mutation_rate) {
                self.mutate(&mut child, rng);
            }
            if is_valid_solution(&child, &self.space) {
                return self.evaluated(child);
            }
        }
        debug!("Offspring attempts exhausted; carrying a tournament winner over");
        *self.tournament(population, rng)
    }

    /// Breed the next generation from a population sorted fittest first:
    /// elites unchanged, the rest offspring, result sorted.
    fn next_generation<R: Rng + ?Sized>(
        &self,
        population: &[RebarSolution],
        rng: &mut R,
    ) -> Vec<RebarSolution> {
        let size = self.config.population_size;
        let mut next = Vec::with_capacity(size);
        next.extend_from_slice(&population[..self.config.elite_count().min(population.len())]);
        while next.len() < size {
            next.push(self.offspring(population, rng));
        }
        sort_by_fitness(&mut next);
        next
    }

    /// Run the full generation loop.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> CalcResult<Evolution> {
        let size = self.config.population_size;

        let mut population = (0..size)
            .map(|_| self.random_solution(rng))
            .collect::<CalcResult<Vec<_>>>()?;
        sort_by_fitness(&mut population);

        let mut best = population[0];
        let mut fitness_history = Vec::with_capacity(self.config.generations + 1);
        fitness_history.push(best.fitness);

        for generation in 0..self.config.generations {
            population = self.next_generation(&population, rng);

            if population[0].fitness > best.fitness {
                best = population[0];
            }
            fitness_history.push(best.fitness);
            debug!(
                "Generation {}: best {:.4} ({}), generation best {:.4}",
                generation + 1,
                best.fitness,
                best.describe(),
                population[0].fitness
            );
        }

        Ok(Evolution {
            best,
            final_population: population,
            fitness_history,
        })
    }
}

/// Optimize a baseline slab design with the caller's random source.
pub fn optimize<R: Rng + ?Sized>(
    baseline: &SlabDesign,
    config: &OptimizerConfig,
    rates: &CostRates,
    rng: &mut R,
) -> CalcResult<OptimizationResult> {
    info!(
        "{}: optimizing {} individuals over {} generations",
        baseline.input.label, config.population_size, config.generations
    );
    let optimizer = GeneticOptimizer::new(baseline, config, rates)?;
    let evolution = optimizer.run(rng)?;

    let baseline_solution = optimizer.evaluated(RebarSolution::from_design(baseline));
    let baseline_cost = cost_of_design(baseline, rates);
    let optimized_cost = calculate_cost(&evolution.best, optimizer.panel(), rates);

    let result = OptimizationResult {
        baseline: baseline_solution,
        best: evolution.best,
        cost_savings_percent: savings_percent(baseline_cost.total_cost, optimized_cost.total_cost),
        material_savings_percent: savings_percent(
            baseline_cost.material_cost,
            optimized_cost.material_cost,
        ),
        labor_savings_percent: savings_percent(baseline_cost.labor_cost, optimized_cost.labor_cost),
        baseline_cost,
        optimized_cost,
        fitness_history: evolution.fitness_history,
    };
    info!(
        "{}: {} → {} ({:+.1}% cost)",
        baseline.input.label,
        result.baseline.describe(),
        result.best.describe(),
        -result.cost_savings_percent
    );
    Ok(result)
}

/// Optimize with a generator seeded from `seed`.
pub fn optimize_seeded(
    baseline: &SlabDesign,
    config: &OptimizerConfig,
    rates: &CostRates,
    seed: u64,
) -> CalcResult<OptimizationResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    optimize(baseline, config, rates, &mut rng)
}

/// Optimize using `config.seed` when set, otherwise fresh entropy.
pub fn optimize_with_config(
    baseline: &SlabDesign,
    config: &OptimizerConfig,
    rates: &CostRates,
) -> CalcResult<OptimizationResult> {
    match config.seed {
        Some(seed) => optimize_seeded(baseline, config, rates, seed),
        None => optimize(baseline, config, rates, &mut StdRng::from_entropy()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::slab::{design, SlabInput};

    fn baseline() -> SlabDesign {
        design(&SlabInput::new("S-1", 10000.0, 15000.0, 150.0, 3.0)).unwrap()
    }

    fn small_config() -> OptimizerConfig {
        OptimizerConfig {
            population_size: 20,
            generations: 15,
            ..Default::default()
        }
    }

    #[test]
    fn test_baseline_layout_is_admissible() {
        let config = OptimizerConfig::default();
        let rates = CostRates::default();
        let optimizer = GeneticOptimizer::new(&baseline(), &config, &rates).unwrap();
        let layout = RebarSolution::from_design(&baseline());
        assert!(is_valid_solution(&layout, optimizer.search_space()));
    }

    #[test]
    fn test_out_of_band_spacing_is_invalid() {
        let config = OptimizerConfig::default();
        let rates = CostRates::default();
        let optimizer = GeneticOptimizer::new(&baseline(), &config, &rates).unwrap();
        let layout = RebarSolution::new(12, 10, 90.0, 200.0);
        assert!(!is_valid_solution(&layout, optimizer.search_space()));
        let thin = RebarSolution::new(8, 10, 300.0, 200.0);
        assert!(!is_valid_solution(&thin, optimizer.search_space()));
    }

    #[test]
    fn test_random_solutions_are_valid() {
        let config = OptimizerConfig::default();
        let rates = CostRates::default();
        let optimizer = GeneticOptimizer::new(&baseline(), &config, &rates).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let s = optimizer.random_solution(&mut rng).unwrap();
            assert!(is_valid_solution(&s, optimizer.search_space()));
            assert!(s.fitness > 0.0);
        }
    }

    #[test]
    fn test_evaluate_rewards_uniform_regular_layouts() {
        let config = OptimizerConfig::default();
        let rates = CostRates::default();
        let optimizer = GeneticOptimizer::new(&baseline(), &config, &rates).unwrap();

        let uniform = optimizer.evaluate_solution(&RebarSolution::new(12, 12, 150.0, 250.0));
        assert_eq!(uniform.variety_bonus, 1.0);
        assert_eq!(uniform.regularity_bonus, 1.0);

        let mixed = optimizer.evaluate_solution(&RebarSolution::new(12, 10, 150.0, 210.0));
        assert_eq!(mixed.variety_bonus, 0.0);
        assert_eq!(mixed.regularity_bonus, 0.5);
        assert!(uniform.fitness > mixed.fitness);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = small_config();
        let rates = CostRates::default();
        let a = optimize_seeded(&baseline(), &config, &rates, 42).unwrap();
        let b = optimize_seeded(&baseline(), &config, &rates, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_best_fitness_never_decreases() {
        let config = small_config();
        let rates = CostRates::default();
        let result = optimize_seeded(&baseline(), &config, &rates, 5).unwrap();
        assert_eq!(result.fitness_history.len(), config.generations + 1);
        assert!(result.fitness_history.windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(result.fitness_history.last().copied(), Some(result.best.fitness));
    }

    #[test]
    fn test_final_population_is_valid() {
        let config = small_config();
        let rates = CostRates::default();
        let optimizer = GeneticOptimizer::new(&baseline(), &config, &rates).unwrap();
        let evolution = optimizer.run(&mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(evolution.final_population.len(), config.population_size);
        for s in &evolution.final_population {
            assert!(is_valid_solution(s, optimizer.search_space()));
        }
        assert!(evolution.best.fitness >= evolution.final_population[0].fitness);
    }

    fn parent(main_d: u32, dist_d: u32, main_s: f64, dist_s: f64, fitness: f64) -> RebarSolution {
        RebarSolution {
            fitness,
            ..RebarSolution::new(main_d, dist_d, main_s, dist_s)
        }
    }

    #[test]
    fn test_crossover_takes_mean_spacing() {
        let config = OptimizerConfig::default();
        let rates = CostRates::default();
        let optimizer = GeneticOptimizer::new(&baseline(), &config, &rates).unwrap();
        let a = parent(12, 10, 155.0, 201.0, 1.0);
        let b = parent(16, 8, 160.0, 210.0, 1.0);

        let child = optimizer.crossover(&a, &b, &mut StdRng::seed_from_u64(3));
        assert_eq!(child.main_spacing_mm, 157.5);
        assert_eq!(child.distribution_spacing_mm, 205.5);
        assert_eq!(child.fitness, 0.0);
    }

    #[test]
    fn test_crossover_diameters_by_coin_flip() {
        let config = OptimizerConfig::default();
        let rates = CostRates::default();
        let optimizer = GeneticOptimizer::new(&baseline(), &config, &rates).unwrap();
        let a = parent(12, 10, 150.0, 200.0, 1.0);
        let b = parent(16, 8, 150.0, 200.0, 1.0);
        let mut rng = StdRng::seed_from_u64(17);

        let mut main_from_a = 0;
        let mut dist_from_a = 0;
        for _ in 0..1000 {
            let child = optimizer.crossover(&a, &b, &mut rng);
            assert!(child.main_diameter_mm == 12 || child.main_diameter_mm == 16);
            assert!(child.distribution_diameter_mm == 10 || child.distribution_diameter_mm == 8);
            main_from_a += usize::from(child.main_diameter_mm == 12);
            dist_from_a += usize::from(child.distribution_diameter_mm == 10);
        }
        assert!((400..=600).contains(&main_from_a), "main from first parent: {}", main_from_a);
        assert!(
            (400..=600).contains(&dist_from_a),
            "distribution from first parent: {}",
            dist_from_a
        );
    }

    #[test]
    fn test_mutation_changes_exactly_one_gene() {
        let config = OptimizerConfig::default();
        let rates = CostRates::default();
        let optimizer = GeneticOptimizer::new(&baseline(), &config, &rates).unwrap();
        let original = RebarSolution::new(12, 10, 150.0, 200.0);
        let mut rng = StdRng::seed_from_u64(23);

        for _ in 0..2000 {
            let mut s = original;
            optimizer.mutate(&mut s, &mut rng);
            let changed = [
                s.main_diameter_mm != original.main_diameter_mm,
                s.distribution_diameter_mm != original.distribution_diameter_mm,
                s.main_spacing_mm != original.main_spacing_mm,
                s.distribution_spacing_mm != original.distribution_spacing_mm,
            ];
            assert_eq!(changed.iter().filter(|&&c| c).count(), 1, "{:?}", s);

            if changed[0] {
                assert!(config.candidate_diameters_mm.contains(&s.main_diameter_mm));
            }
            if changed[1] {
                assert!(config.candidate_diameters_mm.contains(&s.distribution_diameter_mm));
            }
            if changed[2] {
                assert_eq!((s.main_spacing_mm - original.main_spacing_mm).abs(), 20.0);
            }
            if changed[3] {
                let moved = (s.distribution_spacing_mm - original.distribution_spacing_mm).abs();
                assert_eq!(moved, 30.0);
            }
        }
    }

    #[test]
    fn test_single_diameter_mutation_moves_spacing() {
        let config = OptimizerConfig {
            candidate_diameters_mm: vec![12],
            ..Default::default()
        };
        let rates = CostRates::default();
        let optimizer = GeneticOptimizer::new(&baseline(), &config, &rates).unwrap();
        let original = RebarSolution::new(12, 12, 150.0, 300.0);
        let mut rng = StdRng::seed_from_u64(29);

        for _ in 0..200 {
            let mut s = original;
            optimizer.mutate(&mut s, &mut rng);
            assert_eq!(s.main_diameter_mm, 12);
            assert_eq!(s.distribution_diameter_mm, 12);
            assert!(!s.same_layout(&original));
        }
    }

    #[test]
    fn test_tournament_favours_fitter() {
        let config = OptimizerConfig::default();
        let rates = CostRates::default();
        let optimizer = GeneticOptimizer::new(&baseline(), &config, &rates).unwrap();
        let population = [parent(12, 10, 150.0, 200.0, 1.0), parent(16, 10, 150.0, 200.0, 2.0)];
        let mut rng = StdRng::seed_from_u64(31);

        // Five draws with replacement: the weaker one wins only when drawn every time (1 in 32)
        let fitter_wins = (0..1000)
            .filter(|_| optimizer.tournament(&population, &mut rng).fitness == 2.0)
            .count();
        assert!(fitter_wins > 900, "fitter won {} of 1000", fitter_wins);
        assert!(fitter_wins < 1000);
    }

    #[test]
    fn test_elites_carried_over_unchanged() {
        let config = OptimizerConfig {
            population_size: 20,
            elite_fraction: 0.10,
            ..Default::default()
        };
        let rates = CostRates::default();
        let optimizer = GeneticOptimizer::new(&baseline(), &config, &rates).unwrap();
        let mut rng = StdRng::seed_from_u64(37);

        let mut population: Vec<RebarSolution> =
            (0..20).map(|_| optimizer.random_solution(&mut rng).unwrap()).collect();
        sort_by_fitness(&mut population);

        let next = optimizer.next_generation(&population, &mut rng);
        assert_eq!(next.len(), 20);
        assert_eq!(config.elite_count(), 2);
        for elite in &population[..2] {
            assert!(next.iter().any(|s| s == elite), "elite {:?} lost", elite);
        }
        assert!(next[0].fitness >= population[0].fitness);
        assert!(next.windows(2).all(|w| w[0].fitness >= w[1].fitness));
    }

    #[test]
    fn test_unreachable_demand_fails() {
        let mut heavy = baseline();
        heavy.analysis.main_steel_required_mm2_per_m = 20_000.0;
        let config = OptimizerConfig::default();
        let rates = CostRates::default();
        let err = GeneticOptimizer::new(&heavy, &config, &rates).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_costs_reported() {
        let config = small_config();
        let rates = CostRates::default();
        let result = optimize_seeded(&baseline(), &config, &rates, 1).unwrap();
        assert_eq!(result.baseline_cost, cost_of_design(&baseline(), &rates));
        assert!(result.optimized_cost.total_cost > 0.0);
    }
}
