//! # Rebar CLI
//!
//! Command-line front end for `rebar_core`. Every subcommand reads a JSON
//! document and prints either a human-readable report or the JSON result.
//!
//! Exit codes: 0 when the design passes, 1 when it has validation errors or
//! fails a check, 2 when the input could not be read or analysed.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use rebar_core::calculations::beam::{self, BeamInput, BeamResult};
use rebar_core::calculations::column::{self, ColumnInput, ColumnResult};
use rebar_core::calculations::slab::{self, SlabInput, SlabResult};
use rebar_core::optimization::{
    generate_alternatives, optimize, AlternativeDesign, CostBreakdown, CostRates,
    OptimizationResult, OptimizerConfig,
};
use rebar_core::pattern::{
    classify_shape, reinforce_openings, Opening, OpeningReinforcement, Point2D, ShapeAnalysis,
};
use rebar_core::{CalcError, CalcResult, CalculationItem};

const EXIT_OK: i32 = 0;
const EXIT_FAILED_CHECKS: i32 = 1;
const EXIT_BAD_INPUT: i32 = 2;

#[derive(Parser)]
#[command(name = "rebar")]
#[command(about = "Reinforced concrete design and rebar layout optimization", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human", global = true)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Design a slab panel and validate it
    Slab {
        /// Slab input JSON
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Design a simply supported beam
    Beam {
        /// Beam input JSON
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Design an axially loaded column
    Column {
        /// Column input JSON
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Run one tagged item or a list of tagged items (slab, beam, column)
    Run {
        /// JSON with "type": "Slab" | "Beam" | "Column"
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Search for a cheaper slab bar layout
    Optimize {
        /// Slab input JSON
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Optimizer settings JSON; missing fields take defaults
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Cost rates JSON; missing fields take defaults
        #[arg(long, value_name = "FILE")]
        rates: Option<PathBuf>,

        /// Seed for a reproducible run (overrides the config seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Also report minimum-weight, minimum-variety and balanced layouts
        #[arg(long)]
        alternatives: bool,
    },

    /// Classify a slab outline and size opening trimmers
    Shape {
        /// JSON with "outline" points and optional "openings"
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for scripts
    Json,
}

/// Accepts a single tagged item or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum ItemDocument {
    One(CalculationItem),
    Many(Vec<CalculationItem>),
}

impl ItemDocument {
    fn into_items(self) -> Vec<CalculationItem> {
        match self {
            ItemDocument::One(item) => vec![item],
            ItemDocument::Many(items) => items,
        }
    }
}

#[derive(Deserialize)]
struct ShapeDocument {
    outline: Vec<Point2D>,
    #[serde(default)]
    openings: Vec<Opening>,
}

#[derive(Serialize)]
struct ShapeReport {
    analysis: ShapeAnalysis,
    openings: Vec<OpeningReinforcement>,
}

#[derive(Serialize)]
struct OptimizeReport {
    optimization: OptimizationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    alternatives: Option<Vec<AlternativeDesign>>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum ItemOutcome {
    Slab(SlabResult),
    Beam(BeamResult),
    Column(ColumnResult),
}

impl ItemOutcome {
    fn passes(&self) -> bool {
        match self {
            ItemOutcome::Slab(r) => r.passes(),
            ItemOutcome::Beam(r) => r.passes(),
            ItemOutcome::Column(r) => r.passes(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let format = cli.format;
    let outcome = match cli.command {
        Commands::Slab { file } => handle_slab(&file, format),
        Commands::Beam { file } => handle_beam(&file, format),
        Commands::Column { file } => handle_column(&file, format),
        Commands::Run { file } => handle_run(&file, format),
        Commands::Optimize {
            file,
            config,
            rates,
            seed,
            alternatives,
        } => handle_optimize(
            &file,
            config.as_deref(),
            rates.as_deref(),
            seed,
            alternatives,
            format,
        ),
        Commands::Shape { file } => handle_shape(&file, format),
    };

    let exit_code = match outcome {
        Ok(true) => EXIT_OK,
        Ok(false) => EXIT_FAILED_CHECKS,
        Err(e) => {
            report_error(&e, format);
            EXIT_BAD_INPUT
        }
    };
    process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn read_json<T: DeserializeOwned>(path: &Path) -> CalcResult<T> {
    debug!("Reading {}", path.display());
    let text = fs::read_to_string(path)
        .map_err(|e| CalcError::invalid_input("file", path.display().to_string(), e.to_string()))?;
    Ok(serde_json::from_str(&text)?)
}

fn print_json<T: Serialize>(value: &T) -> CalcResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn report_error(e: &CalcError, format: OutputFormat) {
    eprintln!("Error: {}", e);
    if let OutputFormat::Json = format {
        if let Ok(json) = serde_json::to_string_pretty(e) {
            eprintln!("{}", json);
        }
    }
}

// ============================================================================
// Element commands
// ============================================================================

fn handle_slab(file: &Path, format: OutputFormat) -> CalcResult<bool> {
    let input: SlabInput = read_json(file)?;
    let result = slab::calculate(&input)?;
    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Human => print_slab(&result),
    }
    Ok(result.passes())
}

fn handle_beam(file: &Path, format: OutputFormat) -> CalcResult<bool> {
    let input: BeamInput = read_json(file)?;
    let result = beam::calculate(&input)?;
    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Human => print_beam(&input.label, &result),
    }
    Ok(result.passes())
}

fn handle_column(file: &Path, format: OutputFormat) -> CalcResult<bool> {
    let input: ColumnInput = read_json(file)?;
    let result = column::calculate(&input)?;
    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Human => print_column(&input.label, &result),
    }
    Ok(result.passes())
}

fn handle_run(file: &Path, format: OutputFormat) -> CalcResult<bool> {
    let items = read_json::<ItemDocument>(file)?.into_items();
    info!("Running {} item(s) from {}", items.len(), file.display());

    let mut outcomes = Vec::with_capacity(items.len());
    for item in &items {
        let outcome = match item {
            CalculationItem::Slab(input) => ItemOutcome::Slab(slab::calculate(input)?),
            CalculationItem::Beam(input) => ItemOutcome::Beam(beam::calculate(input)?),
            CalculationItem::Column(input) => ItemOutcome::Column(column::calculate(input)?),
        };
        outcomes.push(outcome);
    }

    match format {
        OutputFormat::Json => print_json(&outcomes)?,
        OutputFormat::Human => {
            for (item, outcome) in items.iter().zip(&outcomes) {
                match outcome {
                    ItemOutcome::Slab(r) => print_slab(r),
                    ItemOutcome::Beam(r) => print_beam(item.label(), r),
                    ItemOutcome::Column(r) => print_column(item.label(), r),
                }
                println!();
            }
        }
    }
    Ok(outcomes.iter().all(ItemOutcome::passes))
}

// ============================================================================
// Optimizer and shape commands
// ============================================================================

fn handle_optimize(
    file: &Path,
    config_file: Option<&Path>,
    rates_file: Option<&Path>,
    seed: Option<u64>,
    with_alternatives: bool,
    format: OutputFormat,
) -> CalcResult<bool> {
    let input: SlabInput = read_json(file)?;
    let mut config: OptimizerConfig = match config_file {
        Some(path) => read_json(path)?,
        None => OptimizerConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    let rates: CostRates = match rates_file {
        Some(path) => read_json(path)?,
        None => CostRates::default(),
    };

    let baseline = slab::calculate(&input)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let optimization = optimize(&baseline.design, &config, &rates, &mut rng)?;
    let alternatives = if with_alternatives {
        Some(generate_alternatives(&baseline.design, &config, &rates, &mut rng)?)
    } else {
        None
    };

    let report = OptimizeReport { optimization, alternatives };
    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Human => print_optimization(&input.label, &report),
    }
    Ok(baseline.passes())
}

fn handle_shape(file: &Path, format: OutputFormat) -> CalcResult<bool> {
    let document: ShapeDocument = read_json(file)?;
    let report = ShapeReport {
        analysis: classify_shape(&document.outline)?,
        openings: reinforce_openings(&document.openings)?,
    };
    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Human => print_shape(&report),
    }
    Ok(true)
}

// ============================================================================
// Human-readable reports
// ============================================================================

const RULE: &str = "═══════════════════════════════════════";

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

fn banner(title: &str) {
    println!("{}", RULE);
    println!("  {}", title);
    println!("{}", RULE);
}

fn print_notes(heading: &str, notes: &[String]) {
    if notes.is_empty() {
        return;
    }
    println!();
    println!("{}:", heading);
    for note in notes {
        println!("  - {}", note);
    }
}

fn print_slab(result: &SlabResult) {
    let design = &result.design;
    let analysis = &design.analysis;
    banner(&format!("SLAB {}", design.input.label));
    println!();
    println!("Panel:");
    println!(
        "  lx × ly  = {:.0} × {:.0} mm (r = {:.2}, {:?})",
        analysis.short_span_mm, analysis.long_span_mm, analysis.aspect_ratio, analysis.span_type
    );
    println!("  w        = {:.2} kN/m²", analysis.factored_load_kn_m2);
    println!(
        "  Mx / My  = {:.2} / {:.2} kN·m/m",
        analysis.moments.short_positive_knm, analysis.moments.long_positive_knm
    );
    println!();
    println!("Reinforcement:");
    for (name, bars, anchorage) in [
        ("Main", &design.main_bars, &design.main_anchorage),
        ("Distribution", &design.distribution_bars, &design.distribution_anchorage),
    ] {
        println!(
            "  {:<13} Ø{} @ {:.0} mm × {} ({:.0} of {:.0} mm²/m) Ld {:.0}, lap {:.0} mm",
            name,
            bars.choice.diameter_mm,
            bars.choice.spacing_mm,
            bars.count,
            bars.choice.provided_area_mm2_per_m,
            bars.choice.required_area_mm2_per_m,
            anchorage.development_length_mm,
            anchorage.lap_length_mm
        );
    }
    println!();
    println!(
        "Deflection: l/d {:.1} vs {:.1} {}",
        analysis.deflection.actual_ratio,
        analysis.deflection.allowable_ratio,
        status_icon(analysis.deflection.passes())
    );

    print_notes("Errors", &result.validation.errors);
    print_notes("Warnings", &design.warnings);
    print_notes("Validation warnings", &result.validation.warnings);
    println!();
    banner(&format!("RESULT: {}", if result.passes() { "PASS" } else { "FAIL" }));
}

fn print_beam(label: &str, result: &BeamResult) {
    banner(&format!("BEAM {}", label));
    println!();
    println!("Demand:");
    println!(
        "  w  = {:.2} kN/m (self weight {:.2})",
        result.factored_load_kn_m, result.self_weight_kn_m
    );
    println!(
        "  Mu = {:.2} kN·m (Mu,lim {:.2})",
        result.factored_moment_knm, result.limiting_moment_knm
    );
    println!("  Vu = {:.2} kN", result.factored_shear_kn);
    println!();
    println!("Reinforcement:");
    println!(
        "  Bottom:   {} × Ø{} ({:.0} of {:.0} mm²)",
        result.tension_bars.count,
        result.tension_bars.diameter_mm,
        result.tension_bars.area_provided_mm2,
        result.tension_steel_required_mm2
    );
    println!("  Top:      {} × Ø{}", result.top_bars.count, result.top_bars.diameter_mm);
    println!(
        "  Stirrups: {}-leg Ø{} @ {:.0} mm",
        result.stirrups.legs, result.stirrups.diameter_mm, result.stirrups.spacing_mm
    );
    println!();
    println!("Checks:");
    println!(
        "  Shear:      τv {:.2} vs τc,max {:.2} MPa {}",
        result.shear_stress_mpa,
        result.max_shear_stress_mpa,
        status_icon(result.shear_stress_mpa <= result.max_shear_stress_mpa)
    );
    println!(
        "  Deflection: l/d {:.1} vs {:.1} {}",
        result.span_depth_ratio,
        result.allowable_span_depth_ratio,
        status_icon(result.span_depth_ratio <= result.allowable_span_depth_ratio)
    );

    print_notes("Warnings", &result.warnings);
    println!();
    banner(&format!(
        "RESULT: {} (governs: {})",
        if result.passes() { "PASS" } else { "FAIL" },
        result.governing_condition()
    ));
}

fn print_column(label: &str, result: &ColumnResult) {
    banner(&format!("COLUMN {}", label));
    println!();
    println!(
        "  Slenderness: {:.1} ({})",
        result.slenderness_ratio,
        if result.is_short { "short" } else { "slender" }
    );
    println!(
        "  Steel:       {:.0} mm² required ({:.2}%)",
        result.steel_required_mm2, result.steel_percentage
    );
    println!(
        "  Bars:        {} × Ø{} ({:.0} mm²)",
        result.main_bars.count, result.main_bars.diameter_mm, result.main_bars.area_provided_mm2
    );
    println!("  Ties:        Ø{} @ {:.0} mm", result.ties.diameter_mm, result.ties.spacing_mm);
    println!(
        "  e,min:       {:.1} mm → M = {:.2} kN·m",
        result.minimum_eccentricity_mm, result.design_moment_knm
    );

    print_notes("Warnings", &result.warnings);
    println!();
    banner(&format!("RESULT: {}", if result.passes() { "PASS" } else { "FAIL" }));
}

fn print_cost(name: &str, cost: &CostBreakdown) {
    println!(
        "  {:<10} {:>9.1} kg  {:>5} bars  {:>12.2} total ({:.2} material, {:.2} labour)",
        name,
        cost.steel_weight_kg,
        cost.bar_count,
        cost.total_cost,
        cost.material_cost,
        cost.labor_cost
    );
}

fn print_optimization(label: &str, report: &OptimizeReport) {
    let result = &report.optimization;
    banner(&format!("OPTIMIZATION {}", label));
    println!();
    println!("  Baseline:  {}", result.baseline.describe());
    println!("  Optimized: {}", result.best.describe());
    println!();
    println!("Cost:");
    print_cost("Baseline", &result.baseline_cost);
    print_cost("Optimized", &result.optimized_cost);
    println!();
    println!(
        "Savings: {:.1}% total, {:.1}% material, {:.1}% labour",
        result.cost_savings_percent, result.material_savings_percent, result.labor_savings_percent
    );

    if let Some(alternatives) = &report.alternatives {
        println!();
        println!("Alternatives:");
        for alternative in alternatives {
            println!(
                "  {}: {}",
                alternative.strategy.display_name(),
                alternative.solution.describe()
            );
            print_cost("", &alternative.cost);
            for pro in &alternative.pros {
                println!("    + {}", pro);
            }
            for con in &alternative.cons {
                println!("    - {}", con);
            }
        }
    }
}

fn print_shape(report: &ShapeReport) {
    let analysis = &report.analysis;
    banner(&format!("SHAPE: {}", analysis.shape.display_name()));
    println!();
    println!("  Vertices:  {}", analysis.vertex_count);
    println!("  Area:      {:.2} m²", analysis.area_mm2 / 1.0e6);
    println!(
        "  Extent:    {:.0} × {:.0} mm",
        analysis.bounding_box.width(),
        analysis.bounding_box.height()
    );
    println!("  Complexity: {:?}", analysis.complexity);
    print_notes("Suggestions", &analysis.suggestions);

    if !report.openings.is_empty() {
        println!();
        println!("Openings:");
        for trimmer in &report.openings {
            println!(
                "  {}: {} × Ø{} trimmers, {:.0} mm long{}",
                trimmer.opening_id,
                trimmer.trimmer_bar_count,
                trimmer.trimmer_bar_diameter_mm,
                trimmer.extension_mm,
                if trimmer.requires_detailed_analysis {
                    " (detailed analysis required)"
                } else {
                    ""
                }
            );
        }
    }
}
