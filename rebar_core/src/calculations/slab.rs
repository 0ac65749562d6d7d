//! # Slab Panel Design
//!
//! Designs the bottom reinforcement of a rectangular slab panel.
//!
//! ## Pipeline
//!
//! Each stage is a pure function returning a new record:
//!
//! ```text
//! SlabInput ──analyze──▶ SlabAnalysis
//!           ──select_reinforcement──▶ SlabDesign
//!           ──validate──▶ ValidationResult
//! ```
//!
//! 1. **Classify**: lx = min(L, W), ly = max(L, W), r = ly/lx.
//!    One-way iff r > 2.0 (r = 2.0 exactly is two-way).
//! 2. **Factored load**: w = 1.5 × (dead + h × 25 + live + finish).
//! 3. **Moments**: one-way coefficients by support; two-way coefficients by r.
//! 4. **Required steel**: singly reinforced closed form, clamped to 0.12% of
//!    the gross section.
//! 5. **Deflection**: lx/d against 20 × support modification factor.
//!
//! ## Assumptions
//!
//! - Unit strip b = 1000 mm
//! - Effective depth uses the smallest preferred bar; long-span bars sit on
//!   top of short-span bars (d_long = d_short − φ)
//! - Main bars are counted along lx, distribution bars along ly
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::calculations::slab::{calculate, SlabInput};
//!
//! let input = SlabInput::new("S-1", 10000.0, 15000.0, 150.0, 3.0);
//! let result = calculate(&input).unwrap();
//!
//! assert!(result.design.analysis.is_two_way());
//! assert_eq!(result.design.main_bars.choice.diameter_mm, 12);
//! assert_eq!(result.design.main_bars.count, 67);
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::calculations::singly_reinforced_steel;
use crate::code_tables::{
    one_way_coefficients, support_modification_factor, two_way_coefficients, MomentCoefficients,
    BASIC_SPAN_DEPTH_RATIO, CONCRETE_UNIT_WEIGHT_KN_M3, LOAD_FACTOR, ONE_WAY_RATIO_LIMIT,
    SLAB_MIN_STEEL_RATIO,
};
use crate::design::{DesignPreferences, SupportCondition};
use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::materials::MaterialPair;
use crate::rebar::{
    anchorage, bar_count, select_distribution_bars, select_main_bars, Anchorage, BarChoice,
};
use crate::units::{KnM, KnPerM2, Meters, Millimeters};
use crate::validation::{validate_slab, ValidationResult};

/// Width of the design strip (mm)
const STRIP_WIDTH_MM: f64 = 1000.0;

fn default_cover_mm() -> f64 {
    25.0
}

fn default_finish_load() -> f64 {
    1.0
}

/// Input parameters for a slab panel.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "S-1",
///   "length_mm": 10000.0,
///   "width_mm": 15000.0,
///   "thickness_mm": 150.0,
///   "live_load_kn_m2": 3.0,
///   "materials": { "concrete": "M25", "steel": "Fe415" },
///   "support": "Simple"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabInput {
    /// User label for this panel (e.g., "S-1", "Level 2 Bay C")
    #[serde(default)]
    pub label: String,

    /// Panel length (mm)
    pub length_mm: f64,

    /// Panel width (mm)
    pub width_mm: f64,

    /// Overall slab thickness (mm)
    pub thickness_mm: f64,

    /// Superimposed dead load excluding self weight (kN/m²)
    #[serde(default)]
    pub dead_load_kn_m2: f64,

    /// Imposed live load (kN/m²)
    pub live_load_kn_m2: f64,

    /// Floor finish load (kN/m²)
    #[serde(default = "default_finish_load")]
    pub finish_load_kn_m2: f64,

    /// Concrete and steel grades
    #[serde(default)]
    pub materials: MaterialPair,

    /// Clear cover to the outermost bar (mm)
    #[serde(default = "default_cover_mm")]
    pub cover_mm: f64,

    /// Edge support condition
    #[serde(default)]
    pub support: SupportCondition,

    /// Allowed diameters and spacing band
    #[serde(default)]
    pub preferences: DesignPreferences,
}

impl SlabInput {
    /// Create an input with default materials (M25/Fe415), cover, finish
    /// load, simple supports and default bar preferences.
    pub fn new(
        label: impl Into<String>,
        length_mm: f64,
        width_mm: f64,
        thickness_mm: f64,
        live_load_kn_m2: f64,
    ) -> Self {
        SlabInput {
            label: label.into(),
            length_mm,
            width_mm,
            thickness_mm,
            dead_load_kn_m2: 0.0,
            live_load_kn_m2,
            finish_load_kn_m2: default_finish_load(),
            materials: MaterialPair::default(),
            cover_mm: default_cover_mm(),
            support: SupportCondition::default(),
            preferences: DesignPreferences::default(),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length_mm", self.length_mm)?;
        require_positive("width_mm", self.width_mm)?;
        require_positive("thickness_mm", self.thickness_mm)?;
        require_non_negative("dead_load_kn_m2", self.dead_load_kn_m2)?;
        require_non_negative("live_load_kn_m2", self.live_load_kn_m2)?;
        require_non_negative("finish_load_kn_m2", self.finish_load_kn_m2)?;
        require_positive("cover_mm", self.cover_mm)?;
        self.preferences.validate()?;

        if self.long_span_depth_mm() <= 0.0 {
            return Err(CalcError::invalid_input(
                "cover_mm",
                self.cover_mm.to_string(),
                "Cover plus two bar layers leaves no effective depth",
            ));
        }
        Ok(())
    }

    /// Short span lx (mm)
    pub fn short_span_mm(&self) -> f64 {
        self.length_mm.min(self.width_mm)
    }

    /// Long span ly (mm)
    pub fn long_span_mm(&self) -> f64 {
        self.length_mm.max(self.width_mm)
    }

    /// Effective depth to the short-span bars (mm)
    pub fn short_span_depth_mm(&self) -> f64 {
        let phi = f64::from(self.preferences.smallest_diameter());
        self.thickness_mm - self.cover_mm - phi / 2.0
    }

    /// Effective depth to the long-span bars, laid over the short-span layer (mm)
    pub fn long_span_depth_mm(&self) -> f64 {
        self.short_span_depth_mm() - f64::from(self.preferences.smallest_diameter())
    }

    /// Self weight of the slab (kN/m²)
    pub fn self_weight_kn_m2(&self) -> f64 {
        KnPerM2::from_layer(Millimeters(self.thickness_mm).into(), CONCRETE_UNIT_WEIGHT_KN_M3).0
    }

    /// Factored area load w = 1.5 × (dead + self weight + live + finish) (kN/m²)
    pub fn factored_load_kn_m2(&self) -> f64 {
        let total = KnPerM2(self.dead_load_kn_m2)
            + KnPerM2(self.self_weight_kn_m2())
            + KnPerM2(self.live_load_kn_m2)
            + KnPerM2(self.finish_load_kn_m2);
        (total * LOAD_FACTOR).0
    }

    /// Code minimum steel per metre width, 0.12% of the gross section (mm²/m)
    pub fn min_steel_mm2_per_m(&self) -> f64 {
        SLAB_MIN_STEEL_RATIO * STRIP_WIDTH_MM * self.thickness_mm
    }
}

/// Span classification of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpanType {
    /// ly/lx > 2.0: bending carried in the short direction only
    OneWay,
    /// ly/lx ≤ 2.0: bending carried in both directions
    TwoWay,
}

/// Classify a panel by its span ratio r = ly/lx.
pub fn classify(aspect_ratio: f64) -> SpanType {
    if aspect_ratio > ONE_WAY_RATIO_LIMIT {
        SpanType::OneWay
    } else {
        SpanType::TwoWay
    }
}

/// Design moments per metre width (kN·m/m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlabMoments {
    /// Coefficients applied in the short span
    pub short_span_coefficients: MomentCoefficients,
    /// Coefficients applied in the long span (zero for one-way panels)
    pub long_span_coefficients: MomentCoefficients,
    /// Midspan moment, short span
    pub short_positive_knm: f64,
    /// Support moment, short span
    pub short_negative_knm: f64,
    /// Midspan moment, long span
    pub long_positive_knm: f64,
    /// Support moment, long span
    pub long_negative_knm: f64,
}

/// Span/depth deflection check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionCheck {
    /// lx / d
    pub actual_ratio: f64,
    /// 20 × support modification factor
    pub allowable_ratio: f64,
    /// Modification factor for the support condition
    pub modification_factor: f64,
}

impl DeflectionCheck {
    /// Check passes when the actual ratio does not exceed the allowable
    pub fn passes(&self) -> bool {
        self.actual_ratio <= self.allowable_ratio
    }
}

/// Stage 1 output: classification, forces, required steel, deflection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabAnalysis {
    /// Short span lx (mm)
    pub short_span_mm: f64,
    /// Long span ly (mm)
    pub long_span_mm: f64,
    /// ly / lx
    pub aspect_ratio: f64,
    /// One-way or two-way
    pub span_type: SpanType,
    /// Factored area load (kN/m²)
    pub factored_load_kn_m2: f64,
    /// Design moments
    pub moments: SlabMoments,
    /// Effective depth, short-span bars (mm)
    pub short_span_depth_mm: f64,
    /// Effective depth, long-span bars (mm)
    pub long_span_depth_mm: f64,
    /// Code minimum steel (mm²/m)
    pub min_steel_mm2_per_m: f64,
    /// Required main (short-span bottom) steel after the minimum clamp (mm²/m)
    pub main_steel_required_mm2_per_m: f64,
    /// Required distribution (long-span bottom) steel after the minimum clamp (mm²/m)
    pub distribution_steel_required_mm2_per_m: f64,
    /// Required top steel over supports (mm²/m), zero when there is no support moment
    pub support_steel_required_mm2_per_m: f64,
    /// Deflection check
    pub deflection: DeflectionCheck,
    /// Warnings raised during analysis, in order
    pub warnings: Vec<String>,
}

impl SlabAnalysis {
    /// True for ly/lx > 2.0
    pub fn is_one_way(&self) -> bool {
        self.span_type == SpanType::OneWay
    }

    /// True for ly/lx ≤ 2.0
    pub fn is_two_way(&self) -> bool {
        self.span_type == SpanType::TwoWay
    }
}

/// Run classification, moment, steel and deflection stages.
pub fn analyze(input: &SlabInput) -> CalcResult<SlabAnalysis> {
    input.validate()?;

    let mut warnings = Vec::new();

    let lx_mm = input.short_span_mm();
    let ly_mm = input.long_span_mm();
    let aspect_ratio = ly_mm / lx_mm;
    let span_type = classify(aspect_ratio);

    let w = input.factored_load_kn_m2();
    let lx = Meters::from(Millimeters(lx_mm));
    let wl2 = w * lx.0 * lx.0;

    let (short_c, long_c) = match span_type {
        SpanType::OneWay => (
            one_way_coefficients(input.support),
            MomentCoefficients {
                positive: 0.0,
                negative: 0.0,
            },
        ),
        SpanType::TwoWay => {
            let c = two_way_coefficients(aspect_ratio);
            (c.short_span, c.long_span)
        }
    };

    let moments = SlabMoments {
        short_span_coefficients: short_c,
        long_span_coefficients: long_c,
        short_positive_knm: short_c.positive * wl2,
        short_negative_knm: short_c.negative * wl2,
        long_positive_knm: long_c.positive * wl2,
        long_negative_knm: long_c.negative * wl2,
    };
    debug!(
        "{}: {:?} r = {:.3}, w = {:.3} kN/m², Mx = {:.2}, My = {:.2} kN·m/m",
        input.label,
        span_type,
        aspect_ratio,
        w,
        moments.short_positive_knm,
        moments.long_positive_knm
    );

    let d_short = input.short_span_depth_mm();
    let d_long = input.long_span_depth_mm();
    let min_steel = input.min_steel_mm2_per_m();

    let mut required = |moment: f64, depth: f64, what: &str| -> f64 {
        if moment <= 0.0 {
            return 0.0;
        }
        let steel = singly_reinforced_steel(KnM(moment), STRIP_WIDTH_MM, depth, &input.materials);
        if steel.over_capacity {
            warnings.push(format!(
                "{}: moment {:.2} kN·m/m exceeds singly reinforced capacity at d = {:.0} mm; \
                 increase depth or add compression steel",
                what, moment, depth
            ));
        }
        steel.area_mm2
    };

    let main_raw = required(moments.short_positive_knm, d_short, "Short span");
    let distribution_raw = required(moments.long_positive_knm, d_long, "Long span");
    let support_raw = required(
        moments.short_negative_knm.max(moments.long_negative_knm),
        d_short,
        "Support",
    );

    let main_steel = main_raw.max(min_steel);
    let distribution_steel = distribution_raw.max(min_steel);
    let support_steel = if support_raw > 0.0 {
        support_raw.max(min_steel)
    } else {
        0.0
    };

    let modification_factor = support_modification_factor(input.support);
    let deflection = DeflectionCheck {
        actual_ratio: lx_mm / d_short,
        allowable_ratio: BASIC_SPAN_DEPTH_RATIO * modification_factor,
        modification_factor,
    };
    if !deflection.passes() {
        warnings.push(format!(
            "Deflection: span/depth ratio {:.1} exceeds allowable {:.1}; increase thickness",
            deflection.actual_ratio, deflection.allowable_ratio
        ));
    }

    Ok(SlabAnalysis {
        short_span_mm: lx_mm,
        long_span_mm: ly_mm,
        aspect_ratio,
        span_type,
        factored_load_kn_m2: w,
        moments,
        short_span_depth_mm: d_short,
        long_span_depth_mm: d_long,
        min_steel_mm2_per_m: min_steel,
        main_steel_required_mm2_per_m: main_steel,
        distribution_steel_required_mm2_per_m: distribution_steel,
        support_steel_required_mm2_per_m: support_steel,
        deflection,
        warnings,
    })
}

/// One layer of slab bars with its count over the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabBars {
    /// Diameter, spacing and areas
    pub choice: BarChoice,
    /// Number of bars in the layer
    pub count: u32,
    /// Length of each bar (mm)
    pub bar_length_mm: f64,
}

/// Stage 2 output: the finished design record handed to the validator and
/// the optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabDesign {
    /// The input the design was produced from
    pub input: SlabInput,
    /// Analysis stage output
    pub analysis: SlabAnalysis,
    /// Main (short-span) bars
    pub main_bars: SlabBars,
    /// Distribution (long-span) bars
    pub distribution_bars: SlabBars,
    /// Anchorage of main bars
    pub main_anchorage: Anchorage,
    /// Anchorage of distribution bars
    pub distribution_anchorage: Anchorage,
    /// All warnings from analysis and bar selection, in pipeline order
    pub warnings: Vec<String>,
}

/// Select bars and anchorage for an analysed panel.
pub fn select_reinforcement(input: &SlabInput, analysis: &SlabAnalysis) -> SlabDesign {
    let mut warnings = analysis.warnings.clone();

    let main = select_main_bars(
        analysis.main_steel_required_mm2_per_m,
        &input.preferences,
        input.thickness_mm,
    );
    warnings.extend(main.warnings);

    let distribution = select_distribution_bars(
        analysis.distribution_steel_required_mm2_per_m,
        &input.preferences,
        input.thickness_mm,
        main.choice.diameter_mm,
    );
    warnings.extend(distribution.warnings);

    let main_bars = SlabBars {
        count: bar_count(analysis.short_span_mm, main.choice.spacing_mm),
        bar_length_mm: analysis.long_span_mm,
        choice: main.choice,
    };
    let distribution_bars = SlabBars {
        count: bar_count(analysis.long_span_mm, distribution.choice.spacing_mm),
        bar_length_mm: analysis.short_span_mm,
        choice: distribution.choice,
    };

    SlabDesign {
        input: input.clone(),
        analysis: analysis.clone(),
        main_anchorage: anchorage(main_bars.choice.diameter_mm, &input.materials),
        distribution_anchorage: anchorage(distribution_bars.choice.diameter_mm, &input.materials),
        main_bars,
        distribution_bars,
        warnings,
    }
}

/// Analyse and select bars without validating.
pub fn design(input: &SlabInput) -> CalcResult<SlabDesign> {
    let analysis = analyze(input)?;
    Ok(select_reinforcement(input, &analysis))
}

/// Complete slab result: finished design plus compliance verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabResult {
    pub design: SlabDesign,
    pub validation: ValidationResult,
}

impl SlabResult {
    /// Design passes when the validator reports no errors
    pub fn passes(&self) -> bool {
        self.validation.is_valid
    }
}

/// Run the full slab pipeline.
///
/// Engineering non-conformance is reported in `validation`, never as `Err`;
/// `Err` is returned only for inputs that cannot be analysed.
pub fn calculate(input: &SlabInput) -> CalcResult<SlabResult> {
    let design = design(input)?;
    let validation = validate_slab(&design);
    info!(
        "{}: Ø{} @ {:.0} main, Ø{} @ {:.0} distribution, {} error(s), {} warning(s)",
        input.label,
        design.main_bars.choice.diameter_mm,
        design.main_bars.choice.spacing_mm,
        design.distribution_bars.choice.diameter_mm,
        design.distribution_bars.choice.spacing_mm,
        validation.errors.len(),
        design.warnings.len() + validation.warnings.len()
    );
    Ok(SlabResult { design, validation })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_slab() -> SlabInput {
        SlabInput::new("Test Slab", 10000.0, 15000.0, 150.0, 3.0)
    }

    #[test]
    fn test_classification_two_way() {
        let analysis = analyze(&reference_slab()).unwrap();
        assert!(analysis.is_two_way());
        assert!(!analysis.is_one_way());
        assert_relative_eq!(analysis.aspect_ratio, 1.5);
    }

    #[test]
    fn test_classification_boundary_is_two_way() {
        let input = SlabInput::new("Boundary", 4000.0, 8000.0, 150.0, 3.0);
        let analysis = analyze(&input).unwrap();
        assert_eq!(analysis.aspect_ratio, 2.0);
        assert!(analysis.is_two_way());
    }

    #[test]
    fn test_classification_one_way() {
        let input = SlabInput::new("Long", 30000.0, 5000.0, 150.0, 3.0);
        let analysis = analyze(&input).unwrap();
        assert!(analysis.is_one_way());
        assert_relative_eq!(analysis.aspect_ratio, 6.0);
        assert_eq!(analysis.moments.short_span_coefficients.negative, 0.0);
        assert_eq!(analysis.moments.short_negative_knm, 0.0);
        assert_eq!(analysis.support_steel_required_mm2_per_m, 0.0);
    }

    #[test]
    fn test_factored_load() {
        // 1.5 × (0 + 3.75 + 3.0 + 1.0) = 11.625 kN/m²
        assert_relative_eq!(reference_slab().factored_load_kn_m2(), 11.625, epsilon = 1e-9);
    }

    #[test]
    fn test_two_way_moments() {
        let analysis = analyze(&reference_slab()).unwrap();
        // Mx = 0.0245 × 11.625 × 10² = 28.48 kN·m/m
        assert_relative_eq!(analysis.moments.short_positive_knm, 28.48125, epsilon = 1e-6);
        assert_relative_eq!(
            analysis.moments.short_negative_knm,
            1.33 * analysis.moments.short_positive_knm,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_fixed_one_way_has_support_steel() {
        let mut input = SlabInput::new("Fixed", 3000.0, 9000.0, 150.0, 3.0);
        input.support = SupportCondition::Fixed;
        let analysis = analyze(&input).unwrap();
        assert!(analysis.moments.short_negative_knm > analysis.moments.short_positive_knm);
        assert!(analysis.support_steel_required_mm2_per_m >= analysis.min_steel_mm2_per_m);
    }

    #[test]
    fn test_minimum_steel_clamp() {
        // Small, lightly loaded panel: computed steel below 0.12% bD
        let input = SlabInput::new("Small", 2000.0, 2500.0, 150.0, 1.5);
        let analysis = analyze(&input).unwrap();
        assert_relative_eq!(analysis.min_steel_mm2_per_m, 180.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.distribution_steel_required_mm2_per_m, 180.0, epsilon = 1e-9);
        assert!(analysis.main_steel_required_mm2_per_m >= 180.0);
    }

    #[test]
    fn test_one_way_distribution_at_minimum() {
        let input = SlabInput::new("Long", 30000.0, 5000.0, 150.0, 3.0);
        let analysis = analyze(&input).unwrap();
        assert_eq!(analysis.moments.long_positive_knm, 0.0);
        assert_relative_eq!(analysis.distribution_steel_required_mm2_per_m, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_over_capacity_records_warning() {
        let input = SlabInput::new("Thin", 6000.0, 20000.0, 100.0, 10.0);
        let analysis = analyze(&input).unwrap();
        assert!(analysis.warnings.iter().any(|w| w.contains("compression steel")));
    }

    #[test]
    fn test_deflection_passing_panel() {
        let input = SlabInput::new("Short", 2400.0, 3000.0, 150.0, 3.0);
        let analysis = analyze(&input).unwrap();
        // 2400 / 120 = 20.0 ≤ 20.0
        assert!(analysis.deflection.passes());
        assert!(!analysis.warnings.iter().any(|w| w.starts_with("Deflection")));
    }

    #[test]
    fn test_deflection_failure_is_warning_only() {
        let input = SlabInput::new("Long span", 6000.0, 7000.0, 150.0, 3.0);
        let result = calculate(&input).unwrap();
        assert!(!result.design.analysis.deflection.passes());
        assert!(result.design.warnings.iter().any(|w| w.starts_with("Deflection")));
        assert!(result.validation.errors.iter().all(|e| !e.contains("Deflection")));
    }

    #[test]
    fn test_continuous_modification_factor() {
        let mut input = reference_slab();
        input.support = SupportCondition::Continuous;
        let analysis = analyze(&input).unwrap();
        assert_relative_eq!(analysis.deflection.allowable_ratio, 26.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_thickness() {
        let mut input = reference_slab();
        input.thickness_mm = -150.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_cover_consumes_depth() {
        let mut input = reference_slab();
        input.cover_mm = 140.0;
        let err = analyze(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_selection_is_deterministic() {
        let input = reference_slab();
        let analysis = analyze(&input).unwrap();
        let first = select_reinforcement(&input, &analysis);
        let second = select_reinforcement(&input, &analysis);
        assert_eq!(first.main_bars, second.main_bars);
        assert_eq!(first.distribution_bars, second.distribution_bars);
    }

    #[test]
    fn test_input_defaults_from_json() {
        let json =
            r#"{"length_mm": 4000, "width_mm": 5000, "thickness_mm": 150, "live_load_kn_m2": 2.0}"#;
        let input: SlabInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.cover_mm, 25.0);
        assert_eq!(input.finish_load_kn_m2, 1.0);
        assert_eq!(input.support, SupportCondition::Simple);
        assert_eq!(input.preferences, DesignPreferences::default());
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&reference_slab()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("main_steel_required_mm2_per_m"));
        assert!(json.contains("TwoWay"));
        let roundtrip: SlabResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.design.main_bars.count, result.design.main_bars.count);
    }
}
