//! # Simply-Supported Beam Calculation
//!
//! Designs a rectangular reinforced concrete beam on a single simple span
//! under a uniformly distributed load.
//!
//! ## Assumptions
//!
//! - Simply-supported (pin-roller) boundary conditions
//! - Uniform load: superimposed dead + live + self weight, factored by 1.5
//! - Effective depth taken with the largest candidate bar, so the chosen
//!   layout never has less lever arm than assumed
//! - Compression steel stressed to 0.87 fy
//! - Two-legged vertical stirrups
//!
//! ## Flexure
//!
//! ```text
//! Mu     = w L² / 8
//! Mu,lim = 0.138 fck b d²
//! ```
//!
//! Below `Mu,lim` the section is singly reinforced. Above it, the excess
//! moment `Mu − Mu,lim` is carried by a compression/tension steel couple at
//! lever arm `d − d'`.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::calculations::beam::{calculate, BeamInput};
//!
//! let input = BeamInput::new("B-1", 4000.0, 230.0, 450.0, 10.0, 10.0);
//! let result = calculate(&input).unwrap();
//!
//! assert!(!result.compression_steel_required);
//! assert_eq!(result.tension_bars.diameter_mm, 12);
//! println!(
//!     "Mu = {:.1} kN·m, stirrups @ {} mm",
//!     result.factored_moment_knm, result.stirrups.spacing_mm
//! );
//! ```

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::calculations::singly_reinforced_steel;
use crate::code_tables::{
    concrete_shear_strength, BASIC_SPAN_DEPTH_RATIO, CONCRETE_UNIT_WEIGHT_KN_M3,
    LIMITING_MOMENT_FACTOR, LOAD_FACTOR, MAX_STEEL_RATIO,
};
use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::materials::{bar_area_mm2, MaterialPair};
use crate::rebar::{anchorage, Anchorage, SPACING_GRID_MM};
use crate::units::{KnM, KnPerM, Meters, Millimeters};

/// Legs per stirrup
pub const STIRRUP_LEGS: u32 = 2;

/// Upper cap on stirrup spacing (mm)
pub const MAX_STIRRUP_SPACING_MM: f64 = 300.0;

/// Smallest clear distance between bars in a layer (mm)
const MIN_CLEAR_BAR_GAP_MM: f64 = 25.0;

fn default_cover_mm() -> f64 {
    25.0
}

fn default_stirrup_diameter_mm() -> u32 {
    8
}

fn default_bar_diameters() -> Vec<u32> {
    vec![12, 16, 20, 25, 32]
}

/// Input parameters for a simply-supported beam.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "span_mm": 4000.0,
///   "width_mm": 230.0,
///   "depth_mm": 450.0,
///   "dead_load_kn_m": 10.0,
///   "live_load_kn_m": 10.0,
///   "materials": { "concrete": "M25", "steel": "Fe415" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label for this beam (e.g., "B-1", "Grid A 2-3")
    #[serde(default)]
    pub label: String,

    /// Effective span (mm)
    pub span_mm: f64,

    /// Web width b (mm)
    pub width_mm: f64,

    /// Overall depth D (mm)
    pub depth_mm: f64,

    /// Superimposed dead load excluding self weight (kN/m)
    #[serde(default)]
    pub dead_load_kn_m: f64,

    /// Imposed live load (kN/m)
    #[serde(default)]
    pub live_load_kn_m: f64,

    /// Concrete and steel grades
    #[serde(default)]
    pub materials: MaterialPair,

    /// Clear cover to stirrups (mm)
    #[serde(default = "default_cover_mm")]
    pub cover_mm: f64,

    /// Stirrup bar diameter (mm)
    #[serde(default = "default_stirrup_diameter_mm")]
    pub stirrup_diameter_mm: u32,

    /// Ascending candidate diameters for longitudinal bars (mm)
    #[serde(default = "default_bar_diameters")]
    pub bar_diameters_mm: Vec<u32>,
}

impl BeamInput {
    /// Create an input with default grades, cover, stirrups and bar sizes.
    pub fn new(
        label: impl Into<String>,
        span_mm: f64,
        width_mm: f64,
        depth_mm: f64,
        dead_load_kn_m: f64,
        live_load_kn_m: f64,
    ) -> Self {
        BeamInput {
            label: label.into(),
            span_mm,
            width_mm,
            depth_mm,
            dead_load_kn_m,
            live_load_kn_m,
            materials: MaterialPair::default(),
            cover_mm: default_cover_mm(),
            stirrup_diameter_mm: default_stirrup_diameter_mm(),
            bar_diameters_mm: default_bar_diameters(),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("span_mm", self.span_mm)?;
        require_positive("width_mm", self.width_mm)?;
        require_positive("depth_mm", self.depth_mm)?;
        require_non_negative("dead_load_kn_m", self.dead_load_kn_m)?;
        require_non_negative("live_load_kn_m", self.live_load_kn_m)?;
        require_non_negative("cover_mm", self.cover_mm)?;

        if self.bar_diameters_mm.is_empty() {
            return Err(CalcError::missing_field("bar_diameters_mm"));
        }
        if self.bar_diameters_mm.windows(2).any(|w| w[0] >= w[1]) || self.bar_diameters_mm[0] == 0 {
            return Err(CalcError::invalid_input(
                "bar_diameters_mm",
                format!("{:?}", self.bar_diameters_mm),
                "Bar diameters must be positive and strictly ascending",
            ));
        }
        if self.stirrup_diameter_mm == 0 {
            return Err(CalcError::invalid_input(
                "stirrup_diameter_mm",
                self.stirrup_diameter_mm.to_string(),
                "Stirrup diameter must be positive",
            ));
        }
        if self.effective_depth_mm() <= self.compression_steel_depth_mm() {
            return Err(CalcError::invalid_input(
                "depth_mm",
                self.depth_mm.to_string(),
                "Depth leaves no lever arm after cover, stirrups and bars",
            ));
        }
        if self.clear_width_mm() <= 0.0 {
            return Err(CalcError::invalid_input(
                "width_mm",
                self.width_mm.to_string(),
                "Width leaves no room for bars inside cover and stirrups",
            ));
        }
        Ok(())
    }

    fn smallest_bar_mm(&self) -> f64 {
        self.bar_diameters_mm.first().map_or(0.0, |&d| f64::from(d))
    }

    fn largest_bar_mm(&self) -> f64 {
        self.bar_diameters_mm.last().map_or(0.0, |&d| f64::from(d))
    }

    /// Effective depth d = D − cover − stirrup − φmax/2 (mm)
    pub fn effective_depth_mm(&self) -> f64 {
        self.depth_mm
            - self.cover_mm
            - f64::from(self.stirrup_diameter_mm)
            - self.largest_bar_mm() / 2.0
    }

    /// Depth of compression steel centroid d' (mm)
    pub fn compression_steel_depth_mm(&self) -> f64 {
        self.cover_mm + f64::from(self.stirrup_diameter_mm) + self.smallest_bar_mm() / 2.0
    }

    /// Width available to a bar layer inside the stirrups (mm)
    pub fn clear_width_mm(&self) -> f64 {
        self.width_mm - 2.0 * self.cover_mm - 2.0 * f64::from(self.stirrup_diameter_mm)
    }

    /// Self weight of the section
    pub fn self_weight(&self) -> KnPerM {
        KnPerM::from_section(
            Meters::from(Millimeters(self.width_mm)),
            Meters::from(Millimeters(self.depth_mm)),
            CONCRETE_UNIT_WEIGHT_KN_M3,
        )
    }

    /// Factored uniform load w = 1.5 (dead + self + live)
    pub fn factored_load(&self) -> KnPerM {
        let service =
            KnPerM(self.dead_load_kn_m) + self.self_weight() + KnPerM(self.live_load_kn_m);
        service * LOAD_FACTOR
    }
}

/// A group of longitudinal bars placed in one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamBars {
    /// Bar diameter (mm)
    pub diameter_mm: u32,
    /// Number of bars
    pub count: u32,
    /// Steel area provided (mm²)
    pub area_provided_mm2: f64,
    /// True when the layer was substituted because nothing fitted
    pub is_fallback: bool,
}

/// Shear link layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stirrups {
    /// Stirrup diameter (mm)
    pub diameter_mm: u32,
    /// Number of legs
    pub legs: u32,
    /// Spacing along the span (mm)
    pub spacing_mm: f64,
}

/// Results from beam calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "factored_load_kn_m": 33.88,
///   "factored_moment_knm": 67.76,
///   "limiting_moment_knm": 127.6,
///   "compression_steel_required": false,
///   "tension_bars": {
///     "diameter_mm": 12, "count": 5, "area_provided_mm2": 565.5, "is_fallback": false
///   },
///   "stirrups": { "diameter_mm": 8, "legs": 2, "spacing_mm": 300.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    // === Load Summary ===
    /// Self weight (kN/m), shown separately for transparency
    pub self_weight_kn_m: f64,

    /// Factored design load (kN/m)
    pub factored_load_kn_m: f64,

    // === Demand ===
    /// Mu = wL²/8 (kN·m)
    pub factored_moment_knm: f64,

    /// Vu = wL/2 (kN)
    pub factored_shear_kn: f64,

    // === Flexure ===
    /// Effective depth d (mm)
    pub effective_depth_mm: f64,

    /// Mu,lim = 0.138 fck b d² (kN·m)
    pub limiting_moment_knm: f64,

    /// Required tension steel (mm²)
    pub tension_steel_required_mm2: f64,

    /// True when Mu exceeds Mu,lim
    pub compression_steel_required: bool,

    /// Required compression steel (mm²); zero for a singly reinforced section
    pub compression_steel_area_mm2: f64,

    /// Tension bars in the bottom layer
    pub tension_bars: BeamBars,

    /// Top bars: compression steel, or two hanger bars
    pub top_bars: BeamBars,

    // === Shear ===
    /// Nominal shear stress τv (N/mm²)
    pub shear_stress_mpa: f64,

    /// Design shear strength of concrete τc (N/mm²)
    pub concrete_shear_strength_mpa: f64,

    /// Maximum shear stress τc,max (N/mm²)
    pub max_shear_stress_mpa: f64,

    /// Shear carried by stirrups Vus (kN); zero or negative means nominal links
    pub stirrup_shear_kn: f64,

    /// Stirrup layout
    pub stirrups: Stirrups,

    // === Serviceability ===
    /// span / d
    pub span_depth_ratio: f64,

    /// Allowable span / d
    pub allowable_span_depth_ratio: f64,

    /// Anchorage of tension bars
    pub anchorage: Anchorage,

    /// Advisory notes and fallbacks, in calculation order
    pub warnings: Vec<String>,
}

impl BeamResult {
    /// Check shear stress, deflection and tension steel ceiling
    pub fn passes(&self) -> bool {
        self.shear_stress_mpa <= self.max_shear_stress_mpa
            && self.span_depth_ratio <= self.allowable_span_depth_ratio
            && !self.tension_bars.is_fallback
    }

    /// Get a description of what governs the design
    pub fn governing_condition(&self) -> &'static str {
        let flexure = self.factored_moment_knm / self.limiting_moment_knm;
        let shear = self.shear_stress_mpa / self.max_shear_stress_mpa;
        let deflection = self.span_depth_ratio / self.allowable_span_depth_ratio;
        if flexure >= shear && flexure >= deflection {
            "Bending"
        } else if shear >= deflection {
            "Shear"
        } else {
            "Deflection"
        }
    }
}

/// Pick the smallest candidate that carries `required_mm2` in one layer.
///
/// At least two bars are always placed. When nothing fits the clear width
/// the largest candidate is used and a warning is added.
fn select_layer(
    required_mm2: f64,
    candidates: &[u32],
    clear_width_mm: f64,
    what: &str,
    warnings: &mut Vec<String>,
) -> BeamBars {
    let count_for =
        |diameter: u32| -> u32 { ((required_mm2 / bar_area_mm2(diameter)).ceil() as u32).max(2) };

    for &diameter in candidates {
        let count = count_for(diameter);
        let phi = f64::from(diameter);
        let gap = phi.max(MIN_CLEAR_BAR_GAP_MM);
        let needed = f64::from(count) * phi + f64::from(count - 1) * gap;
        if needed <= clear_width_mm {
            debug!(
                "{}: {} × Ø{} ({:.0} of {:.0} mm)",
                what, count, diameter, needed, clear_width_mm
            );
            return BeamBars {
                diameter_mm: diameter,
                count,
                area_provided_mm2: f64::from(count) * bar_area_mm2(diameter),
                is_fallback: false,
            };
        }
    }

    let diameter = candidates.last().copied().unwrap_or(default_bar_diameters()[0]);
    let count = count_for(diameter);
    warn!("{}: no single-layer arrangement fits, using {} × Ø{}", what, count, diameter);
    warnings.push(format!(
        "{}: {} × Ø{} does not fit in one layer within {:.0} mm; \
         use two layers or widen the section",
        what, count, diameter, clear_width_mm
    ));
    BeamBars {
        diameter_mm: diameter,
        count,
        area_provided_mm2: f64::from(count) * bar_area_mm2(diameter),
        is_fallback: true,
    }
}

fn floor_to_grid(spacing_mm: f64) -> f64 {
    (spacing_mm / SPACING_GRID_MM).floor() * SPACING_GRID_MM
}

/// Calculate flexure, shear and serviceability for a simply-supported beam.
///
/// Engineering shortfalls are reported through `warnings`; `Err` is only
/// returned for invalid input.
pub fn calculate(input: &BeamInput) -> CalcResult<BeamResult> {
    input.validate()?;

    let mut warnings = Vec::new();
    let b = input.width_mm;
    let d = input.effective_depth_mm();
    let d_prime = input.compression_steel_depth_mm();
    let fck = input.materials.concrete.fck();
    let fy = input.materials.steel.fy();
    let sigma_s = input.materials.design_steel_stress();

    let w = input.factored_load();
    let span = Meters::from(Millimeters(input.span_mm));
    let mu = KnM(w.0 * span.0 * span.0 / 8.0);
    let vu_kn = w.0 * span.0 / 2.0;

    // Flexure
    let mu_lim = KnM::from_nmm(LIMITING_MOMENT_FACTOR * fck * b * d * d);
    let compression_steel_required = mu > mu_lim;
    let (mut tension_required, compression_area) = if compression_steel_required {
        let excess = (mu - mu_lim).to_nmm();
        let asc = excess / (sigma_s * (d - d_prime));
        let ast1 = singly_reinforced_steel(mu_lim, b, d, &input.materials).area_mm2;
        warnings.push(format!(
            "Mu = {:.1} kN·m exceeds limiting moment {:.1} kN·m; \
             doubly reinforced section with Asc = {:.0} mm²",
            mu.0, mu_lim.0, asc
        ));
        (ast1 + asc, asc)
    } else {
        (singly_reinforced_steel(mu, b, d, &input.materials).area_mm2, 0.0)
    };

    let min_tension = 0.85 * b * d / fy;
    if tension_required < min_tension {
        debug!("{}: tension steel raised to minimum {:.0} mm²", input.label, min_tension);
        tension_required = min_tension;
    }

    let tension_bars = select_layer(
        tension_required,
        &input.bar_diameters_mm,
        input.clear_width_mm(),
        "Tension bars",
        &mut warnings,
    );
    if tension_bars.area_provided_mm2 > MAX_STEEL_RATIO * b * input.depth_mm {
        warnings.push(format!(
            "Tension steel {:.0} mm² exceeds 4% of the gross section; increase section size",
            tension_bars.area_provided_mm2
        ));
    }

    let top_bars = if compression_steel_required {
        select_layer(
            compression_area,
            &input.bar_diameters_mm,
            input.clear_width_mm(),
            "Compression bars",
            &mut warnings,
        )
    } else {
        let diameter = input
            .bar_diameters_mm
            .first()
            .copied()
            .unwrap_or(default_bar_diameters()[0]);
        BeamBars {
            diameter_mm: diameter,
            count: 2,
            area_provided_mm2: 2.0 * bar_area_mm2(diameter),
            is_fallback: false,
        }
    };

    // Shear
    let shear_stress = vu_kn * 1000.0 / (b * d);
    let pt = 100.0 * tension_bars.area_provided_mm2 / (b * d);
    let tau_c = concrete_shear_strength(pt, input.materials.concrete);
    let tau_c_max = input.materials.concrete.max_shear_stress();
    if shear_stress > tau_c_max {
        warnings.push(format!(
            "Shear stress {:.2} N/mm² exceeds τc,max {:.2} N/mm²; revise the section",
            shear_stress, tau_c_max
        ));
    }

    let vus_kn = vu_kn - tau_c * b * d / 1000.0;
    let asv = f64::from(STIRRUP_LEGS) * bar_area_mm2(input.stirrup_diameter_mm);
    let minimum_links_spacing = sigma_s * asv / (0.4 * b);
    let strength_spacing = if vus_kn > 0.0 {
        sigma_s * asv * d / (vus_kn * 1000.0)
    } else {
        minimum_links_spacing
    };
    let cap = (0.75 * d).min(MAX_STIRRUP_SPACING_MM);
    let stirrup_spacing = floor_to_grid(strength_spacing.min(minimum_links_spacing).min(cap));
    if stirrup_spacing < 75.0 {
        warnings.push(format!(
            "Stirrup spacing {:.0} mm is impractically close; \
             increase stirrup diameter or section size",
            stirrup_spacing
        ));
    }

    // Serviceability
    let span_depth_ratio = input.span_mm / d;
    if span_depth_ratio > BASIC_SPAN_DEPTH_RATIO {
        warnings.push(format!(
            "Deflection: span/depth ratio {:.1} exceeds allowable {:.1}; increase depth",
            span_depth_ratio, BASIC_SPAN_DEPTH_RATIO
        ));
    }

    info!(
        "{}: Mu = {:.1} kN·m, {} × Ø{} bottom, {} × Ø{} top, Ø{} @ {:.0} links",
        input.label,
        mu.0,
        tension_bars.count,
        tension_bars.diameter_mm,
        top_bars.count,
        top_bars.diameter_mm,
        input.stirrup_diameter_mm,
        stirrup_spacing
    );

    Ok(BeamResult {
        self_weight_kn_m: input.self_weight().0,
        factored_load_kn_m: w.0,
        factored_moment_knm: mu.0,
        factored_shear_kn: vu_kn,
        effective_depth_mm: d,
        limiting_moment_knm: mu_lim.0,
        tension_steel_required_mm2: tension_required,
        compression_steel_required,
        compression_steel_area_mm2: compression_area,
        anchorage: anchorage(tension_bars.diameter_mm, &input.materials),
        tension_bars,
        top_bars,
        shear_stress_mpa: shear_stress,
        concrete_shear_strength_mpa: tau_c,
        max_shear_stress_mpa: tau_c_max,
        stirrup_shear_kn: vus_kn,
        stirrups: Stirrups {
            diameter_mm: input.stirrup_diameter_mm,
            legs: STIRRUP_LEGS,
            spacing_mm: stirrup_spacing,
        },
        span_depth_ratio,
        allowable_span_depth_ratio: BASIC_SPAN_DEPTH_RATIO,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{ConcreteGrade, SteelGrade};
    use approx::assert_relative_eq;

    fn test_beam() -> BeamInput {
        BeamInput::new("Test Beam", 4000.0, 230.0, 450.0, 10.0, 10.0)
    }

    #[test]
    fn test_effective_depth() {
        // 450 − 25 − 8 − 32/2
        assert_relative_eq!(test_beam().effective_depth_mm(), 401.0);
    }

    #[test]
    fn test_factored_load_includes_self_weight() {
        let beam = test_beam();
        assert_relative_eq!(beam.self_weight().0, 2.5875, epsilon = 1e-9);
        assert_relative_eq!(beam.factored_load().0, 1.5 * 22.5875, epsilon = 1e-9);
    }

    #[test]
    fn test_singly_reinforced_beam() {
        let result = calculate(&test_beam()).unwrap();

        // Mu = wL²/8 = 33.88 × 16 / 8
        assert!((result.factored_moment_knm - 67.76).abs() < 0.01);
        assert!((result.factored_shear_kn - 67.76).abs() < 0.01);
        assert!(!result.compression_steel_required);
        assert_eq!(result.compression_steel_area_mm2, 0.0);

        // ~516 mm² → 5 × Ø12 fits 164 mm clear width
        assert!((result.tension_steel_required_mm2 - 516.2).abs() < 1.0);
        assert_eq!(result.tension_bars.diameter_mm, 12);
        assert_eq!(result.tension_bars.count, 5);
        assert_eq!(result.top_bars.count, 2);

        // Shear at pt ≈ 0.61% steps down to the 0.50 row
        assert_relative_eq!(result.concrete_shear_strength_mpa, 0.49);
        assert_eq!(result.stirrups.legs, 2);
        assert_eq!(result.stirrups.spacing_mm, 300.0);
        assert!(result.passes());
    }

    #[test]
    fn test_compression_steel_required() {
        let mut beam = BeamInput::new("Heavy", 6000.0, 230.0, 450.0, 20.0, 25.0);
        beam.materials = MaterialPair::new(ConcreteGrade::M20, SteelGrade::Fe415);
        let result = calculate(&beam).unwrap();

        assert!(result.factored_moment_knm > result.limiting_moment_knm);
        assert!(result.compression_steel_required);
        assert!(result.compression_steel_area_mm2 > 0.0);
        assert!((result.compression_steel_area_mm2 - 1676.7).abs() < 1.0);
        assert!(result.tension_steel_required_mm2 > result.compression_steel_area_mm2);
        assert!(result.warnings.iter().any(|w| w.contains("doubly reinforced")));
    }

    #[test]
    fn test_narrow_web_falls_back() {
        let mut beam = BeamInput::new("Heavy", 6000.0, 230.0, 450.0, 20.0, 25.0);
        beam.materials = MaterialPair::new(ConcreteGrade::M20, SteelGrade::Fe415);
        let result = calculate(&beam).unwrap();
        assert!(result.tension_bars.is_fallback);
        assert_eq!(result.tension_bars.diameter_mm, 32);
        assert!(!result.passes());
    }

    #[test]
    fn test_stirrup_spacing_capped() {
        let result = calculate(&test_beam()).unwrap();
        assert!(result.stirrups.spacing_mm <= (0.75 * result.effective_depth_mm).min(300.0));
        assert_eq!(result.stirrups.spacing_mm % 10.0, 0.0);
    }

    #[test]
    fn test_excess_shear_tightens_stirrups() {
        let light = calculate(&test_beam()).unwrap();
        let heavy = calculate(&BeamInput::new("Heavy", 4000.0, 230.0, 450.0, 40.0, 40.0)).unwrap();
        assert!(heavy.stirrup_shear_kn > 0.0);
        assert!(heavy.stirrups.spacing_mm < light.stirrups.spacing_mm);
    }

    #[test]
    fn test_slender_beam_warns() {
        let result = calculate(&BeamInput::new("Long", 10000.0, 230.0, 450.0, 2.0, 2.0)).unwrap();
        assert!(result.span_depth_ratio > 20.0);
        assert!(result.warnings.iter().any(|w| w.starts_with("Deflection")));
    }

    #[test]
    fn test_invalid_span() {
        let mut beam = test_beam();
        beam.span_mm = -5.0;
        assert!(calculate(&beam).is_err());
    }

    #[test]
    fn test_shallow_section_rejected() {
        let mut beam = test_beam();
        beam.depth_mm = 60.0;
        let err = calculate(&beam).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serialization() {
        let json = r#"{"label":"B-2","span_mm":5000,"width_mm":300,"depth_mm":500,
            "dead_load_kn_m":15,"live_load_kn_m":15}"#;
        let beam: BeamInput = serde_json::from_str(json).unwrap();
        assert_eq!(beam.cover_mm, 25.0);
        assert_eq!(beam.stirrup_diameter_mm, 8);
        let result = calculate(&beam).unwrap();
        assert_eq!(result.tension_bars.diameter_mm, 16);
        assert_eq!(result.tension_bars.count, 6);
    }
}
