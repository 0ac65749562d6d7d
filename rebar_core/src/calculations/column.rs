//! # Column Calculation
//!
//! Sizes longitudinal bars and lateral ties for an axially loaded
//! rectangular column.
//!
//! ## Assumptions
//!
//! - Axial capacity `Pu = 0.4 fck Ac + 0.67 fy Asc` with `Ac = Ag − Asc`
//! - Longitudinal steel kept inside 0.8% to 6% of the gross area
//! - Short column iff le / least dimension < 12; slender columns are flagged
//!   only, the additional slenderness moment is not computed
//! - Applied and minimum-eccentricity moments are reported, but biaxial
//!   interaction is not checked
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::calculations::column::{calculate, ColumnInput};
//!
//! let input = ColumnInput::new("C-1", 300.0, 300.0, 3000.0, 1200.0);
//! let result = calculate(&input).unwrap();
//!
//! assert!(result.is_short);
//! assert_eq!(result.main_bars.diameter_mm, 12);
//! assert_eq!(result.main_bars.count, 10);
//! assert_eq!(result.ties.diameter_mm, 8);
//! ```

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::code_tables::{
    COLUMN_MAX_STEEL_RATIO, COLUMN_MIN_STEEL_RATIO, SHORT_COLUMN_SLENDERNESS_LIMIT,
};
use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};
use crate::materials::{bar_area_mm2, MaterialPair};

/// Fewest bars in a rectangular column
pub const MIN_COLUMN_BARS: u32 = 4;

/// Most bars accepted before a larger diameter is tried
pub const MAX_COLUMN_BARS: u32 = 12;

/// Standard tie diameters (mm), ascending
pub const TIE_DIAMETERS_MM: [u32; 3] = [8, 10, 12];

/// Smallest tie diameter allowed before rounding (mm)
const MIN_TIE_DIAMETER_MM: f64 = 6.0;

/// Upper limit on tie pitch (mm)
const MAX_TIE_SPACING_MM: f64 = 300.0;

/// Grid tie pitch is floored to (mm)
const TIE_SPACING_GRID_MM: f64 = 25.0;

/// Floor on minimum eccentricity (mm)
const MIN_ECCENTRICITY_FLOOR_MM: f64 = 20.0;

fn default_effective_length_factor() -> f64 {
    1.0
}

fn default_cover_mm() -> f64 {
    40.0
}

fn default_bar_diameters() -> Vec<u32> {
    vec![12, 16, 20, 25, 32]
}

/// Input parameters for a reinforced concrete column.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "C-1",
///   "width_mm": 300.0,
///   "depth_mm": 300.0,
///   "unsupported_length_mm": 3000.0,
///   "factored_axial_load_kn": 1200.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInput {
    /// User label for this column (e.g., "C-1", "Interior Column")
    #[serde(default)]
    pub label: String,

    /// Section width b (mm)
    pub width_mm: f64,

    /// Section depth D (mm)
    pub depth_mm: f64,

    /// Unsupported length L (mm)
    pub unsupported_length_mm: f64,

    /// Effective length factor k (le = k L)
    #[serde(default = "default_effective_length_factor")]
    pub effective_length_factor: f64,

    /// Factored axial load Pu (kN)
    pub factored_axial_load_kn: f64,

    /// Factored applied moment Mu (kN·m)
    #[serde(default)]
    pub factored_moment_knm: f64,

    /// Concrete and steel grades
    #[serde(default)]
    pub materials: MaterialPair,

    /// Clear cover to ties (mm)
    #[serde(default = "default_cover_mm")]
    pub cover_mm: f64,

    /// Ascending candidate diameters for longitudinal bars (mm)
    #[serde(default = "default_bar_diameters")]
    pub bar_diameters_mm: Vec<u32>,
}

impl ColumnInput {
    /// Create an input with k = 1, no applied moment and default grades.
    pub fn new(
        label: impl Into<String>,
        width_mm: f64,
        depth_mm: f64,
        unsupported_length_mm: f64,
        factored_axial_load_kn: f64,
    ) -> Self {
        ColumnInput {
            label: label.into(),
            width_mm,
            depth_mm,
            unsupported_length_mm,
            effective_length_factor: default_effective_length_factor(),
            factored_axial_load_kn,
            factored_moment_knm: 0.0,
            materials: MaterialPair::default(),
            cover_mm: default_cover_mm(),
            bar_diameters_mm: default_bar_diameters(),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("width_mm", self.width_mm)?;
        require_positive("depth_mm", self.depth_mm)?;
        require_positive("unsupported_length_mm", self.unsupported_length_mm)?;
        require_non_negative("factored_axial_load_kn", self.factored_axial_load_kn)?;
        require_non_negative("cover_mm", self.cover_mm)?;

        if self.effective_length_factor <= 0.0 || self.effective_length_factor > 2.5 {
            return Err(CalcError::invalid_input(
                "effective_length_factor",
                self.effective_length_factor.to_string(),
                "Effective length factor must be between 0 and 2.5",
            ));
        }
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
        if 2.0 * self.cover_mm >= self.least_dimension_mm() {
            return Err(CalcError::invalid_input(
                "cover_mm",
                self.cover_mm.to_string(),
                "Cover leaves no core inside the section",
            ));
        }
        Ok(())
    }

    /// Gross area Ag = bD (mm²)
    pub fn gross_area_mm2(&self) -> f64 {
        self.width_mm * self.depth_mm
    }

    /// Least lateral dimension (mm)
    pub fn least_dimension_mm(&self) -> f64 {
        self.width_mm.min(self.depth_mm)
    }

    /// Effective length le = k L (mm)
    pub fn effective_length_mm(&self) -> f64 {
        self.effective_length_factor * self.unsupported_length_mm
    }

    /// Slenderness ratio le / least dimension
    pub fn slenderness_ratio(&self) -> f64 {
        self.effective_length_mm() / self.least_dimension_mm()
    }

    /// Minimum eccentricity max(L/500 + D/30, 20 mm)
    pub fn minimum_eccentricity_mm(&self) -> f64 {
        (self.unsupported_length_mm / 500.0 + self.least_dimension_mm() / 30.0)
            .max(MIN_ECCENTRICITY_FLOOR_MM)
    }
}

/// Longitudinal bar arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnBars {
    /// Bar diameter (mm)
    pub diameter_mm: u32,
    /// Number of bars (even)
    pub count: u32,
    /// Steel area provided (mm²)
    pub area_provided_mm2: f64,
    /// True when no candidate gave a count in [4, 12]
    pub is_fallback: bool,
}

/// Lateral tie arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ties {
    /// Tie diameter (mm)
    pub diameter_mm: u32,
    /// Tie pitch (mm)
    pub spacing_mm: f64,
}

/// Results from column calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "steel_required_mm2": 1119.2,
///   "main_bars": {
///     "diameter_mm": 12, "count": 10, "area_provided_mm2": 1131.0, "is_fallback": false
///   },
///   "ties": { "diameter_mm": 8, "spacing_mm": 175.0 },
///   "slenderness_ratio": 10.0,
///   "is_short": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnResult {
    /// Gross area (mm²)
    pub gross_area_mm2: f64,

    /// Steel area from the capacity relation before clamping (mm²)
    pub steel_unclamped_mm2: f64,

    /// Required steel after clamping to [0.8%, 6%] of Ag (mm²)
    pub steel_required_mm2: f64,

    /// Longitudinal bars
    pub main_bars: ColumnBars,

    /// Provided steel as a percentage of Ag
    pub steel_percentage: f64,

    /// Lateral ties
    pub ties: Ties,

    /// le / least dimension
    pub slenderness_ratio: f64,

    /// True when slenderness ratio < 12
    pub is_short: bool,

    /// Minimum eccentricity (mm)
    pub minimum_eccentricity_mm: f64,

    /// Design moment: larger of applied and Pu × e_min (kN·m)
    pub design_moment_knm: f64,

    /// Advisory notes and fallbacks, in calculation order
    pub warnings: Vec<String>,
}

impl ColumnResult {
    /// The column passes when the capacity relation needs no more than 6%
    /// steel and the bar arrangement did not fall back.
    pub fn passes(&self) -> bool {
        self.steel_unclamped_mm2 <= self.steel_required_mm2 && !self.main_bars.is_fallback
    }
}

fn round_up_to_even(count: u32) -> u32 {
    count + count % 2
}

fn select_column_bars(
    required_mm2: f64,
    candidates: &[u32],
    warnings: &mut Vec<String>,
) -> ColumnBars {
    let count_for =
        |diameter: u32| -> u32 { (required_mm2 / bar_area_mm2(diameter)).ceil() as u32 };

    for &diameter in candidates {
        let raw = count_for(diameter);
        if (MIN_COLUMN_BARS..=MAX_COLUMN_BARS).contains(&raw) {
            let count = round_up_to_even(raw);
            return ColumnBars {
                diameter_mm: diameter,
                count,
                area_provided_mm2: f64::from(count) * bar_area_mm2(diameter),
                is_fallback: false,
            };
        }
    }

    // Small demand: four of the smallest bar already cover it
    let smallest = candidates.first().copied().unwrap_or(12);
    if count_for(smallest) < MIN_COLUMN_BARS {
        return ColumnBars {
            diameter_mm: smallest,
            count: MIN_COLUMN_BARS,
            area_provided_mm2: f64::from(MIN_COLUMN_BARS) * bar_area_mm2(smallest),
            is_fallback: false,
        };
    }

    let largest = candidates.last().copied().unwrap_or(32);
    let count = round_up_to_even(count_for(largest).max(MIN_COLUMN_BARS));
    warn!("Column bars: {} × Ø{} exceeds {} bars", count, largest, MAX_COLUMN_BARS);
    warnings.push(format!(
        "No candidate diameter gives {} to {} bars; using {} × Ø{}",
        MIN_COLUMN_BARS, MAX_COLUMN_BARS, count, largest
    ));
    ColumnBars {
        diameter_mm: largest,
        count,
        area_provided_mm2: f64::from(count) * bar_area_mm2(largest),
        is_fallback: true,
    }
}

/// Tie diameter max(φ/4, 6) rounded up to 8, 10 or 12 mm
pub fn tie_diameter(main_diameter_mm: u32) -> u32 {
    let needed = (f64::from(main_diameter_mm) / 4.0).max(MIN_TIE_DIAMETER_MM);
    TIE_DIAMETERS_MM
        .iter()
        .copied()
        .find(|&d| f64::from(d) >= needed)
        .unwrap_or(TIE_DIAMETERS_MM[TIE_DIAMETERS_MM.len() - 1])
}

/// Tie pitch min(least dimension, 16φ, 300) floored to a 25 mm grid
pub fn tie_spacing(least_dimension_mm: f64, main_diameter_mm: u32) -> f64 {
    let pitch = least_dimension_mm
        .min(16.0 * f64::from(main_diameter_mm))
        .min(MAX_TIE_SPACING_MM);
    (pitch / TIE_SPACING_GRID_MM).floor() * TIE_SPACING_GRID_MM
}

/// Calculate longitudinal steel, ties and slenderness for a column.
pub fn calculate(input: &ColumnInput) -> CalcResult<ColumnResult> {
    input.validate()?;

    let mut warnings = Vec::new();
    let fck = input.materials.concrete.fck();
    let fy = input.materials.steel.fy();
    let ag = input.gross_area_mm2();
    let pu_n = input.factored_axial_load_kn * 1000.0;

    let steel_unclamped = (pu_n - 0.4 * fck * ag) / (0.67 * fy - 0.4 * fck);
    let min_steel = COLUMN_MIN_STEEL_RATIO * ag;
    let max_steel = COLUMN_MAX_STEEL_RATIO * ag;
    let steel_required = steel_unclamped.clamp(min_steel, max_steel);
    if steel_unclamped > max_steel {
        warnings.push(format!(
            "Axial load needs {:.0} mm² of steel, above 6% of the gross area; increase the section",
            steel_unclamped
        ));
    } else if steel_unclamped < min_steel {
        debug!("{}: minimum steel {:.0} mm² governs", input.label, min_steel);
    }

    let main_bars = select_column_bars(steel_required, &input.bar_diameters_mm, &mut warnings);
    let ties = Ties {
        diameter_mm: tie_diameter(main_bars.diameter_mm),
        spacing_mm: tie_spacing(input.least_dimension_mm(), main_bars.diameter_mm),
    };

    let slenderness_ratio = input.slenderness_ratio();
    let is_short = slenderness_ratio < SHORT_COLUMN_SLENDERNESS_LIMIT;
    if !is_short {
        warnings.push(format!(
            "Slender column (le/D = {:.1} ≥ {:.0}); \
             additional slenderness moment must be considered",
            slenderness_ratio, SHORT_COLUMN_SLENDERNESS_LIMIT
        ));
    }

    let e_min = input.minimum_eccentricity_mm();
    let eccentric_moment = input.factored_axial_load_kn * e_min / 1000.0;
    let design_moment = input.factored_moment_knm.abs().max(eccentric_moment);
    if design_moment > 0.0 {
        warnings.push(format!(
            "Design moment {:.1} kN·m (e_min = {:.0} mm); axial-moment interaction is not checked",
            design_moment, e_min
        ));
    }

    let steel_percentage = 100.0 * main_bars.area_provided_mm2 / ag;
    info!(
        "{}: {} × Ø{} ({:.2}%), ties Ø{} @ {:.0}",
        input.label,
        main_bars.count,
        main_bars.diameter_mm,
        steel_percentage,
        ties.diameter_mm,
        ties.spacing_mm
    );

    Ok(ColumnResult {
        gross_area_mm2: ag,
        steel_unclamped_mm2: steel_unclamped,
        steel_required_mm2: steel_required,
        main_bars,
        steel_percentage,
        ties,
        slenderness_ratio,
        is_short,
        minimum_eccentricity_mm: e_min,
        design_moment_knm: design_moment,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_column() -> ColumnInput {
        ColumnInput::new("Test Column", 300.0, 300.0, 3000.0, 1200.0)
    }

    #[test]
    fn test_slenderness_ratio() {
        assert_relative_eq!(test_column().slenderness_ratio(), 10.0);
    }

    #[test]
    fn test_column_calculation() {
        let result = calculate(&test_column()).unwrap();

        // (1200e3 − 0.4 × 25 × 90000) / (0.67 × 415 − 0.4 × 25)
        assert!((result.steel_required_mm2 - 1119.2).abs() < 0.5);
        assert_eq!(result.main_bars.diameter_mm, 12);
        assert_eq!(result.main_bars.count, 10);
        assert!(result.is_short);
        assert!(result.passes());
    }

    #[test]
    fn test_ties() {
        let result = calculate(&test_column()).unwrap();
        assert_eq!(result.ties.diameter_mm, 8);
        // min(300, 16 × 12, 300) = 192 → 175
        assert_eq!(result.ties.spacing_mm, 175.0);
        assert_eq!(tie_diameter(32), 8);
        assert_eq!(tie_diameter(40), 10);
        assert_eq!(tie_spacing(450.0, 25), 300.0);
    }

    #[test]
    fn test_light_load_uses_minimum_steel() {
        let result = calculate(&ColumnInput::new("Light", 300.0, 300.0, 3000.0, 100.0)).unwrap();
        assert!(result.steel_unclamped_mm2 < 0.0);
        assert_relative_eq!(result.steel_required_mm2, 720.0, epsilon = 1e-9);
        assert!(result.main_bars.count >= MIN_COLUMN_BARS);
        assert_eq!(result.main_bars.count % 2, 0);
    }

    #[test]
    fn test_overloaded_column_clamps_to_six_percent() {
        let result = calculate(&ColumnInput::new("Over", 230.0, 230.0, 3000.0, 4000.0)).unwrap();
        assert_relative_eq!(result.steel_required_mm2, 0.06 * 230.0 * 230.0, epsilon = 1e-9);
        assert!(!result.passes());
        assert!(result.warnings.iter().any(|w| w.contains("above 6%")));
    }

    #[test]
    fn test_slender_column_flagged() {
        let mut col = test_column();
        col.unsupported_length_mm = 4500.0;
        let result = calculate(&col).unwrap();
        assert!(!result.is_short);
        assert!(result.warnings.iter().any(|w| w.starts_with("Slender column")));
    }

    #[test]
    fn test_minimum_eccentricity() {
        let col = test_column();
        // 3000/500 + 300/30 = 16 → 20 mm floor
        assert_relative_eq!(col.minimum_eccentricity_mm(), 20.0);
        let result = calculate(&col).unwrap();
        assert_relative_eq!(result.design_moment_knm, 24.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_length() {
        let mut col = test_column();
        col.unsupported_length_mm = -5.0;
        assert!(calculate(&col).is_err());
    }

    #[test]
    fn test_serialization() {
        let col = test_column();
        let json = serde_json::to_string_pretty(&col).unwrap();
        let roundtrip: ColumnInput = serde_json::from_str(&json).unwrap();
        assert_eq!(col, roundtrip);
    }
}
