//! # Bar Selection
//!
//! Turns a required steel area into a constructible bar layout: diameter,
//! spacing and (with the panel extent) bar count, plus anchorage lengths.
//!
//! ## Selection Rule
//!
//! Candidate diameters are tried in ascending order. For each, the spacing
//! that delivers exactly the required area per metre width is
//!
//! ```text
//! s = 1000 × Aφ / Ast,req
//! ```
//!
//! The first diameter whose `s` lies inside the caller's band *and* under the
//! code cap for the bar's role is accepted, and `s` is floored to a 10 mm
//! grid (flooring spacing can only add steel). When no candidate fits, the
//! largest diameter is used at the minimum spacing and a warning is recorded.
//!
//! There is no randomness on this path: the same inputs always give the same
//! layout.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::design::{BarRole, DesignPreferences};
//! use rebar_core::rebar::select_bars;
//!
//! let prefs = DesignPreferences::default();
//! let selection = select_bars(BarRole::Main, 731.7, &prefs.diameters_mm, &prefs, 150.0);
//! assert_eq!(selection.choice.diameter_mm, 12);
//! assert_eq!(selection.choice.spacing_mm, 150.0);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::design::{BarRole, DesignPreferences};
use crate::materials::{bar_area_mm2, MaterialPair};

/// Grid that accepted spacings are floored to (mm)
pub const SPACING_GRID_MM: f64 = 10.0;

/// Diameters used for distribution bars when no preferred diameter qualifies
pub const DISTRIBUTION_FALLBACK_DIAMETERS: [u32; 2] = [8, 10];

/// Absolute lower bound on lap length (mm)
pub const MIN_LAP_LENGTH_MM: f64 = 200.0;

/// Lap length floor as a multiple of bar diameter
pub const MIN_LAP_DIAMETERS: f64 = 15.0;

/// A chosen bar diameter and spacing for one reinforcement layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChoice {
    /// Which layer this choice is for
    pub role: BarRole,
    /// Bar diameter (mm)
    pub diameter_mm: u32,
    /// Centre-to-centre spacing (mm)
    pub spacing_mm: f64,
    /// Steel area the layer had to deliver (mm²/m)
    pub required_area_mm2_per_m: f64,
    /// Steel area the layer delivers (mm²/m)
    pub provided_area_mm2_per_m: f64,
    /// True when no candidate satisfied the bands and a default was substituted
    pub is_fallback: bool,
}

/// Result of a bar selection run: the choice plus any warnings raised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSelection {
    pub choice: BarChoice,
    pub warnings: Vec<String>,
}

/// Code cap on spacing for a slab layer of given thickness (mm).
///
/// Main bars: min(3h, 300). Distribution bars: min(5h, 450).
pub fn spacing_cap(role: BarRole, thickness_mm: f64) -> f64 {
    match role {
        BarRole::Main => (3.0 * thickness_mm).min(300.0),
        BarRole::Distribution => (5.0 * thickness_mm).min(450.0),
    }
}

/// Steel area per metre width delivered by bars of `diameter_mm` at `spacing_mm`
pub fn provided_area_per_metre(diameter_mm: u32, spacing_mm: f64) -> f64 {
    bar_area_mm2(diameter_mm) * 1000.0 / spacing_mm
}

/// Number of bars needed to cover `extent_mm` at `spacing_mm`
pub fn bar_count(extent_mm: f64, spacing_mm: f64) -> u32 {
    (extent_mm / spacing_mm).ceil() as u32
}

fn floor_to_grid(spacing_mm: f64) -> f64 {
    (spacing_mm / SPACING_GRID_MM).floor() * SPACING_GRID_MM
}

/// Select diameter and spacing for a slab layer.
///
/// `candidates` must be ascending. The effective upper bound is the smaller
/// of the caller's maximum and the code cap; when the cap is the tighter of
/// the two a warning is recorded and the cap is applied.
pub fn select_bars(
    role: BarRole,
    required_area_mm2_per_m: f64,
    candidates: &[u32],
    prefs: &DesignPreferences,
    thickness_mm: f64,
) -> BarSelection {
    let cap = spacing_cap(role, thickness_mm);
    let mut warnings = Vec::new();

    let upper = prefs.max_spacing_mm.min(cap);
    if prefs.max_spacing_mm > cap {
        warnings.push(format!(
            "{} bars: preferred maximum spacing {:.0} mm exceeds the code cap of {:.0} mm; \
             cap applied",
            role.display_name(),
            prefs.max_spacing_mm,
            cap
        ));
    }
    let lower = prefs.min_spacing_mm;

    for &diameter_mm in candidates {
        let exact = bar_area_mm2(diameter_mm) * 1000.0 / required_area_mm2_per_m;
        if exact >= lower && exact <= upper {
            let spacing_mm = floor_to_grid(exact).max(lower);
            debug!(
                "{} bars: Ø{} @ {:.0} mm (exact {:.1} mm for {:.1} mm²/m)",
                role.display_name(),
                diameter_mm,
                spacing_mm,
                exact,
                required_area_mm2_per_m
            );
            return BarSelection {
                choice: BarChoice {
                    role,
                    diameter_mm,
                    spacing_mm,
                    required_area_mm2_per_m,
                    provided_area_mm2_per_m: provided_area_per_metre(diameter_mm, spacing_mm),
                    is_fallback: false,
                },
                warnings,
            };
        }
    }

    let diameter_mm = candidates.last().copied().unwrap_or(DISTRIBUTION_FALLBACK_DIAMETERS[1]);
    let spacing_mm = lower.min(upper);
    let provided = provided_area_per_metre(diameter_mm, spacing_mm);
    warn!(
        "{} bars: no diameter in {:?} fits {:.0}-{:.0} mm for {:.1} mm²/m, \
         falling back to Ø{} @ {:.0} mm",
        role.display_name(),
        candidates,
        lower,
        upper,
        required_area_mm2_per_m,
        diameter_mm,
        spacing_mm
    );
    warnings.push(format!(
        "{} bars: no preferred diameter delivers {:.0} mm²/m within {:.0}-{:.0} mm spacing; \
         using Ø{} @ {:.0} mm",
        role.display_name(),
        required_area_mm2_per_m,
        lower,
        upper,
        diameter_mm,
        spacing_mm
    ));
    if provided < required_area_mm2_per_m {
        warnings.push(format!(
            "{} bars: fallback provides {:.0} mm²/m, short of the {:.0} mm²/m required; \
             increase depth or bar size",
            role.display_name(),
            provided,
            required_area_mm2_per_m
        ));
    }

    BarSelection {
        choice: BarChoice {
            role,
            diameter_mm,
            spacing_mm,
            required_area_mm2_per_m,
            provided_area_mm2_per_m: provided,
            is_fallback: true,
        },
        warnings,
    }
}

/// Select main bars from the caller's preferred diameters.
pub fn select_main_bars(
    required_area_mm2_per_m: f64,
    prefs: &DesignPreferences,
    thickness_mm: f64,
) -> BarSelection {
    select_bars(
        BarRole::Main,
        required_area_mm2_per_m,
        &prefs.diameters_mm,
        prefs,
        thickness_mm,
    )
}

/// Select distribution bars no larger than the chosen main bar.
///
/// Falls back to Ø8/Ø10 when none of the preferred diameters qualify.
pub fn select_distribution_bars(
    required_area_mm2_per_m: f64,
    prefs: &DesignPreferences,
    thickness_mm: f64,
    main_diameter_mm: u32,
) -> BarSelection {
    let mut candidates: Vec<u32> = prefs
        .diameters_mm
        .iter()
        .copied()
        .filter(|&d| d <= main_diameter_mm)
        .collect();
    if candidates.is_empty() {
        candidates = DISTRIBUTION_FALLBACK_DIAMETERS.to_vec();
    }
    select_bars(BarRole::Distribution, required_area_mm2_per_m, &candidates, prefs, thickness_mm)
}

/// Development and lap lengths for one bar size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchorage {
    /// Bar diameter (mm)
    pub diameter_mm: u32,
    /// Development length Ld (mm)
    pub development_length_mm: f64,
    /// Lap splice length (mm)
    pub lap_length_mm: f64,
}

/// Development length Ld = φ σs / (4 τbd) with σs = 0.87 fy (mm)
pub fn development_length(diameter_mm: u32, materials: &MaterialPair) -> f64 {
    f64::from(diameter_mm) * materials.design_steel_stress()
        / (4.0 * materials.concrete.bond_stress())
}

/// Lap length = max(Ld, 15φ, 200 mm)
pub fn lap_length(diameter_mm: u32, materials: &MaterialPair) -> f64 {
    development_length(diameter_mm, materials)
        .max(MIN_LAP_DIAMETERS * f64::from(diameter_mm))
        .max(MIN_LAP_LENGTH_MM)
}

/// Development and lap length for a bar size
pub fn anchorage(diameter_mm: u32, materials: &MaterialPair) -> Anchorage {
    Anchorage {
        diameter_mm,
        development_length_mm: development_length(diameter_mm, materials),
        lap_length_mm: lap_length(diameter_mm, materials),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{ConcreteGrade, SteelGrade};

    fn prefs() -> DesignPreferences {
        DesignPreferences::default()
    }

    #[test]
    fn test_spacing_caps() {
        assert_eq!(spacing_cap(BarRole::Main, 150.0), 300.0);
        assert_eq!(spacing_cap(BarRole::Main, 90.0), 270.0);
        assert_eq!(spacing_cap(BarRole::Distribution, 150.0), 450.0);
        assert_eq!(spacing_cap(BarRole::Distribution, 80.0), 400.0);
    }

    #[test]
    fn test_first_fitting_diameter_wins() {
        // Ø10 would need ~107 mm (below the 150 mm minimum); Ø12 gives ~154.6 mm
        let sel = select_bars(BarRole::Main, 731.7, &[10, 12, 16, 20], &prefs(), 150.0);
        assert_eq!(sel.choice.diameter_mm, 12);
        assert_eq!(sel.choice.spacing_mm, 150.0);
        assert!(!sel.choice.is_fallback);
        assert!(sel.warnings.is_empty());
    }

    #[test]
    fn test_floored_spacing_never_reduces_steel() {
        let required = 388.9;
        let sel = select_bars(BarRole::Distribution, required, &[10, 12], &prefs(), 150.0);
        assert_eq!(sel.choice.diameter_mm, 10);
        assert_eq!(sel.choice.spacing_mm, 200.0);
        assert!(sel.choice.provided_area_mm2_per_m >= required);
    }

    #[test]
    fn test_fallback_to_largest_at_min_spacing() {
        // 5000 mm²/m cannot be delivered by Ø20 at >= 150 mm
        let sel = select_bars(BarRole::Main, 5000.0, &[10, 12, 16, 20], &prefs(), 300.0);
        assert!(sel.choice.is_fallback);
        assert_eq!(sel.choice.diameter_mm, 20);
        assert_eq!(sel.choice.spacing_mm, 150.0);
        assert_eq!(sel.warnings.len(), 2);
    }

    #[test]
    fn test_cap_wins_over_preference() {
        // 80 mm slab: main cap = 240 mm, below the preferred 300 mm maximum
        let sel = select_bars(BarRole::Main, 180.0, &[8, 10], &prefs(), 80.0);
        assert!(sel.choice.spacing_mm <= 240.0);
        assert!(sel.warnings.iter().any(|w| w.contains("cap applied")));
    }

    #[test]
    fn test_minimum_band_not_on_grid() {
        let p = DesignPreferences {
            min_spacing_mm: 125.0,
            ..Default::default()
        };
        // Ø10 exact spacing 128 mm floors to 120 mm, lifted back to the 125 mm minimum
        let required = bar_area_mm2(10) * 1000.0 / 128.0;
        let sel = select_bars(BarRole::Main, required, &[10], &p, 150.0);
        assert_eq!(sel.choice.spacing_mm, 125.0);
        assert!(sel.choice.provided_area_mm2_per_m >= required);
    }

    #[test]
    fn test_fallback_keeps_off_grid_minimum() {
        let p = DesignPreferences {
            min_spacing_mm: 125.0,
            ..Default::default()
        };
        let sel = select_bars(BarRole::Main, 5000.0, &[10, 12, 16, 20], &p, 200.0);
        assert!(sel.choice.is_fallback);
        assert_eq!(sel.choice.diameter_mm, 20);
        assert_eq!(sel.choice.spacing_mm, 125.0);
        assert!(sel.choice.spacing_mm >= p.min_spacing_mm);
    }

    #[test]
    fn test_fallback_uses_cap_below_minimum() {
        let p = DesignPreferences {
            min_spacing_mm: 275.0,
            ..Default::default()
        };
        // 90 mm slab: main cap 270 mm sits below the 275 mm minimum
        let sel = select_bars(BarRole::Main, 5000.0, &[10, 12], &p, 90.0);
        assert!(sel.choice.is_fallback);
        assert_eq!(sel.choice.spacing_mm, 270.0);
    }

    #[test]
    fn test_distribution_restricted_to_main_size() {
        let sel = select_distribution_bars(200.0, &prefs(), 150.0, 12);
        assert!(sel.choice.diameter_mm <= 12);
    }

    #[test]
    fn test_distribution_fallback_diameters() {
        let p = DesignPreferences {
            diameters_mm: vec![16, 20],
            ..Default::default()
        };
        let sel = select_distribution_bars(200.0, &p, 150.0, 12);
        assert!(DISTRIBUTION_FALLBACK_DIAMETERS.contains(&sel.choice.diameter_mm));
    }

    #[test]
    fn test_selection_is_repeatable() {
        let a = select_main_bars(642.0, &prefs(), 175.0);
        let b = select_main_bars(642.0, &prefs(), 175.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_bar_count_rounds_up() {
        assert_eq!(bar_count(10000.0, 150.0), 67);
        assert_eq!(bar_count(15000.0, 200.0), 75);
    }

    #[test]
    fn test_development_and_lap_length() {
        let m = MaterialPair::new(ConcreteGrade::M25, SteelGrade::Fe415);
        // Ld = 12 × 361.05 / (4 × 2.24) = 483.6 mm
        let ld = development_length(12, &m);
        assert!((ld - 483.6).abs() < 0.1);
        assert_eq!(lap_length(12, &m), ld);
        // Short Ld on a small bar is lifted to the 200 mm floor
        let strong = MaterialPair::new(ConcreteGrade::M50, SteelGrade::Fe415);
        assert!(development_length(6, &strong) < 200.0);
        assert_eq!(lap_length(6, &strong), 200.0);
    }
}
