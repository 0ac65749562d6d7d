//! # Compliance Validation
//!
//! Independent re-check of a finished slab design against code limits.
//!
//! Five rule groups are evaluated, always all of them, so the caller gets
//! the complete list of problems in one pass:
//!
//! | Group        | Error                                 | Warning                         |
//! |--------------|---------------------------------------|---------------------------------|
//! | Steel ratio  | main < 0.12% or > 4%                  | distribution < 0.12% or > 4%    |
//! | Spacing      | spacing above the code cap            | spacing below max(φ + 5, 25) mm |
//! | Cover        | cover < 25 mm                         | cover > 75 mm, or cover > 2φ    |
//! | Bar diameter | φ < 8 mm                              | φ > h/8                         |
//! | Thickness    | h < 100 mm, or h < 2c + φmain + φdist |                                 |
//!
//! A design is valid iff the error list is empty. Warnings never affect
//! validity.

use serde::{Deserialize, Serialize};

use crate::calculations::slab::SlabDesign;
use crate::code_tables::{MAX_STEEL_RATIO, SLAB_MIN_STEEL_RATIO};
use crate::rebar::{spacing_cap, BarChoice};

/// Smallest cover accepted (mm)
pub const MIN_COVER_MM: f64 = 25.0;

/// Cover above which a warning is raised (mm)
pub const MAX_COVER_MM: f64 = 75.0;

/// Smallest bar diameter accepted (mm)
pub const MIN_BAR_DIAMETER_MM: u32 = 8;

/// Thinnest slab accepted (mm)
pub const MIN_SLAB_THICKNESS_MM: f64 = 100.0;

/// Outcome of a compliance check
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty
    pub is_valid: bool,
    /// Code violations, in rule-group order
    pub errors: Vec<String>,
    /// Advisory notes, in rule-group order
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn from_findings(findings: Findings) -> Self {
        ValidationResult {
            is_valid: findings.errors.is_empty(),
            errors: findings.errors,
            warnings: findings.warnings,
        }
    }
}

#[derive(Default)]
struct Findings {
    errors: Vec<String>,
    warnings: Vec<String>,
}

/// Validate a finished slab design.
pub fn validate_slab(design: &SlabDesign) -> ValidationResult {
    let mut findings = Findings::default();
    let thickness = design.input.thickness_mm;
    let main = &design.main_bars.choice;
    let distribution = &design.distribution_bars.choice;

    check_steel_ratio(&mut findings, main, distribution, thickness);
    check_spacing(&mut findings, main, thickness);
    check_spacing(&mut findings, distribution, thickness);
    check_cover(&mut findings, design.input.cover_mm, main.diameter_mm);
    check_diameter(&mut findings, main, thickness);
    check_diameter(&mut findings, distribution, thickness);
    check_thickness(&mut findings, thickness, design.input.cover_mm, main, distribution);

    ValidationResult::from_findings(findings)
}

fn steel_ratio(choice: &BarChoice, thickness_mm: f64) -> f64 {
    choice.provided_area_mm2_per_m / (1000.0 * thickness_mm)
}

fn check_steel_ratio(
    findings: &mut Findings,
    main: &BarChoice,
    distribution: &BarChoice,
    thickness: f64,
) {
    let main_ratio = steel_ratio(main, thickness);
    if main_ratio < SLAB_MIN_STEEL_RATIO {
        findings.errors.push(format!(
            "Main steel ratio {:.3}% is below the minimum {:.2}%",
            main_ratio * 100.0,
            SLAB_MIN_STEEL_RATIO * 100.0
        ));
    } else if main_ratio > MAX_STEEL_RATIO {
        findings.errors.push(format!(
            "Main steel ratio {:.3}% exceeds the maximum {:.0}%",
            main_ratio * 100.0,
            MAX_STEEL_RATIO * 100.0
        ));
    }

    let distribution_ratio = steel_ratio(distribution, thickness);
    if distribution_ratio < SLAB_MIN_STEEL_RATIO {
        findings.warnings.push(format!(
            "Distribution steel ratio {:.3}% is below the minimum {:.2}%",
            distribution_ratio * 100.0,
            SLAB_MIN_STEEL_RATIO * 100.0
        ));
    } else if distribution_ratio > MAX_STEEL_RATIO {
        findings.warnings.push(format!(
            "Distribution steel ratio {:.3}% exceeds the maximum {:.0}%",
            distribution_ratio * 100.0,
            MAX_STEEL_RATIO * 100.0
        ));
    }
}

fn check_spacing(findings: &mut Findings, choice: &BarChoice, thickness: f64) {
    let cap = spacing_cap(choice.role, thickness);
    if choice.spacing_mm > cap {
        findings.errors.push(format!(
            "{} bar spacing {:.0} mm exceeds the maximum {:.0} mm",
            choice.role.display_name(),
            choice.spacing_mm,
            cap
        ));
    }

    let min_clear = (f64::from(choice.diameter_mm) + 5.0).max(25.0);
    if choice.spacing_mm < min_clear {
        findings.warnings.push(format!(
            "{} bar spacing {:.0} mm is below {:.0} mm; concrete placement may be difficult",
            choice.role.display_name(),
            choice.spacing_mm,
            min_clear
        ));
    }
}

fn check_cover(findings: &mut Findings, cover: f64, main_diameter_mm: u32) {
    if cover < MIN_COVER_MM {
        findings.errors.push(format!(
            "Cover {:.0} mm is below the minimum {:.0} mm",
            cover, MIN_COVER_MM
        ));
    }
    if cover > MAX_COVER_MM {
        findings.warnings.push(format!(
            "Cover {:.0} mm exceeds {:.0} mm; check for surface cracking",
            cover, MAX_COVER_MM
        ));
    }
    let twice_diameter = 2.0 * f64::from(main_diameter_mm);
    if cover > twice_diameter {
        findings.warnings.push(format!(
            "Cover {:.0} mm exceeds twice the main bar diameter ({:.0} mm)",
            cover, twice_diameter
        ));
    }
}

fn check_diameter(findings: &mut Findings, choice: &BarChoice, thickness: f64) {
    if choice.diameter_mm < MIN_BAR_DIAMETER_MM {
        findings.errors.push(format!(
            "{} bar diameter {} mm is below the minimum {} mm",
            choice.role.display_name(),
            choice.diameter_mm,
            MIN_BAR_DIAMETER_MM
        ));
    }
    let max_diameter = thickness / 8.0;
    if f64::from(choice.diameter_mm) > max_diameter {
        findings.warnings.push(format!(
            "{} bar diameter {} mm exceeds one eighth of the slab thickness ({:.1} mm)",
            choice.role.display_name(),
            choice.diameter_mm,
            max_diameter
        ));
    }
}

fn check_thickness(
    findings: &mut Findings,
    thickness: f64,
    cover: f64,
    main: &BarChoice,
    distribution: &BarChoice,
) {
    if thickness < MIN_SLAB_THICKNESS_MM {
        findings.errors.push(format!(
            "Slab thickness {:.0} mm is below the minimum {:.0} mm",
            thickness, MIN_SLAB_THICKNESS_MM
        ));
    }

    let stack = 2.0 * cover + f64::from(main.diameter_mm) + f64::from(distribution.diameter_mm);
    if thickness < stack {
        findings.errors.push(format!(
            "Slab thickness {:.0} mm cannot hold cover and bars \
             ({:.0} mm needed, short by {:.0} mm)",
            thickness,
            stack,
            stack - thickness
        ));
    }
}
