//! # Structural Calculations
//!
//! Element analyzers for reinforced concrete members. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`slab`] - One-way / two-way slab panels, bar layout and compliance
//! - [`beam`] - Simply-supported rectangular beams (flexure + shear)
//! - [`column`] - Axially loaded short/slender columns

pub mod beam;
pub mod column;
pub mod slab;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::materials::MaterialPair;
use crate::units::KnM;

// Re-export commonly used types
pub use beam::{BeamInput, BeamResult};
pub use column::{ColumnInput, ColumnResult};
pub use slab::{SlabDesign, SlabInput, SlabResult};

/// Enum wrapper for all calculation types.
///
/// This allows heterogeneous design inputs to be read from one JSON
/// document while maintaining type safety.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Slab panel design
    Slab(SlabInput),
    /// Simply-supported beam design
    Beam(BeamInput),
    /// Axially loaded column design
    Column(ColumnInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Slab(s) => &s.label,
            CalculationItem::Beam(b) => &b.label,
            CalculationItem::Column(c) => &c.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Slab(_) => "Slab",
            CalculationItem::Beam(_) => "Beam",
            CalculationItem::Column(_) => "Column",
        }
    }
}

/// Tension steel for a singly reinforced rectangular section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlexureSteel {
    /// Required tension steel (mm²)
    pub area_mm2: f64,
    /// True when 4.6 Mu / (fck b d²) exceeded 1 and the root was clamped
    pub over_capacity: bool,
}

/// Required tension steel from the singly reinforced moment-capacity relation:
///
/// ```text
/// Ast = 0.5 fck/fy × [1 − √(1 − 4.6 Mu / (fck b d²))] × b d
/// ```
///
/// When the root argument goes negative the section cannot carry `mu` at
/// depth `d`; the argument is clamped at zero (the balanced-section ceiling)
/// and `over_capacity` is set so the caller can record a warning.
pub fn singly_reinforced_steel(
    mu: KnM,
    width_mm: f64,
    depth_mm: f64,
    materials: &MaterialPair,
) -> FlexureSteel {
    let fck = materials.concrete.fck();
    let fy = materials.steel.fy();
    let mu_nmm = mu.to_nmm().max(0.0);

    let root_arg = 1.0 - 4.6 * mu_nmm / (fck * width_mm * depth_mm * depth_mm);
    let over_capacity = root_arg < 0.0;
    if over_capacity {
        warn!(
            "Mu = {:.2} kN·m exceeds singly reinforced capacity at d = {:.0} mm; clamping",
            mu.0, depth_mm
        );
    }

    let area_mm2 = 0.5 * fck / fy * (1.0 - root_arg.max(0.0).sqrt()) * width_mm * depth_mm;
    FlexureSteel { area_mm2, over_capacity }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{ConcreteGrade, SteelGrade};

    #[test]
    fn test_zero_moment_needs_no_steel() {
        let steel = singly_reinforced_steel(KnM(0.0), 1000.0, 120.0, &MaterialPair::default());
        assert_eq!(steel.area_mm2, 0.0);
        assert!(!steel.over_capacity);
    }

    #[test]
    fn test_known_section() {
        // Mu = 28.48 kN·m/m, d = 120 mm, M25/Fe415 → ~731.7 mm²/m
        let steel = singly_reinforced_steel(KnM(28.48125), 1000.0, 120.0, &MaterialPair::default());
        assert!((steel.area_mm2 - 731.7).abs() < 1.0);
    }

    #[test]
    fn test_over_capacity_is_clamped() {
        let pair = MaterialPair::new(ConcreteGrade::M20, SteelGrade::Fe415);
        let steel = singly_reinforced_steel(KnM(200.0), 1000.0, 100.0, &pair);
        assert!(steel.over_capacity);
        // Clamped result equals 0.5 fck/fy b d
        let ceiling = 0.5 * 20.0 / 415.0 * 1000.0 * 100.0;
        assert!((steel.area_mm2 - ceiling).abs() < 1e-6);
    }

    #[test]
    fn test_item_tagging() {
        let json = r#"{"type":"Column","label":"C1","width_mm":300,"depth_mm":300,
            "unsupported_length_mm":3000,"factored_axial_load_kn":1200}"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.calc_type(), "Column");
        assert_eq!(item.label(), "C1");
    }
}
