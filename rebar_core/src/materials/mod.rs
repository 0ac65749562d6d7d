//! # Materials Database
//!
//! Material grades and property lookups for reinforced concrete design.
//!
//! ## Material Types
//!
//! - **Concrete**: characteristic cube strength grades M20 through M50
//! - **Reinforcing steel**: high-yield deformed bars Fe415, Fe500, Fe550
//!
//! Properties are held in immutable grade-keyed tables so that every value
//! can be inspected and tested on its own.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::materials::{ConcreteGrade, SteelGrade};
//!
//! let concrete = ConcreteGrade::M25;
//! let steel = SteelGrade::Fe415;
//! println!("fck = {} MPa, fy = {} MPa", concrete.fck(), steel.fy());
//! assert_eq!(concrete.fck(), 25.0);
//! ```

pub mod concrete;
pub mod steel;

pub use concrete::{ConcreteGrade, ConcreteProperties};
pub use steel::{bar_area_mm2, bar_unit_weight_kg_per_m, SteelGrade, STANDARD_BAR_DIAMETERS};

use serde::{Deserialize, Serialize};

/// Concrete and steel grades used together by one design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialPair {
    /// Concrete grade (e.g. "M25")
    pub concrete: ConcreteGrade,
    /// Reinforcing steel grade (e.g. "Fe415")
    pub steel: SteelGrade,
}

impl MaterialPair {
    /// Create a new grade pair
    pub fn new(concrete: ConcreteGrade, steel: SteelGrade) -> Self {
        MaterialPair { concrete, steel }
    }

    /// Design stress in the steel at the ultimate limit state, 0.87 fy (N/mm²)
    pub fn design_steel_stress(&self) -> f64 {
        0.87 * self.steel.fy()
    }

    /// Display name (e.g., "M25 / Fe415")
    pub fn display_name(&self) -> String {
        format!("{} / {}", self.concrete, self.steel)
    }
}

impl Default for MaterialPair {
    fn default() -> Self {
        MaterialPair::new(ConcreteGrade::M25, SteelGrade::Fe415)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair() {
        let pair = MaterialPair::default();
        assert_eq!(pair.concrete, ConcreteGrade::M25);
        assert_eq!(pair.steel, SteelGrade::Fe415);
        assert_eq!(pair.display_name(), "M25 / Fe415");
    }

    #[test]
    fn test_design_steel_stress() {
        let pair = MaterialPair::new(ConcreteGrade::M20, SteelGrade::Fe500);
        assert!((pair.design_steel_stress() - 435.0).abs() < 1e-9);
    }

    #[test]
    fn test_pair_serialization() {
        let pair = MaterialPair::default();
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#"{"concrete":"M25","steel":"Fe415"}"#);
        let roundtrip: MaterialPair = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, roundtrip);
    }

    #[test]
    fn test_loose_grade_spellings_from_json() {
        let pair: MaterialPair =
            serde_json::from_str(r#"{"concrete":"m30","steel":"FE 500"}"#).unwrap();
        assert_eq!(pair, MaterialPair::new(ConcreteGrade::M30, SteelGrade::Fe500));
        let pair: MaterialPair =
            serde_json::from_str(r#"{"concrete":"25","steel":"550"}"#).unwrap();
        assert_eq!(pair, MaterialPair::new(ConcreteGrade::M25, SteelGrade::Fe550));
    }

    #[test]
    fn test_unknown_grade_in_json_is_rejected() {
        let err = serde_json::from_str::<MaterialPair>(r#"{"concrete":"M15","steel":"Fe415"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Unknown grade: M15"), "{}", err);
        let err: crate::errors::CalcError = err.into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
