//! Reinforcing Steel
//!
//! High-yield deformed bar grades and standard bar sizes.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Standard bar diameters stocked by suppliers (mm)
pub const STANDARD_BAR_DIAMETERS: [u32; 9] = [6, 8, 10, 12, 16, 20, 25, 32, 40];

/// Reinforcing steel grade by characteristic yield strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum SteelGrade {
    Fe415,
    Fe500,
    Fe550,
}

impl SteelGrade {
    /// All grades for UI selection
    pub const ALL: [SteelGrade; 3] = [SteelGrade::Fe415, SteelGrade::Fe500, SteelGrade::Fe550];

    /// Characteristic yield strength fy (N/mm²)
    pub fn fy(&self) -> f64 {
        match self {
            SteelGrade::Fe415 => 415.0,
            SteelGrade::Fe500 => 500.0,
            SteelGrade::Fe550 => 550.0,
        }
    }

    /// Grade code (e.g. "Fe415")
    pub fn code(&self) -> &'static str {
        match self {
            SteelGrade::Fe415 => "Fe415",
            SteelGrade::Fe500 => "Fe500",
            SteelGrade::Fe550 => "Fe550",
        }
    }

    /// Parse from common string representations ("Fe415", "FE 500", "550")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.to_uppercase().replace([' ', '-'], "");
        match normalized.trim_start_matches("FE") {
            "415" => Ok(SteelGrade::Fe415),
            "500" => Ok(SteelGrade::Fe500),
            "550" => Ok(SteelGrade::Fe550),
            _ => Err(CalcError::unknown_grade(s)),
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Cross-sectional area of one bar, πd²/4 (mm²)
pub fn bar_area_mm2(diameter_mm: u32) -> f64 {
    let d = f64::from(diameter_mm);
    PI * d * d / 4.0
}

/// Mass of one metre of bar, d²/162 (kg/m)
pub fn bar_unit_weight_kg_per_m(diameter_mm: u32) -> f64 {
    let d = f64::from(diameter_mm);
    d * d / 162.0
}

/// JSON accepts any form `from_str_flexible` does ("Fe415", "FE 500" or "550")
impl TryFrom<String> for SteelGrade {
    type Error = CalcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        SteelGrade::from_str_flexible(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_area() {
        assert!((bar_area_mm2(12) - 113.097).abs() < 0.01);
        assert!((bar_area_mm2(10) - 78.54).abs() < 0.01);
    }

    #[test]
    fn test_unit_weight() {
        // 16 mm bar weighs 1.58 kg/m
        assert!((bar_unit_weight_kg_per_m(16) - 1.580).abs() < 0.001);
    }

    #[test]
    fn test_fy() {
        assert_eq!(SteelGrade::Fe415.fy(), 415.0);
        assert_eq!(SteelGrade::Fe550.fy(), 550.0);
    }

    #[test]
    fn test_parse_flexible() {
        assert_eq!(SteelGrade::from_str_flexible("fe 500").unwrap(), SteelGrade::Fe500);
        assert_eq!(SteelGrade::from_str_flexible("415").unwrap(), SteelGrade::Fe415);
        assert!(SteelGrade::from_str_flexible("Fe250").is_err());
    }

    #[test]
    fn test_standard_diameters_ascending() {
        assert!(STANDARD_BAR_DIAMETERS.windows(2).all(|w| w[0] < w[1]));
    }
}
