//! Concrete Grades
//!
//! Characteristic strength and the grade-dependent design stresses used by
//! the anchorage and shear checks. Values follow the limit-state tables for
//! deformed bars (bond stress already includes the 60% increase over plain
//! bars).

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Concrete grade by characteristic cube strength (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ConcreteGrade {
    M20,
    M25,
    M30,
    M35,
    M40,
    M45,
    M50,
}

/// Grade-dependent concrete properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteProperties {
    /// Characteristic compressive strength fck (N/mm²)
    pub fck_mpa: f64,
    /// Design bond stress for deformed bars in tension τbd (N/mm²)
    pub bond_stress_mpa: f64,
    /// Maximum shear stress τc,max (N/mm²)
    pub max_shear_stress_mpa: f64,
}

static CONCRETE_TABLE: Lazy<HashMap<ConcreteGrade, ConcreteProperties>> = Lazy::new(|| {
    let row = |fck_mpa, bond_stress_mpa, max_shear_stress_mpa| ConcreteProperties {
        fck_mpa,
        bond_stress_mpa,
        max_shear_stress_mpa,
    };
    HashMap::from([
        (ConcreteGrade::M20, row(20.0, 1.92, 2.8)),
        (ConcreteGrade::M25, row(25.0, 2.24, 3.1)),
        (ConcreteGrade::M30, row(30.0, 2.40, 3.5)),
        (ConcreteGrade::M35, row(35.0, 2.72, 3.7)),
        (ConcreteGrade::M40, row(40.0, 3.04, 4.0)),
        (ConcreteGrade::M45, row(45.0, 3.04, 4.0)),
        (ConcreteGrade::M50, row(50.0, 3.04, 4.0)),
    ])
});

impl ConcreteGrade {
    /// All grades for UI selection and table checks
    pub const ALL: [ConcreteGrade; 7] = [
        ConcreteGrade::M20,
        ConcreteGrade::M25,
        ConcreteGrade::M30,
        ConcreteGrade::M35,
        ConcreteGrade::M40,
        ConcreteGrade::M45,
        ConcreteGrade::M50,
    ];

    /// Full property row for this grade
    pub fn properties(&self) -> ConcreteProperties {
        // Every variant is seeded in CONCRETE_TABLE
        CONCRETE_TABLE[self]
    }

    /// Characteristic compressive strength fck (N/mm²)
    pub fn fck(&self) -> f64 {
        self.properties().fck_mpa
    }

    /// Design bond stress τbd for deformed bars (N/mm²)
    pub fn bond_stress(&self) -> f64 {
        self.properties().bond_stress_mpa
    }

    /// Maximum nominal shear stress τc,max (N/mm²)
    pub fn max_shear_stress(&self) -> f64 {
        self.properties().max_shear_stress_mpa
    }

    /// Grade code (e.g. "M25")
    pub fn code(&self) -> &'static str {
        match self {
            ConcreteGrade::M20 => "M20",
            ConcreteGrade::M25 => "M25",
            ConcreteGrade::M30 => "M30",
            ConcreteGrade::M35 => "M35",
            ConcreteGrade::M40 => "M40",
            ConcreteGrade::M45 => "M45",
            ConcreteGrade::M50 => "M50",
        }
    }

    /// Parse from common string representations ("M25", "m25", "25")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase();
        let digits = normalized.trim_start_matches('M');
        ConcreteGrade::ALL
            .into_iter()
            .find(|g| g.code()[1..] == *digits)
            .ok_or_else(|| CalcError::unknown_grade(s))
    }
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// JSON accepts any form `from_str_flexible` does ("M25", "m25" or "25")
impl TryFrom<String> for ConcreteGrade {
    type Error = CalcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ConcreteGrade::from_str_flexible(&s)
    }
}
