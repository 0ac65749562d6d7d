//! # Design Vocabulary
//!
//! Small types shared by the analyzers, the bar selector, the validator and
//! the optimizer: support conditions, reinforcement roles and the caller's
//! bar/spacing preferences.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Edge support condition of a slab panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SupportCondition {
    /// Simply supported on all edges
    #[default]
    Simple,
    /// Fully fixed (restrained) edges
    Fixed,
    /// Continuous over supports
    Continuous,
}

impl SupportCondition {
    /// All support conditions for UI selection
    pub const ALL: [SupportCondition; 3] = [
        SupportCondition::Simple,
        SupportCondition::Fixed,
        SupportCondition::Continuous,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportCondition::Simple => "Simply supported",
            SupportCondition::Fixed => "Fixed",
            SupportCondition::Continuous => "Continuous",
        }
    }
}

/// Role a layer of bars plays in a slab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarRole {
    /// Main (primary bending) reinforcement
    Main,
    /// Distribution (secondary) reinforcement
    Distribution,
}

impl BarRole {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BarRole::Main => "Main",
            BarRole::Distribution => "Distribution",
        }
    }
}

/// Caller-specified bar diameters and spacing band.
///
/// ## JSON Example
///
/// ```json
/// {
///   "diameters_mm": [10, 12, 16, 20],
///   "min_spacing_mm": 150.0,
///   "max_spacing_mm": 300.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignPreferences {
    /// Allowed bar diameters in ascending order (mm)
    pub diameters_mm: Vec<u32>,

    /// Smallest acceptable centre-to-centre spacing (mm)
    pub min_spacing_mm: f64,

    /// Largest acceptable centre-to-centre spacing (mm)
    pub max_spacing_mm: f64,
}

impl Default for DesignPreferences {
    fn default() -> Self {
        DesignPreferences {
            diameters_mm: vec![10, 12, 16, 20],
            min_spacing_mm: 150.0,
            max_spacing_mm: 300.0,
        }
    }
}

impl DesignPreferences {
    /// Validate preference values.
    pub fn validate(&self) -> CalcResult<()> {
        if self.diameters_mm.is_empty() {
            return Err(CalcError::missing_field("preferences.diameters_mm"));
        }
        if self.diameters_mm.contains(&0) {
            return Err(CalcError::invalid_input(
                "preferences.diameters_mm",
                format!("{:?}", self.diameters_mm),
                "Bar diameters must be positive",
            ));
        }
        if !self.diameters_mm.windows(2).all(|w| w[0] < w[1]) {
            return Err(CalcError::invalid_input(
                "preferences.diameters_mm",
                format!("{:?}", self.diameters_mm),
                "Bar diameters must be listed in strictly ascending order",
            ));
        }
        if self.min_spacing_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "preferences.min_spacing_mm",
                self.min_spacing_mm.to_string(),
                "Minimum spacing must be positive",
            ));
        }
        if self.max_spacing_mm < self.min_spacing_mm {
            return Err(CalcError::invalid_input(
                "preferences.max_spacing_mm",
                self.max_spacing_mm.to_string(),
                "Maximum spacing must not be less than minimum spacing",
            ));
        }
        Ok(())
    }

    /// Smallest allowed diameter (mm)
    pub fn smallest_diameter(&self) -> u32 {
        self.diameters_mm.first().copied().unwrap_or(10)
    }

    /// Largest allowed diameter (mm)
    pub fn largest_diameter(&self) -> u32 {
        self.diameters_mm.last().copied().unwrap_or(20)
    }
}
