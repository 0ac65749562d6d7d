//! # Unit Types
//!
//! Type-safe wrappers for the metric units used in reinforced concrete
//! design. These are plain `f64` newtypes: JSON stays clean (just numbers)
//! and the conversions that matter (mm ↔ m, kN·m ↔ N·mm) are explicit.
//!
//! ## Conventions
//!
//! - Geometry is entered in millimetres (mm)
//! - Spans are converted to metres (m) for moment calculation
//! - Area loads are kN/m², line loads kN/m
//! - Moments are kN·m (per metre width for slabs)
//! - Stresses are N/mm² (MPa)
//! - Steel areas are mm² (per metre width for slabs)
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::units::{Meters, Millimeters, KnM};
//!
//! let span: Meters = Millimeters(4500.0).into();
//! assert_eq!(span.0, 4.5);
//!
//! let moment = KnM(12.0);
//! assert_eq!(moment.to_nmm(), 12.0e6);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Load Units
// ============================================================================

/// Area load in kN/m²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerM2(pub f64);

/// Line load in kN/m
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerM(pub f64);

impl KnPerM2 {
    /// Self weight of a solid layer of given thickness and unit weight (kN/m³)
    pub fn from_layer(thickness: Meters, unit_weight_kn_m3: f64) -> Self {
        KnPerM2(thickness.0 * unit_weight_kn_m3)
    }
}

impl KnPerM {
    /// Self weight of a solid rectangular section (unit weight in kN/m³)
    pub fn from_section(width: Meters, depth: Meters, unit_weight_kn_m3: f64) -> Self {
        KnPerM(width.0 * depth.0 * unit_weight_kn_m3)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kN·m
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM(pub f64);

impl KnM {
    /// Convert to N·mm for use with stresses in N/mm² and lengths in mm
    pub fn to_nmm(self) -> f64 {
        self.0 * 1.0e6
    }

    /// Convert from N·mm
    pub fn from_nmm(nmm: f64) -> Self {
        KnM(nmm / 1.0e6)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(KnPerM2);
impl_arithmetic!(KnPerM);
impl_arithmetic!(KnM);
