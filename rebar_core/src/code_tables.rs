//! # Code Tables
//!
//! Load factors, moment coefficients, concrete shear strength and the other
//! limit-state constants the analyzers read. Everything here is immutable
//! data plus a lookup function; no table is evaluated with hidden branching.
//!
//! ## Lookup Policy
//!
//! | Table                   | Key               | Policy                                   |
//! |-------------------------|-------------------|------------------------------------------|
//! | One-way moment coeffs   | Support condition | Exact                                    |
//! | Two-way moment coeffs   | ly/lx             | Linear between 1.0..=1.75, stepped above |
//! | Concrete shear τc       | pt (%), grade     | Stepped down to breakpoint ≤ pt          |
//! | Deflection modification | Support condition | Exact                                    |
//!
//! Stepping down for τc is conservative: the value used never exceeds the
//! tabulated value at the actual steel percentage.

use serde::{Deserialize, Serialize};

use crate::design::SupportCondition;
use crate::materials::ConcreteGrade;

// ============================================================================
// Scalar Constants
// ============================================================================

/// Partial safety factor applied to all characteristic loads
pub const LOAD_FACTOR: f64 = 1.5;

/// Unit weight of reinforced concrete (kN/m³)
pub const CONCRETE_UNIT_WEIGHT_KN_M3: f64 = 25.0;

/// Span ratio ly/lx above which a slab spans one way
pub const ONE_WAY_RATIO_LIMIT: f64 = 2.0;

/// Ratio of negative (support) to positive (midspan) moment in two-way panels
pub const TWO_WAY_NEGATIVE_MOMENT_RATIO: f64 = 1.33;

/// Minimum slab steel as a fraction of gross section (high-yield bars)
pub const SLAB_MIN_STEEL_RATIO: f64 = 0.0012;

/// Maximum steel as a fraction of gross section
pub const MAX_STEEL_RATIO: f64 = 0.04;

/// Basic span/effective-depth ratio before support modification
pub const BASIC_SPAN_DEPTH_RATIO: f64 = 20.0;

/// Limiting moment factor: Mu,lim = 0.138 fck b d²
pub const LIMITING_MOMENT_FACTOR: f64 = 0.138;

/// Column longitudinal steel bounds as fractions of gross area
pub const COLUMN_MIN_STEEL_RATIO: f64 = 0.008;
pub const COLUMN_MAX_STEEL_RATIO: f64 = 0.06;

/// Column slenderness ratio below which the column is short
pub const SHORT_COLUMN_SLENDERNESS_LIMIT: f64 = 12.0;

// ============================================================================
// Moment Coefficients
// ============================================================================

/// Positive and negative bending moment coefficients (M = α w l²)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentCoefficients {
    /// Midspan (positive) coefficient
    pub positive: f64,
    /// Support (negative) coefficient
    pub negative: f64,
}

/// One-way slab moment coefficients by support condition
pub fn one_way_coefficients(support: SupportCondition) -> MomentCoefficients {
    match support {
        SupportCondition::Simple => MomentCoefficients {
            positive: 1.0 / 8.0,
            negative: 0.0,
        },
        SupportCondition::Fixed => MomentCoefficients {
            positive: 1.0 / 24.0,
            negative: 1.0 / 12.0,
        },
        SupportCondition::Continuous => MomentCoefficients {
            positive: 1.0 / 12.0,
            negative: 1.0 / 10.0,
        },
    }
}

/// Breakpoints of ly/lx for the two-way coefficient table
pub const TWO_WAY_RATIO_BREAKPOINTS: [f64; 7] = [1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.75];

/// Short-span positive coefficients αx at each breakpoint
const TWO_WAY_ALPHA_X: [f64; 7] = [0.0165, 0.0180, 0.0195, 0.0210, 0.0225, 0.0245, 0.0285];

/// Long-span positive coefficients αy at each breakpoint
const TWO_WAY_ALPHA_Y: [f64; 7] = [0.0165, 0.0155, 0.0145, 0.0138, 0.0131, 0.0125, 0.0112];

/// Coefficients used for ly/lx > 1.75
const TWO_WAY_ALPHA_X_BEYOND: f64 = 0.0320;
const TWO_WAY_ALPHA_Y_BEYOND: f64 = 0.0100;

/// Short- and long-span coefficients for a two-way panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoWayCoefficients {
    /// Short span (lx direction)
    pub short_span: MomentCoefficients,
    /// Long span (ly direction)
    pub long_span: MomentCoefficients,
}

/// Two-way moment coefficients for span ratio `ratio` = ly/lx.
///
/// Ratios at or below 1.0 use the square-panel row, ratios between
/// breakpoints up to 1.75 are interpolated linearly, and anything above 1.75
/// takes the final stepped row. Negative coefficients are
/// [`TWO_WAY_NEGATIVE_MOMENT_RATIO`] times the positive ones.
pub fn two_way_coefficients(ratio: f64) -> TwoWayCoefficients {
    let (alpha_x, alpha_y) = if ratio > TWO_WAY_RATIO_BREAKPOINTS[6] {
        (TWO_WAY_ALPHA_X_BEYOND, TWO_WAY_ALPHA_Y_BEYOND)
    } else {
        (
            interpolate(&TWO_WAY_RATIO_BREAKPOINTS, &TWO_WAY_ALPHA_X, ratio),
            interpolate(&TWO_WAY_RATIO_BREAKPOINTS, &TWO_WAY_ALPHA_Y, ratio),
        )
    };

    let with_negative = |positive: f64| MomentCoefficients {
        positive,
        negative: positive * TWO_WAY_NEGATIVE_MOMENT_RATIO,
    };

    TwoWayCoefficients {
        short_span: with_negative(alpha_x),
        long_span: with_negative(alpha_y),
    }
}

/// Piecewise-linear lookup, clamped to the end values.
fn interpolate(keys: &[f64], values: &[f64], x: f64) -> f64 {
    if x <= keys[0] {
        return values[0];
    }
    for i in 1..keys.len() {
        if (x - keys[i]).abs() < 1e-9 {
            return values[i];
        }
        if x < keys[i] {
            let t = (x - keys[i - 1]) / (keys[i] - keys[i - 1]);
            return values[i - 1] + t * (values[i] - values[i - 1]);
        }
    }
    values[values.len() - 1]
}

// ============================================================================
// Deflection
// ============================================================================

/// Span/depth modification factor for the support condition
pub fn support_modification_factor(support: SupportCondition) -> f64 {
    match support {
        SupportCondition::Simple => 1.0,
        SupportCondition::Fixed => 1.5,
        SupportCondition::Continuous => 1.3,
    }
}

// ============================================================================
// Concrete Shear Strength
// ============================================================================

/// Steel percentage breakpoints (100 As / bd) for the τc table
pub const SHEAR_PT_BREAKPOINTS: [f64; 13] = [
    0.15, 0.25, 0.50, 0.75, 1.00, 1.25, 1.50, 1.75, 2.00, 2.25, 2.50, 2.75, 3.00,
];

/// τc (N/mm²) columns for M20, M25, M30, M35 and M40-and-above
const SHEAR_STRENGTH_TABLE: [[f64; 5]; 13] = [
    [0.28, 0.29, 0.29, 0.29, 0.30],
    [0.36, 0.36, 0.37, 0.37, 0.38],
    [0.48, 0.49, 0.50, 0.50, 0.51],
    [0.56, 0.57, 0.59, 0.59, 0.60],
    [0.62, 0.64, 0.66, 0.67, 0.68],
    [0.67, 0.70, 0.71, 0.73, 0.74],
    [0.72, 0.74, 0.76, 0.78, 0.79],
    [0.75, 0.78, 0.80, 0.82, 0.84],
    [0.79, 0.82, 0.84, 0.86, 0.88],
    [0.81, 0.85, 0.88, 0.90, 0.92],
    [0.82, 0.88, 0.91, 0.93, 0.95],
    [0.82, 0.90, 0.94, 0.96, 0.98],
    [0.82, 0.92, 0.96, 0.99, 1.01],
];

/// Design shear strength of concrete τc (N/mm²).
///
/// `pt` is the tension steel percentage. The row used is the largest
/// breakpoint not exceeding `pt` (the first row below 0.15%).
pub fn concrete_shear_strength(pt: f64, grade: ConcreteGrade) -> f64 {
    let column = match grade {
        ConcreteGrade::M20 => 0,
        ConcreteGrade::M25 => 1,
        ConcreteGrade::M30 => 2,
        ConcreteGrade::M35 => 3,
        ConcreteGrade::M40 | ConcreteGrade::M45 | ConcreteGrade::M50 => 4,
    };
    let row = SHEAR_PT_BREAKPOINTS
        .iter()
        .rposition(|&bp| pt >= bp)
        .unwrap_or(0);
    SHEAR_STRENGTH_TABLE[row][column]
}
