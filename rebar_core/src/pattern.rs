//! # Shape Classification and Opening Trimmers
//!
//! Classifies a slab boundary polygon by its vertex count and corner
//! pattern, and sizes trimmer bars around openings.
//!
//! ## Shapes
//!
//! | Shape       | Vertices | Corners                                      | Complexity |
//! |-------------|----------|----------------------------------------------|------------|
//! | Rectangular | 4        | 4 × 90°                                      | Simple     |
//! | L-shape     | 6        | 5 × 90°, 1 × 270°                            | Moderate   |
//! | T-shape     | 8        | 6 × 90°, 2 × 270°, reflex corners not adjacent | Moderate |
//! | Irregular   | any      | anything else                                | Complex    |
//!
//! Angles are matched within ±5°. The T-shape test is a coarse heuristic:
//! a Z-shaped outline has the same corner pattern.
//!
//! ## Openings
//!
//! | Size (mm)     | Trimmers | Extension beyond opening | Detailed analysis |
//! |---------------|----------|--------------------------|-------------------|
//! | < 500         | 2 × Ø12  | size + 600               | no                |
//! | 500 to 1500   | 4 × Ø16  | size + 1000              | no                |
//! | > 1500        | 6 × Ø20  | size + 1500              | yes               |

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};

/// Angle tolerance for corner matching (degrees)
pub const ANGLE_TOLERANCE_DEG: f64 = 5.0;

/// Upper bound of the small-opening bracket (mm, exclusive)
pub const SMALL_OPENING_LIMIT_MM: f64 = 500.0;

/// Upper bound of the medium-opening bracket (mm, inclusive)
pub const MEDIUM_OPENING_LIMIT_MM: f64 = 1500.0;

/// A point on the slab boundary (mm)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }
}

/// Recognised outline families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Rectangular,
    LShape,
    TShape,
    Irregular,
}

impl ShapeType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeType::Rectangular => "Rectangular",
            ShapeType::LShape => "L-shape",
            ShapeType::TShape => "T-shape",
            ShapeType::Irregular => "Irregular",
        }
    }
}

/// Layout difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

/// Axis-aligned extent of the outline (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Outcome of shape classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeAnalysis {
    pub shape: ShapeType,
    pub complexity: Complexity,
    /// Distinct vertices (a repeated closing point is dropped)
    pub vertex_count: usize,
    /// Enclosed area (mm²)
    pub area_mm2: f64,
    pub bounding_box: BoundingBox,
    /// Interior angle at each vertex (degrees), in input order
    pub interior_angles_deg: Vec<f64>,
    /// Indices of re-entrant (≈270°) corners
    pub reentrant_corners: Vec<usize>,
    /// Layout advice
    pub suggestions: Vec<String>,
}

/// Twice the signed area; positive for counter-clockwise winding.
fn doubled_signed_area(points: &[Point2D]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum()
}

fn interior_angles(points: &[Point2D], winding: f64) -> Vec<f64> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let prev = points[(i + n - 1) % n];
            let here = points[i];
            let next = points[(i + 1) % n];
            let (ax, ay) = (here.x - prev.x, here.y - prev.y);
            let (bx, by) = (next.x - here.x, next.y - here.y);
            let turn = (ax * by - ay * bx).atan2(ax * bx + ay * by).to_degrees();
            180.0 - winding * turn
        })
        .collect()
}

fn near(angle: f64, target: f64) -> bool {
    (angle - target).abs() <= ANGLE_TOLERANCE_DEG
}

fn bounding_box(points: &[Point2D]) -> BoundingBox {
    points.iter().fold(
        BoundingBox {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        },
        |bb, p| BoundingBox {
            min_x: bb.min_x.min(p.x),
            min_y: bb.min_y.min(p.y),
            max_x: bb.max_x.max(p.x),
            max_y: bb.max_y.max(p.y),
        },
    )
}

/// Classify a closed boundary polygon.
///
/// Points are taken in order with either winding. A final point equal to
/// the first is ignored.
///
/// # Example
///
/// ```rust
/// use rebar_core::pattern::{classify_shape, Point2D, ShapeType};
///
/// let outline = [
///     Point2D::new(0.0, 0.0),
///     Point2D::new(6000.0, 0.0),
///     Point2D::new(6000.0, 3000.0),
///     Point2D::new(3000.0, 3000.0),
///     Point2D::new(3000.0, 6000.0),
///     Point2D::new(0.0, 6000.0),
/// ];
/// let analysis = classify_shape(&outline).unwrap();
/// assert_eq!(analysis.shape, ShapeType::LShape);
/// assert_eq!(analysis.reentrant_corners, vec![3]);
/// ```
pub fn classify_shape(points: &[Point2D]) -> CalcResult<ShapeAnalysis> {
    let mut points = points.to_vec();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    if points.len() < 3 {
        return Err(CalcError::invalid_input(
            "points",
            points.len().to_string(),
            "A boundary needs at least 3 distinct points",
        ));
    }
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(CalcError::invalid_input("points", "non-finite", "Coordinates must be finite"));
    }

    let doubled_area = doubled_signed_area(&points);
    if doubled_area == 0.0 {
        return Err(CalcError::invalid_input("points", "0", "Boundary encloses no area"));
    }
    let winding = doubled_area.signum();
    let angles = interior_angles(&points, winding);

    let right = angles.iter().filter(|&&a| near(a, 90.0)).count();
    let reentrant: Vec<usize> = angles
        .iter()
        .enumerate()
        .filter(|(_, a)| near(**a, 270.0))
        .map(|(i, _)| i)
        .collect();
    let n = points.len();

    let shape = match (n, right, reentrant.as_slice()) {
        (4, 4, []) => ShapeType::Rectangular,
        (6, 5, [_]) => ShapeType::LShape,
        (8, 6, [a, b]) if b - a != 1 && !(*a == 0 && *b == n - 1) => ShapeType::TShape,
        _ => ShapeType::Irregular,
    };

    let (complexity, suggestions) = match shape {
        ShapeType::Rectangular => (
            Complexity::Simple,
            vec!["Use a standard orthogonal bar mesh".to_string()],
        ),
        ShapeType::LShape => (
            Complexity::Moderate,
            vec![
                "Decompose into two rectangular panels at the re-entrant corner".to_string(),
                "Add diagonal corner bars at the re-entrant corner".to_string(),
            ],
        ),
        ShapeType::TShape => (
            Complexity::Moderate,
            vec![
                "Decompose into three rectangular panels at the re-entrant corners".to_string(),
                "Add diagonal corner bars at both re-entrant corners".to_string(),
            ],
        ),
        ShapeType::Irregular => (
            Complexity::Complex,
            vec![
                "Consider a radial/circumferential bar layout".to_string(),
                "Verify with finite element analysis".to_string(),
            ],
        ),
    };

    Ok(ShapeAnalysis {
        shape,
        complexity,
        vertex_count: n,
        area_mm2: doubled_area.abs() / 2.0,
        bounding_box: bounding_box(&points),
        interior_angles_deg: angles,
        reentrant_corners: reentrant,
        suggestions,
    })
}

/// An opening through the slab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub id: String,
    /// Governing opening dimension (mm)
    pub size_mm: f64,
    pub center: Point2D,
}

/// Trimmer bars placed around one opening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningReinforcement {
    pub opening_id: String,
    pub trimmer_bar_diameter_mm: u32,
    /// Trimmer bars per opening
    pub trimmer_bar_count: u32,
    /// Distance trimmers run past the opening edge (mm)
    pub extension_mm: f64,
    pub requires_detailed_analysis: bool,
}

/// Size trimmer bars for an opening by size bracket.
pub fn opening_reinforcement(opening: &Opening) -> CalcResult<OpeningReinforcement> {
    require_positive("size_mm", opening.size_mm)?;
    let size = opening.size_mm;

    let (diameter, count, extra, detailed) = if size < SMALL_OPENING_LIMIT_MM {
        (12, 2, 600.0, false)
    } else if size <= MEDIUM_OPENING_LIMIT_MM {
        (16, 4, 1000.0, false)
    } else {
        (20, 6, 1500.0, true)
    };

    Ok(OpeningReinforcement {
        opening_id: opening.id.clone(),
        trimmer_bar_diameter_mm: diameter,
        trimmer_bar_count: count,
        extension_mm: size + extra,
        requires_detailed_analysis: detailed,
    })
}

/// Size trimmers for every opening, in input order.
pub fn reinforce_openings(openings: &[Opening]) -> CalcResult<Vec<OpeningReinforcement>> {
    openings.iter().map(opening_reinforcement).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2D> {
        coords.iter().map(|&(x, y)| Point2D::new(x, y)).collect()
    }

    #[test]
    fn test_rectangle() {
        let outline = pts(&[(0.0, 0.0), (4000.0, 0.0), (4000.0, 3000.0), (0.0, 3000.0)]);
        let a = classify_shape(&outline).unwrap();
        assert_eq!(a.shape, ShapeType::Rectangular);
        assert_eq!(a.complexity, Complexity::Simple);
        assert_relative_eq!(a.area_mm2, 12.0e6);
        assert_relative_eq!(a.bounding_box.width(), 4000.0);
    }

    #[test]
    fn test_clockwise_rectangle() {
        let outline = pts(&[(0.0, 0.0), (0.0, 3000.0), (4000.0, 3000.0), (4000.0, 0.0)]);
        let a = classify_shape(&outline).unwrap();
        assert_eq!(a.shape, ShapeType::Rectangular);
        for angle in &a.interior_angles_deg {
            assert!((angle - 90.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_closing_point_ignored() {
        let outline = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
        let a = classify_shape(&outline).unwrap();
        assert_eq!(a.vertex_count, 4);
        assert_eq!(a.shape, ShapeType::Rectangular);
    }

    #[test]
    fn test_l_shape_clockwise() {
        let a = classify_shape(&pts(&[
            (0.0, 0.0),
            (0.0, 6000.0),
            (3000.0, 6000.0),
            (3000.0, 3000.0),
            (6000.0, 3000.0),
            (6000.0, 0.0),
        ]))
        .unwrap();
        assert_eq!(a.shape, ShapeType::LShape);
        assert_eq!(a.complexity, Complexity::Moderate);
        assert_eq!(a.reentrant_corners, vec![3]);
        assert_relative_eq!(a.area_mm2, 27.0e6);
    }

    #[test]
    fn test_t_shape() {
        let a = classify_shape(&pts(&[
            (0.0, 4000.0),
            (0.0, 6000.0),
            (6000.0, 6000.0),
            (6000.0, 4000.0),
            (4000.0, 4000.0),
            (4000.0, 0.0),
            (2000.0, 0.0),
            (2000.0, 4000.0),
        ]))
        .unwrap();
        assert_eq!(a.reentrant_corners.len(), 2);
        assert_eq!(a.shape, ShapeType::TShape);
    }

    #[test]
    fn test_u_shape_is_not_t() {
        let a = classify_shape(&pts(&[
            (0.0, 0.0),
            (3000.0, 0.0),
            (3000.0, 2000.0),
            (2000.0, 2000.0),
            (2000.0, 500.0),
            (1000.0, 500.0),
            (1000.0, 2000.0),
            (0.0, 2000.0),
        ]))
        .unwrap();
        assert_eq!(a.vertex_count, 8);
        assert_eq!(a.reentrant_corners, vec![4, 5]);
        assert_eq!(a.shape, ShapeType::Irregular);
    }

    #[test]
    fn test_triangle_is_irregular() {
        let a = classify_shape(&pts(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)])).unwrap();
        assert_eq!(a.shape, ShapeType::Irregular);
        assert_eq!(a.complexity, Complexity::Complex);
        assert!(a.suggestions.iter().any(|s| s.contains("finite element")));
    }

    #[test]
    fn test_degenerate_polygon_rejected() {
        assert!(classify_shape(&pts(&[(0.0, 0.0), (1.0, 1.0)])).is_err());
        assert!(classify_shape(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])).is_err());
    }

    #[test]
    fn test_opening_brackets() {
        let open = |size: f64| Opening {
            id: format!("O-{}", size),
            size_mm: size,
            center: Point2D::default(),
        };

        let small = opening_reinforcement(&open(300.0)).unwrap();
        assert_eq!((small.trimmer_bar_diameter_mm, small.trimmer_bar_count), (12, 2));
        assert_relative_eq!(small.extension_mm, 900.0);

        let edge = opening_reinforcement(&open(1500.0)).unwrap();
        assert_eq!((edge.trimmer_bar_diameter_mm, edge.trimmer_bar_count), (16, 4));
        assert!(!edge.requires_detailed_analysis);

        let large = opening_reinforcement(&open(1800.0)).unwrap();
        assert_eq!(large.trimmer_bar_diameter_mm, 20);
        assert_eq!(large.trimmer_bar_count, 6);
        assert!(large.requires_detailed_analysis);
        assert_relative_eq!(large.extension_mm, 3300.0);
    }

    #[test]
    fn test_reinforce_openings_keeps_order() {
        let openings = vec![
            Opening {
                id: "A".into(),
                size_mm: 400.0,
                center: Point2D::new(1000.0, 1000.0),
            },
            Opening {
                id: "B".into(),
                size_mm: 800.0,
                center: Point2D::new(3000.0, 1000.0),
            },
        ];
        let r = reinforce_openings(&openings).unwrap();
        assert_eq!(r[0].opening_id, "A");
        assert_eq!(r[1].trimmer_bar_diameter_mm, 16);
    }
}
