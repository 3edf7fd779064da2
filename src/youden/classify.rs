//! Classifier: inside the circle, between the tangents, or outside.
//!
//! The two tangent lines run parallel to the precision line `y = x + dm`
//! and touch the confidence circle, i.e. `y = x + dm ± k` with `k = r·√2`.
//!
//! | Category | Rule | Interpretation |
//! |----------|------|----------------|
//! | Inside circle | `total ≤ r` | Random error only |
//! | Between tangents | `dm − k ≤ y − x ≤ dm + k` | Systematic error |
//! | Outside tangents | otherwise | Gross (random) error |
//!
//! Both tangent bounds are inclusive so that a zero radius still admits
//! points exactly on the precision line.

use serde::{Deserialize, Serialize};

use super::decompose::ErrorDecomposition;
use super::input::Observation;

/// Category of one laboratory. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Within the confidence circle: random error only.
    InsideCircle,
    /// Outside the circle but between the tangents: systematic error.
    BetweenTangents,
    /// Beyond the tangents: gross random error.
    OutsideTangents,
}

impl Classification {
    /// Short label for legends and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InsideCircle => "inside circle",
            Self::BetweenTangents => "systematic error",
            Self::OutsideTangents => "gross error",
        }
    }

    /// `true` for [`Classification::InsideCircle`].
    pub fn is_inside_circle(&self) -> bool {
        matches!(self, Self::InsideCircle)
    }

    /// `true` for [`Classification::BetweenTangents`].
    pub fn is_between_tangents(&self) -> bool {
        matches!(self, Self::BetweenTangents)
    }

    /// `true` for [`Classification::OutsideTangents`].
    pub fn is_outside_tangents(&self) -> bool {
        matches!(self, Self::OutsideTangents)
    }
}

/// The pair of lines `y = x + dm ± k` tangent to the confidence circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TangentLines {
    /// Intercept of the precision line.
    pub dm: f64,
    /// Vertical offset of each tangent from the precision line.
    pub k: f64,
}

impl TangentLines {
    /// Tangents to a circle of `radius` around a median with offset `dm`.
    pub fn new(dm: f64, radius: f64) -> Self {
        Self {
            dm,
            k: radius * std::f64::consts::SQRT_2,
        }
    }

    /// Intercept of the upper tangent, `dm + k`.
    pub fn upper(&self) -> f64 {
        self.dm + self.k
    }

    /// Intercept of the lower tangent, `dm − k`.
    pub fn lower(&self) -> f64 {
        self.dm - self.k
    }

    /// Whether a diagonal offset `y − x` falls on or between the tangents.
    pub fn contains(&self, diagonal_offset: f64) -> bool {
        diagonal_offset <= self.upper() && diagonal_offset >= self.lower()
    }
}

/// Classifies one laboratory.
///
/// # Examples
///
/// ```
/// use u_youden::youden::{classify, Classification, ErrorDecomposition,
///     ManhattanMedian, Observation, TangentLines};
///
/// let m = ManhattanMedian { m1: 0.0, m2: 0.0 };
/// let tangents = TangentLines::new(m.dm(), 1.0);
/// let far_on_line = Observation { x: 5.0, y: 5.0 };
/// let d = ErrorDecomposition::of(&far_on_line, &m);
/// assert_eq!(classify(&far_on_line, &d, 1.0, &tangents), Classification::BetweenTangents);
/// ```
pub fn classify(
    p: &Observation,
    decomposition: &ErrorDecomposition,
    radius: f64,
    tangents: &TangentLines,
) -> Classification {
    if decomposition.total <= radius {
        Classification::InsideCircle
    } else if tangents.contains(p.diagonal_offset()) {
        Classification::BetweenTangents
    } else {
        Classification::OutsideTangents
    }
}

/// Number of laboratories in each category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    /// Laboratories inside the circle.
    pub inside_circle: usize,
    /// Laboratories between the tangents.
    pub between_tangents: usize,
    /// Laboratories outside the tangents.
    pub outside_tangents: usize,
}

impl CategoryCounts {
    /// Counts each category in `classes`.
    pub fn tally(classes: &[Classification]) -> Self {
        classes.iter().fold(Self::default(), |mut acc, c| {
            match c {
                Classification::InsideCircle => acc.inside_circle += 1,
                Classification::BetweenTangents => acc.between_tangents += 1,
                Classification::OutsideTangents => acc.outside_tangents += 1,
            }
            acc
        })
    }

    /// Total number of laboratories counted.
    pub fn total(&self) -> usize {
        self.inside_circle + self.between_tangents + self.outside_tangents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youden::median::ManhattanMedian;

    fn class_of(x: f64, y: f64, m: ManhattanMedian, radius: f64) -> Classification {
        let p = Observation { x, y };
        let d = ErrorDecomposition::of(&p, &m);
        classify(&p, &d, radius, &TangentLines::new(m.dm(), radius))
    }

    #[test]
    fn tangent_offset() {
        let t = TangentLines::new(1.0, 2.0);
        assert!((t.k - 2.0 * 2f64.sqrt()).abs() < 1e-12);
        assert!((t.upper() - (1.0 + t.k)).abs() < 1e-12);
        assert!((t.lower() - (1.0 - t.k)).abs() < 1e-12);
    }

    #[test]
    fn tangents_touch_circle() {
        // Perpendicular distance between y = x + dm and y = x + dm + k is r.
        let r = 3.0;
        let t = TangentLines::new(0.0, r);
        assert!((t.k / 2f64.sqrt() - r).abs() < 1e-12);
    }

    #[test]
    fn three_regions() {
        let m = ManhattanMedian { m1: 10.0, m2: 10.0 };
        assert_eq!(class_of(10.5, 10.2, m, 1.0), Classification::InsideCircle);
        assert_eq!(class_of(15.0, 15.3, m, 1.0), Classification::BetweenTangents);
        assert_eq!(class_of(15.0, 10.0, m, 1.0), Classification::OutsideTangents);
    }

    #[test]
    fn circle_boundary_is_inside() {
        let m = ManhattanMedian { m1: 0.0, m2: 0.0 };
        assert_eq!(class_of(3.0, 4.0, m, 5.0), Classification::InsideCircle);
    }

    #[test]
    fn zero_radius_keeps_line_points_between() {
        let m = ManhattanMedian { m1: 0.0, m2: 0.0 };
        assert_eq!(class_of(0.0, 0.0, m, 0.0), Classification::InsideCircle);
        assert_eq!(class_of(7.0, 7.0, m, 0.0), Classification::BetweenTangents);
        assert_eq!(class_of(7.0, 7.5, m, 0.0), Classification::OutsideTangents);
    }

    #[test]
    fn offset_precision_line() {
        // dm = 2: the precision line is y = x + 2
        let m = ManhattanMedian { m1: 1.0, m2: 3.0 };
        assert_eq!(class_of(20.0, 22.0, m, 0.5), Classification::BetweenTangents);
        assert_eq!(class_of(20.0, 20.0, m, 0.5), Classification::OutsideTangents);
    }

    #[test]
    fn counts() {
        let c = CategoryCounts::tally(&[
            Classification::InsideCircle,
            Classification::OutsideTangents,
            Classification::InsideCircle,
        ]);
        assert_eq!(c.inside_circle, 2);
        assert_eq!(c.between_tangents, 0);
        assert_eq!(c.outside_tangents, 1);
        assert_eq!(c.total(), 3);
    }

    #[test]
    fn flags_are_exclusive() {
        for c in [
            Classification::InsideCircle,
            Classification::BetweenTangents,
            Classification::OutsideTangents,
        ] {
            let n = [c.is_inside_circle(), c.is_between_tangents(), c.is_outside_tangents()]
                .iter()
                .filter(|&&f| f)
                .count();
            assert_eq!(n, 1, "{}", c.label());
        }
    }
}
