//! Central estimator: the Manhattan median.
//!
//! The reference point of a Youden plot is the pair of independent column
//! medians, which is insensitive to a minority of outlying laboratories.
//!
//! # Reference
//!
//! Youden, W.J. (1959). "Graphical diagnosis of interlaboratory test
//! results", *Industrial Quality Control* 15(11), pp. 24-28.

use serde::{Deserialize, Serialize};
use u_numflow::stats;

use crate::error::{Result, YoudenError};

use super::input::Observations;

/// Column-wise median `(m1, m2)` of the data.
///
/// # Invariants
///
/// - `m1` is the median of the first column and `m2` of the second,
///   each computed independently of the other.
/// - For even N the median is the mean of the two middle values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManhattanMedian {
    /// Median of the first-sample column.
    pub m1: f64,
    /// Median of the second-sample column.
    pub m2: f64,
}

impl ManhattanMedian {
    /// Computes the Manhattan median of validated observations.
    ///
    /// # Errors
    ///
    /// [`YoudenError::InvalidInput`] if a column median cannot be formed,
    /// which only happens for an empty column.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_youden::youden::{ManhattanMedian, Observations};
    ///
    /// let obs = Observations::from_pairs(&[(1.0, 9.0), (2.0, 7.0), (30.0, 8.0)]).unwrap();
    /// let m = ManhattanMedian::compute(&obs).unwrap();
    /// assert_eq!((m.m1, m.m2), (2.0, 8.0));
    /// assert!((m.dm() - 6.0).abs() < 1e-12);
    /// ```
    pub fn compute(observations: &Observations) -> Result<Self> {
        let m1 = stats::median(&observations.x())
            .ok_or_else(|| YoudenError::invalid("cannot take median of an empty column"))?;
        let m2 = stats::median(&observations.y())
            .ok_or_else(|| YoudenError::invalid("cannot take median of an empty column"))?;
        Ok(Self { m1, m2 })
    }

    /// Vertical offset `m2 - m1` of the 45° line `y = x + dm` through the
    /// median.
    pub fn dm(&self) -> f64 {
        self.m2 - self.m1
    }

    /// Euclidean distance from `(x, y)` to the median.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (x - self.m1).hypot(y - self.m2)
    }
}
