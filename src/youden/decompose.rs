//! Error decomposer: random and systematic components of each deviation.
//!
//! # Algorithm
//!
//! The precision line is the 45° line through the Manhattan median,
//! `y = x + dm` with `dm = m2 - m1`. For a laboratory `p = (x, y)` the foot
//! of the perpendicular onto that line is
//!
//! ```text
//! intercept = ((x + y)/2 + (m1 - m2)/2, (x + y)/2 + (m2 - m1)/2)
//! ```
//!
//! and the raw components are
//!
//! ```text
//! total         = |p - m|
//! raw_random    = |p - intercept|
//! raw_systematic = |m - intercept|
//! ```
//!
//! The two raw legs are orthogonal, so `total² = raw_random² +
//! raw_systematic²`, but they do not sum to `total`. Both legs are then
//! rescaled by `c = total / (raw_random + raw_systematic)` so that
//! `random + systematic = total`. This proportional rescaling is a
//! deliberate approximation used for reporting, not a geometric identity;
//! the reported values depend on it and it must not be replaced by the
//! Pythagorean split.
//!
//! All of the above is evaluated after dividing coordinates by a power of
//! two near their largest magnitude, so finite inputs close to `f64::MAX`
//! never overflow into NaN.

use serde::{Deserialize, Serialize};

use super::input::Observation;
use super::median::ManhattanMedian;

/// Decomposition of one laboratory's deviation from the median.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorDecomposition {
    /// Distance from the observation to the median.
    pub total: f64,
    /// Normalized random component (scatter across the precision line).
    pub random: f64,
    /// Normalized systematic component (shift along the precision line).
    pub systematic: f64,
    /// Foot of the perpendicular on the precision line, `(x, y)`.
    pub intercept: (f64, f64),
}

impl ErrorDecomposition {
    /// Decomposes a single observation against the median.
    ///
    /// A point exactly on the median yields all-zero components; a zero
    /// denominator never produces NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_youden::youden::{ErrorDecomposition, ManhattanMedian, Observation};
    ///
    /// let m = ManhattanMedian { m1: 0.0, m2: 0.0 };
    /// let d = ErrorDecomposition::of(&Observation { x: 2.0, y: 0.0 }, &m);
    /// assert_eq!(d.intercept, (1.0, 1.0));
    /// assert!((d.random + d.systematic - d.total).abs() < 1e-12);
    /// ```
    pub fn of(p: &Observation, median: &ManhattanMedian) -> Self {
        let scale = power_of_two_scale(&[p.x, p.y, median.m1, median.m2]);
        if scale == 0.0 {
            return Self {
                total: 0.0,
                random: 0.0,
                systematic: 0.0,
                intercept: (0.0, 0.0),
            };
        }

        // Work in units of `scale` so sums and differences of values near
        // f64::MAX stay finite. Power-of-two scaling is exact.
        let (x, y) = (p.x / scale, p.y / scale);
        let (m1, m2) = (median.m1 / scale, median.m2 / scale);
        let (ix, iy) = perpendicular_foot(x, y, m1, m2);

        let total = (x - m1).hypot(y - m2);
        let raw_random = (x - ix).hypot(y - iy);
        let raw_systematic = (ix - m1).hypot(iy - m2);

        let denom = raw_random + raw_systematic;
        let c = if denom > 0.0 { total / denom } else { 0.0 };
        let random = if raw_random > 0.0 { raw_random * c } else { 0.0 };
        let systematic = if raw_systematic > 0.0 {
            raw_systematic * c
        } else {
            0.0
        };

        Self {
            total: total * scale,
            random: random * scale,
            systematic: systematic * scale,
            intercept: (ix * scale, iy * scale),
        }
    }

    /// Un-normalized random leg, `|p - intercept|`.
    pub fn raw_random(&self, p: &Observation) -> f64 {
        (p.x - self.intercept.0).hypot(p.y - self.intercept.1)
    }

    /// Un-normalized systematic leg, `|m - intercept|`.
    pub fn raw_systematic(&self, median: &ManhattanMedian) -> f64 {
        median.distance_to(self.intercept.0, self.intercept.1)
    }
}

/// Decomposes every observation. Order is preserved.
pub fn decompose_all<'a, I>(observations: I, median: &ManhattanMedian) -> Vec<ErrorDecomposition>
where
    I: IntoIterator<Item = &'a Observation>,
{
    observations
        .into_iter()
        .map(|p| ErrorDecomposition::of(p, median))
        .collect()
}

fn perpendicular_foot(x: f64, y: f64, m1: f64, m2: f64) -> (f64, f64) {
    let mid = x / 2.0 + y / 2.0;
    let half_dm = m2 / 2.0 - m1 / 2.0;
    (mid - half_dm, mid + half_dm)
}

/// Largest power of two not exceeding the largest magnitude in `values`,
/// 1 for subnormal magnitudes, or 0 when all are zero.
fn power_of_two_scale(values: &[f64]) -> f64 {
    let peak = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if peak == 0.0 {
        return 0.0;
    }
    if peak < f64::MIN_POSITIVE {
        return 1.0;
    }
    2.0_f64.powi(peak.log2().floor() as i32)
}
