//! Confidence sizer: radius of the confidence circle.
//!
//! # Algorithm
//!
//! With N laboratories and normalized random components `r_i`:
//!
//! ```text
//! df = N - 1
//! s  = sqrt(Σ r_i² / df)
//! r  = s · t(1 - α/2, df)
//! ```
//!
//! The random component is centered at zero by construction, so `s` is a
//! root-mean-square rather than a deviation about a sample mean. The sum is
//! taken over `r_i / max|r|` so squaring stays finite for large components.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{Result, YoudenError};

use super::median::ManhattanMedian;

/// Circle centered on the Manhattan median expected to hold
/// (1 − α)·100 % of laboratories if only random error were present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceCircle {
    /// Circle center, the Manhattan median.
    pub center: ManhattanMedian,
    /// Radius `sigma · t(1 − α/2, df)`.
    pub radius: f64,
    /// Confidence level in percent.
    pub confidence: f64,
    /// Estimated standard deviation of the random component.
    pub sigma: f64,
    /// Degrees of freedom, N − 1.
    pub df: usize,
}

impl ConfidenceCircle {
    /// Sizes the circle from the random components.
    ///
    /// # Errors
    ///
    /// - [`YoudenError::InsufficientData`] if fewer than 2 components.
    /// - [`YoudenError::InvalidInput`] if `alpha` is not in (0, 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_youden::youden::{ConfidenceCircle, ManhattanMedian};
    ///
    /// let m = ManhattanMedian { m1: 0.0, m2: 0.0 };
    /// let c = ConfidenceCircle::from_random(m, &[0.0, 0.0, 0.0], 0.05).unwrap();
    /// assert_eq!(c.radius, 0.0);
    /// assert!((c.confidence - 95.0).abs() < 1e-9);
    /// ```
    pub fn from_random(center: ManhattanMedian, random: &[f64], alpha: f64) -> Result<Self> {
        let n = random.len();
        if n < 2 {
            return Err(YoudenError::InsufficientData { observations: n });
        }
        let df = n - 1;
        let sigma = root_mean_square(random, df as f64);
        let q = student_t_quantile(1.0 - alpha / 2.0, df as f64)?;

        Ok(Self {
            center,
            radius: sigma * q,
            confidence: (1.0 - alpha) * 100.0,
            sigma,
            df,
        })
    }

    /// Whether a point at distance `total` from the center lies inside or on
    /// the circle.
    pub fn contains(&self, total: f64) -> bool {
        total <= self.radius
    }
}

/// `sqrt(Σ r_i² / df)`, scaled by the largest magnitude so squaring cannot
/// overflow. An infinite component gives an infinite result.
fn root_mean_square(values: &[f64], df: f64) -> f64 {
    let peak = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if peak == 0.0 || peak.is_infinite() {
        return peak;
    }
    let sum_sq: f64 = values.iter().map(|v| (v / peak).powi(2)).sum();
    peak * (sum_sq / df).sqrt()
}

/// Quantile function of Student's t distribution with `df` degrees of
/// freedom.
///
/// # Errors
///
/// [`YoudenError::InvalidInput`] if `p` is not strictly inside (0, 1) or
/// `df` is not positive and finite.
///
/// # Examples
///
/// ```
/// use u_youden::youden::student_t_quantile;
///
/// let t = student_t_quantile(0.975, 1.0).unwrap();
/// assert!((t - 12.7062).abs() < 1e-3);
/// ```
pub fn student_t_quantile(p: f64, df: f64) -> Result<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(YoudenError::invalid(format!(
            "alpha must lie strictly between 0 and 1 (quantile probability {p})"
        )));
    }
    let dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
        YoudenError::invalid(format!("invalid degrees of freedom {df}: {e}"))
    })?;
    Ok(dist.inverse_cdf(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: ManhattanMedian = ManhattanMedian { m1: 0.0, m2: 0.0 };

    #[test]
    fn known_quantiles() {
        // Two-tailed 95 % critical values
        let cases = [(1.0, 12.7062), (2.0, 4.3027), (5.0, 2.5706), (30.0, 2.0423)];
        for (df, expected) in cases {
            let t = student_t_quantile(0.975, df).unwrap();
            assert!((t - expected).abs() < 1e-3, "df={df}: {t} vs {expected}");
        }
    }

    #[test]
    fn radius_formula() {
        // Σ r² = 9 + 16 = 25 over df = 2 -> s = sqrt(12.5)
        let c = ConfidenceCircle::from_random(CENTER, &[3.0, 4.0, 0.0], 0.05).unwrap();
        let s = 12.5f64.sqrt();
        assert_eq!(c.df, 2);
        assert!((c.sigma - s).abs() < 1e-12);
        assert!((c.radius - s * 4.302_652_7).abs() < 1e-3);
    }

    #[test]
    fn single_observation_is_insufficient() {
        let err = ConfidenceCircle::from_random(CENTER, &[1.0], 0.05).unwrap_err();
        assert_eq!(err, YoudenError::InsufficientData { observations: 1 });
        assert!(ConfidenceCircle::from_random(CENTER, &[], 0.05).is_err());
    }

    #[test]
    fn alpha_out_of_range() {
        assert!(matches!(
            ConfidenceCircle::from_random(CENTER, &[1.0, 2.0], 0.0),
            Err(YoudenError::InvalidInput(_))
        ));
        assert!(student_t_quantile(1.0, 3.0).is_err());
        assert!(student_t_quantile(0.9, 0.0).is_err());
    }

    #[test]
    fn larger_alpha_shrinks_radius() {
        let random = [0.5, 1.2, 0.3, 0.8, 2.0];
        let wide = ConfidenceCircle::from_random(CENTER, &random, 0.01).unwrap();
        let narrow = ConfidenceCircle::from_random(CENTER, &random, 0.10).unwrap();
        assert!(narrow.radius < wide.radius);
    }

    #[test]
    fn huge_components_do_not_overflow() {
        // Squaring 1.5e307 directly overflows.
        let c = ConfidenceCircle::from_random(CENTER, &[1e300, 5e306, 1.5e307], 0.05).unwrap();
        assert!(c.sigma.is_finite() && c.radius.is_finite(), "{c:?}");
        let expected = (1e300f64 / 1.5e307).hypot(5e306 / 1.5e307).hypot(1.0) * 1.5e307 / 2f64.sqrt();
        assert!((c.sigma - expected).abs() < 1e-9 * expected);
    }

    #[test]
    fn infinite_component_gives_infinite_radius() {
        let c = ConfidenceCircle::from_random(CENTER, &[1.0, f64::INFINITY], 0.05).unwrap();
        assert!(c.radius.is_infinite());
        assert!(!c.radius.is_nan());
    }

    #[test]
    fn contains_is_inclusive() {
        let c = ConfidenceCircle::from_random(CENTER, &[0.0, 0.0], 0.05).unwrap();
        assert!(c.contains(0.0));
        assert!(!c.contains(1e-12));
    }
}
