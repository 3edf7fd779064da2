//! The Youden analysis pipeline.
//!
//! Four stages run strictly in sequence over a validated matrix:
//!
//! 1. [`ManhattanMedian`] — column medians and the precision line offset `dm`
//! 2. [`ErrorDecomposition`] — random / systematic split per laboratory
//! 3. [`ConfidenceCircle`] — radius from the random components and a t quantile
//! 4. [`Classification`] — circle / tangent membership per laboratory
//!
//! All validation happens before stage 1, so a run either produces a full
//! [`YoudenResult`] or fails without partial output.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, YoudenError};

use super::classify::{classify, CategoryCounts, Classification, TangentLines};
use super::confidence::ConfidenceCircle;
use super::config::YoudenConfig;
use super::decompose::{decompose_all, ErrorDecomposition};
use super::input::Observations;
use super::median::ManhattanMedian;
use super::report::{LogReport, ReportSink};

/// Entry point for running a Youden analysis.
///
/// # Examples
///
/// ```
/// use u_youden::youden::{Classification, Observations, YoudenAnalysis, YoudenConfig};
///
/// let data = Observations::from_pairs(&[
///     (10.1, 10.2), (9.9, 9.8), (10.0, 10.1), (10.2, 10.0),
///     (9.8, 10.0), (12.5, 12.6), (10.0, 13.0),
/// ]).unwrap();
/// let config = YoudenConfig::new().with_verbose(false);
/// let result = YoudenAnalysis::run(&data, &config).unwrap();
///
/// assert_eq!(result.classifications.len(), 7);
/// assert_eq!(result.classifications[5], Classification::BetweenTangents);
/// assert_eq!(result.classifications[6], Classification::OutsideTangents);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct YoudenAnalysis;

impl YoudenAnalysis {
    /// Runs the analysis, reporting through [`LogReport`] when
    /// `config.verbose` is set.
    ///
    /// # Errors
    ///
    /// - [`YoudenError::InvalidInput`] for an α outside (0, 1) or a label
    ///   vector whose length differs from the number of rows.
    /// - [`YoudenError::InsufficientData`] for fewer than 2 rows.
    pub fn run(observations: &Observations, config: &YoudenConfig) -> Result<YoudenResult> {
        Self::run_with_sink(observations, config, &mut LogReport)
    }

    /// Runs the analysis, handing the result to `sink` when
    /// `config.verbose` is set. The sink is only called on success.
    pub fn run_with_sink<S: ReportSink + ?Sized>(
        observations: &Observations,
        config: &YoudenConfig,
        sink: &mut S,
    ) -> Result<YoudenResult> {
        let result = Self::compute(observations, config)?;
        if config.verbose {
            sink.report(&result);
        }
        Ok(result)
    }

    /// Convenience wrapper validating raw rows before running.
    pub fn run_rows<R: AsRef<[f64]>>(rows: &[R], config: &YoudenConfig) -> Result<YoudenResult> {
        let observations = Observations::from_rows(rows)?;
        Self::run(&observations, config)
    }

    fn compute(observations: &Observations, config: &YoudenConfig) -> Result<YoudenResult> {
        config.validate()?;
        let labels = config.resolve_labels(observations.len())?;
        let n = observations.len();
        if n < 2 {
            return Err(YoudenError::InsufficientData { observations: n });
        }

        let median = ManhattanMedian::compute(observations)?;
        debug!(
            "youden: median m=({}, {}), dm={}",
            median.m1,
            median.m2,
            median.dm()
        );

        let decompositions = decompose_all(observations, &median);

        let random: Vec<f64> = decompositions.iter().map(|d| d.random).collect();
        let circle = ConfidenceCircle::from_random(median, &random, config.alpha)?;
        debug!(
            "youden: sigma={}, radius={} at {}% (df={})",
            circle.sigma, circle.radius, circle.confidence, circle.df
        );
        if circle.radius == 0.0 {
            warn!("youden: confidence radius is zero; every laboratory lies on the precision line");
        }

        let tangents = TangentLines::new(median.dm(), circle.radius);
        let classifications: Vec<Classification> = observations
            .iter()
            .zip(&decompositions)
            .map(|(p, d)| classify(p, d, circle.radius, &tangents))
            .collect();

        let result = YoudenResult {
            median,
            circle,
            tangents,
            observations: observations.clone(),
            labels,
            decompositions,
            classifications,
        };
        let counts = result.counts();
        debug!(
            "youden: {} inside, {} between tangents, {} outside",
            counts.inside_circle, counts.between_tangents, counts.outside_tangents
        );
        Ok(result)
    }
}

/// Everything a presentation layer needs to draw and tabulate a Youden plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoudenResult {
    /// Manhattan median of the data.
    pub median: ManhattanMedian,
    /// Confidence circle around the median.
    pub circle: ConfidenceCircle,
    /// Precision line offset and tangent offset `k`.
    pub tangents: TangentLines,
    /// The analysed observations, in row order.
    pub observations: Observations,
    /// Group label per laboratory, in row order.
    pub labels: Vec<String>,
    /// Error decomposition per laboratory, in row order.
    pub decompositions: Vec<ErrorDecomposition>,
    /// Category per laboratory, in row order.
    pub classifications: Vec<Classification>,
}

/// One row of the tabular view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoudenRow {
    /// Group label.
    pub group: String,
    /// First-sample result.
    pub x: f64,
    /// Second-sample result.
    pub y: f64,
    /// Distance to the median.
    pub total: f64,
    /// Normalized random component.
    pub random: f64,
    /// Normalized systematic component.
    pub systematic: f64,
    /// Inside the confidence circle.
    pub inside_circle: bool,
    /// Outside the circle, between the tangents.
    pub between_tangents: bool,
    /// Outside the tangents.
    pub outside_tangents: bool,
}

impl YoudenResult {
    /// Number of laboratories.
    pub fn len(&self) -> usize {
        self.classifications.len()
    }

    /// `true` only for a result with no laboratories, which `run` never
    /// produces.
    pub fn is_empty(&self) -> bool {
        self.classifications.is_empty()
    }

    /// Offset `dm` of the precision line `y = x + dm`.
    pub fn dm(&self) -> f64 {
        self.tangents.dm
    }

    /// Precision line as `(slope, intercept)`.
    pub fn precision_line(&self) -> (f64, f64) {
        (1.0, self.tangents.dm)
    }

    /// Total error per laboratory.
    pub fn total(&self) -> Vec<f64> {
        self.decompositions.iter().map(|d| d.total).collect()
    }

    /// Normalized random error per laboratory.
    pub fn random(&self) -> Vec<f64> {
        self.decompositions.iter().map(|d| d.random).collect()
    }

    /// Normalized systematic error per laboratory.
    pub fn systematic(&self) -> Vec<f64> {
        self.decompositions.iter().map(|d| d.systematic).collect()
    }

    /// Inside-circle flag per laboratory.
    pub fn inside_circle(&self) -> Vec<bool> {
        self.classifications.iter().map(|c| c.is_inside_circle()).collect()
    }

    /// Between-tangents flag per laboratory.
    pub fn between_tangents(&self) -> Vec<bool> {
        self.classifications.iter().map(|c| c.is_between_tangents()).collect()
    }

    /// Outside-tangents flag per laboratory.
    pub fn outside_tangents(&self) -> Vec<bool> {
        self.classifications.iter().map(|c| c.is_outside_tangents()).collect()
    }

    /// Number of laboratories per category.
    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts::tally(&self.classifications)
    }

    /// Tabular view with columns
    /// `[group, x, y, total, random, systematic, inside, between, outside]`.
    pub fn rows(&self) -> Vec<YoudenRow> {
        self.observations
            .iter()
            .zip(&self.labels)
            .zip(self.decompositions.iter().zip(&self.classifications))
            .map(|((p, group), (d, c))| YoudenRow {
                group: group.clone(),
                x: p.x,
                y: p.y,
                total: d.total,
                random: d.random,
                systematic: d.systematic,
                inside_circle: c.is_inside_circle(),
                between_tangents: c.is_between_tangents(),
                outside_tangents: c.is_outside_tangents(),
            })
            .collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn pairs() -> impl Strategy<Value = Vec<(f64, f64)>> {
        proptest::collection::vec((-1e3_f64..1e3, -1e3_f64..1e3), 2..=40)
    }

    fn quiet() -> YoudenConfig {
        YoudenConfig::new().with_verbose(false)
    }

    proptest! {
        #[test]
        fn components_sum_to_total(data in pairs()) {
            let obs = Observations::from_pairs(&data).expect("finite data");
            let r = YoudenAnalysis::run(&obs, &quiet()).expect("should compute");
            for (i, d) in r.decompositions.iter().enumerate() {
                let tol = 1e-9 * d.total.max(1.0);
                prop_assert!((d.random + d.systematic - d.total).abs() <= tol,
                    "row {i}: {} + {} != {}", d.random, d.systematic, d.total);
                prop_assert!(d.random >= 0.0 && d.systematic >= 0.0);
            }
        }

        #[test]
        fn exactly_one_category(data in pairs(), alpha in 0.001_f64..0.5) {
            let obs = Observations::from_pairs(&data).expect("finite data");
            let r = YoudenAnalysis::run(&obs, &quiet().with_alpha(alpha)).expect("should compute");
            let (inside, between, outside) =
                (r.inside_circle(), r.between_tangents(), r.outside_tangents());
            for i in 0..r.len() {
                let n = [inside[i], between[i], outside[i]].iter().filter(|&&f| f).count();
                prop_assert_eq!(n, 1, "row {}", i);
            }
            prop_assert_eq!(r.counts().total(), data.len());
        }

        #[test]
        fn median_rank_property(data in pairs()) {
            let obs = Observations::from_pairs(&data).expect("finite data");
            let m = ManhattanMedian::compute(&obs).expect("non-empty");
            let half = data.len().div_ceil(2);
            for (col, med) in [(obs.x(), m.m1), (obs.y(), m.m2)] {
                let below = col.iter().filter(|&&v| v <= med).count();
                let above = col.iter().filter(|&&v| v >= med).count();
                prop_assert!(below >= half, "{below} <= median, need {half}");
                prop_assert!(above >= half, "{above} >= median, need {half}");
            }
        }

        #[test]
        fn radius_non_increasing_in_alpha(
            data in pairs(),
            a1 in 0.001_f64..0.5,
            a2 in 0.001_f64..0.5,
        ) {
            let (lo, hi) = if a1 <= a2 { (a1, a2) } else { (a2, a1) };
            let obs = Observations::from_pairs(&data).expect("finite data");
            let r_lo = YoudenAnalysis::run(&obs, &quiet().with_alpha(lo)).expect("should compute");
            let r_hi = YoudenAnalysis::run(&obs, &quiet().with_alpha(hi)).expect("should compute");
            prop_assert!(r_hi.circle.radius <= r_lo.circle.radius * (1.0 + 1e-6) + 1e-12,
                "r({hi}) = {} > r({lo}) = {}", r_hi.circle.radius, r_lo.circle.radius);
        }
    }
}
