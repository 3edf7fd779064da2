//! Youden plot analysis for inter-laboratory comparisons.
//!
//! Each laboratory reports one result on each of two similar samples. The
//! pair is plotted as a point; the analysis splits each point's distance
//! from the Manhattan median into a random part (across the 45° precision
//! line) and a systematic part (along it), sizes a confidence circle from
//! the random parts, and sorts laboratories into three categories.
//!
//! # Pipeline
//!
//! - [`ManhattanMedian`] — robust center from independent column medians
//! - [`ErrorDecomposition`] — normalized random / systematic components
//! - [`ConfidenceCircle`] — radius `s · t(1 − α/2, N − 1)`
//! - [`Classification`] — inside circle, between tangents, outside tangents
//!
//! [`YoudenAnalysis`] runs all four and returns a [`YoudenResult`] holding
//! everything a plotting or reporting layer consumes.
//!
//! # References
//!
//! - Youden, W.J. (1959). "Graphical diagnosis of interlaboratory test
//!   results", *Industrial Quality Control* 15(11), pp. 24-28.
//! - ISO 13528:2022, *Statistical methods for use in proficiency testing by
//!   interlaboratory comparison*, Annex on Youden plots.

mod analysis;
mod classify;
mod confidence;
mod config;
mod decompose;
mod input;
mod median;
mod report;

pub use analysis::{YoudenAnalysis, YoudenResult, YoudenRow};
pub use classify::{classify, CategoryCounts, Classification, TangentLines};
pub use confidence::{student_t_quantile, ConfidenceCircle};
pub use config::{YoudenConfig, DEFAULT_ALPHA};
pub use decompose::{decompose_all, ErrorDecomposition};
pub use input::{Observation, Observations};
pub use median::ManhattanMedian;
pub use report::{CollectReport, LogReport, ReportSink};
