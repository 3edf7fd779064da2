//! Reporting boundary.
//!
//! The analysis never formats tables itself. When verbosity is on, the
//! finished [`YoudenResult`] is handed to a [`ReportSink`]; presentation
//! layers implement the trait to print, plot or export it.

use log::info;

use super::analysis::YoudenResult;

/// Consumer of a finished analysis.
pub trait ReportSink {
    /// Receives a fully computed result. Called at most once per run.
    fn report(&mut self, result: &YoudenResult);
}

/// Sink that writes the tabular view through the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReport;

impl ReportSink for LogReport {
    fn report(&mut self, result: &YoudenResult) {
        let m = result.median;
        info!(
            "youden: median=({:.6}, {:.6}) dm={:.6} radius={:.6} ({:.1}% confidence) k={:.6}",
            m.m1,
            m.m2,
            result.tangents.dm,
            result.circle.radius,
            result.circle.confidence,
            result.tangents.k
        );
        info!("youden: group x y total random systematic inside between outside");
        for row in result.rows() {
            info!(
                "youden: {} {:.6} {:.6} {:.6} {:.6} {:.6} {} {} {}",
                row.group,
                row.x,
                row.y,
                row.total,
                row.random,
                row.systematic,
                row.inside_circle,
                row.between_tangents,
                row.outside_tangents
            );
        }
    }
}

/// Sink that keeps every result it receives.
#[derive(Debug, Default, Clone)]
pub struct CollectReport {
    /// Results in the order they were reported.
    pub results: Vec<YoudenResult>,
}

impl ReportSink for CollectReport {
    fn report(&mut self, result: &YoudenResult) {
        self.results.push(result.clone());
    }
}
