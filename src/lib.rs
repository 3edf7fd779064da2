//! # u-youden
//!
//! Youden plot analysis for inter-laboratory measurement comparison.
//!
//! Given N laboratories that each measured two similar samples, this crate
//! computes the Manhattan median, decomposes every laboratory's deviation
//! into random and systematic error, sizes a Student-t confidence circle,
//! and classifies each laboratory against the circle and its tangents.
//!
//! ## Modules
//!
//! - [`youden`] — Observations, configuration, the four analysis stages and
//!   the packaged result
//! - [`error`] — Error kinds raised at the input boundary
//!
//! ## Design Philosophy
//!
//! - **Pure computation**: no drawing, colors or table formatting; results
//!   are handed to a [`youden::ReportSink`] or serialized for a presentation
//!   layer
//! - **Eager validation**: a run fails before any stage executes, or
//!   succeeds completely
//! - **Research-backed**: follows Youden (1959) with robust medians
//!
//! ## Example
//!
//! ```
//! use u_youden::youden::{Observations, YoudenAnalysis, YoudenConfig};
//!
//! let data = Observations::from_pairs(&[
//!     (5.1, 5.0), (4.9, 5.1), (5.0, 4.9), (5.2, 5.2), (6.0, 6.1),
//! ]).unwrap();
//! let result = YoudenAnalysis::run(&data, &YoudenConfig::new().with_verbose(false)).unwrap();
//! assert_eq!(result.counts().total(), 5);
//! ```

pub mod error;
pub mod youden;

pub use error::{Result, YoudenError};
