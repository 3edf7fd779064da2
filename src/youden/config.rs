//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, YoudenError};

/// Default significance level.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Options for a Youden analysis.
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `alpha` | 0.05 | Significance level; the circle covers (1 − α)·100 % |
/// | `labels` | `None` | Group labels; `None` numbers laboratories `1..=N` |
/// | `verbose` | `true` | Hand the result to a report sink after computing |
///
/// # Examples
///
/// ```
/// use u_youden::youden::YoudenConfig;
///
/// let config = YoudenConfig::new()
///     .with_alpha(0.01)
///     .with_labels(["A", "B", "C"])
///     .with_verbose(false);
/// assert!(config.validate().is_ok());
///
/// assert!(YoudenConfig::new().with_alpha(1.5).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoudenConfig {
    /// Significance level α, strictly between 0 and 1.
    pub alpha: f64,
    /// Optional laboratory labels; length must match the number of rows.
    pub labels: Option<Vec<String>>,
    /// Whether to report the result once computed. Has no effect on values.
    pub verbose: bool,
}

impl Default for YoudenConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            labels: None,
            verbose: true,
        }
    }
}

impl YoudenConfig {
    /// Configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the significance level; checked by [`YoudenConfig::validate`].
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets one group label per laboratory, in row order.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Enables or suppresses the report after a successful run.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets verbosity from a numeric level: `0` suppresses the report, `1`
    /// enables it.
    ///
    /// # Errors
    ///
    /// [`YoudenError::InvalidInput`] for any other level.
    pub fn with_verbosity_level(mut self, level: u8) -> Result<Self> {
        self.verbose = match level {
            0 => false,
            1 => true,
            other => {
                return Err(YoudenError::invalid(format!(
                    "verbosity level must be 0 or 1, got {other}"
                )))
            }
        };
        Ok(self)
    }

    /// Checks the significance level.
    ///
    /// Label length can only be checked against data; see
    /// [`YoudenConfig::resolve_labels`].
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(YoudenError::invalid(format!(
                "alpha must lie strictly between 0 and 1, got {}",
                self.alpha
            )));
        }
        Ok(())
    }

    /// Returns the labels to attach to `n` observations: the configured ones
    /// when their count matches, otherwise `"1"..="n"` when none were given.
    ///
    /// # Errors
    ///
    /// [`YoudenError::InvalidInput`] if labels were given with a length other
    /// than `n`.
    pub fn resolve_labels(&self, n: usize) -> Result<Vec<String>> {
        match &self.labels {
            Some(labels) if labels.len() != n => Err(YoudenError::invalid(format!(
                "label vector has {} entries but data has {n} rows",
                labels.len()
            ))),
            Some(labels) => Ok(labels.clone()),
            None => Ok((1..=n).map(|i| i.to_string()).collect()),
        }
    }

    /// Confidence level in percent, `(1 − α)·100`.
    pub fn confidence_percent(&self) -> f64 {
        (1.0 - self.alpha) * 100.0
    }
}
