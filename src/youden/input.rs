//! Validated paired measurements.
//!
//! A Youden analysis consumes an N×2 matrix: one row per laboratory, one
//! column per sample. All constructors check the shape and reject
//! non-finite cells before anything else touches the data.

use serde::{Deserialize, Serialize};

use crate::error::{Result, YoudenError};

/// One laboratory's pair of measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Result on the first sample.
    pub x: f64,
    /// Result on the second sample.
    pub y: f64,
}

impl Observation {
    /// Diagonal offset `y - x` of this point.
    pub fn diagonal_offset(&self) -> f64 {
        self.y - self.x
    }
}

/// A non-empty set of finite paired measurements.
///
/// # Examples
///
/// ```
/// use u_youden::youden::Observations;
///
/// let obs = Observations::from_pairs(&[(10.1, 10.3), (9.8, 9.9)]).unwrap();
/// assert_eq!(obs.len(), 2);
///
/// // Three columns is not a Youden matrix
/// assert!(Observations::from_rows(&[vec![1.0, 2.0, 3.0]]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Observation>", into = "Vec<Observation>")]
pub struct Observations {
    points: Vec<Observation>,
}

impl Observations {
    /// Builds observations from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// [`YoudenError::InvalidInput`] if `pairs` is empty or any value is NaN
    /// or infinite.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        Self::from_points(pairs.iter().map(|&(x, y)| Observation { x, y }).collect())
    }

    /// Builds observations from already-paired points. Deserialization goes
    /// through this check as well.
    ///
    /// # Errors
    ///
    /// [`YoudenError::InvalidInput`] if `points` is empty or any coordinate
    /// is NaN or infinite.
    pub fn from_points(points: Vec<Observation>) -> Result<Self> {
        if points.is_empty() {
            return Err(YoudenError::invalid("data matrix is empty"));
        }
        for (row, p) in points.iter().enumerate() {
            check_finite(p.x, row, 0)?;
            check_finite(p.y, row, 1)?;
        }
        Ok(Self { points })
    }

    /// Builds observations from generic rows, each of which must hold
    /// exactly two values.
    ///
    /// # Errors
    ///
    /// [`YoudenError::InvalidInput`] if there are no rows, a row does not
    /// have exactly 2 columns, or a value is non-finite.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        if rows.is_empty() {
            return Err(YoudenError::invalid("data matrix is empty"));
        }
        let mut points = Vec::with_capacity(rows.len());
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            check_width(values.len(), row)?;
            check_finite(values[0], row, 0)?;
            check_finite(values[1], row, 1)?;
            points.push(Observation {
                x: values[0],
                y: values[1],
            });
        }
        Ok(Self { points })
    }

    /// Parses observations from textual cells, e.g. fields read from a CSV
    /// file by the caller. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// [`YoudenError::InvalidInput`] on an empty matrix, a row that is not
    /// 2 columns wide, a cell that is not a number, or a non-finite number.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_youden::youden::Observations;
    ///
    /// let obs = Observations::parse_rows(&[vec!["1.5", " 2.0"], vec!["3", "4"]]).unwrap();
    /// assert_eq!(obs.x(), vec![1.5, 3.0]);
    ///
    /// assert!(Observations::parse_rows(&[vec!["1.5", "n/a"]]).is_err());
    /// ```
    pub fn parse_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        if rows.is_empty() {
            return Err(YoudenError::invalid("data matrix is empty"));
        }
        let mut parsed = Vec::with_capacity(rows.len());
        for (row, cells) in rows.iter().enumerate() {
            check_width(cells.len(), row)?;
            let mut pair = [0.0; 2];
            for (col, cell) in cells.iter().enumerate() {
                let text = cell.as_ref().trim();
                pair[col] = text.parse::<f64>().map_err(|_| {
                    YoudenError::invalid(format!(
                        "non-numeric value {text:?} at row {row}, column {col}"
                    ))
                })?;
            }
            parsed.push(pair);
        }
        Self::from_rows(&parsed)
    }

    /// Number of laboratories.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: every constructor, including deserialization, rejects
    /// an empty set.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The first-sample column.
    pub fn x(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// The second-sample column.
    pub fn y(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Iterates over observations in row order.
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.points.iter()
    }

    /// Observations in row order.
    pub fn as_slice(&self) -> &[Observation] {
        &self.points
    }
}

impl TryFrom<Vec<Observation>> for Observations {
    type Error = YoudenError;

    fn try_from(points: Vec<Observation>) -> Result<Self> {
        Self::from_points(points)
    }
}

impl From<Observations> for Vec<Observation> {
    fn from(observations: Observations) -> Self {
        observations.points
    }
}

impl<'a> IntoIterator for &'a Observations {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn check_width(width: usize, row: usize) -> Result<()> {
    if width != 2 {
        return Err(YoudenError::invalid(format!(
            "row {row} has {width} column(s), expected exactly 2"
        )));
    }
    Ok(())
}

fn check_finite(value: f64, row: usize, col: usize) -> Result<()> {
    if !value.is_finite() {
        return Err(YoudenError::invalid(format!(
            "non-finite value {value} at row {row}, column {col}"
        )));
    }
    Ok(())
}
