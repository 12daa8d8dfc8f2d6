//! Descriptive statistics over cost values.
//!
//! Empty inputs are an error, never NaN: callers must decide how to report
//! a group with no valid rows.

use crate::utils::error::AggregateError;
use std::fmt;

/// Aggregate applied to the costs of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Mean,
    Sum,
    StdDev,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Mean => "mean",
            Metric::Sum => "sum",
            Metric::StdDev => "std dev",
        };
        f.write_str(name)
    }
}

/// Summary statistics of a non-empty set of costs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,

    /// Sample standard deviation (n - 1); None below two values
    pub std_dev: Option<f64>,

    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Summarize a set of costs
    ///
    /// # Errors
    /// * `AggregateError::EmptyGroup` - `values` is empty
    pub fn from_values(values: &[f64]) -> Result<Self, AggregateError> {
        if values.is_empty() {
            return Err(AggregateError::EmptyGroup("0 values".to_string()));
        }

        let count = values.len();
        let sum: f64 = values.iter().sum();
        let mean = sum / count as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            count,
            sum,
            mean,
            std_dev: sample_std_dev(values),
            min,
            max,
        })
    }

    /// Value of `metric`; None when it is undefined for this group
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Mean => Some(self.mean),
            Metric::Sum => Some(self.sum),
            Metric::StdDev => self.std_dev,
        }
    }
}

/// Sample standard deviation with an n - 1 denominator
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);

    Some(variance.sqrt())
}
