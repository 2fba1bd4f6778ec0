//! Error types shared by the calculators and their collaborators.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the calculation core.
pub type MechResult<T> = Result<T, MechError>;

/// Everything that can go wrong while deriving, evaluating or exporting.
///
/// `Domain` is the only error the pure core produces. The remaining variants
/// come from the reference loader and the table export.
#[derive(Error, Debug)]
pub enum MechError {
    /// An input or a derived ratio is outside the domain of the closed form.
    #[error("domain error in '{quantity}' (value {value}): {reason}")]
    Domain {
        quantity: String,
        value: f64,
        reason: String,
    },

    #[error("cannot access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A reference file was readable but its content is not a two-column numeric table.
    #[error("malformed reference data in '{}' at line {line}: {reason}", .path.display())]
    Reference {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// A named option did not match any accepted spelling.
    #[error("unknown {kind} '{input}', expected {expected}")]
    UnknownOption {
        kind: &'static str,
        input: String,
        expected: &'static str,
    },

    #[error("table export failed: {0}")]
    Csv(#[from] csv::Error),
}

impl MechError {
    pub fn domain(quantity: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        MechError::Domain {
            quantity: quantity.into(),
            value,
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MechError::Io {
            path: path.into(),
            source,
        }
    }

    /// Name of the failing quantity for domain errors.
    pub fn quantity(&self) -> Option<&str> {
        match self {
            MechError::Domain { quantity, .. } => Some(quantity),
            _ => None,
        }
    }

    /// Short error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            MechError::Domain { .. } => "DOMAIN",
            MechError::Io { .. } => "IO",
            MechError::Reference { .. } => "REFERENCE",
            MechError::UnknownOption { .. } => "OPTION",
            MechError::Csv(_) => "CSV",
        }
    }
}

/// Fails with a domain error unless `value > 0`.
pub(crate) fn require_positive(quantity: &str, value: f64) -> MechResult<f64> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(MechError::domain(quantity, value, "must be strictly positive"))
    }
}

/// Divides `numerator` by `denominator`, naming the derived ratio on failure.
pub(crate) fn ratio(quantity: &str, numerator: f64, denominator: f64) -> MechResult<f64> {
    if denominator == 0.0 {
        return Err(MechError::domain(quantity, denominator, "denominator is zero"));
    }
    let value = numerator / denominator;
    if !value.is_finite() {
        return Err(MechError::domain(quantity, value, "ratio is not finite"));
    }
    Ok(value)
}
