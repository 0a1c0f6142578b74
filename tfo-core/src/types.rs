use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::constants::{C50_DECIMALS, ENERGY_DECIMALS, MAX_PH, MIN_PH};

/// Quantities derived from the corrected free energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedQuantity {
    /// Melting temperature
    MeltingTemperature,
    /// Oligo concentration for 50% triplex formation
    C50,
}

impl fmt::Display for DerivedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MeltingTemperature => write!(f, "Tm"),
            Self::C50 => write!(f, "C50"),
        }
    }
}

/// Solution conditions for a single prediction.
///
/// Concentrations are taken in µM: the oligo concentration is multiplied by
/// `1e-6` to reach molarity in the Tm formula and C50 is reported back in µM.
///
/// # Examples
///
/// ```rust
/// use tfo_core::types::Conditions;
///
/// let conditions = Conditions::new(7.2, 5.0, 10.0)?;
/// assert_eq!(conditions.ph(), 7.2);
///
/// assert!(Conditions::new(8.01, 5.0, 10.0).is_err());
/// # Ok::<(), tfo_core::types::TfoError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    ph: f64,
    tfo_conc: f64,
    dup_conc: f64,
}

impl Conditions {
    /// Validates and builds a set of conditions.
    ///
    /// A duplex concentration of zero is accepted: it only removes the
    /// free-duplex term from C50.
    ///
    /// # Errors
    ///
    /// Returns [`TfoError::InvalidCondition`] if:
    /// - pH is not finite or lies outside `[4.5, 8.0]`
    /// - the oligo concentration is not finite or not positive
    /// - the duplex concentration is not finite or negative
    pub fn new(ph: f64, tfo_conc: f64, dup_conc: f64) -> Result<Self, TfoError> {
        if !ph.is_finite() || !(MIN_PH..=MAX_PH).contains(&ph) {
            return Err(TfoError::InvalidCondition(format!(
                "pH out of range [{MIN_PH},{MAX_PH}] or non-numeric: {ph}"
            )));
        }
        if !tfo_conc.is_finite() {
            return Err(TfoError::InvalidCondition(format!(
                "value of TFO concentration is non-numeric: {tfo_conc}"
            )));
        }
        if tfo_conc <= 0.0 {
            return Err(TfoError::InvalidCondition(format!(
                "TFO concentration must be positive: {tfo_conc}"
            )));
        }
        if !dup_conc.is_finite() {
            return Err(TfoError::InvalidCondition(format!(
                "value of duplex concentration is non-numeric: {dup_conc}"
            )));
        }
        if dup_conc < 0.0 {
            return Err(TfoError::InvalidCondition(format!(
                "duplex concentration must not be negative: {dup_conc}"
            )));
        }

        Ok(Self {
            ph,
            tfo_conc,
            dup_conc,
        })
    }

    pub const fn ph(&self) -> f64 {
        self.ph
    }

    /// Oligo concentration in µM
    pub const fn tfo_conc(&self) -> f64 {
        self.tfo_conc
    }

    /// Duplex concentration in µM
    pub const fn dup_conc(&self) -> f64 {
        self.dup_conc
    }
}

/// Rounded thermodynamic prediction for one oligo.
///
/// DH, DG and Tm carry one decimal, C50 three.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    /// Enthalpy change (kcal/mol)
    pub dh: f64,
    /// pH-corrected free-energy change (kcal/mol)
    pub dg: f64,
    /// Melting temperature (°C)
    pub tm: f64,
    /// Oligo concentration for 50% triplex formation (µM)
    pub c50: f64,
}

impl PredictionResult {
    /// Fixed-precision string form used by every presentation layer.
    #[must_use]
    pub fn formatted(&self) -> FormattedPrediction {
        FormattedPrediction {
            dh: format_fixed(self.dh, ENERGY_DECIMALS),
            dg: format_fixed(self.dg, ENERGY_DECIMALS),
            tm: format_fixed(self.tm, ENERGY_DECIMALS),
            c50: format_fixed(self.c50, C50_DECIMALS),
        }
    }
}

/// Formats with a fixed number of decimals, breaking exact ties away from
/// zero (`0.0625` gives `"0.063"`, `-1.25` gives `"-1.3"`).
///
/// The standard formatter breaks ties to even, so an exact midpoint is moved
/// one step away from zero before formatting. A value is an exact midpoint
/// when scaling by `2 * 10^decimals` gives an odd integer with no rounding
/// error.
pub(crate) fn format_fixed(value: f64, decimals: usize) -> String {
    let scale = 2.0 * 10_f64.powi(decimals as i32);
    let doubled = value * scale;
    let exact_tie = doubled.fract() == 0.0
        && doubled % 2.0 != 0.0
        && value.mul_add(scale, -doubled) == 0.0;

    if exact_tie {
        let away = (doubled + doubled.signum()) / scale;
        format!("{away:.decimals$}")
    } else {
        format!("{value:.decimals$}")
    }
}

/// The `{DH, DG, Tm, C50}` string object handed to rendering collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedPrediction {
    #[serde(rename = "DH")]
    pub dh: String,
    #[serde(rename = "DG")]
    pub dg: String,
    #[serde(rename = "Tm")]
    pub tm: String,
    #[serde(rename = "C50")]
    pub c50: String,
}

/// Error types for TFO prediction operations
#[derive(Error, Debug)]
pub enum TfoError {
    /// Sequence is empty or contains characters other than `C` and `U`
    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),
    /// pH or concentration outside the supported domain
    #[error("Invalid condition: {0}")]
    InvalidCondition(String),
    /// A derived quantity has no finite value for these inputs
    #[error("Undefined {quantity}: {reason}")]
    NumericDegeneracy {
        quantity: DerivedQuantity,
        reason: String,
    },
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
    /// JSON encoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The global thread pool could not be configured
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}
