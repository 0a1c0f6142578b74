use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::composition::{
    EnthalpyComposition, FreeEnergyComposition, count_for_enthalpy, count_for_free_energy,
};
use crate::config::TfoConfig;
use crate::constants::{C50_DECIMALS, DEFAULT_HEADER, ENERGY_DECIMALS};
use crate::results::{RecordInfo, TfoResults};
use crate::sequence::{FastaRecord, TfoSequence, parse_fasta_str, read_fasta_sequences};
use crate::thermo::{
    compute_c50, compute_tm, correct_dg, kelvin_to_celsius, predict_dg, predict_dh,
};
use crate::types::{Conditions, FormattedPrediction, PredictionResult, TfoError, format_fixed};

/// Unrounded output of the model together with its intermediates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermoEstimate {
    pub enthalpy_composition: EnthalpyComposition,
    pub free_energy_composition: FreeEnergyComposition,
    /// Enthalpy change (kcal/mol)
    pub dh: f64,
    /// Free-energy change before the pH correction (kcal/mol)
    pub dg_raw: f64,
    /// pH-corrected free-energy change (kcal/mol)
    pub dg: f64,
    pub tm_kelvin: f64,
    /// µM
    pub c50: f64,
}

impl ThermoEstimate {
    #[must_use]
    pub fn tm_celsius(&self) -> f64 {
        kelvin_to_celsius(self.tm_kelvin)
    }

    /// Rounds DH, DG and Tm to one decimal and C50 to three.
    #[must_use]
    pub fn rounded(&self) -> PredictionResult {
        PredictionResult {
            dh: round_to(self.dh, ENERGY_DECIMALS),
            dg: round_to(self.dg, ENERGY_DECIMALS),
            tm: round_to(self.tm_celsius(), ENERGY_DECIMALS),
            c50: round_to(self.c50, C50_DECIMALS),
        }
    }
}

/// Rounds through the decimal formatter so the number matches its printed
/// form; negative zero collapses to zero.
fn round_to(value: f64, decimals: usize) -> f64 {
    format_fixed(value, decimals)
        .parse::<f64>()
        .map_or(value, |rounded| rounded + 0.0)
}

/// Runs the model for one oligo without rounding.
///
/// # Errors
///
/// Returns [`TfoError::NumericDegeneracy`] if Tm or C50 is undefined.
pub fn estimate(
    sequence: &TfoSequence,
    conditions: &Conditions,
) -> Result<ThermoEstimate, TfoError> {
    let enthalpy_composition = count_for_enthalpy(sequence);
    let free_energy_composition = count_for_free_energy(sequence);

    let dh = predict_dh(&enthalpy_composition);
    let dg_raw = predict_dg(&free_energy_composition);
    let dg = correct_dg(dg_raw, &free_energy_composition, conditions);

    debug!(
        sequence = %sequence,
        ?enthalpy_composition,
        ?free_energy_composition,
        dh,
        dg_raw,
        dg,
        "nearest-neighbour energies"
    );

    let tm_kelvin = compute_tm(dh, dg, conditions)?;
    let c50 = compute_c50(dg, conditions)?;

    Ok(ThermoEstimate {
        enthalpy_composition,
        free_energy_composition,
        dh,
        dg_raw,
        dg,
        tm_kelvin,
        c50,
    })
}

/// Predicts DH, DG, Tm (°C) and C50 for one oligo, rounded for reporting.
///
/// # Examples
///
/// ```rust
/// use tfo_core::engine::predict;
/// use tfo_core::sequence::TfoSequence;
/// use tfo_core::types::Conditions;
///
/// let sequence: TfoSequence = "CUUCUCUCUUUUCCU".parse()?;
/// let conditions = Conditions::new(7.2, 5.0, 10.0)?;
/// let result = predict(&sequence, &conditions)?;
///
/// assert_eq!(result.dh, -88.3);
/// assert_eq!(result.dg, -7.3);
/// assert_eq!(result.tm, 22.5);
/// assert_eq!(result.c50, 11.762);
/// # Ok::<(), tfo_core::types::TfoError>(())
/// ```
///
/// # Errors
///
/// Returns [`TfoError::NumericDegeneracy`] if Tm or C50 is undefined.
pub fn predict(
    sequence: &TfoSequence,
    conditions: &Conditions,
) -> Result<PredictionResult, TfoError> {
    estimate(sequence, conditions).map(|estimate| estimate.rounded())
}

/// Validates raw inputs and returns the `{DH, DG, Tm, C50}` string object.
///
/// # Errors
///
/// Returns [`TfoError::InvalidSequence`] or [`TfoError::InvalidCondition`]
/// for inputs outside the model's domain, and
/// [`TfoError::NumericDegeneracy`] if Tm or C50 is undefined.
pub fn predict_str(
    sequence: &str,
    ph: f64,
    tfo_conc: f64,
    dup_conc: f64,
) -> Result<FormattedPrediction, TfoError> {
    let sequence: TfoSequence = sequence.parse()?;
    let conditions = Conditions::new(ph, tfo_conc, dup_conc)?;
    predict(&sequence, &conditions).map(|result| result.formatted())
}

/// High-level entry point for analyzing one or many oligos under shared
/// conditions.
///
/// # Examples
///
/// ## Analyze a sequence string
///
/// ```rust
/// use tfo_core::{TfoAnalyzer, config::TfoConfig, types::Conditions};
///
/// let analyzer = TfoAnalyzer::new(TfoConfig::default());
/// let conditions = Conditions::new(7.2, 5.0, 10.0)?;
///
/// let results = analyzer.analyze_sequence(
///     "CUUCUCUCUUUUCCU",
///     conditions,
///     Some("tfo1".to_string()),
/// );
/// assert!(results.is_success());
/// # Ok::<(), tfo_core::types::TfoError>(())
/// ```
///
/// ## Analyze a FASTA file
///
/// ```rust,no_run
/// use tfo_core::{TfoAnalyzer, config::TfoConfig, types::Conditions};
///
/// let analyzer = TfoAnalyzer::new(TfoConfig::default());
/// let conditions = Conditions::new(6.8, 2.0, 4.0)?;
///
/// for result in analyzer.analyze_fasta_file("oligos.fasta", conditions)? {
///     match &result.prediction {
///         Ok(prediction) => println!("{}: Tm {} C", result.record.header, prediction.tm),
///         Err(e) => println!("{}: {}", result.record.header, e),
///     }
/// }
/// # Ok::<(), tfo_core::types::TfoError>(())
/// ```
#[derive(Debug)]
pub struct TfoAnalyzer {
    /// Configuration options for the analysis
    pub config: TfoConfig,
}

impl TfoAnalyzer {
    pub const fn new(config: TfoConfig) -> Self {
        Self { config }
    }

    /// Creates an analyzer and sizes the global thread pool from the config.
    ///
    /// # Errors
    ///
    /// Returns [`TfoError::ThreadPool`] if the pool cannot be configured,
    /// e.g. because it was already initialized.
    pub fn with_config(config: TfoConfig) -> Result<Self, TfoError> {
        if let Some(num_threads) = config.num_threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build_global()
                .map_err(|e| {
                    TfoError::ThreadPool(format!("Failed to configure thread pool: {e}"))
                })?;
        }

        Ok(Self::new(config))
    }

    /// Analyzes a single sequence string.
    ///
    /// `header` defaults to [`DEFAULT_HEADER`].
    pub fn analyze_sequence(
        &self,
        sequence: &str,
        conditions: Conditions,
        header: Option<String>,
    ) -> TfoResults {
        let header = header.unwrap_or_else(|| DEFAULT_HEADER.to_string());
        self.analyze_sequence_bytes(sequence.as_bytes(), conditions, header, None)
    }

    /// Analyzes raw sequence bytes; validation failures land in the result.
    pub fn analyze_sequence_bytes(
        &self,
        sequence: &[u8],
        conditions: Conditions,
        header: String,
        description: Option<String>,
    ) -> TfoResults {
        let prediction =
            TfoSequence::new(sequence).and_then(|sequence| predict(&sequence, &conditions));

        if let Err(e) = &prediction {
            warn!(record = %header, error = %e, "prediction failed");
        }

        TfoResults {
            record: RecordInfo {
                header,
                description,
                sequence: String::from_utf8_lossy(sequence).into_owned(),
            },
            conditions,
            prediction,
        }
    }

    /// Analyzes records in parallel, keeping their input order.
    pub fn analyze_records(
        &self,
        records: Vec<FastaRecord>,
        conditions: Conditions,
    ) -> Vec<TfoResults> {
        let results: Vec<TfoResults> = records
            .into_par_iter()
            .map(|(header, description, sequence)| {
                self.analyze_sequence_bytes(&sequence, conditions, header, description)
            })
            .collect();

        if !self.config.quiet {
            let failed = results.iter().filter(|r| !r.is_success()).count();
            info!(records = results.len(), failed, "analysis complete");
        }

        results
    }

    /// Reads a FASTA file and analyzes every record.
    ///
    /// # Errors
    ///
    /// Returns [`TfoError`] if the file cannot be read or is not valid FASTA.
    /// Per-record failures are reported inside each [`TfoResults`].
    pub fn analyze_fasta_file<P: AsRef<Path>>(
        &self,
        path: P,
        conditions: Conditions,
    ) -> Result<Vec<TfoResults>, TfoError> {
        let path = path.as_ref();
        let records = read_fasta_sequences(path)?;
        if !self.config.quiet {
            info!(path = %path.display(), records = records.len(), "read FASTA input");
        }
        Ok(self.analyze_records(records, conditions))
    }

    /// Parses FASTA content held in memory and analyzes every record.
    ///
    /// # Errors
    ///
    /// Returns [`TfoError::ParseError`] if the content is not valid FASTA.
    pub fn analyze_fasta_str(
        &self,
        content: &str,
        conditions: Conditions,
    ) -> Result<Vec<TfoResults>, TfoError> {
        let records = parse_fasta_str(content)?;
        Ok(self.analyze_records(records, conditions))
    }
}
