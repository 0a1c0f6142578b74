//! # TFO Thermo - Triplex Stability Prediction
//!
//! Estimates the thermodynamic stability of a (C,U) triplex-forming
//! oligonucleotide (TFO) binding a DNA duplex, from its sequence and the
//! solution conditions.
//!
//! ## Overview
//!
//! A nearest-neighbour (NN) model turns sequence composition into enthalpy
//! (DH) and free energy (DG). Because C+·G-C triplets need protonated
//! cytosine, DG is then corrected for pH. From the corrected energies the
//! library derives the melting temperature (Tm) at the given oligo
//! concentration and the oligo concentration giving 50% triplex formation
//! (C50).
//!
//! ## Quick Start
//!
//! ```rust
//! use tfo_core::engine::predict_str;
//!
//! let result = predict_str("CUUCUCUCUUUUCCU", 7.2, 5.0, 10.0)?;
//!
//! assert_eq!(result.dh, "-88.3");
//! assert_eq!(result.dg, "-7.3");
//! assert_eq!(result.tm, "22.5");
//! assert_eq!(result.c50, "11.762");
//! # Ok::<(), tfo_core::types::TfoError>(())
//! ```
//!
//! ## Units
//!
//! Energies are in kcal/mol and Tm in °C. Concentrations are read as µM:
//! the oligo concentration is scaled by `1e-6` to molar inside the Tm
//! formula, and C50 is reported in µM.
//!
//! ## Module Organization
//!
//! - [`sequence`]: validated sequences, occurrence counting, FASTA input
//! - [`composition`]: composition vectors for the DH and DG models
//! - [`thermo`]: NN energies, pH correction, Tm and C50
//! - [`engine`]: single predictions and the batch [`TfoAnalyzer`]
//! - [`output`]: text, JSON and TSV writers
//! - [`config`]: analysis configuration
//! - [`constants`]: model coefficients and physical constants
//! - [`types`]: conditions, results and errors
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, TfoError>`](types::TfoError):
//!
//! - Invalid sequences (empty, characters other than `C`/`U`)
//! - Conditions outside the supported domain (pH in `[4.5, 8.0]`)
//! - Undefined Tm or C50 for degenerate energies
//! - I/O and FASTA parsing errors

pub mod composition;
pub mod config;
pub mod constants;
pub mod engine;
pub mod output;
pub mod results;
pub mod sequence;
pub mod thermo;
pub mod types;

pub use engine::{TfoAnalyzer, predict, predict_str};
pub use types::TfoError;
