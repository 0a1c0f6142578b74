// =============================================================================
// =============================================================================

/// Version string reported by the command-line tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identifier used when a sequence is analyzed without a FASTA header
pub const DEFAULT_HEADER: &str = "TFO_Seq_1";

// =============================================================================
// =============================================================================

/// Nearest-neighbour enthalpy coefficients (kcal/mol), aligned to
/// `[CC, UC + CU, UU]`.
pub const NN_DH: [f64; 3] = [-10.95, -5.73, -6.44];

/// Nearest-neighbour free-energy coefficients (kcal/mol), aligned to
/// `[C, U, CC, bias]`.
pub const NN_DG: [f64; 4] = [-1.891, -0.758, -0.331, 2.646];

/// pH correction pair `[a, b]` in `C * (pH - 5.6) * (a + b * CC)`.
pub const PH_CORRECTION: [f64; 2] = [0.893, -0.005];

/// pH at which the correction term vanishes
pub const PH_NEUTRAL_POINT: f64 = 5.6;

// =============================================================================
// =============================================================================

/// Ideal gas constant in kcal/(mol K)
pub const GAS_CONSTANT: f64 = 0.0019858;

/// Reference temperature for the melting temperature formula (K)
pub const TM_REFERENCE_TEMPERATURE: f64 = 298.0;

/// Reference temperature for the C50 formula (K)
pub const C50_REFERENCE_TEMPERATURE: f64 = 310.0;

/// Offset between Kelvin and Celsius
pub const KELVIN_OFFSET: f64 = 273.15;

/// Converts the caller's oligo concentration (µM) to molar
pub const MICROMOLAR_TO_MOLAR: f64 = 1e-6;

/// Converts the equilibrium-derived concentration (M) to µM
pub const MOLAR_TO_MICROMOLAR: f64 = 1e6;

/// Strand-count factor inside `ln(4 / Ct)`
pub const STRAND_FACTOR: f64 = 4.0;

/// Share of the initial duplex left free at 50% triplex formation
pub const FREE_DUPLEX_FRACTION: f64 = 0.5;

/// Denominators of the Tm formula smaller than this (kcal/mol) are degenerate
pub const TM_DENOMINATOR_EPSILON: f64 = 1e-9;

// =============================================================================
// =============================================================================

/// Lowest accepted pH (inclusive)
pub const MIN_PH: f64 = 4.5;

/// Highest accepted pH (inclusive)
pub const MAX_PH: f64 = 8.0;

/// Decimal places for DH, DG and Tm
pub const ENERGY_DECIMALS: usize = 1;

/// Decimal places for C50
pub const C50_DECIMALS: usize = 3;

// =============================================================================
// =============================================================================

/// Canonical sample oligo
pub const SAMPLE_SEQUENCE: &str = "CUUCUCUCUUUUCCU";

/// Canonical sample pH
pub const SAMPLE_PH: f64 = 7.2;

/// Canonical sample oligo concentration (µM)
pub const SAMPLE_TFO_CONC: f64 = 5.0;

/// Canonical sample duplex concentration (µM)
pub const SAMPLE_DUP_CONC: f64 = 10.0;
