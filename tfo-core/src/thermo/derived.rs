use crate::constants::{
    C50_REFERENCE_TEMPERATURE, FREE_DUPLEX_FRACTION, GAS_CONSTANT, KELVIN_OFFSET,
    MICROMOLAR_TO_MOLAR, MOLAR_TO_MICROMOLAR, STRAND_FACTOR, TM_DENOMINATOR_EPSILON,
    TM_REFERENCE_TEMPERATURE,
};
use crate::types::{Conditions, DerivedQuantity, TfoError};

/// `298 * R * ln(4 / Ct)` with `Ct` converted from µM to M.
fn concentration_term(conditions: &Conditions) -> f64 {
    let total_molar = conditions.tfo_conc() * MICROMOLAR_TO_MOLAR;
    TM_REFERENCE_TEMPERATURE * GAS_CONSTANT * (STRAND_FACTOR / total_molar).ln()
}

/// Melting temperature in Kelvin.
///
/// `Tm = 298 * DH / (DH - DG - 298 * R * ln(4 / Ct))`
///
/// # Errors
///
/// Returns [`TfoError::NumericDegeneracy`] when the denominator vanishes or
/// the result is not finite.
pub fn compute_tm(dh: f64, dg: f64, conditions: &Conditions) -> Result<f64, TfoError> {
    let denominator = dh - dg - concentration_term(conditions);
    if !denominator.is_finite() || denominator.abs() < TM_DENOMINATOR_EPSILON {
        return Err(TfoError::NumericDegeneracy {
            quantity: DerivedQuantity::MeltingTemperature,
            reason: format!(
                "denominator DH - DG - RT ln(4/Ct) = {denominator:e} for DH = {dh}, DG = {dg}"
            ),
        });
    }

    let tm = TM_REFERENCE_TEMPERATURE * dh / denominator;
    if !tm.is_finite() {
        return Err(TfoError::NumericDegeneracy {
            quantity: DerivedQuantity::MeltingTemperature,
            reason: format!("non-finite result {tm} for DH = {dh}, DG = {dg}"),
        });
    }
    Ok(tm)
}

/// Oligo concentration (µM) giving 50% triplex formation.
///
/// At half saturation the free duplex equals half the initial duplex, so
/// inverting the equilibrium gives `C50 = exp(DG / RT) + d / 2`, scaled to µM.
/// The `d / 2` term is added as supplied, without checking its relation to
/// the equilibrium term.
///
/// # Errors
///
/// Returns [`TfoError::NumericDegeneracy`] when the exponential overflows.
pub fn compute_c50(dg: f64, conditions: &Conditions) -> Result<f64, TfoError> {
    let equilibrium = (dg / (C50_REFERENCE_TEMPERATURE * GAS_CONSTANT)).exp();
    let c50 = MOLAR_TO_MICROMOLAR * equilibrium + FREE_DUPLEX_FRACTION * conditions.dup_conc();

    if !c50.is_finite() {
        return Err(TfoError::NumericDegeneracy {
            quantity: DerivedQuantity::C50,
            reason: format!("exp(DG/RT) overflows for DG = {dg}"),
        });
    }
    Ok(c50)
}

#[must_use]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}
