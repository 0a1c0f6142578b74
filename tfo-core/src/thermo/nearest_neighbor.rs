use crate::composition::{EnthalpyComposition, FreeEnergyComposition};
use crate::constants::{NN_DG, NN_DH};

fn dot<const N: usize>(composition: &[f64; N], coefficients: &[f64; N]) -> f64 {
    composition
        .iter()
        .zip(coefficients)
        .map(|(count, coefficient)| count * coefficient)
        .sum()
}

/// Enthalpy change (kcal/mol) from the dinucleotide composition.
#[must_use]
pub fn predict_dh(composition: &EnthalpyComposition) -> f64 {
    dot(&composition.as_vector(), &NN_DH)
}

/// Uncorrected free-energy change (kcal/mol) from the nucleotide composition.
#[must_use]
pub fn predict_dg(composition: &FreeEnergyComposition) -> f64 {
    dot(&composition.as_vector(), &NN_DG)
}
