//! Fixed biochemical constant tables keyed by the closed amino-acid alphabet.
//!
//! The values are the ones the ranking criteria were calibrated against; they
//! make no accuracy claim beyond that.

use super::residue::AminoAcid;
use thiserror::Error;

/// Charge classification of a residue's side chain at assay-relevant pH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChargeSign {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstantError {
    #[error("side-chain pKa for residue '{residue}' is undefined")]
    Undefined { residue: AminoAcid },
}

const DEFAULT_N_TERMINAL_PKA: f64 = 8.2;
const DEFAULT_C_TERMINAL_PKA: f64 = 3.1;

/// Side-chain (charge sign, pKa) for the seven ionizable residues.
///
/// Coupling the two in one table guarantees that every residue classified as
/// charged has a defined pKa, which is what lets the titration arithmetic in
/// the engine stay total.
fn ionizable(residue: AminoAcid) -> Option<(ChargeSign, f64)> {
    match residue {
        AminoAcid::Lysine => Some((ChargeSign::Positive, 10.53)),
        AminoAcid::Arginine => Some((ChargeSign::Positive, 12.48)),
        AminoAcid::Histidine => Some((ChargeSign::Positive, 6.0)),
        AminoAcid::AsparticAcid => Some((ChargeSign::Negative, 3.86)),
        AminoAcid::GlutamicAcid => Some((ChargeSign::Negative, 4.25)),
        AminoAcid::Cysteine => Some((ChargeSign::Negative, 8.33)),
        AminoAcid::Tyrosine => Some((ChargeSign::Negative, 10.07)),
        _ => None,
    }
}

/// Side-chain acid dissociation constant, defined for the seven ionizable
/// residues only.
pub fn side_chain_pka(residue: AminoAcid) -> Result<f64, ConstantError> {
    ionizable(residue)
        .map(|(_, pka)| pka)
        .ok_or(ConstantError::Undefined { residue })
}

/// Charge sign and pKa in one lookup, for callers iterating a sequence.
pub fn side_chain_ionization(residue: AminoAcid) -> Option<(ChargeSign, f64)> {
    ionizable(residue)
}

pub fn charge_sign(residue: AminoAcid) -> ChargeSign {
    ionizable(residue).map_or(ChargeSign::Neutral, |(sign, _)| sign)
}

/// pKa contribution of the residue when it sits at the peptide's N-terminus.
pub fn n_terminal_pka(residue: AminoAcid) -> f64 {
    let offset = match residue {
        AminoAcid::Proline => -1.0,
        AminoAcid::Glycine | AminoAcid::Serine | AminoAcid::Threonine => 0.1,
        AminoAcid::AsparticAcid | AminoAcid::GlutamicAcid => -0.2,
        _ => 0.0,
    };
    DEFAULT_N_TERMINAL_PKA + offset
}

/// pKa contribution of the residue when it sits at the peptide's C-terminus.
pub fn c_terminal_pka(residue: AminoAcid) -> f64 {
    let offset = match residue {
        AminoAcid::AsparticAcid | AminoAcid::GlutamicAcid => 0.2,
        AminoAcid::Lysine | AminoAcid::Arginine => -0.1,
        _ => 0.0,
    };
    DEFAULT_C_TERMINAL_PKA + offset
}

/// Kyte-Doolittle hydrophobicity index, defined for all twenty residues.
pub fn kd_score(residue: AminoAcid) -> f64 {
    match residue {
        AminoAcid::Alanine => 1.8,
        AminoAcid::Arginine => -4.5,
        AminoAcid::Asparagine => -3.5,
        AminoAcid::AsparticAcid => -3.5,
        AminoAcid::Cysteine => 2.5,
        AminoAcid::GlutamicAcid => -3.5,
        AminoAcid::Glutamine => -3.5,
        AminoAcid::Glycine => -0.4,
        AminoAcid::Histidine => -3.2,
        AminoAcid::Isoleucine => 4.5,
        AminoAcid::Leucine => 3.8,
        AminoAcid::Lysine => -3.9,
        AminoAcid::Methionine => 1.9,
        AminoAcid::Phenylalanine => 2.8,
        AminoAcid::Proline => -1.6,
        AminoAcid::Serine => -0.8,
        AminoAcid::Threonine => -0.7,
        AminoAcid::Tryptophan => -0.9,
        AminoAcid::Tyrosine => -1.3,
        AminoAcid::Valine => 4.2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_chain_pka_is_defined_for_the_seven_ionizable_residues() {
        assert_eq!(side_chain_pka(AminoAcid::Lysine), Ok(10.53));
        assert_eq!(side_chain_pka(AminoAcid::Arginine), Ok(12.48));
        assert_eq!(side_chain_pka(AminoAcid::Histidine), Ok(6.0));
        assert_eq!(side_chain_pka(AminoAcid::AsparticAcid), Ok(3.86));
        assert_eq!(side_chain_pka(AminoAcid::GlutamicAcid), Ok(4.25));
        assert_eq!(side_chain_pka(AminoAcid::Cysteine), Ok(8.33));
        assert_eq!(side_chain_pka(AminoAcid::Tyrosine), Ok(10.07));
    }

    #[test]
    fn side_chain_pka_fails_for_non_ionizable_residues() {
        assert_eq!(
            side_chain_pka(AminoAcid::Glycine),
            Err(ConstantError::Undefined {
                residue: AminoAcid::Glycine
            })
        );
        assert!(side_chain_pka(AminoAcid::Alanine).is_err());
        assert!(side_chain_pka(AminoAcid::Tryptophan).is_err());
    }

    #[test]
    fn charge_sign_classifies_basic_residues_as_positive() {
        assert_eq!(charge_sign(AminoAcid::Histidine), ChargeSign::Positive);
        assert_eq!(charge_sign(AminoAcid::Lysine), ChargeSign::Positive);
        assert_eq!(charge_sign(AminoAcid::Arginine), ChargeSign::Positive);
    }

    #[test]
    fn charge_sign_classifies_acidic_residues_as_negative() {
        assert_eq!(charge_sign(AminoAcid::AsparticAcid), ChargeSign::Negative);
        assert_eq!(charge_sign(AminoAcid::GlutamicAcid), ChargeSign::Negative);
        assert_eq!(charge_sign(AminoAcid::Cysteine), ChargeSign::Negative);
        assert_eq!(charge_sign(AminoAcid::Tyrosine), ChargeSign::Negative);
    }

    #[test]
    fn charge_sign_defaults_to_neutral_for_the_rest() {
        for symbol in "ANQGILMFPSTWV".chars() {
            let residue = AminoAcid::from_symbol(symbol).unwrap();
            assert_eq!(charge_sign(residue), ChargeSign::Neutral);
        }
    }

    #[test]
    fn every_charged_residue_has_a_defined_pka() {
        for symbol in "ARNDCEQGHILKMFPSTWYV".chars() {
            let residue = AminoAcid::from_symbol(symbol).unwrap();
            if charge_sign(residue) != ChargeSign::Neutral {
                assert!(side_chain_pka(residue).is_ok());
            }
        }
    }

    #[test]
    fn n_terminal_pka_applies_residue_specific_offsets() {
        assert!((n_terminal_pka(AminoAcid::Proline) - 7.2).abs() < 1e-9);
        assert!((n_terminal_pka(AminoAcid::Glycine) - 8.3).abs() < 1e-9);
        assert!((n_terminal_pka(AminoAcid::AsparticAcid) - 8.0).abs() < 1e-9);
        assert_eq!(n_terminal_pka(AminoAcid::Alanine), 8.2);
    }

    #[test]
    fn c_terminal_pka_applies_residue_specific_offsets() {
        assert!((c_terminal_pka(AminoAcid::GlutamicAcid) - 3.3).abs() < 1e-9);
        assert!((c_terminal_pka(AminoAcid::Lysine) - 3.0).abs() < 1e-9);
        assert!((c_terminal_pka(AminoAcid::Arginine) - 3.0).abs() < 1e-9);
        assert_eq!(c_terminal_pka(AminoAcid::Alanine), 3.1);
    }

    #[test]
    fn kd_score_covers_all_twenty_residues() {
        assert_eq!(kd_score(AminoAcid::Isoleucine), 4.5);
        assert_eq!(kd_score(AminoAcid::Arginine), -4.5);
        assert_eq!(kd_score(AminoAcid::Alanine), 1.8);
        assert_eq!(kd_score(AminoAcid::Glycine), -0.4);
    }
}
