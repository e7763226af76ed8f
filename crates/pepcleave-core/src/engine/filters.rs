//! The criteria filter bank: fourteen independent predicates over a peptide
//! fragment and its parent protein.
//!
//! Every predicate means "this fragment exhibits the flagged (undesirable)
//! property". Each is total over well-formed fragments, including
//! single-residue ones; numeric thresholds are injected through
//! [`DigestConfig`], never owned here.

use crate::core::residue::AminoAcid;
use crate::engine::config::DigestConfig;
use crate::engine::criteria::Criterion;
use crate::engine::digestion::ProteinContext;
use crate::engine::peptide::PeptideFragment;

impl Criterion {
    /// Evaluates this criterion's predicate against one fragment.
    pub fn evaluate(
        &self,
        peptide: &mut PeptideFragment,
        protein: &ProteinContext,
        config: &DigestConfig,
    ) -> bool {
        match self {
            Criterion::NotUnique => is_not_unique(peptide, protein),
            Criterion::ContainsMissedCleavages => contains_missed_cleavages(peptide, protein),
            Criterion::HasFlankingCutSites => {
                has_flanking_cut_sites(peptide, protein, config.number_flanking_amino_acids)
            }
            Criterion::LackingFlankingAminoAcids => {
                lacking_flanking_amino_acids(peptide, protein, config.number_flanking_amino_acids)
            }
            Criterion::OutlierLength => {
                peptide.len() < config.min_peptide_length
                    || peptide.len() > config.max_peptide_length
            }
            Criterion::ContainsNTerminalGlutamineMotif => {
                peptide.sequence().first() == Some(&AminoAcid::Glutamine)
            }
            Criterion::ContainsAsparagineGlycineMotif => {
                contains_motif(peptide, AminoAcid::Asparagine, AminoAcid::Glycine)
            }
            Criterion::ContainsAsparticProlineMotif => {
                contains_motif(peptide, AminoAcid::AsparticAcid, AminoAcid::Proline)
            }
            Criterion::ContainsMethionine => peptide.sequence().contains(&AminoAcid::Methionine),
            Criterion::ContainsCysteine => peptide.sequence().contains(&AminoAcid::Cysteine),
            Criterion::OutlierHydrophobicity => {
                let kd = peptide.max_kd_score(config.max_hydrophobicity_window);
                kd <= config.min_kd_score || kd >= config.max_kd_score
            }
            Criterion::OutlierChargeState => {
                let charge = peptide.charge_state_in_formic_acid();
                charge <= config.low_charge_state || charge >= config.high_charge_state
            }
            Criterion::OutlierPi => {
                let pi = peptide.isoelectric_point();
                pi < config.low_pi_range || pi > config.high_pi_range
            }
            Criterion::ContainsLongHomopolymericStretch => {
                contains_long_homopolymeric_stretch(peptide, config.max_homopolymeric_length)
            }
        }
    }
}

/// True if the fragment's sequence occurs at least twice as a substring of
/// the protein sequence. The scan slides one residue at a time and
/// short-circuits on the second match.
fn is_not_unique(peptide: &PeptideFragment, protein: &ProteinContext) -> bool {
    if peptide.is_empty() || peptide.len() > protein.length() {
        return false;
    }

    let mut count = 0;
    for window in protein.sequence().windows(peptide.len()) {
        if window == peptide.sequence() {
            count += 1;
            if count > 1 {
                return true;
            }
        }
    }
    false
}

/// True if any position covered by the fragment is a missed cut site.
fn contains_missed_cleavages(peptide: &PeptideFragment, protein: &ProteinContext) -> bool {
    let covered = peptide.position()..peptide.position() + peptide.len();
    protein
        .missed_cut_sites()
        .iter()
        .any(|site| covered.contains(site))
}

/// True if a window of `flank` positions immediately outside either end of
/// the fragment intersects the combined cut-site set. The fragment's own
/// bounding cut sites are excluded from both windows.
fn has_flanking_cut_sites(
    peptide: &PeptideFragment,
    protein: &ProteinContext,
    flank: usize,
) -> bool {
    let position = peptide.position() as i64;
    let flank = flank as i64;

    let left_start = (position - flank - 1).max(1);
    let left_end = position - 2;

    let peptide_end = position + peptide.len() as i64;
    let right_start = peptide_end;
    let right_end = (peptide_end + flank - 1).min(protein.length() as i64);

    protein.all_cut_sites().iter().any(|&site| {
        let site = site as i64;
        (left_start..=left_end).contains(&site) || (right_start..=right_end).contains(&site)
    })
}

/// True if fewer than `flank` residues exist on either side of the fragment
/// within the protein. Exactly `flank` residues on each side is sufficient.
fn lacking_flanking_amino_acids(
    peptide: &PeptideFragment,
    protein: &ProteinContext,
    flank: usize,
) -> bool {
    let left_start = peptide.position() as i64 - flank as i64;
    let right_end = peptide.position() + peptide.len() + flank - 1;
    left_start < 1 || right_end > protein.length()
}

/// Overlap-aware scan for a two-residue motif.
fn contains_motif(peptide: &PeptideFragment, first: AminoAcid, second: AminoAcid) -> bool {
    peptide
        .sequence()
        .windows(2)
        .any(|pair| pair == [first, second])
}

/// True if any run of identical consecutive residues is longer than
/// `max_run`.
fn contains_long_homopolymeric_stretch(peptide: &PeptideFragment, max_run: usize) -> bool {
    let mut run = 0usize;
    let mut previous: Option<AminoAcid> = None;
    for &residue in peptide.sequence() {
        if previous == Some(residue) {
            run += 1;
            if run > max_run {
                return true;
            }
        } else {
            previous = Some(residue);
            run = 1;
        }
    }
    false
}
