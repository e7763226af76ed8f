//! Peptide fragment state and its lazily cached property calculators.
//!
//! A fragment is created by the digestion scan, mutated twice (property
//! caching, then criteria/rank assignment by the evaluator), and read-only
//! afterwards. The pI, charge-state, and hydrophobicity accessors are
//! compute-if-absent: the first call stores the value in an owned field and
//! every later call returns it unchanged.

use crate::core::chemistry::{self, ChargeSign};
use crate::core::residue::AminoAcid;
use crate::engine::criteria::Criterion;
use std::collections::BTreeSet;

/// pH of the formic-acid mobile phase used for charge-state prediction.
const FORMIC_ACID_PH: f64 = 2.3;

/// Bisection stops once the bracketing interval is narrower than this.
const PI_PRECISION: f64 = 0.05;

/// Ionizable termini at fragment boundaries contribute at reduced weight.
const TERMINAL_RESIDUE_CHARGE_WEIGHT: f64 = 0.9;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeptideFragment {
    sequence: Vec<AminoAcid>,
    position: usize,
    pi: Option<f64>,
    charge_state: Option<i32>,
    max_kd_score: Option<f64>,
    criteria: BTreeSet<Criterion>,
    rank: Option<usize>,
}

impl PeptideFragment {
    /// `position` is 1-indexed within the parent protein.
    pub fn new(sequence: Vec<AminoAcid>, position: usize) -> Self {
        Self {
            sequence,
            position,
            pi: None,
            charge_state: None,
            max_kd_score: None,
            criteria: BTreeSet::new(),
            rank: None,
        }
    }

    pub fn sequence(&self) -> &[AminoAcid] {
        &self.sequence
    }

    pub fn sequence_as_string(&self) -> String {
        AminoAcid::sequence_to_string(&self.sequence)
    }

    /// 1-indexed start position within the parent protein.
    pub fn position(&self) -> usize {
        self.position
    }

    /// 1-indexed position of the last residue within the parent protein.
    pub fn end_position(&self) -> usize {
        self.position + self.sequence.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn criteria(&self) -> &BTreeSet<Criterion> {
        &self.criteria
    }

    pub(crate) fn add_criterion(&mut self, criterion: Criterion) {
        self.criteria.insert(criterion);
    }

    /// Final rank within the digestion run; `None` until evaluation.
    pub fn rank(&self) -> Option<usize> {
        self.rank
    }

    pub(crate) fn set_rank(&mut self, rank: usize) {
        self.rank = Some(rank);
    }

    /// Net charge of the fragment at the given pH, from the
    /// Henderson-Hasselbalch terms of both termini and every ionizable
    /// side chain. Positive side chains at the fragment boundaries are
    /// weighted down to reflect terminal charge suppression.
    pub(crate) fn net_charge_at(&self, ph: f64) -> f64 {
        let (Some(first), Some(last)) = (self.sequence.first(), self.sequence.last()) else {
            return 0.0;
        };

        let n_term = 1.0 / (1.0 + 10f64.powf(ph - chemistry::n_terminal_pka(*first)));
        let c_term = -1.0 / (1.0 + 10f64.powf(chemistry::c_terminal_pka(*last) - ph));

        let mut side_chains = 0.0;
        for (i, residue) in self.sequence.iter().enumerate() {
            let Some((sign, pka)) = chemistry::side_chain_ionization(*residue) else {
                continue;
            };
            match sign {
                ChargeSign::Positive => {
                    let weight = if i == 0 || i == self.sequence.len() - 1 {
                        TERMINAL_RESIDUE_CHARGE_WEIGHT
                    } else {
                        1.0
                    };
                    side_chains += weight / (1.0 + 10f64.powf(ph - pka));
                }
                ChargeSign::Negative => {
                    side_chains += -1.0 / (1.0 + 10f64.powf(pka - ph));
                }
                ChargeSign::Neutral => {}
            }
        }

        n_term + c_term + side_chains
    }

    /// Isoelectric point, estimated by bisection over pH 0..14 under the
    /// assumption that net charge is non-increasing in pH. Cached.
    pub fn isoelectric_point(&mut self) -> f64 {
        if let Some(pi) = self.pi {
            return pi;
        }

        let (mut low, mut high) = (0.0f64, 14.0f64);
        while high - low > PI_PRECISION {
            let mid = (low + high) / 2.0;
            if self.net_charge_at(mid) > 0.0 {
                low = mid;
            } else {
                high = mid;
            }
        }

        let pi = round2((low + high) / 2.0);
        self.pi = Some(pi);
        pi
    }

    /// Predicted dominant charge state in formic acid (pH 2.3), rounded to
    /// the nearest integer. Cached.
    pub fn charge_state_in_formic_acid(&mut self) -> i32 {
        if let Some(charge) = self.charge_state {
            return charge;
        }

        let charge = self.net_charge_at(FORMIC_ACID_PH).round() as i32;
        self.charge_state = Some(charge);
        charge
    }

    /// Maximum mean Kyte-Doolittle score over a sliding window of `window`
    /// residues. Fragments no longer than the window yield the plain mean
    /// over the whole fragment; an empty fragment yields 0.0. Cached.
    pub fn max_kd_score(&mut self, window: usize) -> f64 {
        if let Some(score) = self.max_kd_score {
            return score;
        }

        let score = self.compute_max_kd_score(window);
        self.max_kd_score = Some(score);
        score
    }

    fn compute_max_kd_score(&self, window: usize) -> f64 {
        if self.sequence.is_empty() {
            return 0.0;
        }

        let kd_values: Vec<f64> = self
            .sequence
            .iter()
            .map(|residue| chemistry::kd_score(*residue))
            .collect();

        if kd_values.len() <= window {
            // The whole-fragment mean is reported unrounded.
            return kd_values.iter().sum::<f64>() / kd_values.len() as f64;
        }

        let max = kd_values
            .windows(window)
            .map(|w| w.iter().sum::<f64>() / window as f64)
            .fold(f64::NEG_INFINITY, f64::max);
        round2(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(text: &str) -> PeptideFragment {
        PeptideFragment::new(AminoAcid::parse_sequence(text).unwrap(), 1)
    }

    #[test]
    fn bradykinin_has_basic_isoelectric_point() {
        let mut peptide = fragment("RPPGFSPFR");
        let pi = peptide.isoelectric_point();
        assert!((pi - 12.37).abs() < 1e-9, "pI was {pi}");
    }

    #[test]
    fn bradykinin_charge_state_in_formic_acid_rounds_to_three() {
        let mut peptide = fragment("RPPGFSPFR");
        assert_eq!(peptide.charge_state_in_formic_acid(), 3);
    }

    #[test]
    fn tryptic_fragments_have_expected_properties() {
        assert!((fragment("MK").isoelectric_point() - 9.04).abs() < 1e-9);
        assert!((fragment("TAYIAKPR").isoelectric_point() - 10.21).abs() < 1e-9);
        assert!((fragment("QAA").isoelectric_point() - 5.65).abs() < 1e-9);
        assert_eq!(fragment("MK").charge_state_in_formic_acid(), 2);
        assert_eq!(fragment("TAYIAKPR").charge_state_in_formic_acid(), 3);
        assert_eq!(fragment("QAA").charge_state_in_formic_acid(), 1);
    }

    #[test]
    fn net_charge_is_positive_at_low_ph_and_negative_at_high_ph() {
        let peptide = fragment("TAYIAKPR");
        assert!(peptide.net_charge_at(1.0) > 0.0);
        assert!(peptide.net_charge_at(13.5) < 0.0);
    }

    #[test]
    fn short_fragment_kd_score_is_the_unrounded_whole_fragment_mean() {
        // 9 residues with a window of 9 takes the mean branch.
        let mut peptide = fragment("RPPGFSPFR");
        let expected = (-4.5 + -1.6 + -1.6 + -0.4 + 2.8 + -0.8 + -1.6 + 2.8 + -4.5) / 9.0;
        assert!((peptide.max_kd_score(9) - expected).abs() < 1e-12);
    }

    #[test]
    fn long_fragment_kd_score_is_the_rounded_max_window_mean() {
        // 10 residues, window 9: two windows, the later one is more
        // hydrophobic (drops the leading Arg for a trailing Ile).
        let mut peptide = fragment("RPPGFSPFRI");
        let later_window = (-1.6 + -1.6 + -0.4 + 2.8 + -0.8 + -1.6 + 2.8 + -4.5 + 4.5) / 9.0;
        assert_eq!(peptide.max_kd_score(9), round2(later_window));
    }

    #[test]
    fn single_residue_fragment_kd_score_is_its_own_score() {
        let mut peptide = fragment("I");
        assert_eq!(peptide.max_kd_score(9), 4.5);
    }

    #[test]
    fn empty_fragment_kd_score_is_zero() {
        let mut peptide = PeptideFragment::new(Vec::new(), 1);
        assert_eq!(peptide.max_kd_score(9), 0.0);
    }

    #[test]
    fn property_accessors_return_cached_values_without_recomputation() {
        let mut peptide = fragment("TAYIAKPR");

        // Seed the caches with sentinel values; the accessors must return
        // them untouched instead of recomputing.
        peptide.pi = Some(99.0);
        peptide.charge_state = Some(-42);
        peptide.max_kd_score = Some(123.0);

        assert_eq!(peptide.isoelectric_point(), 99.0);
        assert_eq!(peptide.charge_state_in_formic_acid(), -42);
        assert_eq!(peptide.max_kd_score(9), 123.0);
    }

    #[test]
    fn property_accessors_are_idempotent() {
        let mut peptide = fragment("MKTAYIAK");
        let first = (
            peptide.isoelectric_point(),
            peptide.charge_state_in_formic_acid(),
            peptide.max_kd_score(9),
        );
        let second = (
            peptide.isoelectric_point(),
            peptide.charge_state_in_formic_acid(),
            peptide.max_kd_score(9),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn end_position_covers_the_last_residue() {
        let peptide = PeptideFragment::new(AminoAcid::parse_sequence("TAYIAKPR").unwrap(), 3);
        assert_eq!(peptide.position(), 3);
        assert_eq!(peptide.end_position(), 10);
    }

    #[test]
    fn add_criterion_has_set_semantics() {
        let mut peptide = fragment("MK");
        peptide.add_criterion(Criterion::ContainsMethionine);
        peptide.add_criterion(Criterion::ContainsMethionine);
        peptide.add_criterion(Criterion::OutlierLength);
        assert_eq!(peptide.criteria().len(), 2);
    }
}
