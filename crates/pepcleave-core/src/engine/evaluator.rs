//! Runs the criteria filter bank over every fragment of a digestion and
//! assigns the final ranks.

use crate::engine::config::DigestConfig;
use crate::engine::criteria::Criterion;
use crate::engine::digestion::ProteinContext;
use tracing::debug;

/// Applies an ordered collection of criteria filters to every peptide of a
/// digestion run, then ranks the peptides by total criterion weight.
#[derive(Debug, Clone)]
pub struct CriteriaEvaluator {
    bank: Vec<Criterion>,
}

impl Default for CriteriaEvaluator {
    fn default() -> Self {
        Self {
            bank: Criterion::ALL.to_vec(),
        }
    }
}

impl CriteriaEvaluator {
    /// An evaluator over the full filter bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// An evaluator over a custom subset or ordering of the bank.
    pub fn with_bank(bank: Vec<Criterion>) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> &[Criterion] {
        &self.bank
    }

    /// Evaluates every filter against every fragment, records the matched
    /// criterion codes on each fragment, and assigns ranks `1..=N`.
    ///
    /// Peptides are sorted ascending by the sum of their matched criteria
    /// weights; ties keep digestion order, so the result is deterministic.
    /// Rank 1 is the best candidate.
    pub fn evaluate(&self, protein: &mut ProteinContext, config: &DigestConfig) {
        let mut peptides = protein.take_peptides();

        for peptide in peptides.iter_mut() {
            for criterion in &self.bank {
                if criterion.evaluate(peptide, protein, config) {
                    peptide.add_criterion(*criterion);
                }
            }
        }

        let mut order: Vec<(usize, u64)> = peptides
            .iter()
            .map(|peptide| peptide.criteria().iter().map(Criterion::weight).sum())
            .enumerate()
            .collect();
        order.sort_by_key(|&(_, weight)| weight);

        for (rank, &(index, weight)) in order.iter().enumerate() {
            peptides[index].set_rank(rank + 1);
            debug!(
                peptide = %peptides[index].sequence_as_string(),
                weight,
                rank = rank + 1,
                "ranked peptide"
            );
        }

        protein.restore_peptides(peptides);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::protease::Protease;
    use crate::core::residue::AminoAcid;
    use std::collections::BTreeSet;

    fn evaluated(text: &str, config: &DigestConfig) -> ProteinContext {
        let mut protein =
            ProteinContext::digest(AminoAcid::parse_sequence(text).unwrap(), Protease::Trypsin)
                .unwrap();
        CriteriaEvaluator::new().evaluate(&mut protein, config);
        protein
    }

    #[test]
    fn ranks_form_a_permutation_without_gaps_or_duplicates() {
        let protein = evaluated("MKTAYIAKPRQAAKEEDIKNGAKCCCCK", &DigestConfig::default());
        let n = protein.peptides().len();
        assert!(n > 1);
        let ranks: BTreeSet<usize> = protein
            .peptides()
            .iter()
            .map(|p| p.rank().unwrap())
            .collect();
        assert_eq!(ranks, (1..=n).collect());
    }

    #[test]
    fn lowest_total_weight_receives_rank_one() {
        let protein = evaluated("MKTAYIAKPRQAA", &DigestConfig::default());
        let best = protein
            .peptides()
            .iter()
            .find(|p| p.rank() == Some(1))
            .unwrap();
        let best_weight: u64 = best.criteria().iter().map(Criterion::weight).sum();
        for peptide in protein.peptides() {
            let weight: u64 = peptide.criteria().iter().map(Criterion::weight).sum();
            assert!(weight >= best_weight);
        }
    }

    #[test]
    fn ties_keep_digestion_order() {
        // Every K fragment of KKKK-free repeats matches identical criteria,
        // so ranks must follow digestion order.
        let protein = evaluated("KRKRKR", &DigestConfig::default());
        let criteria_sets: BTreeSet<_> = protein.peptides().iter().map(|p| p.criteria()).collect();
        if criteria_sets.len() == 1 {
            let ranks: Vec<usize> = protein
                .peptides()
                .iter()
                .map(|p| p.rank().unwrap())
                .collect();
            let expected: Vec<usize> = (1..=protein.peptides().len()).collect();
            assert_eq!(ranks, expected);
        }
    }

    #[test]
    fn matched_criteria_are_recorded_on_the_fragment() {
        let protein = evaluated("MKTAYIAKPRQAA", &DigestConfig::default());
        let mk = &protein.peptides()[0];
        assert!(mk.criteria().contains(&Criterion::ContainsMethionine));
        assert!(mk.criteria().contains(&Criterion::OutlierLength));
        let tayiakpr = &protein.peptides()[1];
        assert!(
            tayiakpr
                .criteria()
                .contains(&Criterion::ContainsMissedCleavages)
        );
    }

    #[test]
    fn custom_bank_restricts_which_criteria_are_recorded() {
        let evaluator = CriteriaEvaluator::with_bank(vec![Criterion::OutlierLength]);
        let mut protein = ProteinContext::digest(
            AminoAcid::parse_sequence("MKTAYIAKPRQAA").unwrap(),
            Protease::Trypsin,
        )
        .unwrap();
        evaluator.evaluate(&mut protein, &DigestConfig::default());
        for peptide in protein.peptides() {
            assert!(
                peptide
                    .criteria()
                    .iter()
                    .all(|c| *c == Criterion::OutlierLength)
            );
        }
    }

    #[test]
    fn length_boundary_matches_configured_minimum() {
        // Two fragments of length 6 and 7 around a clean cut.
        let config = DigestConfig::builder()
            .number_flanking_amino_acids(0)
            .build()
            .unwrap();
        let protein = evaluated("AADAAKGGEGGGG", &config);
        let six = &protein.peptides()[0];
        let seven = &protein.peptides()[1];
        assert_eq!(six.len(), 6);
        assert_eq!(seven.len(), 7);
        assert!(six.criteria().contains(&Criterion::OutlierLength));
        assert!(!seven.criteria().contains(&Criterion::OutlierLength));
    }
}
