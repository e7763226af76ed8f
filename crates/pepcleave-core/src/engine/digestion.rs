//! Single-pass protease digestion of a protein sequence.
//!
//! The scan classifies every residue position with the protease rule and
//! records cut sites; the recorded sites then partition the sequence into
//! peptide fragments. Concatenating the fragments in order always reproduces
//! the protein sequence exactly.

use crate::core::protease::{Protease, ProteaseError, SiteStatus};
use crate::core::residue::AminoAcid;
use crate::engine::peptide::PeptideFragment;
use std::collections::BTreeSet;

/// One protein's digestion state: the parsed sequence, the chosen protease,
/// the cut-site bookkeeping from the scan, and the ordered fragments.
///
/// A cut site `s` means the protease cuts between residues `s` and `s + 1`
/// (1-indexed); `missed_cut_sites` holds recognized-but-inhibited sites.
#[derive(Debug, Clone)]
pub struct ProteinContext {
    sequence: Vec<AminoAcid>,
    protease: Protease,
    cut_sites: BTreeSet<usize>,
    missed_cut_sites: BTreeSet<usize>,
    all_cut_sites: BTreeSet<usize>,
    peptides: Vec<PeptideFragment>,
}

impl ProteinContext {
    /// Runs the digestion scan and partitions the sequence into fragments.
    pub fn digest(sequence: Vec<AminoAcid>, protease: Protease) -> Result<Self, ProteaseError> {
        let mut cut_sites = BTreeSet::new();
        let mut missed_cut_sites = BTreeSet::new();

        for position in 0..sequence.len() {
            match protease.site_status(&sequence, position)? {
                SiteStatus::Cleavage => {
                    cut_sites.insert(position + 1);
                }
                SiteStatus::Missed => {
                    missed_cut_sites.insert(position + 1);
                }
                SiteStatus::Neutral => {}
            }
        }

        let peptides = Self::partition(&sequence, &cut_sites);
        let all_cut_sites = cut_sites.union(&missed_cut_sites).copied().collect();

        Ok(Self {
            sequence,
            protease,
            cut_sites,
            missed_cut_sites,
            all_cut_sites,
            peptides,
        })
    }

    fn partition(sequence: &[AminoAcid], cut_sites: &BTreeSet<usize>) -> Vec<PeptideFragment> {
        if sequence.is_empty() {
            return Vec::new();
        }

        if cut_sites.is_empty() {
            return vec![PeptideFragment::new(sequence.to_vec(), 1)];
        }

        let mut peptides = Vec::with_capacity(cut_sites.len() + 1);
        let mut start = 0usize;
        for &cut_site in cut_sites {
            // Adjacent cut sites produce an empty slice; skip it.
            if cut_site > start {
                peptides.push(PeptideFragment::new(
                    sequence[start..cut_site].to_vec(),
                    start + 1,
                ));
            }
            start = cut_site;
        }

        if start < sequence.len() {
            peptides.push(PeptideFragment::new(sequence[start..].to_vec(), start + 1));
        }

        peptides
    }

    pub fn sequence(&self) -> &[AminoAcid] {
        &self.sequence
    }

    pub fn sequence_as_string(&self) -> String {
        AminoAcid::sequence_to_string(&self.sequence)
    }

    pub fn length(&self) -> usize {
        self.sequence.len()
    }

    pub fn protease(&self) -> Protease {
        self.protease
    }

    /// Boundary positions where the protease cut.
    pub fn cut_sites(&self) -> &BTreeSet<usize> {
        &self.cut_sites
    }

    /// Recognized-but-inhibited boundary positions.
    pub fn missed_cut_sites(&self) -> &BTreeSet<usize> {
        &self.missed_cut_sites
    }

    /// Union of cut and missed cut sites.
    pub fn all_cut_sites(&self) -> &BTreeSet<usize> {
        &self.all_cut_sites
    }

    /// Fragments in sequence order.
    pub fn peptides(&self) -> &[PeptideFragment] {
        &self.peptides
    }

    pub fn peptides_mut(&mut self) -> &mut [PeptideFragment] {
        &mut self.peptides
    }

    /// Detaches the fragments so they can be mutated alongside immutable
    /// access to the context; the evaluator restores them when done.
    pub(crate) fn take_peptides(&mut self) -> Vec<PeptideFragment> {
        std::mem::take(&mut self.peptides)
    }

    pub(crate) fn restore_peptides(&mut self, peptides: Vec<PeptideFragment>) {
        self.peptides = peptides;
    }
}
