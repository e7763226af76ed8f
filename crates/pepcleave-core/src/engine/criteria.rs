//! The closed set of criterion codes, their importance order, and their
//! ranking weights.

use serde::Serialize;
use std::fmt;

/// Identifying code of one criteria filter. Each code flags an undesirable
/// property of a peptide fragment for targeted mass-spectrometry assays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    NotUnique,
    ContainsMissedCleavages,
    HasFlankingCutSites,
    LackingFlankingAminoAcids,
    OutlierLength,
    ContainsNTerminalGlutamineMotif,
    ContainsAsparagineGlycineMotif,
    ContainsAsparticProlineMotif,
    ContainsMethionine,
    ContainsCysteine,
    OutlierHydrophobicity,
    OutlierChargeState,
    OutlierPi,
    ContainsLongHomopolymericStretch,
}

impl Criterion {
    /// Every criterion, in the order the filter bank runs them.
    pub const ALL: [Criterion; 14] = [
        Criterion::NotUnique,
        Criterion::ContainsMissedCleavages,
        Criterion::HasFlankingCutSites,
        Criterion::LackingFlankingAminoAcids,
        Criterion::OutlierLength,
        Criterion::ContainsNTerminalGlutamineMotif,
        Criterion::ContainsAsparagineGlycineMotif,
        Criterion::ContainsAsparticProlineMotif,
        Criterion::ContainsMethionine,
        Criterion::ContainsCysteine,
        Criterion::OutlierHydrophobicity,
        Criterion::OutlierChargeState,
        Criterion::OutlierPi,
        Criterion::ContainsLongHomopolymericStretch,
    ];

    /// The fixed importance order, least important first. Ranking weights are
    /// derived from positions in this list.
    pub const LEAST_TO_MOST_IMPORTANT: [Criterion; 14] = [
        Criterion::NotUnique,
        Criterion::HasFlankingCutSites,
        Criterion::ContainsMissedCleavages,
        Criterion::ContainsNTerminalGlutamineMotif,
        Criterion::ContainsAsparagineGlycineMotif,
        Criterion::ContainsAsparticProlineMotif,
        Criterion::ContainsMethionine,
        Criterion::OutlierLength,
        Criterion::OutlierHydrophobicity,
        Criterion::OutlierChargeState,
        Criterion::OutlierPi,
        Criterion::ContainsLongHomopolymericStretch,
        Criterion::LackingFlankingAminoAcids,
        Criterion::ContainsCysteine,
    ];

    /// Zero-based position in [`Self::LEAST_TO_MOST_IMPORTANT`].
    fn importance_index(&self) -> u32 {
        match self {
            Criterion::NotUnique => 0,
            Criterion::HasFlankingCutSites => 1,
            Criterion::ContainsMissedCleavages => 2,
            Criterion::ContainsNTerminalGlutamineMotif => 3,
            Criterion::ContainsAsparagineGlycineMotif => 4,
            Criterion::ContainsAsparticProlineMotif => 5,
            Criterion::ContainsMethionine => 6,
            Criterion::OutlierLength => 7,
            Criterion::OutlierHydrophobicity => 8,
            Criterion::OutlierChargeState => 9,
            Criterion::OutlierPi => 10,
            Criterion::ContainsLongHomopolymericStretch => 11,
            Criterion::LackingFlankingAminoAcids => 12,
            Criterion::ContainsCysteine => 13,
        }
    }

    /// Ranking weight `2^(n-1-i)` over the least-to-most-important list.
    ///
    /// Note the polarity: the FIRST-listed ("least important") code carries
    /// the LARGEST weight. Rankings produced with these weights are part of
    /// the observable behavior; do not "correct" this without versioning it.
    pub fn weight(&self) -> u64 {
        let n = Self::LEAST_TO_MOST_IMPORTANT.len() as u32;
        1 << (n - 1 - self.importance_index())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::NotUnique => "not_unique",
            Criterion::ContainsMissedCleavages => "contains_missed_cleavages",
            Criterion::HasFlankingCutSites => "has_flanking_cut_sites",
            Criterion::LackingFlankingAminoAcids => "lacking_flanking_amino_acids",
            Criterion::OutlierLength => "outlier_length",
            Criterion::ContainsNTerminalGlutamineMotif => "contains_n_terminal_glutamine_motif",
            Criterion::ContainsAsparagineGlycineMotif => "contains_asparagine_glycine_motif",
            Criterion::ContainsAsparticProlineMotif => "contains_aspartic_proline_motif",
            Criterion::ContainsMethionine => "contains_methionine",
            Criterion::ContainsCysteine => "contains_cysteine",
            Criterion::OutlierHydrophobicity => "outlier_hydrophobicity",
            Criterion::OutlierChargeState => "outlier_charge_state",
            Criterion::OutlierPi => "outlier_pi",
            Criterion::ContainsLongHomopolymericStretch => "contains_long_homopolymeric_stretch",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
