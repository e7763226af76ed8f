//! Protease variants and per-site cleavage classification.
//!
//! Each variant is a closed rule: a set of residues it cuts after and a set
//! of residues that block the cut when they immediately follow. Adding an
//! enzyme means adding a variant and its rule data; existing variants are
//! never touched.

use super::residue::AminoAcid;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The supported protease variant set. Only trypsin has an implemented
/// cleavage rule so far; selecting any other variant fails with
/// [`ProteaseError::NotImplemented`] at classification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protease {
    Trypsin,
    Chymotrypsin,
    Pepsin,
    Elastase,
    ProteinaseK,
    Thermolysin,
}

/// Classification of a single sequence position under a protease rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteStatus {
    /// The residue is not a cleavage trigger.
    Neutral,
    /// The residue would be cleaved after, but the next residue inhibits it.
    Missed,
    /// The protease cuts after this residue.
    Cleavage,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProteaseError {
    #[error("position {position} is out of bounds for a sequence of length {length}")]
    OutOfRange { position: usize, length: usize },

    #[error("cleavage rules for {protease} are not yet implemented")]
    NotImplemented { protease: Protease },

    #[error("unknown protease name '{0}'")]
    UnknownName(String),
}

impl Protease {
    /// Residues this protease cuts after.
    pub fn cleavage_residues(&self) -> Result<&'static [AminoAcid], ProteaseError> {
        match self {
            Protease::Trypsin => Ok(&[AminoAcid::Lysine, AminoAcid::Arginine]),
            _ => Err(ProteaseError::NotImplemented { protease: *self }),
        }
    }

    /// Residues that block a cut when they immediately follow a trigger.
    pub fn inhibitor_residues(&self) -> Result<&'static [AminoAcid], ProteaseError> {
        match self {
            Protease::Trypsin => Ok(&[AminoAcid::Proline]),
            _ => Err(ProteaseError::NotImplemented { protease: *self }),
        }
    }

    /// Classifies whether this protease would cut after `position`.
    ///
    /// The last residue of the sequence has no follower; a trigger there is
    /// always a cleavage.
    pub fn site_status(
        &self,
        sequence: &[AminoAcid],
        position: usize,
    ) -> Result<SiteStatus, ProteaseError> {
        if position >= sequence.len() {
            return Err(ProteaseError::OutOfRange {
                position,
                length: sequence.len(),
            });
        }

        let current = sequence[position];
        if !self.cleavage_residues()?.contains(&current) {
            return Ok(SiteStatus::Neutral);
        }

        match sequence.get(position + 1) {
            Some(next) if self.inhibitor_residues()?.contains(next) => Ok(SiteStatus::Missed),
            _ => Ok(SiteStatus::Cleavage),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Protease::Trypsin => "trypsin",
            Protease::Chymotrypsin => "chymotrypsin",
            Protease::Pepsin => "pepsin",
            Protease::Elastase => "elastase",
            Protease::ProteinaseK => "proteinase_k",
            Protease::Thermolysin => "thermolysin",
        }
    }
}

impl fmt::Display for Protease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Protease {
    type Err = ProteaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trypsin" => Ok(Protease::Trypsin),
            "chymotrypsin" => Ok(Protease::Chymotrypsin),
            "pepsin" => Ok(Protease::Pepsin),
            "elastase" => Ok(Protease::Elastase),
            "proteinase_k" => Ok(Protease::ProteinaseK),
            "thermolysin" => Ok(Protease::Thermolysin),
            other => Err(ProteaseError::UnknownName(other.to_string())),
        }
    }
}
