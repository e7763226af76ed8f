use phf::{Map, phf_map};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    // --- Aliphatic, Nonpolar ---
    Alanine,    // Alanine (A)
    Glycine,    // Glycine (G)
    Isoleucine, // Isoleucine (I)
    Leucine,    // Leucine (L)
    Proline,    // Proline (P)
    Valine,     // Valine (V)

    // --- Aromatic ---
    Phenylalanine, // Phenylalanine (F)
    Tryptophan,    // Tryptophan (W)
    Tyrosine,      // Tyrosine (Y)

    // --- Polar, Uncharged ---
    Asparagine, // Asparagine (N)
    Cysteine,   // Cysteine (C)
    Glutamine,  // Glutamine (Q)
    Serine,     // Serine (S)
    Threonine,  // Threonine (T)
    Methionine, // Methionine (M)

    // --- Positively Charged (Basic) ---
    Arginine,  // Arginine (R)
    Histidine, // Histidine (H)
    Lysine,    // Lysine (K)

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // Aspartic Acid (D)
    GlutamicAcid, // Glutamic Acid (E)
}

static RESIDUES_BY_SYMBOL: Map<char, AminoAcid> = phf_map! {
    'A' => AminoAcid::Alanine,
    'R' => AminoAcid::Arginine,
    'N' => AminoAcid::Asparagine,
    'D' => AminoAcid::AsparticAcid,
    'C' => AminoAcid::Cysteine,
    'E' => AminoAcid::GlutamicAcid,
    'Q' => AminoAcid::Glutamine,
    'G' => AminoAcid::Glycine,
    'H' => AminoAcid::Histidine,
    'I' => AminoAcid::Isoleucine,
    'L' => AminoAcid::Leucine,
    'K' => AminoAcid::Lysine,
    'M' => AminoAcid::Methionine,
    'F' => AminoAcid::Phenylalanine,
    'P' => AminoAcid::Proline,
    'S' => AminoAcid::Serine,
    'T' => AminoAcid::Threonine,
    'W' => AminoAcid::Tryptophan,
    'Y' => AminoAcid::Tyrosine,
    'V' => AminoAcid::Valine,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseSequenceError {
    #[error("'{symbol}' at position {position} is not a canonical amino-acid letter")]
    InvalidSymbol { symbol: char, position: usize },
}

impl AminoAcid {
    /// Looks up a residue by its single-letter symbol (case-insensitive).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        RESIDUES_BY_SYMBOL
            .get(&symbol.to_ascii_uppercase())
            .copied()
    }

    pub fn symbol(&self) -> char {
        match self {
            AminoAcid::Alanine => 'A',
            AminoAcid::Arginine => 'R',
            AminoAcid::Asparagine => 'N',
            AminoAcid::AsparticAcid => 'D',
            AminoAcid::Cysteine => 'C',
            AminoAcid::GlutamicAcid => 'E',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::Glycine => 'G',
            AminoAcid::Histidine => 'H',
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Leucine => 'L',
            AminoAcid::Lysine => 'K',
            AminoAcid::Methionine => 'M',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Proline => 'P',
            AminoAcid::Serine => 'S',
            AminoAcid::Threonine => 'T',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Tyrosine => 'Y',
            AminoAcid::Valine => 'V',
        }
    }

    pub fn is_valid_symbol(symbol: char) -> bool {
        RESIDUES_BY_SYMBOL.contains_key(&symbol.to_ascii_uppercase())
    }

    /// Parses a full sequence string into residues, reporting the 1-indexed
    /// position of the first non-canonical letter.
    pub fn parse_sequence(sequence: &str) -> Result<Vec<Self>, ParseSequenceError> {
        sequence
            .chars()
            .enumerate()
            .map(|(i, symbol)| {
                Self::from_symbol(symbol).ok_or(ParseSequenceError::InvalidSymbol {
                    symbol,
                    position: i + 1,
                })
            })
            .collect()
    }

    pub fn sequence_to_string(sequence: &[Self]) -> String {
        sequence.iter().map(Self::symbol).collect()
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_symbol_resolves_all_twenty_residues() {
        for symbol in "ARNDCEQGHILKMFPSTWYV".chars() {
            let residue = AminoAcid::from_symbol(symbol).unwrap();
            assert_eq!(residue.symbol(), symbol);
        }
    }

    #[test]
    fn from_symbol_is_case_insensitive() {
        assert_eq!(AminoAcid::from_symbol('k'), Some(AminoAcid::Lysine));
        assert_eq!(AminoAcid::from_symbol('r'), Some(AminoAcid::Arginine));
    }

    #[test]
    fn from_symbol_rejects_non_canonical_letters() {
        assert_eq!(AminoAcid::from_symbol('B'), None);
        assert_eq!(AminoAcid::from_symbol('X'), None);
        assert_eq!(AminoAcid::from_symbol('Z'), None);
        assert_eq!(AminoAcid::from_symbol('1'), None);
    }

    #[test]
    fn parse_sequence_round_trips_through_string() {
        let parsed = AminoAcid::parse_sequence("MKTAYIAKPRQAA").unwrap();
        assert_eq!(parsed.len(), 13);
        assert_eq!(AminoAcid::sequence_to_string(&parsed), "MKTAYIAKPRQAA");
    }

    #[test]
    fn parse_sequence_reports_position_of_invalid_symbol() {
        let err = AminoAcid::parse_sequence("MKXAA").unwrap_err();
        assert_eq!(
            err,
            ParseSequenceError::InvalidSymbol {
                symbol: 'X',
                position: 3
            }
        );
    }

    #[test]
    fn parse_sequence_accepts_empty_input() {
        assert!(AminoAcid::parse_sequence("").unwrap().is_empty());
    }

    #[test]
    fn display_prints_single_letter_symbol() {
        assert_eq!(AminoAcid::Tryptophan.to_string(), "W");
    }
}
