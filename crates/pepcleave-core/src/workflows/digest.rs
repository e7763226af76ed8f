use crate::core::protease::Protease;
use crate::core::residue::AminoAcid;
use crate::engine::config::DigestConfig;
use crate::engine::criteria::Criterion;
use crate::engine::digestion::ProteinContext;
use crate::engine::error::EngineError;
use crate::engine::evaluator::CriteriaEvaluator;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{info, instrument};

/// One ranked peptide of a digestion report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeptideReport {
    pub sequence: String,
    /// 1-indexed start position within the protein.
    pub position: usize,
    pub length: usize,
    pub isoelectric_point: f64,
    pub charge_state: i32,
    pub max_kd_score: f64,
    pub criteria: Vec<Criterion>,
    pub rank: usize,
}

/// The complete outcome of one digestion run, ordered by rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DigestReport {
    pub protease: String,
    pub protein_length: usize,
    pub cut_sites: BTreeSet<usize>,
    pub missed_cut_sites: BTreeSet<usize>,
    pub peptides: Vec<PeptideReport>,
}

/// Digests a protein sequence, evaluates every fragment against the full
/// criteria bank, and returns the ranked report.
///
/// The sequence must be non-empty and contain only canonical single-letter
/// residue symbols (case-insensitive).
#[instrument(skip(sequence, config), fields(protease = %protease))]
pub fn run(
    sequence: &str,
    protease: Protease,
    config: &DigestConfig,
) -> Result<DigestReport, EngineError> {
    config.validate()?;

    if sequence.is_empty() {
        return Err(EngineError::EmptySequence);
    }
    let residues = AminoAcid::parse_sequence(sequence)?;
    info!(length = residues.len(), "digesting protein sequence");

    let mut protein = ProteinContext::digest(residues, protease)?;
    info!(
        peptides = protein.peptides().len(),
        cut_sites = protein.cut_sites().len(),
        missed_cut_sites = protein.missed_cut_sites().len(),
        "digestion complete"
    );

    CriteriaEvaluator::new().evaluate(&mut protein, config);

    Ok(build_report(&mut protein, config))
}

fn build_report(protein: &mut ProteinContext, config: &DigestConfig) -> DigestReport {
    let window = config.max_hydrophobicity_window;
    let protease = protein.protease().to_string();
    let protein_length = protein.length();
    let cut_sites = protein.cut_sites().clone();
    let missed_cut_sites = protein.missed_cut_sites().clone();

    let mut peptides: Vec<PeptideReport> = protein
        .peptides_mut()
        .iter_mut()
        .map(|peptide| PeptideReport {
            sequence: peptide.sequence_as_string(),
            position: peptide.position(),
            length: peptide.len(),
            isoelectric_point: peptide.isoelectric_point(),
            charge_state: peptide.charge_state_in_formic_acid(),
            max_kd_score: peptide.max_kd_score(window),
            criteria: peptide.criteria().iter().copied().collect(),
            rank: peptide.rank().unwrap_or(0),
        })
        .collect();
    peptides.sort_by_key(|peptide| peptide.rank);

    DigestReport {
        protease,
        protein_length,
        cut_sites,
        missed_cut_sites,
        peptides,
    }
}
