use crate::cli::DigestArgs;
use crate::error::{CliError, Result};
use crate::output;
use pepcleave::engine::config::DigestConfig;
use pepcleave::workflows::digest;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn run(args: DigestArgs) -> Result<()> {
    let sequence = resolve_sequence(&args)?;

    let config = match &args.config {
        Some(path) => {
            info!("Loading criteria configuration from {:?}", path);
            DigestConfig::load(path)?
        }
        None => DigestConfig::default(),
    };

    info!(
        "Digesting {} residue(s) with {}.",
        sequence.len(),
        args.protease
    );
    let mut report = digest::run(&sequence, args.protease, &config)?;

    if let Some(top) = args.top {
        report.peptides.truncate(top);
    }

    match &args.output {
        Some(path) => {
            let mut file = File::create(path)?;
            output::render(&report, args.format, &mut file)?;
            println!(
                "✓ Report with {} peptide(s) written to: {}",
                report.peptides.len(),
                path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            output::render(&report, args.format, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}

fn resolve_sequence(args: &DigestArgs) -> Result<String> {
    if let Some(sequence) = &args.sequence {
        return Ok(sequence.trim().to_string());
    }
    if let Some(path) = &args.input {
        return read_sequence_file(path);
    }
    Err(CliError::Argument(
        "a protein sequence must be given either directly or via --input".to_string(),
    ))
}

/// Reads a sequence from a plain-text or FASTA file. Header lines and
/// whitespace are dropped; multiple FASTA records are rejected.
fn read_sequence_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)?;

    let mut records = 0;
    let mut sequence = String::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('>') {
            records += 1;
            if records > 1 {
                return Err(CliError::Argument(format!(
                    "{} contains more than one FASTA record; digest one protein at a time",
                    path.display()
                )));
            }
            continue;
        }
        sequence.extend(line.chars().filter(|c| !c.is_whitespace()));
    }

    if sequence.is_empty() {
        return Err(CliError::Argument(format!(
            "no sequence data found in {}",
            path.display()
        )));
    }
    Ok(sequence)
}
