use crate::cli::OutputFormat;
use crate::error::Result;
use pepcleave::workflows::digest::{DigestReport, PeptideReport};
use std::io::Write;

/// Renders a digestion report to the given writer in the requested format.
pub fn render(report: &DigestReport, format: OutputFormat, writer: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(report, writer),
        OutputFormat::Json => render_json(report, writer),
        OutputFormat::Csv => render_csv(report, writer),
    }
}

fn render_text(report: &DigestReport, writer: &mut dyn Write) -> Result<()> {
    writeln!(
        writer,
        "Digestion with {} over {} residues: {} peptide(s), {} cut site(s), {} missed cut site(s).",
        report.protease,
        report.protein_length,
        report.peptides.len(),
        report.cut_sites.len(),
        report.missed_cut_sites.len()
    )?;
    writeln!(writer)?;
    writeln!(
        writer,
        "{:>4}  {:>5}  {:>6}  {:>6}  {:>6}  {:>7}  {}",
        "Rank", "Pos", "Len", "pI", "Charge", "MaxKD", "Sequence"
    )?;

    for row in &report.peptides {
        writeln!(
            writer,
            "{:>4}  {:>5}  {:>6}  {:>6.2}  {:>6}  {:>7.2}  {}",
            row.rank,
            row.position,
            row.length,
            row.isoelectric_point,
            row.charge_state,
            row.max_kd_score,
            row.sequence
        )?;
        if !row.criteria.is_empty() {
            writeln!(writer, "      flags: {}", criteria_list(row))?;
        }
    }

    Ok(())
}

fn render_json(report: &DigestReport, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}

fn render_csv(report: &DigestReport, writer: &mut dyn Write) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "rank",
        "position",
        "sequence",
        "length",
        "isoelectric_point",
        "charge_state",
        "max_kd_score",
        "criteria",
    ])?;

    for row in &report.peptides {
        csv_writer.write_record([
            row.rank.to_string(),
            row.position.to_string(),
            row.sequence.clone(),
            row.length.to_string(),
            format!("{:.2}", row.isoelectric_point),
            row.charge_state.to_string(),
            format!("{:.4}", row.max_kd_score),
            criteria_list(row),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn criteria_list(row: &PeptideReport) -> String {
    row.criteria
        .iter()
        .map(|criterion| criterion.as_str())
        .collect::<Vec<_>>()
        .join(";")
}
