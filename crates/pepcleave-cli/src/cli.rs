use clap::builder::{PossibleValuesParser, TypedValueParser as _};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pepcleave::core::protease::Protease;
use std::path::PathBuf;

const PROTEASE_NAMES: [&str; 6] = [
    "trypsin",
    "chymotrypsin",
    "pepsin",
    "elastase",
    "proteinase_k",
    "thermolysin",
];

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "pepcleave - digest a protein sequence with a protease and rank the resulting peptides for targeted mass-spectrometry assays.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Digest a protein sequence and rank the resulting peptides.
    Digest(DigestArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Text,
    /// Full report as JSON.
    Json,
    /// Peptide rows as CSV.
    Csv,
}

/// Arguments for the `digest` subcommand.
#[derive(Args, Debug)]
pub struct DigestArgs {
    /// Protein sequence given directly on the command line.
    #[arg(value_name = "SEQUENCE", conflicts_with = "input")]
    pub sequence: Option<String>,

    /// Read the protein sequence from a file instead (plain text or FASTA;
    /// header lines and whitespace are ignored).
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Protease to digest with.
    #[arg(
        short,
        long,
        default_value = "trypsin",
        value_name = "NAME",
        value_parser = PossibleValuesParser::new(PROTEASE_NAMES)
            .try_map(|name| name.parse::<Protease>()),
    )]
    pub protease: Protease,

    /// Path to a TOML file overriding the default criteria thresholds.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Only report the N best-ranked peptides.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}
