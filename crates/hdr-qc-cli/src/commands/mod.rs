//! CLI definition and command handlers.

pub mod assess;

use clap::Parser;

const RATING_LEGEND: &str = "\
Rating legend:
  10/10 – Excellent   Ideal HDR result, no visible flaws
  8/10 – Good         Minor issue, still professionally acceptable
  6/10 – Fair         Noticeable issue, may need re-edit
  4/10 – Poor         Serious issue, should be rejected or redone";

/// HDR QC - Automated quality control for processed HDR photos
#[derive(Parser)]
#[command(name = "hdr-qc")]
#[command(author, version, about, long_about = None)]
#[command(after_help = RATING_LEGEND)]
pub struct Cli {
    /// Assessment arguments (paths, policy, thresholds, flags).
    #[command(flatten)]
    pub assess: assess::AssessArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every photo came back clean.
    Success,
    /// At least one photo needs operator attention.
    NeedsEdits,
    /// The run itself failed.
    Error,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => Self::SUCCESS,
            ExitCode::NeedsEdits => Self::from(1),
            ExitCode::Error => Self::from(2),
        }
    }
}
