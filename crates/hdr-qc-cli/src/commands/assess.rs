//! Assess command - run QC over photos and emit verdicts.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use hdr_qc_adapters::FsImageSource;
use hdr_qc_core::metrics::{
    BrightnessBalanceConfig, ContrastConfig, HighlightClippingConfig, HighlightControlConfig,
    ShadowDetailConfig, WhiteBalanceConfig,
};
use hdr_qc_core::{
    AggregationPolicy, AssessOptions, AssessmentRecord, ImageSource, PenaltyPolicy, PolicyKind,
    ProgressEvent, ProgressSink, RasterDimensions, ResultSink, TallyPolicy,
};
use tracing::{debug, info};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{JsonOutput, ProgressBar, TextSink};

/// Output format for verdicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// JSON Lines (one JSON object per line)
    Jsonl,
    /// Single JSON array
    Json,
}

/// Aggregation policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyChoice {
    /// Binary checks, 2 points off per failure
    Penalty,
    /// Six categorical graders tallied against a decision table
    Tally,
}

impl From<PolicyChoice> for PolicyKind {
    fn from(choice: PolicyChoice) -> Self {
        match choice {
            PolicyChoice::Penalty => Self::Penalty,
            PolicyChoice::Tally => Self::Tally,
        }
    }
}

/// Hardcoded default values for thresholds.
mod defaults {
    pub const WB_MAX_DEVIATION: f64 = 40.0;
    pub const MAX_CLIP_PERCENT: f64 = 2.0;
    pub const MIN_CONTRAST: f64 = 30.0;
}

/// Parse and validate a percentage value (0-100).
fn parse_percent(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in 0.0..=100.0"))
    }
}

/// Parse and validate a non-negative value.
fn parse_non_negative(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("{value} is negative"))
    }
}

/// Arguments for photo assessment.
#[derive(Args, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct AssessArgs {
    /// Files or directories to assess
    pub paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Aggregation policy
    #[arg(long, value_enum)]
    pub policy: Option<PolicyChoice>,

    /// Ignore highlight clipping from ceiling lights
    #[arg(long)]
    pub ignore_lamps: bool,

    /// Maximum white balance channel deviation
    #[arg(long, value_name = "DEV", value_parser = parse_non_negative)]
    pub wb_max_deviation: Option<f64>,

    /// Maximum tolerated highlight clipping (percent, 0-100)
    #[arg(long, value_name = "PCT", value_parser = parse_percent)]
    pub max_clip_percent: Option<f64>,

    /// Minimum luminance standard deviation
    #[arg(long, value_name = "STD", value_parser = parse_non_negative, allow_hyphen_values = true)]
    pub min_contrast: Option<f64>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Merged config (populated by `with_config`, not from CLI).
    #[arg(skip)]
    config: Option<AppConfig>,
}

impl AssessArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults (in accessor methods)
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    #[must_use]
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        // Boolean flags: CLI wins when passed, config applies otherwise
        if !args.recursive {
            args.recursive = config.general.recursive.unwrap_or(false);
        }
        if !args.ignore_lamps {
            args.ignore_lamps = config.general.ignore_lamps.unwrap_or(false);
        }

        // Policy: CLI > config > default
        if args.policy.is_none() {
            args.policy = config
                .general
                .policy
                .as_deref()
                .and_then(|s| match s {
                    "penalty" => Some(PolicyChoice::Penalty),
                    "tally" => Some(PolicyChoice::Tally),
                    _ => None,
                });
        }

        // Thresholds: CLI > config (accessor provides hardcoded fallback)
        args.wb_max_deviation = args.wb_max_deviation.or(config.white_balance.max_deviation);
        args.max_clip_percent = args.max_clip_percent.or(config.highlight.max_clip_percent);
        args.min_contrast = args.min_contrast.or(config.contrast.min_std_dev);

        // Output format: CLI > config
        if args.format.is_none() {
            args.format = config.output.format.as_deref().and_then(|s| match s {
                "text" => Some(OutputFormat::Text),
                "jsonl" => Some(OutputFormat::Jsonl),
                "json" => Some(OutputFormat::Json),
                _ => None,
            });
        }

        // Boolean output options: CLI flag wins, then config
        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }
        if !args.progress {
            args.progress = config.output.progress.unwrap_or(false);
        }

        // Store config for build_policy to access advanced settings
        args.config = Some(config.clone());

        args
    }

    /// Selected policy with fallback to the penalty policy.
    fn policy(&self) -> PolicyKind {
        self.policy.map_or(PolicyKind::Penalty, Into::into)
    }

    /// White balance deviation threshold with fallback.
    fn wb_max_deviation(&self) -> f64 {
        self.wb_max_deviation.unwrap_or(defaults::WB_MAX_DEVIATION)
    }

    /// Clipping percentage threshold with fallback.
    fn max_clip_percent(&self) -> f64 {
        self.max_clip_percent.unwrap_or(defaults::MAX_CLIP_PERCENT)
    }

    /// Contrast threshold with fallback.
    fn min_contrast(&self) -> f64 {
        self.min_contrast.unwrap_or(defaults::MIN_CONTRAST)
    }

    /// Output format with fallback to text.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

/// Result of running the assess command.
#[allow(dead_code)] // Fields exposed for programmatic use
pub struct AssessResult {
    /// Number of photos assessed.
    pub assessed: usize,
    /// Number of photos skipped.
    pub skipped: usize,
    /// Number of photos needing edits.
    pub needs_edits: usize,
    /// Exit code.
    pub exit_code: ExitCode,
}

/// Run the assess command.
///
/// Expects `args` to have been processed through `with_config()` first.
pub fn run(args: &AssessArgs) -> Result<AssessResult> {
    info!("Assessing {} paths", args.paths.len());

    if args.paths.is_empty() {
        anyhow::bail!("No paths specified");
    }

    let source = FsImageSource::new(args.paths.clone(), args.recursive);
    let total = source.count_hint();

    // Progress goes to stderr; suppress when piping or on --quiet
    let show_progress = !args.quiet && (args.progress || std::io::stderr().is_terminal());
    let progress_bar = ProgressBar::new(total.map(|t| t as u64), args.quiet, show_progress);

    let policy = build_policy(args);
    debug!(policy = policy.name(), "selected aggregation policy");

    process_photos(&source, policy.as_ref(), &progress_bar, args)
}

/// Build the aggregation policy from merged args (CLI + config).
fn build_policy(args: &AssessArgs) -> Box<dyn AggregationPolicy> {
    let config = args.config.as_ref();
    let contrast = ContrastConfig {
        min_std_dev: args.min_contrast(),
    };

    match args.policy() {
        PolicyKind::Penalty => {
            let white_balance = WhiteBalanceConfig {
                max_deviation: args.wb_max_deviation(),
            };
            let clipping = HighlightClippingConfig {
                clip_level: config.and_then(|c| c.highlight.clip_level).unwrap_or(245),
                max_clip_percent: args.max_clip_percent(),
            };
            Box::new(PenaltyPolicy::new(white_balance, clipping, contrast))
        }
        PolicyKind::Tally => {
            let highlight = HighlightControlConfig {
                channel_floor: config.and_then(|c| c.highlight.channel_floor).unwrap_or(240),
                poor_ratio: config.and_then(|c| c.highlight.poor_ratio).unwrap_or(0.05),
                excellent_ratio: config
                    .and_then(|c| c.highlight.excellent_ratio)
                    .unwrap_or(0.005),
            };
            let shadow = ShadowDetailConfig {
                shadow_level: config.and_then(|c| c.shadow.shadow_level).unwrap_or(30),
                poor_fraction: config.and_then(|c| c.shadow.poor_fraction).unwrap_or(0.10),
                excellent_fraction: config
                    .and_then(|c| c.shadow.excellent_fraction)
                    .unwrap_or(0.02),
            };
            let brightness = BrightnessBalanceConfig {
                min_mean: config.and_then(|c| c.brightness.min_mean).unwrap_or(80.0),
                max_mean: config.and_then(|c| c.brightness.max_mean).unwrap_or(200.0),
            };
            Box::new(TallyPolicy::new(highlight, shadow, brightness, contrast))
        }
    }
}

/// Assess photos one by one, emitting records to the selected sink.
fn process_photos(
    source: &FsImageSource,
    policy: &dyn AggregationPolicy,
    progress: &ProgressBar,
    args: &AssessArgs,
) -> Result<AssessResult> {
    let total = source.count_hint();
    let opts = AssessOptions {
        ignore_lamps: args.ignore_lamps,
    };

    let text_sink = TextSink::stdout();
    let json_sink = JsonOutput::stdout();

    let mut assessed = 0usize;
    let mut skipped = 0usize;
    let mut needs_edits = 0usize;
    let mut all_records: Vec<AssessmentRecord> = Vec::new();

    for (index, photo_result) in source.photos().enumerate() {
        let photo = match photo_result {
            Ok(photo) => photo,
            Err(e) => {
                // Error message carries the path via anyhow context
                progress.on_event(ProgressEvent::Skipped {
                    path: format!("image {index}"),
                    reason: e.to_string(),
                });
                skipped += 1;
                continue;
            }
        };

        let path = photo.path.clone();
        progress.on_event(ProgressEvent::Started {
            path: path.clone(),
            index,
            total,
        });

        // A failed evaluator voids the whole photo; a partial score would
        // mislead the operator
        let assessment = match policy.assess(&photo, &opts) {
            Ok(assessment) => assessment,
            Err(e) => {
                progress.on_event(ProgressEvent::Skipped {
                    path,
                    reason: e.to_string(),
                });
                skipped += 1;
                continue;
            }
        };

        if assessment.needs_edits() {
            needs_edits += 1;
        }

        let record = AssessmentRecord {
            path,
            timestamp: iso_timestamp(),
            dimensions: RasterDimensions::new(photo.width, photo.height),
            assessment,
        };

        progress.on_event(ProgressEvent::Completed {
            record: record.clone(),
        });

        match args.format() {
            OutputFormat::Text => text_sink.write(&record)?,
            OutputFormat::Jsonl => json_sink.write(&record)?,
            OutputFormat::Json => all_records.push(record),
        }

        assessed += 1;
    }

    match args.format() {
        OutputFormat::Json => {
            json_sink.write_array(&all_records, args.pretty)?;
            json_sink.flush()?;
        }
        OutputFormat::Jsonl => json_sink.flush()?,
        OutputFormat::Text => text_sink.flush()?,
    }

    progress.on_event(ProgressEvent::Finished { assessed, skipped });

    let exit_code = if needs_edits > 0 {
        ExitCode::NeedsEdits
    } else {
        ExitCode::Success
    };

    Ok(AssessResult {
        assessed,
        skipped,
        needs_edits,
        exit_code,
    })
}

/// Generate ISO 8601 UTC timestamp (RFC 3339 format).
fn iso_timestamp() -> String {
    match time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339) {
        Ok(ts) => ts,
        Err(e) => {
            debug!("Timestamp format failed: {e}");
            String::from("1970-01-01T00:00:00Z")
        }
    }
}
