use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use hushmark_silence::DEFAULT_ENERGY_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum ReportFormat {
    /// One human-readable line per interval
    Text,
    /// A JSON array of interval records
    Json,
}

/// Scan a 16-bit PCM WAV file and report the silent time spans.
#[derive(Debug, Parser)]
#[command(name = "hushmark", version)]
pub struct Cli {
    /// Path to the WAV file to analyze
    pub input: PathBuf,

    /// Where to write the interval report
    #[arg(short, long, default_value = "silent_times.txt")]
    pub output: PathBuf,

    /// Mean-square energy threshold; frames at or below it count as silent
    #[arg(long, default_value_t = DEFAULT_ENERGY_THRESHOLD)]
    pub threshold: f64,

    /// Report layout
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["hushmark", "take1.wav"]);
        assert_eq!(cli.input, PathBuf::from("take1.wav"));
        assert_eq!(cli.output, PathBuf::from("silent_times.txt"));
        assert_eq!(cli.threshold, 0.265);
        assert_eq!(cli.format, ReportFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "hushmark",
            "take1.wav",
            "-o",
            "quiet.json",
            "--threshold",
            "0.01",
            "--format",
            "json",
        ]);
        assert_eq!(cli.output, PathBuf::from("quiet.json"));
        assert_eq!(cli.threshold, 0.01);
        assert_eq!(cli.format, ReportFormat::Json);
    }
}
