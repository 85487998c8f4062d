use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use hushmark_silence::{MinSec, SilenceInterval};

use crate::cli::ReportFormat;

/// Sink for completed intervals, in discovery order.
///
/// Text mode streams one line per interval; JSON mode buffers the
/// intervals and serializes the whole list on `finish`.
pub struct ReportWriter {
    writer: BufWriter<File>,
    format: ReportFormat,
    buffered: Vec<SilenceInterval>,
}

impl ReportWriter {
    pub fn create<P: AsRef<Path>>(path: P, format: ReportFormat) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("failed to create report file {}", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
            format,
            buffered: Vec::new(),
        })
    }

    pub fn record(&mut self, interval: SilenceInterval) -> Result<()> {
        match self.format {
            ReportFormat::Text => {
                // Start and end are decomposed independently; an interval
                // crossing a minute boundary renders each instant against
                // its own minute count.
                writeln!(
                    self.writer,
                    "Silent time: {} - {}",
                    MinSec::from_secs(interval.start_secs),
                    MinSec::from_secs(interval.end_secs)
                )
                .context("failed to write report line")?;
            }
            ReportFormat::Json => {
                self.buffered.push(interval);
            }
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        if self.format == ReportFormat::Json {
            serde_json::to_writer_pretty(&mut self.writer, &self.buffered)
                .context("failed to serialize report")?;
            writeln!(self.writer)?;
        }
        self.writer.flush().context("failed to flush report")?;
        Ok(())
    }
}
