use anyhow::Result;
use hushmark_silence::SilenceDetector;
use tracing::{debug, info};

use crate::report::ReportWriter;
use crate::wav::WavFrameSource;

/// Single-pass driving loop: frames in presentation order through the
/// detector, completed intervals to the report, then one finalization
/// with the stream duration to flush a trailing open run.
pub fn scan(
    source: &mut WavFrameSource,
    detector: &mut SilenceDetector,
    report: &mut ReportWriter,
) -> Result<usize> {
    let mut interval_count = 0usize;

    while let Some((frame, timestamp_secs)) = source.next_frame() {
        if let Some(interval) = detector.process_frame(frame, timestamp_secs)? {
            debug!(
                start_secs = interval.start_secs,
                end_secs = interval.end_secs,
                "silence interval closed"
            );
            report.record(interval)?;
            interval_count += 1;
        }
    }

    // The stream duration stands in for the missing next-frame timestamp,
    // so a trailing interval's end bound is extrapolated, not measured.
    let duration_secs = source.duration_secs();
    if let Some(interval) = detector.finish(duration_secs) {
        debug!(
            start_secs = interval.start_secs,
            end_secs = interval.end_secs,
            "trailing silence interval flushed at stream end"
        );
        report.record(interval)?;
        interval_count += 1;
    }

    info!(
        intervals = interval_count,
        duration_secs, "scan complete"
    );
    Ok(interval_count)
}
