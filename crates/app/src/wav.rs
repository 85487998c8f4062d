use std::path::Path;

use anyhow::{bail, Context, Result};
use hound::{SampleFormat, WavReader};
use tracing::info;

/// Frame size per channel. At 16 kHz this is 32 ms per frame; the choice
/// only affects interval boundary granularity, not classification.
pub const FRAME_SIZE_SAMPLES: usize = 512;

/// Feeds decoded audio to the detector as (samples, timestamp) frames.
///
/// This is the driving-loop side of the scan: interleaved 16-bit PCM is
/// chunked into fixed-size frames, each stamped with its start time
/// derived from the running sample index over the sample rate. Timestamps
/// are strictly increasing by construction.
pub struct WavFrameSource {
    samples: Vec<i16>,
    sample_rate: u32,
    channels: u16,
    current_pos: usize,
    frame_size_total: usize,
}

impl WavFrameSource {
    pub fn open<P: AsRef<Path>>(wav_path: P) -> Result<Self> {
        let path = wav_path.as_ref();
        let mut reader = WavReader::open(path)
            .with_context(|| format!("failed to open WAV file {}", path.display()))?;
        let spec = reader.spec();

        if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
            bail!(
                "unsupported WAV format ({:?}, {} bits): only 16-bit integer PCM is supported",
                spec.sample_format,
                spec.bits_per_sample
            );
        }

        info!(
            "Loading WAV: {} Hz, {} channels, {} bits",
            spec.sample_rate, spec.channels, spec.bits_per_sample
        );

        let samples: Vec<i16> = reader
            .samples::<i16>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("failed to read WAV samples")?;

        info!(
            "WAV loaded: {} samples (interleaved) at {} Hz, {} channels",
            samples.len(),
            spec.sample_rate,
            spec.channels
        );

        // FRAME_SIZE_SAMPLES is per channel; scale by channel count for
        // total interleaved i16 values per frame.
        let frame_size_total = FRAME_SIZE_SAMPLES * spec.channels as usize;

        Ok(Self {
            samples,
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            current_pos: 0,
            frame_size_total,
        })
    }

    /// Next frame and its presentation timestamp in stream seconds, or
    /// `None` when the stream is exhausted. The last frame may be short.
    pub fn next_frame(&mut self) -> Option<(&[i16], f64)> {
        if self.current_pos >= self.samples.len() {
            return None;
        }

        let start = self.current_pos;
        let end = (start + self.frame_size_total).min(self.samples.len());
        self.current_pos = end;

        let timestamp_secs =
            (start / self.channels as usize) as f64 / self.sample_rate as f64;
        Some((&self.samples[start..end], timestamp_secs))
    }

    /// Total stream duration in seconds, the end bound handed to the
    /// detector's finalization after the last frame.
    pub fn duration_secs(&self) -> f64 {
        (self.samples.len() / self.channels as usize) as f64 / self.sample_rate as f64
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }
}
