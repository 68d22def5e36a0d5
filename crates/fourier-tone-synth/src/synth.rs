//! Synthesis run: oscillator and envelope into a sample buffer, then WAV.
//!
//! A run has no state beyond the spec it was built from. [`Synth::new`]
//! builds the oscillator and envelope, [`Synth::render`] fills the float
//! buffer, and [`Synth::write_wav`] quantizes it and writes the file.
//! [`synthesize`] wraps the whole pass with the caller's path provider and
//! result reporter.

use std::path::{Path, PathBuf};

use fourier_tone_spec::ToneSpec;
use tracing::{debug, info, warn};

use crate::collaborator::{PathProvider, ReportStatus, ResultReporter};
use crate::envelope::Envelope;
use crate::error::{SynthError, SynthResult};
use crate::oscillator::Oscillator;
use crate::wav::{self, WavFormat};

/// Message reported when the caller declines to choose a destination.
pub const NO_FILE_WRITTEN: &str = "No file was written.";

/// One synthesis run built from a [`ToneSpec`].
#[derive(Debug, Clone)]
pub struct Synth {
    sample_rate: u32,
    frequency: f64,
    amplitude: f64,
    oscillator: Oscillator,
    envelope: Envelope,
}

impl Synth {
    /// Builds the oscillator (cutoff at Nyquist) and envelope for `spec`.
    pub fn new(spec: &ToneSpec) -> Self {
        let oscillator = Oscillator::for_sample_rate(spec.waveform.clone(), spec.sample_rate);
        let mut envelope = Envelope::from_params(&spec.envelope);
        envelope.set_length(spec.length);

        if !spec.waveform.is_recognized() {
            warn!(waveform = %spec.waveform, "unrecognized waveform, output will be silent");
        }
        debug!(
            waveform = %spec.waveform,
            cutoff = oscillator.cutoff(),
            frequency = spec.frequency,
            hold = envelope.length(),
            full_length = envelope.full_length(),
            "built synth"
        );

        Self {
            sample_rate: spec.sample_rate,
            frequency: spec.frequency,
            amplitude: spec.amplitude,
            oscillator,
            envelope,
        }
    }

    /// The oscillator used for this run.
    pub fn oscillator(&self) -> &Oscillator {
        &self.oscillator
    }

    /// The envelope used for this run.
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Number of samples in the rendered buffer: `floor(sample_rate * full_length)`.
    pub fn buffer_len(&self) -> usize {
        (self.sample_rate as f64 * self.envelope.full_length()) as usize
    }

    /// Computes the sample at `index`. Depends only on the index.
    ///
    /// The product of oscillator, envelope, and amplitude is not clipped.
    pub fn sample_at(&self, index: usize) -> f32 {
        let t = index as f64 / self.sample_rate as f64;
        let value = f64::from(self.oscillator.sample(self.frequency, t))
            * self.envelope.amplitude(t)
            * self.amplitude;
        value as f32
    }

    /// Renders the full buffer in chronological order.
    pub fn render(&self) -> Vec<f32> {
        let len = self.buffer_len();
        debug!(samples = len, "rendering buffer");
        (0..len).map(|i| self.sample_at(i)).collect()
    }

    /// Renders, encodes, and writes a 16-bit mono WAV file to `path`.
    ///
    /// The format and data size are checked before the buffer is allocated,
    /// so a tone too long for a RIFF file fails without rendering.
    pub fn write_wav(&self, path: &Path) -> SynthResult<RenderSummary> {
        let format = WavFormat::mono(self.sample_rate);
        let num_samples = self.buffer_len();
        let data_len = num_samples.checked_mul(2).ok_or_else(|| {
            SynthError::unsupported(format!(
                "{} samples exceed the RIFF size limit",
                num_samples
            ))
        })?;
        format.check(data_len)?;

        let samples = self.render();
        let pcm = wav::samples_to_pcm16(&samples);

        wav::write_wav_file(path, &format, &pcm)?;

        let summary = RenderSummary {
            path: path.to_path_buf(),
            sample_rate: self.sample_rate,
            num_samples: samples.len(),
            pcm_hash: wav::pcm_hash(&pcm),
        };
        info!(
            path = %summary.path.display(),
            samples = summary.num_samples,
            pcm_hash = %summary.pcm_hash,
            "wrote wav file"
        );
        Ok(summary)
    }
}

/// Details of a written WAV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    /// Destination path.
    pub path: PathBuf,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples written.
    pub num_samples: usize,
    /// BLAKE3 hash of the PCM data only.
    pub pcm_hash: String,
}

impl RenderSummary {
    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthOutcome {
    /// The file was written.
    Written(RenderSummary),
    /// The path provider declined; nothing was rendered or written.
    NoFileWritten,
}

/// Runs one complete synthesis pass.
///
/// Asks `paths` for a destination first. If none is given, nothing is
/// rendered and the run ends quietly. Otherwise the tone is rendered and
/// written. `reporter` hears about every outcome exactly once, including
/// failures, which are also returned to the caller.
pub fn synthesize<P, R>(spec: &ToneSpec, paths: &mut P, reporter: &mut R) -> SynthResult<SynthOutcome>
where
    P: PathProvider + ?Sized,
    R: ResultReporter + ?Sized,
{
    let Some(path) = paths.destination() else {
        info!("no destination chosen, skipping synthesis");
        reporter.report(ReportStatus::NotWritten, NO_FILE_WRITTEN);
        return Ok(SynthOutcome::NoFileWritten);
    };

    match Synth::new(spec).write_wav(&path) {
        Ok(summary) => {
            reporter.report(
                ReportStatus::Written,
                &format!(
                    "The WAV file was generated and written to {}.",
                    summary.path.display()
                ),
            );
            Ok(SynthOutcome::Written(summary))
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "synthesis failed");
            reporter.report(
                ReportStatus::Failed,
                &format!("No file was written because an error occurred: {}", e),
            );
            Err(e)
        }
    }
}
