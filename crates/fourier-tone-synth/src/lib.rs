//! Fourier Tone Synthesis Backend
//!
//! This crate renders a single monophonic tone by summing truncated Fourier
//! series, shapes it with an ADSR envelope, and writes it as 16-bit mono PCM
//! in a RIFF/WAVE container.
//!
//! # Overview
//!
//! Data flows one way:
//!
//! ```text
//! ToneSpec -> Synth -> (Oscillator x Envelope per sample) -> f32 buffer -> PCM bytes -> WAV file
//! ```
//!
//! Every sample depends only on its index, so the buffer is a pure function
//! of the spec. Rendering the same spec twice produces byte-identical files.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use fourier_tone_spec::{ToneSpec, Waveform};
//! use fourier_tone_synth::{synthesize, ReportStatus};
//!
//! let spec = ToneSpec::builder()
//!     .frequency(1000.0)
//!     .waveform(Waveform::Square)
//!     .build();
//!
//! let mut paths = || Some(PathBuf::from("square.wav"));
//! let mut reporter = |status: ReportStatus, message: &str| println!("{status:?}: {message}");
//!
//! let outcome = synthesize(&spec, &mut paths, &mut reporter)?;
//! println!("{outcome:?}");
//! # Ok::<(), fourier_tone_synth::SynthError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`pitch`] - Semitone and frequency conversion
//! - [`envelope`] - ADSR envelope evaluated at absolute time
//! - [`oscillator`] - Truncated Fourier series waveforms
//! - [`synth`] - Buffer rendering and the end-to-end run
//! - [`collaborator`] - Path provider and result reporter capabilities
//! - [`wav`] - Deterministic 16-bit WAV writer

pub mod collaborator;
pub mod envelope;
pub mod error;
pub mod oscillator;
pub mod pitch;
pub mod synth;
pub mod wav;

// Re-export main types at crate root
pub use collaborator::{with_wav_extension, PathProvider, ReportStatus, ResultReporter};
pub use envelope::Envelope;
pub use error::{SynthError, SynthResult};
pub use oscillator::Oscillator;
pub use synth::{synthesize, RenderSummary, Synth, SynthOutcome, NO_FILE_WRITTEN};
