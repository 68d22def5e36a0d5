//! Fourier Tone Spec Library
//!
//! This crate provides the input types for Fourier Tone synthesis runs:
//! a [`ToneSpec`] describing a single monophonic tone, the [`Waveform`]
//! selector, and the [`EnvelopeParams`] ADSR constants.
//!
//! Specs are plain JSON documents. Every field is optional in JSON and falls
//! back to a sensible default, so `{}` is a valid spec (a one second 440 Hz
//! sine at half amplitude).
//!
//! # Example
//!
//! ```
//! use fourier_tone_spec::{ToneSpec, Waveform};
//!
//! let spec = ToneSpec::builder()
//!     .sample_rate(44100)
//!     .frequency(1000.0)
//!     .waveform(Waveform::Square)
//!     .build();
//!
//! assert!(spec.validate().is_ok());
//!
//! let json = spec.to_json().unwrap();
//! let parsed = ToneSpec::from_json(&json).unwrap();
//! assert_eq!(parsed, spec);
//! ```
//!
//! # Modules
//!
//! - [`tone`] - `ToneSpec`, `EnvelopeParams`, and the spec builder
//! - [`waveform`] - Waveform selector with silent fallback for unknown tags
//! - [`validation`] - Opt-in parameter checks for outer surfaces
//! - [`error`] - Error types

pub mod error;
pub mod tone;
pub mod validation;
pub mod waveform;

pub use error::{SpecError, SpecResult};
pub use tone::{EnvelopeParams, ToneSpec, ToneSpecBuilder};
pub use validation::ValidationError;
pub use waveform::Waveform;
