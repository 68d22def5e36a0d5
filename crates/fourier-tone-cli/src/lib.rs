//! Fourier Tone CLI library.
//!
//! This crate provides the command implementations behind the `fourier-tone`
//! binary: rendering a tone spec to a WAV file and converting pitches.

pub mod commands;
pub mod json_output;
pub mod logging;
