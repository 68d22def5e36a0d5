//! Tone spec types.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};
use crate::validation::{self, ValidationError};
use crate::waveform::Waveform;

/// ADSR envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvelopeParams {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for EnvelopeParams {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.1,
            sustain: 0.7,
            release: 0.3,
        }
    }
}

impl EnvelopeParams {
    /// Creates new envelope parameters. Values are stored as given.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
        }
    }
}

/// A single monophonic tone to synthesize.
///
/// A `ToneSpec` is built once per synthesis request and read-only afterwards.
/// The total rendered duration is `length + envelope.release` seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToneSpec {
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Hold duration in seconds, excluding the release tail.
    #[serde(default = "default_length")]
    pub length: f64,
    /// Fundamental frequency in Hz.
    #[serde(default = "default_frequency")]
    pub frequency: f64,
    /// Linear amplitude scalar applied after the envelope.
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Waveform selector.
    #[serde(default)]
    pub waveform: Waveform,
    /// Amplitude envelope.
    #[serde(default)]
    pub envelope: EnvelopeParams,
}

fn default_sample_rate() -> u32 {
    44100
}

fn default_length() -> f64 {
    1.0
}

fn default_frequency() -> f64 {
    440.0
}

fn default_amplitude() -> f64 {
    0.5
}

impl Default for ToneSpec {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            length: default_length(),
            frequency: default_frequency(),
            amplitude: default_amplitude(),
            waveform: Waveform::default(),
            envelope: EnvelopeParams::default(),
        }
    }
}

impl ToneSpec {
    /// Creates a new spec builder starting from the defaults.
    pub fn builder() -> ToneSpecBuilder {
        ToneSpecBuilder::new()
    }

    /// Parses a spec from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a spec file.
    pub fn from_path(path: impl AsRef<Path>) -> SpecResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SpecError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&json)?)
    }

    /// Serializes the spec to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the spec to pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Total rendered duration in seconds (hold plus release).
    pub fn total_duration(&self) -> f64 {
        self.length + self.envelope.release
    }

    /// Checks every parameter and returns all violations at once.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        validation::validate_tone(self)
    }

    /// Returns the spec unchanged if it validates, or [`SpecError::Invalid`].
    pub fn validated(self) -> SpecResult<Self> {
        self.validate().map_err(SpecError::Invalid)?;
        Ok(self)
    }
}

/// Builder for creating tone specs.
#[derive(Debug, Clone, Default)]
pub struct ToneSpecBuilder {
    spec: ToneSpec,
}

impl ToneSpecBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sample rate in Hz.
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.spec.sample_rate = sample_rate;
        self
    }

    /// Sets the hold duration in seconds.
    pub fn length(mut self, length: f64) -> Self {
        self.spec.length = length;
        self
    }

    /// Sets the fundamental frequency in Hz.
    pub fn frequency(mut self, frequency: f64) -> Self {
        self.spec.frequency = frequency;
        self
    }

    /// Sets the linear amplitude scalar.
    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.spec.amplitude = amplitude;
        self
    }

    /// Sets the waveform.
    pub fn waveform(mut self, waveform: impl Into<Waveform>) -> Self {
        self.spec.waveform = waveform.into();
        self
    }

    /// Sets all envelope parameters at once.
    pub fn envelope(mut self, envelope: EnvelopeParams) -> Self {
        self.spec.envelope = envelope;
        self
    }

    /// Sets the attack time in seconds.
    pub fn attack(mut self, attack: f64) -> Self {
        self.spec.envelope.attack = attack;
        self
    }

    /// Sets the decay time in seconds.
    pub fn decay(mut self, decay: f64) -> Self {
        self.spec.envelope.decay = decay;
        self
    }

    /// Sets the sustain level.
    pub fn sustain(mut self, sustain: f64) -> Self {
        self.spec.envelope.sustain = sustain;
        self
    }

    /// Sets the release time in seconds.
    pub fn release(mut self, release: f64) -> Self {
        self.spec.envelope.release = release;
        self
    }

    /// Builds the spec.
    pub fn build(self) -> ToneSpec {
        self.spec
    }
}
