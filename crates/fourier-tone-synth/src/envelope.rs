//! ADSR envelope generator.
//!
//! The envelope is a pure function of time: [`Envelope::amplitude`] evaluates
//! a four-segment piecewise-linear curve at any `t`, so samples can be
//! computed in any order. The hold length (the time at which release starts)
//! is mutable and defaults to [`DEFAULT_HOLD_LENGTH`] until set.

use fourier_tone_spec::EnvelopeParams;

/// Hold length used until [`Envelope::set_length`] is called.
pub const DEFAULT_HOLD_LENGTH: f64 = 1.0;

/// ADSR amplitude envelope evaluated at absolute time offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    attack: f64,
    decay: f64,
    sustain: f64,
    release: f64,
    length: f64,
}

impl Envelope {
    /// Creates a new envelope with the default hold length.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
            length: DEFAULT_HOLD_LENGTH,
        }
    }

    /// Creates an envelope from spec parameters with the default hold length.
    pub fn from_params(params: &EnvelopeParams) -> Self {
        Self::new(params.attack, params.decay, params.sustain, params.release)
    }

    /// Sets the hold length in seconds. Release begins at this time.
    pub fn set_length(&mut self, length: f64) {
        self.length = length;
    }

    /// Current hold length in seconds.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Hold length plus release time.
    pub fn full_length(&self) -> f64 {
        self.length + self.release
    }

    /// Returns the envelope amplitude at `time` seconds.
    ///
    /// - `t <= A`: linear ramp from 0 to 1
    /// - `A < t <= A + D`: linear fall from 1 to the sustain level
    /// - `A + D < t <= L`: sustain level
    /// - `t > L`: linear fall from the sustain level, reaching 0 at `L + R`
    ///
    /// Nothing is clamped. A zero attack divides by zero at `t = 0`, and past
    /// `L + R` the release line keeps going below zero.
    pub fn amplitude(&self, time: f64) -> f64 {
        let attack = self.attack;
        let decay_end = self.attack + self.decay;

        if time <= attack {
            time / attack
        } else if time <= decay_end {
            self.sustain + (1.0 - self.sustain) * (decay_end - time) / self.decay
        } else if time <= self.length {
            self.sustain
        } else if time > self.length {
            self.sustain * (1.0 - (time - self.length) / self.release)
        } else {
            // NaN time
            0.0
        }
    }
}
