//! Band-limited oscillators built from truncated Fourier series.
//!
//! Each non-sine waveform is the partial sum of its Fourier series, cut off
//! at the highest harmonic that stays at or below the oscillator's cutoff
//! frequency. With the cutoff at Nyquist this keeps every summed partial
//! representable at the output sample rate.
//!
//! The oscillator holds no phase state: [`Oscillator::sample`] is a pure
//! function of frequency and absolute time, which keeps the phase continuous
//! across the whole buffer by construction.

use std::f64::consts::PI;

use fourier_tone_spec::Waveform;

/// Two times PI.
pub const TWO_PI: f64 = 2.0 * PI;

/// Fourier-series oscillator for a fixed waveform and harmonic cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct Oscillator {
    waveform: Waveform,
    cutoff: u32,
}

impl Oscillator {
    /// Creates an oscillator.
    ///
    /// # Arguments
    /// * `waveform` - Waveform to approximate
    /// * `cutoff` - Highest harmonic frequency in Hz, conventionally half the sample rate
    pub fn new(waveform: Waveform, cutoff: u32) -> Self {
        Self { waveform, cutoff }
    }

    /// Creates an oscillator with its cutoff at the Nyquist frequency.
    pub fn for_sample_rate(waveform: Waveform, sample_rate: u32) -> Self {
        Self::new(waveform, sample_rate / 2)
    }

    /// The waveform this oscillator renders.
    pub fn waveform(&self) -> &Waveform {
        &self.waveform
    }

    /// The harmonic cutoff in Hz.
    pub fn cutoff(&self) -> u32 {
        self.cutoff
    }

    /// Number of terms summed for `frequency`.
    ///
    /// Sawtooth sums every harmonic up to `cutoff / frequency`. Square and
    /// triangle use odd harmonics only, so they sum `cutoff / frequency / 2`
    /// terms. Sine is closed form and always reports 1; unrecognized
    /// waveforms report 0.
    ///
    /// The quotient is truncated toward zero. A negative frequency gives 0
    /// terms. A zero frequency saturates to `u64::MAX`, which makes
    /// [`Oscillator::sample`] effectively never return.
    pub fn harmonic_count(&self, frequency: f64) -> u64 {
        let ratio = self.cutoff as f64 / frequency;
        match self.waveform {
            Waveform::Sine => 1,
            Waveform::Sawtooth => ratio as u64,
            Waveform::Square | Waveform::Triangle => (ratio / 2.0) as u64,
            Waveform::Unrecognized(_) => 0,
        }
    }

    /// Computes one sample of the waveform at `frequency` Hz and `time` seconds.
    ///
    /// Summation runs in double precision; the result is narrowed to `f32`
    /// on return. Unrecognized waveforms are silent.
    pub fn sample(&self, frequency: f64, time: f64) -> f32 {
        let value = match self.waveform {
            Waveform::Sine => sine(frequency, time),
            Waveform::Sawtooth => sawtooth(frequency, time, self.harmonic_count(frequency)),
            Waveform::Square => square(frequency, time, self.harmonic_count(frequency)),
            Waveform::Triangle => triangle(frequency, time, self.harmonic_count(frequency)),
            Waveform::Unrecognized(_) => 0.0,
        };
        value as f32
    }
}

/// `sin(2π f t)`.
fn sine(frequency: f64, time: f64) -> f64 {
    (TWO_PI * frequency * time).sin()
}

/// `(2/π) Σ_{n=1}^{N} sin(2π f n t) / n`.
fn sawtooth(frequency: f64, time: f64, harmonics: u64) -> f64 {
    let mut sum = 0.0;
    for n in 1..=harmonics {
        let n = n as f64;
        sum += (TWO_PI * frequency * n * time).sin() / n;
    }
    2.0 / PI * sum
}

/// `(4/π) Σ_{n=1}^{N} sin(2π f (2n-1) t) / (2n-1)`.
fn square(frequency: f64, time: f64, harmonics: u64) -> f64 {
    let mut sum = 0.0;
    for n in 1..=harmonics {
        let order = (2 * n - 1) as f64;
        sum += (TWO_PI * frequency * order * time).sin() / order;
    }
    4.0 / PI * sum
}

/// `(8/π²) Σ_{n=1}^{N} cos(2π f (2n-1) t) / (2n-1)²`.
fn triangle(frequency: f64, time: f64, harmonics: u64) -> f64 {
    let mut sum = 0.0;
    for n in 1..=harmonics {
        let order = (2 * n - 1) as f64;
        sum += (TWO_PI * frequency * order * time).cos() / (order * order);
    }
    8.0 / (PI * PI) * sum
}
