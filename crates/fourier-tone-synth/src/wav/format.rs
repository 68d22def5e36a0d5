//! WAV file format parameters.

use crate::error::{SynthError, SynthResult};

/// Size of the canonical RIFF/WAVE header in bytes.
pub const HEADER_SIZE: usize = 44;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (always 1 for this implementation).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono 16-bit WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Calculates bytes per sample (per channel).
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second), or `None` on overflow.
    pub(crate) fn byte_rate(&self) -> Option<u32> {
        self.sample_rate.checked_mul(u32::from(self.block_align()))
    }

    /// Checks that a header for `data_len` PCM bytes can be written.
    ///
    /// Rejects a zero sample rate, a byte rate that overflows the 32-bit
    /// header field, and data too large for the RIFF size field.
    pub fn check(&self, data_len: usize) -> SynthResult<()> {
        if self.sample_rate == 0 {
            return Err(SynthError::unsupported("sample rate must be positive, got 0"));
        }
        if self.byte_rate().is_none() {
            return Err(SynthError::unsupported(format!(
                "sample rate {} Hz overflows the byte rate field",
                self.sample_rate
            )));
        }
        let riff_size = u32::try_from(data_len)
            .ok()
            .and_then(|len| len.checked_add((HEADER_SIZE - 8) as u32));
        if riff_size.is_none() {
            return Err(SynthError::unsupported(format!(
                "{} bytes of PCM data exceed the RIFF size limit",
                data_len
            )));
        }
        Ok(())
    }
}
