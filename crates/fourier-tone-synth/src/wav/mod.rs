//! Deterministic 16-bit mono WAV writer.
//!
//! Files carry no timestamps or variable metadata, so identical sample
//! buffers always produce identical bytes. The BLAKE3 hash of the PCM data
//! identifies a rendering independently of its header.

mod format;
mod pcm;
mod writer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use format::{WavFormat, HEADER_SIZE};
pub use pcm::{compute_pcm_hash, extract_pcm_data, pcm16_to_samples, pcm_hash};
pub use writer::{
    quantize, samples_to_pcm16, write_wav, write_wav_file, write_wav_to_vec, PCM_SCALE,
};
