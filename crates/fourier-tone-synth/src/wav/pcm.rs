//! PCM data extraction, decoding, and hashing utilities.

use super::format::HEADER_SIZE;
use super::writer::PCM_SCALE;

/// Returns the payload of the first `data` chunk in a RIFF/WAVE byte buffer.
///
/// Chunks before `data` are skipped, honoring the pad byte after odd-sized
/// chunks. Returns `None` if the buffer is not RIFF/WAVE or the chunk is
/// truncated.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < HEADER_SIZE || &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut rest = &wav_data[12..];
    while rest.len() >= 8 {
        let (id, size) = rest.split_at(4);
        let size = u32::from_le_bytes([size[0], size[1], size[2], size[3]]) as usize;
        let body = &rest[8..];

        if id == b"data" {
            return body.get(..size);
        }

        let padded = size.checked_add(size & 1)?;
        rest = body.get(padded..)?;
    }

    None
}

/// Decodes 16-bit little-endian PCM bytes back to floats in [-1, 1].
///
/// A trailing odd byte is ignored.
pub fn pcm16_to_samples(pcm: &[u8]) -> Vec<f32> {
    pcm.chunks_exact(2)
        .map(|pair| (f64::from(i16::from_le_bytes([pair[0], pair[1]])) / PCM_SCALE) as f32)
        .collect()
}

/// BLAKE3 hash of raw PCM bytes as lowercase hex.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Computes the PCM hash of a WAV file.
///
/// # Returns
/// BLAKE3 hash of PCM data, or None if format is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(pcm_hash)
}
