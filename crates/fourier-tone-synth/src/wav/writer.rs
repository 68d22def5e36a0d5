//! Core WAV writing and PCM conversion functions.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{SynthError, SynthResult};

use super::format::{WavFormat, HEADER_SIZE};

/// Full-scale value for 16-bit PCM.
pub const PCM_SCALE: f64 = 32767.0;

/// Quantizes one float sample to a 16-bit PCM value.
///
/// The sample is scaled by [`PCM_SCALE`] and truncated toward zero. Nothing
/// is clipped: the truncated integer is narrowed to its low 16 bits, so a
/// sample beyond full scale wraps around (1.5 becomes -16386).
pub fn quantize(sample: f32) -> i16 {
    (f64::from(sample) * PCM_SCALE) as i32 as i16
}

/// Converts f32 samples to 16-bit little-endian PCM bytes.
///
/// # Returns
/// Two bytes per sample, low byte first
pub fn samples_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&quantize(sample).to_le_bytes());
    }
    pcm
}

fn invalid_input(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Result indicating success or I/O error. Header fields that do not fit
/// their 32-bit slots are reported as `InvalidInput`.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = u32::try_from(pcm_data.len())
        .map_err(|_| invalid_input(format!("{} bytes of PCM data", pcm_data.len())))?;
    // Total file size minus 8 bytes for RIFF header
    let file_size = data_size
        .checked_add((HEADER_SIZE - 8) as u32)
        .ok_or_else(|| invalid_input(format!("{} bytes of PCM data", data_size)))?;
    let byte_rate = format
        .byte_rate()
        .ok_or_else(|| invalid_input(format!("sample rate {}", format.sample_rate)))?;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> SynthResult<Vec<u8>> {
    format.check(pcm_data.len())?;
    let mut buffer = Vec::with_capacity(HEADER_SIZE + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).map_err(|e| SynthError::unsupported(e.to_string()))?;
    Ok(buffer)
}

/// Writes a WAV file to `path` in one pass, creating or truncating it.
///
/// The format is checked before the file is opened, so an unsupported
/// format never touches the filesystem. An I/O failure part way through
/// may leave a partial file behind.
pub fn write_wav_file(path: &Path, format: &WavFormat, pcm_data: &[u8]) -> SynthResult<()> {
    format.check(pcm_data.len())?;

    let file = File::create(path).map_err(|e| SynthError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_wav(&mut writer, format, pcm_data).map_err(|e| SynthError::io(path, e))?;
    writer.flush().map_err(|e| SynthError::io(path, e))?;

    Ok(())
}
