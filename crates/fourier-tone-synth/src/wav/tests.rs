//! Tests for the WAV writer module.

use super::format::{WavFormat, HEADER_SIZE};
use super::pcm::{compute_pcm_hash, extract_pcm_data, pcm16_to_samples, pcm_hash};
use super::writer::{quantize, samples_to_pcm16, write_wav, write_wav_file, write_wav_to_vec};
use crate::error::SynthError;

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

// =========================================================================
// WavFormat tests
// =========================================================================

#[test]
fn test_wav_format_mono() {
    let format = WavFormat::mono(44100);
    assert_eq!(format.channels, 1);
    assert_eq!(format.sample_rate, 44100);
    assert_eq!(format.bits_per_sample, 16);
    assert_eq!(format.bytes_per_sample(), 2);
    assert_eq!(format.block_align(), 2);
    // 44100 samples/sec * 1 channel * 2 bytes/sample
    assert_eq!(format.byte_rate(), Some(88200));
}

#[test]
fn test_format_check_rejects_zero_sample_rate() {
    let err = WavFormat::mono(0).check(10).unwrap_err();
    assert!(matches!(err, SynthError::UnsupportedFormat { .. }));
}

#[test]
fn test_format_check_rejects_byte_rate_overflow() {
    let format = WavFormat::mono(u32::MAX / 2 + 1);
    assert_eq!(format.byte_rate(), None);
    assert!(format.check(0).is_err());
}

#[test]
fn test_format_check_accepts_common_rates() {
    for &rate in &[8000, 11025, 22050, 44100, 48000, 96000, 192000] {
        assert!(WavFormat::mono(rate).check(1024).is_ok(), "rate {rate}");
    }
}

#[test]
fn test_format_check_rejects_oversized_data() {
    let too_big = u32::MAX as usize - 35;
    assert!(WavFormat::mono(44100).check(too_big).is_err());
    assert!(WavFormat::mono(44100).check(too_big - 1).is_ok());
}

// =========================================================================
// Quantization tests
// =========================================================================

#[test]
fn test_quantize_truncates_toward_zero() {
    assert_eq!(quantize(0.0), 0);
    assert_eq!(quantize(1.0), 32767);
    assert_eq!(quantize(-1.0), -32767);
    // 0.5 * 32767 = 16383.5
    assert_eq!(quantize(0.5), 16383);
    assert_eq!(quantize(-0.5), -16383);
    // 0.0001 * 32767 = 3.2767
    assert_eq!(quantize(0.0001), 3);
    assert_eq!(quantize(-0.0001), -3);
}

#[test]
fn test_quantize_wraps_out_of_range() {
    // 1.5 * 32767 = 49150.5 -> 49150 -> low 16 bits
    assert_eq!(quantize(1.5), 49150u16 as i16);
    assert_eq!(quantize(1.5), -16386);
    assert_eq!(quantize(-1.5), 16386);
    assert_eq!(quantize(2.0), (65534i32) as i16);
}

#[test]
fn test_negative_samples_have_correct_high_byte() {
    let pcm = samples_to_pcm16(&[-0.0001, -0.25, -1.0]);
    // -3 -> 0xFFFD
    assert_eq!(&pcm[0..2], &[0xFD, 0xFF]);
    // -8191 -> 0xE001
    assert_eq!(&pcm[2..4], &[0x01, 0xE0]);
    // -32767 -> 0x8001
    assert_eq!(&pcm[4..6], &[0x01, 0x80]);
}

#[test]
fn test_samples_to_pcm16_layout() {
    let pcm = samples_to_pcm16(&[0.0, 0.25, -0.25]);
    assert_eq!(pcm.len(), 6);
    assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 0);
    assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), 8191);
    assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), -8191);
}

#[test]
fn test_decode_roundtrip_within_one_step() {
    let samples: Vec<f32> = (0..2000)
        .map(|i| (i as f32 * 0.013).sin() * 0.999)
        .collect();
    let decoded = pcm16_to_samples(&samples_to_pcm16(&samples));
    assert_eq!(decoded.len(), samples.len());
    for (i, (&orig, &back)) in samples.iter().zip(&decoded).enumerate() {
        assert!(
            (orig - back).abs() <= 1.0 / 32767.0 + 1e-6,
            "sample {i}: {orig} decoded as {back}"
        );
    }
}

#[test]
fn test_decode_ignores_trailing_byte() {
    assert_eq!(pcm16_to_samples(&[0xFF, 0x7F, 0x12]), vec![1.0]);
}

// =========================================================================
// WAV writer tests
// =========================================================================

#[test]
fn test_wav_header_layout() {
    let pcm = samples_to_pcm16(&[0.1, -0.1, 0.2]);
    let wav = write_wav_to_vec(&WavFormat::mono(22050), &pcm).unwrap();

    assert_eq!(wav.len(), HEADER_SIZE + 6);
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(read_u32(&wav, 4), 36 + 6);
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(read_u32(&wav, 16), 16);
    assert_eq!(read_u16(&wav, 20), 1); // PCM
    assert_eq!(read_u16(&wav, 22), 1); // mono
    assert_eq!(read_u32(&wav, 24), 22050);
    assert_eq!(read_u32(&wav, 28), 44100);
    assert_eq!(read_u16(&wav, 32), 2);
    assert_eq!(read_u16(&wav, 34), 16);
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(read_u32(&wav, 40), 6);
    assert_eq!(&wav[44..], &pcm[..]);
}

#[test]
fn test_write_wav_empty_data() {
    let mut buffer = Vec::new();
    write_wav(&mut buffer, &WavFormat::mono(44100), &[]).unwrap();
    assert_eq!(buffer.len(), HEADER_SIZE);
    assert_eq!(read_u32(&buffer, 40), 0);
}

#[test]
fn test_write_wav_reports_bad_byte_rate() {
    let mut buffer = Vec::new();
    let err = write_wav(&mut buffer, &WavFormat::mono(u32::MAX), &[]).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    assert!(buffer.is_empty());
}

#[test]
fn test_write_wav_to_vec_rejects_zero_rate() {
    assert!(write_wav_to_vec(&WavFormat::mono(0), &[0, 0]).is_err());
}

#[test]
fn test_write_wav_file_matches_vec() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    let format = WavFormat::mono(44100);
    let pcm = samples_to_pcm16(&[0.5, -0.5, 0.0, 0.75]);

    write_wav_file(&path, &format, &pcm).unwrap();

    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(on_disk, write_wav_to_vec(&format, &pcm).unwrap());
}

#[test]
fn test_write_wav_file_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("tone.wav");
    let err = write_wav_file(&path, &WavFormat::mono(44100), &[0, 0]).unwrap_err();
    match err {
        SynthError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_write_wav_file_unsupported_format_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    assert!(write_wav_file(&path, &WavFormat::mono(0), &[]).is_err());
    assert!(!path.exists());
}

// =========================================================================
// PCM extraction and hashing tests
// =========================================================================

#[test]
fn test_extract_pcm_data() {
    let pcm = samples_to_pcm16(&[0.3, -0.3]);
    let wav = write_wav_to_vec(&WavFormat::mono(44100), &pcm).unwrap();
    assert_eq!(extract_pcm_data(&wav), Some(&pcm[..]));
}

#[test]
fn test_extract_pcm_data_invalid() {
    assert_eq!(extract_pcm_data(&[]), None);
    assert_eq!(extract_pcm_data(&[0u8; 44]), None);

    let mut wav = write_wav_to_vec(&WavFormat::mono(44100), &[1, 2]).unwrap();
    wav[8..12].copy_from_slice(b"AVI ");
    assert_eq!(extract_pcm_data(&wav), None);
}

#[test]
fn test_pcm_hash_ignores_header() {
    let pcm = samples_to_pcm16(&[0.1, 0.2, 0.3]);
    let a = write_wav_to_vec(&WavFormat::mono(44100), &pcm).unwrap();
    let b = write_wav_to_vec(&WavFormat::mono(48000), &pcm).unwrap();

    assert_ne!(a, b);
    assert_eq!(compute_pcm_hash(&a), compute_pcm_hash(&b));
    assert_eq!(compute_pcm_hash(&a), Some(pcm_hash(&pcm)));
    assert_eq!(pcm_hash(&pcm).len(), 64);
}
