//! Semitone and frequency conversion under twelve-tone equal temperament.
//!
//! Keys are semitone offsets relative to A4 (440 Hz), so key 0 is A4,
//! key 12 is A5 and key -9 is C4. Keys are fractional; a key of 0.5 is a
//! quarter tone above A4.

/// Reference pitch of A4 in Hz.
pub const A4_FREQUENCY: f64 = 440.0;

/// Converts a semitone offset from A4 to a frequency in Hz.
///
/// # Examples
/// ```
/// use fourier_tone_synth::pitch::freq;
///
/// assert!((freq(0.0) - 440.0).abs() < 1e-9);
/// assert!((freq(12.0) - 880.0).abs() < 1e-9);
/// assert!((freq(-9.0) - 261.6256).abs() < 1e-3);
/// ```
pub fn freq(key: f64) -> f64 {
    A4_FREQUENCY * (key / 12.0).exp2()
}

/// Converts a frequency in Hz to a semitone offset from A4.
///
/// The frequency must be positive. Zero yields negative infinity and
/// negative frequencies yield NaN; neither is guarded.
///
/// # Examples
/// ```
/// use fourier_tone_synth::pitch::key;
///
/// assert!(key(440.0).abs() < 1e-9);
/// assert!((key(220.0) + 12.0).abs() < 1e-9);
/// ```
pub fn key(freq: f64) -> f64 {
    12.0 * (freq / A4_FREQUENCY).log2()
}

/// Parses a note name (e.g., "A4", "C#5", "Bb3", "Fs2") to a semitone offset from A4.
///
/// Accidentals are `#` or `s` for sharp and `b` for flat. Octaves follow
/// scientific pitch notation, where C4 is middle C and octave numbers may
/// be negative.
///
/// # Returns
/// The key offset, or `None` if the name is malformed.
pub fn key_from_note_name(name: &str) -> Option<f64> {
    let name = name.trim();
    let mut chars = name.chars();
    let note_letter = chars.next()?.to_ascii_uppercase();

    // Semitones above C within one octave.
    let base_semitone = match note_letter {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let rest = chars.as_str();
    let (accidental, octave_str) = if let Some(stripped) = rest.strip_prefix('#') {
        (1i32, stripped)
    } else if let Some(stripped) = rest.strip_prefix('s') {
        (1i32, stripped)
    } else if let Some(stripped) = rest.strip_prefix('b') {
        (-1i32, stripped)
    } else {
        (0i32, rest)
    };

    let octave: i32 = octave_str.parse().ok()?;

    // A4 sits 9 semitones above C4.
    let key = (octave - 4) * 12 + base_semitone + accidental - 9;
    Some(key as f64)
}
