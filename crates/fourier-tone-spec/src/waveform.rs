//! Waveform selector.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Waveform approximated by the oscillator.
///
/// Recognized tags are `sine` (also `sin`), `saw`/`sawtooth`, `square` and
/// `triangle`, matched case-insensitively. Tags that do not name a known
/// waveform are kept as [`Waveform::Unrecognized`] rather than rejected. The
/// oscillator renders them as silence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Waveform {
    /// Pure sine wave.
    #[default]
    Sine,
    /// Sawtooth from all harmonics with 1/n amplitudes.
    Sawtooth,
    /// Square from odd harmonics with 1/n amplitudes.
    Square,
    /// Triangle from odd cosine harmonics with 1/n^2 amplitudes.
    Triangle,
    /// Any other tag, kept verbatim.
    Unrecognized(String),
}

impl Waveform {
    /// Canonical tag used in JSON and on the command line.
    pub fn tag(&self) -> &str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Sawtooth => "saw",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
            Waveform::Unrecognized(tag) => tag,
        }
    }

    /// Returns true for every variant except [`Waveform::Unrecognized`].
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Waveform::Unrecognized(_))
    }
}

impl FromStr for Waveform {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let waveform = match s.trim().to_ascii_lowercase().as_str() {
            "sine" | "sin" => Waveform::Sine,
            "saw" | "sawtooth" => Waveform::Sawtooth,
            "square" => Waveform::Square,
            "triangle" => Waveform::Triangle,
            _ => Waveform::Unrecognized(s.to_string()),
        };
        Ok(waveform)
    }
}

impl From<String> for Waveform {
    fn from(tag: String) -> Self {
        match tag.parse() {
            Ok(waveform) => waveform,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Waveform {
    fn from(tag: &str) -> Self {
        Waveform::from(tag.to_string())
    }
}

impl From<Waveform> for String {
    fn from(waveform: Waveform) -> Self {
        waveform.tag().to_string()
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
