//! Parameter validation for tone specs.
//!
//! The synthesis core accepts any `ToneSpec` and leaves numeric edge cases
//! (zero attack, non-positive frequency) unguarded. Callers that want to
//! reject such specs up front run [`validate_tone`] first.

use std::fmt;

use crate::tone::ToneSpec;

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g. `envelope.attack`).
    pub field: String,
    /// Human-readable error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates every field of a tone spec.
///
/// # Returns
/// * `Ok(())` if all parameters are in range
/// * `Err(errors)` with one entry per violated constraint, in field order
pub fn validate_tone(spec: &ToneSpec) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if spec.sample_rate == 0 {
        errors.push(ValidationError::new(
            "sample_rate",
            "sample rate must be positive, got 0",
        ));
    }

    push_err(&mut errors, validate_non_negative("length", spec.length));
    push_err(&mut errors, validate_positive("frequency", spec.frequency));
    push_err(&mut errors, validate_finite("amplitude", spec.amplitude));

    if !spec.waveform.is_recognized() {
        errors.push(ValidationError::new(
            "waveform",
            format!(
                "unrecognized waveform '{}' (expected sine, saw, square or triangle)",
                spec.waveform
            ),
        ));
    }

    let env = &spec.envelope;
    push_err(&mut errors, validate_positive("envelope.attack", env.attack));
    push_err(&mut errors, validate_positive("envelope.decay", env.decay));
    push_err(&mut errors, validate_unit_interval("envelope.sustain", env.sustain));
    push_err(&mut errors, validate_positive("envelope.release", env.release));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn push_err(errors: &mut Vec<ValidationError>, result: Result<(), ValidationError>) {
    if let Err(e) = result {
        errors.push(e);
    }
}

/// Validate that a value is finite.
pub fn validate_finite(name: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(
            name,
            format!("{} must be finite, got {}", name, value),
        ));
    }
    Ok(())
}

/// Validate that a value is finite and positive (> 0).
pub fn validate_positive(name: &str, value: f64) -> Result<(), ValidationError> {
    validate_finite(name, value)?;
    if value <= 0.0 {
        return Err(ValidationError::new(
            name,
            format!("{} must be positive, got {}", name, value),
        ));
    }
    Ok(())
}

/// Validate that a value is finite and non-negative (>= 0).
pub fn validate_non_negative(name: &str, value: f64) -> Result<(), ValidationError> {
    validate_finite(name, value)?;
    if value < 0.0 {
        return Err(ValidationError::new(
            name,
            format!("{} must be non-negative, got {}", name, value),
        ));
    }
    Ok(())
}

/// Validate that a value lies in [0.0, 1.0].
pub fn validate_unit_interval(name: &str, value: f64) -> Result<(), ValidationError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::new(
            name,
            format!("{} must be in range [0.0, 1.0], got {}", name, value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveform::Waveform;

    #[test]
    fn test_default_spec_is_valid() {
        assert!(validate_tone(&ToneSpec::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let spec = ToneSpec::builder()
            .sample_rate(0)
            .frequency(0.0)
            .attack(0.0)
            .sustain(1.5)
            .build();

        let errors = validate_tone(&spec).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["sample_rate", "frequency", "envelope.attack", "envelope.sustain"]
        );
    }

    #[test]
    fn test_zero_length_is_allowed() {
        let spec = ToneSpec::builder().length(0.0).build();
        assert!(validate_tone(&spec).is_ok());
    }

    #[test]
    fn test_negative_frequency_rejected() {
        let spec = ToneSpec::builder().frequency(-440.0).build();
        let errors = validate_tone(&spec).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("must be positive"));
    }

    #[test]
    fn test_unrecognized_waveform_rejected() {
        let spec = ToneSpec::builder()
            .waveform(Waveform::Unrecognized("pulse".into()))
            .build();
        let errors = validate_tone(&spec).unwrap_err();
        assert_eq!(errors[0].field, "waveform");
        assert!(errors[0].to_string().contains("pulse"));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        assert!(validate_positive("x", f64::NAN).is_err());
        assert!(validate_non_negative("x", f64::INFINITY).is_err());
        assert!(validate_finite("x", f64::NEG_INFINITY).is_err());
        assert!(validate_unit_interval("x", f64::NAN).is_err());
    }
}
