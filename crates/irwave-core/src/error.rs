//! Error types for the irwave codec.

use thiserror::Error;

/// Result type for signal generation operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors produced when parsing a hexadecimal command word.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Input does not contain exactly eight hex digits.
    #[error("command word must be exactly 8 hex digits, got {length}")]
    WrongLength {
        /// Number of characters found after prefix removal.
        length: usize,
    },

    /// Input contains a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {character:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        character: char,
        /// Zero-based position of the character after prefix removal.
        position: usize,
    },
}

/// Errors that can occur during signal generation.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Malformed command word input.
    #[error("malformed command word: {0}")]
    Format(#[from] FormatError),

    /// Repeat count below one.
    #[error("invalid repeat count: {count} (must be at least 1)")]
    InvalidRepeatCount {
        /// The invalid repeat count.
        count: u32,
    },

    /// Zero sample rate.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Non-positive or non-finite carrier frequency.
    #[error("invalid carrier frequency: {freq} Hz")]
    InvalidCarrierFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Duty cycle outside the open interval (0, 1).
    #[error("invalid duty cycle: {duty} (must be strictly between 0 and 1)")]
    InvalidDutyCycle {
        /// The invalid duty cycle.
        duty: f64,
    },

    /// Amplitude outside (0, 1].
    #[error("invalid amplitude: {amplitude} (must be in (0, 1])")]
    InvalidAmplitude {
        /// The invalid amplitude.
        amplitude: f64,
    },

    /// Non-positive or non-finite inter-frame gap.
    #[error("invalid frame gap: {gap_us} microseconds")]
    InvalidFrameGap {
        /// The invalid gap length.
        gap_us: f64,
    },

    /// Non-positive or non-finite timing compensation factor.
    #[error("invalid timing compensation factor: {factor}")]
    InvalidTimingCompensation {
        /// The invalid factor.
        factor: f64,
    },
}
