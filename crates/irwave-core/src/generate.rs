//! Signal generation entry points.
//!
//! These functions wire the full pipeline together: command word to timing
//! segments to carrier samples to WAV bytes. Everything is a pure function
//! of its arguments; the same inputs always produce the same output bytes.

use crate::assemble::assemble;
use crate::buffer::SampleBuffer;
use crate::command::CommandWord;
use crate::config::GeneratorConfig;
use crate::error::{EncodeResult, FormatError};
use crate::protocol::encode_repeated;
use crate::wav::{samples_to_pcm16, stereo_to_pcm16, write_wav_to_vec, WavFormat, WavResult};

/// Parses a command word from a hex string.
///
/// Convenience alias for [`CommandWord::from_hex`].
pub fn decode_hex(input: &str) -> Result<CommandWord, FormatError> {
    CommandWord::from_hex(input)
}

/// Renders a transmission for the given address and command byte.
///
/// The inverted payload bytes are derived as complements, per the standard
/// protocol. Validation runs first, so a bad config fails before any
/// samples are allocated.
pub fn generate(address: u8, command: u8, config: &GeneratorConfig) -> EncodeResult<SampleBuffer> {
    generate_from_word(CommandWord::from_parts(address, command), config)
}

/// Renders a transmission for a full command word.
///
/// The word's four payload bytes are transmitted verbatim, so
/// extended-protocol words keep their non-complement address field.
pub fn generate_from_word(
    word: CommandWord,
    config: &GeneratorConfig,
) -> EncodeResult<SampleBuffer> {
    config.validate()?;
    let segments = encode_repeated(word, config.repeat_count, config.frame_gap_us)?;
    Ok(assemble(&segments, config))
}

/// Serializes a sample buffer into complete WAV file bytes.
pub fn to_wav_bytes(buffer: &SampleBuffer, sample_rate: u32) -> Vec<u8> {
    match buffer {
        SampleBuffer::Mono(samples) => {
            write_wav_to_vec(&WavFormat::mono(sample_rate), &samples_to_pcm16(samples))
        }
        SampleBuffer::Stereo(stereo) => write_wav_to_vec(
            &WavFormat::stereo(sample_rate),
            &stereo_to_pcm16(&stereo.left, &stereo.right),
        ),
    }
}

/// Renders a transmission and packages it as a WAV file with metadata.
pub fn generate_wav(
    address: u8,
    command: u8,
    config: &GeneratorConfig,
) -> EncodeResult<WavResult> {
    generate_wav_from_word(CommandWord::from_parts(address, command), config)
}

/// Renders a transmission from a full command word into a WAV file.
pub fn generate_wav_from_word(
    word: CommandWord,
    config: &GeneratorConfig,
) -> EncodeResult<WavResult> {
    let buffer = generate_from_word(word, config)?;
    Ok(WavResult::from_buffer(&buffer, config.sample_rate))
}

/// Parses a hex command word and renders it into a WAV file.
pub fn generate_wav_from_hex(input: &str, config: &GeneratorConfig) -> EncodeResult<WavResult> {
    let word = CommandWord::from_hex(input)?;
    generate_wav_from_word(word, config)
}
