//! NEC infrared signal synthesis.
//!
//! This crate turns NEC remote-control commands into audio waveforms. A
//! command word is expanded into the protocol's pulse/space timing, the
//! timing is rendered as a modulated carrier in PCM samples, and the
//! samples are serialized as a 16-bit WAV file. The intended playback path
//! drives an IR LED from a sound card or headphone jack, which is why the
//! default rendering is a stereo pair in anti-phase: wiring the diode
//! across the channels doubles its drive voltage.
//!
//! # Pipeline
//!
//! [`CommandWord`] parses and lays out the 32-bit command. The [`protocol`]
//! module expands it into [`protocol::TimingSegment`] lists. [`carrier`]
//! and [`assemble`] render segments into a [`SampleBuffer`], and [`wav`]
//! serializes buffers into bytes. The [`generate`](mod@generate) module
//! ties the stages together.
//!
//! # Determinism
//!
//! Generation is a pure function of (command word, config). There is no
//! random state, no clock, and no global configuration; identical inputs
//! produce byte-identical WAV files, and the [`WavResult::pcm_hash`] field
//! makes that cheap to verify.
//!
//! # Example
//!
//! ```
//! use irwave_core::{generate_wav_from_hex, GeneratorConfig};
//!
//! let config = GeneratorConfig::default();
//! let result = generate_wav_from_hex("0x20DF10EF", &config)?;
//!
//! assert!(result.is_stereo);
//! // std::fs::write("power.wav", &result.wav_data)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assemble;
pub mod buffer;
pub mod carrier;
pub mod command;
pub mod config;
pub mod error;
pub mod generate;
pub mod protocol;
pub mod wav;

// Re-export main types at crate root
pub use buffer::{SampleBuffer, StereoBuffer};
pub use command::CommandWord;
pub use config::{GeneratorConfig, Modulation, PLAYBACK_COMPENSATION};
pub use error::{EncodeError, EncodeResult, FormatError};
pub use generate::{
    decode_hex, generate, generate_from_word, generate_wav, generate_wav_from_hex,
    generate_wav_from_word, to_wav_bytes,
};
pub use wav::WavResult;
