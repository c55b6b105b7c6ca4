//! Deterministic WAV file writer.
//!
//! This module writes 16-bit PCM WAV files with a fixed 44-byte header and
//! no variable metadata, so identical samples always serialize to identical
//! bytes. The BLAKE3 hash of the PCM payload is exposed for content-level
//! comparison of outputs.

mod format;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use format::{WavFormat, BITS_PER_SAMPLE};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, stereo_to_pcm16, write_wav, write_wav_to_vec};
