//! WAV file generation result type.

use crate::buffer::SampleBuffer;

use super::format::WavFormat;
use super::writer::{samples_to_pcm16, stereo_to_pcm16, write_wav_to_vec};

/// A complete rendered WAV file with its metadata.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete file bytes, 44-byte header plus PCM payload.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload, as lowercase hex.
    pub pcm_hash: String,
    /// Whether the file holds two channels.
    pub is_stereo: bool,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Samples per channel.
    pub num_samples: usize,
}

impl WavResult {
    /// Builds a result from mono samples.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> Self {
        Self::build(
            WavFormat::mono(sample_rate),
            samples_to_pcm16(samples),
            samples.len(),
        )
    }

    /// Builds a result from separate stereo channels.
    pub fn from_stereo(left: &[f64], right: &[f64], sample_rate: u32) -> Self {
        Self::build(
            WavFormat::stereo(sample_rate),
            stereo_to_pcm16(left, right),
            left.len().min(right.len()),
        )
    }

    /// Builds a result from an assembled buffer, mono or stereo.
    pub fn from_buffer(buffer: &SampleBuffer, sample_rate: u32) -> Self {
        match buffer {
            SampleBuffer::Mono(samples) => Self::from_mono(samples, sample_rate),
            SampleBuffer::Stereo(stereo) => {
                Self::from_stereo(&stereo.left, &stereo.right, sample_rate)
            }
        }
    }

    fn build(format: WavFormat, pcm: Vec<u8>, num_samples: usize) -> Self {
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(&format, &pcm);
        Self {
            wav_data,
            pcm_hash,
            is_stereo: format.channels() == 2,
            sample_rate: format.sample_rate(),
            num_samples,
        }
    }

    /// Playback duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / f64::from(self.sample_rate)
    }
}
