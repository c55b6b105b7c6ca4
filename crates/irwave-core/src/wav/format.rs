//! WAV format parameters.

/// Bits per sample in every file this writer produces.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Channel layout and sample rate for an output file.
///
/// Only the mono and stereo constructors exist, so a header can never carry
/// a channel count the rest of the codec does not understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    channels: u16,
    sample_rate: u32,
}

impl WavFormat {
    /// Creates a mono format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
        }
    }

    /// Creates a stereo format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
        }
    }

    /// Number of channels, 1 or 2.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bytes per sample frame across all channels.
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * (BITS_PER_SAMPLE / 8)
    }

    /// Bytes per second of audio.
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }
}
