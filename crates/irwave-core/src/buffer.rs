//! Sample buffer types for rendered signals.

/// Stereo sample data with separate left and right channels.
///
/// Both channels always hold the same number of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoBuffer {
    /// Left channel samples.
    pub left: Vec<f64>,
    /// Right channel samples.
    pub right: Vec<f64>,
}

impl StereoBuffer {
    /// Creates an empty buffer with reserved capacity per channel.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            left: Vec::with_capacity(capacity),
            right: Vec::with_capacity(capacity),
        }
    }

    /// Samples per channel.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Interleaves the channels as left, right, left, right.
    pub fn interleave(&self) -> Vec<f64> {
        let mut output = Vec::with_capacity(self.left.len() * 2);
        for (l, r) in self.left.iter().zip(self.right.iter()) {
            output.push(*l);
            output.push(*r);
        }
        output
    }
}

/// A rendered signal, one or two channels of f64 samples in [-1.0, 1.0].
///
/// The channel count is fixed by the variant, so a buffer can never carry
/// an unsupported layout into the WAV encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleBuffer {
    /// Single channel.
    Mono(Vec<f64>),
    /// Two channels of equal length.
    Stereo(StereoBuffer),
}

impl SampleBuffer {
    /// Returns true for two-channel buffers.
    pub fn is_stereo(&self) -> bool {
        matches!(self, SampleBuffer::Stereo(_))
    }

    /// Number of channels, 1 or 2.
    pub fn channels(&self) -> u16 {
        match self {
            SampleBuffer::Mono(_) => 1,
            SampleBuffer::Stereo(_) => 2,
        }
    }

    /// Samples per channel.
    pub fn len(&self) -> usize {
        match self {
            SampleBuffer::Mono(samples) => samples.len(),
            SampleBuffer::Stereo(stereo) => stereo.len(),
        }
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Playback duration at the given sample rate, in seconds.
    pub fn duration_seconds(&self, sample_rate: u32) -> f64 {
        self.len() as f64 / f64::from(sample_rate)
    }
}
