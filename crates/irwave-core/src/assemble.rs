//! Segment-to-buffer assembly.

use crate::buffer::{SampleBuffer, StereoBuffer};
use crate::carrier;
use crate::carrier::segment_sample_count;
use crate::config::{GeneratorConfig, Modulation};
use crate::protocol::TimingSegment;

/// Renders a segment sequence into one contiguous buffer.
///
/// Segments are rendered in order and concatenated without padding or
/// overlap, so the output length per channel is exactly the sum of the
/// per-segment sample counts. The capacity is reserved up front from that
/// sum; rendering appends in place and never reallocates.
pub fn assemble(segments: &[TimingSegment], config: &GeneratorConfig) -> SampleBuffer {
    let total: usize = segments
        .iter()
        .map(|s| segment_sample_count(s.duration_us, config))
        .sum();

    match config.modulation {
        Modulation::StereoDifferential => {
            let mut stereo = StereoBuffer::with_capacity(total);
            for segment in segments {
                carrier::stereo_differential(segment, config, &mut stereo.left, &mut stereo.right);
            }
            SampleBuffer::Stereo(stereo)
        }
        Modulation::MonoSquare => {
            let mut samples = Vec::with_capacity(total);
            for segment in segments {
                carrier::mono_square(segment, config, &mut samples);
            }
            SampleBuffer::Mono(samples)
        }
        Modulation::MonoSine => {
            let mut samples = Vec::with_capacity(total);
            for segment in segments {
                carrier::mono_sine(segment, config, &mut samples);
            }
            SampleBuffer::Mono(samples)
        }
    }
}
