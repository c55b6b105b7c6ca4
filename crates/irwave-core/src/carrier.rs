//! Carrier synthesis for individual timing segments.
//!
//! Each segment is rendered on its own: the number of output samples comes
//! from the truncating conversion in [`segment_sample_count`], and the
//! carrier phase restarts at sample zero of every segment. On/off state is
//! decided by the sample's position inside the carrier period, never by a
//! running phase accumulator, so identical segments always render to
//! identical samples.

use std::f64::consts::TAU;

use crate::buffer::{SampleBuffer, StereoBuffer};
use crate::config::{GeneratorConfig, Modulation};
use crate::protocol::TimingSegment;

/// Amplitude of the space filler square wave in stereo differential mode.
/// Spaces carry a faint balanced wave instead of flat silence so lossy
/// playback chains do not gate the output mid-transmission.
const SPACE_AMPLITUDE: f64 = 0.1;
/// Duty cycle of the space filler square wave.
const SPACE_DUTY: f64 = 0.5;

/// Number of output samples for a segment duration.
///
/// Computes `floor(duration_us * compensation * sample_rate / 1e6)`. The
/// truncation means per-segment boundaries never overshoot the ideal time
/// grid, at the cost of dropping up to one sample per segment.
pub fn segment_sample_count(duration_us: f64, config: &GeneratorConfig) -> usize {
    let ideal =
        duration_us * config.timing_compensation * f64::from(config.sample_rate) / 1_000_000.0;
    ideal.floor() as usize
}

/// Renders one segment into a fresh buffer shaped by the configured
/// modulation mode.
pub fn render_segment(segment: &TimingSegment, config: &GeneratorConfig) -> SampleBuffer {
    let num_samples = segment_sample_count(segment.duration_us, config);
    match config.modulation {
        Modulation::StereoDifferential => {
            let mut stereo = StereoBuffer::with_capacity(num_samples);
            stereo_differential(segment, config, &mut stereo.left, &mut stereo.right);
            SampleBuffer::Stereo(stereo)
        }
        Modulation::MonoSquare => {
            let mut samples = Vec::with_capacity(num_samples);
            mono_square(segment, config, &mut samples);
            SampleBuffer::Mono(samples)
        }
        Modulation::MonoSine => {
            let mut samples = Vec::with_capacity(num_samples);
            mono_sine(segment, config, &mut samples);
            SampleBuffer::Mono(samples)
        }
    }
}

/// Appends a segment rendered as an anti-phase stereo carrier.
///
/// Pulses drive the channels in opposition so the voltage across a diode
/// wired between them swings twice the single-channel amplitude. Spaces
/// carry the low-amplitude filler wave, identical on both channels, which
/// keeps the differential voltage at zero.
pub(crate) fn stereo_differential(
    segment: &TimingSegment,
    config: &GeneratorConfig,
    left: &mut Vec<f64>,
    right: &mut Vec<f64>,
) {
    let num_samples = segment_sample_count(segment.duration_us, config);
    let period = config.carrier_period_samples();
    let amplitude = config.amplitude;

    if segment.is_pulse() {
        let duty = config.effective_duty();
        for i in 0..num_samples {
            if carrier_on(i, period, duty) {
                left.push(amplitude);
                right.push(-amplitude);
            } else {
                left.push(-amplitude);
                right.push(amplitude);
            }
        }
    } else {
        for i in 0..num_samples {
            let value = if carrier_on(i, period, SPACE_DUTY) {
                SPACE_AMPLITUDE
            } else {
                -SPACE_AMPLITUDE
            };
            left.push(value);
            right.push(value);
        }
    }
}

/// Appends a segment rendered as a unipolar mono square carrier.
///
/// Pulses alternate between zero and the configured amplitude; spaces are
/// exact digital silence.
pub(crate) fn mono_square(
    segment: &TimingSegment,
    config: &GeneratorConfig,
    out: &mut Vec<f64>,
) {
    let num_samples = segment_sample_count(segment.duration_us, config);

    if segment.is_pulse() {
        let period = config.carrier_period_samples();
        let duty = config.effective_duty();
        let amplitude = config.amplitude;
        for i in 0..num_samples {
            if carrier_on(i, period, duty) {
                out.push(amplitude);
            } else {
                out.push(0.0);
            }
        }
    } else {
        out.resize(out.len() + num_samples, 0.0);
    }
}

/// Appends a segment rendered as a rectified sine carrier.
///
/// Pulses map the sine from [-1, 1] onto [0, amplitude]; spaces are exact
/// digital silence. The duty cycle does not apply to this shape.
pub(crate) fn mono_sine(segment: &TimingSegment, config: &GeneratorConfig, out: &mut Vec<f64>) {
    let num_samples = segment_sample_count(segment.duration_us, config);

    if segment.is_pulse() {
        let period = config.carrier_period_samples();
        let amplitude = config.amplitude;
        for i in 0..num_samples {
            let phase = TAU * (i as f64) / period;
            out.push((phase.sin() + 1.0) / 2.0 * amplitude);
        }
    } else {
        out.resize(out.len() + num_samples, 0.0);
    }
}

/// True when the sample at `index` falls in the on part of the carrier
/// period. The position wraps by floating point modulo, so non-integer
/// periods distribute the extra fraction across cycles.
fn carrier_on(index: usize, period_samples: f64, duty: f64) -> bool {
    let position = (index as f64) % period_samples;
    position < period_samples * duty
}
