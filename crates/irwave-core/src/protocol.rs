//! NEC protocol timing model.
//!
//! A transmission is a sequence of carrier-on bursts (pulses) and idle gaps
//! (spaces) with microsecond durations. The standard frame starts with a
//! 9 ms AGC burst and 4.5 ms gap, followed by 32 data bits where the space
//! length distinguishes ones from zeros, a stop burst, and a guard gap.

use crate::command::CommandWord;
use crate::error::{EncodeError, EncodeResult};

/// AGC leader burst, in microseconds.
pub const LEADER_PULSE_US: f64 = 9_000.0;
/// Leader gap, in microseconds.
pub const LEADER_SPACE_US: f64 = 4_500.0;
/// Data bit burst, in microseconds.
pub const BIT_PULSE_US: f64 = 562.5;
/// Space that encodes a logical one, in microseconds.
pub const ONE_SPACE_US: f64 = 1_687.5;
/// Space that encodes a logical zero, in microseconds.
pub const ZERO_SPACE_US: f64 = 562.5;
/// Stop burst terminating the data bits, in microseconds.
pub const STOP_PULSE_US: f64 = 562.5;
/// Default gap between repeated frames and trailing guard, in microseconds.
pub const FRAME_GAP_US: f64 = 40_000.0;

/// Segments per frame: leader pair, 64 bit segments, stop burst, guard.
pub const FRAME_SEGMENTS: usize = 68;

/// Whether the carrier is on or off during a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Carrier on (IR burst).
    Pulse,
    /// Carrier off (gap).
    Space,
}

/// A single mark or space in an IR transmission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSegment {
    /// Carrier state during the segment.
    pub kind: SegmentKind,
    /// Segment length in microseconds.
    pub duration_us: f64,
}

impl TimingSegment {
    /// Creates a carrier-on segment.
    pub fn pulse(duration_us: f64) -> Self {
        Self {
            kind: SegmentKind::Pulse,
            duration_us,
        }
    }

    /// Creates a carrier-off segment.
    pub fn space(duration_us: f64) -> Self {
        Self {
            kind: SegmentKind::Space,
            duration_us,
        }
    }

    /// Returns true for carrier-on segments.
    pub fn is_pulse(&self) -> bool {
        self.kind == SegmentKind::Pulse
    }
}

/// Encodes one complete frame for a command word.
///
/// Layout: AGC leader, the four payload bytes each sent least significant
/// bit first, a stop burst, and a trailing guard gap of [`FRAME_GAP_US`].
pub fn encode_frame(word: CommandWord) -> Vec<TimingSegment> {
    let mut segments = Vec::with_capacity(FRAME_SEGMENTS);
    push_frame_body(&mut segments, word);
    segments.push(TimingSegment::space(FRAME_GAP_US));
    segments
}

/// Encodes `repeats` consecutive full frames separated by `gap_us` of
/// silence, with one more `gap_us` guard after the last frame.
///
/// Every repetition is a complete retransmission of the frame, not the
/// abbreviated NEC repeat code. The output holds exactly
/// [`FRAME_SEGMENTS`] `* repeats` segments.
pub fn encode_repeated(
    word: CommandWord,
    repeats: u32,
    gap_us: f64,
) -> EncodeResult<Vec<TimingSegment>> {
    if repeats < 1 {
        return Err(EncodeError::InvalidRepeatCount { count: repeats });
    }

    let mut segments = Vec::with_capacity(FRAME_SEGMENTS * repeats as usize);
    for i in 0..repeats {
        if i > 0 {
            segments.push(TimingSegment::space(gap_us));
        }
        push_frame_body(&mut segments, word);
    }
    segments.push(TimingSegment::space(gap_us));

    Ok(segments)
}

/// Sums segment durations, in microseconds.
pub fn total_duration_us(segments: &[TimingSegment]) -> f64 {
    segments.iter().map(|s| s.duration_us).sum()
}

/// Appends the frame body: leader, 32 data bits, stop burst. No guard.
fn push_frame_body(segments: &mut Vec<TimingSegment>, word: CommandWord) {
    segments.push(TimingSegment::pulse(LEADER_PULSE_US));
    segments.push(TimingSegment::space(LEADER_SPACE_US));

    for byte in word.payload_bytes() {
        for bit in 0..8 {
            segments.push(TimingSegment::pulse(BIT_PULSE_US));
            let space_us = if byte & (1 << bit) != 0 {
                ONE_SPACE_US
            } else {
                ZERO_SPACE_US
            };
            segments.push(TimingSegment::space(space_us));
        }
    }

    segments.push(TimingSegment::pulse(STOP_PULSE_US));
}
