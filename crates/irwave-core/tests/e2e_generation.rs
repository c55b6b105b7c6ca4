//! End-to-end tests for the hex-to-WAV pipeline.
//!
//! These exercise the documented signal structure at the sample level: the
//! AGC leader, data bit boundaries, repeat gaps, and the exact quantized
//! values an independent WAV reader recovers from the output.

use std::io::Cursor;

use irwave_core::carrier::segment_sample_count;
use irwave_core::protocol::{encode_frame, total_duration_us, FRAME_GAP_US};
use irwave_core::{
    generate, generate_from_word, generate_wav, generate_wav_from_hex, CommandWord, EncodeError,
    GeneratorConfig, Modulation, SampleBuffer, StereoBuffer,
};

/// Samples in the 9 ms AGC burst at the default 192 kHz rate.
const LEADER_PULSE_SAMPLES: usize = 1_728;
/// Samples in the 4.5 ms leader gap at 192 kHz.
const LEADER_SPACE_SAMPLES: usize = 864;
/// Samples in one full frame (including guard) at 192 kHz.
const FRAME_SAMPLES: usize = 20_748;
/// Samples in the 40 ms guard gap at 192 kHz.
const GUARD_SAMPLES: usize = 7_680;

fn default_stereo(address: u8, command: u8) -> StereoBuffer {
    let buffer = generate(address, command, &GeneratorConfig::default()).expect("generation");
    match buffer {
        SampleBuffer::Stereo(stereo) => stereo,
        SampleBuffer::Mono(_) => panic!("default config renders stereo"),
    }
}

fn is_pulse_sample(l: f64, r: f64) -> bool {
    (l.abs() - 0.85).abs() < 1e-12 && (l + r).abs() < 1e-12
}

fn is_space_sample(l: f64, r: f64) -> bool {
    (l.abs() - 0.1).abs() < 1e-12 && l == r
}

#[test]
fn test_known_word_scenario() {
    let word = CommandWord::from_hex("0x20DF10EF").expect("valid hex");
    assert_eq!(word.address(), 0x20);
    assert_eq!(word.command(), 0x10);

    let result =
        generate_wav_from_hex("0x20DF10EF", &GeneratorConfig::default()).expect("generation");
    assert!(result.is_stereo);
    assert_eq!(result.num_samples, FRAME_SAMPLES);
}

#[test]
fn test_leader_occupies_expected_samples() {
    let stereo = default_stereo(0x20, 0x10);

    for i in 0..LEADER_PULSE_SAMPLES {
        assert!(
            is_pulse_sample(stereo.left[i], stereo.right[i]),
            "sample {} should be inside the AGC burst",
            i
        );
    }
    for i in LEADER_PULSE_SAMPLES..LEADER_PULSE_SAMPLES + LEADER_SPACE_SAMPLES {
        assert!(
            is_space_sample(stereo.left[i], stereo.right[i]),
            "sample {} should be inside the leader gap",
            i
        );
    }
}

#[test]
fn test_first_data_bit_boundary() {
    // The first bit burst must start at floor(13.5 ms * 192 kHz) = 2592.
    let stereo = default_stereo(0x20, 0x10);
    let boundary = LEADER_PULSE_SAMPLES + LEADER_SPACE_SAMPLES;
    assert_eq!(boundary, 2_592);

    assert!(is_space_sample(
        stereo.left[boundary - 1],
        stereo.right[boundary - 1]
    ));
    // Carrier phase restarts on the new segment, so its first sample is the
    // on phase: left positive, right negative.
    assert_eq!(stereo.left[boundary], 0.85);
    assert_eq!(stereo.right[boundary], -0.85);
}

#[test]
fn test_trailing_guard_is_filler() {
    let stereo = default_stereo(0x20, 0x10);
    let start = stereo.len() - GUARD_SAMPLES;
    for i in start..stereo.len() {
        assert!(
            is_space_sample(stereo.left[i], stereo.right[i]),
            "sample {} should be inside the trailing guard",
            i
        );
    }
}

#[test]
fn test_repeat_three_inserts_two_gaps() {
    let config = GeneratorConfig {
        repeat_count: 3,
        ..GeneratorConfig::default()
    };
    let buffer = generate(0x20, 0x10, &config).expect("generation");
    assert_eq!(buffer.len(), FRAME_SAMPLES * 3);

    // Gap placement: between frames the guard-length filler run appears
    // exactly twice, plus once at the very end.
    let SampleBuffer::Stereo(stereo) = buffer else {
        panic!("default config renders stereo");
    };
    let mut filler_runs = 0usize;
    let mut run_length = 0usize;
    for i in 0..stereo.len() {
        if is_space_sample(stereo.left[i], stereo.right[i]) {
            run_length += 1;
        } else {
            if run_length >= GUARD_SAMPLES {
                filler_runs += 1;
            }
            run_length = 0;
        }
    }
    if run_length >= GUARD_SAMPLES {
        filler_runs += 1;
    }
    assert_eq!(filler_runs, 3, "two inter-frame gaps plus one trailing");
}

#[test]
fn test_frame_duration_is_command_independent() {
    let expected_us = 108_062.5;
    for (address, command) in [(0x00u8, 0x00u8), (0x20, 0x10), (0xFF, 0x00), (0x5A, 0xC3)] {
        let segments = encode_frame(CommandWord::from_parts(address, command));
        assert_eq!(total_duration_us(&segments), expected_us);

        let buffer = generate(address, command, &GeneratorConfig::default()).expect("generation");
        assert_eq!(buffer.len(), FRAME_SAMPLES);
        assert_eq!(
            buffer.duration_seconds(192_000),
            FRAME_SAMPLES as f64 / 192_000.0
        );
    }
}

#[test]
fn test_wav_opens_in_independent_reader() {
    let result =
        generate_wav_from_hex("20DF10EF", &GeneratorConfig::default()).expect("generation");

    let mut reader = hound::WavReader::new(Cursor::new(result.wav_data)).expect("readable wav");
    let spec = reader.spec();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 192_000);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(reader.duration() as usize, FRAME_SAMPLES);

    // First frame: carrier on, so left is +0.85 and right is -0.85. The
    // quantizer scales the two signs differently.
    let samples: Vec<i16> = reader
        .samples::<i16>()
        .take(2)
        .map(|s| s.expect("sample"))
        .collect();
    assert_eq!(samples, vec![27_852, -27_853]);
}

#[test]
fn test_mono_square_wav_levels() {
    let config = GeneratorConfig {
        modulation: Modulation::MonoSquare,
        ..GeneratorConfig::default()
    };
    let result = generate_wav(0x20, 0x10, &config).expect("generation");
    assert!(!result.is_stereo);

    let mut reader = hound::WavReader::new(Cursor::new(result.wav_data)).expect("readable wav");
    assert_eq!(reader.spec().channels, 1);
    for sample in reader.samples::<i16>() {
        let value = sample.expect("sample");
        assert!(
            value == 0 || value == 27_852,
            "unexpected level {} in unipolar square output",
            value
        );
    }
}

#[test]
fn test_mono_sine_wav_is_non_negative() {
    let config = GeneratorConfig {
        modulation: Modulation::MonoSine,
        ..GeneratorConfig::default()
    };
    let result = generate_wav(0x20, 0x10, &config).expect("generation");

    let mut reader = hound::WavReader::new(Cursor::new(result.wav_data)).expect("readable wav");
    let mut peak = 0i16;
    for sample in reader.samples::<i16>() {
        let value = sample.expect("sample");
        assert!(value >= 0, "rectified sine must never go negative");
        peak = peak.max(value);
    }
    assert_eq!(peak, 27_852);
}

#[test]
fn test_compensation_stretches_output() {
    let nominal = generate(0x20, 0x10, &GeneratorConfig::default()).expect("nominal");

    let config = GeneratorConfig {
        timing_compensation: irwave_core::PLAYBACK_COMPENSATION,
        ..GeneratorConfig::default()
    };
    let stretched = generate(0x20, 0x10, &config).expect("stretched");

    let ratio = stretched.len() as f64 / nominal.len() as f64;
    assert!(
        (1.030..1.040).contains(&ratio),
        "compensated output ratio {} out of range",
        ratio
    );
}

#[test]
fn test_custom_frame_gap_shortens_output() {
    let config = GeneratorConfig {
        frame_gap_us: 10_000.0,
        ..GeneratorConfig::default()
    };
    let buffer = generate(0x20, 0x10, &config).expect("generation");

    let gap_samples = segment_sample_count(10_000.0, &config);
    assert_eq!(buffer.len(), FRAME_SAMPLES - GUARD_SAMPLES + gap_samples);
}

#[test]
fn test_extended_word_renders_differently() {
    let config = GeneratorConfig::default();
    let extended = CommandWord::from_u32(0x61D648B7);
    assert!(!extended.is_well_formed());

    let verbatim = generate_from_word(extended, &config).expect("extended word");
    let rebuilt = generate(extended.address(), extended.command(), &config).expect("rebuilt");

    // The rebuilt word replaces the extended address byte with a
    // complement, which changes the bit pattern on the wire.
    assert_ne!(verbatim, rebuilt);
}

#[test]
fn test_invalid_configs_fail_before_rendering() {
    let bad_rate = GeneratorConfig {
        sample_rate: 0,
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        generate(0x20, 0x10, &bad_rate),
        Err(EncodeError::InvalidSampleRate { .. })
    ));

    let bad_repeat = GeneratorConfig {
        repeat_count: 0,
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        generate(0x20, 0x10, &bad_repeat),
        Err(EncodeError::InvalidRepeatCount { .. })
    ));

    let bad_duty = GeneratorConfig {
        duty_cycle: Some(1.0),
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        generate(0x20, 0x10, &bad_duty),
        Err(EncodeError::InvalidDutyCycle { .. })
    ));
}

#[test]
fn test_gap_segment_sample_count_uses_configured_gap() {
    let config = GeneratorConfig::default();
    assert_eq!(segment_sample_count(FRAME_GAP_US, &config), GUARD_SAMPLES);
}
