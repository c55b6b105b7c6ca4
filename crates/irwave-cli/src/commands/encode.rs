//! Encode command implementation
//!
//! Renders an NEC command word into a WAV file ready for playback through
//! an IR emitter wired to a headphone jack.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use irwave_core::{
    generate_wav_from_word, CommandWord, GeneratorConfig, Modulation, PLAYBACK_COMPENSATION,
};

/// Run the encode command
///
/// # Arguments
/// * `hex` - Full 32-bit command word as 8 hex digits
/// * `address` - Device address byte, used with `command` when `hex` is absent
/// * `command` - Command byte, used with `address` when `hex` is absent
/// * `out` - Output WAV path
/// * `config_path` - Optional JSON generator config file
/// * Remaining arguments override individual config fields
///
/// # Returns
/// Exit code: 0 on success, 1 on error
#[allow(clippy::too_many_arguments)]
pub fn run(
    hex: Option<&str>,
    address: Option<&str>,
    command: Option<&str>,
    out: &str,
    config_path: Option<&str>,
    repeats: Option<u32>,
    carrier_hz: Option<f64>,
    sample_rate: Option<u32>,
    mono: bool,
    mono_sine: bool,
    duty: Option<f64>,
    amplitude: Option<f64>,
    gap_us: Option<f64>,
    compensate: bool,
) -> Result<ExitCode> {
    let mut config = load_config(config_path)?;

    if let Some(repeats) = repeats {
        config.repeat_count = repeats;
    }
    if let Some(carrier_hz) = carrier_hz {
        config.carrier_hz = carrier_hz;
    }
    if let Some(sample_rate) = sample_rate {
        config.sample_rate = sample_rate;
    }
    if let Some(duty) = duty {
        config.duty_cycle = Some(duty);
    }
    if let Some(amplitude) = amplitude {
        config.amplitude = amplitude;
    }
    if let Some(gap_us) = gap_us {
        config.frame_gap_us = gap_us;
    }
    if mono {
        config.modulation = Modulation::MonoSquare;
    }
    if mono_sine {
        config.modulation = Modulation::MonoSine;
    }
    if compensate {
        config.timing_compensation = PLAYBACK_COMPENSATION;
    }

    let word = resolve_word(hex, address, command)?;

    println!("{} {}", "Command word:".cyan().bold(), word);
    if !word.is_well_formed() {
        println!(
            "  {} address or command bytes are not complements; transmitting verbatim",
            "!".yellow()
        );
    }

    let result = generate_wav_from_word(word, &config).map_err(|e| {
        eprintln!("{} {}", "error:".red().bold(), e);
        anyhow::anyhow!("{}", e)
    })?;

    fs::write(out, &result.wav_data)
        .with_context(|| format!("failed to write output file: {}", out))?;

    println!(
        "\n{} {} ({} samples, {:.1} ms, {})",
        "SUCCESS".green().bold(),
        out,
        result.num_samples,
        result.duration_seconds() * 1_000.0,
        if result.is_stereo { "stereo" } else { "mono" },
    );
    println!("{} {}", "PCM hash:".dimmed(), result.pcm_hash);

    Ok(ExitCode::SUCCESS)
}

/// Loads the generator config from a JSON file, or returns the defaults.
fn load_config(config_path: Option<&str>) -> Result<GeneratorConfig> {
    match config_path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse config file: {}", path))
        }
        None => Ok(GeneratorConfig::default()),
    }
}

/// Resolves the command word from either a full hex word or an
/// address/command byte pair.
fn resolve_word(
    hex: Option<&str>,
    address: Option<&str>,
    command: Option<&str>,
) -> Result<CommandWord> {
    match (hex, address, command) {
        (Some(hex), None, None) => CommandWord::from_hex(hex).map_err(|e| {
            eprintln!("{} {}", "error:".red().bold(), e);
            anyhow::anyhow!("{}", e)
        }),
        (None, Some(address), Some(command)) => Ok(CommandWord::from_parts(
            parse_byte(address)?,
            parse_byte(command)?,
        )),
        _ => anyhow::bail!("pass either --hex or both --address and --command"),
    }
}

/// Parses a byte given as decimal or 0x-prefixed hex.
fn parse_byte(input: &str) -> Result<u8> {
    let trimmed = input.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(digits) => u8::from_str_radix(digits, 16),
        None => trimmed.parse(),
    };
    parsed.with_context(|| format!("invalid byte value: {}", input))
}
