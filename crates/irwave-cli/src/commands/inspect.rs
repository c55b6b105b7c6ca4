//! Inspect command implementation
//!
//! Decodes a command word and prints its field breakdown and frame timing
//! without writing any audio.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use irwave_core::carrier::segment_sample_count;
use irwave_core::protocol::{encode_frame, total_duration_us};
use irwave_core::{CommandWord, GeneratorConfig};

/// Run the inspect command
///
/// # Arguments
/// * `hex` - Full 32-bit command word as 8 hex digits
/// * `sample_rate` - Rate used for the rendered sample counts
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(hex: &str, sample_rate: u32) -> Result<ExitCode> {
    let word = CommandWord::from_hex(hex).map_err(|e| {
        eprintln!("{} {}", "error:".red().bold(), e);
        anyhow::anyhow!("{}", e)
    })?;

    println!("{} {}", "Command word:".cyan().bold(), word);
    println!("{} 0x{:02X}", "Address:".cyan().bold(), word.address());
    println!(
        "{} 0x{:02X}",
        "Address inverted:".dimmed(),
        word.address_inverted()
    );
    println!("{} 0x{:02X}", "Command:".cyan().bold(), word.command());
    println!(
        "{} 0x{:02X}",
        "Command inverted:".dimmed(),
        word.command_inverted()
    );
    if word.is_well_formed() {
        println!("{} {}", "Complements:".dimmed(), "ok".green());
    } else {
        println!(
            "  {} address or command bytes are not complements; extended protocol word",
            "!".yellow()
        );
    }

    let segments = encode_frame(word);
    let pulse_count = segments.iter().filter(|s| s.is_pulse()).count();
    let pulse_us: f64 = segments
        .iter()
        .filter(|s| s.is_pulse())
        .map(|s| s.duration_us)
        .sum();
    let total_us = total_duration_us(&segments);

    println!(
        "\n{} {} segments ({} pulses, {} spaces)",
        "Frame:".cyan().bold(),
        segments.len(),
        pulse_count,
        segments.len() - pulse_count
    );
    println!(
        "{} {:.4} ms carrier on",
        "Pulse time:".dimmed(),
        pulse_us / 1_000.0
    );
    println!(
        "{} {:.4} ms carrier off",
        "Space time:".dimmed(),
        (total_us - pulse_us) / 1_000.0
    );
    println!(
        "{} {:.4} ms including guard gap",
        "Frame duration:".dimmed(),
        total_us / 1_000.0
    );

    let config = GeneratorConfig {
        sample_rate,
        ..GeneratorConfig::default()
    };
    config.validate().map_err(|e| {
        eprintln!("{} {}", "error:".red().bold(), e);
        anyhow::anyhow!("{}", e)
    })?;
    let num_samples: usize = segments
        .iter()
        .map(|segment| segment_sample_count(segment.duration_us, &config))
        .sum();

    println!(
        "\n{} {} samples per channel at {} Hz",
        "Rendered:".cyan().bold(),
        num_samples,
        sample_rate
    );

    Ok(ExitCode::SUCCESS)
}
