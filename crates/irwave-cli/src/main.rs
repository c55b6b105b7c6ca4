//! irwave - NEC infrared remote signals as sound card waveforms
//!
//! This binary encodes NEC command words into WAV files whose playback
//! drives an IR emitter wired across a headphone jack.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use irwave_cli::commands;

/// irwave - NEC infrared signal generator
#[derive(Parser)]
#[command(name = "irwave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode an NEC command word into a playable WAV file
    Encode {
        /// Full 32-bit command word as 8 hex digits (e.g. 0x20DF10EF)
        #[arg(long, conflicts_with_all = ["address", "command"])]
        hex: Option<String>,

        /// Device address byte, decimal or 0x-prefixed hex
        #[arg(short, long, requires = "command")]
        address: Option<String>,

        /// Command byte, decimal or 0x-prefixed hex
        #[arg(short, long, requires = "address")]
        command: Option<String>,

        /// Output WAV path
        #[arg(short, long, default_value = "ir_signal.wav")]
        out: String,

        /// Path to a JSON generator config file
        #[arg(long)]
        config: Option<String>,

        /// Number of times the frame is transmitted
        #[arg(long)]
        repeats: Option<u32>,

        /// Carrier frequency in Hz
        #[arg(long)]
        carrier_hz: Option<f64>,

        /// Output sample rate in Hz
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Render a unipolar mono square carrier instead of stereo
        #[arg(long, conflicts_with = "mono_sine")]
        mono: bool,

        /// Render a rectified mono sine carrier instead of stereo
        #[arg(long)]
        mono_sine: bool,

        /// Carrier duty cycle, strictly between 0 and 1
        #[arg(long)]
        duty: Option<f64>,

        /// Peak amplitude, at most 1.0
        #[arg(long)]
        amplitude: Option<f64>,

        /// Gap between repeated frames in microseconds
        #[arg(long)]
        gap_us: Option<f64>,

        /// Stretch timings for playback chains that run fast
        #[arg(long)]
        compensate: bool,
    },

    /// Decode a command word and print its timing breakdown
    Inspect {
        /// Full 32-bit command word as 8 hex digits
        #[arg(long)]
        hex: String,

        /// Sample rate used for the rendered sample counts
        #[arg(long, default_value_t = 192_000)]
        sample_rate: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            hex,
            address,
            command,
            out,
            config,
            repeats,
            carrier_hz,
            sample_rate,
            mono,
            mono_sine,
            duty,
            amplitude,
            gap_us,
            compensate,
        } => commands::encode::run(
            hex.as_deref(),
            address.as_deref(),
            command.as_deref(),
            &out,
            config.as_deref(),
            repeats,
            carrier_hz,
            sample_rate,
            mono,
            mono_sine,
            duty,
            amplitude,
            gap_us,
            compensate,
        ),
        Commands::Inspect { hex, sample_rate } => commands::inspect::run(&hex, sample_rate),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
