//! Core WAV writing and PCM quantization.

use std::io::{self, Write};

use super::format::{WavFormat, BITS_PER_SAMPLE};

/// Writes a complete WAV file to a writer.
///
/// The layout is the canonical 44-byte RIFF/WAVE header followed by the PCM
/// payload: a RIFF chunk sized `36 + data length`, a 16-byte PCM `fmt `
/// chunk, and the `data` chunk. All multi-byte fields are little-endian.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;

    writer.write_all(b"RIFF")?;
    writer.write_all(&(36 + data_size).to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // fmt chunk size
    writer.write_all(&1u16.to_le_bytes())?; // audio format 1 = integer PCM
    writer.write_all(&format.channels().to_le_bytes())?;
    writer.write_all(&format.sample_rate().to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&BITS_PER_SAMPLE.to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a complete WAV file into a fresh byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Converts mono f64 samples to little-endian 16-bit PCM bytes.
///
/// Samples are clamped to [-1.0, 1.0] before quantization.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&quantize(sample).to_le_bytes());
    }
    pcm
}

/// Converts separate stereo channels to interleaved little-endian 16-bit
/// PCM bytes, left sample first in each frame.
pub fn stereo_to_pcm16(left: &[f64], right: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(left.len().min(right.len()) * 4);
    for (&l, &r) in left.iter().zip(right.iter()) {
        pcm.extend_from_slice(&quantize(l).to_le_bytes());
        pcm.extend_from_slice(&quantize(r).to_le_bytes());
    }
    pcm
}

/// Quantizes one sample to a signed 16-bit value.
///
/// Negative values scale by 32768 and non-negative values by 32767, so the
/// full [-1.0, 1.0] input range maps onto [-32768, 32767] and both rails
/// are reachable. NaN input quantizes to zero.
fn quantize(sample: f64) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    if clamped < 0.0 {
        (clamped * 32_768.0).round() as i16
    } else {
        (clamped * 32_767.0).round() as i16
    }
}
