//! PCM payload extraction and hashing.

/// Extracts the PCM payload from a WAV file buffer.
///
/// Walks the RIFF chunk list until a `data` chunk is found, honoring the
/// word alignment of chunk boundaries. Returns `None` for anything that is
/// not a plausible RIFF/WAVE file or whose data chunk overruns the buffer.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 || &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let id = &wav_data[pos..pos + 4];
        let size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;
        let body = pos + 8;

        if id == b"data" {
            return wav_data.get(body..body + size);
        }

        // Chunks are word aligned; odd sizes are padded by one byte.
        pos = body + size + (size & 1);
    }

    None
}

/// Computes the BLAKE3 hash of a WAV file's PCM payload.
///
/// Returns the lowercase hex digest, or `None` if the buffer is not a
/// well-formed WAV file.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
