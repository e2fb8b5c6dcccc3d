use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Target sample rate for whisper.cpp.
pub(crate) const WHISPER_SAMPLE_RATE: u32 = 16_000;

/// Load an audio file and return 16kHz mono f32 samples ready for whisper.
///
/// Uses ffmpeg to decode any audio format, downmix to mono, and resample to
/// 16kHz in one shot. Supports every format ffmpeg does (mp3, wav, ogg, opus,
/// webm, aac, flac, m4a, ...). The decoded PCM is passed straight to whisper
/// with no further processing.
pub fn load_audio(path: &Path) -> Result<Vec<f32>> {
    info!(path = %path.display(), "loading audio");

    if !path.exists() {
        return Err(Error::AudioNotFound {
            path: path.to_path_buf(),
        });
    }

    let samples = decode_with_ffmpeg(path)?;

    let duration = samples.len() as f64 / WHISPER_SAMPLE_RATE as f64;
    debug!(
        samples = samples.len(),
        duration_secs = format!("{duration:.1}"),
        "decoded audio"
    );

    Ok(samples)
}

/// Decode any audio file to 16kHz mono f32 via ffmpeg subprocess.
///
/// Output format is raw PCM signed 16-bit little-endian, converted to f32.
fn decode_with_ffmpeg(path: &Path) -> Result<Vec<f32>> {
    let output = Command::new("ffmpeg")
        .args([
            "-nostdin",
            "-threads",
            "0",
            "-i",
        ])
        .arg(path)
        .args([
            "-f",
            "s16le",
            "-ac",
            "1",
            "-acodec",
            "pcm_s16le",
            "-ar",
            &WHISPER_SAMPLE_RATE.to_string(),
            "-",
        ])
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::AudioDecode(
                    "ffmpeg not found — install with: apt install ffmpeg".into(),
                )
            } else {
                Error::AudioDecode(format!("failed to run ffmpeg: {e}"))
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::AudioDecode(format!("ffmpeg failed: {stderr}")));
    }

    if output.stdout.is_empty() {
        return Err(Error::AudioDecode("ffmpeg produced no output".into()));
    }

    Ok(s16le_to_f32(&output.stdout))
}

/// Convert s16le bytes to f32 samples, normalized to [-1.0, 1.0].
fn s16le_to_f32(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(2)
        .map(|chunk| {
            let sample = i16::from_le_bytes([chunk[0], chunk[1]]);
            sample as f32 / 32768.0
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
    }

    #[test]
    fn test_load_wav() {
        let path = fixtures_dir().join("sine_440hz_2s.wav");
        let samples = load_audio(&path).unwrap();
        // 2 seconds at 16kHz = 32000 samples (roughly)
        assert!(samples.len() > 30_000);
        assert!(samples.len() < 34_000);
    }

    #[test]
    fn test_load_stereo_downmix() {
        let path = fixtures_dir().join("stereo_44khz_2s.wav");
        let samples = load_audio(&path).unwrap();
        // Mono 16kHz after ffmpeg -ac 1 -ar 16000
        assert!(samples.len() > 30_000);
        assert!(samples.len() < 34_000);
    }

    #[test]
    fn test_samples_in_valid_range() {
        let path = fixtures_dir().join("sine_440hz_2s.wav");
        let samples = load_audio(&path).unwrap();
        for &s in &samples {
            assert!(s >= -1.0 && s <= 1.0, "sample {s} out of range");
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        let path = fixtures_dir().join("does_not_exist.wav");
        let result = load_audio(&path);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::AudioNotFound { .. }));
    }

    #[test]
    fn test_load_rejects_non_audio_file() {
        // ffmpeg should fail on a text file
        let tmp = std::env::temp_dir().join("voxtext_test_not_audio.txt");
        std::fs::write(&tmp, "this is not audio").unwrap();
        let result = load_audio(&tmp);
        assert!(result.is_err());
        std::fs::remove_file(&tmp).ok();
    }

    #[test]
    fn test_s16le_conversion() {
        let bytes = [
            0x00, 0x00, // 0
            0xff, 0x7f, // i16::MAX
            0x00, 0x80, // i16::MIN
        ];
        let samples = s16le_to_f32(&bytes);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], 0.0);
        assert!((samples[1] - (32767.0 / 32768.0)).abs() < 1e-6);
        assert_eq!(samples[2], -1.0);
    }

    #[test]
    fn test_s16le_ignores_trailing_byte() {
        let bytes = [0x00, 0x00, 0x01];
        let samples = s16le_to_f32(&bytes);
        assert_eq!(samples.len(), 1);
    }
}
