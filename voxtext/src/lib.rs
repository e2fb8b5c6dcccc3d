//! Speech-to-text library — audio file in, transcript out via whisper.cpp.
//!
//! **voxtext** handles the full pipeline: fetching model weights on first
//! use, decoding audio to 16 kHz mono (via ffmpeg), and transcription
//! (via whisper.cpp). The default configuration uses the medium tier with
//! automatic language detection.
//!
//! # Quick start
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> voxtext::Result<()> {
//! let transcription = voxtext::transcribe_file("voice-note.wav").await?;
//! println!("{}", transcription.text);
//! # Ok(())
//! # }
//! ```

pub mod audio;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod types;

pub use config::{Config, LanguageHint, Tier};
pub use engine::{SpeechEngine, WhisperEngine};
pub use error::{Error, Result};
pub use types::Transcription;

use std::path::Path;

/// Transcribe a local audio file with the default configuration
/// (medium tier, auto-detected language).
pub async fn transcribe_file(path: impl AsRef<Path>) -> Result<Transcription> {
    transcribe_file_with_config(path, &Config::default()).await
}

/// Transcribe a local audio file with a custom configuration.
pub async fn transcribe_file_with_config(
    path: impl AsRef<Path>,
    config: &Config,
) -> Result<Transcription> {
    let path = path.as_ref();

    // Ensure model weights are available
    let cache_dir = config.resolve_cache_dir();
    let model_path = model::ensure_tier(&config.tier, &cache_dir).await?;

    // Decode audio
    let samples = audio::load_audio(path)?;

    // Transcribe
    let engine = WhisperEngine::load(&model_path, config)?;
    engine.transcribe(&samples, &config.language)
}
