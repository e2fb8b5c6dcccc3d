use serde::{Deserialize, Serialize};

/// Result of one transcription run.
///
/// `text` is the full transcript with segment boundaries collapsed. The
/// detected language and audio duration ride along for library users; the
/// CLI only surfaces `text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcription {
    pub text: String,
    pub language: String,
    pub duration: f64,
}
