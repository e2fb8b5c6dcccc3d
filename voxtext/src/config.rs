use std::fmt;
use std::path::PathBuf;

use crate::error::Error;

/// Whisper model quality tier.
///
/// A tier names a pretrained whisper.cpp checkpoint trading inference speed
/// against accuracy. `Medium` is the default — the balance point this crate
/// was built around.
#[derive(Debug, Clone, Default)]
pub enum Tier {
    Tiny,
    TinyEn,
    Base,
    BaseEn,
    Small,
    SmallEn,
    #[default]
    Medium,
    MediumEn,
    LargeV2,
    LargeV3,
    LargeV3Turbo,
    /// User-provided .ggml file path.
    Custom(PathBuf),
}

impl Tier {
    /// Checkpoint filename as used by HuggingFace / whisper.cpp.
    pub fn filename(&self) -> String {
        match self {
            Tier::Tiny => "ggml-tiny.bin".into(),
            Tier::TinyEn => "ggml-tiny.en.bin".into(),
            Tier::Base => "ggml-base.bin".into(),
            Tier::BaseEn => "ggml-base.en.bin".into(),
            Tier::Small => "ggml-small.bin".into(),
            Tier::SmallEn => "ggml-small.en.bin".into(),
            Tier::Medium => "ggml-medium.bin".into(),
            Tier::MediumEn => "ggml-medium.en.bin".into(),
            Tier::LargeV2 => "ggml-large-v2.bin".into(),
            Tier::LargeV3 => "ggml-large-v3.bin".into(),
            Tier::LargeV3Turbo => "ggml-large-v3-turbo.bin".into(),
            Tier::Custom(path) => path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_else(|| "custom-model".into()),
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        match self {
            Tier::Tiny => "tiny",
            Tier::TinyEn => "tiny.en",
            Tier::Base => "base",
            Tier::BaseEn => "base.en",
            Tier::Small => "small",
            Tier::SmallEn => "small.en",
            Tier::Medium => "medium",
            Tier::MediumEn => "medium.en",
            Tier::LargeV2 => "large-v2",
            Tier::LargeV3 => "large-v3",
            Tier::LargeV3Turbo => "large-v3-turbo",
            Tier::Custom(_) => "custom",
        }
    }

    /// Parse a tier name (e.g. "medium", "large-v3").
    pub fn parse_name(s: &str) -> Option<Self> {
        match s {
            "tiny" => Some(Tier::Tiny),
            "tiny.en" => Some(Tier::TinyEn),
            "base" => Some(Tier::Base),
            "base.en" => Some(Tier::BaseEn),
            "small" => Some(Tier::Small),
            "small.en" => Some(Tier::SmallEn),
            "medium" => Some(Tier::Medium),
            "medium.en" => Some(Tier::MediumEn),
            "large-v2" => Some(Tier::LargeV2),
            "large-v3" => Some(Tier::LargeV3),
            "large-v3-turbo" => Some(Tier::LargeV3Turbo),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Optional source-language hint for the engine.
///
/// `Auto` passes no forced language and lets whisper detect it from the
/// audio. A concrete hint is validated against whisper.cpp's language table
/// at construction, so an invalid code fails before any model is loaded.
#[derive(Debug, Clone, Default)]
pub enum LanguageHint {
    /// Auto-detect language from audio.
    #[default]
    Auto,
    /// A validated language code (e.g. "en", "de", "ja").
    Code {
        /// Short code as whisper expects it.
        code: String,
        /// Whisper internal language ID.
        id: i32,
    },
}

impl LanguageHint {
    /// Create a hint from a code or full name ("en", "german", ...).
    ///
    /// Returns an error if whisper does not know the language.
    pub fn new(lang: &str) -> Result<Self, Error> {
        let lower = lang.to_lowercase();
        if lower == "auto" {
            return Ok(LanguageHint::Auto);
        }

        match whisper_rs::get_lang_id(&lower) {
            Some(id) => {
                // Normalize full names to the short code
                let code = whisper_rs::get_lang_str(id)
                    .unwrap_or(&lower)
                    .to_string();
                Ok(LanguageHint::Code { code, id })
            }
            None => Err(Error::UnsupportedLanguage(lang.to_string())),
        }
    }

    /// Short language code, or None when auto-detecting.
    pub fn code(&self) -> Option<&str> {
        match self {
            LanguageHint::Auto => None,
            LanguageHint::Code { code, .. } => Some(code),
        }
    }
}

impl fmt::Display for LanguageHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageHint::Auto => write!(f, "auto"),
            LanguageHint::Code { code, .. } => write!(f, "{code}"),
        }
    }
}

/// Transcription configuration.
///
/// Defaults match the CLI contract: medium tier, no language hint.
#[derive(Debug, Clone)]
pub struct Config {
    pub tier: Tier,
    pub language: LanguageHint,
    pub gpu: bool,
    pub gpu_device: u32,
    pub n_threads: Option<u32>,
    pub cache_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tier: Tier::default(),
            language: LanguageHint::default(),
            gpu: true,
            gpu_device: 0,
            n_threads: None,
            cache_dir: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    /// Set the language hint. Validates against whisper's language table.
    pub fn language(mut self, lang: &str) -> Result<Self, Error> {
        self.language = LanguageHint::new(lang)?;
        Ok(self)
    }

    pub fn gpu(mut self, enabled: bool) -> Self {
        self.gpu = enabled;
        self
    }

    pub fn gpu_device(mut self, device: u32) -> Self {
        self.gpu_device = device;
        self
    }

    pub fn n_threads(mut self, n: u32) -> Self {
        self.n_threads = Some(n);
        self
    }

    pub fn cache_dir(mut self, dir: PathBuf) -> Self {
        self.cache_dir = Some(dir);
        self
    }

    /// Resolve the model cache directory, defaulting to ~/.cache/voxtext/models.
    pub fn resolve_cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from(".cache"))
                .join("voxtext")
                .join("models")
        })
    }
}
