use std::path::Path;

use tracing::{debug, info};
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio::WHISPER_SAMPLE_RATE;
use crate::config::{Config, LanguageHint};
use crate::error::{Error, Result};
use crate::types::Transcription;

/// Capability interface for a speech-to-text backend.
///
/// The library ships one implementation ([`WhisperEngine`]); anything that
/// can turn 16kHz mono samples into text can stand in for it without
/// touching the CLI contract.
pub trait SpeechEngine: Send {
    /// Transcribe samples, auto-detecting the language unless a hint forces one.
    fn transcribe(&self, samples: &[f32], hint: &LanguageHint) -> Result<Transcription>;
}

/// Speech-to-text engine backed by whisper.cpp via whisper-rs.
///
/// Loading builds the whisper context once; each `transcribe` call gets its
/// own inference state. Decoding is greedy at temperature zero, so repeated
/// runs over the same audio produce the same text.
pub struct WhisperEngine {
    ctx: WhisperContext,
    tier_name: String,
    n_threads: Option<u32>,
}

impl WhisperEngine {
    /// Load the checkpoint at `model_path` with the context settings from `config`.
    pub fn load(model_path: &Path, config: &Config) -> Result<Self> {
        info!(model = %model_path.display(), "loading whisper model");

        let mut ctx_params = WhisperContextParameters::new();
        ctx_params.use_gpu(config.gpu);
        ctx_params.gpu_device(config.gpu_device as i32);

        let ctx = WhisperContext::new_with_params(
            model_path
                .to_str()
                .ok_or_else(|| Error::Model("model path contains invalid UTF-8".into()))?,
            ctx_params,
        )?;

        Ok(Self {
            ctx,
            tier_name: config.tier.name().to_string(),
            n_threads: config.n_threads,
        })
    }

    /// Name of the tier this engine was loaded with.
    pub fn tier_name(&self) -> &str {
        &self.tier_name
    }
}

impl SpeechEngine for WhisperEngine {
    fn transcribe(&self, samples: &[f32], hint: &LanguageHint) -> Result<Transcription> {
        let mut state = self.ctx.create_state()?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 5 });

        match hint {
            LanguageHint::Auto => params.set_detect_language(true),
            LanguageHint::Code { code, .. } => params.set_language(Some(code)),
        }

        params.set_translate(false);
        params.set_temperature(0.0);

        if let Some(n) = self.n_threads {
            params.set_n_threads(n as i32);
        }

        // Disable stderr printing from whisper.cpp
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        info!(samples = samples.len(), "running transcription");
        state.full(params, samples)?;

        let num_segments = state.full_n_segments();
        debug!(num_segments, "transcription complete");

        let mut pieces = Vec::with_capacity(num_segments as usize);
        for i in 0..num_segments {
            let segment = state
                .get_segment(i)
                .ok_or_else(|| Error::Transcription(format!("segment {i} not found")))?;
            let text = segment
                .to_str_lossy()
                .map_err(|e| Error::Transcription(format!("segment text error: {e}")))?;
            pieces.push(text.trim().to_string());
        }
        let text = pieces.join(" ");

        let detected_lang_id = state.full_lang_id_from_state();
        let language = whisper_rs::get_lang_str(detected_lang_id)
            .unwrap_or("unknown")
            .to_string();

        Ok(Transcription {
            text,
            language,
            duration: samples.len() as f64 / WHISPER_SAMPLE_RATE as f64,
        })
    }
}
