use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "voxtext", about = "Transcribe an audio file and print the text as JSON")]
struct Cli {
    /// Audio file to transcribe.
    audio_path: PathBuf,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("voxtext=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let transcription = match voxtext::transcribe_file(&cli.audio_path).await {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("{}", render_record(&transcription.text));
}

/// The one-line stdout record: a JSON object with a single `text` key.
fn render_record(text: &str) -> String {
    serde_json::json!({ "text": text }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_single_key_object() {
        let line = render_record("hello world");
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["text"], "hello world");
    }

    #[test]
    fn test_record_escapes_special_characters() {
        let line = render_record("she said \"hi\"\nthen left");
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["text"], "she said \"hi\"\nthen left");
        // One line on stdout regardless of transcript content
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_record_empty_text() {
        assert_eq!(render_record(""), r#"{"text":""}"#);
    }

    #[test]
    fn test_cli_requires_audio_path() {
        let result = Cli::try_parse_from(["voxtext"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_single_path() {
        let cli = Cli::try_parse_from(["voxtext", "voice-note.wav"]).unwrap();
        assert_eq!(cli.audio_path, PathBuf::from("voice-note.wav"));
    }

    #[test]
    fn test_cli_rejects_extra_arguments() {
        let result = Cli::try_parse_from(["voxtext", "a.wav", "b.wav"]);
        assert!(result.is_err());
    }
}
