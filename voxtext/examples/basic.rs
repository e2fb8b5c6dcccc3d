//! Transcribe a local audio file and print the text.
//!
//! Usage: cargo run --example basic -- path/to/audio.wav

#[tokio::main]
async fn main() -> voxtext::Result<()> {
    let path = std::env::args()
        .nth(1)
        .expect("usage: basic <audio-file>");

    let transcription = voxtext::transcribe_file(&path).await?;

    println!("{}", transcription.text);

    Ok(())
}
