//! YouTube Transcript CLI - A Rust tool for downloading YouTube video transcripts
//!
//! This library resolves a video id out of the various YouTube URL shapes and
//! fetches the video's transcript in a preferred language, falling back to
//! whatever caption track is actually available.

pub mod cli;
pub mod config;
pub mod output;
pub mod resolver;
pub mod transcript;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use resolver::{extract_video_id, VideoId};
pub use transcript::{CaptionTrack, Transcript, TranscriptFetcher, TranscriptLine};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, TranscriptError>;

/// Error kinds surfaced by the resolver and fetcher
#[derive(thiserror::Error, Debug)]
pub enum TranscriptError {
    /// Input matched none of the recognized URL shapes, or the extracted
    /// candidate failed video-id validation.
    #[error("invalid YouTube URL or video id: {0}")]
    InvalidUrl(String),

    /// The video exists but exposes no caption track in any usable language.
    #[error("no transcript available for video {video_id} (requested languages: {requested:?})")]
    TranscriptUnavailable {
        video_id: String,
        requested: Vec<String>,
    },

    /// The external transcript source failed (network, rate limit, access).
    /// Distinct from `TranscriptUnavailable` so callers can decide to retry.
    #[error("transcript retrieval failed: {0}")]
    Retrieval(String),
}

/// Download a transcript as ready-to-print text.
///
/// Convenience wrapper over [`TranscriptFetcher`] plus the output formatter,
/// for callers that just want the final string.
pub async fn download_transcript(
    id: &VideoId,
    languages: &[String],
    with_timestamps: bool,
) -> Result<String> {
    let fetcher = TranscriptFetcher::new()?;
    let transcript = fetcher.fetch(id, languages).await?;
    Ok(output::formatters::format_transcript(
        &transcript,
        with_timestamps,
    ))
}
