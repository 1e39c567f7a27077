use async_trait::async_trait;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use super::{CaptionTrack, TranscriptLine};
use crate::{Result, TranscriptError};

/// Boundary to the external transcript provider.
///
/// Exactly two operations: enumerate the caption tracks of a video and fetch
/// the content of one track. The production implementation delegates to
/// yt-transcript-rs; tests substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Enumerate the caption tracks available for a video
    async fn list_tracks(&self, video_id: &str) -> Result<Vec<CaptionTrack>>;

    /// Fetch the caption content for one language code
    async fn fetch_track(&self, video_id: &str, language_code: &str)
        -> Result<Vec<TranscriptLine>>;
}

/// Transcript source backed by the yt-transcript-rs client
pub struct YouTubeSource {
    api: YouTubeTranscriptApi,
}

impl YouTubeSource {
    pub fn new() -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            TranscriptError::Retrieval(format!("failed to create transcript client: {e}"))
        })?;
        Ok(Self { api })
    }
}

#[async_trait]
impl TranscriptSource for YouTubeSource {
    async fn list_tracks(&self, video_id: &str) -> Result<Vec<CaptionTrack>> {
        tracing::debug!("listing caption tracks for video {}", video_id);

        let list = self
            .api
            .list_transcripts(video_id)
            .await
            .map_err(|e| classify_source_error(video_id, &e))?;

        let mut tracks = Vec::new();
        for transcript in list.transcripts() {
            tracks.push(CaptionTrack {
                language_code: transcript.language_code().to_string(),
                language: transcript.language().to_string(),
                is_generated: transcript.is_generated(),
            });
        }

        Ok(tracks)
    }

    async fn fetch_track(
        &self,
        video_id: &str,
        language_code: &str,
    ) -> Result<Vec<TranscriptLine>> {
        tracing::debug!(
            "fetching {} transcript for video {}",
            language_code,
            video_id
        );

        let fetched = self
            .api
            .fetch_transcript(video_id, &[language_code], false)
            .await
            .map_err(|e| classify_source_error(video_id, &e))?;

        let mut lines = Vec::new();
        for part in fetched.parts() {
            lines.push(TranscriptLine {
                text: part.text.clone(),
                start: part.start,
                duration: part.duration,
            });
        }

        Ok(lines)
    }
}

/// Map an opaque client error onto the crate's error kinds.
///
/// The client reports "captions disabled" and "no transcript found" through
/// its message text; everything else is a transport or access failure the
/// caller may want to retry.
fn classify_source_error(video_id: &str, err: &dyn std::fmt::Display) -> TranscriptError {
    let message = err.to_string();
    let lower = message.to_lowercase();

    if lower.contains("disabled") || lower.contains("no transcript") {
        TranscriptError::TranscriptUnavailable {
            video_id: video_id.to_string(),
            requested: Vec::new(),
        }
    } else {
        TranscriptError::Retrieval(message)
    }
}
