use serde::{Deserialize, Serialize};

pub mod source;

pub use source::{TranscriptSource, YouTubeSource};

use crate::resolver::VideoId;
use crate::{Result, TranscriptError};

/// Language assumed when the caller gives no preference
pub const DEFAULT_LANGUAGE: &str = "en";

/// One caption track as advertised by the transcript source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionTrack {
    /// ISO-style language code (e.g. `en`, `es`)
    pub language_code: String,

    /// Human-readable language name
    pub language: String,

    /// Whether the track was auto-generated by the platform
    pub is_generated: bool,
}

/// A single caption line with its timing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptLine {
    /// Caption text
    pub text: String,

    /// Start time in seconds
    pub start: f64,

    /// Duration in seconds
    pub duration: f64,
}

/// A fetched transcript in source order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Video the transcript belongs to
    pub video_id: String,

    /// Human-readable language name of the chosen track
    pub language: String,

    /// Language code of the chosen track
    pub language_code: String,

    /// Whether the chosen track was auto-generated
    pub is_generated: bool,

    /// Caption lines, chronological as delivered by the source
    pub lines: Vec<TranscriptLine>,
}

/// Pick the best caption track for an ordered preference list.
///
/// Walks the preferences in order; a manually created track beats an
/// auto-generated one with the same code. When nothing matches, falls back
/// to the generated English track if present, else the first listed track.
/// Returns `None` only when the track list is empty.
fn select_track<'a>(tracks: &'a [CaptionTrack], preferences: &[String]) -> Option<&'a CaptionTrack> {
    for preference in preferences {
        let manual = tracks
            .iter()
            .find(|t| !t.is_generated && t.language_code == *preference);
        if manual.is_some() {
            return manual;
        }
        if let Some(track) = tracks.iter().find(|t| t.language_code == *preference) {
            return Some(track);
        }
    }

    tracks
        .iter()
        .find(|t| t.is_generated && t.language_code == DEFAULT_LANGUAGE)
        .or_else(|| tracks.first())
}

/// Fetches transcripts through a [`TranscriptSource`]
pub struct TranscriptFetcher {
    source: Box<dyn TranscriptSource>,
}

impl TranscriptFetcher {
    /// Create a fetcher backed by the YouTube transcript source
    pub fn new() -> Result<Self> {
        Ok(Self {
            source: Box::new(YouTubeSource::new()?),
        })
    }

    /// Create a fetcher over a custom source
    pub fn with_source(source: Box<dyn TranscriptSource>) -> Self {
        Self { source }
    }

    /// List the caption tracks available for a video
    pub async fn list_tracks(&self, id: &VideoId) -> Result<Vec<CaptionTrack>> {
        self.source.list_tracks(id.as_str()).await
    }

    /// Fetch a transcript in the best available language.
    ///
    /// `languages` is an ordered preference list; empty means `["en"]`.
    /// One lookup for the available tracks, one fetch for the chosen one,
    /// no retries.
    pub async fn fetch(&self, id: &VideoId, languages: &[String]) -> Result<Transcript> {
        let tracks = self.source.list_tracks(id.as_str()).await?;
        tracing::debug!(
            "video {} has {} caption track(s) available",
            id,
            tracks.len()
        );

        let requested: Vec<String> = if languages.is_empty() {
            vec![DEFAULT_LANGUAGE.to_string()]
        } else {
            languages.to_vec()
        };

        let track = select_track(&tracks, &requested).ok_or_else(|| {
            TranscriptError::TranscriptUnavailable {
                video_id: id.to_string(),
                requested: requested.clone(),
            }
        })?;

        tracing::info!(
            "selected {} transcript ({}) for video {}",
            track.language_code,
            if track.is_generated {
                "auto-generated"
            } else {
                "manual"
            },
            id
        );

        let lines = self
            .source
            .fetch_track(id.as_str(), &track.language_code)
            .await?;

        Ok(Transcript {
            video_id: id.to_string(),
            language: track.language.clone(),
            language_code: track.language_code.clone(),
            is_generated: track.is_generated,
            lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::source::MockTranscriptSource;
    use super::*;
    use crate::output::formatters::format_transcript;

    fn track(code: &str, language: &str, generated: bool) -> CaptionTrack {
        CaptionTrack {
            language_code: code.to_string(),
            language: language.to_string(),
            is_generated: generated,
        }
    }

    fn line(text: &str, start: f64) -> TranscriptLine {
        TranscriptLine {
            text: text.to_string(),
            start,
            duration: 2.0,
        }
    }

    fn prefs(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_select_first_requested_language_present() {
        let tracks = vec![track("es", "Spanish", false), track("de", "German", false)];
        let chosen = select_track(&tracks, &prefs(&["en", "es"])).unwrap();
        assert_eq!(chosen.language_code, "es");
    }

    #[test]
    fn test_select_prefers_manual_over_generated() {
        let tracks = vec![
            track("en", "English (auto-generated)", true),
            track("en", "English", false),
        ];
        let chosen = select_track(&tracks, &prefs(&["en"])).unwrap();
        assert!(!chosen.is_generated);
    }

    #[test]
    fn test_select_falls_back_to_generated_english() {
        let tracks = vec![
            track("de", "German", false),
            track("en", "English (auto-generated)", true),
        ];
        let chosen = select_track(&tracks, &prefs(&["fr"])).unwrap();
        assert_eq!(chosen.language_code, "en");
        assert!(chosen.is_generated);
    }

    #[test]
    fn test_select_falls_back_to_first_track() {
        let tracks = vec![track("de", "German", false), track("ja", "Japanese", true)];
        let chosen = select_track(&tracks, &prefs(&["fr"])).unwrap();
        assert_eq!(chosen.language_code, "de");
    }

    #[test]
    fn test_select_empty_track_list() {
        assert!(select_track(&[], &prefs(&["en"])).is_none());
    }

    #[tokio::test]
    async fn test_fetch_applies_language_fallback() {
        let mut source = MockTranscriptSource::new();
        source.expect_list_tracks().returning(|_| {
            Ok(vec![track("es", "Spanish", false), track("de", "German", false)])
        });
        source
            .expect_fetch_track()
            .withf(|id, lang| id == "dQw4w9WgXcQ" && lang == "es")
            .returning(|_, _| Ok(vec![line("Hola", 0.0), line("Mundo", 1.0)]));

        let fetcher = TranscriptFetcher::with_source(Box::new(source));
        let id: VideoId = "dQw4w9WgXcQ".parse().unwrap();
        let transcript = fetcher.fetch(&id, &prefs(&["en", "es"])).await.unwrap();

        assert_eq!(transcript.language_code, "es");
        assert_eq!(transcript.lines.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_empty_preferences_means_english() {
        let mut source = MockTranscriptSource::new();
        source.expect_list_tracks().returning(|_| {
            Ok(vec![
                track("de", "German", false),
                track("en", "English (auto-generated)", true),
            ])
        });
        source
            .expect_fetch_track()
            .withf(|_, lang| lang == "en")
            .returning(|_, _| Ok(vec![line("Hello", 0.0)]));

        let fetcher = TranscriptFetcher::with_source(Box::new(source));
        let id: VideoId = "dQw4w9WgXcQ".parse().unwrap();
        let transcript = fetcher.fetch(&id, &[]).await.unwrap();

        assert_eq!(transcript.language_code, "en");
    }

    #[tokio::test]
    async fn test_fetch_no_captions_is_unavailable_not_retrieval() {
        let mut source = MockTranscriptSource::new();
        source.expect_list_tracks().returning(|_| Ok(Vec::new()));

        let fetcher = TranscriptFetcher::with_source(Box::new(source));
        let id: VideoId = "dQw4w9WgXcQ".parse().unwrap();
        let err = fetcher.fetch(&id, &prefs(&["en"])).await.unwrap_err();

        assert!(matches!(
            err,
            TranscriptError::TranscriptUnavailable { .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_source_failure_is_retrieval() {
        let mut source = MockTranscriptSource::new();
        source
            .expect_list_tracks()
            .returning(|_| Err(TranscriptError::Retrieval("connection timed out".to_string())));

        let fetcher = TranscriptFetcher::with_source(Box::new(source));
        let id: VideoId = "dQw4w9WgXcQ".parse().unwrap();
        let err = fetcher.fetch(&id, &prefs(&["en"])).await.unwrap_err();

        assert!(matches!(err, TranscriptError::Retrieval(_)));
    }

    #[tokio::test]
    async fn test_fetch_preserves_chronological_order() {
        let mut source = MockTranscriptSource::new();
        source
            .expect_list_tracks()
            .returning(|_| Ok(vec![track("en", "English", false)]));
        source.expect_fetch_track().returning(|_, _| {
            Ok(vec![
                line("first", 0.0),
                line("second", 12.5),
                line("third", 47.0),
            ])
        });

        let fetcher = TranscriptFetcher::with_source(Box::new(source));
        let id: VideoId = "dQw4w9WgXcQ".parse().unwrap();
        let transcript = fetcher.fetch(&id, &[]).await.unwrap();

        let starts: Vec<f64> = transcript.lines.iter().map(|l| l.start).collect();
        assert_eq!(starts, vec![0.0, 12.5, 47.0]);
        assert!(starts.iter().all(|s| *s >= 0.0));
    }

    #[tokio::test]
    async fn test_fetch_is_idempotent() {
        let mut source = MockTranscriptSource::new();
        source
            .expect_list_tracks()
            .times(2)
            .returning(|_| Ok(vec![track("en", "English", false)]));
        source
            .expect_fetch_track()
            .times(2)
            .returning(|_, _| Ok(vec![line("Hello", 0.0), line("World", 2.0)]));

        let fetcher = TranscriptFetcher::with_source(Box::new(source));
        let id: VideoId = "dQw4w9WgXcQ".parse().unwrap();

        let first = fetcher.fetch(&id, &[]).await.unwrap();
        let second = fetcher.fetch(&id, &[]).await.unwrap();

        assert_eq!(
            format_transcript(&first, true),
            format_transcript(&second, true)
        );
    }
}
