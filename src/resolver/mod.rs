use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::{Result, TranscriptError};

/// Length of every YouTube video identifier
pub const VIDEO_ID_LEN: usize = 11;

/// A validated 11-character YouTube video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Validate a candidate token and wrap it as a video id
    pub fn new(candidate: &str) -> Result<Self> {
        if is_valid_id(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(TranscriptError::InvalidUrl(candidate.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for VideoId {
    type Err = TranscriptError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Check a token against the fixed id alphabet (letters, digits, `-`, `_`)
fn is_valid_id(candidate: &str) -> bool {
    candidate.len() == VIDEO_ID_LEN
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// A recognized URL shape: a predicate plus an extractor, tried in order
struct UrlPattern {
    name: &'static str,
    matches: fn(&Url) -> bool,
    extract: fn(&Url) -> Option<String>,
}

/// Recognized URL shapes in precedence order. Once a shape matches, its
/// extraction result is final; later shapes are not consulted.
const PATTERNS: &[UrlPattern] = &[
    UrlPattern {
        name: "watch",
        matches: |url| is_youtube_host(url) && url.path() == "/watch",
        extract: |url| {
            url.query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned())
        },
    },
    UrlPattern {
        name: "short",
        matches: |url| url.host_str() == Some("youtu.be"),
        extract: |url| first_path_segment(url, None),
    },
    UrlPattern {
        name: "embed",
        matches: |url| is_youtube_host(url) && url.path().starts_with("/embed/"),
        extract: |url| first_path_segment(url, Some("embed")),
    },
    UrlPattern {
        name: "legacy-v",
        matches: |url| is_youtube_host(url) && url.path().starts_with("/v/"),
        extract: |url| first_path_segment(url, Some("v")),
    },
];

/// True for `youtube.com` with an optional `www.` or `m.` prefix
fn is_youtube_host(url: &Url) -> bool {
    url.host_str()
        .map(|host| {
            let host = host.trim_start_matches("www.").trim_start_matches("m.");
            host == "youtube.com"
        })
        .unwrap_or(false)
}

/// The path segment following `after`, or the first segment when `after` is None
fn first_path_segment(url: &Url, after: Option<&str>) -> Option<String> {
    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
    if let Some(marker) = after {
        segments.find(|s| *s == marker)?;
    }
    segments.next().map(|s| s.to_string())
}

/// Parse the input as a URL, tolerating a missing scheme for YouTube hosts
fn parse_url(input: &str) -> Option<Url> {
    if input.starts_with("http://") || input.starts_with("https://") {
        Url::parse(input).ok()
    } else if input.contains("youtube.com") || input.contains("youtu.be") {
        Url::parse(&format!("https://{input}")).ok()
    } else {
        None
    }
}

/// Extract a video id from a YouTube URL, or validate a bare id.
///
/// Accepts watch, youtu.be, embed and legacy `/v/` URLs as well as a plain
/// 11-character id. The scheme and any query parameters beyond `v` are
/// ignored. Fails with [`TranscriptError::InvalidUrl`] when nothing matches
/// or the extracted candidate is malformed.
pub fn extract_video_id(input: &str) -> Result<VideoId> {
    let input = input.trim();

    // A bare id needs no URL parsing at all
    if is_valid_id(input) {
        return Ok(VideoId(input.to_string()));
    }

    let url = parse_url(input).ok_or_else(|| TranscriptError::InvalidUrl(input.to_string()))?;

    for pattern in PATTERNS {
        if (pattern.matches)(&url) {
            tracing::debug!("input matched {} URL shape", pattern.name);
            return (pattern.extract)(&url)
                .filter(|candidate| is_valid_id(candidate))
                .map(VideoId)
                .ok_or_else(|| TranscriptError::InvalidUrl(input.to_string()));
        }
    }

    Err(TranscriptError::InvalidUrl(input.to_string()))
}
