use crate::transcript::Transcript;

/// Render a transcript as plain text, one caption line per output line.
///
/// With `include_timestamps`, each line is prefixed with its bracketed start
/// time. Lines keep the chronological order delivered by the source.
pub fn format_transcript(transcript: &Transcript, include_timestamps: bool) -> String {
    let mut lines = Vec::with_capacity(transcript.lines.len());

    for line in &transcript.lines {
        let text = line.text.trim();
        if include_timestamps {
            lines.push(format!("[{}] {}", format_timestamp(line.start), text));
        } else {
            lines.push(text.to_string());
        }
    }

    lines.join("\n")
}

/// Format seconds as `MM:SS`, widening to `HH:MM:SS` past the hour.
/// Fractional seconds are truncated.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
