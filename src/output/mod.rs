use anyhow::Result;
use std::path::Path;

use crate::transcript::Transcript;

pub mod formatters;

pub use formatters::*;

/// Save a formatted transcript to a file
pub async fn save_to_file(
    transcript: &Transcript,
    path: &Path,
    include_timestamps: bool,
) -> Result<()> {
    let content = format_transcript(transcript, include_timestamps);
    fs_err::write(path, content)?;
    Ok(())
}

/// Print a formatted transcript to stdout
pub fn print_to_console(transcript: &Transcript, include_timestamps: bool) {
    println!("{}", format_transcript(transcript, include_timestamps));
}
