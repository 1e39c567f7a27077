use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "yt-transcript",
    about = "Download transcripts from YouTube videos",
    version,
    long_about = "A CLI tool for downloading YouTube video transcripts. Accepts full watch URLs, youtu.be links, embed URLs or bare video ids, picks the best available caption language from an ordered preference list, and prints plain text with optional timestamps."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download the transcript for a video
    Download {
        /// YouTube URL or bare video id
        #[arg(value_name = "URL_OR_ID")]
        video: String,

        /// Output file path (prints to console if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include timestamps in the output
        #[arg(short, long)]
        timestamps: bool,

        /// Ordered language preference (e.g. -l en es fr)
        #[arg(short, long, value_name = "CODE", num_args = 1..)]
        languages: Vec<String>,
    },

    /// List the caption languages available for a video
    Languages {
        /// YouTube URL or bare video id
        #[arg(value_name = "URL_OR_ID")]
        video: String,
    },

    /// Show or initialize the configuration file
    Config {
        /// Show current configuration
        #[arg(short, long)]
        show: bool,
    },
}
