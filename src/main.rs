use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yt_transcript_cli::cli::{Cli, Commands};
use yt_transcript_cli::config::Config;
use yt_transcript_cli::output;
use yt_transcript_cli::resolver;
use yt_transcript_cli::transcript::TranscriptFetcher;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout stays clean for output
    let default_directive = if cli.verbose {
        "yt_transcript_cli=debug"
    } else {
        "yt_transcript_cli=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load().await?;

    match cli.command {
        Commands::Download {
            video,
            output: output_path,
            timestamps,
            languages,
        } => {
            let video_id = resolver::extract_video_id(&video)?;
            tracing::info!("resolved video id: {}", video_id);

            let languages = config.resolve_languages(&languages);
            let include_timestamps = timestamps || config.include_timestamps;

            let fetcher = TranscriptFetcher::new()?;

            let spinner = if cli.quiet {
                None
            } else {
                let progress = ProgressBar::new_spinner();
                progress.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.green} [{elapsed_precise}] {msg}")
                        .unwrap(),
                );
                progress.set_message(format!("Fetching transcript for {video_id}..."));
                progress.enable_steady_tick(Duration::from_millis(100));
                Some(progress)
            };

            let result = fetcher.fetch(&video_id, &languages).await;
            if let Some(progress) = &spinner {
                progress.finish_and_clear();
            }
            let transcript = result?;

            match output_path {
                Some(path) => {
                    output::save_to_file(&transcript, &path, include_timestamps).await?;
                    println!("Transcript saved to: {}", path.display());
                }
                None => output::print_to_console(&transcript, include_timestamps),
            }
        }
        Commands::Languages { video } => {
            let video_id = resolver::extract_video_id(&video)?;

            let fetcher = TranscriptFetcher::new()?;
            let tracks = fetcher.list_tracks(&video_id).await?;

            println!("Available caption tracks for {}:", video_id);
            if tracks.is_empty() {
                println!("  (no captions available)");
            }
            for track in tracks {
                let origin = if track.is_generated {
                    style("auto-generated").dim()
                } else {
                    style("manual").green()
                };
                println!("  • {:<8} {} ({})", track.language_code, track.language, origin);
            }
        }
        Commands::Config { show } => {
            if show {
                config.display();
            } else {
                config.save().await?;
                println!("Config file: {}", Config::path()?.display());
                println!("Edit it to change default languages or timestamp output.");
            }
        }
    }

    Ok(())
}
