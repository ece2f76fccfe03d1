//! CLI for checking tutorial front matter and building YouTube URLs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tutorials_core::config;
use tutorials_core::ThumbnailQuality;

use commands::{run_check, run_completions, run_embed, run_man, run_thumbnail, run_video_id};

/// Top-level CLI for the tutorials content tools.
#[derive(Debug, Parser)]
#[command(name = "tutorials")]
#[command(about = "Validate tutorial front matter and build YouTube URLs", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/tutorials/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Validate the front matter of one or more content files.
    Check {
        /// Content files to check (Markdown with `---` YAML or `+++` TOML front matter).
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Collection to validate against (default from config).
        #[arg(long)]
        collection: Option<String>,
        /// Print each valid record as a JSON line instead of `ok <path>`.
        #[arg(long)]
        json: bool,
    },

    /// Print the video ID contained in a YouTube URL.
    VideoId {
        /// watch?v=, youtu.be/ or embed/ URL.
        url: String,
    },

    /// Print the thumbnail image URL for a video ID.
    Thumbnail {
        /// Video identifier.
        video_id: String,
        /// default, medium, high or maxres (default from config).
        #[arg(long, short)]
        quality: Option<ThumbnailQuality>,
    },

    /// Print the embeddable player URL for a video ID.
    Embed {
        /// Video identifier.
        video_id: String,
    },

    /// Generate shell completions on stdout.
    Completions {
        shell: Shell,
    },

    /// Render the man page on stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check {
                paths,
                collection,
                json,
            } => {
                let name = collection.as_deref().unwrap_or(&cfg.collection);
                run_check(name, &paths, json)?;
            }
            CliCommand::VideoId { url } => run_video_id(&url)?,
            CliCommand::Thumbnail { video_id, quality } => {
                run_thumbnail(&video_id, quality.unwrap_or(cfg.thumbnail_quality))
            }
            CliCommand::Embed { video_id } => run_embed(&video_id),
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
