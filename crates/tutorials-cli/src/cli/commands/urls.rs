//! `tutorials video-id | thumbnail | embed` – YouTube URL helpers.

use anyhow::{anyhow, Result};
use tutorials_core::youtube::{self, ThumbnailQuality};

pub fn run_video_id(url: &str) -> Result<()> {
    let id = youtube::extract_video_id(url).ok_or_else(|| anyhow!("no video id found in {}", url))?;
    println!("{}", id);
    Ok(())
}

pub fn run_thumbnail(video_id: &str, quality: ThumbnailQuality) {
    println!("{}", youtube::thumbnail_url(video_id, Some(quality)));
}

pub fn run_embed(video_id: &str) {
    println!("{}", youtube::embed_url(video_id));
}
