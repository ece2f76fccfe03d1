//! Integration test: tutorial documents on disk, validated through the
//! collection registry, with video URLs derived from the resulting records.

use std::fs;

use tempfile::tempdir;
use tutorials_core::{
    collection, embed_url, extract_video_id, parse_document, thumbnail_url, IssueKind,
    ThumbnailQuality, TutorialRecord,
};

const YAML_DOC: &str = "---
title: Building a CLI
date: 2024-03-09
description: Argument parsing and subcommands.
tags:
  - rust
  - cli
youtubeUrl: https://youtu.be/dQw4w9WgXcQ?si=share
---

# Building a CLI

Body text.
";

const TOML_DOC: &str = "+++
title = \"Building a CLI\"
date = 2024-03-09
description = \"Argument parsing and subcommands.\"
tags = [\"rust\", \"cli\"]
youtubeUrl = \"https://youtu.be/dQw4w9WgXcQ?si=share\"
+++

# Building a CLI
";

fn load(path: &std::path::Path) -> TutorialRecord {
    let text = fs::read_to_string(path).unwrap();
    let (raw, _body) = parse_document(&text).unwrap();
    let tutorials = collection("tutorials").expect("tutorials collection registered");
    let entry = tutorials.validate(&raw).unwrap();
    TutorialRecord::try_from(entry).unwrap()
}

#[test]
fn yaml_and_toml_documents_produce_same_record() {
    let dir = tempdir().unwrap();
    let yaml_path = dir.path().join("building-a-cli.md");
    let toml_path = dir.path().join("building-a-cli-toml.md");
    fs::write(&yaml_path, YAML_DOC).unwrap();
    fs::write(&toml_path, TOML_DOC).unwrap();

    let from_yaml = load(&yaml_path);
    let from_toml = load(&toml_path);
    assert_eq!(from_yaml, from_toml);
    assert_eq!(from_yaml.tags, vec!["rust", "cli"]);
    assert_eq!(from_yaml.date.to_string(), "2024-03-09");
}

#[test]
fn record_video_urls() {
    let (raw, body) = parse_document(YAML_DOC).unwrap();
    assert!(body.contains("Body text."));
    let rec = TutorialRecord::from_front_matter(&raw).unwrap();

    let id = rec.video_id().expect("short link has an id");
    assert_eq!(id.as_str(), "dQw4w9WgXcQ");
    assert_eq!(
        rec.thumbnail_url(Some(ThumbnailQuality::High)).as_deref(),
        Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
    );
    assert_eq!(rec.embed_url(), Some(embed_url("dQw4w9WgXcQ")));
}

#[test]
fn every_offending_field_is_reported() {
    let doc = "---\ndescription: 7\ntags: [ok, 1]\n---\n";
    let (raw, _) = parse_document(doc).unwrap();
    let err = TutorialRecord::from_front_matter(&raw).unwrap_err();
    assert_eq!(err.fields(), vec!["title", "date", "description", "tags"]);
    assert_eq!(err.issues()[0].kind, IssueKind::Missing);
    assert_eq!(err.issues()[3].path, "tags[1]");
}

#[test]
fn helper_scenarios() {
    let watch = extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=30s");
    assert_eq!(watch.as_ref().map(|v| v.as_str()), Some("dQw4w9WgXcQ"));

    let short = extract_video_id("https://youtu.be/dQw4w9WgXcQ");
    assert_eq!(short.as_ref().map(|v| v.as_str()), Some("dQw4w9WgXcQ"));

    assert!(extract_video_id("").is_none());
    assert!(extract_video_id("https://example.com/no-video-here").is_none());

    assert_eq!(
        thumbnail_url("dQw4w9WgXcQ", Some(ThumbnailQuality::High)),
        "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
    );
    assert_eq!(
        thumbnail_url("v1", None),
        thumbnail_url("v1", Some(ThumbnailQuality::Medium))
    );
    for id in ["a", "dQw4w9WgXcQ", "with-dash_and_underscore"] {
        assert_eq!(embed_url(id), format!("https://www.youtube.com/embed/{}", id));
    }
}
