//! `tutorials check <file>...` – validate front matter of content files.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tutorials_core::{collection, parse_document, Collection, TutorialRecord, ValidationError};

/// Validate every file; report each one and fail if any did not pass.
///
/// A bad file does not stop the remaining files from being checked.
pub fn run_check(collection_name: &str, paths: &[PathBuf], json: bool) -> Result<()> {
    let target = collection(collection_name)
        .with_context(|| format!("unknown collection: {}", collection_name))?;

    let mut failed = 0usize;
    for path in paths {
        match check_file(target, path) {
            Ok(record) => {
                if json {
                    println!("{}", serde_json::to_string(&record)?);
                } else {
                    println!("ok {}", path.display());
                }
            }
            Err(err) => {
                failed += 1;
                tracing::warn!("{} failed validation: {:#}", path.display(), err);
                eprint!("{}", format_failure(path, &err));
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} file(s) failed validation", failed, paths.len());
    }
    Ok(())
}

pub(crate) fn check_file(target: &Collection, path: &Path) -> Result<TutorialRecord> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let (raw, _body) = parse_document(&text)?;
    let entry = target.validate(&raw)?;
    Ok(TutorialRecord::try_from(entry)?)
}

/// One header line per file, then one indented line per schema issue.
pub(crate) fn format_failure(path: &Path, err: &anyhow::Error) -> String {
    match err.downcast_ref::<ValidationError>() {
        Some(invalid) => {
            let mut out = format!("error {}\n", path.display());
            for issue in invalid.issues() {
                out.push_str(&format!("  {}\n", issue));
            }
            out
        }
        None => format!("error {}: {:#}\n", path.display(), err),
    }
}
