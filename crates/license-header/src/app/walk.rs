//! Directory traversal and per-file dispatch.

use std::path::Path;

use anyhow::Result;
use ignore::WalkBuilder;

use crate::app::process::{Mode, Outcome, process_file};
use crate::domain::header::CommentStyle;
use crate::infra::config::Config;

/// Outcome counts accumulated over one or more tree walks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub up_to_date: usize,
    pub updated: usize,
    pub outdated: usize,
}

impl Summary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::UpToDate => self.up_to_date += 1,
            Outcome::Updated => self.updated += 1,
            Outcome::Outdated => self.outdated += 1,
        }
    }

    pub fn merge(&mut self, other: Summary) {
        self.up_to_date += other.up_to_date;
        self.updated += other.updated;
        self.outdated += other.outdated;
    }
}

/// Walk one root directory and process every eligible file.
///
/// Hidden files are included and no gitignore semantics apply; the walk is
/// the plain file tree in sorted order. Files whose path starts with a
/// configured ignore prefix or whose extension has no comment style are
/// skipped. A missing root is not an error and contributes nothing.
pub fn walk_tree(root: &Path, config: &Config, mode: Mode, year: &str) -> Result<Summary> {
    let mut summary = Summary::default();
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "root directory absent, skipping");
        return Ok(summary);
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    for entry in builder.build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|kind| kind.is_file()) {
            continue;
        }
        let path = entry.path();
        if is_ignored(path, &config.ignore) {
            tracing::debug!(path = %path.display(), "ignored by prefix");
            continue;
        }
        let Some(style) = CommentStyle::for_path(path) else {
            tracing::debug!(path = %path.display(), "extension not handled");
            continue;
        };

        let outcome = process_file(path, style, mode, year, &config.holder)?;
        report(path, mode, outcome);
        summary.record(outcome);
    }

    Ok(summary)
}

fn is_ignored(path: &Path, prefixes: &[String]) -> bool {
    let path = path.to_string_lossy();
    prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
}

fn report(path: &Path, mode: Mode, outcome: Outcome) {
    match (mode, outcome) {
        (Mode::Validate, Outcome::Outdated) => {
            eprintln!("{}: missing or not updated license found!", path.display());
        }
        (Mode::Fix, Outcome::UpToDate) => {
            eprintln!("{}: up to date, skipping", path.display());
        }
        (Mode::Fix, Outcome::Updated) => {
            eprintln!("{}: updated", path.display());
        }
        _ => {}
    }
}
