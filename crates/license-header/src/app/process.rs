//! Per-file header normalization.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use time::OffsetDateTime;

use crate::domain::header::{CommentStyle, HeaderBlock};
use crate::infra::config::LICENSE_TEXT;

/// How non-conforming files are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Rewrite files in place.
    Fix,
    /// Only report; never write.
    Validate,
}

/// Result of checking a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The maintained holder entry already carries the current year.
    UpToDate,
    /// The file was rewritten (fix mode).
    Updated,
    /// The file needs a rewrite (validate mode).
    Outdated,
}

/// The current calendar year as a four-digit string.
pub fn current_year() -> String {
    OffsetDateTime::now_utc().year().to_string()
}

/// Bring one file's copyright block up to date.
///
/// Scans the leading block and merges the maintained holder's entry for
/// `year`. An up-to-date file is left untouched in either mode; a stale one
/// is rewritten in fix mode and merely flagged in validate mode. I/O
/// failures propagate and abort the run.
pub fn process_file(
    path: &Path,
    style: CommentStyle,
    mode: Mode,
    year: &str,
    holder: &str,
) -> Result<Outcome> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let lines: Vec<&str> = contents.split_inclusive('\n').collect();

    let mut block = HeaderBlock::scan(&lines, style);
    if !block.ensure_holder(holder, year) {
        return Ok(Outcome::UpToDate);
    }

    match mode {
        Mode::Validate => Ok(Outcome::Outdated),
        Mode::Fix => {
            let rewritten = assemble(&block, style, &lines);
            fs::write(path, rewritten)
                .with_context(|| format!("failed to write {}", path.display()))?;
            Ok(Outcome::Updated)
        }
    }
}

/// Assemble the rewritten file: the rendered block, then either the original
/// body (when a block existed) or a fresh license notice followed by the
/// whole original content.
fn assemble(block: &HeaderBlock, style: CommentStyle, lines: &[&str]) -> String {
    let prefix = style.prefix();
    let mut out = block.header_lines(style);
    match block.body_start {
        Some(start) => out.extend(lines[start..].iter().map(|line| (*line).to_owned())),
        None => {
            out.push(format!("{prefix}\n"));
            for line in LICENSE_TEXT.lines() {
                if line.is_empty() {
                    out.push(format!("{prefix}\n"));
                } else {
                    out.push(format!("{prefix} {line}\n"));
                }
            }
            out.push("\n".to_owned());
            out.extend(lines.iter().map(|line| (*line).to_owned()));
        }
    }
    out.concat()
}
