//! Copyright header parsing and rendering.

use std::collections::BTreeMap;
use std::path::Path;

/// Single-line comment style of a source file, determined by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `//` comments (Go sources).
    Slashes,
    /// `#` comments (Rego, Terraform, YAML).
    Hash,
}

impl CommentStyle {
    /// Comment prefix emitted at the start of every header line.
    pub fn prefix(&self) -> &'static str {
        match self {
            CommentStyle::Slashes => "//",
            CommentStyle::Hash => "#",
        }
    }

    /// Map a path to its comment style. Returns `None` for extensions the
    /// tool does not process.
    pub fn for_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str())? {
            "go" => Some(CommentStyle::Slashes),
            "rego" | "tf" | "yaml" | "yml" => Some(CommentStyle::Hash),
            _ => None,
        }
    }
}

/// Inclusive year range attributed to a copyright holder. Years are kept as
/// the original strings; `start <= end` is expected but never enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearRange {
    pub start: String,
    pub end: String,
}

impl YearRange {
    /// Parse the years token of a copyright line: `2021` or `2019-2021`.
    pub fn parse(token: &str) -> Self {
        match token.split_once('-') {
            Some((start, end)) => Self {
                start: start.to_owned(),
                end: end.to_owned(),
            },
            None => Self::single(token),
        }
    }

    pub fn single(year: &str) -> Self {
        Self {
            start: year.to_owned(),
            end: year.to_owned(),
        }
    }

    /// Render back to the single-year or `start-end` form.
    pub fn render(&self) -> String {
        if self.start == self.end {
            self.start.clone()
        } else {
            format!("{}-{}", self.start, self.end)
        }
    }
}

/// The contiguous run of copyright lines at the top of a file.
///
/// `body_start` is the index of the first line after the block, or `None`
/// when the file contains no copyright line at all (in which case a full
/// header including the license notice has to be prepended).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderBlock {
    entries: BTreeMap<String, YearRange>,
    pub body_start: Option<usize>,
}

impl HeaderBlock {
    /// Scan the leading lines of a file for copyright statements.
    ///
    /// A line counts as a copyright statement when, split on whitespace, it
    /// carries more than four tokens, the first token is exactly the comment
    /// prefix, and the second is `©`. Lines before the first statement are
    /// skipped; the first non-matching line after it ends the block, and
    /// later copyright-like lines stay ordinary content. Duplicate holders
    /// collapse, last one wins.
    pub fn scan(lines: &[&str], style: CommentStyle) -> Self {
        let mut block = Self::default();
        for (idx, line) in lines.iter().enumerate() {
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.len() > 4 && words[0] == style.prefix() && words[1] == "©" {
                block
                    .entries
                    .insert(words[3..].join(" "), YearRange::parse(words[2]));
            } else if !block.entries.is_empty() {
                block.body_start = Some(idx);
                break;
            }
        }
        block
    }

    /// Merge the maintained holder's entry for the given year.
    ///
    /// Returns `true` when the block changed: the holder was absent (a fresh
    /// single-year entry is inserted) or its end year was stale (bumped to
    /// `year`, start year preserved).
    pub fn ensure_holder(&mut self, holder: &str, year: &str) -> bool {
        match self.entries.get_mut(holder) {
            Some(range) if range.end == year => false,
            Some(range) => {
                range.end = year.to_owned();
                true
            }
            None => {
                self.entries.insert(holder.to_owned(), YearRange::single(year));
                true
            }
        }
    }

    /// Render the block as header lines, newline-terminated, holders sorted
    /// by descending end year. Ties keep the map's lexicographic holder order
    /// (the sort is stable).
    pub fn header_lines(&self, style: CommentStyle) -> Vec<String> {
        let mut entries: Vec<(&String, &YearRange)> = self.entries.iter().collect();
        entries.sort_by(|a, b| b.1.end.cmp(&a.1.end));
        entries
            .into_iter()
            .map(|(holder, years)| format!("{} © {} {}\n", style.prefix(), years.render(), holder))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    fn years(&self, holder: &str) -> Option<&YearRange> {
        self.entries.get(holder)
    }
}
