//! Finding a usable file path inside a line of text.
//!
//! Lines such as `M  src/lib.rs` (git status) or `src/lib.rs:12:4: warning`
//! (compiler output) carry a path among other words. The extractor tries the
//! whitespace separated spans of the line, longest first, and keeps the first
//! one that exists on disk.

use std::path::{Path, PathBuf};

use log::debug;

/// Maps a raw line to a path it contains.
pub trait PathExtractor {
    /// Returns the path found in `raw`, or an empty string when there is none.
    fn extract(&self, raw: &str) -> String;
}

/// Checks candidate spans against the filesystem relative to `base`.
#[derive(Debug, Clone)]
pub struct FsPathExtractor {
    base: PathBuf,
}

impl FsPathExtractor {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Resolves relative paths against the current directory.
    pub fn current_dir() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    fn exists(&self, candidate: &str) -> bool {
        !candidate.is_empty() && self.base.join(Path::new(candidate)).exists()
    }
}

impl PathExtractor for FsPathExtractor {
    fn extract(&self, raw: &str) -> String {
        let words = word_spans(raw);

        for start in 0..words.len() {
            for end in (start..words.len()).rev() {
                let span = &raw[words[start].0..words[end].1];
                for candidate in [clean(span), strip_location(clean(span))] {
                    if self.exists(candidate) {
                        return candidate.to_string();
                    }
                }
            }
        }

        debug!("No path found in `{raw}`");
        String::new()
    }
}

/// Byte ranges of the whitespace separated words of `s`.
fn word_spans(s: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;

    for (i, c) in s.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(begin)) => {
                spans.push((begin, i));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(begin) = start {
        spans.push((begin, s.len()));
    }

    spans
}

/// Drops quotes and trailing punctuation around a span.
fn clean(span: &str) -> &str {
    span.trim_matches(|c: char| matches!(c, '"' | '\'' | '`'))
        .trim_end_matches([',', ';', ':'])
}

/// Drops a trailing `:line` or `:line:column`.
fn strip_location(span: &str) -> &str {
    let mut path = span;
    for _ in 0..2 {
        match path.rsplit_once(':') {
            Some((head, tail)) if !tail.is_empty() && tail.chars().all(|c| c.is_ascii_digit()) => {
                path = head;
            }
            _ => break,
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, FsPathExtractor) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src").join("main.rs"), "").unwrap();
        fs::write(dir.path().join("white space.txt"), "").unwrap();
        let extractor = FsPathExtractor::new(dir.path());
        (dir, extractor)
    }

    #[test]
    fn test_git_status_line() {
        let (_dir, extractor) = fixture();
        assert_eq!(extractor.extract("M package.json"), "package.json");
        assert_eq!(extractor.extract(" M src/main.rs"), "src/main.rs");
    }

    #[test]
    fn test_no_path_is_empty() {
        let (_dir, extractor) = fixture();
        assert_eq!(extractor.extract("?? foo"), "");
        assert_eq!(extractor.extract(""), "");
    }

    #[test]
    fn test_compiler_location() {
        let (_dir, extractor) = fixture();
        assert_eq!(
            extractor.extract("src/main.rs:12:4: warning: unused"),
            "src/main.rs"
        );
    }

    #[test]
    fn test_path_with_spaces_and_quotes() {
        let (_dir, extractor) = fixture();
        assert_eq!(
            extractor.extract("renamed: \"white space.txt\""),
            "white space.txt"
        );
    }

    #[test]
    fn test_word_spans() {
        assert_eq!(word_spans("  ab c "), [(2, 4), (5, 6)]);
        assert!(word_spans("   ").is_empty());
    }

    #[test]
    fn test_strip_location() {
        assert_eq!(strip_location("a.rs:1:2"), "a.rs");
        assert_eq!(strip_location("a.rs:1"), "a.rs");
        assert_eq!(strip_location("C:"), "C:");
        assert_eq!(strip_location("a.rs"), "a.rs");
    }
}
