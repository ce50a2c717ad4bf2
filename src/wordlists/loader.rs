//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::WORD_LENGTH;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for word files that cannot be read
#[derive(Debug)]
pub struct LoadError {
    path: PathBuf,
    source: io::Error,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not load {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Normalise a raw entry into a playable word
///
/// Returns the uppercased word if it is exactly [`WORD_LENGTH`] ASCII letters.
#[must_use]
pub fn normalize(entry: &str) -> Option<String> {
    let trimmed = entry.trim();
    if trimmed.len() == WORD_LENGTH && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(trimmed.to_ascii_uppercase())
    } else {
        None
    }
}

/// Load words from a file, one per line
///
/// Entries that are not playable words are skipped.
///
/// # Errors
///
/// Returns a `LoadError` if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wrdle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(content.lines());
    if words.is_empty() {
        log::warn!("{} contains no usable words", path.display());
    }
    Ok(words)
}

/// Normalise lines of text into playable words, skipping the rest
pub fn words_from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    lines.into_iter().filter_map(normalize).collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use wrdle::wordlists::loader::words_from_slice;
/// use wrdle::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn normalize_uppercases_and_trims() {
        assert_eq!(normalize(" crane\r"), Some("CRANE".to_string()));
        assert_eq!(normalize("SLATE"), Some("SLATE".to_string()));
    }

    #[test]
    fn normalize_rejects_bad_entries() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("toolong"), None);
        assert_eq!(normalize("abc"), None);
        assert_eq!(normalize("cran3"), None);
        assert_eq!(normalize("crâne"), None);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);
        assert_eq!(words, vec!["CRANE", "SLATE"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("wrdle-loader-{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "crane\n\nslate\nnope").unwrap();
        drop(file);

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(words, vec!["CRANE", "SLATE"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let err = load_from_file("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().starts_with("Could not load"));
    }
}
