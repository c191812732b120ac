//! Word list loading utilities
//!
//! Loads tile phrases from files or the embedded constant. Loading from a
//! source never fails outright: an unreadable file yields an empty pool.

use super::DEFAULT_WORDS;
use crate::core::PICKS_NEEDED;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Candidate tile strings, in source order
///
/// Entries are trimmed and non-empty. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Build a pool from raw lines, trimming each and dropping blank ones
    ///
    /// # Examples
    /// ```
    /// use bingo_board::wordlists::WordPool;
    ///
    /// let pool = WordPool::from_lines(["  alpha ", "", "beta", "alpha"]);
    /// assert_eq!(pool.words(), ["alpha", "beta", "alpha"]);
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .filter_map(|line| {
                let trimmed = line.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect();

        Self { words }
    }

    /// Parse newline-separated text (`\n` or `\r\n`)
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the pool is too small to fill every non-free cell
    #[inline]
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.words.len() < PICKS_NEEDED
    }
}

/// Where the word pool comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    Embedded,
    /// A text file with one phrase per line
    File(PathBuf),
}

impl WordSource {
    /// Interpret a `--words` argument: `embedded` or a path to a file
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the pool from this source
    ///
    /// A missing or unreadable file is logged and produces an empty pool.
    #[must_use]
    pub fn load(&self) -> WordPool {
        let pool = match self {
            Self::Embedded => WordPool::from_lines(DEFAULT_WORDS),
            Self::File(path) => match load_from_file(path) {
                Ok(pool) => pool,
                Err(e) => {
                    error!(path = %path.display(), error = %e, "could not load word list");
                    WordPool::default()
                }
            },
        };

        if pool.is_short() {
            warn!(
                words = pool.len(),
                "fewer than {PICKS_NEEDED} words found; add more to the word list for variety"
            );
        } else {
            info!(words = pool.len(), source = ?self, "loaded word list");
        }

        pool
    }
}

/// Load a pool from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use bingo_board::wordlists::loader::load_from_file;
///
/// let pool = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", pool.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordPool> {
    let content = fs::read_to_string(path)?;
    Ok(WordPool::parse(&content))
}
