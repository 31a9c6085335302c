//! Character-level Markov text generation on top of [`List`].
//!
//! A [`Generator`] holds the source text and a *seed*: a window of `k`
//! characters. Each step collects every character that follows an occurrence
//! of the seed in the source, picks one uniformly at random, emits it, and
//! slides the seed forward by dropping its first character and appending the
//! emitted one.
//!
//! # Examples
//!
//! ```
//! use cursor_list::markov::{read_source, Generator};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let source = read_source("the cat sat on the mat".as_bytes()).unwrap();
//! let mut generator = Generator::new(source, 2, StdRng::seed_from_u64(7)).unwrap();
//!
//! let mut out = Vec::new();
//! generator.write_to(&mut out, 40).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().chars().count(), 40);
//! ```

use std::io::{self, Read, Write};

use rand::Rng;
use thiserror::Error;

use crate::{List, ListError};

/// Errors produced while generating text.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The seed must leave at least one character of the source to follow it.
    #[error("seed length {seed_len} must be shorter than the source text ({source_len} characters)")]
    SeedTooLong {
        /// The requested seed length
        seed_len: usize,
        /// The number of characters in the source text
        source_len: usize,
    },

    /// An index into the source or seed was out of range.
    #[error(transparent)]
    List(#[from] ListError),

    /// Reading the source or writing the output failed.
    #[error("text I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Read all of `reader` into a list of characters, one `add` per character at
/// the back of the list.
///
/// Invalid UTF-8 sequences are replaced with `U+FFFD`.
pub fn read_source<R: Read>(mut reader: R) -> io::Result<List<char>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8_lossy(&bytes);
    let mut source = List::with_capacity(text.len());
    for ch in text.chars() {
        source.push_back(ch);
    }
    Ok(source)
}

/// Generates text whose character statistics follow a source text.
pub struct Generator<R> {
    source: List<char>,
    seed: List<char>,
    k: usize,
    rng: R,
}

impl<R: Rng> Generator<R> {
    /// Create a generator with seeds of length `k`, starting from a random
    /// seed taken from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::SeedTooLong`] unless `k < source.size()`.
    pub fn new(source: List<char>, k: usize, rng: R) -> Result<Self, GenerateError> {
        if k >= source.size() {
            return Err(GenerateError::SeedTooLong {
                seed_len: k,
                source_len: source.size(),
            });
        }
        let mut generator = Self {
            source,
            seed: List::with_capacity(k),
            k,
            rng,
        };
        generator.reseed()?;
        Ok(generator)
    }

    /// The current seed.
    pub fn seed(&self) -> &List<char> {
        &self.seed
    }

    /// The source text.
    pub fn source(&self) -> &List<char> {
        &self.source
    }

    /// Replace the seed with the `k` characters at a random position of the
    /// source that has at least one character after it.
    fn reseed(&mut self) -> Result<(), GenerateError> {
        let start = self.rng.gen_range(0..self.source.size() - self.k);
        self.seed.clear();
        for i in 0..self.k {
            self.seed.add(self.source.get(start + i)?, i)?;
        }
        tracing::debug!(start, seed = %self.seed, "picked a new seed");
        Ok(())
    }

    /// Every character that immediately follows an occurrence of the seed in
    /// the source, in source order. Occurrences may overlap.
    ///
    /// With an empty seed, every character of the source is a candidate.
    pub fn candidates(&self) -> Result<List<char>, GenerateError> {
        let mut candidates = List::new();
        for start in 0..self.source.size() - self.k {
            let mut matched = 0;
            while matched < self.k && self.source.get(start + matched)? == self.seed.get(matched)? {
                matched += 1;
            }
            if matched == self.k {
                candidates.add(self.source.get(start + self.k)?, candidates.size())?;
            }
        }
        Ok(candidates)
    }

    /// Pick the next character and slide the seed over it.
    ///
    /// If the seed only occurs at the very end of the source, a new seed is
    /// picked first.
    pub fn next_char(&mut self) -> Result<char, GenerateError> {
        let mut candidates = self.candidates()?;
        while candidates.is_empty() {
            tracing::debug!(seed = %self.seed, "seed has no successor in the source");
            self.reseed()?;
            candidates = self.candidates()?;
        }
        let chosen = candidates.get(self.rng.gen_range(0..candidates.size()))?;
        if self.k > 0 {
            self.seed.remove_at(0)?;
            self.seed.add(chosen, self.k - 1)?;
        }
        Ok(chosen)
    }

    /// Generate `length` characters into `out`.
    pub fn write_to<W: Write>(&mut self, out: &mut W, length: usize) -> Result<(), GenerateError> {
        let mut buf = [0; 4];
        for _ in 0..length {
            let ch = self.next_char()?;
            out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{read_source, GenerateError, Generator};
    use crate::List;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;

    fn generator(text: &str, k: usize, seed: u64) -> Generator<StdRng> {
        let source = read_source(text.as_bytes()).unwrap();
        Generator::new(source, k, StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn read_source_appends_chars() {
        let source = read_source("héllo\n".as_bytes()).unwrap();
        assert_eq!(source.size(), 6);
        assert_eq!(source.to_string(), "<h, é, l, l, o, \n>");
        source.assert_consistent();
    }

    #[test]
    fn read_source_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"abc").unwrap();
        let source = read_source(std::fs::File::open(file.path()).unwrap()).unwrap();
        assert_eq!(source, List::from_iter("abc".chars()));
    }

    #[test]
    fn seed_must_be_shorter_than_source() {
        let source = read_source("abc".as_bytes()).unwrap();
        let err = Generator::new(source, 3, StdRng::seed_from_u64(1)).err();
        assert!(matches!(
            err,
            Some(GenerateError::SeedTooLong {
                seed_len: 3,
                source_len: 3
            })
        ));

        let empty = List::new();
        assert!(Generator::new(empty, 0, StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn seed_comes_from_source() {
        let text = "abcdefghij";
        for seed in 0..20 {
            let generator = generator(text, 3, seed);
            assert_eq!(generator.seed().size(), 3);
            let window: String = generator.seed().iter().collect();
            let at = text.find(&window).unwrap();
            assert!(at + 3 < text.len());
        }
    }

    #[test]
    fn candidates_follow_every_occurrence() {
        let mut generator = generator("abab_abac", 2, 3);
        generator.seed.clear();
        generator.seed.extend("ab".chars());
        let candidates: String = generator.candidates().unwrap().into_iter().collect();
        assert_eq!(candidates, "a_a");

        generator.seed.clear();
        generator.seed.extend("ac".chars());
        assert!(generator.candidates().unwrap().is_empty());
    }

    #[test]
    fn empty_seed_uses_every_char() {
        let mut generator = generator("aab", 0, 9);
        assert!(generator.seed().is_empty());
        assert_eq!(generator.candidates().unwrap().to_string(), "<a, a, b>");
        for _ in 0..20 {
            let ch = generator.next_char().unwrap();
            assert!(ch == 'a' || ch == 'b');
        }
    }

    #[test]
    fn seed_slides_over_output() {
        // the text wraps around once, so every seed has exactly one successor
        let text = "abcdefgabc";
        let mut generator = generator(text, 3, 11);
        for _ in 0..20 {
            let before: String = generator.seed().iter().collect();
            let ch = generator.next_char().unwrap();
            let after: String = generator.seed().iter().collect();
            let at = text.find(&before).unwrap();
            assert_eq!(Some(ch), text.chars().nth(at + 3));
            let expected: String = before.chars().skip(1).chain(Some(ch)).collect();
            assert_eq!(after, expected);
        }
    }

    #[test]
    fn reseeds_at_end_of_source() {
        // "yz" only occurs at the end, so it has no successor
        let mut generator = generator("wxyz", 2, 5);
        generator.seed.clear();
        generator.seed.extend("yz".chars());
        let ch = generator.next_char().unwrap();
        assert!("xyz".contains(ch));
        assert_eq!(generator.seed().size(), 2);
    }

    #[test]
    fn output_is_deterministic_for_a_seed() {
        let text = "it was the best of times, it was the worst of times";
        let mut first = Vec::new();
        generator(text, 3, 42).write_to(&mut first, 200).unwrap();
        let mut second = Vec::new();
        generator(text, 3, 42).write_to(&mut second, 200).unwrap();
        assert_eq!(first, second);

        let first = String::from_utf8(first).unwrap();
        assert_eq!(first.chars().count(), 200);
        assert!(first.chars().all(|ch| text.contains(ch)));
    }

    #[test]
    fn write_zero_length() {
        let mut out = Vec::new();
        generator("abc", 1, 0).write_to(&mut out, 0).unwrap();
        assert!(out.is_empty());
    }
}
