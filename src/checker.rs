/*!
checker module

Membership queries and ranked corrections over a classified dictionary:

- `normalize` lower-cases and trims query words
- `levenshtein` computes insert/delete/substitute edit distance over chars
- `Lexicon` provides `check`, `rank` and `suggest` for any vocabulary
- `SpellChecker` owns a reloadable [`Dictionary`]
- `EmbeddedSpellChecker` reads PHF statics emitted by `include_dictionary!`

Lookups scan the plain-word list linearly, which suits small on-device word
lists. Special token and contraction keys are matched exactly as stored, while
plain words match case-insensitively.
*/

use std::path::Path;

use log::error;

use crate::dictionary::Dictionary;
use crate::errors::Result;
use crate::source::{LineSource, ReaderSource};

/// A ranked correction candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub term: String,
    /// Edit distance from the normalized query to `term` as stored.
    pub distance: usize,
}

/// Lower-case and trim a query word.
pub fn normalize(word: &str) -> String {
    word.to_lowercase().trim().to_string()
}

/// Levenshtein distance between `a` and `b`, counted in chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    DistanceMatrix::default().distance(&a_chars, b)
}

/// Scratch table for the edit-distance DP, reused across candidates.
///
/// Each comparison still fills a full `(a + 1) x (b + 1)` table; only the
/// allocation is shared.
#[derive(Debug, Default)]
struct DistanceMatrix {
    cells: Vec<usize>,
    b_chars: Vec<char>,
}

impl DistanceMatrix {
    fn distance(&mut self, a: &[char], b: &str) -> usize {
        self.b_chars.clear();
        self.b_chars.extend(b.chars());
        let (alen, blen) = (a.len(), self.b_chars.len());

        if alen == 0 {
            return blen;
        }
        if blen == 0 {
            return alen;
        }

        let width = blen + 1;
        self.cells.clear();
        self.cells.resize((alen + 1) * width, 0);
        let dp = &mut self.cells;

        for i in 0..=alen {
            dp[i * width] = i;
        }
        for j in 0..=blen {
            dp[j] = j;
        }

        for i in 1..=alen {
            for j in 1..=blen {
                let cost = if a[i - 1] == self.b_chars[j - 1] { 0 } else { 1 };
                let deletion = dp[(i - 1) * width + j] + 1;
                let insertion = dp[i * width + j - 1] + 1;
                let substitution = dp[(i - 1) * width + j - 1] + cost;
                dp[i * width + j] = deletion.min(insertion).min(substitution);
            }
        }

        dp[alen * width + blen]
    }
}

/// Case-insensitive comparison of a stored word against a normalized query.
///
/// Both sides go through `str::to_lowercase` so context rules such as the
/// Greek final sigma agree.
fn matches_normalized(stored: &str, normalized: &str) -> bool {
    stored.to_lowercase() == normalized
}

/// A classified vocabulary that can answer spelling queries.
pub trait Lexicon {
    /// Exact special token key lookup.
    fn has_special(&self, key: &str) -> bool;

    /// Exact contraction lookup.
    fn has_contraction(&self, key: &str) -> bool;

    /// Plain words in insertion order; the only suggestion candidates.
    fn candidates(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Returns true if `word` is a known plain word (any case), contraction
    /// or special token key.
    fn check(&self, word: &str) -> bool {
        let clean = normalize(word);
        self.candidates().any(|w| matches_normalized(w, &clean))
            || self.has_contraction(&clean)
            || self.has_special(&clean)
    }

    /// Up to `max` plain words ordered by edit distance to `word`.
    ///
    /// Equal distances keep dictionary order. Distances are measured against
    /// each word exactly as stored.
    fn rank(&self, word: &str, max: usize) -> Vec<Suggestion> {
        if max == 0 {
            return Vec::new();
        }
        let query: Vec<char> = normalize(word).chars().collect();
        let mut matrix = DistanceMatrix::default();

        let mut results: Vec<Suggestion> = self
            .candidates()
            .map(|w| Suggestion {
                term: w.to_string(),
                distance: matrix.distance(&query, w),
            })
            .collect();

        // sort_by_key is stable
        results.sort_by_key(|s| s.distance);
        results.truncate(max);
        results
    }

    /// Terms of [`Lexicon::rank`].
    fn suggest(&self, word: &str, max: usize) -> Vec<String> {
        self.rank(word, max).into_iter().map(|s| s.term).collect()
    }
}

impl Lexicon for Dictionary {
    fn has_special(&self, key: &str) -> bool {
        self.contains_special(key)
    }

    fn has_contraction(&self, key: &str) -> bool {
        self.contains_contraction(key)
    }

    fn candidates(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.plain_words().iter().map(String::as_str))
    }
}

/// Spell checker over a dictionary loaded at runtime.
#[derive(Debug, Clone, Default)]
pub struct SpellChecker {
    dictionary: Dictionary,
}

impl SpellChecker {
    /// Create a checker with an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a checker from a line source.
    pub fn from_source<S: LineSource>(source: S) -> Result<Self> {
        let mut checker = Self::new();
        checker.load(source)?;
        Ok(checker)
    }

    /// Replace the dictionary with the lines of `source`.
    ///
    /// See [`Dictionary::load`]. On error the dictionary is left empty.
    pub fn load<S: LineSource>(&mut self, source: S) -> Result<usize> {
        self.dictionary.load(source)
    }

    /// Replace the dictionary with the contents of a newline-delimited file.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        match ReaderSource::open(path) {
            Ok(source) => self.load(source),
            Err(e) => {
                error!("{}", e);
                self.dictionary.clear();
                Err(e)
            }
        }
    }

    pub fn check(&self, word: &str) -> bool {
        self.dictionary.check(word)
    }

    pub fn suggest(&self, word: &str, max_suggestions: usize) -> Vec<String> {
        self.dictionary.suggest(word, max_suggestions)
    }

    pub fn rank(&self, word: &str, max_suggestions: usize) -> Vec<Suggestion> {
        self.dictionary.rank(word, max_suggestions)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

/// Spell checker over a dictionary embedded at compile time.
///
/// Produced by the `include_dictionary!` proc-macro, which classifies the
/// word list while compiling and emits:
/// - a special token map `::phf::Map<&'static str, &'static str>` (key -> value)
/// - a contraction map `::phf::Map<&'static str, &'static str>` (self-mapped)
/// - a static slice of plain words in file order
///
/// Nothing is parsed or allocated at startup, which suits devices without a
/// filesystem. The vocabulary cannot be reloaded.
pub struct EmbeddedSpellChecker {
    pub special_tokens: &'static ::phf::Map<&'static str, &'static str>,
    pub contractions: &'static ::phf::Map<&'static str, &'static str>,
    pub plain_words: &'static [&'static str],
}

impl EmbeddedSpellChecker {
    /// Construct from generated statics. Normally called by the macro expansion.
    pub fn from_phf(
        special_tokens: &'static ::phf::Map<&'static str, &'static str>,
        contractions: &'static ::phf::Map<&'static str, &'static str>,
        plain_words: &'static [&'static str],
    ) -> Self {
        Self {
            special_tokens,
            contractions,
            plain_words,
        }
    }

    pub fn check(&self, word: &str) -> bool {
        Lexicon::check(self, word)
    }

    pub fn suggest(&self, word: &str, max_suggestions: usize) -> Vec<String> {
        Lexicon::suggest(self, word, max_suggestions)
    }

    pub fn rank(&self, word: &str, max_suggestions: usize) -> Vec<Suggestion> {
        Lexicon::rank(self, word, max_suggestions)
    }

    /// Value stored for a special token key.
    pub fn special_value(&self, key: &str) -> Option<&'static str> {
        self.special_tokens.get(key).copied()
    }
}

impl Lexicon for EmbeddedSpellChecker {
    fn has_special(&self, key: &str) -> bool {
        self.special_tokens.contains_key(key)
    }

    fn has_contraction(&self, key: &str) -> bool {
        self.contractions.contains_key(key)
    }

    fn candidates(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.plain_words.iter().copied())
    }
}
