//! tinyspell - small-footprint spell checking for constrained devices
//!
//! A dictionary is a newline-delimited word list. Each line is classified once
//! when it is loaded:
//!
//! - lines containing `'` are contractions
//! - lines starting with `.`, `!`, `?` or `#` are special tokens, split on the
//!   first space into key and value (lines without a space are dropped)
//! - everything else is a plain word
//!
//! `check` answers whether a word is known and `suggest` ranks plain words by
//! Levenshtein distance.
//!
//! Examples
//!
//! - Runtime loading (files, flash, any [`LineSource`]):
//!
//! ```ignore
//! use tinyspell::SpellChecker;
//!
//! let mut checker = SpellChecker::new();
//! checker.load_file("words.txt")?;
//! assert!(checker.check("Hello"));
//! let suggestions = checker.suggest("helo", 3);
//! ```
//!
//! - Compile-time embedding (no filesystem needed at runtime):
//!
//! ```ignore
//! use tinyspell::include_dictionary;
//!
//! // Returns an `EmbeddedSpellChecker` backed by PHF statics emitted by the macro.
//! let embedded = include_dictionary!("path/to/words.txt");
//! let suggestions = embedded.suggest("helo", 3);
//! ```

pub mod checker;
pub mod dictionary;
pub mod errors;
pub mod source;

/// Re-export commonly used types.
pub use checker::{
    levenshtein, normalize, EmbeddedSpellChecker, Lexicon, SpellChecker, Suggestion,
};
pub use dictionary::{classify, Category, Dictionary};
pub use errors::{Result, SpellError};
pub use source::{LineSource, ReaderSource};

/// Re-export the compile-time dictionary macro from the proc-macro crate.
///
/// The proc-macro crate is the workspace member `tinyspell-macros`. Re-exporting
/// it here lets consumers write:
///
///   use tinyspell::include_dictionary;
pub use tinyspell_macros::include_dictionary;
