/*!
dictionary module

Holds the classified vocabulary behind a [`crate::SpellChecker`]:

- `special_tokens`: lines starting with `.`, `!`, `?` or `#`, split on the
  first space into key and value
- `contractions`: lines containing an apostrophe, mapped to themselves
- `plain_words`: everything else, in file order, duplicates kept

Classification precedence is apostrophe, then leading trigger character, then
plain word. A trigger line without a space is dropped silently.
*/

use std::collections::HashMap;

use log::{debug, error, trace};

use crate::errors::Result;
use crate::source::LineSource;

/// Leading characters that mark a special token line.
pub const SPECIAL_TRIGGERS: [char; 4] = ['.', '!', '?', '#'];

/// Category a dictionary line falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Contraction,
    SpecialToken,
    PlainWord,
}

/// Decide the category of a trimmed line.
pub fn classify(line: &str) -> Category {
    if line.contains('\'') {
        Category::Contraction
    } else if line.starts_with(SPECIAL_TRIGGERS) {
        Category::SpecialToken
    } else {
        Category::PlainWord
    }
}

/// Split a special token line on its first space into trimmed `(key, value)`.
///
/// Returns `None` when the line has no space.
pub fn split_special(line: &str) -> Option<(&str, &str)> {
    line.split_once(' ').map(|(key, value)| (key.trim(), value.trim()))
}

/// Classified dictionary contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    special_tokens: HashMap<String, String>,
    contractions: HashMap<String, String>,
    plain_words: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with the lines read from `source`.
    ///
    /// All collections are cleared first. Every non-empty trimmed line is
    /// classified and stored in order, and `source` is closed once reading
    /// stops. Returns the number of non-empty lines ingested.
    ///
    /// A read failure leaves the dictionary empty.
    pub fn load<S: LineSource>(&mut self, mut source: S) -> Result<usize> {
        self.clear();

        let mut ingested = 0usize;
        let outcome = loop {
            match source.next_line() {
                Ok(Some(line)) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        self.insert_or_overwrite(line);
                        ingested += 1;
                    }
                }
                Ok(None) => break Ok(ingested),
                Err(e) => break Err(e),
            }
        };
        source.close();

        match outcome {
            Ok(n) => {
                debug!(
                    "loaded {} lines: {} plain words, {} contractions, {} special tokens",
                    n,
                    self.plain_words.len(),
                    self.contractions.len(),
                    self.special_tokens.len()
                );
                Ok(n)
            }
            Err(e) => {
                error!("invalid dictionary source: {}", e);
                self.clear();
                Err(e.into())
            }
        }
    }

    /// Classify one trimmed line and store it.
    ///
    /// Duplicate special token or contraction keys overwrite the previous
    /// entry; duplicate plain words are appended.
    pub fn insert_or_overwrite(&mut self, line: &str) {
        match classify(line) {
            Category::Contraction => {
                self.contractions.insert(line.to_string(), line.to_string());
            }
            Category::SpecialToken => match split_special(line) {
                Some((key, value)) => {
                    self.special_tokens.insert(key.to_string(), value.to_string());
                }
                None => trace!("dropping special token without value: {:?}", line),
            },
            Category::PlainWord => self.plain_words.push(line.to_string()),
        }
    }

    pub fn clear(&mut self) {
        self.special_tokens.clear();
        self.contractions.clear();
        self.plain_words.clear();
    }

    /// Exact, case-sensitive special token key lookup.
    pub fn contains_special(&self, key: &str) -> bool {
        self.special_tokens.contains_key(key)
    }

    /// Exact, case-sensitive contraction lookup.
    pub fn contains_contraction(&self, key: &str) -> bool {
        self.contractions.contains_key(key)
    }

    /// Value stored for a special token key.
    pub fn special_value(&self, key: &str) -> Option<&str> {
        self.special_tokens.get(key).map(String::as_str)
    }

    /// Plain words in insertion order.
    pub fn plain_words(&self) -> &[String] {
        &self.plain_words
    }

    pub fn special_token_count(&self) -> usize {
        self.special_tokens.len()
    }

    pub fn contraction_count(&self) -> usize {
        self.contractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.special_tokens.is_empty()
            && self.contractions.is_empty()
            && self.plain_words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ReaderSource;
    use std::io;

    fn load_text(text: &str) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.load(ReaderSource::from_text(text)).unwrap();
        dict
    }

    #[test]
    fn test_classify_precedence() {
        assert_eq!(classify("don't"), Category::Contraction);
        assert_eq!(classify("#don't"), Category::Contraction);
        assert_eq!(classify("'tis"), Category::Contraction);
        assert_eq!(classify("#greeting hello"), Category::SpecialToken);
        assert_eq!(classify("."), Category::SpecialToken);
        assert_eq!(classify("!x y"), Category::SpecialToken);
        assert_eq!(classify("?x y"), Category::SpecialToken);
        assert_eq!(classify("cat"), Category::PlainWord);
        assert_eq!(classify("a.b"), Category::PlainWord);
    }

    #[test]
    fn test_split_special() {
        assert_eq!(split_special("#greeting hello there"), Some(("#greeting", "hello there")));
        assert_eq!(split_special("?ask  question mark"), Some(("?ask", "question mark")));
        assert_eq!(split_special("#alone"), None);
    }

    #[test]
    fn test_load_scenario() {
        let dict = load_text("cat\ndog\n#greeting hello there\ndon't\n");
        assert_eq!(dict.plain_words(), &["cat".to_string(), "dog".to_string()]);
        assert_eq!(dict.special_token_count(), 1);
        assert_eq!(dict.special_value("#greeting"), Some("hello there"));
        assert_eq!(dict.contraction_count(), 1);
        assert!(dict.contains_contraction("don't"));
    }

    #[test]
    fn test_trigger_without_space_is_dropped() {
        let dict = load_text("#\n!bang\n");
        assert!(dict.is_empty());
    }

    #[test]
    fn test_blank_lines_and_whitespace_are_ignored() {
        let mut dict = Dictionary::new();
        let n = dict.load(ReaderSource::from_text("  cat  \n\n   \n\tdog\n")).unwrap();
        assert_eq!(n, 2);
        assert_eq!(dict.plain_words(), &["cat".to_string(), "dog".to_string()]);
    }

    #[test]
    fn test_duplicates() {
        let dict = load_text("cat\ncat\n#k one\n#k two\ndon't\ndon't\n");
        assert_eq!(dict.plain_words().len(), 2);
        assert_eq!(dict.special_token_count(), 1);
        assert_eq!(dict.special_value("#k"), Some("two"));
        assert_eq!(dict.contraction_count(), 1);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let dict = load_text("Don't\n#Tag value\nCat\n");
        assert!(dict.contains_contraction("Don't"));
        assert!(!dict.contains_contraction("don't"));
        assert!(dict.contains_special("#Tag"));
        assert!(!dict.contains_special("#tag"));
        assert_eq!(dict.plain_words(), &["Cat".to_string()]);
    }

    #[test]
    fn test_reload_replaces_contents() {
        let mut dict = Dictionary::new();
        dict.load(ReaderSource::from_text("cat\n#a b\nisn't\n")).unwrap();
        let first = dict.clone();
        dict.load(ReaderSource::from_text("cat\n#a b\nisn't\n")).unwrap();
        assert_eq!(dict, first);

        dict.load(ReaderSource::from_text("dog\n")).unwrap();
        assert_eq!(dict.plain_words(), &["dog".to_string()]);
        assert!(!dict.contains_special("#a"));
        assert!(!dict.contains_contraction("isn't"));
    }

    struct FailingSource {
        lines: Vec<&'static str>,
        closed: usize,
    }

    impl LineSource for FailingSource {
        fn next_line(&mut self) -> io::Result<Option<String>> {
            if self.lines.is_empty() {
                return Err(io::Error::new(io::ErrorKind::Other, "device removed"));
            }
            Ok(Some(self.lines.remove(0).to_string()))
        }

        fn close(&mut self) {
            self.closed += 1;
        }
    }

    #[test]
    fn test_read_failure_clears_and_closes() {
        let mut dict = load_text("old\n");
        let mut src = FailingSource {
            lines: vec!["cat", "dog"],
            closed: 0,
        };
        assert!(dict.load(&mut src).is_err());
        assert!(dict.is_empty());
        assert_eq!(src.closed, 1);
    }

    #[test]
    fn test_source_closed_after_success() {
        let mut dict = Dictionary::new();
        let mut src = ReaderSource::from_text("cat\n");
        dict.load(&mut src).unwrap();
        assert!(src.is_closed());
    }
}
