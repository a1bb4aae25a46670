use tinyspell::{include_dictionary, ReaderSource, SpellChecker};

#[test]
fn test_include_macro_classification() {
    let embedded = include_dictionary!("tests/data/words.txt");

    assert_eq!(embedded.plain_words.len(), 13);
    assert_eq!(embedded.plain_words[0], "hello");
    assert_eq!(embedded.plain_words[12], "hello");
    assert!(embedded.plain_words.contains(&"Paris"));

    assert_eq!(embedded.special_tokens.len(), 5);
    assert_eq!(embedded.special_value("#Tag"), Some("Upper Value"));
    assert_eq!(embedded.special_value("#greeting"), Some("hello there"));
    assert_eq!(embedded.special_value("?ask"), Some("question mark"));
    assert_eq!(embedded.special_value("#dropped"), None);
    assert_eq!(embedded.special_value("#"), None);

    assert_eq!(embedded.contractions.len(), 4);
    assert!(embedded.contractions.contains_key("#won't"));
    assert!(embedded.contractions.contains_key("Y'all"));
}

#[test]
fn test_include_macro_check_and_suggest() {
    let embedded = include_dictionary!("tests/data/words.txt");

    assert!(embedded.check("WORLD"));
    assert!(embedded.check("paris"));
    assert!(embedded.check("can't"));
    assert!(embedded.check(".end"));
    assert!(!embedded.check("wrold"));

    assert_eq!(embedded.suggest("catt", 1), vec!["cat".to_string()]);
    let closest = embedded.rank("appl", 2);
    let terms: Vec<&str> = closest.iter().map(|s| s.term.as_str()).collect();
    assert_eq!(terms, vec!["apple", "apply"]);
    assert!(closest.iter().all(|s| s.distance == 1));
}

#[test]
fn test_include_macro_lowercase_plain_words() {
    let embedded = include_dictionary!("tests/data/words.txt", lowercase = true);

    assert!(embedded.plain_words.contains(&"paris"));
    assert!(!embedded.plain_words.contains(&"Paris"));
    assert_eq!(embedded.rank("PARIS", 1)[0].distance, 0);

    // Only plain words are lower-cased; keys stay as written.
    assert!(embedded.contractions.contains_key("#won't"));
    assert!(embedded.contractions.contains_key("Y'all"));
    assert!(!embedded.contractions.contains_key("y'all"));
    assert_eq!(embedded.special_value("#Tag"), Some("Upper Value"));
    assert_eq!(embedded.special_value("#tag"), None);
    assert!(!embedded.check("Y'all"));
}

#[test]
fn test_include_macro_agrees_with_runtime_load() {
    let embedded = include_dictionary!("tests/data/words.txt");
    let text = include_str!("data/words.txt");
    let runtime = SpellChecker::from_source(ReaderSource::from_text(text)).unwrap();

    for word in ["hello", "HELO", "teso", "don't", "#greeting", "!bang", "xyz", ""] {
        assert_eq!(embedded.check(word), runtime.check(word), "{word}");
        assert_eq!(embedded.rank(word, 5), runtime.rank(word, 5), "{word}");
    }
}
