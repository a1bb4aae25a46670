/*!
simple_usage.rs

Example demonstrating:
- compile-time dictionary embedding using `include_dictionary!` (returns an `EmbeddedSpellChecker`)
- runtime loading of a `SpellChecker` from newline-delimited text

Run with:
    RUST_LOG=debug cargo run --example simple_usage

The macro path is relative to the crate root. This example uses
`tests/data/words.txt`, the fixture shared with the integration tests.
*/

use tinyspell::{include_dictionary, ReaderSource, SpellChecker, Suggestion};

fn print_suggestions(title: &str, suggestions: &[Suggestion]) {
    println!("-- {} ({} suggestions) --", title, suggestions.len());
    for s in suggestions {
        println!("  term: {:<12} distance: {:>2}", s.term, s.distance);
    }
}

fn example_compile_time() {
    let embedded = include_dictionary!("tests/data/words.txt");

    println!("=== Compile-time embedded dictionary ===");
    for word in ["World", "wrold", "don't", "#greeting"] {
        println!("check({:?}) = {}", word, embedded.check(word));
    }
    print_suggestions("Suggestions for 'helo'", &embedded.rank("helo", 3));
    print_suggestions("Suggestions for 'teso'", &embedded.rank("teso", 3));
}

fn example_runtime_load() -> tinyspell::Result<()> {
    println!("\n=== Runtime-loaded dictionary ===");

    let text = "cat\ndog\n#greeting hello there\ndon't\n#\n";
    let mut checker = SpellChecker::new();
    let lines = checker.load(ReaderSource::from_text(text))?;
    println!("ingested {} lines", lines);

    for word in ["CAT", "catt", "don't"] {
        println!("check({:?}) = {}", word, checker.check(word));
    }
    println!("suggest(\"catt\", 1) = {:?}", checker.suggest("catt", 1));

    if let Err(e) = checker.load_file("does/not/exist.txt") {
        println!("loading a missing file fails: {}", e);
    }
    Ok(())
}

fn main() {
    env_logger::init();

    println!("tinyspell example: compile-time macro and runtime loading\n");

    example_compile_time();
    if let Err(e) = example_runtime_load() {
        eprintln!("[ERROR] {}", e);
    }

    println!("\nDone.");
}
