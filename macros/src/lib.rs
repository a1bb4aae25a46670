use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, Ident, LitStr, Token};

/// Macro input representation:
/// include_dictionary!("path/to/file.txt", lowercase = true)
struct IncludeDictionaryArgs {
    path: LitStr,
    assignments: Vec<(Ident, Expr)>,
}

impl Parse for IncludeDictionaryArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let path: LitStr = input.parse()?;

        let mut assignments = Vec::new();

        // Optional comma separated `name = literal` pairs
        while input.parse::<Token![,]>().is_ok() {
            if input.is_empty() {
                break;
            }
            let ident: Ident = input.parse()?;
            let _eq: Token![=] = input.parse()?;
            let value: Expr = input.parse()?;
            assignments.push((ident, value));
        }

        Ok(IncludeDictionaryArgs { path, assignments })
    }
}

/// Classified dictionary contents, built the same way `Dictionary::load` does.
#[derive(Default)]
struct Classified {
    special_tokens: BTreeMap<String, String>,
    contractions: BTreeMap<String, String>,
    plain_words: Vec<String>,
}

impl Classified {
    fn insert(&mut self, line: &str, lowercase: bool) {
        if line.contains('\'') {
            self.contractions.insert(line.to_string(), line.to_string());
        } else if line.starts_with(['.', '!', '?', '#']) {
            // Trigger lines without a space carry no value and are dropped.
            if let Some((key, value)) = line.split_once(' ') {
                self.special_tokens
                    .insert(key.trim().to_string(), value.trim().to_string());
            }
        } else if lowercase {
            self.plain_words.push(line.to_lowercase());
        } else {
            self.plain_words.push(line.to_string());
        }
    }
}

fn bool_arg(ident: &Ident, expr: &Expr) -> syn::Result<bool> {
    match expr {
        Expr::Lit(el) => match &el.lit {
            syn::Lit::Bool(lb) => Ok(lb.value),
            _ => Err(syn::Error::new_spanned(
                expr,
                format!("{} must be a boolean literal", ident),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            expr,
            format!("{} must be a boolean literal expression", ident),
        )),
    }
}

/// include_dictionary!("path/to/file.txt", lowercase = false)
///
/// Reads a newline-delimited dictionary at compile time, classifies each
/// non-empty trimmed line and emits:
///  - SPECIAL_TOKENS_PHF: ::phf::Map<&'static str, &'static str> (key -> value)
///  - CONTRACTIONS_PHF: ::phf::Map<&'static str, &'static str> (line -> line)
///  - PLAIN_WORDS: [&'static str; N] in file order, duplicates kept
///
/// and evaluates to a `tinyspell::EmbeddedSpellChecker` over them. The path is
/// resolved relative to `CARGO_MANIFEST_DIR`. `lowercase = true` lower-cases
/// plain words; special token and contraction keys are kept verbatim.
#[proc_macro]
pub fn include_dictionary(input: TokenStream) -> TokenStream {
    let args = syn::parse_macro_input!(input as IncludeDictionaryArgs);

    let mut lowercase = false;

    for (ident, expr) in args.assignments.iter() {
        let result = match ident.to_string().as_str() {
            "lowercase" => bool_arg(ident, expr).map(|v| lowercase = v),
            other => Err(syn::Error::new_spanned(
                ident,
                format!("unknown argument to include_dictionary: {}", other),
            )),
        };
        if let Err(e) = result {
            return e.to_compile_error().into();
        }
    }

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .expect("CARGO_MANIFEST_DIR environment variable not set");
    let file_path = Path::new(&manifest_dir).join(args.path.value());

    let file = File::open(&file_path).unwrap_or_else(|e| {
        panic!(
            "include_dictionary!: failed to open dictionary file '{}': {}",
            file_path.display(),
            e
        )
    });

    let mut classified = Classified::default();
    for (lineno, line_res) in io::BufReader::new(file).lines().enumerate() {
        let line = line_res.unwrap_or_else(|e| {
            panic!(
                "include_dictionary!: error reading line {} of {}: {}",
                lineno + 1,
                file_path.display(),
                e
            )
        });
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            classified.insert(trimmed, lowercase);
        }
    }

    let lit = |s: &str| LitStr::new(s, Span::call_site());

    let special_entries = classified.special_tokens.iter().map(|(k, v)| {
        let (k, v) = (lit(k), lit(v));
        quote! { #k => #v }
    });
    let contraction_entries = classified.contractions.iter().map(|(k, v)| {
        let (k, v) = (lit(k), lit(v));
        quote! { #k => #v }
    });
    let plain_words = classified.plain_words.iter().map(|w| lit(w));
    let plain_len = classified.plain_words.len();

    // Re-run the macro when the word list changes.
    let tracked = lit(&file_path.to_string_lossy());

    let expanded = quote! {
        {
            const _: &[u8] = include_bytes!(#tracked);

            static SPECIAL_TOKENS_PHF: ::phf::Map<&'static str, &'static str> = ::phf::phf_map! {
                #(#special_entries, )*
            };

            static CONTRACTIONS_PHF: ::phf::Map<&'static str, &'static str> = ::phf::phf_map! {
                #(#contraction_entries, )*
            };

            static PLAIN_WORDS: [&'static str; #plain_len] = [#(#plain_words),*];

            ::tinyspell::EmbeddedSpellChecker::from_phf(
                &SPECIAL_TOKENS_PHF,
                &CONTRACTIONS_PHF,
                &PLAIN_WORDS,
            )
        }
    };

    TokenStream::from(expanded)
}
