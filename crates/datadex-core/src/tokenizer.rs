//! Text normalization shared by indexing and querying.
//!
//! Both sides must agree on what a term is, so this is the only tokenizer
//! in the workspace.

/// Split `text` into normalized terms.
///
/// Lower-cases, maps every character outside `[a-z0-9]` and whitespace to a
/// separator, then splits on whitespace runs. Empty tokens are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("Hello, World! It's 42°C."),
            vec!["hello", "world", "it", "s", "42", "c"]
        );
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(tokenize("  a\t\tb \n c  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn non_ascii_letters_become_separators() {
        // Purely lexical ASCII model: accented and non-Latin text drops out.
        assert_eq!(tokenize("café naïve"), vec!["caf", "na", "ve"]);
    }

    #[test]
    fn empty_and_symbol_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("!!! --- ###").is_empty());
    }
}
