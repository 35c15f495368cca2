use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Anything that is not a word character, whitespace or hyphen gets replaced
/// by a space before splitting.
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("static tokenizer regex"));

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in",
        "is", "it", "its", "of", "on", "that", "the", "to", "was", "will", "with", "very",
        "quite", "some", "many",
    ]
    .into_iter()
    .collect()
});

#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Split a prompt into lower-cased alphanumeric/hyphen tokens, dropping
/// stop words and tokens shorter than three characters.
///
/// An empty prompt yields an empty token list; downstream stages treat that
/// as "no concepts found" rather than an error.
#[must_use]
pub fn tokenize(prompt: &str) -> Vec<String> {
    let lowered = prompt.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, " ");
    cleaned
        .split_whitespace()
        .filter(|word| word.len() > 2 && !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Up to five tokens surrounding the first occurrence of `term` in the
/// prompt (two before, the hit, two after), stop words excluded.
#[must_use]
pub fn context_window(prompt: &str, term: &str) -> Vec<String> {
    let lowered_term = term.to_lowercase();
    let words: Vec<&str> = prompt.split_whitespace().collect();
    let Some(hit) = words
        .iter()
        .position(|word| word.to_lowercase().contains(&lowered_term))
    else {
        return Vec::new();
    };

    let start = hit.saturating_sub(2);
    let end = (hit + 3).min(words.len());
    words[start..end]
        .iter()
        .map(|word| word.to_lowercase())
        .filter(|word| !is_stop_word(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("Casual, SUSTAINABLE photo!"),
            vec!["casual", "sustainable", "photo"]
        );
    }

    #[test]
    fn drops_stop_words_and_short_tokens() {
        assert_eq!(
            tokenize("a photo of the sun at dawn"),
            vec!["photo", "sun", "dawn"]
        );
    }

    #[test]
    fn keeps_hyphenated_terms() {
        assert_eq!(tokenize("eco-friendly settings"), vec!["eco-friendly", "settings"]);
    }

    #[test]
    fn empty_prompt_yields_empty_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn context_window_surrounds_first_hit() {
        let window = context_window("a warm golden sunset over the quiet hills", "sunset");
        assert_eq!(window, vec!["warm", "golden", "sunset", "over"]);
    }

    #[test]
    fn context_window_missing_term_is_empty() {
        assert!(context_window("portrait of a friend", "sunset").is_empty());
    }

    mod properties {
        use super::super::{is_stop_word, tokenize};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn proptest_tokens_are_normalized(prompt in ".{0,200}") {
                for token in tokenize(&prompt) {
                    prop_assert!(token.len() > 2);
                    prop_assert!(!is_stop_word(&token));
                    prop_assert_eq!(token.to_lowercase(), token.clone());
                }
            }
        }
    }
}
