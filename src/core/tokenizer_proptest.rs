//! Property-based tests for the tokenizer
//!
//! These properties hold for arbitrary input lines and delimiter sets.

#[cfg(test)]
mod tests {
    use crate::core::tokenizer::*;
    use proptest::prelude::*;

    // Lines made of plain words and whitespace, without escapes or quotes
    prop_compose! {
        fn plain_line()(
            words in prop::collection::vec("[a-zA-Z0-9.,-]{1,8}", 0..10),
            gaps in prop::collection::vec("[ \t]{1,3}", 10),
        ) -> (Vec<String>, String) {
            let mut line = String::new();
            for (word, gap) in words.iter().zip(gaps.iter()) {
                line.push_str(word);
                line.push_str(gap);
            }
            (words, line)
        }
    }

    proptest! {
        #[test]
        fn test_tokenize_never_panics(line in ".*", delimiters in ".{0,4}") {
            let tokenizer = Tokenizer::new()
                .with_delimiters(delimiters)
                .strip_escapes(true)
                .trim(true)
                .with_excludes(vec!["a".to_string()]);
            let _ = tokenizer.tokenize(&line);
        }

        #[test]
        fn test_plain_words_round_trip((words, line) in plain_line()) {
            let tokens = Tokenizer::new().tokenize(&line);
            prop_assert_eq!(tokens, words);
        }

        #[test]
        fn test_no_empty_tokens_by_default(line in "[a-z \t]{0,40}") {
            let tokens = Tokenizer::new().tokenize(&line);
            prop_assert!(tokens.iter().all(|t| !t.is_empty()));
        }

        #[test]
        fn test_empty_tokens_count_delimiters(line in "[a-z,]{0,40}") {
            let tokenizer = Tokenizer::new().with_delimiters(",").allow_empty_tokens(true);
            let tokens = tokenizer.tokenize(&line);
            let delimiters = line.chars().filter(|&c| c == ',').count();
            prop_assert_eq!(tokens.len(), delimiters + 1);
            prop_assert_eq!(tokens.join(","), line);
        }

        #[test]
        fn test_line_endings_ignored(line in "[a-z \r\n]{0,40}") {
            let tokenizer = Tokenizer::new();
            prop_assert_eq!(
                tokenizer.tokenize(&format!("{line}\r\n")),
                tokenizer.tokenize(&line)
            );
        }

        #[test]
        fn test_trim_is_idempotent(token in ".{0,20}") {
            let once = trim_non_alphanumeric(&token);
            let twice = trim_non_alphanumeric(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_excluded_text_never_survives(
            line in "[abx ]{0,40}",
        ) {
            let tokenizer = Tokenizer::new().with_excludes(vec!["x".to_string()]);
            for token in tokenizer.tokenize(&line) {
                prop_assert!(!token.contains('x'));
            }
        }
    }
}
