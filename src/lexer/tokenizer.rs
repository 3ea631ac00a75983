use std::{iter::Peekable, str::CharIndices};

use crate::token::Token;

/// Splits text on Unicode whitespace, yielding tokens left to right.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    inner: Peekable<CharIndices<'a>>,
    text: &'a str,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.char_indices().peekable(),
            text,
        }
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        while self
            .inner
            .next_if(|(_, c)| c.is_whitespace())
            .is_some()
        {}
    }

    #[inline]
    fn match_token(&mut self, start_position: usize) -> Token<'a> {
        let mut end_position = self.text.len();
        while let Some((index, c)) = self.inner.next() {
            if c.is_whitespace() {
                end_position = index;
                break;
            }
        }

        Token {
            text: &self.text[start_position..end_position],
            start_position,
            end_position,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let (start_position, _) = *self.inner.peek()?;
        Some(self.match_token(start_position))
    }
}

pub fn split(text: &str) -> Vec<Token<'_>> {
    Tokenizer::new(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<&str> {
        split(text).into_iter().map(|token| token.text).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(split("").is_empty());
        assert!(split("   \n\n  ").is_empty());
    }

    #[test]
    fn test_positions() {
        assert_eq!(
            split("  if x1\n"),
            vec![
                Token {
                    text: "if",
                    start_position: 2,
                    end_position: 4,
                },
                Token {
                    text: "x1",
                    start_position: 5,
                    end_position: 7,
                },
            ]
        );
    }

    #[test]
    fn test_token_at_end_of_input() {
        assert_eq!(
            split("foo"),
            vec![Token {
                text: "foo",
                start_position: 0,
                end_position: 3,
            }]
        );
    }

    #[test]
    fn test_consecutive_whitespace() {
        assert_eq!(texts("a   b \n\n c"), vec!["a", "b", "c"]);
        assert_eq!(texts("a\t\tb\r\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_vertical_tab_and_unicode_spaces_separate() {
        assert_eq!(texts("a\u{0b}b\u{0c}c"), vec!["a", "b", "c"]);
        assert_eq!(
            split("x\u{a0}y"),
            vec![
                Token {
                    text: "x",
                    start_position: 0,
                    end_position: 1,
                },
                Token {
                    text: "y",
                    start_position: 3,
                    end_position: 4,
                },
            ]
        );
    }

    #[test]
    fn test_newlines_equivalent_to_spaces() {
        let text = "while x\n10 3.5\nfoo  3x\n";
        assert_eq!(split(text).len(), 6);
        assert_eq!(texts(text), texts(&text.replace('\n', " ")));
    }

    #[test]
    fn test_no_empty_tokens() {
        for token in split(" \n a  || \n\n&& 1.5e3 \n") {
            assert!(!token.text.is_empty());
            assert!(!token.text.contains(char::is_whitespace));
        }
    }

    #[test]
    fn test_multibyte() {
        assert_eq!(
            split("ü 你好"),
            vec![
                Token {
                    text: "ü",
                    start_position: 0,
                    end_position: 2,
                },
                Token {
                    text: "你好",
                    start_position: 3,
                    end_position: 9,
                },
            ]
        );
    }
}
