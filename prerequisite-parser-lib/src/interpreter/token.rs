use crate::interpreter::operator::Gate;
use itertools::Itertools;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of the flattened prerequisite text.
#[derive(Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of non-whitespace characters.
    Word(String),
    /// The tokens found between a pair of parentheses.
    Group(Vec<Token>),
}

/// A token after consecutive words have been merged into phrases.
#[derive(Clone, PartialEq, Eq)]
pub enum Term {
    /// A clause of one or more words, e.g. `Mathematics Placement 080`.
    Phrase(String),
    Operator(Gate),
    Group(Vec<Term>),
}

impl Token {
    pub fn word(text: impl Into<String>) -> Token {
        Token::Word(text.into())
    }

    /// All the words in this token, depth-first and with the grouping removed.
    pub fn words(&self) -> Vec<&str> {
        match self {
            Token::Word(word) => vec![word.as_str()],
            Token::Group(tokens) => tokens.iter().flat_map(Token::words).collect(),
        }
    }
}

impl Term {
    pub fn phrase(text: impl Into<String>) -> Term {
        Term::Phrase(text.into())
    }
}

/// Joins all words of the given tokens with single spaces, dropping the parentheses.
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().flat_map(Token::words).join(" ")
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => write!(f, "{}", word),
            Token::Group(tokens) => write!(f, "({})", tokens.iter().join(" ")),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => write!(f, "{:?}", word),
            Token::Group(tokens) => f.debug_list().entries(tokens).finish(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Term::Phrase(text) => write!(f, "{}", text),
            Term::Operator(gate) => write!(f, "{}", gate.word()),
            Term::Group(terms) => write!(f, "({})", terms.iter().join(" ")),
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Term::Phrase(text) => write!(f, "{:?}", text),
            Term::Operator(gate) => write!(f, "{:?}", gate.word()),
            Term::Group(terms) => f.debug_list().entries(terms).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_groups_are_flattened_into_words() {
        let tokens = vec![
            Token::word("a"),
            Token::Group(vec![Token::word("b"), Token::Group(vec![Token::word("c")])]),
            Token::word("d"),
        ];

        assert_eq!(tokens_to_string(&tokens), "a b c d");
    }

    #[test]
    fn debug_output_reads_like_nested_lists() {
        let tokens = vec![Token::word("a"), Token::Group(vec![Token::word("b")])];

        assert_eq!(format!("{:?}", tokens), r#"["a", ["b"]]"#);
    }

    #[test]
    fn display_restores_parentheses() {
        let terms = Term::Group(vec![
            Term::phrase("one two"),
            Term::Operator(Gate::Or),
            Term::phrase("three"),
        ]);

        assert_eq!(terms.to_string(), "(one two or three)");
    }
}
