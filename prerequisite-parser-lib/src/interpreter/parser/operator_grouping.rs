use crate::interpreter::directive::canonicalize_directive;
use crate::interpreter::operator::Gate;
use crate::interpreter::token::{Term, Token};
use anyhow::Result;

/// Merges runs of consecutive words into single phrases, splitting only at the words
/// "and" and "or", which become standalone operators. Groups are handled recursively.
///
/// Fails if a phrase mentions more than one course.
pub(crate) fn group_by_operator(tokens: Vec<Token>) -> Result<Vec<Term>> {
    let mut terms = Vec::new();
    let mut phrase = String::new();

    for token in tokens {
        match token {
            Token::Group(inner_tokens) => {
                flush_phrase(&mut phrase, &mut terms)?;
                terms.push(Term::Group(group_by_operator(inner_tokens)?));
            }
            Token::Word(word) => match Gate::from_word(&word) {
                Some(gate) => {
                    flush_phrase(&mut phrase, &mut terms)?;
                    terms.push(Term::Operator(gate));
                }
                None => {
                    phrase.push(' ');
                    phrase.push_str(&word);
                }
            },
        }
    }

    flush_phrase(&mut phrase, &mut terms)?;
    Ok(terms)
}

fn flush_phrase(phrase: &mut String, terms: &mut Vec<Term>) -> Result<()> {
    let trimmed = phrase.trim();
    if !trimmed.is_empty() {
        terms.push(Term::Phrase(canonicalize_directive(trimmed)?));
    }
    phrase.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use pretty_assertions::assert_eq;

    fn words(text: &str) -> Vec<Token> {
        text.split_whitespace().map(Token::word).collect()
    }

    #[test]
    fn words_are_merged_between_operators() {
        let mut tokens = words("one two and");
        tokens.push(Token::Group(words("buckle shoe or three four")));

        let terms = group_by_operator(tokens).unwrap();

        assert_eq!(
            terms,
            vec![
                Term::phrase("one two"),
                Term::Operator(Gate::And),
                Term::Group(vec![
                    Term::phrase("buckle shoe"),
                    Term::Operator(Gate::Or),
                    Term::phrase("three four"),
                ]),
            ]
        );
    }

    #[test]
    fn operators_are_recognized_regardless_of_case() {
        let terms = group_by_operator(words("a AND b Or c")).unwrap();

        assert_eq!(
            terms,
            vec![
                Term::phrase("a"),
                Term::Operator(Gate::And),
                Term::phrase("b"),
                Term::Operator(Gate::Or),
                Term::phrase("c"),
            ]
        );
    }

    #[test]
    fn phrases_mentioning_a_course_are_reduced_to_the_directive() {
        let terms = group_by_operator(words(
            "Undergraduate level __cis|310__ Minimum Grade of D or Mathematics Placement 080",
        ))
        .unwrap();

        assert_eq!(
            terms,
            vec![
                Term::phrase("__CIS|310__"),
                Term::Operator(Gate::Or),
                Term::phrase("Mathematics Placement 080"),
            ]
        );
    }

    #[test]
    fn no_empty_phrases_are_produced_around_groups_and_operators() {
        let tokens = vec![
            Token::Group(words("a")),
            Token::word("or"),
            Token::word("or"),
            Token::Group(words("b")),
        ];

        let terms = group_by_operator(tokens).unwrap();

        assert_eq!(
            terms,
            vec![
                Term::Group(vec![Term::phrase("a")]),
                Term::Operator(Gate::Or),
                Term::Operator(Gate::Or),
                Term::Group(vec![Term::phrase("b")]),
            ]
        );
    }

    #[test]
    fn words_before_a_group_keep_their_position() {
        let mut tokens = words("Permission of instructor");
        tokens.push(Token::Group(words("see department")));

        let terms = group_by_operator(tokens).unwrap();

        assert_eq!(
            terms,
            vec![
                Term::phrase("Permission of instructor"),
                Term::Group(vec![Term::phrase("see department")]),
            ]
        );
    }

    #[test]
    fn words_containing_operators_are_not_split() {
        let terms = group_by_operator(words("Standing or Honors Program")).unwrap();

        assert_eq!(
            terms,
            vec![
                Term::phrase("Standing"),
                Term::Operator(Gate::Or),
                Term::phrase("Honors Program"),
            ]
        );
        assert_eq!(group_by_operator(words("Orientation Andover")).unwrap().len(), 1);
    }

    #[test]
    fn courses_listed_without_connective_are_reported() {
        let tokens = vec![Token::Group(words("__CIS|310__, __CIS|350__ and __MATH|115__"))];

        let error = group_by_operator(tokens).unwrap_err();

        assert_eq!(
            error.downcast_ref::<ParseError>(),
            Some(&ParseError::MissingConnective {
                operands: vec!["CIS 310".to_string(), "CIS 350".to_string()]
            })
        );
    }
}
