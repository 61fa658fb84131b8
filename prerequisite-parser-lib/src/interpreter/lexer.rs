use crate::interpreter::token::Token;

/// The result of tokenizing a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized {
    pub tree: Vec<Token>,
    /// Byte index just past the last character consumed. This is shorter than the input
    /// only when an unmatched `)` ended the top level early.
    pub last_index: usize,
}

/// Parentheses nested deeper than this are kept as ordinary characters of the words
/// they appear in.
pub const MAX_NESTING: usize = 64;

/// Splits flattened prerequisite text into whitespace-delimited words, nesting every
/// parenthesized part as a [`Token::Group`].
///
/// Never fails: an unmatched `(` groups everything after it, and an unmatched `)`
/// ends the top level at that point. Groups are nested at most [`MAX_NESTING`] deep.
///
/// # Arguments
///
/// * `expression`: Text with all markup already removed.
///
/// returns: The token tree along with how far into the text it reaches.
///
/// # Examples
///
/// ```
/// use prerequisite_parser::interpreter::lexer::tokenize;
///
/// let tokenized = tokenize("CIS 310 and (CIS 350 or CIS 3501)");
/// assert_eq!(tokenized.tree.len(), 4);
/// ```
pub fn tokenize(expression: &str) -> Tokenized {
    let (tree, last_index) = tokenize_level(expression, 0, 0);
    Tokenized { tree, last_index }
}

fn tokenize_level(expression: &str, start: usize, depth: usize) -> (Vec<Token>, usize) {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut index = start;
    // Parentheses opened as plain characters past the nesting limit and not yet closed.
    let mut literal_depth = 0;

    while let Some(character) = expression[index..].chars().next() {
        match character {
            '(' if depth >= MAX_NESTING => {
                literal_depth += 1;
                word.push(character);
                index += 1;
            }
            ')' if literal_depth > 0 => {
                literal_depth -= 1;
                word.push(character);
                index += 1;
            }
            '(' => {
                flush_word(&mut word, &mut tokens);
                let (group, next_index) = tokenize_level(expression, index + 1, depth + 1);
                tokens.push(Token::Group(group));
                index = next_index;
            }
            ')' => {
                flush_word(&mut word, &mut tokens);
                return (tokens, index + 1);
            }
            character if character.is_whitespace() => {
                flush_word(&mut word, &mut tokens);
                index += character.len_utf8();
            }
            character => {
                word.push(character);
                index += character.len_utf8();
            }
        }
    }

    flush_word(&mut word, &mut tokens);
    (tokens, expression.len())
}

fn flush_word(word: &mut String, tokens: &mut Vec<Token>) {
    if !word.is_empty() {
        tokens.push(Token::Word(std::mem::take(word)));
    }
}
