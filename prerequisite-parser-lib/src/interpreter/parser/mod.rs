mod operator_grouping;

use crate::interpreter::parser::operator_grouping::group_by_operator;
use crate::interpreter::syntax::prerequisite_tree;
use crate::interpreter::syntax::prerequisite_tree::Node;
use crate::interpreter::token::Token;
use anyhow::Result;

/// Parses a token tree into an equivalent prerequisite tree.
///
/// # Arguments
///
/// * `tokens`: The tokens to parse, as produced by the lexer.
///
/// returns: The equivalent prerequisite tree, or nothing if there were no operands.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use prerequisite_parser::interpreter::parser::parse;
/// use prerequisite_parser::interpreter::token::Token;
///
/// let tokens = vec![
///     Token::word("Mathematics"),
///     Token::word("Placement"),
///     Token::word("080"),
/// ];
/// let tree = parse(tokens)?;
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Option<Node>> {
    let terms = group_by_operator(tokens)?;
    log::trace!("grouped terms: {:?}", terms);
    let tree = prerequisite_tree::new_tree(terms)?;
    Ok(tree)
}
