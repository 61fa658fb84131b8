pub mod anchors;
pub mod directive;
pub mod html;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod resolver;
pub mod syntax;
pub mod token;

use crate::catalog::vocabulary::CatalogVocabulary;
use crate::interpreter::resolver::resolve_directives;
use anyhow::{Context, Result};
use syntax::prerequisite_tree::Node;

/// Parses the requisite prose of a course into a tree of courses and conditions joined
/// by "and"/"or".
///
/// # Arguments
///
/// * `html`: The HTML that follows a "Prerequisites:" or "Corequisites:" label.
/// * `vocabulary`: The query parameters that identify courses in links.
///
/// returns: The requisite tree, or nothing if the fragment holds no requirements.
///
/// # Errors
///
/// Fails with a [`crate::error::ParseError`] when the prose cannot be structured
/// without dropping some of it.
///
/// # Examples
///
/// ```
/// use prerequisite_parser::catalog::vocabulary::CatalogVocabulary;
/// use prerequisite_parser::interpreter::parse_expression;
/// use prerequisite_parser::interpreter::syntax::prerequisite_tree::Node;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let html = "<a href='/c?one_subj=ACC&amp;sel_crse_strt=298'>ACC 298</a> Minimum Grade of C";
/// let tree = parse_expression(html, &CatalogVocabulary::default())?;
/// assert_eq!(tree, Some(Node::new_course("ACC", "298")));
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse_expression(html: &str, vocabulary: &CatalogVocabulary) -> Result<Option<Node>> {
    let text = anchors::flatten_with_directives(html, vocabulary);
    log::trace!("flattened requisite text: {:?}", text);
    convert(&text)
}

/// Converts flattened requisite text, with courses already written as directives, into
/// a resolved requisite tree.
pub fn convert(text: &str) -> Result<Option<Node>> {
    let tokenized = lexer::tokenize(text);
    if tokenized.last_index < text.len() {
        log::debug!(
            "unmatched ')' ended the expression early, ignoring {:?}",
            &text[tokenized.last_index..]
        );
    }
    log::trace!("token tree: {:?}", tokenized.tree);

    let tree = parser::parse(tokenized.tree)
        .with_context(|| format!("could not structure requisites {:?}", text))?;
    let resolved = tree.map(resolve_directives);
    log::debug!(
        "parsed requisites: {}",
        resolved
            .as_ref()
            .map_or_else(|| "none".to_string(), Node::to_compact_string)
    );
    Ok(resolved)
}
