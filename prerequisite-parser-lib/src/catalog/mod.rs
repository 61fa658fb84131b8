pub mod section;
pub mod vocabulary;

use crate::catalog::section::{locate_section, SectionLabel};
use crate::catalog::vocabulary::CatalogVocabulary;
use crate::interpreter::html;
use crate::interpreter::parse_expression;
use crate::interpreter::syntax::prerequisite_tree::Node;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// The class of the table cell that holds the body of a course detail page.
pub const BODY_CLASS: &str = "ntdefault";

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

/// What could be read from a course detail page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CourseDetail {
    pub description: Option<String>,
    pub prerequisites: Option<Node>,
    pub corequisites: Option<Node>,
    pub restrictions: Option<String>,
}

/// Reads the description, requisites and restrictions of a course from its catalog
/// detail page.
///
/// # Arguments
///
/// * `page_html`: The full detail page, or just its body.
/// * `vocabulary`: The query parameters that identify courses in links.
///
/// returns: Every part that was found; absent parts are left as `None`.
pub fn parse_course_detail(page_html: &str, vocabulary: &CatalogVocabulary) -> Result<CourseDetail> {
    let body = match html::inner_html_by_class(page_html, BODY_CLASS) {
        Some(body) => body,
        None => {
            log::debug!("no .{} element found, reading the whole page", BODY_CLASS);
            page_html
        }
    };

    Ok(CourseDetail {
        description: parse_description(body),
        prerequisites: parse_requisites(body, SectionLabel::Prerequisites, vocabulary)?,
        corequisites: parse_requisites(body, SectionLabel::Corequisites, vocabulary)?,
        restrictions: parse_restrictions(body),
    })
}

/// Parses the requisite section introduced by the given label.
///
/// returns: The requisite tree, or `None` if the page has no such section.
pub fn parse_requisites(
    body_html: &str,
    label: SectionLabel,
    vocabulary: &CatalogVocabulary,
) -> Result<Option<Node>> {
    let section = match locate_section(body_html, label) {
        Some(section) => section,
        None => {
            log::debug!("no {} label found", label);
            return Ok(None);
        }
    };
    parse_expression(section, vocabulary).with_context(|| format!("could not parse {}", label))
}

/// Parses the prerequisites of a course detail body using the default catalog vocabulary.
pub fn parse_prerequisites(body_html: &str) -> Result<Option<Node>> {
    parse_requisites(body_html, SectionLabel::Prerequisites, &CatalogVocabulary::default())
}

/// Parses the corequisites of a course detail body using the default catalog vocabulary.
pub fn parse_corequisites(body_html: &str) -> Result<Option<Node>> {
    parse_requisites(body_html, SectionLabel::Corequisites, &CatalogVocabulary::default())
}

/// The description is the text before the line break that precedes the hours listing.
fn parse_description(body_html: &str) -> Option<String> {
    let last_hours = body_html.to_ascii_lowercase().rfind("hours")?;
    let line_break = LINE_BREAK
        .find_iter(body_html)
        .find(|line_break| line_break.start() < last_hours)?;
    let description = html::flatten(&body_html[..line_break.start()]);
    (!description.is_empty()).then_some(description)
}

fn parse_restrictions(body_html: &str) -> Option<String> {
    let section = locate_section(body_html, SectionLabel::Restrictions)?;
    let restrictions = html::flatten(section);
    (!restrictions.is_empty()).then_some(restrictions)
}
