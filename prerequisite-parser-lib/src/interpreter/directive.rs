//! Course directives are placeholders of the form `__SUBJECT|NUMBER__` that stand in for
//! course links while the prose is tokenized, so that the course identity is not lost
//! along with the markup.

use crate::error::ParseError;
use crate::interpreter::syntax::course::CourseReference;
use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

static DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__([^_|\s]+)\|([^_|\s]+)__").expect("directive pattern is valid"));

static WHOLE_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^__([^_|\s]+)\|([^_|\s]+)__$").expect("directive pattern is valid")
});

impl CourseReference {
    pub fn to_directive(&self) -> String {
        format!("__{}|{}__", self.subject_code(), self.course_number())
    }

    /// Reads a course back out of text that consists of nothing but a directive.
    pub fn from_directive(text: &str) -> Option<CourseReference> {
        WHOLE_DIRECTIVE
            .captures(text.trim())
            .map(|captures| CourseReference::new(&captures[1], &captures[2]))
    }
}

/// Reduces a phrase that mentions a course down to just its directive, so that
/// `Undergraduate level __CIS|310__ Minimum Grade of D` becomes `__CIS|310__`.
///
/// Phrases without a directive are returned unchanged.
///
/// # Errors
///
/// [`ParseError::MissingConnective`] if the phrase mentions several courses, since
/// nothing says how they combine.
pub fn canonicalize_directive(phrase: &str) -> Result<String> {
    let courses: Vec<CourseReference> = DIRECTIVE
        .captures_iter(phrase)
        .map(|captures| CourseReference::new(&captures[1], &captures[2]))
        .collect();
    match courses.as_slice() {
        [] => Ok(phrase.to_string()),
        [course] => Ok(course.to_directive()),
        _ => {
            let operands = courses.iter().map(CourseReference::to_string).collect();
            let error = ParseError::MissingConnective { operands };
            log::warn!("{} in {:?}", error, phrase);
            Err(error.into())
        }
    }
}

/// Whether the text can be one half of a directive and still be read back.
pub(crate) fn is_directive_part(text: &str) -> bool {
    !text.is_empty()
        && !text
            .chars()
            .any(|character| character.is_whitespace() || character == '_' || character == '|')
}
