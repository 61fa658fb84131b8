use std::fmt;
use std::fmt::{Display, Formatter};

/// The labels that introduce the sections of a course detail page this crate reads.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SectionLabel {
    Restrictions,
    Corequisites,
    Prerequisites,
}

impl SectionLabel {
    pub const ALL: [SectionLabel; 3] = [
        SectionLabel::Restrictions,
        SectionLabel::Corequisites,
        SectionLabel::Prerequisites,
    ];

    fn word(&self) -> &'static str {
        match self {
            SectionLabel::Restrictions => "restrictions",
            SectionLabel::Corequisites => "corequisites",
            SectionLabel::Prerequisites => "prerequisites",
        }
    }
}

impl Display for SectionLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SectionLabel::Restrictions => write!(f, "Restrictions"),
            SectionLabel::Corequisites => write!(f, "Corequisites"),
            SectionLabel::Prerequisites => write!(f, "Prerequisites"),
        }
    }
}

/// Finds the HTML of a labelled section of a course detail page: everything after the
/// label up to the next known label, or to the end of the page.
///
/// Labels are matched ignoring case, preferring the `Label:` form over the bare word.
///
/// # Examples
///
/// ```
/// use prerequisite_parser::catalog::section::{locate_section, SectionLabel};
///
/// let body = "Corequisites: CIS 200L <br/> Prerequisites: MATH 115";
/// assert_eq!(locate_section(body, SectionLabel::Corequisites), Some(" CIS 200L <br/> "));
/// ```
pub fn locate_section(body_html: &str, label: SectionLabel) -> Option<&str> {
    let lowercase = body_html.to_ascii_lowercase();
    let (_, start) = find_label(&lowercase, label, 0)?;

    let end = SectionLabel::ALL
        .iter()
        .filter(|other| **other != label)
        .filter_map(|other| find_label(&lowercase, *other, start))
        .map(|(other_start, _)| other_start)
        .min()
        .unwrap_or(body_html.len());

    Some(&body_html[start..end])
}

/// The byte range of the label, searching from `from` onwards.
fn find_label(lowercase: &str, label: SectionLabel, from: usize) -> Option<(usize, usize)> {
    let haystack = &lowercase[from..];
    let with_colon = format!("{}:", label.word());
    haystack
        .find(&with_colon)
        .map(|index| (index, index + with_colon.len()))
        .or_else(|| {
            haystack
                .find(label.word())
                .map(|index| (index, index + label.word().len()))
        })
        .map(|(start, end)| (from + start, from + end))
}
