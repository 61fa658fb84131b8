use crate::catalog::vocabulary::CatalogVocabulary;
use crate::interpreter::directive::is_directive_part;
use crate::interpreter::html;
use crate::interpreter::syntax::course::CourseReference;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static ANCHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<a\b([^>]*)>.*?</a\s*>").unwrap());

static HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)\bhref\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap()
});

/// Replaces every link to a catalog course with a course directive and returns the text
/// content of the result.
///
/// # Arguments
///
/// * `html`: The part of a course detail page that holds the requisite prose.
/// * `vocabulary`: The query parameters that identify courses in links.
///
/// returns: Whitespace-normalized text in which courses appear as `__SUBJECT|NUMBER__`.
///
/// # Examples
///
/// ```
/// use prerequisite_parser::catalog::vocabulary::CatalogVocabulary;
/// use prerequisite_parser::interpreter::anchors::flatten_with_directives;
///
/// let html = "<a href='/catalog?one_subj=CIS&amp;sel_crse_strt=310'>CIS 310</a> Minimum Grade of D";
/// let text = flatten_with_directives(html, &CatalogVocabulary::default());
/// assert_eq!(text, "__CIS|310__ Minimum Grade of D");
/// ```
pub fn flatten_with_directives(html: &str, vocabulary: &CatalogVocabulary) -> String {
    html::flatten(&replace_course_anchors(html, vocabulary))
}

/// Swaps the links that refer to a course for directive text, leaving all other markup,
/// including links to anything that is not a course, where it is.
pub fn replace_course_anchors<'a>(html: &'a str, vocabulary: &CatalogVocabulary) -> Cow<'a, str> {
    ANCHOR.replace_all(html, |captures: &Captures| {
        match course_from_attributes(&captures[1], vocabulary) {
            Some(course) => course.to_directive(),
            None => captures[0].to_string(),
        }
    })
}

fn course_from_attributes(attributes: &str, vocabulary: &CatalogVocabulary) -> Option<CourseReference> {
    let captures = HREF.captures(attributes)?;
    let href = captures
        .get(1)
        .or_else(|| captures.get(2))
        .or_else(|| captures.get(3))?
        .as_str();
    course_from_href(&html::decode_entities(href), vocabulary)
}

/// Reads the course a catalog link points at from its query string.
pub fn course_from_href(href: &str, vocabulary: &CatalogVocabulary) -> Option<CourseReference> {
    let (_, query) = href.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();

    let mut subject_code = None;
    let mut course_number = None;
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        let value = value.trim().to_string();
        if value.is_empty() {
            continue;
        }
        if key == vocabulary.subject_parameter.as_str() {
            subject_code = Some(value);
        } else if key == vocabulary.number_parameter.as_str() {
            course_number = Some(value);
        }
    }

    let course = CourseReference::new(&subject_code?, &course_number?);
    if !is_directive_part(course.subject_code()) || !is_directive_part(course.course_number()) {
        log::debug!("{:?} does not look like a course, keeping it as a link", href);
        return None;
    }
    Some(course)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    fn anchor(subject: &str, number: &str) -> String {
        format!(
            "<a href='/BANP/bwckctlg.p_display_courses?term_in=201820&amp;one_subj={0}&amp;sel_subj=&amp;sel_crse_strt={1}&amp;sel_crse_end={1}&amp;sel_levl=&amp;sel_schd=&amp;sel_coll=&amp;sel_divs=&amp;sel_dept=&amp;sel_attr='>{0} {1}</a>",
            subject, number
        )
    }

    #[test]
    fn course_anchors_are_replaced_with_directives() {
        let html = format!(
            r#"
            <br /> Undergraduate level
            {} Minimum Grade of D and (Undergraduate level
            {} Minimum Grade of D or Undergraduate level
            {} Minimum Grade of D or Undergraduate level
            {} Minimum Grade of D) or (Undergraduate level
            {} Minimum Grade of D and Undergraduate level
            {} Minimum Grade of D) or (Undergraduate level
            {} Minimum Grade of D and Undergraduate level
            {} Minimum Grade of D) and Undergraduate level
            {} Minimum Grade of D
            <br />
            <br />
            "#,
            anchor("CIS", "310"),
            anchor("CIS", "350"),
            anchor("CIS", "3501"),
            anchor("IMSE", "350"),
            anchor("ECE", "370"),
            anchor("MATH", "276"),
            anchor("ECE", "370"),
            anchor("ECE", "276"),
            anchor("IMSE", "317"),
        );

        let text = flatten_with_directives(&html, &CatalogVocabulary::default());

        assert_eq!(
            text,
            "Undergraduate level __CIS|310__ Minimum Grade of D and (Undergraduate level __CIS|350__ \
             Minimum Grade of D or Undergraduate level __CIS|3501__ Minimum Grade of D or Undergraduate \
             level __IMSE|350__ Minimum Grade of D) or (Undergraduate level __ECE|370__ Minimum Grade of \
             D and Undergraduate level __MATH|276__ Minimum Grade of D) or (Undergraduate level __ECE|370__ \
             Minimum Grade of D and Undergraduate level __ECE|276__ Minimum Grade of D) and Undergraduate \
             level __IMSE|317__ Minimum Grade of D"
        );
    }

    #[test]
    fn anchors_without_course_parameters_are_kept_as_text() {
        let html = r#"See <a href="/advising?dept=CIS">the advising office</a> or <a name="x">here</a>"#;

        let text = flatten_with_directives(html, &CatalogVocabulary::default());

        assert_eq!(text, "See the advising office or here");
    }

    #[test]
    fn anchors_with_only_one_course_parameter_are_not_courses() {
        let href = "/catalog?one_subj=CIS&sel_crse_strt=";

        assert_eq!(course_from_href(href, &CatalogVocabulary::default()), None);
    }

    #[test]
    fn course_parameters_are_normalized() {
        let href = "/catalog?one_subj=+cis+&sel_crse_strt=200l#top";

        assert_eq!(
            course_from_href(href, &CatalogVocabulary::default()),
            Some(CourseReference::new("CIS", "200L"))
        );
    }

    #[parameterized(
    href = {
    "/catalog?one_subj=COMP%20SCI&sel_crse_strt=310",
    "/catalog?one_subj=A_B&sel_crse_strt=1",
    "/catalog?one_subj=CIS&sel_crse_strt=3|10",
    }
    )]
    fn values_that_cannot_be_written_as_directives_are_not_courses(href: &str) {
        assert_eq!(course_from_href(href, &CatalogVocabulary::default()), None);
    }

    #[test]
    fn anchors_with_unreadable_course_values_stay_text() {
        let html = "<a href='/catalog?one_subj=COMP+SCI&amp;sel_crse_strt=310'>COMP SCI 310</a>";

        let text = flatten_with_directives(html, &CatalogVocabulary::default());

        assert_eq!(text, "COMP SCI 310");
        assert_eq!(
            crate::interpreter::convert(&text).unwrap(),
            Some(crate::interpreter::syntax::prerequisite_tree::Node::new_text("COMP SCI 310"))
        );
    }

    #[test]
    fn other_vocabularies_can_be_used() {
        let vocabulary = CatalogVocabulary::new("subj_in", "crse_in");
        let html = r#"<A HREF="/schedule?subj_in=ECE&crse_in=276&schd_in=L">ECE 276</A>"#;

        assert_eq!(flatten_with_directives(html, &vocabulary), "__ECE|276__");
        assert_eq!(
            flatten_with_directives(html, &CatalogVocabulary::default()),
            "ECE 276"
        );
    }
}
