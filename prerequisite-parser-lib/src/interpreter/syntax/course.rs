use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A catalog course, e.g. `CIS 310`.
///
/// Both parts are trimmed and upper-cased on construction. Serializes as the pair
/// `["CIS", "310"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct CourseReference {
    subject_code: String,
    course_number: String,
}

impl CourseReference {
    pub fn new(subject_code: &str, course_number: &str) -> CourseReference {
        CourseReference {
            subject_code: subject_code.trim().to_uppercase(),
            course_number: course_number.trim().to_uppercase(),
        }
    }

    /// The subject code that precedes the course number, e.g. `CIS` in `CIS 310`.
    pub fn subject_code(&self) -> &str {
        &self.subject_code
    }

    /// The number that follows the subject code, e.g. `310` in `CIS 310`.
    pub fn course_number(&self) -> &str {
        &self.course_number
    }
}

impl From<(String, String)> for CourseReference {
    fn from((subject_code, course_number): (String, String)) -> Self {
        CourseReference::new(&subject_code, &course_number)
    }
}

impl From<CourseReference> for (String, String) {
    fn from(course: CourseReference) -> Self {
        (course.subject_code, course.course_number)
    }
}

impl Display for CourseReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.subject_code, self.course_number)
    }
}
