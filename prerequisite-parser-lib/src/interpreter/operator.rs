use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;

/// A boolean connective joining the operands of a prerequisite gate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    #[serde(rename = "&")]
    And,
    #[serde(rename = "|")]
    Or,
}

impl Gate {
    /// Recognizes the connective words used in catalog prose, ignoring case.
    pub fn from_word(word: &str) -> Option<Gate> {
        if word.eq_ignore_ascii_case("and") {
            Some(Gate::And)
        } else if word.eq_ignore_ascii_case("or") {
            Some(Gate::Or)
        } else {
            None
        }
    }

    /// The lowercase word this gate is written as in prose.
    pub fn word(&self) -> &'static str {
        match self {
            Gate::And => "and",
            Gate::Or => "or",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Gate::And => "&",
            Gate::Or => "|",
        }
    }

    pub(crate) fn node_name(&self) -> &'static str {
        match self {
            Gate::And => "AND",
            Gate::Or => "OR",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
