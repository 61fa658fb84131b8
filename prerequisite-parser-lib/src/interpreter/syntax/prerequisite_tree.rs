use crate::error::ParseError;
use crate::interpreter::operator::Gate;
use crate::interpreter::syntax::course::CourseReference;
use crate::interpreter::syntax::gate_data::GateData;
use crate::interpreter::syntax::syntax_visitor::{walk_gate, SyntaxVisitor};
use crate::interpreter::token::Term;
use anyhow::Result;
use itertools::Itertools;
use ptree::{write_tree, TreeBuilder};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A prerequisite (or corequisite) requirement.
///
/// Serializes to the compact catalog shape: text as a string, courses as
/// `["CIS", "310"]` and gates as `{"g": "&", "o": [...]}`. Deserialized gates with a
/// single operand collapse to that operand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Node {
    // Terminal symbols (leaves)
    /// A requirement that could not be recognized as a course, e.g. a placement test.
    Text(String),
    Course(CourseReference),
    // Non-terminal symbols (non-leaves)
    Gate(GateData),
}

impl Node {
    pub fn new_text(text: impl Into<String>) -> Node {
        Node::Text(text.into())
    }

    pub fn new_course(subject_code: &str, course_number: &str) -> Node {
        Node::Course(CourseReference::new(subject_code, course_number))
    }

    /// Creates a gate node. Gates are expected to have at least two operands, see
    /// [`Node::new_collapsed`] for a constructor that upholds that.
    pub fn new_gate(gate: Gate, operands: Vec<Node>) -> Node {
        Node::Gate(GateData::new(gate, operands))
    }

    /// Creates a gate node, unless there is only a single operand, in which case that
    /// operand is returned as it is. Returns nothing when there are no operands.
    pub fn new_collapsed(gate: Gate, mut operands: Vec<Node>) -> Option<Node> {
        match operands.len() {
            0 => None,
            1 => operands.pop(),
            _ => Some(Node::new_gate(gate, operands)),
        }
    }

    pub fn gate(&self) -> Option<Gate> {
        match self {
            Node::Gate(data) => Some(data.gate),
            Node::Text(_) | Node::Course(_) => None,
        }
    }

    /// The number of direct children of this node; zero for leaves.
    pub fn operand_count(&self) -> usize {
        match self {
            Node::Gate(data) => data.operands.len(),
            Node::Text(_) | Node::Course(_) => 0,
        }
    }

    pub fn as_course(&self) -> Option<&CourseReference> {
        match self {
            Node::Course(course) => Some(course),
            Node::Text(_) | Node::Gate(_) => None,
        }
    }

    /// All courses mentioned anywhere in the tree, in order of appearance.
    pub fn course_references(&self) -> Vec<&CourseReference> {
        let mut visitor = CourseCollectorVisitor { courses: vec![] };
        self.accept(&mut visitor);
        visitor.courses
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept<'a>(&'a self, visitor: &mut impl SyntaxVisitor<'a>) {
        match self {
            Node::Text(text) => visitor.visit_text(text),
            Node::Course(course) => visitor.visit_course(course),
            Node::Gate(data) => visitor.visit_gate(data),
        }
    }

    /// Renders the tree on a single line with explicit parentheses around nested gates,
    /// e.g. `CIS 310 & (CIS 350 | "Mathematics Placement 080")`.
    pub fn to_compact_string(&self) -> String {
        self.build_compact(false)
    }

    fn build_compact(&self, nested: bool) -> String {
        match self {
            Node::Text(text) => format!("{:?}", text),
            Node::Course(course) => course.to_string(),
            Node::Gate(data) => {
                let interior = data
                    .operands
                    .iter()
                    .map(|operand| operand.build_compact(true))
                    .join(&format!(" {} ", data.gate.symbol()));
                if nested {
                    format!("({})", interior)
                } else {
                    interior
                }
            }
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("prerequisites".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

/// The wire shape of a node, before gates are checked for their operand count.
#[derive(Deserialize)]
#[serde(untagged)]
enum SerializedNode {
    Text(String),
    Course(CourseReference),
    Gate {
        g: Gate,
        o: Vec<Node>,
    },
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match SerializedNode::deserialize(deserializer)? {
            SerializedNode::Text(text) => Ok(Node::Text(text)),
            SerializedNode::Course(course) => Ok(Node::Course(course)),
            SerializedNode::Gate { g, o } => Node::new_collapsed(g, o).ok_or_else(|| {
                serde::de::Error::custom(format!("{} gate without operands", g.node_name()))
            }),
        }
    }
}

/// Accumulates the operands of one nesting level.
#[derive(Default)]
struct PartialGate {
    gate: Option<Gate>,
    operands: Vec<Node>,
}

impl PartialGate {
    fn finish(mut self) -> Result<Option<Node>> {
        match self.gate {
            Some(gate) => Ok(Node::new_collapsed(gate, self.operands)),
            None if self.operands.len() > 1 => {
                let operands = self.operands.iter().map(Node::to_compact_string).collect();
                let error = ParseError::MissingConnective { operands };
                log::warn!("{}", error);
                Err(error.into())
            }
            None => Ok(self.operands.pop()),
        }
    }
}

/// Builds a prerequisite tree from terms that have been grouped by operator.
///
/// The first operator found at a nesting level decides the gate of that level. Should a
/// different operator show up later at the same level, everything before it becomes the
/// first operand of a new gate of that operator, i.e. `a and b or c` reads as
/// `(a and b) or c`.
///
/// # Arguments
///
/// * `terms`: Phrases, operators and groups, in the order they appear in the prose.
///
/// returns: The root of the tree, or nothing if there were no operands at all.
///
/// # Errors
///
/// [`ParseError::MissingConnective`] if a level holds several operands but no operator.
pub fn new_tree(terms: Vec<Term>) -> Result<Option<Node>> {
    let mut current = PartialGate::default();

    for term in terms {
        match term {
            Term::Group(inner_terms) => {
                if let Some(node) = new_tree(inner_terms)? {
                    current.operands.push(node);
                }
            }
            Term::Phrase(text) => current.operands.push(Node::Text(text)),
            Term::Operator(gate) => match current.gate {
                None => current.gate = Some(gate),
                Some(current_gate) if current_gate == gate => {}
                Some(_) => {
                    let built = current.finish()?;
                    current = PartialGate {
                        gate: Some(gate),
                        operands: built.into_iter().collect(),
                    };
                }
            },
        }
    }

    current.finish()
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl<'a> SyntaxVisitor<'a> for TreeBuilderVisitor {
    fn visit_text(&mut self, text: &'a str) {
        self.builder.add_empty_child(format!("{:?}", text));
    }
    fn visit_course(&mut self, course: &'a CourseReference) {
        self.builder.add_empty_child(course.to_string());
    }
    fn visit_gate(&mut self, data: &'a GateData) {
        self.builder.begin_child(data.node_name());
        walk_gate(self, data);
        self.builder.end_child();
    }
}

struct CourseCollectorVisitor<'a> {
    courses: Vec<&'a CourseReference>,
}

impl<'a> SyntaxVisitor<'a> for CourseCollectorVisitor<'a> {
    fn visit_course(&mut self, course: &'a CourseReference) {
        self.courses.push(course);
    }
}
