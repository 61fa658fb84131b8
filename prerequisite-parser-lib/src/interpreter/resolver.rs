use crate::interpreter::syntax::course::CourseReference;
use crate::interpreter::syntax::gate_data::GateData;
use crate::interpreter::syntax::prerequisite_tree::Node;

/// Replaces every text leaf that consists of a single course directive with the course
/// it refers to. All other leaves, and the shape of the tree, are left untouched.
///
/// Resolving a tree twice gives the same result as resolving it once.
///
/// # Examples
///
/// ```
/// use prerequisite_parser::interpreter::resolver::resolve_directives;
/// use prerequisite_parser::interpreter::syntax::prerequisite_tree::Node;
///
/// let resolved = resolve_directives(Node::new_text("__CIS|310__"));
/// assert_eq!(resolved, Node::new_course("CIS", "310"));
/// ```
pub fn resolve_directives(node: Node) -> Node {
    match node {
        Node::Text(text) => match CourseReference::from_directive(&text) {
            Some(course) => Node::Course(course),
            None => Node::Text(text),
        },
        Node::Course(_) => node,
        Node::Gate(data) => {
            let gate = data.gate();
            let operands = data
                .into_operands()
                .into_iter()
                .map(resolve_directives)
                .collect();
            Node::Gate(GateData::new(gate, operands))
        }
    }
}
