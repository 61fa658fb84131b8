use crate::interpreter::syntax::course::CourseReference;
use crate::interpreter::syntax::gate_data::GateData;

/// If a method is not implemented, the default implementation will continue in a pre-order
/// traversal of the tree.
pub(crate) trait SyntaxVisitor<'a>: Sized {
    fn visit_text(&mut self, _text: &'a str) {}
    fn visit_course(&mut self, _course: &'a CourseReference) {}
    fn visit_gate(&mut self, data: &'a GateData) {
        walk_gate(self, data)
    }
}

pub(crate) fn walk_gate<'a>(visitor: &mut impl SyntaxVisitor<'a>, data: &'a GateData) {
    data.operands
        .iter()
        .for_each(|node| node.accept(visitor));
}
