pub mod course;
pub mod gate_data;
pub mod prerequisite_tree;
pub(crate) mod syntax_visitor;
