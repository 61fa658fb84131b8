use crate::interpreter::operator::Gate;
use crate::interpreter::syntax::prerequisite_tree::Node;
use serde::Serialize;

/// The operands of a gate node, in the order they appear in the catalog prose.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GateData {
    #[serde(rename = "g")]
    pub(crate) gate: Gate,
    #[serde(rename = "o")]
    pub(crate) operands: Vec<Node>,
}

impl GateData {
    pub(crate) fn new(gate: Gate, operands: Vec<Node>) -> GateData {
        GateData { gate, operands }
    }

    pub fn gate(&self) -> Gate {
        self.gate
    }

    pub fn operands(&self) -> &[Node] {
        &self.operands
    }

    pub(crate) fn into_operands(self) -> Vec<Node> {
        self.operands
    }

    pub(super) fn node_name(&self) -> String {
        self.gate.node_name().into()
    }
}
