use crate::types::NodeId;

/// Discriminant of a [`Cell`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Node,
    Boundary,
}

/// A cell modelled as a single mechanical point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeCell {
    node: NodeId,
}

impl NodeCell {
    pub fn new(node: NodeId) -> Self {
        Self { node }
    }

    #[inline]
    pub fn node(&self) -> NodeId {
        self.node
    }
}

/// A multi-node cell outlining a boundary shape.
///
/// Force laws that only understand point cells skip these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundaryCell {
    nodes: Vec<NodeId>,
}

impl BoundaryCell {
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Node(NodeCell),
    Boundary(BoundaryCell),
}

impl Cell {
    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Node(_) => CellKind::Node,
            Cell::Boundary(_) => CellKind::Boundary,
        }
    }

    /// Returns the single-node view of this cell, if it is one.
    #[inline]
    pub fn as_node_cell(&self) -> Option<&NodeCell> {
        match self {
            Cell::Node(c) => Some(c),
            Cell::Boundary(_) => None,
        }
    }

    /// All nodes owned by this cell, in storage order.
    pub fn nodes(&self) -> &[NodeId] {
        match self {
            Cell::Node(c) => std::slice::from_ref(&c.node),
            Cell::Boundary(c) => c.nodes(),
        }
    }
}
