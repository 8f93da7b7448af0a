/// Identifier for a node in a [`crate::tissue::Tissue`].
///
/// This is an index into the tissue's node arena, and is only meaningful
/// within the lifetime of a given `Tissue` instance.
pub type NodeId = usize;

/// Identifier for a cell in a [`crate::tissue::Tissue`].
///
/// Cell ids follow the order of the tissue's cell list, which is also the
/// tie-break order used by the force laws.
pub type CellId = usize;
