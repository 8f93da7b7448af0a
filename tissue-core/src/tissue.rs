use crate::{
    cell::{BoundaryCell, Cell, NodeCell},
    node::Node,
    types::{CellId, NodeId},
};
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// The boundary structure enclosing a tissue.
///
/// Its nodes live in the tissue's node arena; the membrane only records
/// which of them belong to it, in boundary order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Membrane {
    nodes: Vec<NodeId>,
}

impl Membrane {
    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }
}

/// An ordered collection of cells plus the membrane that surrounds them.
///
/// All nodes (cell nodes and membrane nodes) are stored in a single arena
/// and addressed by [`NodeId`]. The cell list and the membrane are only
/// handed out by shared reference, so force laws receiving `&mut Tissue`
/// can move and load nodes but cannot change the topology.
#[derive(Clone, Debug, Default)]
pub struct Tissue {
    nodes: Vec<Node>,
    cells: Vec<Cell>,
    membrane: Membrane,
}

/// Returns `count` points evenly spaced on a circle.
///
/// The first point sits at angle `phase` (radians, anticlockwise from +x).
pub fn circle_positions(centre: DVec2, radius: f64, count: usize, phase: f64) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let angle = phase + TAU * i as f64 / count as f64;
            centre + radius * DVec2::from_angle(angle)
        })
        .collect()
}

impl Tissue {
    /// Creates a tissue with no cells and a membrane through `membrane`.
    pub fn new(membrane: impl IntoIterator<Item = DVec2>) -> Self {
        let nodes: Vec<Node> = membrane.into_iter().map(Node::new).collect();
        let membrane = Membrane {
            nodes: (0..nodes.len()).collect(),
        };
        Self {
            nodes,
            cells: Vec::new(),
            membrane,
        }
    }

    /// Creates a tissue whose membrane is a regular polygon of `count`
    /// nodes on a circle of `radius` around `centre`.
    pub fn with_circular_membrane(centre: DVec2, radius: f64, count: usize) -> Self {
        Self::new(circle_positions(centre, radius, count, 0.0))
    }

    fn push_node(&mut self, position: DVec2) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(position));
        id
    }

    /// Appends a single-node cell at `position` and returns its id.
    pub fn add_node_cell(&mut self, position: DVec2) -> CellId {
        let node = self.push_node(position);
        let id = self.cells.len();
        self.cells.push(Cell::Node(NodeCell::new(node)));
        id
    }

    /// Appends a multi-node boundary cell and returns its id.
    pub fn add_boundary_cell(&mut self, positions: impl IntoIterator<Item = DVec2>) -> CellId {
        let nodes = positions
            .into_iter()
            .map(|p| self.push_node(p))
            .collect();
        let id = self.cells.len();
        self.cells.push(Cell::Boundary(BoundaryCell::new(nodes)));
        id
    }

    /// Appends `count` node cells evenly spaced on a ring around `centre`.
    ///
    /// ### Returns
    /// The ids of the new cells, in angular order starting at `phase`.
    pub fn add_ring_of_node_cells(
        &mut self,
        centre: DVec2,
        ring_radius: f64,
        count: usize,
        phase: f64,
    ) -> Vec<CellId> {
        circle_positions(centre, ring_radius, count, phase)
            .into_iter()
            .map(|p| self.add_node_cell(p))
            .collect()
    }

    /// Appends `count` node cells at uniformly random angles and radii
    /// within the annulus `inner..=outer` around `centre`.
    ///
    /// ### Panics
    /// Panics if `inner > outer` and `count > 0`.
    pub fn add_random_node_cells_in_annulus(
        &mut self,
        centre: DVec2,
        inner: f64,
        outer: f64,
        count: usize,
        rng: &mut impl Rng,
    ) -> Vec<CellId> {
        (0..count)
            .map(|_| {
                let angle = rng.random_range(0.0..TAU);
                let r = rng.random_range(inner..=outer);
                self.add_node_cell(centre + r * DVec2::from_angle(angle))
            })
            .collect()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// ### Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id]
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// ### Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// ### Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Mutable access to every node, for integrators.
    #[inline]
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    #[inline]
    pub fn membrane(&self) -> &Membrane {
        &self.membrane
    }

    /// Membrane nodes in boundary order.
    pub fn membrane_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.membrane.nodes.iter().map(|&id| &self.nodes[id])
    }

    /// Arithmetic mean of the membrane node positions.
    ///
    /// ### Returns
    /// `None` if the membrane has no nodes.
    pub fn membrane_centre(&self) -> Option<DVec2> {
        let count = self.membrane.nodes.len();
        if count == 0 {
            return None;
        }
        let sum: DVec2 = self.membrane_nodes().map(Node::position).sum();
        Some(sum / count as f64)
    }

    /// Adds `f` to the force accumulator of node `id`.
    ///
    /// ### Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    pub fn add_force(&mut self, id: NodeId, f: DVec2) {
        self.nodes[id].add_force_contribution(f);
    }

    /// Zeroes the force accumulator of every node.
    pub fn reset_forces(&mut self) {
        for node in &mut self.nodes {
            node.reset_force();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellKind;
    use approx::assert_abs_diff_eq;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn circular_membrane_is_centred() {
        let tissue = Tissue::with_circular_membrane(DVec2::new(3.0, -1.0), 20.0, 16);
        assert_eq!(tissue.membrane().nodes().len(), 16);

        let centre = tissue.membrane_centre().unwrap();
        assert_abs_diff_eq!(centre.x, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(centre.y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_membrane_has_no_centre() {
        let tissue = Tissue::new(Vec::new());
        assert!(tissue.membrane_centre().is_none());
    }

    #[test]
    fn cells_keep_insertion_order_and_own_distinct_nodes() {
        let mut tissue = Tissue::with_circular_membrane(DVec2::ZERO, 10.0, 4);
        let a = tissue.add_node_cell(DVec2::new(1.0, 0.0));
        let b = tissue.add_boundary_cell(vec![DVec2::new(0.0, 1.0), DVec2::new(0.0, 2.0)]);
        let c = tissue.add_node_cell(DVec2::new(2.0, 0.0));

        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(tissue.cells().len(), 3);
        assert_eq!(tissue.cell(b).kind(), CellKind::Boundary);
        // 4 membrane nodes + 1 + 2 + 1 cell nodes.
        assert_eq!(tissue.nodes().len(), 8);

        let node = tissue.cell(c).as_node_cell().unwrap().node();
        assert_eq!(tissue.node(node).position(), DVec2::new(2.0, 0.0));
    }

    #[test]
    fn ring_of_cells_is_evenly_spaced() {
        let mut tissue = Tissue::with_circular_membrane(DVec2::ZERO, 50.0, 8);
        let ids = tissue.add_ring_of_node_cells(DVec2::ZERO, 10.0, 4, 0.0);
        assert_eq!(ids.len(), 4);

        let positions: Vec<DVec2> = ids
            .iter()
            .map(|&id| {
                let node = tissue.cell(id).as_node_cell().unwrap().node();
                tissue.node(node).position()
            })
            .collect();
        assert_abs_diff_eq!(positions[1].x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(positions[1].y, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(positions[2].x, -10.0, epsilon = 1e-12);
        for p in positions {
            assert_abs_diff_eq!(p.length(), 10.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn random_cells_stay_inside_annulus() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut tissue = Tissue::with_circular_membrane(DVec2::ZERO, 50.0, 8);
        let ids = tissue.add_random_node_cells_in_annulus(DVec2::ZERO, 5.0, 8.0, 100, &mut rng);
        assert_eq!(ids.len(), 100);

        for id in ids {
            let node = tissue.cell(id).as_node_cell().unwrap().node();
            let r = tissue.node(node).position().length();
            assert!((5.0 - 1e-9..=8.0 + 1e-9).contains(&r), "r = {r}");
        }
    }

    #[test]
    #[should_panic]
    fn random_cells_reject_inverted_annulus() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut tissue = Tissue::with_circular_membrane(DVec2::ZERO, 50.0, 8);
        tissue.add_random_node_cells_in_annulus(DVec2::ZERO, 8.0, 5.0, 1, &mut rng);
    }

    #[test]
    fn add_force_and_reset_forces() {
        let mut tissue = Tissue::with_circular_membrane(DVec2::ZERO, 10.0, 4);
        let cell = tissue.add_node_cell(DVec2::new(1.0, 1.0));
        let node = tissue.cell(cell).as_node_cell().unwrap().node();

        tissue.add_force(node, DVec2::new(1.0, 0.0));
        tissue.add_force(node, DVec2::new(1.0, 0.0));
        assert_eq!(tissue.node(node).force(), DVec2::new(2.0, 0.0));

        tissue.reset_forces();
        assert!(tissue.nodes().iter().all(|n| n.force() == DVec2::ZERO));
    }
}
