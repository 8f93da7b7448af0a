//! Force laws acting on the nodes of a [`Tissue`].
//!
//! Every force law implements [`Force`]. The driver calls each configured
//! force once per simulation step; contributions add into the node
//! accumulators, so the order across *different* forces does not change
//! the summed result.

use crate::{error::ForceError, tissue::Tissue};
use std::fmt::Debug;

pub mod radial_pressure;

pub use radial_pressure::{ConstantRadialPressure, PressureState};

/// A force law that loads the nodes of a tissue for one step.
///
/// Implementations may read every node position and add into any node's
/// force accumulator. They never see the cell list or membrane mutably, so
/// they cannot change the tissue's topology. `&mut self` lets a force keep
/// state between steps; callers sharing one instance across threads have
/// to serialise access to it themselves.
///
/// A call that returns an error must leave every accumulator untouched.
pub trait Force: Debug {
    fn apply_tissue_forces(&mut self, tissue: &mut Tissue) -> Result<(), ForceError>;
}
