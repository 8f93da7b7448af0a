use glam::DVec2;

/// A mechanical point of the tissue.
///
/// A node carries its position and the force accumulated on it during the
/// current simulation step. Force laws only ever *add* into the
/// accumulator; clearing it is the driver's job (see
/// [`crate::phases::reset_phase`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    position: DVec2,
    force: DVec2,
}

impl Node {
    pub fn new(position: DVec2) -> Self {
        Self {
            position,
            force: DVec2::ZERO,
        }
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: DVec2) {
        self.position = position;
    }

    /// Total force accumulated since the last reset.
    #[inline]
    pub fn force(&self) -> DVec2 {
        self.force
    }

    /// Adds `f` to the accumulated force.
    ///
    /// Accumulation is plain vector addition, so contributions from several
    /// force laws may arrive in any order.
    #[inline]
    pub fn add_force_contribution(&mut self, f: DVec2) {
        self.force += f;
    }

    #[inline]
    pub fn reset_force(&mut self) {
        self.force = DVec2::ZERO;
    }
}
