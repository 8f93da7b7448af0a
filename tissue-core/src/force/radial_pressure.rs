//! Constant internal pressure pushing node cells away from the tissue centre.
//!
//! Each pass looks at the circle around the membrane centre. Node cells are
//! visited from nearest to farthest; every cell claims the arc its body
//! subtends as seen from the centre, and is pushed radially in proportion
//! to the arclength no nearer cell has claimed yet. Summed over the circle
//! the load is roughly `pressure * circumference`.

use crate::{
    angle_interval::AngleInterval,
    config::PressureConfig,
    error::{ConfigError, ForceError},
    force::Force,
    tissue::Tissue,
    types::{CellId, NodeId},
};
use glam::DVec2;

/// Lifecycle of a [`ConstantRadialPressure`].
///
/// The only transition is `Active -> PermanentlyDisabled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressureState {
    Active,
    /// A node cell came within two radii of the centre. The arc geometry
    /// no longer holds there, so the force stays off for good.
    PermanentlyDisabled,
}

#[derive(Clone, Debug)]
pub struct ConstantRadialPressure {
    pressure: f64,
    radius: f64,
    state: PressureState,
}

/// A node cell seen from the centre.
#[derive(Clone, Copy, Debug)]
struct RadialEntry {
    cell: CellId,
    node: NodeId,
    r: DVec2,
    rmag: f64,
}

impl ConstantRadialPressure {
    /// ### Parameters
    /// - `pressure` - Force per unit arclength; positive pushes outward.
    ///   Not checked here; a non-finite pressure surfaces as
    ///   [`ForceError::GeometryDegenerate`] on the first pass.
    /// - `radius` - Physical radius assumed for every node cell.
    ///
    /// Use [`ConstantRadialPressure::from_config`] for unchecked inputs.
    ///
    /// ### Panics
    /// In debug builds, panics if `radius` is not finite and positive. A
    /// non-positive radius gives empty footprints and therefore no force.
    pub fn new(pressure: f64, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius > 0.0,
            "cell radius must be finite and positive, got {radius}"
        );
        Self {
            pressure,
            radius,
            state: PressureState::Active,
        }
    }

    pub fn from_config(cfg: &PressureConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self::new(cfg.pressure, cfg.radius))
    }

    #[inline]
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn state(&self) -> PressureState {
        self.state
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.state == PressureState::PermanentlyDisabled
    }

    /// Collects every node cell with its offset from `centre`, in cell order.
    ///
    /// ### Returns
    /// `None` if some node cell lies closer than `2 * radius` to the centre.
    fn radial_entries(&self, tissue: &Tissue, centre: DVec2) -> Option<Vec<RadialEntry>> {
        let mut entries = Vec::with_capacity(tissue.cells().len());
        for (cell, c) in tissue.cells().iter().enumerate() {
            let Some(node_cell) = c.as_node_cell() else {
                continue;
            };
            let node = node_cell.node();
            let r = tissue.node(node).position() - centre;
            let rmag = r.length();
            if rmag < 2.0 * self.radius {
                log::warn!(
                    "cell {cell} is {rmag} from the tissue centre (limit {}); \
                     disabling radial pressure permanently",
                    2.0 * self.radius
                );
                return None;
            }
            entries.push(RadialEntry {
                cell,
                node,
                r,
                rmag,
            });
        }
        Some(entries)
    }

    /// Computes every contribution of one pass without touching the tissue.
    ///
    /// `entries` must already be sorted nearest first.
    fn compute_forces(
        &self,
        entries: &[RadialEntry],
    ) -> Result<Vec<(NodeId, DVec2)>, ForceError> {
        let mut coverage = AngleInterval::new();
        let mut forces = Vec::with_capacity(entries.len());

        for e in entries {
            if coverage.is_circle_complete() {
                break;
            }

            let theta = e.r.y.atan2(e.r.x);
            let sine = self.radius / (2.0 * e.rmag);
            if !(-1.0..=1.0).contains(&sine) {
                return Err(ForceError::GeometryDegenerate {
                    cell: e.cell,
                    detail: format!("asin argument {sine} out of domain (distance {})", e.rmag),
                });
            }
            let dtheta = sine.asin();

            let covered = coverage.get_unvisited_angle(theta - dtheta, theta + dtheta);
            let arc_length = e.rmag * covered;
            let force = self.pressure * arc_length * (e.r / e.rmag);
            if !force.is_finite() {
                return Err(ForceError::GeometryDegenerate {
                    cell: e.cell,
                    detail: format!("non-finite force {force}"),
                });
            }

            log::trace!(
                "cell {}: theta {theta:.6}, covered {covered:.6} rad, force {force}",
                e.cell
            );
            forces.push((e.node, force));
        }

        log::debug!(
            "radial pressure credited {} of {} cells, claimed {:.6} rad",
            forces.len(),
            entries.len(),
            coverage.claimed_measure()
        );
        Ok(forces)
    }
}

impl Force for ConstantRadialPressure {
    fn apply_tissue_forces(&mut self, tissue: &mut Tissue) -> Result<(), ForceError> {
        if self.is_disabled() {
            return Ok(());
        }

        let centre = tissue.membrane_centre().ok_or(ForceError::EmptyMembrane)?;
        let Some(mut entries) = self.radial_entries(tissue, centre) else {
            self.state = PressureState::PermanentlyDisabled;
            return Ok(());
        };

        // Stable: equal distances keep cell-list order.
        entries.sort_by(|a, b| a.rmag.total_cmp(&b.rmag));

        let forces = self.compute_forces(&entries)?;
        for (node, f) in forces {
            tissue.add_force(node, f);
        }
        Ok(())
    }
}
