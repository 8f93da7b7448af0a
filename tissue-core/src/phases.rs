//! Phases of one mechanical simulation step.
//!
//! The typical update loop looks like:
//! 1. [`reset_phase`] — every node's force accumulator is cleared.
//! 2. [`force_phase`] — each configured [`Force`] adds its contributions.
//! 3. [`integration_phase`] — nodes move along their accumulated force.

use crate::{config::SimulationConfig, error::ForceError, force::Force, tissue::Tissue};

/// Clears the force accumulator of every node in the tissue.
pub fn reset_phase(tissue: &mut Tissue) {
    tissue.reset_forces();
}

/// Applies every force law to the tissue, in order.
///
/// Stops at the first failing force. Forces earlier in the list have
/// already written their contributions at that point; the failing force
/// itself has written none.
///
/// ### Parameters
/// - `tissue` - The tissue whose node accumulators receive the forces.
/// - `forces` - Force laws to apply; each may update its own state.
pub fn force_phase(tissue: &mut Tissue, forces: &mut [Box<dyn Force>]) -> Result<(), ForceError> {
    for force in forces.iter_mut() {
        force.apply_tissue_forces(tissue)?;
    }
    Ok(())
}

/// Moves every node with the overdamped forward Euler rule.
///
/// `new_pos = old_pos + cfg.dt * force / cfg.damping`
///
/// Accumulators are left as they are so the caller can still inspect the
/// forces of this step.
pub fn integration_phase(tissue: &mut Tissue, cfg: &SimulationConfig) {
    let scale = cfg.dt / cfg.damping;
    for node in tissue.nodes_mut() {
        let pos = node.position() + node.force() * scale;
        node.set_position(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::force::ConstantRadialPressure;
    use glam::DVec2;

    #[derive(Debug)]
    struct Constant(DVec2);

    impl Force for Constant {
        fn apply_tissue_forces(&mut self, tissue: &mut Tissue) -> Result<(), ForceError> {
            for id in 0..tissue.nodes().len() {
                tissue.add_force(id, self.0);
            }
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Failing;

    impl Force for Failing {
        fn apply_tissue_forces(&mut self, _tissue: &mut Tissue) -> Result<(), ForceError> {
            Err(ForceError::EmptyMembrane)
        }
    }

    fn tissue_with_cell(pos: DVec2) -> (Tissue, usize) {
        let mut tissue = Tissue::with_circular_membrane(DVec2::ZERO, 50.0, 8);
        let cell = tissue.add_node_cell(pos);
        let node = tissue.cell(cell).as_node_cell().unwrap().node();
        (tissue, node)
    }

    #[test]
    fn force_phase_sums_contributions_of_all_forces() {
        let (mut tissue, node) = tissue_with_cell(DVec2::new(1.0, 1.0));
        let mut forces: Vec<Box<dyn Force>> = vec![
            Box::new(Constant(DVec2::new(1.0, 0.0))),
            Box::new(Constant(DVec2::new(0.0, 2.0))),
        ];

        force_phase(&mut tissue, &mut forces).unwrap();
        assert_eq!(tissue.node(node).force(), DVec2::new(1.0, 2.0));
    }

    #[test]
    fn force_phase_stops_at_first_error() {
        let (mut tissue, node) = tissue_with_cell(DVec2::new(1.0, 1.0));
        let mut forces: Vec<Box<dyn Force>> = vec![
            Box::new(Constant(DVec2::new(1.0, 0.0))),
            Box::new(Failing),
            Box::new(Constant(DVec2::new(5.0, 0.0))),
        ];

        assert_eq!(
            force_phase(&mut tissue, &mut forces),
            Err(ForceError::EmptyMembrane)
        );
        assert_eq!(tissue.node(node).force(), DVec2::new(1.0, 0.0));
    }

    #[test]
    fn integration_phase_moves_along_force() {
        let (mut tissue, node) = tissue_with_cell(DVec2::new(1.0, 1.0));
        tissue.add_force(node, DVec2::new(2.0, -4.0));

        let cfg = SimulationConfig {
            dt: 0.5,
            damping: 2.0,
            ..SimulationConfig::default()
        };
        integration_phase(&mut tissue, &cfg);

        assert_eq!(tissue.node(node).position(), DVec2::new(1.5, 0.0));
        // Force is kept for inspection.
        assert_eq!(tissue.node(node).force(), DVec2::new(2.0, -4.0));
    }

    #[test]
    fn reset_phase_clears_previous_step() {
        let (mut tissue, node) = tissue_with_cell(DVec2::new(10.0, 0.0));
        let mut forces: Vec<Box<dyn Force>> = vec![Box::new(ConstantRadialPressure::new(1.0, 0.5))];

        force_phase(&mut tissue, &mut forces).unwrap();
        let once = tissue.node(node).force();
        force_phase(&mut tissue, &mut forces).unwrap();
        assert_eq!(tissue.node(node).force(), once * 2.0);

        reset_phase(&mut tissue);
        force_phase(&mut tissue, &mut forces).unwrap();
        assert_eq!(tissue.node(node).force(), once);
    }
}
