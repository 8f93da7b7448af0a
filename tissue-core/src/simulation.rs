//! A minimal driver that advances a [`Tissue`] under a set of forces.

use crate::{
    config::SimulationConfig,
    error::{ConfigError, ForceError},
    force::{ConstantRadialPressure, Force},
    phases,
    tissue::Tissue,
};

/// Owns the tissue, the force laws acting on it and the step counter.
///
/// One [`Simulation::step`] runs [`phases::reset_phase`],
/// [`phases::force_phase`] and [`phases::integration_phase`] in that
/// order. A step whose force phase fails moves nothing and does not
/// advance the clock.
#[derive(Debug)]
pub struct Simulation {
    tissue: Tissue,
    forces: Vec<Box<dyn Force>>,
    cfg: SimulationConfig,
    time: f64,
    steps: u64,
}

impl Simulation {
    /// Creates a simulation with no forces attached.
    pub fn new(tissue: Tissue, cfg: SimulationConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            tissue,
            forces: Vec::new(),
            cfg,
            time: 0.0,
            steps: 0,
        })
    }

    /// Creates a simulation driven by a [`ConstantRadialPressure`] built
    /// from `cfg.pressure`.
    pub fn with_radial_pressure(tissue: Tissue, cfg: SimulationConfig) -> Result<Self, ConfigError> {
        let pressure = ConstantRadialPressure::from_config(&cfg.pressure)?;
        Ok(Self::new(tissue, cfg)?.with_force(pressure))
    }

    /// Appends a force law. Forces are applied in the order added.
    pub fn with_force(mut self, force: impl Force + 'static) -> Self {
        self.forces.push(Box::new(force));
        self
    }

    pub fn add_force(&mut self, force: Box<dyn Force>) {
        self.forces.push(force);
    }

    /// Advances the tissue by one time step.
    pub fn step(&mut self) -> Result<(), ForceError> {
        phases::reset_phase(&mut self.tissue);
        phases::force_phase(&mut self.tissue, &mut self.forces)?;
        phases::integration_phase(&mut self.tissue, &self.cfg);

        self.steps += 1;
        self.time += self.cfg.dt;
        Ok(())
    }

    /// Runs `steps` steps, stopping at the first failure.
    pub fn run(&mut self, steps: u64) -> Result<(), ForceError> {
        for _ in 0..steps {
            self.step().inspect_err(|e| {
                log::error!("step {} failed at t = {}: {e}", self.steps, self.time);
            })?;
        }
        log::debug!("ran {steps} steps, t = {}", self.time);
        Ok(())
    }

    #[inline]
    pub fn tissue(&self) -> &Tissue {
        &self.tissue
    }

    /// Mutable tissue access between steps, e.g. for division or death.
    #[inline]
    pub fn tissue_mut(&mut self) -> &mut Tissue {
        &mut self.tissue
    }

    #[inline]
    pub fn forces(&self) -> &[Box<dyn Force>] {
        &self.forces
    }

    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.cfg
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
