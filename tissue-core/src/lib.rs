//! Core 2-D mechanical tissue simulation library.
//!
//! Main components:
//! - [`node`] — mechanical points and their force accumulators.
//! - [`cell`] — single-node and boundary cells.
//! - [`tissue`] — the ordered cell list, node arena and membrane.
//! - [`angle_interval`] — claimed-arc bookkeeping on the circle.
//! - [`force`] — the force-law interface and the radial pressure law.
//! - [`phases`] — reset, force and integration phases of one step.
//! - [`simulation`] — a minimal driver running the phases.
//! - [`config`] — force and time-stepping parameters.
//! - [`error`] — force and configuration errors.
//! - [`types`] — shared type aliases and IDs.

pub mod angle_interval;
pub mod cell;
pub mod config;
pub mod error;
pub mod force;
pub mod node;
pub mod phases;
pub mod simulation;
pub mod tissue;
pub mod types;
