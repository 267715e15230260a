//! Forward-only reflow engine.
//!
//! Recomputes a feasible schedule from a requested one after a disturbance
//! (a delay, a new dependency, a changed shift calendar). The pass is a
//! feasibility/consistency pass, not an optimizer: it never reorders work
//! for efficiency and never moves an order earlier than requested.
//!
//! # Pipeline
//!
//! 1. [`graph`]: derive parent/child adjacency from declared dependencies.
//! 2. [`sequence`]: topologically order the work orders (Kahn's algorithm),
//!    detecting dangling references and cycles.
//! 3. [`constraints`]: for each order in sequence, push its timing forward
//!    through the dependency, resource-conflict, shift-alignment, and
//!    calendar-end constraints.
//! 4. [`engine`]: fold the pipeline over the sequence and emit the updated
//!    schedule plus the list of changes.

pub mod constraints;
pub mod engine;
pub mod graph;
pub mod sequence;

pub use constraints::apply_constraints;
pub use engine::{reflow, ReflowInput, ReflowOutput, ScheduleChange};
pub use graph::DependencyGraph;
pub use sequence::topological_order;
