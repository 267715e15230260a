//! Forward-only rescheduling for manufacturing work orders.
//!
//! Given work orders with requested start/end times, work center
//! assignments, and precedence relationships, [`reflow()`] produces an
//! updated schedule in which every ordering and resource constraint holds,
//! plus the list of concrete timing changes made. Orders may be pushed
//! later than requested, never earlier: the pass restores feasibility
//! after a disturbance (a delay, a new dependency, a changed shift
//! calendar), it does not optimize.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `WorkOrder`, `WorkCenter`, `Shift`,
//!   `MaintenanceWindow`, `ManufacturingOrder`
//! - **`calendar`**: Availability arithmetic over weekly shift patterns and
//!   maintenance blackouts
//! - **`reflow`**: Dependency graph, topological sequencing, the constraint
//!   pipeline, and the orchestrating [`reflow()`] entry point
//! - **`validation`**: Optional pre-flight integrity checks (duplicate IDs,
//!   broken references, DAG cycles)
//! - **`error`**: The fatal [`ReflowError`] taxonomy
//!
//! # Boundaries
//!
//! The crate is data-shaped at both ends: callers pass in-memory
//! collections and receive in-memory results. Loading scenario data,
//! presenting changes, and persisting the output belong to callers.
//!
//! # Reference
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod calendar;
pub mod error;
pub mod models;
pub mod reflow;
pub mod validation;

pub use error::ReflowError;
pub use models::{MaintenanceWindow, ManufacturingOrder, Shift, WorkCenter, WorkOrder};
pub use reflow::{reflow, ReflowInput, ReflowOutput, ScheduleChange};
