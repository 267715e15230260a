//! Error taxonomy for reflow runs.
//!
//! Every variant is fatal to the current run: the engine either returns a
//! complete updated schedule or one blocking condition, never partial output.
//! Recoverable situations (an order already satisfying a constraint, zero
//! duration, zero-length gaps) are handled as no-ops inside the engine and
//! never surface here.

use thiserror::Error;

/// A condition that aborts a reflow run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflowError {
    /// A work order's dependency list names an order that was not provided.
    #[error("work order '{0}' is referenced as a dependency but was not provided")]
    DanglingReference(String),

    /// The dependency graph contains a cycle, so no processing order covering
    /// every work order exists.
    #[error("circular dependency detected among the supplied work orders")]
    CircularDependency,

    /// A work center has no shift on any day of the week, so no instant is
    /// ever available for scheduling on it.
    #[error("work center '{0}' has no shifts defined for any day of the week")]
    UnconfiguredCalendar(String),

    /// A work order references a work center that was not provided.
    #[error("work center '{0}' was not provided")]
    MissingResource(String),
}
