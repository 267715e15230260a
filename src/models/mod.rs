//! Scheduling domain models.
//!
//! Core data types for the reflow problem: work orders (the unit of
//! scheduling), work centers (resources with shift calendars and
//! maintenance blackouts), and manufacturing orders (the grouping the
//! engine accepts but does not yet consult).
//!
//! All timestamps are absolute UTC instants; durations are working minutes
//! on a work center's calendar.

mod manufacturing_order;
mod work_center;
mod work_order;

pub use manufacturing_order::ManufacturingOrder;
pub use work_center::{MaintenanceWindow, Shift, WorkCenter};
pub use work_order::WorkOrder;
