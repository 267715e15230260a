//! Work order model.
//!
//! A work order is the unit of scheduling: one step of a manufacturing
//! order, executed on a single work center, with a requested time span and
//! the working duration it actually needs.
//!
//! # Time Representation
//!
//! `start_date` and `end_date` are absolute UTC instants. `duration_minutes`
//! counts *working* minutes on the owning work center's calendar, not the
//! wall-clock span. After scheduling, `end_date` always equals the
//! calendar-consumed end of `start_date`, never an independent value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A work order to be scheduled.
///
/// Supplied by the caller as a requested schedule; the reflow pipeline
/// replaces it (copy-on-write) as constraints are applied and emits the
/// final value in its output. Orders flagged `is_maintenance` represent
/// blackout facts rather than schedulable work and are never rescheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrder {
    /// Unique work order identifier.
    pub id: String,
    /// Human-readable work order number.
    pub number: String,
    /// Owning manufacturing order identifier.
    pub manufacturing_order_id: String,
    /// Work center this order runs on.
    pub work_center_id: String,
    /// Requested (or scheduled) start instant, UTC.
    pub start_date: DateTime<Utc>,
    /// Requested (or scheduled) end instant, UTC.
    pub end_date: DateTime<Utc>,
    /// Working minutes required on the work center's calendar.
    pub duration_minutes: i64,
    /// Whether this order is itself a maintenance blackout (immutable).
    pub is_maintenance: bool,
    /// Parent order ids; all must finish before this order may start.
    pub depends_on: Vec<String>,
}

impl WorkOrder {
    /// Creates a new work order with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number: String::new(),
            manufacturing_order_id: String::new(),
            work_center_id: String::new(),
            start_date: DateTime::UNIX_EPOCH,
            end_date: DateTime::UNIX_EPOCH,
            duration_minutes: 0,
            is_maintenance: false,
            depends_on: Vec::new(),
        }
    }

    /// Sets the work order number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the owning manufacturing order.
    pub fn with_manufacturing_order(mut self, id: impl Into<String>) -> Self {
        self.manufacturing_order_id = id.into();
        self
    }

    /// Sets the work center.
    pub fn with_work_center(mut self, id: impl Into<String>) -> Self {
        self.work_center_id = id.into();
        self
    }

    /// Sets the requested start instant.
    pub fn with_start(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = start;
        self
    }

    /// Sets the requested end instant.
    pub fn with_end(mut self, end: DateTime<Utc>) -> Self {
        self.end_date = end;
        self
    }

    /// Sets the working duration in minutes.
    pub fn with_duration_minutes(mut self, minutes: i64) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Marks this order as a maintenance blackout.
    pub fn maintenance(mut self) -> Self {
        self.is_maintenance = true;
        self
    }

    /// Adds a parent order this one depends on.
    pub fn with_dependency(mut self, parent_id: impl Into<String>) -> Self {
        self.depends_on.push(parent_id.into());
        self
    }

    /// Whether this order declares any dependencies.
    pub fn has_dependencies(&self) -> bool {
        !self.depends_on.is_empty()
    }
}
