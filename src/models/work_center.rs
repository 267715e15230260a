//! Work center model.
//!
//! A work center is a schedulable resource (machine, line, cell) that hosts
//! one work order at a time. Its availability is governed by a recurring
//! weekly shift pattern plus one-off maintenance blackout windows.
//!
//! # Precedence
//!
//! Maintenance windows override shifts. An instant is available iff it falls
//! inside the day's shift window AND outside every maintenance window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recurring weekly availability window.
///
/// Keyed by day of week (0 = Sunday .. 6 = Saturday), with whole-hour UTC
/// bounds forming the half-open interval `[start_hour, end_hour)`.
/// When a work center lists several shifts for the same day, only the first
/// is consulted (first-match semantics; see `validation` for detection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Day of week (0 = Sunday .. 6 = Saturday).
    pub day_of_week: u32,
    /// Shift start hour (UTC, inclusive).
    pub start_hour: u32,
    /// Shift end hour (UTC, exclusive). May be 24 for end-of-day.
    pub end_hour: u32,
}

impl Shift {
    /// Creates a new shift.
    pub fn new(day_of_week: u32, start_hour: u32, end_hour: u32) -> Self {
        Self {
            day_of_week,
            start_hour,
            end_hour,
        }
    }
}

/// An absolute, one-off blackout interval `[start_date, end_date)`.
///
/// Applies only to work orders scheduled on the owning work center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceWindow {
    /// Blackout start (inclusive).
    pub start_date: DateTime<Utc>,
    /// Blackout end (exclusive).
    pub end_date: DateTime<Utc>,
    /// Optional human-readable reason.
    pub reason: Option<String>,
}

impl MaintenanceWindow {
    /// Creates a new maintenance window.
    pub fn new(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            start_date,
            end_date,
            reason: None,
        }
    }

    /// Sets the reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Whether an instant falls within this window.
    #[inline]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start_date && instant < self.end_date
    }
}

/// A work center: a resource with a weekly shift calendar and blackouts.
///
/// Read-only reference data for the duration of a reflow run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCenter {
    /// Unique work center identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Recurring weekly availability windows.
    pub shifts: Vec<Shift>,
    /// One-off blackout intervals.
    pub maintenance_windows: Vec<MaintenanceWindow>,
}

impl WorkCenter {
    /// Creates a new work center with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            shifts: Vec::new(),
            maintenance_windows: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a shift for a day of week.
    pub fn with_shift(mut self, day_of_week: u32, start_hour: u32, end_hour: u32) -> Self {
        self.shifts.push(Shift::new(day_of_week, start_hour, end_hour));
        self
    }

    /// Adds the same shift hours for Monday through Friday.
    pub fn with_weekday_shifts(mut self, start_hour: u32, end_hour: u32) -> Self {
        for day in 1..=5 {
            self.shifts.push(Shift::new(day, start_hour, end_hour));
        }
        self
    }

    /// Adds a maintenance window.
    pub fn with_maintenance(mut self, window: MaintenanceWindow) -> Self {
        self.maintenance_windows.push(window);
        self
    }
}
