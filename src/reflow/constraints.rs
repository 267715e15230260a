//! Constraint pipeline.
//!
//! Applies four ordered constraints to a single work order, each of which
//! may only delay it, never advance it:
//!
//! 1. **Dependency**: start no earlier than the latest parent end.
//! 2. **Resource conflict**: start no earlier than the latest finalized end
//!    on the same work center.
//! 3. **Shift alignment**: snap the start into an active shift window.
//! 4. **Calendar end**: recompute the authoritative end by consuming the
//!    working duration through shifts and maintenance windows.
//!
//! Stages 1 and 2 recompute the end as a raw wall-clock offset; stage 4
//! supersedes it with the calendar-consumed end.
//!
//! # Resource-Conflict Approximation
//!
//! Stage 2 only consults orders already finalized earlier in the fixed
//! processing sequence and pushes past the latest known end, instead of
//! solving interval overlap across the whole set. This is sufficient to
//! avoid overlap because scheduling is strictly forward and serial per work
//! center; orders processed later are never reconsidered.

use std::collections::HashMap;

use chrono::Duration;

use crate::calendar;
use crate::error::ReflowError;
use crate::models::{WorkCenter, WorkOrder};

/// Applies the full constraint pipeline to one work order.
///
/// `finalized` holds the orders already processed earlier in the sequence;
/// the input order is never mutated, a rescheduled copy is returned.
/// Maintenance orders represent fixed blackout facts and pass through
/// unchanged.
///
/// # Errors
///
/// - [`ReflowError::MissingResource`] when the order's work center is not
///   in `work_centers`.
/// - [`ReflowError::UnconfiguredCalendar`] when the work center has no
///   shift on any day of the week.
/// - [`ReflowError::DanglingReference`] when a declared parent is absent
///   from `finalized` (unreachable under correct sequencing).
pub fn apply_constraints(
    order: &WorkOrder,
    finalized: &HashMap<String, WorkOrder>,
    work_centers: &HashMap<String, WorkCenter>,
) -> Result<WorkOrder, ReflowError> {
    if order.is_maintenance {
        return Ok(order.clone());
    }

    let work_center = work_centers
        .get(&order.work_center_id)
        .ok_or_else(|| ReflowError::MissingResource(order.work_center_id.clone()))?;

    let scheduled = push_past_dependencies(order.clone(), finalized)?;
    let scheduled = push_past_resource_conflicts(scheduled, finalized);
    let scheduled = align_start_to_shift(scheduled, work_center)?;
    finalize_end_on_calendar(scheduled, work_center)
}

/// Stage 1: start no earlier than the latest parent end.
///
/// The end is recomputed as a wall-clock offset; stage 4 makes it
/// calendar-accurate.
fn push_past_dependencies(
    mut order: WorkOrder,
    finalized: &HashMap<String, WorkOrder>,
) -> Result<WorkOrder, ReflowError> {
    if order.depends_on.is_empty() {
        return Ok(order);
    }

    let mut latest_parent_end = order.start_date;
    for parent_id in &order.depends_on {
        let parent = finalized
            .get(parent_id)
            .ok_or_else(|| ReflowError::DanglingReference(parent_id.clone()))?;
        latest_parent_end = latest_parent_end.max(parent.end_date);
    }

    if order.start_date >= latest_parent_end {
        return Ok(order);
    }

    order.end_date = latest_parent_end + Duration::minutes(order.duration_minutes);
    order.start_date = latest_parent_end;
    Ok(order)
}

/// Stage 2: start no earlier than the latest finalized end on the same
/// work center.
fn push_past_resource_conflicts(
    mut order: WorkOrder,
    finalized: &HashMap<String, WorkOrder>,
) -> WorkOrder {
    let latest_end = finalized
        .values()
        .filter(|other| other.work_center_id == order.work_center_id)
        .map(|other| other.end_date)
        .max();

    let Some(latest_end) = latest_end else {
        return order;
    };
    if order.start_date >= latest_end {
        return order;
    }

    order.end_date = latest_end + Duration::minutes(order.duration_minutes);
    order.start_date = latest_end;
    order
}

/// Stage 3: snap the start into an active shift window.
fn align_start_to_shift(
    mut order: WorkOrder,
    work_center: &WorkCenter,
) -> Result<WorkOrder, ReflowError> {
    order.start_date = calendar::next_shift_start(order.start_date, &work_center.shifts)
        .ok_or_else(|| ReflowError::UnconfiguredCalendar(work_center.id.clone()))?;
    Ok(order)
}

/// Stage 4: recompute the authoritative end through the calendar.
fn finalize_end_on_calendar(
    mut order: WorkOrder,
    work_center: &WorkCenter,
) -> Result<WorkOrder, ReflowError> {
    order.end_date = calendar::end_after_working_minutes(
        order.start_date,
        order.duration_minutes,
        &work_center.shifts,
        &work_center.maintenance_windows,
    )
    .ok_or_else(|| ReflowError::UnconfiguredCalendar(work_center.id.clone()))?;
    Ok(order)
}
