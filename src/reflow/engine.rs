//! Reflow orchestrator.
//!
//! Wires the pieces together: build the dependency graph, sequence the work
//! orders topologically, then fold the constraint pipeline over the
//! sequence, accumulating finalized orders. Each order sees only results
//! processed before it, which encodes the single forward pass.
//!
//! The engine is a pure function of its input: identical inputs always
//! produce identical output, including tie-break order. A run owns
//! everything it touches, so independent calls are safe from independent
//! threads.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ReflowError;
use crate::models::{ManufacturingOrder, WorkCenter, WorkOrder};

use super::constraints::apply_constraints;
use super::graph::DependencyGraph;
use super::sequence::topological_order;

/// Input boundary of a reflow run.
///
/// Manufacturing orders are accepted but not yet consulted; they are
/// reserved for due-date-aware constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReflowInput {
    /// Work orders with their requested schedules.
    pub work_orders: Vec<WorkOrder>,
    /// Work centers referenced by the work orders.
    pub work_centers: Vec<WorkCenter>,
    /// Manufacturing orders owning the work orders.
    pub manufacturing_orders: Vec<ManufacturingOrder>,
}

impl ReflowInput {
    /// Creates an input set without manufacturing orders.
    pub fn new(work_orders: Vec<WorkOrder>, work_centers: Vec<WorkCenter>) -> Self {
        Self {
            work_orders,
            work_centers,
            manufacturing_orders: Vec::new(),
        }
    }

    /// Sets the manufacturing orders.
    pub fn with_manufacturing_orders(mut self, orders: Vec<ManufacturingOrder>) -> Self {
        self.manufacturing_orders = orders;
        self
    }
}

/// Output of a reflow run: every input order (scheduled or untouched) plus
/// the timing changes actually made, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReflowOutput {
    /// The complete updated work order set.
    pub updated_work_orders: Vec<WorkOrder>,
    /// One change record per order whose timing moved.
    pub changes: Vec<ScheduleChange>,
}

/// An audit record of one work order's timing change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleChange {
    /// The rescheduled work order.
    pub work_order_id: String,
    /// Start before scheduling.
    pub previous_start: DateTime<Utc>,
    /// End before scheduling.
    pub previous_end: DateTime<Utc>,
    /// Start after scheduling.
    pub new_start: DateTime<Utc>,
    /// End after scheduling.
    pub new_end: DateTime<Utc>,
}

/// Recomputes a consistent, feasible schedule for a set of work orders.
///
/// Forward-only: an order may be pushed later than requested, never
/// earlier. The run either fully succeeds with a complete updated schedule
/// or fails with one blocking condition and no partial output.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use reflow_engine::{reflow, ReflowInput, WorkCenter, WorkOrder};
///
/// // 2024-01-01 is a Monday; the mill runs 08:00-17:00 on weekdays.
/// let mill = WorkCenter::new("mill").with_weekday_shifts(8, 17);
/// let order = WorkOrder::new("wo-1")
///     .with_work_center("mill")
///     .with_start(Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap())
///     .with_duration_minutes(60);
///
/// let output = reflow(&ReflowInput::new(vec![order], vec![mill])).unwrap();
/// let scheduled = &output.updated_work_orders[0];
/// assert_eq!(scheduled.start_date, Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());
/// assert_eq!(scheduled.end_date, Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
/// assert_eq!(output.changes.len(), 1);
/// ```
///
/// # Errors
///
/// Any [`ReflowError`] aborts the whole run; the caller corrects the input
/// and retries.
pub fn reflow(input: &ReflowInput) -> Result<ReflowOutput, ReflowError> {
    let graph = DependencyGraph::build(&input.work_orders);
    let sequence = topological_order(&graph, &input.work_orders)?;

    debug!(
        work_orders = input.work_orders.len(),
        work_centers = input.work_centers.len(),
        "starting reflow pass"
    );

    let work_centers: HashMap<String, WorkCenter> = input
        .work_centers
        .iter()
        .map(|center| (center.id.clone(), center.clone()))
        .collect();

    let mut finalized: HashMap<String, WorkOrder> =
        HashMap::with_capacity(input.work_orders.len());
    let mut updated = Vec::with_capacity(input.work_orders.len());
    let mut changes = Vec::new();

    for order in sequence {
        let scheduled = apply_constraints(order, &finalized, &work_centers)?;

        if scheduled.start_date != order.start_date || scheduled.end_date != order.end_date {
            trace!(
                work_order = %order.id,
                from = %order.start_date,
                to = %scheduled.start_date,
                "work order rescheduled"
            );
            changes.push(ScheduleChange {
                work_order_id: order.id.clone(),
                previous_start: order.start_date,
                previous_end: order.end_date,
                new_start: scheduled.start_date,
                new_end: scheduled.end_date,
            });
        }

        finalized.insert(scheduled.id.clone(), scheduled.clone());
        updated.push(scheduled);
    }

    debug!(changes = changes.len(), "reflow pass complete");

    Ok(ReflowOutput {
        updated_work_orders: updated,
        changes,
    })
}
