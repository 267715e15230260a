//! Topological sequencer.
//!
//! Orders work orders so that every order appears after all of its
//! dependencies, using Kahn's algorithm with a FIFO ready queue.
//!
//! # Determinism
//!
//! Ties among simultaneously-ready orders resolve by position in the
//! caller-supplied list: the queue is seeded in input order, and children
//! are decremented in the input order preserved by
//! [`DependencyGraph::children_of`]. Input order is part of the observable
//! contract, not an implementation detail.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4

use std::collections::{HashMap, VecDeque};

use crate::error::ReflowError;
use crate::models::WorkOrder;

use super::graph::DependencyGraph;

/// Returns the work orders in dependency order.
///
/// Every order appears exactly once, after all of its declared parents.
///
/// # Errors
///
/// - [`ReflowError::DanglingReference`] when a `depends_on` entry names an
///   order that was not supplied. Checked up front so the missing id is
///   reported by name instead of surfacing as an apparent cycle.
/// - [`ReflowError::CircularDependency`] when the ready queue drains before
///   covering every order.
pub fn topological_order<'a>(
    graph: &DependencyGraph,
    work_orders: &'a [WorkOrder],
) -> Result<Vec<&'a WorkOrder>, ReflowError> {
    let by_id: HashMap<&str, &WorkOrder> = work_orders
        .iter()
        .map(|order| (order.id.as_str(), order))
        .collect();

    for order in work_orders {
        for parent_id in &order.depends_on {
            if !by_id.contains_key(parent_id.as_str()) {
                return Err(ReflowError::DanglingReference(parent_id.clone()));
            }
        }
    }

    let mut waiting_on: HashMap<&str, usize> = work_orders
        .iter()
        .map(|order| (order.id.as_str(), graph.parent_count(&order.id)))
        .collect();

    let mut ready: VecDeque<&str> = work_orders
        .iter()
        .filter(|order| waiting_on[order.id.as_str()] == 0)
        .map(|order| order.id.as_str())
        .collect();

    let mut result = Vec::with_capacity(work_orders.len());

    while let Some(id) = ready.pop_front() {
        if let Some(&order) = by_id.get(id) {
            result.push(order);
        }

        for child_id in graph.children_of(id) {
            if let Some(count) = waiting_on.get_mut(child_id.as_str()) {
                *count -= 1;
                if *count == 0 {
                    ready.push_back(child_id.as_str());
                }
            }
        }
    }

    if result.len() < work_orders.len() {
        return Err(ReflowError::CircularDependency);
    }

    Ok(result)
}
