//! Pre-flight input validation for reflow runs.
//!
//! Checks structural integrity of work orders and work centers before
//! scheduling, reporting every detected issue at once. The engine itself
//! fails fast on the first blocking condition; this pass is an optional
//! complement for callers that want the full picture up front. `reflow`
//! does not invoke it.
//!
//! Detects:
//! - Duplicate work order / work center IDs
//! - Work orders referencing unknown work centers
//! - Dependencies referencing unknown work orders
//! - Malformed or duplicate shift entries
//! - Circular dependencies (DFS, naming one involved order)
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{HashMap, HashSet};

use crate::models::{WorkCenter, WorkOrder};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A work order references a work center that doesn't exist.
    UnknownWorkCenter,
    /// A work order depends on a work order that doesn't exist.
    UnknownDependency,
    /// Dependency graph contains a cycle.
    CyclicDependency,
    /// A shift has out-of-range hours or day of week.
    InvalidShift,
    /// A work center lists several shifts for one day of week; only the
    /// first is ever consulted.
    DuplicateShiftDay,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a reflow run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(work_orders: &[WorkOrder], work_centers: &[WorkCenter]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut center_ids = HashSet::new();
    for center in work_centers {
        if !center_ids.insert(center.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate work center ID: {}", center.id),
            ));
        }

        let mut shift_days = HashSet::new();
        for shift in &center.shifts {
            if shift.day_of_week > 6 || shift.start_hour >= shift.end_hour || shift.end_hour > 24 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidShift,
                    format!(
                        "Work center '{}' has an invalid shift: day {}, hours {}-{}",
                        center.id, shift.day_of_week, shift.start_hour, shift.end_hour
                    ),
                ));
            }
            if !shift_days.insert(shift.day_of_week) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateShiftDay,
                    format!(
                        "Work center '{}' has multiple shifts for day {}; only the first applies",
                        center.id, shift.day_of_week
                    ),
                ));
            }
        }
    }

    let mut order_ids = HashSet::new();
    for order in work_orders {
        if !order_ids.insert(order.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate work order ID: {}", order.id),
            ));
        }
    }

    for order in work_orders {
        // Maintenance orders never reach the pipeline, but a broken
        // reference is still worth surfacing to the caller.
        if !center_ids.contains(order.work_center_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownWorkCenter,
                format!(
                    "Work order '{}' references unknown work center '{}'",
                    order.id, order.work_center_id
                ),
            ));
        }

        for parent_id in &order.depends_on {
            if !order_ids.contains(parent_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDependency,
                    format!(
                        "Work order '{}' depends on unknown work order '{}'",
                        order.id, parent_id
                    ),
                ));
            }
        }
    }

    if let Some(cycle_err) = detect_cycles(work_orders) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the dependency graph using DFS.
///
/// # Algorithm
/// Topological sort via DFS. If a back-edge is found (visiting a node
/// currently in the recursion stack), a cycle exists. The reported order id
/// is one member of the cycle, which is more than the engine's own
/// existence-only report.
fn detect_cycles(work_orders: &[WorkOrder]) -> Option<ValidationError> {
    // Adjacency: parent id → dependent order ids.
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    for order in work_orders {
        for parent_id in &order.depends_on {
            adj.entry(parent_id.as_str())
                .or_default()
                .push(order.id.as_str());
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for order in work_orders {
        let node = order.id.as_str();
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("Circular dependency detected involving work order '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}
