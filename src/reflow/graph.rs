//! Dependency graph builder.
//!
//! Derives parent-to-children and child-to-parents adjacency from each work
//! order's declared dependency list. Built once per reflow run and discarded
//! after sequencing.
//!
//! No validation happens here: parent ids that resolve to no supplied order
//! are carried through and reported by the sequencer, the first component
//! that needs every id resolved.

use std::collections::{HashMap, HashSet};

use crate::models::WorkOrder;

/// Parent/child adjacency over a set of work orders.
///
/// Every supplied order id is a key in both maps, even with an empty entry.
/// Child lists preserve the input order of the orders that declared the
/// dependency; this ordering is part of the deterministic-output contract of
/// the sequencer, so it must not be replaced by an unordered set.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    parent_to_children: HashMap<String, Vec<String>>,
    child_to_parents: HashMap<String, HashSet<String>>,
}

impl DependencyGraph {
    /// Builds the graph from the full work order set.
    ///
    /// Duplicate entries in a `depends_on` list collapse to a single edge.
    pub fn build(work_orders: &[WorkOrder]) -> Self {
        let mut parent_to_children: HashMap<String, Vec<String>> = HashMap::new();
        let mut child_to_parents: HashMap<String, HashSet<String>> = HashMap::new();

        for order in work_orders {
            parent_to_children.entry(order.id.clone()).or_default();
            let parents = child_to_parents.entry(order.id.clone()).or_default();

            for parent_id in &order.depends_on {
                if parents.insert(parent_id.clone()) {
                    parent_to_children
                        .entry(parent_id.clone())
                        .or_default()
                        .push(order.id.clone());
                }
            }
        }

        Self {
            parent_to_children,
            child_to_parents,
        }
    }

    /// Orders that declare `id` as a dependency, in input order.
    pub fn children_of(&self, id: &str) -> &[String] {
        self.parent_to_children.get(id).map_or(&[], Vec::as_slice)
    }

    /// De-duplicated parent ids of `id`.
    pub fn parents_of(&self, id: &str) -> Option<&HashSet<String>> {
        self.child_to_parents.get(id)
    }

    /// Number of distinct parents of `id`.
    pub fn parent_count(&self, id: &str) -> usize {
        self.child_to_parents.get(id).map_or(0, HashSet::len)
    }
}
