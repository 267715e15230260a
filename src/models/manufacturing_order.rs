//! Manufacturing order model.
//!
//! A manufacturing order groups the work orders that produce one item.
//! The reflow engine accepts manufacturing orders at its boundary but does
//! not yet consult them; they are reserved for due-date-aware constraints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A manufacturing order (production order for an item).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturingOrder {
    /// Unique manufacturing order identifier.
    pub id: String,
    /// Human-readable manufacturing order number.
    pub number: String,
    /// Item being produced.
    pub item_id: String,
    /// Quantity to produce.
    pub quantity: f64,
    /// Requested completion instant, UTC.
    pub due_date: DateTime<Utc>,
}

impl ManufacturingOrder {
    /// Creates a new manufacturing order with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number: String::new(),
            item_id: String::new(),
            quantity: 0.0,
            due_date: DateTime::UNIX_EPOCH,
        }
    }

    /// Sets the order number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the item being produced.
    pub fn with_item(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = item_id.into();
        self
    }

    /// Sets the quantity.
    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the due date.
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = due_date;
        self
    }
}
