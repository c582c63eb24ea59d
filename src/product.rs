//! The product row model and the update field carrier.

use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// One row of the product table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Assigned by the store on insert; immutable, never reused.
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: Option<String>,
    pub stock: i64,
    /// Set by the store at insert time (`CURRENT_TIMESTAMP`), never updated.
    pub created_at: String,
}

impl Product {
    /// Map a `SELECT id, name, price, category, stock, created_at` row.
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            price: row.get(2)?,
            category: row.get(3)?,
            stock: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}

/// Field-presence carrier for [`update_product`](crate::ProductManager::update_product).
///
/// `Some` means "overwrite this column", `None` means "leave it untouched".
/// Presence is explicit: `with_name("")` sets the name to the empty string,
/// and `with_stock(0)` or `with_price(0.0)` clear those columns to zero.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<i64>,
}

impl ProductUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    /// True when no field is set; such an update never touches the store.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.stock.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update() {
        assert!(ProductUpdate::new().is_empty());
        assert!(!ProductUpdate::new().with_stock(0).is_empty());
        assert!(!ProductUpdate::new().with_name("").is_empty());
    }
}
