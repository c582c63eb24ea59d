//! The product manager and its SQLite plumbing.

use rusqlite::types::{ToSqlOutput, Value as SqlValue, ValueRef};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, ToSql};

use crate::error::{StoreError, StoreResult};
use crate::product::{Product, ProductUpdate};
use crate::schema::{products_table, Schema};

/// Core value types for SQLite parameter binding
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Blob(value)
    }
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(text) => Value::Text(text),
            None => Value::Null,
        }
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(SqlValue::Null),
            Value::Integer(value) => ToSqlOutput::Owned(SqlValue::Integer(*value)),
            Value::Real(value) => ToSqlOutput::Owned(SqlValue::Real(*value)),
            Value::Text(value) => ToSqlOutput::Borrowed(ValueRef::Text(value.as_bytes())),
            Value::Blob(value) => ToSqlOutput::Borrowed(ValueRef::Blob(value)),
        })
    }
}

/// SQLite store configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SqliteConfig {
    /// Path to the SQLite database file
    pub db_path: String,
    /// Schema definition for the database
    pub schema: Schema,
}

impl SqliteConfig {
    /// Create a new SQLite config with path and schema
    pub fn new(db_path: impl Into<String>, schema: Schema) -> Self {
        Self {
            db_path: db_path.into(),
            schema,
        }
    }
}

/// Config for a store holding the standard product table.
pub fn products_config(db_path: impl Into<String>) -> SqliteConfig {
    SqliteConfig::new(db_path, Schema::new().add_table(products_table()))
}

const PRODUCT_COLUMNS: &str = "id, name, price, category, stock, created_at";

/// Sole access point to the product table.
///
/// Owns one connection for its lifetime. Every call executes a single
/// auto-committed statement; there is no multi-statement atomicity and no
/// concurrent-access discipline beyond SQLite's own file locking.
pub struct ProductManager {
    conn: Connection,
}

impl ProductManager {
    /// Open (creating if absent) the database at `config.db_path` and ensure
    /// every table in `config.schema` exists.
    pub fn open(config: SqliteConfig) -> StoreResult<Self> {
        log::debug!("opening inventory store at {}", config.db_path);
        let conn = Connection::open(&config.db_path)?;
        let manager = Self { conn };
        manager.initialize_schema(&config.schema)?;
        Ok(manager)
    }

    fn initialize_schema(&self, schema: &Schema) -> StoreResult<()> {
        for table in &schema.tables {
            log::debug!("ensuring table {} exists", table.name);
            self.conn.execute(&table.create_if_absent_sql(), [])?;
        }
        Ok(())
    }

    /// Insert a product and return its store-assigned id.
    ///
    /// `id` and `created_at` are assigned by SQLite; `stock` is written
    /// explicitly rather than relying on the column default.
    pub fn add_product(
        &self,
        name: &str,
        price: f64,
        category: Option<&str>,
        stock: i64,
    ) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO products (name, price, category, stock) VALUES (?1, ?2, ?3, ?4)",
            params![name, price, category, stock],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Fetch the product with the given id, or `None` if no row has it.
    pub fn product_by_id(&self, id: i64) -> StoreResult<Option<Product>> {
        let product = self
            .conn
            .query_row(
                &format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"),
                params![id],
                Product::from_row,
            )
            .optional()?;
        Ok(product)
    }

    /// Fetch every product whose category equals `category` exactly.
    ///
    /// Case-sensitive equality; rows with a NULL category never match.
    pub fn products_by_category(&self, category: &str) -> StoreResult<Vec<Product>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category = ?1"
        ))?;
        let rows = stmt.query_map(params![category], Product::from_row)?;
        let mut products = Vec::new();
        for row in rows {
            products.push(row?);
        }
        Ok(products)
    }

    /// Overwrite every column named by a `Some` field of `update`.
    ///
    /// Returns the number of rows modified (0 if the id does not exist).
    /// An all-`None` update performs no store access and returns `Ok(0)`.
    pub fn update_product(&self, id: i64, update: ProductUpdate) -> StoreResult<usize> {
        if update.is_empty() {
            return Ok(0);
        }

        let mut assignments: Vec<&str> = Vec::new();
        let mut bindings: Vec<Value> = Vec::new();
        if let Some(name) = update.name {
            assignments.push("name = ?");
            bindings.push(Value::Text(name));
        }
        if let Some(price) = update.price {
            assignments.push("price = ?");
            bindings.push(Value::Real(price));
        }
        if let Some(category) = update.category {
            assignments.push("category = ?");
            bindings.push(Value::Text(category));
        }
        if let Some(stock) = update.stock {
            assignments.push("stock = ?");
            bindings.push(Value::Integer(stock));
        }
        bindings.push(Value::Integer(id));

        let sql = format!(
            "UPDATE products SET {} WHERE id = ?",
            assignments.join(", ")
        );
        let affected = self.conn.execute(&sql, params_from_iter(bindings))?;
        Ok(affected)
    }

    /// Remove the product with the given id; returns the count removed (0 or 1).
    pub fn delete_product(&self, id: i64) -> StoreResult<usize> {
        let affected = self
            .conn
            .execute("DELETE FROM products WHERE id = ?1", params![id])?;
        Ok(affected)
    }

    /// Every product, in the store's natural order.
    pub fn list_all(&self) -> StoreResult<Vec<Product>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {PRODUCT_COLUMNS} FROM products"))?;
        let rows = stmt.query_map([], Product::from_row)?;
        let mut products = Vec::new();
        for row in rows {
            products.push(row?);
        }
        Ok(products)
    }

    /// Release the underlying connection.
    ///
    /// Consumes the manager, so no operation can follow a close.
    pub fn close(self) -> StoreResult<()> {
        log::debug!("closing inventory store");
        self.conn
            .close()
            .map_err(|(_, source)| StoreError::from(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_conversions() {
        assert_eq!(Value::from(3i64), Value::Integer(3));
        assert_eq!(Value::from(2.5f64), Value::Real(2.5));
        assert_eq!(Value::from("apple"), Value::Text("apple".to_string()));
        assert_eq!(Value::from(None::<String>), Value::Null);
        assert_eq!(
            Value::from(Some("fruit".to_string())),
            Value::Text("fruit".to_string())
        );
    }

    #[test]
    fn value_binds_through_sqlite() {
        let conn = Connection::open_in_memory().unwrap();
        let echoed: String = conn
            .query_row("SELECT ?1", params![Value::Text("x".into())], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(echoed, "x");

        let echoed: Option<i64> = conn
            .query_row("SELECT ?1", params![Value::Null], |row| row.get(0))
            .unwrap();
        assert_eq!(echoed, None);
    }
}
