//! SQLite-backed product inventory manager.
//!
//! # Intention
//!
//! - Provide a single access point ([`ProductManager`]) for the product table.
//! - Encapsulate SQLite-specific logic, types, and error handling.
//!
//! # Architectural Boundaries
//!
//! - Only product-inventory database code belongs here.
//! - No business logic or unrelated utilities.

pub mod error;
pub mod product;
pub mod schema;
pub mod sqlite;

pub use error::{StoreError, StoreResult};
pub use product::{Product, ProductUpdate};
pub use schema::products_table;
pub use sqlite::{products_config, ProductManager, SqliteConfig, Value};
