//! Typed schema definitions and DDL rendering.
//!
//! Tables are described as data and rendered to `CREATE TABLE IF NOT EXISTS`
//! statements at startup, so re-opening an existing database is idempotent.

/// Schema definition for the SQLite database.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Schema {
    pub tables: Vec<TableDefinition>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add_table(mut self, table: TableDefinition) -> Self {
        self.tables.push(table);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    /// Render the idempotent DDL statement for this table.
    pub fn create_if_absent_sql(&self) -> String {
        let columns: Vec<String> = self.columns.iter().map(ColumnDefinition::to_sql).collect();
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.name,
            columns.join(", ")
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    pub constraints: Vec<ColumnConstraint>,
    pub default_value: Option<DefaultValue>,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            constraints: Vec::new(),
            default_value: None,
        }
    }

    pub fn with_constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_default(mut self, default_value: DefaultValue) -> Self {
        self.default_value = Some(default_value);
        self
    }

    /// Render this column's clause of a CREATE TABLE statement.
    pub fn to_sql(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.data_type.to_sql());
        for constraint in &self.constraints {
            sql.push(' ');
            sql.push_str(constraint.as_sql());
        }
        if let Some(default_value) = &self.default_value {
            sql.push_str(" DEFAULT ");
            sql.push_str(&default_value.to_sql());
        }
        sql
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    Integer,
    Text,
    Real,
    Blob,
    /// NUMERIC-affinity decimal, rendered as `DECIMAL(precision, scale)`.
    Decimal { precision: u8, scale: u8 },
    Datetime,
}

impl DataType {
    pub fn to_sql(&self) -> String {
        match self {
            DataType::Integer => "INTEGER".to_string(),
            DataType::Text => "TEXT".to_string(),
            DataType::Real => "REAL".to_string(),
            DataType::Blob => "BLOB".to_string(),
            DataType::Decimal { precision, scale } => {
                format!("DECIMAL({}, {})", precision, scale)
            }
            DataType::Datetime => "DATETIME".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnConstraint {
    PrimaryKey,
    Autoincrement,
    NotNull,
    Unique,
}

impl ColumnConstraint {
    pub fn as_sql(&self) -> &'static str {
        match self {
            ColumnConstraint::PrimaryKey => "PRIMARY KEY",
            ColumnConstraint::Autoincrement => "AUTOINCREMENT",
            ColumnConstraint::NotNull => "NOT NULL",
            ColumnConstraint::Unique => "UNIQUE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Integer(i64),
    Text(String),
    Real(f64),
    Null,
    CurrentTimestamp,
}

impl DefaultValue {
    pub fn to_sql(&self) -> String {
        match self {
            DefaultValue::Integer(value) => value.to_string(),
            // Single quotes doubled for SQL string literals.
            DefaultValue::Text(value) => format!("'{}'", value.replace('\'', "''")),
            DefaultValue::Real(value) => value.to_string(),
            DefaultValue::Null => "NULL".to_string(),
            DefaultValue::CurrentTimestamp => "CURRENT_TIMESTAMP".to_string(),
        }
    }
}

/// The product table definition.
pub fn products_table() -> TableDefinition {
    TableDefinition::new("products")
        .with_column(
            ColumnDefinition::new("id", DataType::Integer)
                .with_constraint(ColumnConstraint::PrimaryKey)
                .with_constraint(ColumnConstraint::Autoincrement),
        )
        .with_column(
            ColumnDefinition::new("name", DataType::Text)
                .with_constraint(ColumnConstraint::NotNull),
        )
        .with_column(
            ColumnDefinition::new(
                "price",
                DataType::Decimal {
                    precision: 10,
                    scale: 2,
                },
            )
            .with_constraint(ColumnConstraint::NotNull),
        )
        .with_column(ColumnDefinition::new("category", DataType::Text))
        .with_column(
            ColumnDefinition::new("stock", DataType::Integer)
                .with_default(DefaultValue::Integer(0)),
        )
        .with_column(
            ColumnDefinition::new("created_at", DataType::Datetime)
                .with_default(DefaultValue::CurrentTimestamp),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_rendering() {
        let column = ColumnDefinition::new("name", DataType::Text)
            .with_constraint(ColumnConstraint::NotNull);
        assert_eq!(column.to_sql(), "name TEXT NOT NULL");

        let column = ColumnDefinition::new("stock", DataType::Integer)
            .with_default(DefaultValue::Integer(0));
        assert_eq!(column.to_sql(), "stock INTEGER DEFAULT 0");
    }

    #[test]
    fn default_text_escapes_quotes() {
        assert_eq!(DefaultValue::Text("it's".to_string()).to_sql(), "'it''s'");
    }

    #[test]
    fn products_table_ddl() {
        let sql = products_table().create_if_absent_sql();
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS products ("));
        assert!(sql.contains("id INTEGER PRIMARY KEY AUTOINCREMENT"));
        assert!(sql.contains("name TEXT NOT NULL"));
        assert!(sql.contains("price DECIMAL(10, 2) NOT NULL"));
        assert!(sql.contains("category TEXT"));
        assert!(sql.contains("stock INTEGER DEFAULT 0"));
        assert!(sql.contains("created_at DATETIME DEFAULT CURRENT_TIMESTAMP"));
    }

    #[test]
    fn ddl_is_idempotent() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let sql = products_table().create_if_absent_sql();
        conn.execute(&sql, []).unwrap();
        conn.execute(&sql, []).unwrap();
    }
}
