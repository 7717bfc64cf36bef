//! Logical table, key and index models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::column::LogicalColumn;

/// Primary key of a logical table. Composite-capable; the column list is
/// ordered. When no explicit name was set, a `PK_<table>` name is generated
/// at freeze time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalKey {
    columns: Vec<String>,
    name: String,
}

impl LogicalKey {
    pub fn new(columns: Vec<String>, name: String) -> Self {
        Self { columns, name }
    }

    /// Column names making up the key, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Composite-capable index over a table's columns. Column order is
/// significant and becomes the index's column ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalIndex {
    columns: Vec<String>,
}

impl LogicalIndex {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

/// One table of the logical schema.
///
/// Tables carry a deterministic UUID v5 id derived from their (schema, name)
/// pair, so identical builds always produce identical ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalTable {
    id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<String>,
    name: String,
    source_type: String,
    columns: Vec<LogicalColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<LogicalKey>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    indexes: Vec<LogicalIndex>,
}

impl LogicalTable {
    /// Direct construction path for hand-built schemas; the validator's
    /// defensive checks exist for tables assembled this way.
    pub fn new(
        schema: Option<String>,
        name: String,
        source_type: String,
        columns: Vec<LogicalColumn>,
        key: Option<LogicalKey>,
        indexes: Vec<LogicalIndex>,
    ) -> Self {
        let id = Self::generate_id(schema.as_deref(), &name);
        Self {
            id,
            schema,
            name,
            source_type,
            columns,
            key,
            indexes,
        }
    }

    /// Generate a deterministic UUID v5 for a table from its (schema, name)
    /// pair. The same pair always yields the same id, keeping builds
    /// reproducible without any randomness.
    pub fn generate_id(schema: Option<&str>, name: &str) -> Uuid {
        let key = format!("{}:{}", schema.unwrap_or(""), name);
        Uuid::new_v5(&Uuid::NAMESPACE_DNS, key.as_bytes())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Schema the table lives in; `None` means the process-wide default.
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the type descriptor this table was synthesized from.
    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    /// Columns in member declaration order.
    pub fn columns(&self) -> &[LogicalColumn] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&LogicalColumn> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn key(&self) -> Option<&LogicalKey> {
        self.key.as_ref()
    }

    pub fn indexes(&self) -> &[LogicalIndex] {
        &self.indexes
    }
}
