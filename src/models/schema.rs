//! The finalized logical schema

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::table::LogicalTable;

/// Immutable output of a successful build: every logical table, grouped by
/// schema on access. Tables keep type-registration order, which makes the
/// whole value deterministic for identical inputs.
///
/// No mutation is exposed after construction; a failed build never produces
/// one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalSchema {
    tables: Vec<LogicalTable>,
}

impl LogicalSchema {
    pub fn new(tables: Vec<LogicalTable>) -> Self {
        Self { tables }
    }

    /// All tables, in type-registration order.
    pub fn tables(&self) -> &[LogicalTable] {
        &self.tables
    }

    /// Distinct schema names in sorted order; `None` (the default schema)
    /// is not included.
    pub fn schemas(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.tables.iter().filter_map(|t| t.schema()).collect();
        set.into_iter().collect()
    }

    /// Tables in the given schema (`None` for the default schema).
    pub fn tables_in_schema(&self, schema: Option<&str>) -> Vec<&LogicalTable> {
        self.tables
            .iter()
            .filter(|t| t.schema() == schema)
            .collect()
    }

    /// Look up a table by (schema, name).
    pub fn table(&self, schema: Option<&str>, name: &str) -> Option<&LogicalTable> {
        self.tables
            .iter()
            .find(|t| t.schema() == schema && t.name() == name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
