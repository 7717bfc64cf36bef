//! Logical schema validation
//!
//! Runs every invariant check over a finished [`LogicalSchema`] and reports
//! the full ordered issue list in one pass. No check short-circuits, so a
//! caller sees everything wrong with a schema at once.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{LogicalSchema, LogicalTable};
use crate::validation::naming::is_valid_identifier;

/// One violation found in a logical schema.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    #[error("table '{table}' has no key")]
    MissingKey { table: String },
    #[error("duplicate table name '{name}'")]
    DuplicateTableName {
        schema: Option<String>,
        name: String,
    },
    #[error("duplicate column name '{column}' on table '{table}'")]
    DuplicateColumnName { table: String, column: String },
    #[error("index on table '{table}' references missing column '{column}'")]
    DanglingIndexReference { table: String, column: String },
    #[error("invalid identifier '{name}' ({context})")]
    InvalidIdentifier { name: String, context: String },
}

/// Result of validating a logical schema: either empty (success) or the
/// complete ordered list of violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

/// Validator over finished logical schemas.
pub struct SchemaValidator;

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaValidator {
    pub fn new() -> Self {
        Self
    }

    /// Run all checks; success only when the issue list comes back empty.
    pub fn validate(&self, schema: &LogicalSchema) -> ValidationResult {
        let mut issues = Vec::new();

        for table in schema.tables() {
            self.check_identifiers(table, &mut issues);
            if table.key().is_none() {
                issues.push(ValidationIssue::MissingKey {
                    table: table.name().to_string(),
                });
            }
            self.check_duplicate_columns(table, &mut issues);
            self.check_indexes(table, &mut issues);
        }
        self.check_duplicate_tables(schema, &mut issues);

        debug!(
            "Validated schema with {} tables: {} issue(s)",
            schema.len(),
            issues.len()
        );
        ValidationResult { issues }
    }

    fn check_identifiers(&self, table: &LogicalTable, issues: &mut Vec<ValidationIssue>) {
        if !is_valid_identifier(table.name()) {
            issues.push(ValidationIssue::InvalidIdentifier {
                name: table.name().to_string(),
                context: "table name".to_string(),
            });
        }
        for column in table.columns() {
            if !is_valid_identifier(column.name()) {
                issues.push(ValidationIssue::InvalidIdentifier {
                    name: column.name().to_string(),
                    context: format!("column on table '{}'", table.name()),
                });
            }
        }
    }

    fn check_duplicate_columns(&self, table: &LogicalTable, issues: &mut Vec<ValidationIssue>) {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for column in table.columns() {
            *seen.entry(column.name()).or_insert(0) += 1;
        }
        let mut reported: Vec<&str> = Vec::new();
        for column in table.columns() {
            let name = column.name();
            if seen[name] > 1 && !reported.contains(&name) {
                reported.push(name);
                issues.push(ValidationIssue::DuplicateColumnName {
                    table: table.name().to_string(),
                    column: name.to_string(),
                });
            }
        }
    }

    /// Defensive check for hand-built schemas: the builder itself resolves
    /// index members against real columns before freezing.
    fn check_indexes(&self, table: &LogicalTable, issues: &mut Vec<ValidationIssue>) {
        for index in table.indexes() {
            for column in index.columns() {
                if table.column(column).is_none() {
                    issues.push(ValidationIssue::DanglingIndexReference {
                        table: table.name().to_string(),
                        column: column.clone(),
                    });
                }
            }
        }
    }

    fn check_duplicate_tables(&self, schema: &LogicalSchema, issues: &mut Vec<ValidationIssue>) {
        let mut seen: HashMap<(Option<&str>, &str), usize> = HashMap::new();
        for table in schema.tables() {
            *seen.entry((table.schema(), table.name())).or_insert(0) += 1;
        }
        let mut reported: Vec<(Option<&str>, &str)> = Vec::new();
        for table in schema.tables() {
            let key = (table.schema(), table.name());
            if seen[&key] > 1 && !reported.contains(&key) {
                reported.push(key);
                issues.push(ValidationIssue::DuplicateTableName {
                    schema: table.schema().map(|s| s.to_string()),
                    name: table.name().to_string(),
                });
            }
        }
    }
}
