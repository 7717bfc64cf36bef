//! Validation functionality
//!
//! Provides validation logic for:
//! - Logical schemas (missing keys, duplicate tables/columns, dangling
//!   index references)
//! - Identifier naming rules

pub mod naming;
pub mod schema;

pub use schema::{SchemaValidator, ValidationIssue, ValidationResult};
