//! Schema Mapping SDK - Declarative schema-mapping engine
//!
//! Provides a small, deterministic core for turning in-memory type
//! descriptions plus a set of mapping directives into a validated logical
//! database schema:
//! - Type registry and directive set (inputs)
//! - Schema builder (pure build pass)
//! - Validator (full-pass invariant checks)
//! - Mapping pipeline (the external interface)
//!
//! Downstream consumers (migration generators, query planners) read the
//! finished [`models::LogicalSchema`]; SQL generation, query translation and
//! change tracking are deliberately out of scope.

pub mod builder;
pub mod models;
pub mod pipeline;
pub mod registry;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, IdentityNaming, SchemaBuilder, TableNaming};
pub use models::{
    AccessMode, LogicalColumn, LogicalIndex, LogicalKey, LogicalSchema, LogicalTable,
    MappingDirective, MemberDescriptor, TypeDescriptor, ValueKind,
};
pub use pipeline::MappingPipeline;
pub use registry::{DirectiveSet, RegistryError, TypeRegistry};
pub use validation::{SchemaValidator, ValidationIssue, ValidationResult};
