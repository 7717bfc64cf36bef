//! Models module for the SDK
//!
//! Plain data records with no behavior: descriptors (the builder's read-only
//! inputs), mapping directives, and the logical schema output types.

pub mod column;
pub mod descriptor;
pub mod directive;
pub mod schema;
pub mod table;

pub use column::LogicalColumn;
pub use descriptor::{AccessMode, MemberDescriptor, TypeDescriptor, ValueKind};
pub use directive::MappingDirective;
pub use schema::LogicalSchema;
pub use table::{LogicalIndex, LogicalKey, LogicalTable};
