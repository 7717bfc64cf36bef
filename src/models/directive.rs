//! Mapping directives
//!
//! A directive is a single declarative instruction altering how a type or
//! member maps into the logical schema. Directives are immutable once issued
//! and are applied by the builder in issuance order; for repeated same-kind
//! directives on one target the last one wins, except `ExcludeType` which
//! always wins regardless of position.

use serde::{Deserialize, Serialize};

use super::descriptor::AccessMode;

/// One declarative mapping instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MappingDirective {
    /// Map a type to a different table name
    RenameTable { type_name: String, table_name: String },
    /// Set the default schema for every table that has not received one yet
    SetSchema { schema: String },
    /// Map a member to a different column name
    RenameColumn {
        type_name: String,
        member: String,
        column_name: String,
    },
    /// Give the type's implicit key an explicit name
    SetKeyName { type_name: String, key_name: String },
    /// Define (or replace) a composite index over the named members,
    /// in the given order
    DefineCompositeIndex {
        type_name: String,
        members: Vec<String>,
    },
    /// Remove the type's contribution to the output entirely
    ExcludeType { type_name: String },
    /// Route reads/writes of a member through a named backing field
    SetBackingStorage {
        type_name: String,
        member: String,
        field: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        access_mode: Option<AccessMode>,
    },
}

impl MappingDirective {
    /// The type this directive targets, if any. `SetSchema` is build-wide
    /// and targets no single type.
    pub fn target_type(&self) -> Option<&str> {
        match self {
            Self::RenameTable { type_name, .. }
            | Self::RenameColumn { type_name, .. }
            | Self::SetKeyName { type_name, .. }
            | Self::DefineCompositeIndex { type_name, .. }
            | Self::ExcludeType { type_name }
            | Self::SetBackingStorage { type_name, .. } => Some(type_name),
            Self::SetSchema { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_type() {
        let d = MappingDirective::RenameTable {
            type_name: "Blog".to_string(),
            table_name: "blogs".to_string(),
        };
        assert_eq!(d.target_type(), Some("Blog"));

        let d = MappingDirective::SetSchema {
            schema: "blogging".to_string(),
        };
        assert_eq!(d.target_type(), None);
    }
}
