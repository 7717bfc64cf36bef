//! Logical column model

use serde::{Deserialize, Serialize};

use super::descriptor::{AccessMode, MemberDescriptor, ValueKind};

/// One column of a logical table.
///
/// Columns are created by the builder from member descriptors and frozen when
/// the schema is returned; all mutators are crate-internal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalColumn {
    name: String,
    source_member: String,
    kind: ValueKind,
    nullable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    backing_storage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_mode: Option<AccessMode>,
}

impl LogicalColumn {
    /// Direct construction path for hand-built schemas (the builder derives
    /// columns from member descriptors instead).
    pub fn new(name: String, kind: ValueKind, nullable: bool) -> Self {
        Self {
            source_member: name.clone(),
            name,
            kind,
            nullable,
            backing_storage: None,
            access_mode: None,
        }
    }

    pub(crate) fn from_member(member: &MemberDescriptor) -> Self {
        Self {
            name: member.name.clone(),
            source_member: member.name.clone(),
            kind: member.kind,
            nullable: member.nullable,
            backing_storage: member.backing_storage.clone(),
            access_mode: member.access_mode,
        }
    }

    /// Public column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the member descriptor this column was derived from.
    pub fn source_member(&self) -> &str {
        &self.source_member
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// Backing field holding the value when access is mediated; the public
    /// column name is unaffected.
    pub fn backing_storage(&self) -> Option<&str> {
        self.backing_storage.as_deref()
    }

    pub fn access_mode(&self) -> Option<AccessMode> {
        self.access_mode
    }

    pub(crate) fn rename(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_backing_storage(&mut self, field: String, mode: Option<AccessMode>) {
        self.backing_storage = Some(field);
        if mode.is_some() {
            self.access_mode = mode;
        }
    }
}
