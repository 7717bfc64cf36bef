//! Type and member descriptors
//!
//! Descriptors are the read-only inputs to the schema builder. They are
//! created once at registration time and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Declared value kind of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Numeric, boolean or other scalar value
    Primitive,
    /// Text value
    String,
    /// Date or timestamp value
    Date,
    /// Reference to another mapped type
    Reference,
}

/// How reads and writes of a member are routed once backing storage is set.
///
/// Pure metadata for downstream consumers (query planner, materializer);
/// the builder records it and never acts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// Always go through the backing field
    Field,
    /// Always go through the member itself
    Property,
    /// Prefer the backing field when one exists
    PreferField,
    /// Prefer the member, fall back to the backing field
    PreferProperty,
    /// Use the backing field while the owning object is being constructed
    PreferFieldDuringConstruction,
}

/// One property/field of a mapped type.
///
/// # Example
///
/// ```rust
/// use schema_mapping_sdk::models::{MemberDescriptor, ValueKind};
///
/// let member = MemberDescriptor::new("Url".to_string(), ValueKind::String);
/// assert!(member.nullable);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    /// Member name (unique within the owning type)
    pub name: String,
    /// Declared value kind
    pub kind: ValueKind,
    /// Whether the member allows missing values (default: true)
    #[serde(default = "default_true")]
    pub nullable: bool,
    /// Name of the field actually holding the value when access is mediated
    /// rather than direct
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backing_storage: Option<String>,
    /// Access routing once backing storage is in play
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_mode: Option<AccessMode>,
}

fn default_true() -> bool {
    true
}

impl MemberDescriptor {
    /// Create a new nullable member with no backing storage.
    pub fn new(name: String, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            nullable: true,
            backing_storage: None,
            access_mode: None,
        }
    }

    /// Mark the member as non-nullable.
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Declare a backing field for the member at registration time.
    pub fn with_backing_storage(mut self, field: String) -> Self {
        self.backing_storage = Some(field);
        self
    }
}

/// One mapped entity type: a unique name plus an ordered member list.
///
/// Immutable after registration; the member list is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Type name (unique within a registry)
    pub name: String,
    /// Members in declaration order
    pub members: Vec<MemberDescriptor>,
}

impl TypeDescriptor {
    pub fn new(name: String, members: Vec<MemberDescriptor>) -> Self {
        Self { name, members }
    }

    /// Look up a member by name.
    pub fn member(&self, name: &str) -> Option<&MemberDescriptor> {
        self.members.iter().find(|m| m.name == name)
    }

    /// First member usable as an implicit key: `<TypeName>Id` or `Id`,
    /// in declaration order.
    pub fn key_member(&self) -> Option<&MemberDescriptor> {
        let conventional = format!("{}Id", self.name);
        self.members
            .iter()
            .find(|m| m.name == conventional || m.name == "Id")
    }
}
