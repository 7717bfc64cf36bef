//! Type registry and directive set
//!
//! The registry holds every mapped type in registration order; the directive
//! set is an append-only sequence of mapping instructions. Neither performs
//! any cross-validation; directives may reference types that are registered
//! later, and the builder resolves everything in one pass.

use std::collections::HashMap;

use crate::models::{MappingDirective, TypeDescriptor};

/// Error during type registration or lookup
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("type '{0}' is already registered")]
    DuplicateType(String),
    #[error("unknown type '{0}'")]
    UnknownType(String),
}

/// Registry of mapped entity types.
///
/// Types are fixed once registered: no mutation or removal is exposed.
/// Registration order is preserved and drives table order in the output.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<TypeDescriptor>,
    by_name: HashMap<String, usize>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type. Fails if a type of the same name already exists.
    pub fn register(&mut self, ty: TypeDescriptor) -> Result<(), RegistryError> {
        if self.by_name.contains_key(&ty.name) {
            return Err(RegistryError::DuplicateType(ty.name.clone()));
        }
        self.by_name.insert(ty.name.clone(), self.types.len());
        self.types.push(ty);
        Ok(())
    }

    /// Look up a registered type by name.
    pub fn lookup(&self, name: &str) -> Result<&TypeDescriptor, RegistryError> {
        self.by_name
            .get(name)
            .map(|&i| &self.types[i])
            .ok_or_else(|| RegistryError::UnknownType(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Registered types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Ordered, append-only collection of mapping directives.
///
/// Append never validates; a directive may reference a type that is not
/// registered yet. Order matters only for duplicate-directive conflict
/// resolution (last one wins, `ExcludeType` always wins).
#[derive(Debug, Clone, Default)]
pub struct DirectiveSet {
    directives: Vec<MappingDirective>,
}

impl DirectiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, directive: MappingDirective) {
        self.directives.push(directive);
    }

    /// Directives in issuance order.
    pub fn iter(&self) -> impl Iterator<Item = &MappingDirective> {
        self.directives.iter()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MemberDescriptor, ValueKind};

    fn blog() -> TypeDescriptor {
        TypeDescriptor::new(
            "Blog".to_string(),
            vec![MemberDescriptor::new(
                "BlogId".to_string(),
                ValueKind::Primitive,
            )],
        )
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = TypeRegistry::new();
        registry.register(blog()).unwrap();
        assert_eq!(registry.lookup("Blog").unwrap().name, "Blog");
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let mut registry = TypeRegistry::new();
        registry.register(blog()).unwrap();
        let err = registry.register(blog()).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateType("Blog".to_string()));
    }

    #[test]
    fn test_unknown_type_lookup() {
        let registry = TypeRegistry::new();
        let err = registry.lookup("Missing").unwrap_err();
        assert_eq!(err, RegistryError::UnknownType("Missing".to_string()));
    }

    #[test]
    fn test_directive_set_preserves_order() {
        let mut set = DirectiveSet::new();
        set.append(MappingDirective::ExcludeType {
            type_name: "A".to_string(),
        });
        set.append(MappingDirective::SetSchema {
            schema: "s".to_string(),
        });
        let kinds: Vec<_> = set.iter().collect();
        assert_eq!(kinds.len(), 2);
        assert!(matches!(kinds[0], MappingDirective::ExcludeType { .. }));
    }
}
