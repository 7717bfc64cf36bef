//! Schema builder
//!
//! Pure transformation from a type registry plus a directive set to a frozen
//! [`LogicalSchema`]. The builder never performs I/O and never mutates its
//! inputs; a failed build returns the specific error and discards all
//! in-progress state, so the caller can correct and retry the whole build.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{
    LogicalColumn, LogicalIndex, LogicalKey, LogicalSchema, LogicalTable, MappingDirective,
    TypeDescriptor,
};
use crate::registry::{DirectiveSet, TypeRegistry};

/// Error during a build pass
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// A directive references a type that is neither registered nor excluded,
    /// or names a key on a type that has none
    #[error("unknown type '{0}'")]
    UnknownType(String),
    /// A rename would collide with an existing table or column name
    #[error("naming conflict: {0}")]
    Conflict(String),
    /// A directive references a member the type does not declare
    #[error("type '{type_name}' has no member '{member}'")]
    InvalidMember { type_name: String, member: String },
}

/// Pluggable table-naming strategy. The default maps a type name to itself;
/// callers wanting pluralized or snake_cased table names supply their own.
pub trait TableNaming {
    fn table_name(&self, type_name: &str) -> String;
}

/// Identity naming: table name equals type name.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNaming;

impl TableNaming for IdentityNaming {
    fn table_name(&self, type_name: &str) -> String {
        type_name.to_string()
    }
}

/// In-progress table during a build pass. Keys and indexes track *member*
/// names until freeze, so column renames never leave them dangling.
struct TableState {
    type_name: String,
    schema: Option<String>,
    name: String,
    columns: Vec<LogicalColumn>,
    key_member: Option<String>,
    key_name: Option<String>,
    indexes: Vec<Vec<String>>,
}

impl TableState {
    fn column_by_member(&mut self, member: &str) -> Option<&mut LogicalColumn> {
        self.columns.iter_mut().find(|c| c.source_member() == member)
    }

    fn freeze(self) -> LogicalTable {
        let key = self.key_member.map(|member| {
            let column = self
                .columns
                .iter()
                .find(|c| c.source_member() == member)
                .map(|c| c.name().to_string())
                .unwrap_or(member);
            let name = self
                .key_name
                .unwrap_or_else(|| format!("PK_{}", self.name));
            LogicalKey::new(vec![column], name)
        });
        let indexes = self
            .indexes
            .into_iter()
            .map(|members| {
                let columns = members
                    .into_iter()
                    .map(|m| {
                        self.columns
                            .iter()
                            .find(|c| c.source_member() == m)
                            .map(|c| c.name().to_string())
                            .unwrap_or(m)
                    })
                    .collect();
                LogicalIndex::new(columns)
            })
            .collect();
        LogicalTable::new(
            self.schema,
            self.name,
            self.type_name,
            self.columns,
            key,
            indexes,
        )
    }
}

/// Deterministic schema builder.
///
/// Options (default schema, naming strategy) are fixed before `build` is
/// called and read-only during it; independent builders can run in parallel
/// since each owns disjoint inputs and outputs.
pub struct SchemaBuilder {
    default_schema: Option<String>,
    naming: Box<dyn TableNaming>,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self {
            default_schema: None,
            naming: Box::new(IdentityNaming),
        }
    }
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the process-wide default schema applied to every table that
    /// receives no explicit schema.
    pub fn with_default_schema(mut self, schema: String) -> Self {
        self.default_schema = Some(schema);
        self
    }

    /// Replace the table-naming strategy.
    pub fn with_naming(mut self, naming: Box<dyn TableNaming>) -> Self {
        self.naming = naming;
        self
    }

    /// Run the build pass: synthesize default tables for every non-excluded
    /// type, apply the remaining directives in issuance order, freeze.
    pub fn build(
        &self,
        registry: &TypeRegistry,
        directives: &DirectiveSet,
    ) -> Result<LogicalSchema, BuildError> {
        // ExcludeType is evaluated first regardless of sequence position.
        let excluded: HashSet<&str> = directives
            .iter()
            .filter_map(|d| match d {
                MappingDirective::ExcludeType { type_name } => Some(type_name.as_str()),
                _ => None,
            })
            .collect();

        let mut tables: Vec<TableState> = registry
            .iter()
            .filter(|ty| !excluded.contains(ty.name.as_str()))
            .map(|ty| self.synthesize(ty))
            .collect();
        debug!(
            "Synthesized {} default tables ({} types excluded)",
            tables.len(),
            excluded.len()
        );

        for directive in directives.iter() {
            if matches!(directive, MappingDirective::ExcludeType { .. }) {
                continue;
            }
            if let Some(target) = directive.target_type() {
                if excluded.contains(target) {
                    // Directives on an excluded type are moot, not errors.
                    debug!("Skipping directive on excluded type '{}'", target);
                    continue;
                }
            }
            self.apply(directive, registry, &mut tables)?;
        }

        Ok(LogicalSchema::new(
            tables.into_iter().map(TableState::freeze).collect(),
        ))
    }

    fn synthesize(&self, ty: &TypeDescriptor) -> TableState {
        TableState {
            type_name: ty.name.clone(),
            schema: self.default_schema.clone(),
            name: self.naming.table_name(&ty.name),
            columns: ty.members.iter().map(LogicalColumn::from_member).collect(),
            key_member: ty.key_member().map(|m| m.name.clone()),
            key_name: None,
            indexes: Vec::new(),
        }
    }

    fn apply(
        &self,
        directive: &MappingDirective,
        registry: &TypeRegistry,
        tables: &mut [TableState],
    ) -> Result<(), BuildError> {
        match directive {
            MappingDirective::SetSchema { schema } => {
                // Only tables still on the default schema pick it up; a later
                // SetSchema does not retroactively override earlier ones.
                for table in tables.iter_mut() {
                    if table.schema.is_none() {
                        table.schema = Some(schema.clone());
                    }
                }
                Ok(())
            }
            MappingDirective::RenameTable {
                type_name,
                table_name,
            } => {
                let idx = find_table(tables, type_name)?;
                let schema = tables[idx].schema.clone();
                let collision = tables
                    .iter()
                    .enumerate()
                    .any(|(i, t)| i != idx && t.schema == schema && t.name == *table_name);
                if collision {
                    return Err(BuildError::Conflict(format!(
                        "table name '{}' is already in use in schema '{}'",
                        table_name,
                        schema.as_deref().unwrap_or("(default)")
                    )));
                }
                tables[idx].name = table_name.clone();
                Ok(())
            }
            MappingDirective::RenameColumn {
                type_name,
                member,
                column_name,
            } => {
                let idx = find_table(tables, type_name)?;
                let taken = tables[idx]
                    .columns
                    .iter()
                    .any(|c| c.source_member() != member && c.name() == column_name);
                if taken {
                    return Err(BuildError::Conflict(format!(
                        "column name '{}' is already in use on table '{}'",
                        column_name, tables[idx].name
                    )));
                }
                let column = tables[idx].column_by_member(member).ok_or_else(|| {
                    BuildError::InvalidMember {
                        type_name: type_name.clone(),
                        member: member.clone(),
                    }
                })?;
                column.rename(column_name.clone());
                Ok(())
            }
            MappingDirective::SetKeyName {
                type_name,
                key_name,
            } => {
                let idx = find_table(tables, type_name)?;
                if tables[idx].key_member.is_none() {
                    return Err(BuildError::UnknownType(format!(
                        "{} (no implicit key to name)",
                        type_name
                    )));
                }
                tables[idx].key_name = Some(key_name.clone());
                Ok(())
            }
            MappingDirective::DefineCompositeIndex { type_name, members } => {
                let ty = registry
                    .lookup(type_name)
                    .map_err(|_| BuildError::UnknownType(type_name.clone()))?;
                for member in members {
                    if ty.member(member).is_none() {
                        return Err(BuildError::InvalidMember {
                            type_name: type_name.clone(),
                            member: member.clone(),
                        });
                    }
                }
                let idx = find_table(tables, type_name)?;
                let table = &mut tables[idx];
                // Same member list replaces (a no-op); a different list adds.
                if !table.indexes.iter().any(|i| i == members) {
                    table.indexes.push(members.clone());
                }
                Ok(())
            }
            MappingDirective::SetBackingStorage {
                type_name,
                member,
                field,
                access_mode,
            } => {
                let idx = find_table(tables, type_name)?;
                let column = tables[idx].column_by_member(member).ok_or_else(|| {
                    BuildError::InvalidMember {
                        type_name: type_name.clone(),
                        member: member.clone(),
                    }
                })?;
                column.set_backing_storage(field.clone(), *access_mode);
                Ok(())
            }
            MappingDirective::ExcludeType { .. } => Ok(()),
        }
    }
}

fn find_table(tables: &[TableState], type_name: &str) -> Result<usize, BuildError> {
    tables
        .iter()
        .position(|t| t.type_name == type_name)
        .ok_or_else(|| BuildError::UnknownType(type_name.to_string()))
}
