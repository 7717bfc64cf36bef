//! Mapping pipeline
//!
//! Single entry point tying the registry, directive set, builder and
//! validator together: register types, append directives, then build and
//! validate. Each pipeline owns its own state, so independent pipelines
//! (one per bounded context) can run fully in parallel.

use anyhow::{Context, bail};
use tracing::{info, warn};

use crate::builder::{BuildError, SchemaBuilder};
use crate::models::{LogicalSchema, MappingDirective, TypeDescriptor};
use crate::registry::{DirectiveSet, RegistryError, TypeRegistry};
use crate::validation::{SchemaValidator, ValidationResult};

/// Owns one registry/directive-set pair plus the builder configuration.
#[derive(Default)]
pub struct MappingPipeline {
    registry: TypeRegistry,
    directives: DirectiveSet,
    builder: SchemaBuilder,
}

impl MappingPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with a pre-configured builder (default schema,
    /// naming strategy). Builder options must be fixed before the first
    /// build; the pipeline exposes no way to change them afterwards.
    pub fn with_builder(builder: SchemaBuilder) -> Self {
        Self {
            registry: TypeRegistry::new(),
            directives: DirectiveSet::new(),
            builder,
        }
    }

    /// Register a mapped entity type.
    pub fn register_type(&mut self, ty: TypeDescriptor) -> Result<(), RegistryError> {
        self.registry.register(ty)
    }

    /// Append a mapping directive. Never validated here; the builder
    /// resolves directives against the registry in one pass.
    pub fn append_directive(&mut self, directive: MappingDirective) {
        self.directives.append(directive);
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn directives(&self) -> &DirectiveSet {
        &self.directives
    }

    /// Build the logical schema from the current registry and directives.
    pub fn build(&self) -> Result<LogicalSchema, BuildError> {
        let schema = self.builder.build(&self.registry, &self.directives)?;
        info!(
            "Built logical schema: {} tables from {} types, {} directives",
            schema.len(),
            self.registry.len(),
            self.directives.len()
        );
        Ok(schema)
    }

    /// Validate a built schema, reporting every violation at once.
    pub fn validate(&self, schema: &LogicalSchema) -> ValidationResult {
        SchemaValidator::new().validate(schema)
    }

    /// Build and validate in one call; any validation issue turns the whole
    /// result into an error listing every violation.
    pub fn build_validated(&self) -> anyhow::Result<LogicalSchema> {
        let schema = self.build().context("schema build failed")?;
        let result = self.validate(&schema);
        if !result.is_valid() {
            for issue in result.issues() {
                warn!("Schema validation issue: {}", issue);
            }
            let summary = result
                .issues()
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            bail!("schema validation failed: {}", summary);
        }
        Ok(schema)
    }
}
