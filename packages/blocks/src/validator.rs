//! Structural checks for site documents loaded from storage.
//!
//! Nothing here rejects a document. Findings are reported so the builder can
//! surface them while the page still renders with unknown parts skipped.

use crate::registry::BlockRegistry;
use std::collections::HashSet;
use std::fmt;
use storefront_document::{ComponentInstance, SiteConfig};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationLevel {
    /// Renders, but something is ignored or off-schema
    Warning,
    /// Edits will target the wrong node
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
    pub block_id: Option<String>,
}

impl ValidationWarning {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: ValidationLevel::Warning,
            message: message.into(),
            block_id: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ValidationLevel::Error,
            message: message.into(),
            block_id: None,
        }
    }

    pub fn with_block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == ValidationLevel::Error
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            ValidationLevel::Warning => "warning",
            ValidationLevel::Error => "error",
        };
        match &self.block_id {
            Some(id) => write!(f, "{}: [{}] {}", level, id, self.message),
            None => write!(f, "{}: {}", level, self.message),
        }
    }
}

/// Checks a site against the schemas of a registry
pub struct SchemaValidator<'a> {
    registry: &'a BlockRegistry,
    warnings: Vec<ValidationWarning>,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(registry: &'a BlockRegistry) -> Self {
        Self {
            registry,
            warnings: Vec::new(),
        }
    }

    pub fn validate(mut self, site: &SiteConfig) -> Vec<ValidationWarning> {
        self.check_block_ids(site);

        for block in &site.blocks {
            let Some(schema) = self.registry.get_schema(&block.block_type) else {
                self.warnings.push(
                    ValidationWarning::warning(format!("Unknown block type '{}' will not render", block.block_type))
                        .with_block_id(&block.id),
                );
                continue;
            };

            for (key, value) in &block.props {
                if let Some(field) = schema.find_field(key) {
                    if !field.input.accepts(value) {
                        self.warnings.push(
                            ValidationWarning::warning(format!("Prop '{}' does not fit its {} field", key, schema.label))
                                .with_block_id(&block.id),
                        );
                    }
                }
            }

            let mut seen = HashSet::new();
            self.check_components(&block.id, block.children(), &mut seen);
        }

        debug!(site_id = %site.id, warnings = self.warnings.len(), "Validated site");
        self.warnings
    }

    fn check_block_ids(&mut self, site: &SiteConfig) {
        let mut seen = HashSet::new();
        for block in &site.blocks {
            if block.id.is_empty() {
                self.warnings.push(ValidationWarning::error(format!(
                    "Block of type '{}' has no id",
                    block.block_type
                )));
            } else if !seen.insert(block.id.as_str()) {
                self.warnings
                    .push(ValidationWarning::error("Duplicate block id").with_block_id(&block.id));
            }
        }
    }

    fn check_components<'c>(&mut self, block_id: &str, components: &'c [ComponentInstance], seen: &mut HashSet<&'c str>) {
        for component in components {
            if !seen.insert(component.id.as_str()) {
                self.warnings.push(
                    ValidationWarning::error(format!("Duplicate component id '{}'", component.id))
                        .with_block_id(block_id),
                );
            }
            if component.component_kind().is_none() {
                self.warnings.push(
                    ValidationWarning::warning(format!("Unknown component type '{}' will not render", component.kind))
                        .with_block_id(block_id),
                );
            }
            self.check_components(block_id, component.children(), seen);
        }
    }
}

impl BlockRegistry {
    /// Validate `site` against the registered schemas
    pub fn validate(&self, site: &SiteConfig) -> Vec<ValidationWarning> {
        SchemaValidator::new(self).validate(site)
    }

    /// Copy of `site` with schema defaults backfilled into every known block,
    /// plus the validation findings for the original document.
    ///
    /// Props already present are kept as they are, unknown blocks untouched.
    pub fn normalize(&self, site: &SiteConfig) -> (SiteConfig, Vec<ValidationWarning>) {
        let warnings = self.validate(site);
        let mut normalized = site.clone();

        for block in &mut normalized.blocks {
            if let Some(props) = self.props_for_new_block(&block.block_type, &block.props) {
                if props.len() != block.props.len() {
                    debug!(block_id = %block.id, added = props.len() - block.props.len(), "Backfilled default props");
                }
                block.props = props;
            }
        }

        if warnings.iter().any(ValidationWarning::is_error) {
            warn!(site_id = %site.id, "Site has structural errors");
        }

        (normalized, warnings)
    }
}
