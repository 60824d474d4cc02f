//! Terraform state and plan parser
//!
//! Converts a Terraform JSON document into a [`ResourceDatabase`]. Three
//! layouts are understood, see [`DocumentShape`]. Only managed resources are
//! kept; data sources are dropped at parse time.
//!
//! # Example
//! ```
//! use tfmermaid::parser::StateParser;
//!
//! let json = r#"{
//!     "values": { "root_module": { "resources": [{
//!         "mode": "managed",
//!         "type": "google_storage_bucket",
//!         "name": "docs",
//!         "instances": [{ "attributes": { "name": "prod-docs" } }]
//!     }] } }
//! }"#;
//!
//! let db = StateParser::new().parse_str(json).unwrap();
//! assert!(db.contains("google_storage_bucket.docs"));
//! ```

mod fields;
mod module;
mod shape;

pub use shape::*;

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, span, warn, Level};

use crate::core::{DiagramError, ResourceDatabase, Result};

/// Parser for Terraform state, plan, and legacy state JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct StateParser;

impl StateParser {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a JSON document from disk
    pub fn parse_file(&self, path: &Path) -> Result<ResourceDatabase> {
        if !path.exists() {
            return Err(DiagramError::state_file_not_found(path));
        }
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parse a JSON document from text
    pub fn parse_str(&self, input: &str) -> Result<ResourceDatabase> {
        let document: Value = serde_json::from_str(input)?;
        self.parse_value(&document)
    }

    /// Parse an already-decoded JSON document
    pub fn parse_value(&self, document: &Value) -> Result<ResourceDatabase> {
        let parse_span = span!(Level::INFO, "parse_state");
        let _enter = parse_span.enter();

        if !document.is_object() {
            return Err(DiagramError::shape("<document>", "object"));
        }

        let shape = DocumentShape::detect(document);
        let mut database = ResourceDatabase::new();

        match shape.root_key() {
            Some(root_key) => {
                let root_path = fields::child_path(root_key, "root_module");
                if let Some(root) = fields::object(document, root_key, "")? {
                    if let Some(root_module) = root.get("root_module") {
                        module::walk_module(root_module, shape.mode(), &root_path, &mut database)?;
                    }
                }
            }
            None => {
                for (index, block) in fields::array(document, "resources", "")?
                    .iter()
                    .enumerate()
                {
                    module::parse_state_resource(
                        block,
                        &fields::index_path("resources", index),
                        &mut database,
                    )?;
                }
            }
        }

        debug!(shape = %shape, resource_count = database.len(), "Parsed document");
        if database.is_empty() {
            warn!(shape = %shape, "No managed resources found");
        } else {
            info!(resource_count = database.len(), "Parsing completed");
        }

        Ok(database)
    }
}
