//! tfmermaid - Turn Terraform state and plan JSON into Mermaid.js diagrams
//!
//! The crate reads the JSON emitted by `terraform show -json` (for state or a
//! saved plan) or a raw `.tfstate` file, builds a resource dependency graph,
//! and renders it as Mermaid flowchart text.
//!
//! # Quick Start
//!
//! ```rust
//! use tfmermaid::{generate, DiagramKind};
//!
//! let json = r#"{ "planned_values": { "root_module": { "resources": [
//!     { "address": "google_storage_bucket.docs", "mode": "managed",
//!       "type": "google_storage_bucket", "name": "docs",
//!       "values": { "name": "prod-docs" } }
//! ] } } }"#;
//!
//! let diagram = generate(json, DiagramKind::Architecture).unwrap();
//! assert!(diagram.contains("google_storage_bucket_docs[📦 Docs<br/>prod-docs]"));
//! ```
//!
//! # Advanced Usage
//!
//! ```rust
//! use tfmermaid::prelude::*;
//!
//! let db = StateParser::new()
//!     .parse_str(r#"{ "values": { "root_module": {} } }"#)
//!     .unwrap();
//! assert!(db.is_empty());
//!
//! let generator = MermaidGenerator::new(&db);
//! let markdown = generator
//!     .generate_formatted(DiagramKind::Network, OutputFormat::Markdown)
//!     .unwrap();
//! assert!(markdown.starts_with("```mermaid\ngraph LR"));
//! ```

pub mod core;
pub mod parser;
pub mod plugins;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        node_id, Category, DiagramError, DiagramKind, Direction, EdgeData, EdgeType, Flowchart,
        NodeData, NodeShape, OutputFormat, Renderer, Resource, ResourceDatabase,
        StyleDefinition,
    };
    pub use crate::parser::{DocumentShape, StateParser};
    pub use crate::plugins::{
        ArchitectureRenderer, CloudRunSqlRule, DataFlowRenderer, IamBindingRule, InferenceRule,
        MermaidGenerator, NetworkRenderer,
    };
}

/// Parse a Terraform JSON document (plan, state, or legacy state) from text
///
/// # Example
/// ```rust
/// let db = tfmermaid::parse_state(r#"{ "resources": [] }"#).unwrap();
/// assert_eq!(db.len(), 0);
/// ```
pub fn parse_state(input: &str) -> core::Result<ResourceDatabase> {
    parser::StateParser::new().parse_str(input)
}

/// Read and parse a Terraform JSON document from disk
pub fn parse_state_file(path: impl AsRef<std::path::Path>) -> core::Result<ResourceDatabase> {
    parser::StateParser::new().parse_file(path.as_ref())
}

/// Parse a Terraform JSON document and render one diagram kind
pub fn generate(input: &str, kind: DiagramKind) -> anyhow::Result<String> {
    let database = parse_state(input)?;
    plugins::MermaidGenerator::new(&database).generate(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_static_kinds_from_empty_document() {
        for kind in [DiagramKind::Network, DiagramKind::DataFlow] {
            let output = generate("{}", kind).unwrap();
            assert!(output.lines().count() > 5);
        }
    }

    #[test]
    fn test_generate_propagates_parse_errors() {
        let result = generate("not json", DiagramKind::Architecture);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<DiagramError>().is_some());
    }

    #[test]
    fn test_parse_state_file_missing() {
        let err = parse_state_file("/definitely/not/here.tfstate").unwrap_err();
        assert!(matches!(err, DiagramError::StateFileNotFound { .. }));
    }
}
