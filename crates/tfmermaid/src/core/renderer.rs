//! Core renderer trait for diagram output
//!
//! Each diagram kind is a renderer that turns a [`ResourceDatabase`] into a
//! Mermaid [`Flowchart`].

use anyhow::Result;

use super::{DiagramKind, Flowchart, ResourceDatabase};

/// Core trait for diagram renderers
///
/// # Example
/// ```
/// use tfmermaid::core::{Renderer, ResourceDatabase};
/// use tfmermaid::plugins::NetworkRenderer;
///
/// let db = ResourceDatabase::new();
/// let output = NetworkRenderer::new().render(&db).unwrap();
/// assert!(output.starts_with("graph LR"));
/// ```
pub trait Renderer: Send + Sync {
    /// Build the flowchart document for this diagram kind
    fn build(&self, database: &ResourceDatabase) -> Result<Flowchart>;

    /// Render the diagram as Mermaid text
    ///
    /// The built document is rejected if it references an undeclared node.
    fn render(&self, database: &ResourceDatabase) -> Result<String> {
        let chart = self.build(database)?;
        chart.check_references()?;
        Ok(chart.render())
    }

    /// Get the diagram kind produced by this renderer
    fn kind(&self) -> DiagramKind;

    /// Get the name of this renderer
    fn name(&self) -> &'static str {
        self.kind().name()
    }
}
