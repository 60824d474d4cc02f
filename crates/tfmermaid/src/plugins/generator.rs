//! Diagram generator coordinating the renderer plugins
//!
//! The generator holds a parsed [`ResourceDatabase`] and dispatches to the
//! renderer for each requested [`DiagramKind`]. Generation is pure: nothing
//! is written anywhere, text is returned to the caller.

use anyhow::Result;
use tracing::{debug, info};

use super::{ArchitectureRenderer, DataFlowRenderer, NetworkRenderer};
use crate::core::{DiagramKind, OutputFormat, Renderer, ResourceDatabase};

/// Generates Mermaid diagrams from a resource database
pub struct MermaidGenerator<'a> {
    database: &'a ResourceDatabase,
    architecture: ArchitectureRenderer,
    network: NetworkRenderer,
    dataflow: DataFlowRenderer,
}

impl<'a> MermaidGenerator<'a> {
    /// Create a generator with the default renderers
    pub fn new(database: &'a ResourceDatabase) -> Self {
        Self::with_architecture(database, ArchitectureRenderer::new())
    }

    /// Create a generator with a customized architecture renderer
    pub fn with_architecture(
        database: &'a ResourceDatabase,
        architecture: ArchitectureRenderer,
    ) -> Self {
        Self {
            database,
            architecture,
            network: NetworkRenderer::new(),
            dataflow: DataFlowRenderer::new(),
        }
    }

    pub fn database(&self) -> &ResourceDatabase {
        self.database
    }

    /// The renderer responsible for a diagram kind
    pub fn renderer(&self, kind: DiagramKind) -> &dyn Renderer {
        match kind {
            DiagramKind::Architecture => &self.architecture,
            DiagramKind::Network => &self.network,
            DiagramKind::DataFlow => &self.dataflow,
        }
    }

    /// Render one diagram kind as raw Mermaid text
    pub fn generate(&self, kind: DiagramKind) -> Result<String> {
        let output = self.renderer(kind).render(self.database)?;
        debug!(kind = %kind, bytes = output.len(), "Generated diagram");
        Ok(output)
    }

    /// Render one diagram kind packaged for the given output format
    pub fn generate_formatted(&self, kind: DiagramKind, format: OutputFormat) -> Result<String> {
        Ok(format.wrap(&self.generate(kind)?))
    }

    /// Render several kinds, preserving the requested order
    pub fn generate_many(
        &self,
        kinds: &[DiagramKind],
        format: OutputFormat,
    ) -> Result<Vec<(DiagramKind, String)>> {
        let diagrams = kinds
            .iter()
            .map(|kind| Ok((*kind, self.generate_formatted(*kind, format)?)))
            .collect::<Result<Vec<_>>>()?;
        info!(diagram_count = diagrams.len(), format = %format, "Generated diagrams");
        Ok(diagrams)
    }

    pub fn generate_architecture_diagram(&self) -> Result<String> {
        self.generate(DiagramKind::Architecture)
    }

    pub fn generate_network_diagram(&self) -> Result<String> {
        self.generate(DiagramKind::Network)
    }

    pub fn generate_data_flow_diagram(&self) -> Result<String> {
        self.generate(DiagramKind::DataFlow)
    }
}
