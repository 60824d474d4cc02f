//! Data-flow diagram
//!
//! A fixed picture of how a request moves through the system, including the
//! authentication branch and the cache loop back to the API. The parsed
//! resources are not consulted.

use anyhow::Result;

use crate::core::{
    DiagramKind, Direction, EdgeData, EdgeType, Flowchart, NodeData, NodeShape, Renderer,
    ResourceDatabase, StyleDefinition,
};

/// Renderer for the static data-flow view
#[derive(Debug, Clone, Copy, Default)]
pub struct DataFlowRenderer;

impl DataFlowRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DataFlowRenderer {
    fn build(&self, _database: &ResourceDatabase) -> Result<Flowchart> {
        let mut chart = Flowchart::new(Direction::TopDown);
        chart
            .blank()
            .edge(EdgeData::new(
                NodeData::with_shape("User", "User", NodeShape::Stadium),
                NodeData::new("Frontend", "Frontend UI"),
            ))
            .edge(EdgeData::new("Frontend", NodeData::new("API", "API Service")))
            .edge(EdgeData::new(
                "API",
                NodeData::with_shape("Auth", "Authentication", NodeShape::Diamond),
            ))
            .edge(EdgeData::with_label(
                "Auth",
                NodeData::with_shape("DB", "Database", NodeShape::Cylinder),
                EdgeType::Arrow,
                "Valid",
            ))
            .edge(EdgeData::with_label(
                "Auth",
                NodeData::new("Error", "Error Response"),
                EdgeType::Arrow,
                "Invalid",
            ))
            .edge(EdgeData::new(
                "DB",
                NodeData::with_shape("Cache", "Cache Layer", NodeShape::Cylinder),
            ))
            .edge(EdgeData::new("Cache", "API"))
            .edge(EdgeData::new(
                "API",
                NodeData::new("Storage", "Document Storage"),
            ))
            .edge(EdgeData::new("API", NodeData::new("Logs", "Cloud Logging")))
            .edge(EdgeData::new(
                "API",
                NodeData::new("Metrics", "Cloud Monitoring"),
            ))
            .blank()
            .style("User", StyleDefinition::new("#f9f", "#333"))
            .style("Auth", StyleDefinition::with_color("#ea4335", "#333", "#fff"))
            .style("DB", StyleDefinition::with_color("#fbbc04", "#333", "#fff"));
        Ok(chart)
    }

    fn kind(&self) -> DiagramKind {
        DiagramKind::DataFlow
    }
}
