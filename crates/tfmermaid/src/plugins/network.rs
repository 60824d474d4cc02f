//! Network topology diagram
//!
//! A fixed picture of the canonical request path:
//! Internet → Load Balancer → Frontend → API → Database / Storage.
//! The parsed resources are not consulted.

use anyhow::Result;

use crate::core::{
    DiagramKind, Direction, EdgeData, Flowchart, NodeData, NodeShape, Renderer, ResourceDatabase,
    StyleDefinition,
};

/// Renderer for the static network topology
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkRenderer;

impl NetworkRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for NetworkRenderer {
    fn build(&self, _database: &ResourceDatabase) -> Result<Flowchart> {
        let mut chart = Flowchart::new(Direction::LeftRight);
        chart
            .blank()
            .edge(EdgeData::new(
                NodeData::with_shape("Internet", "Internet", NodeShape::Stadium),
                NodeData::new("LB", "Load Balancer"),
            ))
            .edge(EdgeData::new("LB", NodeData::new("Frontend", "Frontend")))
            .edge(EdgeData::new("Frontend", NodeData::new("API", "API Backend")))
            .edge(EdgeData::new(
                "API",
                NodeData::with_shape("DB", "Database", NodeShape::Cylinder),
            ))
            .edge(EdgeData::new(
                "API",
                NodeData::new("Storage", "Document Storage"),
            ))
            .blank()
            .style("Internet", StyleDefinition::new("#f9f", "#333"))
            .style(
                "Frontend",
                StyleDefinition::with_color("#4285f4", "#333", "#fff"),
            )
            .style("API", StyleDefinition::with_color("#34a853", "#333", "#fff"))
            .style("DB", StyleDefinition::with_color("#fbbc04", "#333", "#fff"))
            .style(
                "Storage",
                StyleDefinition::with_color("#4285f4", "#333", "#fff"),
            );
        Ok(chart)
    }

    fn kind(&self) -> DiagramKind {
        DiagramKind::Network
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Resource;

    const EXPECTED: &str = "graph LR

    Internet([Internet]) --> LB[Load Balancer]
    LB --> Frontend[Frontend]
    Frontend --> API[API Backend]
    API --> DB[(Database)]
    API --> Storage[Document Storage]

    style Internet fill:#f9f,stroke:#333
    style Frontend fill:#4285f4,stroke:#333,color:#fff
    style API fill:#34a853,stroke:#333,color:#fff
    style DB fill:#fbbc04,stroke:#333,color:#fff
    style Storage fill:#4285f4,stroke:#333,color:#fff";

    #[test]
    fn test_exact_output() {
        let output = NetworkRenderer::new()
            .render(&ResourceDatabase::new())
            .unwrap();
        assert_eq!(output, EXPECTED);
    }

    #[test]
    fn test_ignores_resources() {
        let db: ResourceDatabase = vec![Resource::new(
            "google_storage_bucket",
            "docs",
            "google_storage_bucket.docs",
        )]
        .into_iter()
        .collect();
        assert_eq!(NetworkRenderer::new().render(&db).unwrap(), EXPECTED);
    }
}
