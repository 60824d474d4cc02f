//! Architecture diagram
//!
//! Groups resources into one subgraph per category (first-seen order), draws
//! declared dependencies as solid edges and inferred relationships as dashed
//! edges, and colors every node by category.

use anyhow::Result;
use tracing::{debug, span, Level};

use super::inference::{default_rules, InferenceRule};
use crate::core::{
    node_id, DiagramKind, Direction, EdgeData, Flowchart, NodeData, Renderer, Resource,
    ResourceDatabase, StyleDefinition,
};

/// Resource types whose `name` attribute is shown as a second label line
const NAMED_TYPES: &[&str] = &["google_storage_bucket", "google_sql_database"];

const STROKE: &str = "#333";
const TEXT_COLOR: &str = "#fff";

/// Renderer for the category-grouped architecture view
pub struct ArchitectureRenderer {
    rules: Vec<Box<dyn InferenceRule>>,
}

impl ArchitectureRenderer {
    /// Create a renderer with the default inference rules
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Create a renderer with a custom set of inference rules
    pub fn with_rules(rules: Vec<Box<dyn InferenceRule>>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn InferenceRule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    fn resource_node(resource: &Resource) -> NodeData {
        let mut label = format!("{} {}", resource.icon(), resource.display_name());
        if NAMED_TYPES.contains(&resource.resource_type.as_str()) {
            if let Some(name) = resource.name_attribute() {
                label.push_str("<br/>");
                label.push_str(&name);
            }
        }
        NodeData::new(node_id(&resource.address), label)
    }
}

impl Default for ArchitectureRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for ArchitectureRenderer {
    fn build(&self, database: &ResourceDatabase) -> Result<Flowchart> {
        let render_span = span!(
            Level::INFO,
            "render_architecture",
            resource_count = database.len()
        );
        let _enter = render_span.enter();

        let mut chart = Flowchart::new(Direction::TopToBottom);
        chart.blank();

        let categories = database.categories();
        for category in &categories {
            let nodes = database
                .resources_in(*category)
                .map(Self::resource_node)
                .collect();
            chart.subgraph(category.name(), nodes).blank();
        }
        debug!(subgraph_count = categories.len(), "Emitted subgraphs");

        chart.comment("Dependencies");
        let mut declared = 0usize;
        let mut inferred = 0usize;
        for resource in database.resources() {
            let source = node_id(&resource.address);
            for dep in database.resolved_dependencies(resource) {
                chart.edge(EdgeData::new(source.clone(), node_id(dep)));
                declared += 1;
            }
            for rule in &self.rules {
                for edge in rule.infer(resource, database) {
                    chart.edge(edge);
                    inferred += 1;
                }
            }
        }
        debug!(declared, inferred, "Emitted edges");

        chart.blank().comment("Styling");
        for resource in database.resources() {
            chart.style(
                node_id(&resource.address),
                StyleDefinition::with_color(resource.color(), STROKE, TEXT_COLOR),
            );
        }

        Ok(chart)
    }

    fn kind(&self) -> DiagramKind {
        DiagramKind::Architecture
    }
}
