//! Core type definitions for diagram generation
//!
//! This module contains the Mermaid building blocks used by every diagram
//! kind: flow direction, node shapes, edge types, node and edge data, and
//! style definitions. It also holds the user-facing diagram kind and output
//! format selectors.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::DiagramError;

/// Flow direction declared on the `graph` line
///
/// Mermaid treats `TB` and `TD` identically, but the two spellings are kept
/// apart so each diagram kind reproduces its exact header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Direction {
    /// Top to bottom (`TB`)
    #[default]
    TopToBottom,
    /// Top down (`TD`)
    TopDown,
    /// Left to right (`LR`)
    LeftRight,
}


impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::TopToBottom => write!(f, "TB"),
            Direction::TopDown => write!(f, "TD"),
            Direction::LeftRight => write!(f, "LR"),
        }
    }
}

/// Node shapes used by the generated diagrams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum NodeShape {
    /// Rectangle: `A[label]`
    #[default]
    Rectangle,
    /// Stadium: `A([label])`
    Stadium,
    /// Cylinder (database): `A[(label)]`
    Cylinder,
    /// Diamond (decision): `A{label}`
    Diamond,
}

impl NodeShape {
    /// Opening and closing delimiters for this shape
    pub fn delimiters(&self) -> (&'static str, &'static str) {
        match self {
            NodeShape::Rectangle => ("[", "]"),
            NodeShape::Stadium => ("([", "])"),
            NodeShape::Cylinder => ("[(", ")]"),
            NodeShape::Diamond => ("{", "}"),
        }
    }
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeShape::Rectangle => write!(f, "rectangle"),
            NodeShape::Stadium => write!(f, "stadium"),
            NodeShape::Cylinder => write!(f, "cylinder"),
            NodeShape::Diamond => write!(f, "diamond"),
        }
    }
}

/// Edge types used by the generated diagrams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum EdgeType {
    /// Solid arrow for declared dependencies: `-->`
    #[default]
    Arrow,
    /// Dotted arrow for inferred relationships: `-.->`
    DottedArrow,
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeType::Arrow => write!(f, "-->"),
            EdgeType::DottedArrow => write!(f, "-.->"),
        }
    }
}

/// A node declaration with all its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Unique identifier for the node
    pub id: String,
    /// Display label, may contain `<br/>` line breaks
    pub label: String,
    /// Visual shape of the node
    pub shape: NodeShape,
}

impl NodeData {
    /// Create a new node with default rectangle shape
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            shape: NodeShape::Rectangle,
        }
    }

    /// Create a new node with a specific shape
    pub fn with_shape(id: impl Into<String>, label: impl Into<String>, shape: NodeShape) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            shape,
        }
    }
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = self.shape.delimiters();
        write!(f, "{}{}{}{}", self.id, open, self.label, close)
    }
}

/// One end of an edge: either a bare node ID or an inline node declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Reference to a node declared elsewhere
    Id(String),
    /// Node declared in place, e.g. `LB[Load Balancer]`
    Node(NodeData),
}

impl Endpoint {
    /// The node ID this endpoint refers to
    pub fn id(&self) -> &str {
        match self {
            Endpoint::Id(id) => id,
            Endpoint::Node(node) => &node.id,
        }
    }
}

impl From<&str> for Endpoint {
    fn from(id: &str) -> Self {
        Endpoint::Id(id.to_string())
    }
}

impl From<String> for Endpoint {
    fn from(id: String) -> Self {
        Endpoint::Id(id)
    }
}

impl From<NodeData> for Endpoint {
    fn from(node: NodeData) -> Self {
        Endpoint::Node(node)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Id(id) => write!(f, "{}", id),
            Endpoint::Node(node) => write!(f, "{}", node),
        }
    }
}

/// An edge connecting two nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeData {
    /// Source endpoint
    pub from: Endpoint,
    /// Target endpoint
    pub to: Endpoint,
    /// Visual type of the edge
    pub edge_type: EdgeType,
    /// Optional label on the edge
    pub label: Option<String>,
}

impl EdgeData {
    /// Create a new edge with default arrow type
    pub fn new(from: impl Into<Endpoint>, to: impl Into<Endpoint>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            edge_type: EdgeType::Arrow,
            label: None,
        }
    }

    /// Create a new edge with a label
    pub fn with_label(
        from: impl Into<Endpoint>,
        to: impl Into<Endpoint>,
        edge_type: EdgeType,
        label: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            edge_type,
            label: Some(label.into()),
        }
    }
}

impl fmt::Display for EdgeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{} {}|{}| {}", self.from, self.edge_type, label, self.to),
            None => write!(f, "{} {} {}", self.from, self.edge_type, self.to),
        }
    }
}

/// Per-node style: `fill:<fill>,stroke:<stroke>[,color:<color>]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDefinition {
    pub fill: String,
    pub stroke: String,
    pub color: Option<String>,
}

impl StyleDefinition {
    /// Fill and stroke only
    pub fn new(fill: impl Into<String>, stroke: impl Into<String>) -> Self {
        Self {
            fill: fill.into(),
            stroke: stroke.into(),
            color: None,
        }
    }

    /// Fill and stroke with an explicit text color
    pub fn with_color(
        fill: impl Into<String>,
        stroke: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            fill: fill.into(),
            stroke: stroke.into(),
            color: Some(color.into()),
        }
    }
}

impl fmt::Display for StyleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fill:{},stroke:{}", self.fill, self.stroke)?;
        if let Some(color) = &self.color {
            write!(f, ",color:{}", color)?;
        }
        Ok(())
    }
}

/// The three diagram layouts this crate can generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramKind {
    /// Resources grouped by category with dependency edges
    Architecture,
    /// Static network topology
    Network,
    /// Static request/data flow
    #[serde(rename = "dataflow")]
    DataFlow,
}

impl DiagramKind {
    /// Every kind, in the order the `all` selection generates them
    pub const ALL: [DiagramKind; 3] = [
        DiagramKind::Architecture,
        DiagramKind::Network,
        DiagramKind::DataFlow,
    ];

    /// Name used on the command line and in output filenames
    pub fn name(&self) -> &'static str {
        match self {
            DiagramKind::Architecture => "architecture",
            DiagramKind::Network => "network",
            DiagramKind::DataFlow => "dataflow",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            DiagramKind::Architecture => "Resources grouped by category with dependency edges",
            DiagramKind::Network => "Canonical network topology (static)",
            DiagramKind::DataFlow => "Canonical request and data flow (static)",
        }
    }

    /// Whether the output depends on the parsed resources
    pub fn is_data_driven(&self) -> bool {
        matches!(self, DiagramKind::Architecture)
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DiagramKind {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "architecture" => Ok(DiagramKind::Architecture),
            "network" => Ok(DiagramKind::Network),
            "dataflow" => Ok(DiagramKind::DataFlow),
            _ => Err(DiagramError::UnknownDiagramKind {
                kind: s.to_string(),
            }),
        }
    }
}

/// How diagram text is packaged for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum OutputFormat {
    /// Raw Mermaid text
    #[default]
    Mermaid,
    /// Mermaid text fenced in a markdown code block
    Markdown,
}

impl OutputFormat {
    /// Package diagram text for this format
    pub fn wrap(&self, diagram: &str) -> String {
        match self {
            OutputFormat::Mermaid => diagram.to_string(),
            OutputFormat::Markdown => format!("```mermaid\n{}\n```", diagram),
        }
    }

    /// File extension conventionally used for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Mermaid => "mmd",
            OutputFormat::Markdown => "md",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Mermaid => write!(f, "mermaid"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mermaid" => Ok(OutputFormat::Mermaid),
            "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(DiagramError::UnknownOutputFormat {
                format: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::TopToBottom.to_string(), "TB");
        assert_eq!(Direction::TopDown.to_string(), "TD");
        assert_eq!(Direction::LeftRight.to_string(), "LR");
    }

    #[test]
    fn test_node_display() {
        assert_eq!(NodeData::new("A", "Label").to_string(), "A[Label]");
        assert_eq!(
            NodeData::with_shape("U", "User", NodeShape::Stadium).to_string(),
            "U([User])"
        );
        assert_eq!(
            NodeData::with_shape("DB", "Database", NodeShape::Cylinder).to_string(),
            "DB[(Database)]"
        );
        assert_eq!(
            NodeData::with_shape("Auth", "Authentication", NodeShape::Diamond).to_string(),
            "Auth{Authentication}"
        );
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(EdgeData::new("a", "b").to_string(), "a --> b");
        assert_eq!(
            EdgeData::with_label("run", "sql", EdgeType::DottedArrow, "connects to").to_string(),
            "run -.->|connects to| sql"
        );
        let inline = EdgeData::new(
            NodeData::with_shape("Internet", "Internet", NodeShape::Stadium),
            NodeData::new("LB", "Load Balancer"),
        );
        assert_eq!(inline.to_string(), "Internet([Internet]) --> LB[Load Balancer]");
        assert_eq!(inline.from.id(), "Internet");
        assert_eq!(inline.to.id(), "LB");
    }

    #[test]
    fn test_style_display() {
        assert_eq!(
            StyleDefinition::new("#f9f", "#333").to_string(),
            "fill:#f9f,stroke:#333"
        );
        assert_eq!(
            StyleDefinition::with_color("#4285f4", "#333", "#fff").to_string(),
            "fill:#4285f4,stroke:#333,color:#fff"
        );
    }

    #[test]
    fn test_diagram_kind_round_trip_names() {
        for kind in DiagramKind::ALL {
            assert_eq!(kind.name().parse::<DiagramKind>().unwrap(), kind);
        }
        assert!("all".parse::<DiagramKind>().is_err());
        assert!(DiagramKind::Architecture.is_data_driven());
        assert!(!DiagramKind::Network.is_data_driven());
    }

    #[test]
    fn test_output_format_wrap() {
        assert_eq!(OutputFormat::Mermaid.wrap("graph TB"), "graph TB");
        assert_eq!(
            OutputFormat::Markdown.wrap("graph TB"),
            "```mermaid\ngraph TB\n```"
        );
        assert_eq!(OutputFormat::Markdown.extension(), "md");
        assert!("html".parse::<OutputFormat>().is_err());
    }
}
