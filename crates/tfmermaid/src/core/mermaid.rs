//! Mermaid flowchart document model
//!
//! Every diagram kind builds a [`Flowchart`] and renders it to text, so the
//! Mermaid syntax (indentation, arrows, styles) lives in exactly one place.

use std::collections::BTreeSet;
use std::fmt;

use super::{DiagramError, Direction, EdgeData, NodeData, StyleDefinition};

const INDENT: &str = "    ";

/// A single line (or block) in a flowchart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Empty separator line
    Blank,
    /// `%% text`
    Comment(String),
    /// `subgraph <title>` ... `end`
    Subgraph { title: String, nodes: Vec<NodeData> },
    /// Standalone node declaration
    Node(NodeData),
    /// Edge, possibly with inline node declarations
    Edge(EdgeData),
    /// `style <id> <definition>`
    Style { id: String, style: StyleDefinition },
}

/// A Mermaid `graph` document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Flowchart {
    direction: Direction,
    statements: Vec<Statement>,
}

impl Flowchart {
    /// Create an empty flowchart with the given direction
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            statements: Vec::new(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn push(&mut self, statement: Statement) -> &mut Self {
        self.statements.push(statement);
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.push(Statement::Blank)
    }

    pub fn comment(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Statement::Comment(text.into()))
    }

    pub fn subgraph(&mut self, title: impl Into<String>, nodes: Vec<NodeData>) -> &mut Self {
        self.push(Statement::Subgraph {
            title: title.into(),
            nodes,
        })
    }

    pub fn node(&mut self, node: NodeData) -> &mut Self {
        self.push(Statement::Node(node))
    }

    pub fn edge(&mut self, edge: EdgeData) -> &mut Self {
        self.push(Statement::Edge(edge))
    }

    pub fn style(&mut self, id: impl Into<String>, style: StyleDefinition) -> &mut Self {
        self.push(Statement::Style {
            id: id.into(),
            style,
        })
    }

    /// IDs of every node declared anywhere in the document
    ///
    /// Includes nodes inside subgraphs and nodes declared inline on edges.
    pub fn declared_ids(&self) -> BTreeSet<&str> {
        let mut ids = BTreeSet::new();
        for statement in &self.statements {
            match statement {
                Statement::Subgraph { nodes, .. } => {
                    ids.extend(nodes.iter().map(|n| n.id.as_str()));
                }
                Statement::Node(node) => {
                    ids.insert(node.id.as_str());
                }
                Statement::Edge(edge) => {
                    for end in [&edge.from, &edge.to] {
                        if let super::Endpoint::Node(node) = end {
                            ids.insert(node.id.as_str());
                        }
                    }
                }
                Statement::Blank | Statement::Comment(_) | Statement::Style { .. } => {}
            }
        }
        ids
    }

    /// Iterate over all edges in document order
    pub fn edges(&self) -> impl Iterator<Item = &EdgeData> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Edge(edge) => Some(edge),
            _ => None,
        })
    }

    /// Fail if any edge or style names a node that is never declared
    pub fn check_references(&self) -> super::Result<()> {
        let declared = self.declared_ids();
        let referenced = self.statements.iter().flat_map(|s| match s {
            Statement::Edge(edge) => vec![edge.from.id(), edge.to.id()],
            Statement::Style { id, .. } => vec![id.as_str()],
            _ => Vec::new(),
        });
        for id in referenced {
            if !declared.contains(id) {
                return Err(DiagramError::render_error(format!(
                    "reference to undeclared node '{}'",
                    id
                )));
            }
        }
        Ok(())
    }

    /// Number of edges in the document
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Render the document as Mermaid text (lines joined by `\n`, no trailing newline)
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Flowchart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graph {}", self.direction)?;
        for statement in &self.statements {
            match statement {
                Statement::Blank => f.write_str("\n")?,
                Statement::Comment(text) => write!(f, "\n{INDENT}%% {}", text)?,
                Statement::Subgraph { title, nodes } => {
                    write!(f, "\n{INDENT}subgraph {}", title)?;
                    for node in nodes {
                        write!(f, "\n{INDENT}{INDENT}{}", node)?;
                    }
                    write!(f, "\n{INDENT}end")?;
                }
                Statement::Node(node) => write!(f, "\n{INDENT}{}", node)?,
                Statement::Edge(edge) => write!(f, "\n{INDENT}{}", edge)?,
                Statement::Style { id, style } => write!(f, "\n{INDENT}style {} {}", id, style)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EdgeType, NodeShape};

    #[test]
    fn test_check_references() {
        let mut chart = Flowchart::new(Direction::LeftRight);
        chart
            .edge(EdgeData::new(NodeData::new("A", "A"), NodeData::new("B", "B")))
            .edge(EdgeData::new("B", "A"))
            .style("A", StyleDefinition::new("#f9f", "#333"));
        assert!(chart.check_references().is_ok());

        chart.edge(EdgeData::new("A", "ghost"));
        let err = chart.check_references().unwrap_err();
        assert_eq!(err.to_string(), "Render error: reference to undeclared node 'ghost'");
    }

    #[test]
    fn test_empty_flowchart_is_header_only() {
        assert_eq!(Flowchart::new(Direction::TopToBottom).render(), "graph TB");
    }

    #[test]
    fn test_subgraph_rendering() {
        let mut chart = Flowchart::new(Direction::TopToBottom);
        chart
            .blank()
            .subgraph("Storage", vec![NodeData::new("bucket", "Bucket")])
            .blank();

        assert_eq!(
            chart.render(),
            "graph TB\n\n    subgraph Storage\n        bucket[Bucket]\n    end\n"
        );
    }

    #[test]
    fn test_edges_comments_and_styles() {
        let mut chart = Flowchart::new(Direction::LeftRight);
        chart
            .comment("Dependencies")
            .edge(EdgeData::new("a", "b"))
            .edge(EdgeData::with_label(
                "a",
                "c",
                EdgeType::DottedArrow,
                "connects to",
            ))
            .style("a", StyleDefinition::with_color("#34a853", "#333", "#fff"));

        assert_eq!(
            chart.render(),
            "graph LR\n    %% Dependencies\n    a --> b\n    a -.->|connects to| c\n    style a fill:#34a853,stroke:#333,color:#fff"
        );
        assert_eq!(chart.edge_count(), 2);
    }

    #[test]
    fn test_declared_ids_include_inline_and_subgraph_nodes() {
        let mut chart = Flowchart::new(Direction::TopDown);
        chart
            .subgraph("IAM", vec![NodeData::new("sa", "SA")])
            .node(NodeData::new("solo", "Solo"))
            .edge(EdgeData::new(
                NodeData::with_shape("User", "User", NodeShape::Stadium),
                "solo",
            ));

        let ids: Vec<&str> = chart.declared_ids().into_iter().collect();
        assert_eq!(ids, vec!["User", "sa", "solo"]);
    }
}
