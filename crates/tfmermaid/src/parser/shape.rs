//! Document shape detection
//!
//! Terraform emits different JSON layouts depending on the command:
//! `terraform show -json <plan>` nests resources under `planned_values`,
//! `terraform show -json` on state nests them under `values`, and raw
//! `.tfstate` files keep a flat top-level `resources` list.

use std::fmt;

use serde_json::Value;
use tracing::trace;

/// Top-level layout of a Terraform JSON document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentShape {
    /// `planned_values.root_module` with recursive `child_modules`
    Plan,
    /// `values.root_module` with recursive `child_modules`
    State,
    /// Flat top-level `resources` list, as found in `.tfstate` files
    Legacy,
}

impl DocumentShape {
    /// Sniff the shape from the top-level keys
    ///
    /// `planned_values` wins over `values`; documents with neither are
    /// treated as legacy state.
    pub fn detect(document: &Value) -> Self {
        let shape = if document.get("planned_values").is_some() {
            DocumentShape::Plan
        } else if document.get("values").is_some() {
            DocumentShape::State
        } else {
            DocumentShape::Legacy
        };
        trace!(shape = %shape, "Detected document shape");
        shape
    }

    /// Top-level key holding the root module, if this shape has one
    pub fn root_key(&self) -> Option<&'static str> {
        match self {
            DocumentShape::Plan => Some("planned_values"),
            DocumentShape::State => Some("values"),
            DocumentShape::Legacy => None,
        }
    }

    /// Parsing mode used for resources in this shape
    pub fn mode(&self) -> ParseMode {
        match self {
            DocumentShape::Plan => ParseMode::Plan,
            DocumentShape::State | DocumentShape::Legacy => ParseMode::State,
        }
    }
}

impl fmt::Display for DocumentShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentShape::Plan => write!(f, "plan"),
            DocumentShape::State => write!(f, "state"),
            DocumentShape::Legacy => write!(f, "legacy"),
        }
    }
}

/// Which single-resource schema to apply
///
/// State resources carry `instances[]` with `attributes` and `dependencies`;
/// plan resources carry `address`, `provider_name` and `values` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseMode {
    Plan,
    State,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plan_shape() {
        let doc = json!({ "planned_values": { "root_module": {} } });
        assert_eq!(DocumentShape::detect(&doc), DocumentShape::Plan);
        assert_eq!(DocumentShape::Plan.mode(), ParseMode::Plan);
    }

    #[test]
    fn test_plan_takes_priority_over_values() {
        let doc = json!({ "values": {}, "planned_values": {} });
        assert_eq!(DocumentShape::detect(&doc), DocumentShape::Plan);
    }

    #[test]
    fn test_state_shape() {
        let doc = json!({ "format_version": "1.0", "values": { "root_module": {} } });
        assert_eq!(DocumentShape::detect(&doc), DocumentShape::State);
        assert_eq!(DocumentShape::State.root_key(), Some("values"));
    }

    #[test]
    fn test_legacy_shape() {
        let doc = json!({ "version": 4, "resources": [] });
        assert_eq!(DocumentShape::detect(&doc), DocumentShape::Legacy);
        assert_eq!(DocumentShape::Legacy.root_key(), None);
        assert_eq!(DocumentShape::Legacy.mode(), ParseMode::State);
    }
}
