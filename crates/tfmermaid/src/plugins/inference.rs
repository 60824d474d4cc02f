//! Inferred relationships
//!
//! Some relationships are not spelled out in `dependencies` but follow from
//! resource types. Each [`InferenceRule`] looks at one resource and may emit
//! extra dashed edges. Inferred edges only target resources present in the
//! database, same as declared dependencies.

use tracing::trace;

use crate::core::{node_id, EdgeData, EdgeType, Resource, ResourceDatabase};

/// Label on edges inferred from a compute service to its database
pub const CONNECTS_TO: &str = "connects to";

const CLOUD_RUN_SERVICE: &str = "google_cloud_run_service";
const SQL_INSTANCE: &str = "google_sql_database_instance";
const IAM_MEMBER: &str = "iam_member";

/// A type-based heuristic producing edges absent from the source data
pub trait InferenceRule: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Whether this rule looks at the given resource at all
    fn applies_to(&self, resource: &Resource) -> bool;

    /// Edges inferred for `resource`, in a deterministic order
    fn infer(&self, resource: &Resource, database: &ResourceDatabase) -> Vec<EdgeData>;
}

/// Cloud Run services connect to the SQL instances they depend on
#[derive(Debug, Clone, Copy, Default)]
pub struct CloudRunSqlRule;

impl InferenceRule for CloudRunSqlRule {
    fn name(&self) -> &'static str {
        "cloud-run-sql"
    }

    fn applies_to(&self, resource: &Resource) -> bool {
        resource.resource_type == CLOUD_RUN_SERVICE
    }

    fn infer(&self, resource: &Resource, database: &ResourceDatabase) -> Vec<EdgeData> {
        if !self.applies_to(resource) {
            return Vec::new();
        }
        let source = node_id(&resource.address);
        database
            .resolved_dependencies(resource)
            .filter(|dep| dep.contains(SQL_INSTANCE))
            .map(|dep| {
                trace!(rule = self.name(), from = %resource.address, to = %dep, "Inferred edge");
                EdgeData::with_label(
                    source.clone(),
                    node_id(dep),
                    EdgeType::DottedArrow,
                    CONNECTS_TO,
                )
            })
            .collect()
    }
}

/// IAM member bindings and the resource they grant access to
///
/// Extension point: the granted resource is not linked yet, so this rule
/// matches IAM member types but never emits an edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct IamBindingRule;

impl InferenceRule for IamBindingRule {
    fn name(&self) -> &'static str {
        "iam-binding"
    }

    fn applies_to(&self, resource: &Resource) -> bool {
        resource.resource_type.contains(IAM_MEMBER)
    }

    fn infer(&self, _resource: &Resource, _database: &ResourceDatabase) -> Vec<EdgeData> {
        Vec::new()
    }
}

/// The rules applied by the architecture diagram, in evaluation order
pub fn default_rules() -> Vec<Box<dyn InferenceRule>> {
    vec![Box::new(CloudRunSqlRule), Box::new(IamBindingRule)]
}
