//! Module traversal and single-resource extraction

use serde_json::Value;
use tracing::{debug, trace};

use super::fields::{self, child_path, index_path};
use super::ParseMode;
use crate::core::{DiagramError, Resource, ResourceDatabase, Result};

const MANAGED: &str = "managed";

/// Parse every resource in `module` and, depth first, in all of its child modules
pub(crate) fn walk_module(
    module: &Value,
    mode: ParseMode,
    path: &str,
    database: &mut ResourceDatabase,
) -> Result<()> {
    if !module.is_object() && !module.is_null() {
        return Err(DiagramError::shape(path, "object"));
    }

    let resources_path = child_path(path, "resources");
    let resources = fields::array(module, "resources", path)?;
    debug!(module = %path, resource_count = resources.len(), "Parsing module");
    for (index, block) in resources.iter().enumerate() {
        let block_path = index_path(&resources_path, index);
        match mode {
            ParseMode::Plan => parse_plan_resource(block, &block_path, database)?,
            ParseMode::State => parse_state_resource(block, &block_path, database)?,
        }
    }

    let children_path = child_path(path, "child_modules");
    for (index, child) in fields::array(module, "child_modules", path)?
        .iter()
        .enumerate()
    {
        walk_module(child, mode, &index_path(&children_path, index), database)?;
    }

    Ok(())
}

fn is_managed(block: &Value, path: &str) -> Result<bool> {
    let mode = fields::optional_string(block, "mode", path)?.unwrap_or(MANAGED);
    if mode != MANAGED {
        trace!(block = %path, mode, "Skipping non-managed resource");
    }
    Ok(mode == MANAGED)
}

/// State schema: one resource per entry in `instances[]`
///
/// Every instance is keyed by `type.name`, so count/for_each instances
/// overwrite each other and only the last one survives.
pub(crate) fn parse_state_resource(
    block: &Value,
    path: &str,
    database: &mut ResourceDatabase,
) -> Result<()> {
    if !block.is_object() {
        return Err(DiagramError::shape(path, "object"));
    }
    if !is_managed(block, path)? {
        return Ok(());
    }

    let resource_type = fields::string(block, "type", path)?;
    let name = fields::string(block, "name", path)?;
    let provider = fields::string(block, "provider", path)?;
    let address = format!("{}.{}", resource_type, name);

    let instances_path = child_path(path, "instances");
    for (index, instance) in fields::array(block, "instances", path)?.iter().enumerate() {
        let instance_path = index_path(&instances_path, index);
        let attributes = fields::object(instance, "attributes", &instance_path)?
            .cloned()
            .unwrap_or_default();
        let dependencies = fields::string_list(instance, "dependencies", &instance_path)?;

        trace!(address = %address, instance = index, "Parsed state resource instance");
        database.insert(
            Resource::new(resource_type, name, address.clone())
                .with_provider(provider)
                .with_attributes(attributes)
                .with_dependencies(dependencies),
        );
    }

    Ok(())
}

/// Plan schema: exactly one resource per block, never any dependencies
pub(crate) fn parse_plan_resource(
    block: &Value,
    path: &str,
    database: &mut ResourceDatabase,
) -> Result<()> {
    if !block.is_object() {
        return Err(DiagramError::shape(path, "object"));
    }
    if !is_managed(block, path)? {
        return Ok(());
    }

    let resource_type = fields::string(block, "type", path)?;
    let name = fields::string(block, "name", path)?;
    let address = match fields::optional_string(block, "address", path)? {
        Some(address) => address.to_string(),
        None => format!("{}.{}", resource_type, name),
    };
    let provider = fields::string(block, "provider_name", path)?;
    let attributes = fields::object(block, "values", path)?
        .cloned()
        .unwrap_or_default();

    trace!(address = %address, "Parsed plan resource");
    database.insert(
        Resource::new(resource_type, name, address)
            .with_provider(provider)
            .with_attributes(attributes),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_state_resource_last_instance_wins() {
        let block = json!({
            "mode": "managed",
            "type": "google_storage_bucket",
            "name": "logs",
            "provider": "provider[\"registry.terraform.io/hashicorp/google\"]",
            "instances": [
                { "index_key": 0, "attributes": { "name": "logs-0" } },
                { "index_key": 1, "attributes": { "name": "logs-1" }, "dependencies": ["google_project.p"] }
            ]
        });
        let mut db = ResourceDatabase::new();
        parse_state_resource(&block, "resources[0]", &mut db).unwrap();

        assert_eq!(db.len(), 1);
        let resource = db.get("google_storage_bucket.logs").unwrap();
        assert_eq!(resource.attributes["name"], "logs-1");
        assert_eq!(resource.dependencies, vec!["google_project.p"]);
        assert!(resource.provider.contains("hashicorp/google"));
    }

    #[test]
    fn test_state_resource_without_instances_yields_nothing() {
        let block = json!({ "type": "google_storage_bucket", "name": "x" });
        let mut db = ResourceDatabase::new();
        parse_state_resource(&block, "resources[0]", &mut db).unwrap();
        assert!(db.is_empty());
    }

    #[test]
    fn test_data_sources_are_skipped() {
        let block = json!({
            "mode": "data",
            "type": "google_project",
            "name": "current",
            "address": "data.google_project.current",
            "instances": [{ "attributes": {} }]
        });
        let mut db = ResourceDatabase::new();
        parse_state_resource(&block, "r", &mut db).unwrap();
        parse_plan_resource(&block, "r", &mut db).unwrap();
        assert!(db.is_empty());
    }

    #[test]
    fn test_plan_resource_fields() {
        let block = json!({
            "address": "google_project_service.apis[\"run.googleapis.com\"]",
            "mode": "managed",
            "type": "google_project_service",
            "name": "apis",
            "index": "run.googleapis.com",
            "provider_name": "registry.terraform.io/hashicorp/google",
            "values": { "service": "run.googleapis.com" }
        });
        let mut db = ResourceDatabase::new();
        parse_plan_resource(&block, "r", &mut db).unwrap();

        let resource = db
            .get("google_project_service.apis[\"run.googleapis.com\"]")
            .unwrap();
        assert_eq!(resource.provider, "registry.terraform.io/hashicorp/google");
        assert_eq!(resource.attributes["service"], "run.googleapis.com");
        assert!(resource.dependencies.is_empty());
    }

    #[test]
    fn test_plan_resource_address_fallback() {
        let block = json!({ "type": "google_sql_database", "name": "app" });
        let mut db = ResourceDatabase::new();
        parse_plan_resource(&block, "r", &mut db).unwrap();
        assert!(db.contains("google_sql_database.app"));
    }

    #[test]
    fn test_walk_rejects_non_object_module() {
        let mut db = ResourceDatabase::new();
        let err = walk_module(&json!([1, 2]), ParseMode::Plan, "planned_values.root_module", &mut db)
            .unwrap_err();
        assert!(err.to_string().contains("planned_values.root_module"));
    }
}
