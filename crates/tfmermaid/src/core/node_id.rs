//! Node-ID derivation from Terraform addresses
//!
//! Addresses such as `google_project_service.apis["run.googleapis.com"]` are
//! not valid Mermaid identifiers. [`node_id`] maps an address to a stable,
//! diagram-safe ID. Node declarations and edge endpoints must both go through
//! this function or the diagram references undefined nodes.

use std::sync::LazyLock;

use regex::Regex;

/// First quoted bracket key, e.g. `["cloudresourcemanager.googleapis.com"]`
static QUOTED_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\["([^"]+)"\]"#).expect("valid quoted key regex"));

/// Any bracketed segment, shortest match
static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("valid bracket regex"));

/// Convert a resource address to a Mermaid node ID
///
/// The first quoted for_each key contributes a suffix (its text before the
/// first `.`, with `-` mapped to `_`) so that instances keyed by different
/// services stay distinct. All bracketed segments are then removed and `.`
/// and `-` become `_`.
///
/// # Example
/// ```
/// use tfmermaid::core::node_id;
///
/// assert_eq!(
///     node_id(r#"google_project_service.apis["cloudresourcemanager.googleapis.com"]"#),
///     "google_project_service_apis_cloudresourcemanager"
/// );
/// assert_eq!(node_id("google_storage_bucket.docs-store"), "google_storage_bucket_docs_store");
/// ```
pub fn node_id(address: &str) -> String {
    let suffix = QUOTED_KEY
        .captures(address)
        .and_then(|caps| caps.get(1))
        .map(|key| {
            let head = key.as_str().split('.').next().unwrap_or_default();
            format!("_{}", head.replace('-', "_"))
        })
        .unwrap_or_default();

    let stripped = BRACKETED.replace_all(address, "");
    let mut id = stripped.replace(['.', '-'], "_");
    id.push_str(&suffix);
    id
}
