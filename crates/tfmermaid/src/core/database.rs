//! Resource database
//!
//! Stores parsed resources keyed by address while remembering insertion
//! order, so every diagram built from the same document is byte-identical.

use std::collections::HashMap;
use tracing::trace;

use super::{Category, Resource};

/// Resources indexed by address, iterated in first-insertion order
#[derive(Debug, Clone, Default)]
pub struct ResourceDatabase {
    /// Resources indexed by address
    resources: HashMap<String, Resource>,
    /// Addresses in insertion order (for deterministic iteration)
    order: Vec<String>,
}

impl ResourceDatabase {
    /// Create a new empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resource, replacing any resource with the same address
    ///
    /// A replaced resource keeps the position of the original entry.
    /// Returns the replaced resource, if any.
    pub fn insert(&mut self, resource: Resource) -> Option<Resource> {
        let address = resource.address.clone();
        let previous = self.resources.insert(address.clone(), resource);
        if previous.is_some() {
            trace!(address = %address, "Replaced resource with duplicate address");
        } else {
            self.order.push(address);
        }
        previous
    }

    /// Get a resource by address
    pub fn get(&self, address: &str) -> Option<&Resource> {
        self.resources.get(address)
    }

    /// Check if a resource exists
    pub fn contains(&self, address: &str) -> bool {
        self.resources.contains_key(address)
    }

    /// Iterate over all resources in insertion order
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.order.iter().filter_map(|address| self.resources.get(address))
    }

    /// Addresses in insertion order
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for resource in self.resources() {
            let category = resource.category();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Resources in one category, in insertion order
    pub fn resources_in(&self, category: Category) -> impl Iterator<Item = &Resource> {
        self.resources()
            .filter(move |resource| resource.category() == category)
    }

    /// Dependencies of a resource that resolve to resources in this database
    pub fn resolved_dependencies<'a>(
        &'a self,
        resource: &'a Resource,
    ) -> impl Iterator<Item = &'a str> + 'a {
        resource
            .dependencies
            .iter()
            .map(String::as_str)
            .filter(move |dep| {
                let known = self.contains(dep);
                if !known {
                    trace!(from = %resource.address, to = %dep, "Dropping dangling dependency");
                }
                known
            })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Clear all data from the database
    pub fn clear(&mut self) {
        self.resources.clear();
        self.order.clear();
    }
}

impl FromIterator<Resource> for ResourceDatabase {
    fn from_iter<I: IntoIterator<Item = Resource>>(iter: I) -> Self {
        let mut database = ResourceDatabase::new();
        for resource in iter {
            database.insert(resource);
        }
        database
    }
}
