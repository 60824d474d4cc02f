//! Resource records and their category/icon/color lookup tables
//!
//! A [`Resource`] is a plain value extracted from one Terraform resource
//! declaration. Category, icon and color are derived on access from fixed
//! tables; unknown types fall back to `Other`, a wrench glyph and gray.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Resource category, used for subgraph grouping and fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Storage,
    Compute,
    Database,
    #[serde(rename = "IAM")]
    Iam,
    Monitoring,
    Other,
}

const CATEGORY_TABLE: &[(&str, Category)] = &[
    ("google_storage_bucket", Category::Storage),
    ("google_cloud_run_service", Category::Compute),
    ("google_sql_database_instance", Category::Database),
    ("google_sql_database", Category::Database),
    ("google_service_account", Category::Iam),
    ("google_project_iam_member", Category::Iam),
    ("google_storage_bucket_iam_member", Category::Iam),
    ("google_cloud_run_service_iam_member", Category::Iam),
    ("google_monitoring_dashboard", Category::Monitoring),
    ("google_logging_project_sink", Category::Monitoring),
];

const ICON_TABLE: &[(&str, &str)] = &[
    ("google_storage_bucket", "📦"),
    ("google_cloud_run_service", "🚀"),
    ("google_sql_database_instance", "🗄️"),
    ("google_sql_database", "💾"),
    ("google_service_account", "👤"),
    ("google_monitoring_dashboard", "📊"),
    ("google_logging_project_sink", "📝"),
];

/// Icon for resource types missing from the icon table
pub const DEFAULT_ICON: &str = "🔧";

const COLOR_TABLE: &[(Category, &str)] = &[
    (Category::Storage, "#4285f4"),
    (Category::Compute, "#34a853"),
    (Category::Database, "#fbbc04"),
    (Category::Iam, "#ea4335"),
    (Category::Monitoring, "#9c27b0"),
    (Category::Other, "#607d8b"),
];

/// Fill color for categories missing from the color table
pub const DEFAULT_COLOR: &str = "#607d8b";

impl Category {
    /// Look up the category for a Terraform resource type
    pub fn for_type(resource_type: &str) -> Self {
        CATEGORY_TABLE
            .iter()
            .find(|(ty, _)| *ty == resource_type)
            .map(|(_, category)| *category)
            .unwrap_or(Category::Other)
    }

    /// Fill color for nodes in this category
    pub fn color(&self) -> &'static str {
        COLOR_TABLE
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, color)| *color)
            .unwrap_or(DEFAULT_COLOR)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Storage => "Storage",
            Category::Compute => "Compute",
            Category::Database => "Database",
            Category::Iam => "IAM",
            Category::Monitoring => "Monitoring",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Icon glyph for a Terraform resource type
pub fn icon_for_type(resource_type: &str) -> &'static str {
    ICON_TABLE
        .iter()
        .find(|(ty, _)| *ty == resource_type)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// One managed infrastructure object from a state or plan document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    pub address: String,
    pub provider: String,
    pub attributes: Map<String, Value>,
    pub dependencies: Vec<String>,
}

impl Resource {
    pub fn new(
        resource_type: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
            address: address.into(),
            provider: String::new(),
            attributes: Map::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn with_attributes(mut self, attributes: Map<String, Value>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// Human-readable name: dashes become spaces and each word is title-cased
    pub fn display_name(&self) -> String {
        title_case(&self.name.replace('-', " "))
    }

    pub fn category(&self) -> Category {
        Category::for_type(&self.resource_type)
    }

    pub fn icon(&self) -> &'static str {
        icon_for_type(&self.resource_type)
    }

    pub fn color(&self) -> &'static str {
        self.category().color()
    }

    /// The `name` attribute rendered for a node label, if present
    ///
    /// Strings are used verbatim; other JSON values use their compact JSON form.
    pub fn name_attribute(&self) -> Option<String> {
        self.attributes.get("name").map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Upper-case the first letter of every run of letters, lower-case the rest
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
