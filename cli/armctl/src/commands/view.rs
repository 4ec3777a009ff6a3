//! Shared row type for printing identifiers.

use armkit_id::ResourceIdentifier;
use serde::Serialize;
use tabled::Tabled;

/// A flattened identifier, as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct ResourceView {
    #[tabled(rename = "Name")]
    pub name: String,

    #[tabled(rename = "Type")]
    pub full_resource_type: String,

    #[tabled(skip)]
    pub resource_type: String,

    #[tabled(rename = "Subscription")]
    pub subscription_id: String,

    #[tabled(rename = "Resource Group")]
    pub resource_group_name: String,

    #[tabled(skip)]
    pub provider_namespace: String,

    #[tabled(rename = "Ancestors", display = "display_list")]
    pub ancestors: Vec<String>,

    #[tabled(skip)]
    pub is_top_level: bool,

    #[tabled(rename = "ID")]
    pub id: String,
}

impl From<&ResourceIdentifier> for ResourceView {
    fn from(resource: &ResourceIdentifier) -> Self {
        Self {
            name: resource.name().to_string(),
            full_resource_type: resource.full_resource_type().to_string(),
            resource_type: resource.resource_type().to_string(),
            subscription_id: resource.subscription_id().to_string(),
            resource_group_name: resource.resource_group_name().to_string(),
            provider_namespace: resource.provider_namespace().to_string(),
            ancestors: resource.ancestors().to_vec(),
            is_top_level: resource.is_top_level(),
            id: resource.id().to_string(),
        }
    }
}

fn display_list(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
