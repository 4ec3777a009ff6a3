//! Builder for constructing resource identifiers one component at a time.

use crate::error::ResourceIdError;
use crate::resource::ResourceIdentifier;

/// Builder for [`ResourceIdentifier`].
///
/// Ancestors are appended as `(type, name)` pairs, outermost first, so the
/// type and name sequences can never disagree in length.
#[derive(Debug, Clone, Default)]
pub struct ResourceIdentifierBuilder {
    subscription_id: Option<String>,
    resource_group_name: Option<String>,
    provider_namespace: Option<String>,
    resource_type: Option<String>,
    name: Option<String>,
    ancestor_types: Vec<String>,
    ancestor_names: Vec<String>,
}

impl ResourceIdentifierBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscription_id(mut self, subscription_id: impl Into<String>) -> Self {
        self.subscription_id = Some(subscription_id.into());
        self
    }

    pub fn resource_group_name(mut self, resource_group_name: impl Into<String>) -> Self {
        self.resource_group_name = Some(resource_group_name.into());
        self
    }

    pub fn provider_namespace(mut self, provider_namespace: impl Into<String>) -> Self {
        self.provider_namespace = Some(provider_namespace.into());
        self
    }

    /// Sets the leaf type and name.
    pub fn resource(mut self, resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self.name = Some(name.into());
        self
    }

    /// Appends one ancestor below the ones already added.
    pub fn ancestor(mut self, ancestor_type: impl Into<String>, name: impl Into<String>) -> Self {
        self.ancestor_types.push(ancestor_type.into());
        self.ancestor_names.push(name.into());
        self
    }

    /// Builds the identifier.
    ///
    /// Missing components are reported as [`ResourceIdError::InvalidArgument`]
    /// naming the missing parameter.
    pub fn build(self) -> Result<ResourceIdentifier, ResourceIdError> {
        ResourceIdentifier::new(
            required("subscription_id", self.subscription_id)?,
            required("resource_group_name", self.resource_group_name)?,
            required("provider_namespace", self.provider_namespace)?,
            required("resource_type", self.resource_type)?,
            required("name", self.name)?,
            self.ancestor_types,
            self.ancestor_names,
        )
    }
}

fn required(parameter: &'static str, value: Option<String>) -> Result<String, ResourceIdError> {
    value.ok_or_else(|| ResourceIdError::invalid_argument(parameter, "is required"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_nested() {
        let r = ResourceIdentifier::builder()
            .subscription_id("S1")
            .resource_group_name("RG1")
            .provider_namespace("Prov.X")
            .ancestor("ancT1", "ancN1")
            .ancestor("ancT2", "ancN2")
            .resource("typeA", "name1")
            .build()
            .unwrap();

        assert_eq!(
            r.id(),
            "subscriptions/S1/resourceGroups/RG1/providers/Prov.X/ancT1/ancN1/ancT2/ancN2/typeA/name1"
        );
        assert_eq!(r.ancestors(), ["ancN1", "ancN2"]);
        assert_eq!(r.full_resource_type(), "Prov.X/ancT1/ancT2/typeA");
    }

    #[test]
    fn test_builder_matches_parse() {
        let built = ResourceIdentifier::builder()
            .subscription_id("S1")
            .resource_group_name("RG1")
            .provider_namespace("Prov.X")
            .resource("typeA", "name1")
            .build()
            .unwrap();
        let parsed = ResourceIdentifier::parse(
            "/subscriptions/S1/resourceGroups/RG1/providers/Prov.X/typeA/name1",
        )
        .unwrap();

        assert_eq!(built, parsed);
        assert!(built.is_top_level());
    }

    #[test]
    fn test_builder_missing_component() {
        let err = ResourceIdentifier::builder()
            .subscription_id("S1")
            .provider_namespace("Prov.X")
            .resource("typeA", "name1")
            .build()
            .unwrap_err();

        assert_eq!(err.parameter(), Some("resource_group_name"));
        assert_eq!(
            err.to_string(),
            "invalid argument 'resource_group_name': is required"
        );
    }

    #[test]
    fn test_builder_empty_component() {
        let err = ResourceIdentifier::builder()
            .subscription_id("")
            .resource_group_name("RG1")
            .provider_namespace("Prov.X")
            .resource("typeA", "name1")
            .build()
            .unwrap_err();

        assert_eq!(err.parameter(), Some("subscription_id"));
    }
}
