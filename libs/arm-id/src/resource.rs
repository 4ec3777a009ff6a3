//! The resource identifier model.
//!
//! A [`ResourceIdentifier`] is parsed from a slash-delimited path or built from
//! explicit components. Every derived field (`id`, `full_resource_type`) is
//! computed once at construction; the parent identifier is computed on first
//! access and cached.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::builder::ResourceIdentifierBuilder;
use crate::constants::{
    keyword_matches, segments, PROVIDERS, RESOURCE_GROUPS, SEPARATOR, SUBSCRIPTIONS,
};
use crate::error::ResourceIdError;

/// A parsed hierarchical resource identifier.
#[derive(Clone)]
pub struct ResourceIdentifier {
    id: String,
    subscription_id: String,
    resource_group_name: String,
    provider_namespace: String,
    resource_type: String,
    name: String,
    ancestors: Vec<String>,
    full_resource_type: String,
    parent: OnceLock<Option<Box<ResourceIdentifier>>>,
}

impl ResourceIdentifier {
    /// Parses a resource identifier from its path form.
    ///
    /// Keywords (`subscriptions`, `resourceGroups`, `providers`) are matched
    /// case-insensitively. Empty segments are ignored, so leading, trailing,
    /// and doubled slashes are accepted.
    pub fn parse(path: &str) -> Result<Self, ResourceIdError> {
        if path.trim().is_empty() {
            return Err(ResourceIdError::invalid_identifier(path, "identifier is empty"));
        }

        let parts: Vec<&str> = segments(path).collect();
        let mut rest = parts.as_slice();

        let subscription_id = take_keyed(path, &mut rest, SUBSCRIPTIONS)?;
        let resource_group_name = take_keyed(path, &mut rest, RESOURCE_GROUPS)?;
        let provider_namespace = take_keyed(path, &mut rest, PROVIDERS)?;

        let mut ancestor_types = Vec::with_capacity(rest.len() / 2);
        let mut ancestors = Vec::with_capacity(rest.len() / 2);
        while let [ancestor_type, ancestor_name, tail @ ..] = rest {
            if tail.is_empty() {
                break;
            }
            ancestor_types.push(*ancestor_type);
            ancestors.push(ancestor_name.to_string());
            rest = tail;
        }

        let &[resource_type, name] = rest else {
            return Err(ResourceIdError::invalid_identifier(
                path,
                "missing resource type and name",
            ));
        };

        Ok(Self::assemble(
            subscription_id.to_string(),
            resource_group_name.to_string(),
            provider_namespace.to_string(),
            resource_type.to_string(),
            name.to_string(),
            &ancestor_types,
            ancestors,
        ))
    }

    /// Builds an identifier from explicit components.
    ///
    /// `ancestor_types` and `ancestor_names` are parallel sequences, outermost
    /// ancestor first; pass empty sequences for a top-level resource.
    ///
    /// Fails with [`ResourceIdError::InvalidArgument`] if a required component
    /// is empty, if any component contains `/`, or if the ancestor sequences
    /// differ in length.
    pub fn new<T, N>(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        provider_namespace: impl Into<String>,
        resource_type: impl Into<String>,
        name: impl Into<String>,
        ancestor_types: T,
        ancestor_names: N,
    ) -> Result<Self, ResourceIdError>
    where
        T: IntoIterator,
        T::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let subscription_id = component("subscription_id", subscription_id.into())?;
        let resource_group_name = component("resource_group_name", resource_group_name.into())?;
        let provider_namespace = component("provider_namespace", provider_namespace.into())?;
        let resource_type = component("resource_type", resource_type.into())?;
        let name = component("name", name.into())?;

        let ancestor_types: Vec<String> = ancestor_types.into_iter().map(Into::into).collect();
        let ancestor_names: Vec<String> = ancestor_names.into_iter().map(Into::into).collect();

        if ancestor_types.len() != ancestor_names.len() {
            return Err(ResourceIdError::invalid_argument(
                "ancestor_types",
                format!(
                    "ancestor_types and ancestor_names must be the same length ({} vs {})",
                    ancestor_types.len(),
                    ancestor_names.len()
                ),
            ));
        }
        for ancestor_type in &ancestor_types {
            check_component("ancestor_types", ancestor_type)?;
        }
        for ancestor_name in &ancestor_names {
            check_component("ancestor_names", ancestor_name)?;
        }

        Ok(Self::assemble(
            subscription_id,
            resource_group_name,
            provider_namespace,
            resource_type,
            name,
            &ancestor_types,
            ancestor_names,
        ))
    }

    /// Builds a top-level identifier (no ancestors).
    pub fn top_level(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        provider_namespace: impl Into<String>,
        resource_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, ResourceIdError> {
        Self::new(
            subscription_id,
            resource_group_name,
            provider_namespace,
            resource_type,
            name,
            Vec::<String>::new(),
            Vec::<String>::new(),
        )
    }

    /// Creates a new identifier builder.
    pub fn builder() -> ResourceIdentifierBuilder {
        ResourceIdentifierBuilder::new()
    }

    /// Assembles an identifier from components that are already known to be valid.
    fn assemble<S: AsRef<str>>(
        subscription_id: String,
        resource_group_name: String,
        provider_namespace: String,
        resource_type: String,
        name: String,
        ancestor_types: &[S],
        ancestors: Vec<String>,
    ) -> Self {
        debug_assert_eq!(ancestor_types.len(), ancestors.len());

        let mut full_resource_type = provider_namespace.clone();
        for ancestor_type in ancestor_types {
            full_resource_type.push(SEPARATOR);
            full_resource_type.push_str(ancestor_type.as_ref());
        }
        full_resource_type.push(SEPARATOR);
        full_resource_type.push_str(&resource_type);

        let mut resource = Self {
            id: String::new(),
            subscription_id,
            resource_group_name,
            provider_namespace,
            resource_type,
            name,
            ancestors,
            full_resource_type,
            parent: OnceLock::new(),
        };
        resource.id = resource.build_id();
        resource
    }

    /// Renders the canonical path from the components.
    ///
    /// Each intermediate type segment of `full_resource_type` is paired with
    /// the ancestor name at the same position. No leading slash is emitted.
    fn build_id(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(8 + 2 * self.ancestors.len());
        parts.extend([
            SUBSCRIPTIONS,
            self.subscription_id.as_str(),
            RESOURCE_GROUPS,
            self.resource_group_name.as_str(),
            PROVIDERS,
            self.provider_namespace.as_str(),
        ]);

        let ancestor_types = self.ancestor_types();
        for (ancestor_type, ancestor_name) in ancestor_types.into_iter().zip(&self.ancestors) {
            parts.push(ancestor_type);
            parts.push(ancestor_name);
        }

        parts.push(&self.resource_type);
        parts.push(&self.name);

        parts.join("/")
    }

    /// The canonical path of this resource.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The subscription the resource lives in.
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// The resource group the resource lives in.
    pub fn resource_group_name(&self) -> &str {
        &self.resource_group_name
    }

    /// The provider namespace, e.g. `Provider.Service`.
    pub fn provider_namespace(&self) -> &str {
        &self.provider_namespace
    }

    /// The type of the leaf segment.
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// The instance name of the leaf segment.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The provider namespace followed by every ancestor type and the leaf type.
    pub fn full_resource_type(&self) -> &str {
        &self.full_resource_type
    }

    /// Instance names of the ancestor resources, outermost first.
    pub fn ancestors(&self) -> &[String] {
        &self.ancestors
    }

    /// Type names of the ancestor resources, outermost first.
    pub fn ancestor_types(&self) -> Vec<&str> {
        segments(&self.full_resource_type)
            .skip(1)
            .take(self.ancestors.len())
            .collect()
    }

    /// Number of ancestors between the provider namespace and this resource.
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// Returns true if the resource has no parent resource.
    pub fn is_top_level(&self) -> bool {
        self.ancestors.is_empty()
    }

    /// The immediate ancestor, or `None` for a top-level resource.
    ///
    /// Computed on first access and cached; later calls return the same instance.
    pub fn parent(&self) -> Option<&ResourceIdentifier> {
        self.parent
            .get_or_init(|| self.derive_parent().map(Box::new))
            .as_deref()
    }

    fn derive_parent(&self) -> Option<ResourceIdentifier> {
        let (parent_name, outer_names) = self.ancestors.split_last()?;
        let mut types = self.ancestor_types();
        let parent_type = types.pop()?;

        Some(Self::assemble(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.provider_namespace.clone(),
            parent_type.to_string(),
            parent_name.clone(),
            &types,
            outer_names.to_vec(),
        ))
    }

    /// Iterates over the ancestors as identifiers, nearest first.
    pub fn lineage(&self) -> impl Iterator<Item = &ResourceIdentifier> {
        std::iter::successors(self.parent(), |resource| resource.parent())
    }

    /// Builds the identifier of a resource nested directly under this one.
    pub fn child(
        &self,
        resource_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, ResourceIdError> {
        let mut ancestor_types: Vec<&str> = self.ancestor_types();
        ancestor_types.push(&self.resource_type);

        let mut ancestor_names: Vec<&str> = self.ancestors.iter().map(String::as_str).collect();
        ancestor_names.push(&self.name);

        Self::new(
            self.subscription_id.as_str(),
            self.resource_group_name.as_str(),
            self.provider_namespace.as_str(),
            resource_type,
            name,
            ancestor_types,
            ancestor_names,
        )
    }
}

/// Consumes a `{keyword}/{value}` pair from the front of `rest`.
fn take_keyed<'a, 'b>(
    input: &str,
    rest: &mut &'b [&'a str],
    keyword: &'static str,
) -> Result<&'a str, ResourceIdError> {
    let parts: &'b [&'a str] = rest;
    match parts {
        [key, value, tail @ ..] if keyword_matches(key, keyword) => {
            *rest = tail;
            Ok(*value)
        }
        [key] if keyword_matches(key, keyword) => Err(ResourceIdError::invalid_identifier(
            input,
            format!("missing value after '{keyword}'"),
        )),
        _ => Err(ResourceIdError::invalid_identifier(
            input,
            format!("expected '{keyword}' segment"),
        )),
    }
}

fn component(parameter: &'static str, value: String) -> Result<String, ResourceIdError> {
    check_component(parameter, &value)?;
    Ok(value)
}

fn check_component(parameter: &'static str, value: &str) -> Result<(), ResourceIdError> {
    if value.is_empty() {
        return Err(ResourceIdError::invalid_argument(parameter, "must not be empty"));
    }
    if value.contains(SEPARATOR) {
        return Err(ResourceIdError::invalid_argument(
            parameter,
            format!("must not contain '{SEPARATOR}'"),
        ));
    }
    Ok(())
}

impl PartialEq for ResourceIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.subscription_id == other.subscription_id
            && self.resource_group_name == other.resource_group_name
            && self.provider_namespace == other.provider_namespace
            && self.resource_type == other.resource_type
            && self.name == other.name
            && self.ancestors == other.ancestors
            && self.full_resource_type == other.full_resource_type
    }
}

impl Eq for ResourceIdentifier {}

impl Hash for ResourceIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // The id is a function of every other field.
        self.id.hash(state);
    }
}

impl fmt::Debug for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceIdentifier")
            .field("id", &self.id)
            .field("subscription_id", &self.subscription_id)
            .field("resource_group_name", &self.resource_group_name)
            .field("provider_namespace", &self.provider_namespace)
            .field("resource_type", &self.resource_type)
            .field("name", &self.name)
            .field("ancestors", &self.ancestors)
            .field("full_resource_type", &self.full_resource_type)
            .finish()
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl FromStr for ResourceIdentifier {
    type Err = ResourceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ResourceIdentifier {
    type Error = ResourceIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for ResourceIdentifier {
    type Error = ResourceIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl AsRef<str> for ResourceIdentifier {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

impl serde::Serialize for ResourceIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.id)
    }
}

impl<'de> serde::Deserialize<'de> for ResourceIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
