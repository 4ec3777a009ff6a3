//! Build command.

use anyhow::Result;
use armkit_id::ResourceIdentifier;
use clap::Args;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_single, print_success, OutputFormat};

use super::view::ResourceView;
use super::CommandContext;

/// Build an identifier from its components.
#[derive(Debug, Args)]
pub struct BuildCommand {
    /// Subscription ID.
    #[arg(long, env = "ARMCTL_SUBSCRIPTION")]
    subscription: String,

    /// Resource group name.
    #[arg(long, env = "ARMCTL_RESOURCE_GROUP")]
    resource_group: String,

    /// Provider namespace (e.g. Provider.Service).
    #[arg(long)]
    provider: String,

    /// Resource type of the leaf resource.
    #[arg(long = "type")]
    resource_type: String,

    /// Name of the leaf resource.
    #[arg(long)]
    name: String,

    /// Ancestor as TYPE=NAME, outermost first. May be repeated.
    #[arg(long = "ancestor", value_parser = parse_ancestor)]
    ancestors: Vec<(String, String)>,
}

impl BuildCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let resource = self.build()?;
        debug!(id = %resource, "Built identifier");

        match ctx.format {
            OutputFormat::Json => print_single(&ResourceView::from(&resource)),
            OutputFormat::Table => print_success(resource.id()),
        }
        Ok(())
    }

    fn build(self) -> Result<ResourceIdentifier> {
        let mut builder = ResourceIdentifier::builder()
            .subscription_id(self.subscription)
            .resource_group_name(self.resource_group)
            .provider_namespace(self.provider)
            .resource(self.resource_type, self.name);
        for (ancestor_type, ancestor_name) in self.ancestors {
            builder = builder.ancestor(ancestor_type, ancestor_name);
        }
        Ok(builder.build()?)
    }
}

fn parse_ancestor(value: &str) -> Result<(String, String), CliError> {
    match value.split_once('=') {
        Some((ancestor_type, name)) if !ancestor_type.is_empty() && !name.is_empty() => {
            Ok((ancestor_type.to_string(), name.to_string()))
        }
        _ => Err(CliError::InvalidAncestor(value.to_string())),
    }
}
