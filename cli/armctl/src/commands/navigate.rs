//! Parent and lineage commands.

use anyhow::Result;
use armkit_id::ResourceIdentifier;
use clap::Args;
use tracing::debug;

use crate::output::{print_info, print_output, print_single, OutputFormat};

use super::view::ResourceView;
use super::CommandContext;

/// Show the immediate parent of an identifier.
#[derive(Debug, Args)]
pub struct ParentCommand {
    /// Resource identifier.
    id: String,
}

impl ParentCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let resource = ResourceIdentifier::parse(&self.id)?;
        let parent = resource.parent().map(ResourceView::from);

        match (ctx.format, parent) {
            (OutputFormat::Json, parent) => print_single(&parent),
            (OutputFormat::Table, Some(parent)) => print_output(&[parent], ctx.format),
            (OutputFormat::Table, None) => {
                print_info(&format!("{} is a top-level resource.", resource.name()));
            }
        }
        Ok(())
    }
}

/// Show an identifier followed by all of its ancestors.
#[derive(Debug, Args)]
pub struct LineageCommand {
    /// Resource identifier.
    id: String,
}

impl LineageCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let resource = ResourceIdentifier::parse(&self.id)?;
        let views = lineage_views(&resource);
        debug!(id = %resource, count = views.len(), "Resolved lineage");
        print_output(&views, ctx.format);
        Ok(())
    }
}

/// The resource itself, then its ancestors nearest first.
fn lineage_views(resource: &ResourceIdentifier) -> Vec<ResourceView> {
    std::iter::once(resource)
        .chain(resource.lineage())
        .map(ResourceView::from)
        .collect()
}
