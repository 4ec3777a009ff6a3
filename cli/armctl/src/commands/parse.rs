//! Parse command.

use anyhow::Result;
use armkit_id::ResourceIdentifier;
use clap::Args;
use tracing::debug;

use crate::output::print_output;

use super::view::ResourceView;
use super::CommandContext;

/// Parse identifiers and show their components.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Resource identifiers to parse.
    #[arg(required = true)]
    ids: Vec<String>,
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let views = parse_all(&self.ids)?;
        print_output(&views, ctx.format);
        Ok(())
    }
}

/// Parses every input, failing on the first invalid one.
fn parse_all(ids: &[String]) -> Result<Vec<ResourceView>> {
    ids.iter()
        .map(|input| {
            let resource = ResourceIdentifier::parse(input)?;
            debug!(id = %resource, depth = resource.depth(), "Parsed identifier");
            Ok(ResourceView::from(&resource))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use armkit_id::ResourceIdError;

    use super::*;

    #[test]
    fn parse_all_flattens_components() {
        let views = parse_all(&[
            "/subscriptions/S1/resourceGroups/RG1/providers/Prov.X/ancT1/ancN1/typeA/name1"
                .to_string(),
        ])
        .unwrap();

        assert_eq!(views.len(), 1);
        let view = &views[0];
        assert_eq!(view.name, "name1");
        assert_eq!(view.resource_type, "typeA");
        assert_eq!(view.full_resource_type, "Prov.X/ancT1/typeA");
        assert_eq!(view.ancestors, vec!["ancN1".to_string()]);
        assert!(!view.is_top_level);
        assert_eq!(
            view.id,
            "subscriptions/S1/resourceGroups/RG1/providers/Prov.X/ancT1/ancN1/typeA/name1"
        );
    }

    #[test]
    fn parse_all_stops_at_invalid_input() {
        let err = parse_all(&[
            "subscriptions/S1/resourceGroups/RG1/providers/Prov.X/typeA/name1".to_string(),
            "subscriptions/S1".to_string(),
        ])
        .unwrap_err();

        let id_err = err.downcast_ref::<ResourceIdError>().unwrap();
        assert_eq!(id_err.input(), Some("subscriptions/S1"));
    }
}
