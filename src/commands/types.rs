use serde_json::json;

use super::{AppContext, CommandOutput};
use crate::error::Result;
use crate::gateway::CatalogSource;
use crate::presentation::capitalize;

/// List every category, one per line
pub async fn cmd_types(ctx: &AppContext, output_json: bool) -> Result<()> {
    let categories = ctx.gateway()?.fetch_categories().await?;

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    let text = names
        .iter()
        .map(|name| capitalize(name))
        .collect::<Vec<_>>()
        .join("\n");

    CommandOutput::new(json!(names))
        .with_text(text)
        .print(output_json)
}
