use serde_json::json;

use super::{AppContext, CommandOutput};
use crate::error::{CatalogError, Result};
use crate::gateway::CatalogSource;
use crate::presentation::Presenter;
use crate::render::MSG_NOT_FOUND;
use crate::resolver::normalize_query;

/// Show the detail panel of one entry.
///
/// No match is reported on stdout and is not an error.
pub async fn cmd_show(ctx: &AppContext, name: &str, output_json: bool) -> Result<()> {
    let key = normalize_query(name);
    if key.is_empty() {
        return Err(CatalogError::Other("name or id cannot be empty".to_string()));
    }

    let gateway = ctx.gateway()?;
    let entry = match gateway.lookup_entry(&key).await {
        Ok(entry) => entry,
        Err(CatalogError::NotFound(_)) => {
            return CommandOutput::new(json!(null))
                .with_text(MSG_NOT_FOUND)
                .print(output_json);
        }
        Err(e) => return Err(e),
    };

    if output_json {
        CommandOutput::new(serde_json::to_value(&entry)?).print(true)
    } else {
        let mut presenter = ctx.presenter(std::io::stdout());
        presenter.paint_detail(&entry);
        Ok(())
    }
}
