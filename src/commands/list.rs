//! `list`: one page of the catalog, optionally narrowed to a category.

use serde_json::json;

use super::{AppContext, CommandOutput};
use crate::error::{CatalogError, Result};
use crate::presentation::Presenter;
use crate::render::{RenderResult, Status};
use crate::resolver::{Controller, ViewState};
use crate::sort::SortKey;

pub async fn cmd_list(
    ctx: &AppContext,
    category: Option<&str>,
    page: usize,
    sort: SortKey,
    output_json: bool,
) -> Result<()> {
    let mut state = ViewState::new();
    state.set_category(category);
    state.set_sort(sort);
    state.go_to_page(page);

    let mut controller = Controller::new(ctx.gateway()?, state);
    let plan = controller.plan();
    let result = controller
        .execute(plan)
        .await
        .ok_or_else(|| CatalogError::Other("resolution was superseded".to_string()))?;

    if let Status::Error(message) = &result.status {
        return Err(CatalogError::Other(message.clone()));
    }

    if output_json {
        CommandOutput::new(page_json(&result)).print(true)
    } else {
        let mut presenter = ctx.presenter(std::io::stdout());
        presenter.paint(&result);
        Ok(())
    }
}

fn page_json(result: &RenderResult) -> serde_json::Value {
    json!({
        "mode": result.mode.to_string(),
        "page": result.page,
        "max_page": result.max_page,
        "total": result.total,
        "entries": result.entries().unwrap_or_default(),
    })
}
