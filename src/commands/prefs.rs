use owo_colors::{OwoColorize, Stream};

use super::{AppContext, CommandOutput};
use crate::error::Result;
use crate::prefs::PrefsStore;

/// Print saved preferences
pub fn cmd_prefs_show(ctx: &AppContext, output_json: bool) -> Result<()> {
    let store = ctx.prefs_store();
    let prefs = store.load();

    let query = if prefs.query.is_empty() {
        "-"
    } else {
        prefs.query.as_str()
    };
    let text = format!(
        "{} {}\n{} {}\n{} {}",
        "query:".if_supports_color(Stream::Stdout, |t| t.cyan()),
        query,
        "category:".if_supports_color(Stream::Stdout, |t| t.cyan()),
        prefs.category.as_deref().unwrap_or("all"),
        "sort:".if_supports_color(Stream::Stdout, |t| t.cyan()),
        prefs.sort,
    );

    CommandOutput::new(serde_json::to_value(&prefs)?)
        .with_text(text)
        .print(output_json)
}

pub fn cmd_prefs_reset(ctx: &AppContext) -> Result<()> {
    let store = ctx.prefs_store();
    store.reset()?;
    println!("Preferences reset");
    Ok(())
}
