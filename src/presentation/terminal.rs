//! Plain terminal rendering of results, pager and detail panel.

use std::io::Write;

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::entry::{Category, Entry};
use crate::render::{RenderResult, Status};

use super::theme::{Rgb, Theme, badge_color};
use super::{Presenter, RenderGate, capitalize, detail_rows};

/// A card in the results table
#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "")]
    index: usize,
    #[tabled(rename = "No.")]
    number: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Types")]
    types: String,
}

/// Writes render cycles to any `Write`, usually stdout
#[derive(Debug)]
pub struct TerminalPresenter<W> {
    out: W,
    color: bool,
    theme: Theme,
    gate: RenderGate,
    /// Entries currently on screen, for `open <n>`
    shown: Vec<Entry>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, theme: Theme, color: bool) -> Self {
        Self {
            out,
            color,
            theme,
            gate: RenderGate::new(),
            shown: Vec::new(),
        }
    }

    /// Entry shown at 1-based position `index`
    pub fn shown_entry(&self, index: usize) -> Option<&Entry> {
        index.checked_sub(1).and_then(|i| self.shown.get(i))
    }

    pub fn shown(&self) -> &[Entry] {
        &self.shown
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            tracing::debug!("failed to write output: {}", e);
        }
    }

    fn accent(&self, text: &str) -> String {
        self.tint(text, self.theme.accent())
    }

    fn tint(&self, text: &str, Rgb(r, g, b): Rgb) -> String {
        if self.color {
            text.truecolor(r, g, b).to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn badge(&self, category: &str) -> String {
        let label = format!(" {} ", capitalize(category));
        if self.color {
            let Rgb(r, g, b) = badge_color(category);
            label.on_truecolor(r, g, b).white().to_string()
        } else {
            format!("[{}]", capitalize(category))
        }
    }

    fn paint_cards(&mut self, entries: &[Entry]) {
        let rows: Vec<CardRow> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| CardRow {
                index: i + 1,
                number: e.number(),
                name: capitalize(&e.name),
                types: e
                    .categories
                    .iter()
                    .map(|c| capitalize(c))
                    .collect::<Vec<_>>()
                    .join(", "),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        self.line(&table.to_string());
    }

    fn paint_pager(&mut self, result: &RenderResult) {
        let prev = if result.prev_enabled {
            self.accent("‹ prev")
        } else {
            self.dim("‹ prev")
        };
        let next = if result.next_enabled {
            self.accent("next ›")
        } else {
            self.dim("next ›")
        };
        let label = result.page_label();
        self.line(&format!("{prev}   {label}   {next}"));
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show_status(&mut self, status: &Status) {
        let Some(message) = status.message() else {
            return;
        };
        let text = match status {
            Status::Error(_) if self.color => message.red().to_string(),
            Status::Info(_) if self.color => message.yellow().to_string(),
            _ => self.dim(message),
        };
        self.line(&text);
    }

    fn paint(&mut self, result: &RenderResult) {
        if !self.gate.admit(result) {
            return;
        }

        if let Some(entries) = result.entries() {
            self.shown = entries.to_vec();
            if !entries.is_empty() {
                self.paint_cards(entries);
            } else if result.status == Status::Ready {
                let empty = self.dim("No entries to show.");
                self.line(&empty);
            }
        }

        if result.pager_visible {
            self.paint_pager(result);
        }
        self.show_status(&result.status);
    }

    fn paint_detail(&mut self, entry: &Entry) {
        let number = self.dim(&entry.number());
        let name = self.accent(&capitalize(&entry.name));
        self.line(&format!("{number} {name}"));

        if !entry.categories.is_empty() {
            let badges: Vec<String> = entry.categories.iter().map(|c| self.badge(c)).collect();
            self.line(&badges.join(" "));
        }
        if let Some(image) = &entry.image_ref {
            let image = self.dim(image);
            self.line(&image);
        }

        let rows = detail_rows(entry);
        let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        for (label, value) in rows {
            let label = self.dim(&format!("{label:<width$}"));
            self.line(&format!("{label}  {value}"));
        }
    }

    fn paint_categories(&mut self, categories: &[Category], active: Option<&str>) {
        let mut pills = Vec::with_capacity(categories.len() + 1);
        let all = if active.is_none() {
            self.tint("[All]", self.theme.accent2())
        } else {
            "All".to_string()
        };
        pills.push(all);
        for category in categories {
            let label = capitalize(&category.name);
            if active == Some(category.name.as_str()) {
                pills.push(self.tint(&format!("[{label}]"), self.theme.accent2()));
            } else {
                pills.push(label);
            }
        }
        self.line(&pills.join("  "));
    }
}
