//! Presentation adapter.
//!
//! The resolver only ever produces [`RenderResult`]s; a [`Presenter`] turns
//! them into something the user can see.

pub mod terminal;
pub mod theme;

use crate::entry::{Category, Entry};
use crate::render::{RenderResult, Status};

pub use terminal::TerminalPresenter;

/// Paints render cycles
pub trait Presenter {
    /// Show (or clear, for [`Status::Ready`]) the status line
    fn show_status(&mut self, status: &Status);

    /// Paint the results, pager and status of a finished cycle
    fn paint(&mut self, result: &RenderResult);

    /// Show the detail panel of one entry
    fn paint_detail(&mut self, entry: &Entry);

    /// Show the category selector with `active` highlighted
    fn paint_categories(&mut self, categories: &[Category], active: Option<&str>);
}

/// Drops results older than the newest one already painted
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderGate {
    latest: u64,
}

impl RenderGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `result` may be painted; remembers it if so
    pub fn admit(&mut self, result: &RenderResult) -> bool {
        if result.generation < self.latest {
            tracing::debug!(
                "not painting generation {} (already painted {})",
                result.generation,
                self.latest
            );
            return false;
        }
        self.latest = result.generation;
        true
    }
}

/// Capitalise the first character
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Label/value rows of the detail panel
pub fn detail_rows(entry: &Entry) -> Vec<(&'static str, String)> {
    vec![
        ("Height", format!("{:.1} m", entry.height_m())),
        ("Weight", format!("{:.1} kg", entry.weight_kg())),
        (
            "Abilities",
            entry
                .abilities
                .iter()
                .map(|a| capitalize(a))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        (
            "Base stats",
            entry
                .stats
                .iter()
                .map(|s| format!("{}: {}", capitalize(&s.name), s.value))
                .collect::<Vec<_>>()
                .join(" | "),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Stat;
    use crate::render::Content;
    use crate::resolver::Mode;

    fn result(generation: u64) -> RenderResult {
        RenderResult {
            generation,
            mode: Mode::All,
            content: Content::Replace(vec![]),
            total: 0,
            page: 1,
            max_page: 1,
            pager_visible: true,
            prev_enabled: false,
            next_enabled: false,
            status: Status::Ready,
        }
    }

    #[test]
    fn test_gate_drops_older_generations() {
        let mut gate = RenderGate::new();
        assert!(gate.admit(&result(2)));
        assert!(!gate.admit(&result(1)));
        assert!(gate.admit(&result(2)));
        assert!(gate.admit(&result(3)));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("pikachu"), "Pikachu");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_detail_rows() {
        let entry = Entry {
            id: 25,
            name: "pikachu".to_string(),
            categories: vec!["electric".to_string()],
            image_ref: None,
            height: 4,
            weight: 60,
            abilities: vec!["static".to_string(), "lightning-rod".to_string()],
            stats: vec![
                Stat {
                    name: "hp".to_string(),
                    value: 35,
                },
                Stat {
                    name: "speed".to_string(),
                    value: 90,
                },
            ],
        };

        let rows = detail_rows(&entry);
        assert_eq!(rows[0], ("Height", "0.4 m".to_string()));
        assert_eq!(rows[1], ("Weight", "6.0 kg".to_string()));
        assert_eq!(rows[2], ("Abilities", "Static, Lightning-rod".to_string()));
        assert_eq!(rows[3], ("Base stats", "Hp: 35 | Speed: 90".to_string()));
    }
}
