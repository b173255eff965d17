//! Catalog records as the rest of the crate sees them.
//!
//! These are decoded from the API's wire format in `gateway::wire` and are
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

/// One creature record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u32,
    pub name: String,
    /// Category names in slot order
    pub categories: Vec<String>,
    /// Best available artwork URL
    pub image_ref: Option<String>,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub abilities: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub value: i64,
}

impl Entry {
    /// Height in metres.
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    /// Zero-padded catalog number, e.g. `#025`.
    pub fn number(&self) -> String {
        format!("#{:03}", self.id)
    }
}

/// A named partition of entries (a creature "type" upstream).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
