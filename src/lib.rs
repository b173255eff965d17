#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
pub mod entry;
pub mod error;
pub mod gateway;
pub mod list_cache;
pub mod pagination;
pub mod prefs;
pub mod presentation;
pub mod render;
pub mod resolver;
pub mod session;
pub mod sort;

pub use config::Config;
pub use entry::{Category, Entry, Stat};
pub use error::{CatalogError, Result};
pub use gateway::{CatalogSource, HttpGateway, NamePage};
pub use list_cache::ListCache;
pub use pagination::{PAGE_SIZE, PageBounds};
pub use prefs::{FilePrefsStore, Preferences, PrefsStore};
pub use presentation::{Presenter, RenderGate, TerminalPresenter};
pub use render::{Content, RenderResult, Status};
pub use resolver::{Controller, Intent, Mode, Plan, ResolvedQuery, ViewState, resolve};
pub use session::Session;
pub use sort::{SortKey, sort_entries};
