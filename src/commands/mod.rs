mod browse;
mod config;
mod list;
mod prefs;
mod show;
mod types;

pub use browse::{BrowseCommand, cmd_browse, parse_command};
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use list::cmd_list;
pub use prefs::{cmd_prefs_reset, cmd_prefs_show};
pub use show::cmd_show;
pub use types::cmd_types;

use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use crate::config::{Config, default_data_dir};
use crate::error::Result;
use crate::gateway::HttpGateway;
use crate::prefs::FilePrefsStore;
use crate::presentation::TerminalPresenter;
use crate::presentation::theme::Theme;

/// Everything a command needs from the environment
#[derive(Debug, Clone)]
pub struct AppContext {
    pub data_dir: PathBuf,
    /// Effective configuration, including command-line overrides
    pub config: Config,
    pub color: bool,
}

impl AppContext {
    /// Resolve the data directory and load its config.
    ///
    /// `api_url` overrides the configured base URL for this run only.
    pub fn load(data_dir: Option<PathBuf>, api_url: Option<String>, color: bool) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        let mut config = Config::load(&data_dir)?;
        if let Some(url) = api_url {
            config.set("api_base_url", &url)?;
        }
        tracing::debug!(
            "data dir {}, api {}",
            data_dir.display(),
            config.api_base_url
        );

        Ok(Self {
            data_dir,
            config,
            color: color && std::io::stdout().is_terminal(),
        })
    }

    pub fn gateway(&self) -> Result<HttpGateway> {
        HttpGateway::from_config(&self.config)
    }

    pub fn prefs_store(&self) -> FilePrefsStore {
        FilePrefsStore::new(&self.data_dir)
    }

    pub fn presenter<W: Write>(&self, out: W) -> TerminalPresenter<W> {
        TerminalPresenter::new(out, Theme::from_signature(&self.config.signature), self.color)
    }
}

/// A command result printed either as JSON or as text
pub struct CommandOutput {
    json: serde_json::Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: serde_json::Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print as pretty JSON when asked, otherwise the text form
    /// (falling back to JSON when there is none)
    pub fn print(self, output_json: bool) -> Result<()> {
        match self.text {
            Some(text) if !output_json => println!("{text}"),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}
