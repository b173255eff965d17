use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use crate::sort::SortKey;

#[derive(Parser)]
#[command(name = "dexbrowse")]
#[command(about = "Browse a creature catalog from the terminal")]
#[command(version)]
pub struct Cli {
    /// Directory holding config.yaml and prefs.json
    #[arg(long, global = true, env = "DEXBROWSE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the catalog API base URL for this run
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Log requests and resolution decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse interactively (type `help` at the prompt)
    #[command(visible_alias = "b")]
    Browse,

    /// Print one page of entries
    #[command(visible_alias = "ls")]
    List {
        /// Only entries of this category (e.g. water)
        #[arg(short = 't', long = "type")]
        category: Option<String>,

        /// Page number, clamped to the available pages
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Sort order: id, name
        #[arg(short, long, default_value = "id", value_parser = parse_sort)]
        sort: SortKey,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one entry by exact name or id
    #[command(visible_alias = "s")]
    Show {
        /// Entry name or numeric id
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the catalog's categories
    Types {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or reset saved preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Print the saved query, category and sort
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Forget saved preferences
    Reset,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one configuration value
    Get {
        /// Key: api_base_url, signature, request_timeout_secs
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Key: api_base_url, signature, request_timeout_secs
        key: String,
        /// New value
        value: String,
    },
}

fn parse_sort(s: &str) -> Result<SortKey, String> {
    SortKey::from_str(s).map_err(|_| {
        format!(
            "invalid sort '{}', expected one of: {}",
            s,
            SortKey::ALL_STRINGS.join(", ")
        )
    })
}

impl Cli {
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            AppContext, cmd_browse, cmd_config_get, cmd_config_set, cmd_config_show, cmd_list,
            cmd_prefs_reset, cmd_prefs_show, cmd_show, cmd_types,
        };

        let ctx = AppContext::load(self.data_dir, self.api_url, !self.no_color)?;

        match self.command {
            Commands::Browse => cmd_browse(&ctx).await,
            Commands::List {
                category,
                page,
                sort,
                json,
            } => cmd_list(&ctx, category.as_deref(), page, sort, json).await,
            Commands::Show { name, json } => cmd_show(&ctx, &name, json).await,
            Commands::Types { json } => cmd_types(&ctx, json).await,

            Commands::Prefs { action } => match action {
                PrefsAction::Show { json } => cmd_prefs_show(&ctx, json),
                PrefsAction::Reset => cmd_prefs_reset(&ctx),
            },

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(&ctx, json),
                ConfigAction::Get { key } => cmd_config_get(&ctx, &key),
                ConfigAction::Set { key, value } => cmd_config_set(&ctx, &key, &value),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "dexbrowse", &mut io::stdout());
}
