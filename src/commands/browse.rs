//! Interactive browsing over stdin.
//!
//! Each line is one command; see [`HELP`].

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use super::AppContext;
use crate::error::Result;
use crate::gateway::CatalogSource;
use crate::prefs::PrefsStore;
use crate::presentation::{Presenter, TerminalPresenter};
use crate::resolver::{Intent, ViewState};
use crate::session::Session;
use crate::sort::SortKey;

const HELP: &str = "\
Commands:
  / <name|id>, search <name|id>   look up one entry
  type <name>                     browse one category
  all                             browse every entry
  next, n / prev, p               change page
  page <n>                        jump to a page
  sort id|name                    reorder the current page
  open <n>                        show details of the n-th result
  types                           list categories
  clear                           reset search and category
  help                            show this help
  quit, q                         exit";

/// One line typed at the browse prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    Category(Option<String>),
    Next,
    Prev,
    Page(usize),
    Sort(SortKey),
    Clear,
    Open(usize),
    Types,
    Help,
    Quit,
}

impl BrowseCommand {
    /// The intent this command dispatches, given the current controls
    pub fn intent(&self, state: &ViewState) -> Option<Intent> {
        match self {
            BrowseCommand::Search(query) => Some(Intent::SubmitControls {
                query: query.clone(),
                sort: state.sort(),
            }),
            BrowseCommand::Sort(sort) => Some(Intent::SubmitControls {
                query: state.query().to_string(),
                sort: *sort,
            }),
            BrowseCommand::Category(category) => Some(Intent::SelectCategory(category.clone())),
            BrowseCommand::Next => Some(Intent::NextPage),
            BrowseCommand::Prev => Some(Intent::PrevPage),
            BrowseCommand::Page(page) => Some(Intent::GoToPage(*page)),
            BrowseCommand::Clear => Some(Intent::Clear),
            BrowseCommand::Open(_)
            | BrowseCommand::Types
            | BrowseCommand::Help
            | BrowseCommand::Quit => None,
        }
    }
}

/// Parse one prompt line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> std::result::Result<Option<BrowseCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    if let Some(rest) = line.strip_prefix('/') {
        return Ok(Some(BrowseCommand::Search(rest.trim().to_string())));
    }

    let (word, arg) = match line.split_once(char::is_whitespace) {
        Some((word, arg)) => (word, arg.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "search" | "s" => BrowseCommand::Search(arg.to_string()),
        "type" | "t" if arg.is_empty() => return Err("usage: type <name>".to_string()),
        "type" | "t" => BrowseCommand::Category(Some(arg.to_string())),
        "all" => BrowseCommand::Category(None),
        "next" | "n" => BrowseCommand::Next,
        "prev" | "p" => BrowseCommand::Prev,
        "page" => BrowseCommand::Page(parse_number(arg, "page <n>")?),
        "sort" => BrowseCommand::Sort(
            arg.parse()
                .map_err(|_| format!("usage: sort {}", SortKey::ALL_STRINGS.join("|")))?,
        ),
        "clear" => BrowseCommand::Clear,
        "open" | "o" => BrowseCommand::Open(parse_number(arg, "open <n>")?),
        "types" => BrowseCommand::Types,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "q" | "exit" => BrowseCommand::Quit,
        other => return Err(format!("unknown command '{other}', type 'help'")),
    };
    Ok(Some(command))
}

fn parse_number(arg: &str, usage: &str) -> std::result::Result<usize, String> {
    arg.parse().map_err(|_| format!("usage: {usage}"))
}

fn prompt() {
    let mut stdout = std::io::stdout();
    if let Err(e) = write!(stdout, "> ").and_then(|_| stdout.flush()) {
        tracing::debug!("failed to write prompt: {}", e);
    }
}

/// Run the interactive browser until `quit` or end of input
pub async fn cmd_browse(ctx: &AppContext) -> Result<()> {
    let presenter = ctx.presenter(std::io::stdout());
    let mut session = Session::new(ctx.gateway()?, presenter, ctx.prefs_store());
    session.start().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt();
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        if !run_command(&mut session, command).await {
            break;
        }
    }
    Ok(())
}

/// Handle one command; returns `false` to leave the prompt
async fn run_command<S, W, St>(
    session: &mut Session<S, TerminalPresenter<W>, St>,
    command: BrowseCommand,
) -> bool
where
    S: CatalogSource,
    W: Write,
    St: PrefsStore,
{
    if let Some(intent) = command.intent(session.controller().state()) {
        if !session.apply(intent).await {
            println!("Nothing to do.");
        }
        return true;
    }

    match command {
        BrowseCommand::Open(index) => {
            match session.presenter().shown_entry(index).cloned() {
                Some(entry) => session.presenter_mut().paint_detail(&entry),
                None => println!("No result number {index} on this page."),
            }
        }
        BrowseCommand::Types => {
            if session.controller().categories().is_empty() {
                println!("No categories loaded.");
            } else {
                session.paint_categories();
            }
        }
        BrowseCommand::Help => println!("{HELP}"),
        BrowseCommand::Quit => return false,
        _ => {}
    }
    true
}
