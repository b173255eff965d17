//! Query resolution: turning the controls into fetches.
//!
//! The [`Controller`] owns the [`ViewState`] and the [`ListCache`]. Handling
//! an intent happens in two steps:
//!
//! 1. [`Controller::dispatch`] applies the intent to the state and returns a
//!    [`Plan`] tagged with a fresh generation number. Navigation past either
//!    end of the pager yields no plan.
//! 2. [`Controller::execute`] performs the plan's fetches and commits the
//!    outcome. A plan whose generation has been superseded in the meantime
//!    is discarded and produces no [`RenderResult`].

mod state;

pub use state::{Intent, Mode, ViewState, mode_for, normalize_query};

use futures::future::join_all;

use crate::entry::{Category, Entry};
use crate::error::{CatalogError, Result};
use crate::gateway::CatalogSource;
use crate::list_cache::ListCache;
use crate::pagination::{self, PageBounds};
use crate::render::{
    Content, MSG_CATEGORIES_UNAVAILABLE, MSG_NOT_FOUND, MSG_TRY_AGAIN, RenderResult, Status,
};
use crate::sort::{SortKey, sort_entries};

/// The fetch strategy for one render cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedQuery {
    /// Fetch one entry by exact name or id; no paging
    ExactSearch { name: String },
    /// Page through the cached member list of a category
    ByCategory { category: String, page: usize },
    /// Page through the whole catalog using the API's offset/limit
    All { page: usize },
}

impl ResolvedQuery {
    pub fn mode(&self) -> Mode {
        match self {
            ResolvedQuery::ExactSearch { .. } => Mode::ExactSearch,
            ResolvedQuery::ByCategory { .. } => Mode::ByCategory,
            ResolvedQuery::All { .. } => Mode::All,
        }
    }

    /// Requested page, or `None` for exact search
    pub fn page(&self) -> Option<usize> {
        match self {
            ResolvedQuery::ExactSearch { .. } => None,
            ResolvedQuery::ByCategory { page, .. } | ResolvedQuery::All { page } => Some(*page),
        }
    }

    /// The same query on another page
    pub fn with_page(self, page: usize) -> Self {
        match self {
            ResolvedQuery::ExactSearch { name } => ResolvedQuery::ExactSearch { name },
            ResolvedQuery::ByCategory { category, .. } => {
                ResolvedQuery::ByCategory { category, page }
            }
            ResolvedQuery::All { .. } => ResolvedQuery::All { page },
        }
    }
}

/// Decide what the next fetch must do for `state`
pub fn resolve(state: &ViewState) -> ResolvedQuery {
    match (state.mode(), state.category()) {
        (Mode::ExactSearch, _) => ResolvedQuery::ExactSearch {
            name: state.query().to_string(),
        },
        (Mode::ByCategory, Some(category)) => ResolvedQuery::ByCategory {
            category: category.to_string(),
            page: state.page(),
        },
        _ => ResolvedQuery::All { page: state.page() },
    }
}

/// A resolution waiting to be executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub generation: u64,
    pub query: ResolvedQuery,
    pub sort: SortKey,
    pub page_size: usize,
}

/// Entries of one page together with the size of the whole result set
struct Fetched {
    entries: Vec<Entry>,
    total: usize,
}

/// Owns the view state and drives every fetch
#[derive(Debug)]
pub struct Controller<S> {
    source: S,
    state: ViewState,
    cache: ListCache,
    categories: Vec<Category>,
    generation: u64,
}

impl<S: CatalogSource> Controller<S> {
    pub fn new(source: S, state: ViewState) -> Self {
        Self {
            source,
            state,
            cache: ListCache::new(),
            categories: Vec::new(),
            generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Categories loaded by [`Controller::load_categories`]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Load the category list once at startup.
    ///
    /// Failure is not fatal: exact search keeps working, so the error is
    /// reported as a status for the user instead.
    pub async fn load_categories(&mut self) -> Option<Status> {
        match self.source.fetch_categories().await {
            Ok(categories) => {
                self.categories = categories;
                None
            }
            Err(e) => {
                tracing::warn!("failed to load categories: {}", e);
                Some(Status::Error(MSG_CATEGORIES_UNAVAILABLE.to_string()))
            }
        }
    }

    /// Apply `intent` to the view state.
    ///
    /// Returns the plan to execute, or `None` when the intent changes
    /// nothing (previous on the first page, next on the last, a jump to
    /// the current page).
    pub fn dispatch(&mut self, intent: Intent) -> Option<Plan> {
        match intent {
            Intent::SubmitControls { query, sort } => {
                self.state.set_sort(sort);
                self.state.set_query(&query);
            }
            Intent::SelectCategory(category) => {
                self.state.set_category(category.as_deref());
            }
            Intent::NextPage => {
                if !self.state.next_page() {
                    return None;
                }
            }
            Intent::PrevPage => {
                if !self.state.prev_page() {
                    return None;
                }
            }
            Intent::GoToPage(page) => {
                if !self.state.go_to_page(page) {
                    return None;
                }
            }
            Intent::Clear => self.state.clear(),
        }
        Some(self.plan())
    }

    /// Plan a resolution of the current state without changing it
    pub fn plan(&mut self) -> Plan {
        self.generation += 1;
        Plan {
            generation: self.generation,
            query: resolve(&self.state),
            sort: self.state.sort(),
            page_size: self.state.page_size(),
        }
    }

    /// Dispatch and execute in one go
    pub async fn handle(&mut self, intent: Intent) -> Option<RenderResult> {
        let plan = self.dispatch(intent)?;
        self.execute(plan).await
    }

    /// Run the fetches of `plan` and commit the outcome.
    ///
    /// A page past the end of the result set (possible when the page was
    /// chosen before any total was known) is fetched again as the last page.
    ///
    /// Returns `None` when a newer plan was issued after this one.
    pub async fn execute(&mut self, mut plan: Plan) -> Option<RenderResult> {
        let mut outcome = self.fetch(&plan).await;

        let clamped = match (&outcome, plan.query.page()) {
            (Ok(fetched), Some(page)) => {
                let bounds = PageBounds::new(page, fetched.total, plan.page_size);
                (bounds.page != page).then_some(bounds.page)
            }
            _ => None,
        };
        if let Some(page) = clamped {
            tracing::debug!("page is past the end, fetching page {} instead", page);
            plan.query = plan.query.with_page(page);
            outcome = self.fetch(&plan).await;
        }

        if plan.generation != self.generation {
            tracing::warn!(
                "discarding stale result of generation {} (latest is {})",
                plan.generation,
                self.generation
            );
            return None;
        }

        let mode = plan.query.mode();
        let result = match (mode, outcome) {
            (Mode::ExactSearch, Ok(fetched)) if fetched.entries.is_empty() => {
                self.state.commit_total(0);
                self.render(
                    &plan,
                    Content::Replace(Vec::new()),
                    Status::Info(MSG_NOT_FOUND.to_string()),
                )
            }
            (_, Ok(fetched)) => {
                self.state.commit_total(fetched.total);
                self.render(&plan, Content::Replace(fetched.entries), Status::Ready)
            }
            (Mode::ExactSearch, Err(e)) => {
                tracing::warn!("search for '{}' failed: {}", self.state.query(), e);
                self.state.commit_total(0);
                self.render(
                    &plan,
                    Content::Unchanged,
                    Status::Error(MSG_TRY_AGAIN.to_string()),
                )
            }
            (_, Err(e)) => {
                tracing::warn!("{} resolution failed: {}", mode, e);
                self.render(
                    &plan,
                    Content::Replace(Vec::new()),
                    Status::Error(MSG_TRY_AGAIN.to_string()),
                )
            }
        };
        Some(result)
    }

    fn render(&self, plan: &Plan, content: Content, status: Status) -> RenderResult {
        let bounds: PageBounds = self.state.bounds();
        let pager_visible = plan.query.mode() != Mode::ExactSearch;
        RenderResult {
            generation: plan.generation,
            mode: plan.query.mode(),
            content,
            total: self.state.total(),
            page: bounds.page,
            max_page: bounds.max_page,
            pager_visible,
            prev_enabled: pager_visible && bounds.has_prev(),
            next_enabled: pager_visible && bounds.has_next(),
            status,
        }
    }

    async fn fetch(&mut self, plan: &Plan) -> Result<Fetched> {
        let mut fetched = match &plan.query {
            ResolvedQuery::ExactSearch { name } => self.fetch_exact(name).await?,
            ResolvedQuery::ByCategory { category, page } => {
                let names = self.cache.get_names(&self.source, category).await?;
                let total = names.len();
                let window = pagination::slice(names, *page, plan.page_size).to_vec();
                Fetched {
                    entries: fetch_all(&self.source, &window).await,
                    total,
                }
            }
            ResolvedQuery::All { page } => {
                let offset = pagination::offset(*page, plan.page_size);
                let listing = self.source.fetch_name_page(plan.page_size, offset).await?;
                Fetched {
                    entries: fetch_all(&self.source, &listing.names).await,
                    total: usize::try_from(listing.count).unwrap_or(usize::MAX),
                }
            }
        };
        sort_entries(&mut fetched.entries, plan.sort);
        Ok(fetched)
    }

    async fn fetch_exact(&self, name: &str) -> Result<Fetched> {
        match self.source.lookup_entry(name).await {
            Ok(entry) => Ok(Fetched {
                entries: vec![entry],
                total: 1,
            }),
            Err(CatalogError::NotFound(_)) | Err(CatalogError::Http { status: 404, .. }) => {
                tracing::debug!("no entry named '{}'", name);
                Ok(Fetched {
                    entries: Vec::new(),
                    total: 0,
                })
            }
            Err(e) => Err(e),
        }
    }
}

/// Fetch every entry in `names` concurrently, dropping the ones that fail
async fn fetch_all<S: CatalogSource>(source: &S, names: &[String]) -> Vec<Entry> {
    let results = join_all(names.iter().map(|name| source.fetch_entry(name))).await;
    let requested = results.len();
    let entries: Vec<Entry> = results.into_iter().flatten().collect();
    if entries.len() < requested {
        tracing::debug!(
            "dropped {} of {} entries",
            requested - entries.len(),
            requested
        );
    }
    entries
}
