//! View state and the intents that change it.

use crate::pagination::{PAGE_SIZE, PageBounds};
use crate::prefs::Preferences;
use crate::sort::SortKey;

/// How the current controls are turned into fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browse the whole catalog with server-side paging
    All,
    /// Browse one category with client-side paging over its name list
    ByCategory,
    /// Look up a single entry by exact name or id
    ExactSearch,
}

enum_display!(Mode, {
    All => "all",
    ByCategory => "category",
    ExactSearch => "search",
});

/// Mode implied by the controls: a query always wins over a category.
pub fn mode_for(query: &str, category: Option<&str>) -> Mode {
    if !query.is_empty() {
        Mode::ExactSearch
    } else if category.is_some_and(|c| !c.is_empty()) {
        Mode::ByCategory
    } else {
        Mode::All
    }
}

/// Trim and lowercase a raw query
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn normalize_category(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_lowercase)
}

/// What the user did, independent of any UI toolkit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Submit the search box and sort selector
    SubmitControls { query: String, sort: SortKey },
    /// Pick a category, or `None` for all entries
    SelectCategory(Option<String>),
    NextPage,
    PrevPage,
    /// Jump to a page; out-of-range pages are clamped
    GoToPage(usize),
    /// Empty the query, drop the category and go back to page 1
    Clear,
}

impl Intent {
    /// Whether handling this intent changes persisted preferences
    pub fn persists(&self) -> bool {
        matches!(
            self,
            Intent::SubmitControls { .. } | Intent::SelectCategory(_) | Intent::Clear
        )
    }
}

/// The controls and the derived paging state of one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    page: usize,
    page_size: usize,
    total: usize,
    category: Option<String>,
    query: String,
    sort: SortKey,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE,
            total: 0,
            category: None,
            query: String::new(),
            sort: SortKey::default(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the controls from saved preferences.
    ///
    /// A saved query takes precedence and drops any saved category, the same
    /// way submitting the controls does.
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let mut state = Self::new();
        state.sort = prefs.sort;
        state.category = normalize_category(prefs.category.as_deref());
        state.set_query(&prefs.query);
        state
    }

    pub fn mode(&self) -> Mode {
        mode_for(&self.query, self.category.as_deref())
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn bounds(&self) -> PageBounds {
        PageBounds::new(self.page, self.total, self.page_size)
    }

    /// Set the search query and return to page 1.
    ///
    /// A non-empty query clears the category filter.
    pub fn set_query(&mut self, raw: &str) {
        self.query = normalize_query(raw);
        if !self.query.is_empty() {
            self.category = None;
        }
        self.page = 1;
    }

    /// Select a category (or none) and return to page 1.
    ///
    /// Picking a category leaves search mode so the selection takes effect.
    pub fn set_category(&mut self, category: Option<&str>) {
        self.category = normalize_category(category);
        if self.category.is_some() {
            self.query.clear();
        }
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Move forward one page; returns `false` when already on the last page
    pub fn next_page(&mut self) -> bool {
        if self.mode() == Mode::ExactSearch {
            return false;
        }
        match self.bounds().next() {
            Some(page) => {
                self.page = page;
                true
            }
            None => false,
        }
    }

    /// Move back one page; returns `false` when already on the first page
    pub fn prev_page(&mut self) -> bool {
        if self.mode() == Mode::ExactSearch {
            return false;
        }
        match self.bounds().prev() {
            Some(page) => {
                self.page = page;
                true
            }
            None => false,
        }
    }

    /// Jump to `page`, clamped to the known page range.
    ///
    /// Before any total is known only the lower bound applies. Returns
    /// `false` when the page does not change.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if self.mode() == Mode::ExactSearch {
            return false;
        }
        let target = if self.total > 0 {
            self.bounds().clamp_page(page)
        } else {
            page.max(1)
        };
        if target == self.page {
            return false;
        }
        self.page = target;
        true
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.category = None;
        self.page = 1;
    }

    /// Record the total reported by a completed fetch and clamp the page
    pub fn commit_total(&mut self, total: usize) {
        self.total = total;
        self.page = self.bounds().page;
    }

    /// Controls to persist
    pub fn preferences(&self) -> Preferences {
        Preferences {
            query: self.query.clone(),
            category: self.category.clone(),
            sort: self.sort,
        }
    }
}
