//! A browsing session: controller, presenter and saved preferences wired
//! together.

use crate::gateway::CatalogSource;
use crate::prefs::PrefsStore;
use crate::presentation::Presenter;
use crate::render::Status;
use crate::resolver::{Controller, Intent, Plan, ViewState};

pub struct Session<S, P, St> {
    controller: Controller<S>,
    presenter: P,
    prefs: St,
}

impl<S, P, St> Session<S, P, St>
where
    S: CatalogSource,
    P: Presenter,
    St: PrefsStore,
{
    /// Create a session whose controls are seeded from saved preferences
    pub fn new(source: S, presenter: P, prefs: St) -> Self {
        let state = ViewState::from_preferences(&prefs.load());
        Self {
            controller: Controller::new(source, state),
            presenter,
            prefs,
        }
    }

    pub fn controller(&self) -> &Controller<S> {
        &self.controller
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Load categories and paint the first page for the seeded controls
    pub async fn start(&mut self) {
        if let Some(status) = self.controller.load_categories().await {
            self.presenter.show_status(&status);
        } else {
            self.paint_categories();
        }
        let plan = self.controller.plan();
        self.run(plan).await;
    }

    /// Handle one user intent.
    ///
    /// Returns `false` when the intent was a no-op (paging past either end).
    pub async fn apply(&mut self, intent: Intent) -> bool {
        let persists = intent.persists();
        let before = self.controller.state().category().map(str::to_string);

        let Some(plan) = self.controller.dispatch(intent) else {
            return false;
        };

        if persists {
            self.save_preferences();
        }
        let category_changed = self.controller.state().category() != before.as_deref();
        if category_changed && !self.controller.categories().is_empty() {
            self.paint_categories();
        }
        self.run(plan).await;
        true
    }

    pub fn paint_categories(&mut self) {
        let active = self.controller.state().category();
        self.presenter
            .paint_categories(self.controller.categories(), active);
    }

    async fn run(&mut self, plan: Plan) {
        self.presenter.show_status(&Status::Loading);
        if let Some(result) = self.controller.execute(plan).await {
            self.presenter.paint(&result);
        }
    }

    fn save_preferences(&self) {
        let prefs = self.controller.state().preferences();
        if let Err(e) = self.prefs.save(&prefs) {
            tracing::warn!("failed to save preferences: {}", e);
        }
    }
}
