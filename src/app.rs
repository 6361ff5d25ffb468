//! Dashboard coordinator
//!
//! [`AppState`] owns every piece of mutable dashboard state (session, active
//! view, customer filter) and is the only thing that changes it. Renderers
//! hold an `AppState`, read from it, and forward user events to it.
//!
//! ```text
//! no session ──submit_login──▶ Dashboard(Overview) ──select_view──▶ Dashboard(v)
//!      ▲                                                                │
//!      └──────────────────────────────logout────────────────────────────┘
//! ```

use std::time::Duration;

use crate::auth::{AuthError, AuthGate, Credentials};
use crate::config::Config;
use crate::customers::{
    self, ActionError, CustomerDirectory, CustomerFilter, CustomerRecord, FormError,
    NewSubscription, PaymentAction, Plan, Selector, StaticDirectory, Status,
};
use crate::notify::Notification;
use crate::router::{View, ViewRouter};
use crate::session::{KeyValueCache, SessionStore, UserIdentity};

/// What the top level should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard(View),
}

/// Top-level dashboard state
#[derive(Debug)]
pub struct AppState<C, D = StaticDirectory> {
    config: Config,
    gate: AuthGate,
    session: SessionStore<C>,
    router: ViewRouter,
    filter: CustomerFilter,
    directory: D,
}

impl<C: KeyValueCache> AppState<C> {
    /// State over the seeded directory, restoring any cached session
    pub fn new(config: Config, cache: C) -> Self {
        Self::with_directory(config, cache, StaticDirectory::seeded())
    }
}

impl<C: KeyValueCache, D: CustomerDirectory> AppState<C, D> {
    pub fn with_directory(config: Config, cache: C, directory: D) -> Self {
        let session = SessionStore::open(cache, config.session.cache_key.clone());
        Self {
            gate: AuthGate::new(&config.auth),
            config,
            session,
            router: ViewRouter::new(),
            filter: CustomerFilter::new(),
            directory,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        if self.session.is_authenticated() {
            Screen::Dashboard(self.router.active())
        } else {
            Screen::Login
        }
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.session.current()
    }

    pub fn session(&self) -> &SessionStore<C> {
        &self.session
    }

    /// Delay a renderer should wait between submit and showing the outcome
    pub fn login_latency(&self) -> Duration {
        self.gate.latency()
    }

    /// Run the auth gate and, on success, start a session on the overview.
    ///
    /// A cache write failure does not fail the login; the session lives in
    /// memory for this run.
    pub fn submit_login(&mut self, credentials: &Credentials) -> Result<UserIdentity, AuthError> {
        let identity = self.gate.authenticate(credentials)?;

        let _ = self.session.login(identity.clone());
        self.reset_dashboard();

        Ok(identity)
    }

    /// End the session and clear its cached copy
    pub fn logout(&mut self) {
        let _ = self.session.logout();
        self.reset_dashboard();
    }

    fn reset_dashboard(&mut self) {
        self.router = ViewRouter::new();
        self.filter = CustomerFilter::new();
    }

    pub fn active_view(&self) -> View {
        self.router.active()
    }

    pub fn select_view(&mut self, view: View) {
        self.router.select(view);
    }

    /// Select a view by name; unknown names select the first view
    pub fn select_view_name(&mut self, name: &str) -> View {
        self.router.select_name(name)
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn filter(&self) -> &CustomerFilter {
        &self.filter
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    /// Set the status selector from a select-widget value
    pub fn set_status(&mut self, value: &str) {
        self.filter.status = Selector::<Status>::parse(value);
    }

    /// Set the plan selector from a select-widget value
    pub fn set_plan(&mut self, value: &str) {
        self.filter.plan = Selector::<Plan>::parse(value);
    }

    /// Customers passing the current filter, in directory order
    pub fn visible_customers(&self) -> Vec<&CustomerRecord> {
        self.directory.filter(&self.filter)
    }

    pub fn payment_action(
        &self,
        customer_id: u32,
        action: PaymentAction,
    ) -> Result<Notification, ActionError> {
        customers::perform(&self.directory, customer_id, action)
    }

    pub fn add_subscription(&self, form: &NewSubscription) -> Result<Notification, FormError> {
        form.submit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::outcome_notification;
    use crate::session::MemoryCache;

    fn app(cache: &MemoryCache) -> AppState<MemoryCache> {
        AppState::new(Config::default(), cache.clone())
    }

    #[test]
    fn test_fresh_load_shows_login() {
        let cache = MemoryCache::new();
        assert_eq!(app(&cache).screen(), Screen::Login);
    }

    #[test]
    fn test_login_lands_on_overview() {
        let cache = MemoryCache::new();
        let mut state = app(&cache);

        let user = state.submit_login(&Credentials::new("a@b.com", "x")).unwrap();
        assert_eq!(user.name, "a");
        assert_eq!(state.screen(), Screen::Dashboard(View::Overview));
    }

    #[test]
    fn test_failed_login_stays_on_login() {
        let cache = MemoryCache::new();
        let mut state = app(&cache);

        let outcome = state.submit_login(&Credentials::new("a@b.com", ""));
        assert_eq!(outcome, Err(AuthError::MissingCredentials));
        assert!(outcome_notification(&outcome).is_destructive());
        assert_eq!(state.screen(), Screen::Login);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_session_survives_reload() {
        let cache = MemoryCache::new();
        app(&cache)
            .submit_login(&Credentials::new("jane@example.com", "pw"))
            .unwrap();

        let reloaded = app(&cache);
        assert_eq!(reloaded.screen(), Screen::Dashboard(View::Overview));
        assert_eq!(reloaded.user().map(|u| u.name.as_str()), Some("jane"));
    }

    #[test]
    fn test_logout_then_reload_shows_login() {
        let cache = MemoryCache::new();
        let mut state = app(&cache);
        state.submit_login(&Credentials::new("a@b.com", "x")).unwrap();

        state.logout();
        assert_eq!(state.screen(), Screen::Login);
        assert_eq!(app(&cache).screen(), Screen::Login);
    }

    #[test]
    fn test_each_view_renders_only_itself() {
        let cache = MemoryCache::new();
        let mut state = app(&cache);
        state.submit_login(&Credentials::new("a@b.com", "x")).unwrap();

        for view in View::ALL {
            state.select_view_name(view.name());
            assert_eq!(state.screen(), Screen::Dashboard(view));
            for other in View::ALL.into_iter().filter(|v| *v != view) {
                assert_ne!(state.screen(), Screen::Dashboard(other));
            }
        }
    }

    #[test]
    fn test_filter_state_drives_visible_customers() {
        let cache = MemoryCache::new();
        let mut state = app(&cache);

        state.set_status("active");
        state.set_plan("Premium");
        let names: Vec<_> = state.visible_customers().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, ["John Smith", "Alex Brown"]);

        state.set_query("ALEX");
        assert_eq!(state.visible_customers().len(), 1);

        state.set_status("all");
        state.set_plan("all");
        state.set_query("");
        assert_eq!(state.visible_customers().len(), 5);
    }

    #[test]
    fn test_logout_resets_view_and_filter() {
        let cache = MemoryCache::new();
        let mut state = app(&cache);
        state.submit_login(&Credentials::new("a@b.com", "x")).unwrap();
        state.select_view(View::Customers);
        state.set_query("mike");

        state.logout();
        state.submit_login(&Credentials::new("a@b.com", "x")).unwrap();

        assert_eq!(state.active_view(), View::Overview);
        assert!(state.filter().is_unrestricted());
    }

    #[test]
    fn test_simulated_mutations() {
        let cache = MemoryCache::new();
        let state = app(&cache);

        let n = state.payment_action(5, PaymentAction::StopAutoPay).unwrap();
        assert_eq!(n.description, "Payment stopped for Alex Brown has been processed.");

        let form = NewSubscription {
            name: "Kim".to_string(),
            email: "kim@example.com".to_string(),
            plan: Some(Plan::Basic),
            ..NewSubscription::default()
        };
        assert_eq!(state.add_subscription(&form).unwrap().title, "Subscription Added");
        assert_eq!(state.directory().len(), 5);
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_logout_clears_file_backed_session() {
        use crate::session::FileCache;

        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::new(Config::default(), FileCache::new(dir.path()));
        state.submit_login(&Credentials::new("a@b.com", "x")).unwrap();
        assert!(dir.path().join("dashboardUser.json").exists());

        let reloaded = AppState::new(Config::default(), FileCache::new(dir.path()));
        assert_eq!(reloaded.user().map(|u| u.email.as_str()), Some("a@b.com"));

        state.logout();
        assert!(!dir.path().join("dashboardUser.json").exists());
        let reloaded = AppState::new(Config::default(), FileCache::new(dir.path()));
        assert_eq!(reloaded.screen(), Screen::Login);
    }
}
