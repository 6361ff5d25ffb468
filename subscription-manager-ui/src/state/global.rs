//! Global Application State
//!
//! Reactive wrapper around the core [`AppState`]. Components read it through
//! signals and send every change back through the methods here.

use gloo_timers::callback::Timeout;
use leptos::*;
use subscription_manager::{
    outcome_notification, AppState, Config, Credentials, NewSubscription, Notification,
    PaymentAction, View,
};

use super::storage::LocalStorageCache;

/// Core dashboard state backed by browser storage
pub type DashboardState = AppState<LocalStorageCache>;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Session, active view and customer filter
    pub app: RwSignal<DashboardState>,
    /// Toast currently on screen
    pub notification: RwSignal<ToastSlot>,
    /// Login submitted, outcome not yet reported
    pub signing_in: RwSignal<bool>,
}

/// The single toast on screen, stamped with the generation it was shown in.
///
/// A dismissal timer only clears the toast it was started for, even when a
/// later toast carries identical text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastSlot {
    generation: u64,
    current: Option<Notification>,
}

impl ToastSlot {
    /// Replace the toast and return its generation
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.generation += 1;
        self.current = Some(notification);
        self.generation
    }

    /// Clear the toast if it is still the one shown in `generation`
    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        app: create_rw_signal(AppState::new(Config::default(), LocalStorageCache)),
        notification: create_rw_signal(ToastSlot::default()),
        signing_in: create_rw_signal(false),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a notification (auto-clears after its variant's timeout)
    pub fn notify(&self, notification: Notification) {
        let timeout = self
            .app
            .with_untracked(|app| notification.timeout_ms(&app.config().notifications));

        let generation = self
            .notification
            .try_update(|slot| slot.show(notification))
            .unwrap_or_default();

        let signal = self.notification;
        Timeout::new(timeout, move || {
            signal.update(|slot| slot.expire(generation));
        })
        .forget();
    }

    pub fn dismiss(&self) {
        self.notification.update(|slot| slot.dismiss());
    }

    /// Submit credentials and report the outcome after the simulated latency
    pub fn login(&self, credentials: Credentials) {
        if self.signing_in.get_untracked() {
            return;
        }
        self.signing_in.set(true);

        let latency = self.app.with_untracked(|app| app.login_latency().as_millis());
        let latency = u32::try_from(latency).unwrap_or(u32::MAX);

        let state = *self;
        Timeout::new(latency, move || {
            if let Some(outcome) = state.app.try_update(|app| app.submit_login(&credentials)) {
                state.notify(outcome_notification(&outcome));
            }
            state.signing_in.set(false);
        })
        .forget();
    }

    pub fn logout(&self) {
        self.app.update(|app| app.logout());
    }

    pub fn select_view(&self, view: View) {
        self.app.update(|app| app.select_view(view));
    }

    pub fn set_query(&self, query: String) {
        self.app.update(|app| app.set_query(query));
    }

    pub fn set_status(&self, value: &str) {
        self.app.update(|app| app.set_status(value));
    }

    pub fn set_plan(&self, value: &str) {
        self.app.update(|app| app.set_plan(value));
    }

    /// Run a simulated payment action and toast the result
    pub fn payment_action(&self, customer_id: u32, action: PaymentAction) {
        let outcome = self
            .app
            .with_untracked(|app| app.payment_action(customer_id, action));

        match outcome {
            Ok(notification) => self.notify(notification),
            Err(e) => self.notify(Notification::destructive("Action failed", e.to_string())),
        }
    }

    /// Validate and submit the add-subscription form. Returns whether the
    /// dialog may close.
    pub fn add_subscription(&self, form: &NewSubscription) -> bool {
        match self.app.with_untracked(|app| app.add_subscription(form)) {
            Ok(notification) => {
                self.notify(notification);
                true
            }
            Err(e) => {
                self.notify(Notification::destructive("Invalid subscription", e.to_string()));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_timer_keeps_identical_newer_toast() {
        let mut slot = ToastSlot::default();
        let sent = Notification::new(
            "Payment link sent",
            "Payment link sent for John Smith has been processed.",
        );

        let first = slot.show(sent.clone());
        let second = slot.show(sent.clone());
        assert_ne!(first, second);

        slot.expire(first);
        assert_eq!(slot.current(), Some(&sent));

        slot.expire(second);
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn test_timer_clears_its_own_toast() {
        let mut slot = ToastSlot::default();
        let generation = slot.show(Notification::destructive(
            "Login failed",
            "Please enter both email and password",
        ));

        slot.expire(generation);
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_dismiss_then_late_timer() {
        let mut slot = ToastSlot::default();
        let generation = slot.show(Notification::new("a", "b"));

        slot.dismiss();
        slot.expire(generation);
        assert!(slot.current().is_none());

        let next = slot.show(Notification::new("c", "d"));
        assert!(next > generation);
        assert_eq!(slot.current().map(|n| n.title.as_str()), Some("c"));
    }
}
