//! View Router
//!
//! One active view out of a fixed set. Names outside the set resolve to the
//! first view.

use std::fmt;

/// Dashboard views, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Overview,
    Customers,
    Analytics,
}

impl View {
    pub const ALL: [View; 3] = [View::Overview, View::Customers, View::Analytics];

    /// Stable identifier used by the selector
    pub fn name(&self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::Customers => "customers",
            View::Analytics => "analytics",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Customers => "Customers",
            View::Analytics => "Analytics",
        }
    }

    /// Menu icon
    pub fn icon(&self) -> &'static str {
        match self {
            View::Overview => "🏠",
            View::Customers => "👥",
            View::Analytics => "📊",
        }
    }

    /// Map a view name to a view, falling back to the first one
    pub fn resolve(name: &str) -> View {
        View::ALL
            .into_iter()
            .find(|v| v.name() == name)
            .unwrap_or_else(|| {
                tracing::debug!(name, "Unknown view name, using default");
                View::ALL[0]
            })
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Holds the active view
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    active: View,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> View {
        self.active
    }

    /// Replace the active view
    pub fn select(&mut self, view: View) {
        if self.active != view {
            tracing::info!(from = %self.active, to = %view, "View changed");
        }
        self.active = view;
    }

    /// Select by name, returning the view actually selected
    pub fn select_name(&mut self, name: &str) -> View {
        let view = View::resolve(name);
        self.select(view);
        view
    }
}
