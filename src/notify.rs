//! Transient user-facing notifications
//!
//! Every simulated mutation and every login attempt ends in exactly one
//! [`Notification`]. How long it stays on screen is decided by the renderer
//! from [`NotificationConfig`](crate::config::NotificationConfig).

use serde::{Deserialize, Serialize};

use crate::config::NotificationConfig;

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

/// A toast message: title plus one line of detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: Variant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: Variant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }

    /// Milliseconds before this notification should be dismissed
    pub fn timeout_ms(&self, config: &NotificationConfig) -> u32 {
        match self.variant {
            Variant::Default => config.success_timeout_ms,
            Variant::Destructive => config.error_timeout_ms,
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_by_variant() {
        let config = NotificationConfig::default();
        assert_eq!(Notification::new("a", "b").timeout_ms(&config), 3000);
        assert_eq!(Notification::destructive("a", "b").timeout_ms(&config), 5000);
    }

    #[test]
    fn test_display() {
        let n = Notification::destructive("Login failed", "Please enter both email and password");
        assert!(n.is_destructive());
        assert_eq!(n.to_string(), "Login failed: Please enter both email and password");
    }
}
