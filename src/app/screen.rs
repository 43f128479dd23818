// SPDX-License-Identifier: MPL-2.0
//! Top-level navigation routes.

use serde::{Deserialize, Serialize};

/// The screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Dashboard,
    Users,
    Cards,
    Accounts,
    Credits,
    Requests,
    Broadcast,
    Settings,
}

impl Screen {
    /// Sidebar display order.
    pub const ALL: [Screen; 8] = [
        Screen::Dashboard,
        Screen::Users,
        Screen::Cards,
        Screen::Accounts,
        Screen::Credits,
        Screen::Requests,
        Screen::Broadcast,
        Screen::Settings,
    ];

    pub fn i18n_key(self) -> &'static str {
        match self {
            Screen::Dashboard => "nav-dashboard",
            Screen::Users => "nav-users",
            Screen::Cards => "nav-cards",
            Screen::Accounts => "nav-accounts",
            Screen::Credits => "nav-credits",
            Screen::Requests => "nav-requests",
            Screen::Broadcast => "nav-broadcast",
            Screen::Settings => "nav-settings",
        }
    }

    /// Stable name used in diagnostics entries.
    pub fn name(self) -> &'static str {
        match self {
            Screen::Dashboard => "dashboard",
            Screen::Users => "users",
            Screen::Cards => "cards",
            Screen::Accounts => "accounts",
            Screen::Credits => "credits",
            Screen::Requests => "requests",
            Screen::Broadcast => "broadcast",
            Screen::Settings => "settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_screens_have_distinct_keys() {
        let mut keys: Vec<_> = Screen::ALL.iter().map(|s| s.i18n_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Screen::ALL.len());
    }

    #[test]
    fn default_screen_is_dashboard() {
        assert_eq!(Screen::default(), Screen::Dashboard);
    }
}
