// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications::NotificationMessage;
use crate::ui::pages::{
    accounts, broadcast, cards, credits, dashboard, requests, settings, users,
};
use crate::ui::wizard::{account_form, card_form, credit_form};
use crate::ui::{header, sidebar};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Sidebar(sidebar::Message),
    Header(header::Message),
    Dashboard(dashboard::Message),
    Users(users::Message),
    Cards(cards::Message),
    Accounts(accounts::Message),
    Credits(credits::Message),
    Requests(requests::Message),
    Broadcast(broadcast::Message),
    Settings(settings::Message),
    CardForm(card_form::Message),
    AccountForm(account_form::Message),
    CreditForm(credit_form::Message),
    Notification(NotificationMessage),
}

/// Command-line flags collected by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Override for the UI language (e.g. "fr-FR").
    pub lang: Option<String>,
    /// Override for the backend base URL.
    pub api_url: Option<String>,
    /// Override for the configuration directory.
    pub config_dir: Option<String>,
}
