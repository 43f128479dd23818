// SPDX-License-Identifier: MPL-2.0
//! Central update loop: routes component messages and applies their events.

use super::{App, Message, Screen, Wizard};
use crate::config;
use crate::diagnostics::{ErrorEvent, ErrorType, UserAction};
use crate::ui::notifications::Notification;
use crate::ui::pages;
use crate::ui::wizard::{account_form, card_form, credit_form};
use crate::ui::{header, sidebar};
use crate::api::Client;
use iced::Task;
use std::time::Duration;
use unic_langid::LanguageIdentifier;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        // Fold pending diagnostic events into the bounded buffer.
        self.diagnostics.drain();

        match message {
            Message::Sidebar(message) => match sidebar::update(message) {
                sidebar::Event::Navigate(screen) => self.navigate(screen),
            },
            Message::Header(message) => match header::update(message) {
                header::Event::Navigate(screen) => self.navigate(screen),
            },
            Message::Dashboard(message) => match message {},
            Message::Users(message) => {
                pages::users::update(&mut self.users, message);
                Task::none()
            }
            Message::Cards(message) => {
                let (task, event) =
                    pages::cards::update(&mut self.cards, message, &self.client);
                let follow_up = match event {
                    pages::cards::Event::None => Task::none(),
                    pages::cards::Event::OpenForm(record) => {
                        self.wizard = Some(Wizard::Card(match record {
                            Some(card) => card_form::State::edit(card),
                            None => card_form::State::new(),
                        }));
                        Task::none()
                    }
                    pages::cards::Event::Notify(notification) => {
                        self.push_notification(notification)
                    }
                    pages::cards::Event::Deleted(id) => self.catalog_deleted("card", &id),
                };
                Task::batch([task.map(Message::Cards), follow_up])
            }
            Message::Accounts(message) => {
                let (task, event) =
                    pages::accounts::update(&mut self.accounts, message, &self.client);
                let follow_up = match event {
                    pages::accounts::Event::None => Task::none(),
                    pages::accounts::Event::OpenForm(record) => {
                        self.wizard = Some(Wizard::Account(match record {
                            Some(account) => account_form::State::edit(account),
                            None => account_form::State::new(),
                        }));
                        Task::none()
                    }
                    pages::accounts::Event::Notify(notification) => {
                        self.push_notification(notification)
                    }
                    pages::accounts::Event::Deleted(id) => {
                        self.catalog_deleted("account", &id)
                    }
                };
                Task::batch([task.map(Message::Accounts), follow_up])
            }
            Message::Credits(message) => {
                let (task, event) =
                    pages::credits::update(&mut self.credits, message, &self.client);
                let follow_up = match event {
                    pages::credits::Event::None => Task::none(),
                    pages::credits::Event::OpenForm(record) => {
                        self.wizard = Some(Wizard::Credit(match record {
                            Some(credit) => credit_form::State::edit(credit),
                            None => credit_form::State::new(),
                        }));
                        Task::none()
                    }
                    pages::credits::Event::Notify(notification) => {
                        self.push_notification(notification)
                    }
                    pages::credits::Event::Deleted(id) => {
                        self.catalog_deleted("credit", &id)
                    }
                };
                Task::batch([task.map(Message::Credits), follow_up])
            }
            Message::Requests(message) => {
                match pages::requests::update(&mut self.requests, message) {
                    pages::requests::Event::None => Task::none(),
                    pages::requests::Event::Resolved { product, approved } => {
                        self.diagnostics
                            .handle()
                            .log_action(UserAction::ResolveRequest { approved });
                        let key = if approved {
                            "toast-request-approved"
                        } else {
                            "toast-request-rejected"
                        };
                        let notification = if approved {
                            Notification::success(key)
                        } else {
                            Notification::plain(key)
                        };
                        self.push_notification(notification.with_arg("product", product))
                    }
                }
            }
            Message::Broadcast(message) => {
                match pages::broadcast::update(&mut self.broadcast, message) {
                    pages::broadcast::Event::None => Task::none(),
                    pages::broadcast::Event::Notify(notification) => {
                        self.push_notification(notification)
                    }
                    pages::broadcast::Event::Broadcast {
                        notification,
                        channel,
                    } => {
                        self.diagnostics
                            .handle()
                            .log_action(UserAction::SendBroadcast {
                                channel: channel.name().to_string(),
                            });
                        self.push_notification(notification)
                    }
                }
            }
            Message::Settings(message) => {
                match pages::settings::update(&mut self.settings, message) {
                    pages::settings::Event::None => Task::none(),
                    pages::settings::Event::LanguageChanged(language) => {
                        self.set_language(&language);
                        Task::none()
                    }
                    pages::settings::Event::ThemeChanged(mode) => {
                        self.theme_mode = mode;
                        Task::none()
                    }
                    pages::settings::Event::Apply(config) => self.apply_config(config),
                    pages::settings::Event::Notify(notification) => {
                        self.push_notification(notification)
                    }
                }
            }
            Message::CardForm(message) => {
                let Some(Wizard::Card(state)) = &mut self.wizard else {
                    return Task::none();
                };
                let (task, event) = card_form::update(state, message, &self.client);
                let follow_up = match event {
                    card_form::Event::None => Task::none(),
                    card_form::Event::Cancelled => {
                        self.wizard = None;
                        Task::none()
                    }
                    card_form::Event::Saved { created } => {
                        self.wizard = None;
                        let toast = self.catalog_saved("card", created);
                        let (refresh, _) = pages::cards::update(
                            &mut self.cards,
                            pages::cards::Message::Refresh,
                            &self.client,
                        );
                        Task::batch([toast, refresh.map(Message::Cards)])
                    }
                    card_form::Event::Notify(notification) => {
                        self.push_notification(notification)
                    }
                };
                Task::batch([task.map(Message::CardForm), follow_up])
            }
            Message::AccountForm(message) => {
                let Some(Wizard::Account(state)) = &mut self.wizard else {
                    return Task::none();
                };
                let (task, event) = account_form::update(state, message, &self.client);
                let follow_up = match event {
                    account_form::Event::None => Task::none(),
                    account_form::Event::Cancelled => {
                        self.wizard = None;
                        Task::none()
                    }
                    account_form::Event::Saved { created } => {
                        self.wizard = None;
                        let toast = self.catalog_saved("account", created);
                        let (refresh, _) = pages::accounts::update(
                            &mut self.accounts,
                            pages::accounts::Message::Refresh,
                            &self.client,
                        );
                        Task::batch([toast, refresh.map(Message::Accounts)])
                    }
                    account_form::Event::Notify(notification) => {
                        self.push_notification(notification)
                    }
                };
                Task::batch([task.map(Message::AccountForm), follow_up])
            }
            Message::CreditForm(message) => {
                let Some(Wizard::Credit(state)) = &mut self.wizard else {
                    return Task::none();
                };
                let (task, event) = credit_form::update(state, message, &self.client);
                let follow_up = match event {
                    credit_form::Event::None => Task::none(),
                    credit_form::Event::Cancelled => {
                        self.wizard = None;
                        Task::none()
                    }
                    credit_form::Event::Saved { created } => {
                        self.wizard = None;
                        let toast = self.catalog_saved("credit", created);
                        let (refresh, _) = pages::credits::update(
                            &mut self.credits,
                            pages::credits::Message::Refresh,
                            &self.client,
                        );
                        Task::batch([toast, refresh.map(Message::Credits)])
                    }
                    credit_form::Event::Notify(notification) => {
                        self.push_notification(notification)
                    }
                };
                Task::batch([task.map(Message::CreditForm), follow_up])
            }
            Message::Notification(message) => self
                .queue
                .handle_message(message)
                .map(Message::Notification),
        }
    }

    /// Switches screens, closing any open wizard.
    fn navigate(&mut self, screen: Screen) -> Task<Message> {
        if screen == self.screen && self.wizard.is_none() {
            return Task::none();
        }
        self.wizard = None;
        self.screen = screen;
        self.diagnostics.handle().log_action(UserAction::Navigate {
            screen: screen.name().to_string(),
        });

        // Entering a catalog screen refreshes its listing.
        match screen {
            Screen::Cards => {
                let (task, _) = pages::cards::update(
                    &mut self.cards,
                    pages::cards::Message::Refresh,
                    &self.client,
                );
                task.map(Message::Cards)
            }
            Screen::Accounts => {
                let (task, _) = pages::accounts::update(
                    &mut self.accounts,
                    pages::accounts::Message::Refresh,
                    &self.client,
                );
                task.map(Message::Accounts)
            }
            Screen::Credits => {
                let (task, _) = pages::credits::update(
                    &mut self.credits,
                    pages::credits::Message::Refresh,
                    &self.client,
                );
                task.map(Message::Credits)
            }
            _ => Task::none(),
        }
    }

    /// Enqueues a toast, returning the task that drives its expiry timer.
    pub(super) fn push_notification(&mut self, notification: Notification) -> Task<Message> {
        let (_id, task) = self.queue.push(notification);
        task.map(Message::Notification)
    }

    /// Initial warm-up of every catalog listing.
    pub(super) fn refresh_catalogs(&mut self) -> Task<Message> {
        let (cards, _) = pages::cards::update(
            &mut self.cards,
            pages::cards::Message::Refresh,
            &self.client,
        );
        let (accounts, _) = pages::accounts::update(
            &mut self.accounts,
            pages::accounts::Message::Refresh,
            &self.client,
        );
        let (credits, _) = pages::credits::update(
            &mut self.credits,
            pages::credits::Message::Refresh,
            &self.client,
        );
        Task::batch([
            cards.map(Message::Cards),
            accounts.map(Message::Accounts),
            credits.map(Message::Credits),
        ])
    }

    fn catalog_saved(&mut self, entity: &str, created: bool) -> Task<Message> {
        self.diagnostics
            .handle()
            .log_action(UserAction::SubmitCatalogRecord {
                entity: entity.to_string(),
                edit: !created,
            });
        let key = if created {
            "toast-record-created"
        } else {
            "toast-record-updated"
        };
        self.push_notification(Notification::success(key))
    }

    fn catalog_deleted(&mut self, entity: &str, id: &str) -> Task<Message> {
        self.diagnostics
            .handle()
            .log_action(UserAction::DeleteCatalogRecord {
                entity: format!("{entity}:{id}"),
            });
        self.push_notification(Notification::success("toast-record-deleted"))
    }

    fn set_language(&mut self, language: &str) {
        if let Ok(locale) = language.parse::<LanguageIdentifier>() {
            self.i18n.set_locale(locale);
        }
    }

    /// Persists and applies a configuration assembled by the settings page.
    fn apply_config(&mut self, config: config::Config) -> Task<Message> {
        let saved = config::save(&config);
        let mut tasks = Vec::new();

        if let Some(language) = config.general.language.clone() {
            self.set_language(&language);
        }
        self.theme_mode = config.theme_mode();
        let timeout = Duration::from_secs(
            config
                .api
                .timeout_secs
                .unwrap_or(config::DEFAULT_API_TIMEOUT_SECS),
        );
        match Client::new(config.api_base_url(), timeout) {
            Ok(client) => self.client = client,
            // The previous client keeps serving requests.
            Err(error) => {
                self.diagnostics
                    .handle()
                    .log_error(ErrorEvent::new(ErrorType::Other, error.to_string()));
                tasks.push(self.push_notification(Notification::error("error-http-client")));
            }
        }
        self.queue.set_default_duration(Duration::from_millis(
            config
                .notifications
                .default_duration_ms
                .unwrap_or(config::DEFAULT_TOAST_DURATION_MS),
        ));
        self.config = config;

        tasks.push(match saved {
            Ok(()) => self.push_notification(Notification::success("toast-settings-saved")),
            Err(_) => self.push_notification(Notification::error("error-config-save")),
        });
        Task::batch(tasks)
    }
}
