// SPDX-License-Identifier: MPL-2.0
//! Top-level layout: sidebar, header, active page and the toast overlay.

use super::{App, Message, Screen, Wizard};
use crate::ui::notifications::Toast;
use crate::ui::pages;
use crate::ui::wizard::{account_form, card_form, credit_form};
use crate::ui::{header, sidebar};
use iced::widget::{Column, Container, Row, Stack};
use iced::{Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let sidebar = sidebar::view(sidebar::ViewContext {
            i18n: &self.i18n,
            active: self.screen,
        })
        .map(Message::Sidebar);

        let header = header::view(header::ViewContext {
            i18n: &self.i18n,
            active: self.screen,
            pending_requests: self.requests.pending_count(),
        })
        .map(Message::Header);

        let content = Container::new(self.content())
            .width(Length::Fill)
            .height(Length::Fill);

        let body = Row::new().push(sidebar).push(
            Column::new()
                .width(Length::Fill)
                .push(header)
                .push(content),
        );

        Stack::new()
            .push(body)
            .push(Toast::view_overlay(&self.queue, &self.i18n).map(Message::Notification))
            .into()
    }

    /// The active page, or the wizard overlaying it.
    fn content(&self) -> Element<'_, Message> {
        if let Some(wizard) = &self.wizard {
            return match wizard {
                Wizard::Card(state) => {
                    card_form::view(state, &self.i18n).map(Message::CardForm)
                }
                Wizard::Account(state) => {
                    account_form::view(state, &self.i18n).map(Message::AccountForm)
                }
                Wizard::Credit(state) => {
                    credit_form::view(state, &self.i18n).map(Message::CreditForm)
                }
            };
        }

        match self.screen {
            Screen::Dashboard => {
                pages::dashboard::view(&self.dashboard, &self.i18n).map(Message::Dashboard)
            }
            Screen::Users => pages::users::view(&self.users, &self.i18n).map(Message::Users),
            Screen::Cards => pages::cards::view(&self.cards, &self.i18n).map(Message::Cards),
            Screen::Accounts => {
                pages::accounts::view(&self.accounts, &self.i18n).map(Message::Accounts)
            }
            Screen::Credits => {
                pages::credits::view(&self.credits, &self.i18n).map(Message::Credits)
            }
            Screen::Requests => {
                pages::requests::view(&self.requests, &self.i18n).map(Message::Requests)
            }
            Screen::Broadcast => {
                pages::broadcast::view(&self.broadcast, &self.i18n).map(Message::Broadcast)
            }
            Screen::Settings => {
                pages::settings::view(&self.settings, &self.i18n, &self.diagnostics)
                    .map(Message::Settings)
            }
        }
    }
}
