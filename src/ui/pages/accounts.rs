// SPDX-License-Identifier: MPL-2.0
//! Account catalog management.

use crate::api::Client;
use crate::diagnostics::ErrorType;
use crate::domain::AccountType;
use crate::i18n::I18n;
use crate::ui::components::confirm_dialog::ConfirmDialog;
use crate::ui::components::search_bar;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::widget::{button, scrollable, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Task, Theme};

#[derive(Default)]
pub struct State {
    items: Vec<AccountType>,
    search: String,
    loading: bool,
    confirm_delete: Option<AccountType>,
}

impl State {
    pub fn items(&self) -> &[AccountType] {
        &self.items
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    SearchChanged(String),
    Loaded(Result<Vec<AccountType>, String>),
    New,
    Edit(String),
    RequestDelete(String),
    CancelDelete,
    ConfirmDelete,
    Deleted(Result<String, String>),
}

pub enum Event {
    None,
    OpenForm(Option<AccountType>),
    Notify(Notification),
    Deleted(String),
}

pub fn update(state: &mut State, message: Message, client: &Client) -> (Task<Message>, Event) {
    match message {
        Message::Refresh => {
            state.loading = true;
            let client = client.clone();
            let task = Task::perform(
                async move {
                    client
                        .list_account_types()
                        .await
                        .map_err(|e| e.i18n_key().to_string())
                },
                Message::Loaded,
            );
            (task, Event::None)
        }
        Message::SearchChanged(term) => {
            state.search = term;
            (Task::none(), Event::None)
        }
        Message::Loaded(Ok(items)) => {
            state.loading = false;
            state.items = items;
            (Task::none(), Event::None)
        }
        Message::Loaded(Err(key)) => {
            state.loading = false;
            (
                Task::none(),
                Event::Notify(Notification::error(key).with_error_type(ErrorType::Api)),
            )
        }
        Message::New => (Task::none(), Event::OpenForm(None)),
        Message::Edit(id) => {
            let account = state.items.iter().find(|a| a.id == id).cloned();
            (Task::none(), Event::OpenForm(account))
        }
        Message::RequestDelete(id) => {
            state.confirm_delete = state.items.iter().find(|a| a.id == id).cloned();
            (Task::none(), Event::None)
        }
        Message::CancelDelete => {
            state.confirm_delete = None;
            (Task::none(), Event::None)
        }
        Message::ConfirmDelete => match state.confirm_delete.take() {
            Some(account) => {
                let client = client.clone();
                let id = account.id.clone();
                let task = Task::perform(
                    async move {
                        client
                            .delete_account_type(&id)
                            .await
                            .map(|()| id)
                            .map_err(|e| e.i18n_key().to_string())
                    },
                    Message::Deleted,
                );
                (task, Event::None)
            }
            None => (Task::none(), Event::None),
        },
        Message::Deleted(Ok(id)) => {
            state.items.retain(|a| a.id != id);
            (Task::none(), Event::Deleted(id))
        }
        Message::Deleted(Err(key)) => (
            Task::none(),
            Event::Notify(Notification::error(key).with_error_type(ErrorType::Api)),
        ),
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(i18n.tr("accounts-title")).size(typography::TITLE_SM))
                .width(Length::Fill),
        )
        .push(
            button(
                Row::new()
                    .spacing(spacing::XXS)
                    .align_y(alignment::Vertical::Center)
                    .push(icons::sized(icons::plus(), sizing::ICON_SM))
                    .push(Text::new(i18n.tr("accounts-new")).size(typography::BODY)),
            )
            .on_press(Message::New)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary),
        );

    let search = search_bar::view(
        &i18n.tr("catalog-search-placeholder"),
        &state.search,
        Message::SearchChanged,
    );

    let term = state.search.trim().to_lowercase();
    let mut list = Column::new().spacing(spacing::SM);
    if state.loading {
        list = list.push(Text::new(i18n.tr("catalog-loading")).size(typography::BODY));
    } else {
        let mut matched = 0_usize;
        for account in &state.items {
            if term.is_empty() || account.name.to_lowercase().contains(&term) {
                matched += 1;
                list = list.push(account_row(account, i18n));
            }
        }
        if matched == 0 {
            list = list.push(Text::new(i18n.tr("catalog-empty")).size(typography::BODY));
        }
    }

    let page: Element<'a, Message> = scrollable(
        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(header)
            .push(search)
            .push(list),
    )
    .into();

    match &state.confirm_delete {
        Some(account) => Stack::new()
            .push(page)
            .push(
                ConfirmDialog::new(
                    "dialog-delete-title",
                    "dialog-delete-body",
                    Message::ConfirmDelete,
                    Message::CancelDelete,
                )
                .with_arg("name", &account.name)
                .view(i18n),
            )
            .into(),
        None => page,
    }
}

fn account_row<'a>(account: &'a AccountType, i18n: &'a I18n) -> Element<'a, Message> {
    let identity = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::by_name(&account.icon), sizing::ICON_MD))
        .push(
            Column::new()
                .push(Text::new(account.name.clone()).size(typography::BODY))
                .push(
                    Text::new(account.description.clone())
                        .size(typography::CAPTION)
                        .style(|theme: &Theme| text::Style {
                            color: Some(theme.extended_palette().background.weak.text),
                        }),
                ),
        );

    let rate = match account.interest_rate {
        Some(rate) => i18n.tr_with_args("accounts-interest", &[("rate", &format!("{rate:.2}"))]),
        None => i18n.tr("accounts-no-interest"),
    };

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(identity).width(Length::FillPortion(3)))
            .push(
                Text::new(rate)
                    .size(typography::BODY_SM)
                    .width(Length::FillPortion(1)),
            )
            .push(
                Text::new(i18n.tr_with_args(
                    "accounts-monthly-fee",
                    &[("amount", &format!("{:.1}", account.fees.monthly))],
                ))
                .size(typography::BODY_SM)
                .width(Length::FillPortion(1)),
            )
            .push(
                button(icons::sized(icons::pencil(), sizing::ICON_SM))
                    .on_press(Message::Edit(account.id.clone()))
                    .padding(spacing::XS)
                    .style(styles::button::subtle),
            )
            .push(
                button(icons::sized(icons::trash(), sizing::ICON_SM))
                    .on_press(Message::RequestDelete(account.id.clone()))
                    .padding(spacing::XS)
                    .style(styles::button::subtle),
            ),
    )
    .padding(spacing::SM)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client() -> Client {
        Client::new("http://localhost:5000", Duration::from_secs(1)).expect("client builds")
    }

    fn account(id: &str, name: &str) -> AccountType {
        AccountType {
            id: id.into(),
            name: name.into(),
            ..AccountType::default()
        }
    }

    #[test]
    fn loaded_replaces_items() {
        let mut state = State::default();
        let (_, _) = update(
            &mut state,
            Message::Loaded(Ok(vec![account("a1", "Savings")])),
            &client(),
        );
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn deleted_removes_matching_row_only() {
        let mut state = State {
            items: vec![account("a1", "Savings"), account("a2", "Current")],
            ..State::default()
        };
        let _ = update(&mut state, Message::Deleted(Ok("a2".into())), &client());
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, "a1");
    }

    #[test]
    fn new_opens_blank_form() {
        let mut state = State::default();
        let (_, event) = update(&mut state, Message::New, &client());
        assert!(matches!(event, Event::OpenForm(None)));
    }
}
