// SPDX-License-Identifier: MPL-2.0
//! Credit catalog management.

use crate::api::Client;
use crate::diagnostics::ErrorType;
use crate::domain::CreditType;
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
    items: Vec<CreditType>,
    search: String,
    loading: bool,
    confirm_delete: Option<CreditType>,
}

impl State {
    pub fn items(&self) -> &[CreditType] {
        &self.items
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    SearchChanged(String),
    Loaded(Result<Vec<CreditType>, String>),
    New,
    Edit(String),
    RequestDelete(String),
    CancelDelete,
    ConfirmDelete,
    Deleted(Result<String, String>),
}

pub enum Event {
    None,
    OpenForm(Option<CreditType>),
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
                        .list_credit_types()
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
            let credit = state.items.iter().find(|c| c.id == id).cloned();
            (Task::none(), Event::OpenForm(credit))
        }
        Message::RequestDelete(id) => {
            state.confirm_delete = state.items.iter().find(|c| c.id == id).cloned();
            (Task::none(), Event::None)
        }
        Message::CancelDelete => {
            state.confirm_delete = None;
            (Task::none(), Event::None)
        }
        Message::ConfirmDelete => match state.confirm_delete.take() {
            Some(credit) => {
                let client = client.clone();
                let id = credit.id.clone();
                let task = Task::perform(
                    async move {
                        client
                            .delete_credit_type(&id)
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
            state.items.retain(|c| c.id != id);
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
            Container::new(Text::new(i18n.tr("credits-title")).size(typography::TITLE_SM))
                .width(Length::Fill),
        )
        .push(
            button(
                Row::new()
                    .spacing(spacing::XXS)
                    .align_y(alignment::Vertical::Center)
                    .push(icons::sized(icons::plus(), sizing::ICON_SM))
                    .push(Text::new(i18n.tr("credits-new")).size(typography::BODY)),
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
        for credit in &state.items {
            if term.is_empty() || credit.title.to_lowercase().contains(&term) {
                matched += 1;
                list = list.push(credit_row(credit, i18n));
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
        Some(credit) => Stack::new()
            .push(page)
            .push(
                ConfirmDialog::new(
                    "dialog-delete-title",
                    "dialog-delete-body",
                    Message::ConfirmDelete,
                    Message::CancelDelete,
                )
                .with_arg("name", &credit.title)
                .view(i18n),
            )
            .into(),
        None => page,
    }
}

fn credit_row<'a>(credit: &'a CreditType, i18n: &'a I18n) -> Element<'a, Message> {
    let identity = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::by_name(&credit.icon), sizing::ICON_MD))
        .push(
            Column::new()
                .push(Text::new(credit.title.clone()).size(typography::BODY))
                .push(
                    Text::new(credit.description.clone())
                        .size(typography::CAPTION)
                        .style(|theme: &Theme| text::Style {
                            color: Some(theme.extended_palette().background.weak.text),
                        }),
                ),
        );

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(identity).width(Length::FillPortion(3)))
            .push(
                Text::new(i18n.tr_with_args(
                    "credits-rate",
                    &[("rate", &format!("{:.2}", credit.interest_rate))],
                ))
                .size(typography::BODY_SM)
                .width(Length::FillPortion(1)),
            )
            .push(
                Text::new(credit.duration.clone())
                    .size(typography::BODY_SM)
                    .width(Length::FillPortion(1)),
            )
            .push(
                button(icons::sized(icons::pencil(), sizing::ICON_SM))
                    .on_press(Message::Edit(credit.id.clone()))
                    .padding(spacing::XS)
                    .style(styles::button::subtle),
            )
            .push(
                button(icons::sized(icons::trash(), sizing::ICON_SM))
                    .on_press(Message::RequestDelete(credit.id.clone()))
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

    fn credit(id: &str, title: &str) -> CreditType {
        CreditType {
            id: id.into(),
            title: title.into(),
            ..CreditType::default()
        }
    }

    #[test]
    fn edit_of_unknown_id_opens_blank_form() {
        // Record may have been deleted by a concurrent admin session.
        let mut state = State::default();
        let (_, event) = update(&mut state, Message::Edit("gone".into()), &client());
        assert!(matches!(event, Event::OpenForm(None)));
    }

    #[test]
    fn confirm_without_pending_delete_is_a_no_op() {
        let mut state = State {
            items: vec![credit("c1", "Home Loan")],
            ..State::default()
        };
        let (_, event) = update(&mut state, Message::ConfirmDelete, &client());
        assert!(matches!(event, Event::None));
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn failed_delete_keeps_row_and_notifies() {
        let mut state = State {
            items: vec![credit("c1", "Home Loan")],
            ..State::default()
        };
        let (_, event) = update(
            &mut state,
            Message::Deleted(Err("error-api-network".into())),
            &client(),
        );
        assert_eq!(state.items.len(), 1);
        assert!(matches!(event, Event::Notify(_)));
    }
}
