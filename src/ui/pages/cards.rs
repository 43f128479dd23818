// SPDX-License-Identifier: MPL-2.0
//! Card catalog management.
//!
//! Lists the card products served by the backend and drives the
//! create/edit/delete operations. Mutations themselves happen in the card
//! form wizard; this page owns the listing and the delete confirmation.

use crate::api::Client;
use crate::diagnostics::ErrorType;
use crate::domain::CardType;
use crate::i18n::I18n;
use crate::ui::components::confirm_dialog::ConfirmDialog;
use crate::ui::components::search_bar;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::Notification;
use crate::ui::styles;
use base64::Engine as _;
use iced::widget::{button, image, scrollable, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Task, Theme};

#[derive(Default)]
pub struct State {
    items: Vec<CardType>,
    search: String,
    loading: bool,
    confirm_delete: Option<CardType>,
}

impl State {
    pub fn items(&self) -> &[CardType] {
        &self.items
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    SearchChanged(String),
    /// Listing response; errors carry the i18n key of the failure.
    Loaded(Result<Vec<CardType>, String>),
    New,
    Edit(String),
    RequestDelete(String),
    CancelDelete,
    ConfirmDelete,
    Deleted(Result<String, String>),
}

/// Events propagated to the parent application.
pub enum Event {
    None,
    /// Open the card form; `None` means create.
    OpenForm(Option<CardType>),
    Notify(Notification),
    /// A record was deleted server-side; the id is reported for the
    /// diagnostics log.
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
                        .list_card_types()
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
            let card = state.items.iter().find(|c| c.id == id).cloned();
            (Task::none(), Event::OpenForm(card))
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
            Some(card) => {
                let client = client.clone();
                let id = card.id.clone();
                let task = Task::perform(
                    async move {
                        client
                            .delete_card_type(&id)
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
            Container::new(Text::new(i18n.tr("cards-title")).size(typography::TITLE_SM))
                .width(Length::Fill),
        )
        .push(
            button(
                Row::new()
                    .spacing(spacing::XXS)
                    .align_y(alignment::Vertical::Center)
                    .push(icons::sized(icons::plus(), sizing::ICON_SM))
                    .push(Text::new(i18n.tr("cards-new")).size(typography::BODY)),
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
        for card in &state.items {
            if term.is_empty()
                || card.name.to_lowercase().contains(&term)
                || card.tag.to_lowercase().contains(&term)
            {
                matched += 1;
                list = list.push(card_row(card, i18n));
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
        Some(card) => Stack::new()
            .push(page)
            .push(
                ConfirmDialog::new(
                    "dialog-delete-title",
                    "dialog-delete-body",
                    Message::ConfirmDelete,
                    Message::CancelDelete,
                )
                .with_arg("name", &card.name)
                .view(i18n),
            )
            .into(),
        None => page,
    }
}

/// Decodes the card's embedded data-URL artwork, if any.
fn artwork(card: &CardType) -> Option<Element<'static, Message>> {
    let (_, payload) = card.image.split_once(";base64,")?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .ok()?;
    Some(
        image(image::Handle::from_bytes(bytes))
            .width(sizing::CARD_THUMB_WIDTH)
            .height(sizing::CARD_THUMB_HEIGHT)
            .into(),
    )
}

fn card_row<'a>(card: &'a CardType, i18n: &'a I18n) -> Element<'a, Message> {
    let identity = Column::new()
        .push(Text::new(card.name.clone()).size(typography::BODY))
        .push(
            Text::new(card.description.clone())
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );

    let fees = Text::new(i18n.tr_with_args(
        "cards-annual-fee",
        &[("amount", &format!("{:.0}", card.fees.annual))],
    ))
    .size(typography::BODY_SM);

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .extend(artwork(card))
            .push(Container::new(identity).width(Length::FillPortion(3)))
            .push(
                Text::new(card.tag.clone())
                    .size(typography::BODY_SM)
                    .width(Length::FillPortion(1)),
            )
            .push(Container::new(fees).width(Length::FillPortion(1)))
            .push(
                button(icons::sized(icons::pencil(), sizing::ICON_SM))
                    .on_press(Message::Edit(card.id.clone()))
                    .padding(spacing::XS)
                    .style(styles::button::subtle),
            )
            .push(
                button(icons::sized(icons::trash(), sizing::ICON_SM))
                    .on_press(Message::RequestDelete(card.id.clone()))
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

    fn card(id: &str, name: &str) -> CardType {
        CardType {
            id: id.into(),
            name: name.into(),
            ..CardType::default()
        }
    }

    #[test]
    fn loaded_replaces_items() {
        let mut state = State::default();
        state.loading = true;

        let (_, event) = update(
            &mut state,
            Message::Loaded(Ok(vec![card("1", "STB Travel")])),
            &client(),
        );
        assert!(!state.loading);
        assert_eq!(state.items.len(), 1);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn load_failure_notifies_with_api_category() {
        let mut state = State::default();
        let (_, event) = update(
            &mut state,
            Message::Loaded(Err("error-api-network".into())),
            &client(),
        );
        match event {
            Event::Notify(notification) => {
                assert_eq!(notification.error_type(), Some(ErrorType::Api));
            }
            _ => panic!("expected a toast"),
        }
    }

    #[test]
    fn edit_opens_form_with_record() {
        let mut state = State {
            items: vec![card("1", "STB Travel")],
            ..State::default()
        };
        let (_, event) = update(&mut state, Message::Edit("1".into()), &client());
        match event {
            Event::OpenForm(Some(c)) => assert_eq!(c.name, "STB Travel"),
            _ => panic!("expected form open event"),
        }
    }

    #[test]
    fn delete_flow_requires_confirmation() {
        let mut state = State {
            items: vec![card("1", "STB Travel")],
            ..State::default()
        };

        let _ = update(&mut state, Message::RequestDelete("1".into()), &client());
        assert!(state.confirm_delete.is_some());

        let _ = update(&mut state, Message::CancelDelete, &client());
        assert!(state.confirm_delete.is_none());
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn successful_delete_removes_row() {
        let mut state = State {
            items: vec![card("1", "STB Travel"), card("2", "CIB3")],
            ..State::default()
        };
        let (_, event) = update(&mut state, Message::Deleted(Ok("1".into())), &client());
        assert_eq!(state.items.len(), 1);
        assert!(matches!(event, Event::Deleted(_)));
    }
}
