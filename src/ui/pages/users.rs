// SPDX-License-Identifier: MPL-2.0
//! Customer directory with live search and local removal.

use crate::domain::{samples, User};
use crate::i18n::I18n;
use crate::ui::components::confirm_dialog::ConfirmDialog;
use crate::ui::components::{search_bar, status_badge};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Background, Border, Element, Length, Theme};

pub struct State {
    users: Vec<User>,
    search: String,
    confirm_delete: Option<User>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            users: samples::users(),
            search: String::new(),
            confirm_delete: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    RequestDelete(String),
    CancelDelete,
    ConfirmDelete,
}

pub fn update(state: &mut State, message: Message) {
    match message {
        Message::SearchChanged(term) => state.search = term,
        Message::RequestDelete(id) => {
            state.confirm_delete = state.users.iter().find(|u| u.id == id).cloned();
        }
        Message::CancelDelete => state.confirm_delete = None,
        Message::ConfirmDelete => {
            if let Some(user) = state.confirm_delete.take() {
                state.users.retain(|u| u.id != user.id);
            }
        }
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let search = search_bar::view(
        &i18n.tr("users-search-placeholder"),
        &state.search,
        Message::SearchChanged,
    );

    let mut rows = Column::new().spacing(spacing::SM);
    let mut matched = 0_usize;
    for user in &state.users {
        if user.matches(&state.search) {
            matched += 1;
            rows = rows.push(user_row(user, i18n));
        }
    }

    if matched == 0 {
        rows = rows.push(
            Text::new(i18n.tr("users-empty"))
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );
    }

    let table = Container::new(rows)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(search)
        .push(table);

    let page: Element<'a, Message> = scrollable(content).into();

    match &state.confirm_delete {
        Some(user) => Stack::new()
            .push(page)
            .push(
                ConfirmDialog::new(
                    "dialog-delete-title",
                    "dialog-delete-body",
                    Message::ConfirmDelete,
                    Message::CancelDelete,
                )
                .with_arg("name", &user.name)
                .view(i18n),
            )
            .into(),
        None => page,
    }
}

fn user_row<'a>(user: &'a User, i18n: &'a I18n) -> Element<'a, Message> {
    let avatar = Container::new(
        Text::new(user.initials()).size(typography::BODY_SM),
    )
    .width(Length::Fixed(32.0))
    .height(Length::Fixed(32.0))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::PRIMARY_100)),
        border: Border::default().rounded(radius::FULL),
        text_color: Some(palette::PRIMARY_700),
        ..Default::default()
    });

    let identity = Column::new()
        .push(Text::new(user.name.clone()).size(typography::BODY))
        .push(
            Text::new(user.email.clone())
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(avatar)
        .push(Container::new(identity).width(Length::FillPortion(3)))
        .push(
            Text::new(user.account_type.clone())
                .size(typography::BODY_SM)
                .width(Length::FillPortion(1)),
        )
        .push(
            Text::new(user.last_login.format("%Y-%m-%d").to_string())
                .size(typography::BODY_SM)
                .width(Length::FillPortion(1)),
        )
        .push(status_badge::user(user.status, i18n))
        .push(
            button(icons::sized(icons::trash(), sizing::ICON_SM))
                .on_press(Message::RequestDelete(user.id.clone()))
                .padding(spacing::XS)
                .style(styles::button::subtle),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_updates_state() {
        let mut state = State::default();
        update(&mut state, Message::SearchChanged("ahmed".into()));
        assert_eq!(state.search, "ahmed");
    }

    #[test]
    fn view_renders_with_and_without_matches() {
        let i18n = I18n::default();
        let mut state = State::default();
        let _all = view(&state, &i18n);
        drop(_all);

        state.search = "no-such-customer".into();
        let _empty = view(&state, &i18n);
    }

    #[test]
    fn delete_flow_requires_confirmation() {
        let mut state = State::default();
        let initial = state.users.len();
        let id = state.users[0].id.clone();

        update(&mut state, Message::RequestDelete(id.clone()));
        assert!(state.confirm_delete.is_some());

        update(&mut state, Message::CancelDelete);
        assert_eq!(state.users.len(), initial);

        update(&mut state, Message::RequestDelete(id.clone()));
        update(&mut state, Message::ConfirmDelete);
        assert_eq!(state.users.len(), initial - 1);
        assert!(state.users.iter().all(|u| u.id != id));
    }
}
