// SPDX-License-Identifier: MPL-2.0
//! Service request inbox: card, account and credit applications.
//!
//! Requests are mock operational data; resolving one only mutates local
//! state, but the decision is surfaced through an event so the app can
//! toast and log it.

use crate::domain::{samples, RequestStatus, ServiceRequest};
use crate::i18n::I18n;
use crate::ui::components::status_badge;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Element, Length, Theme};

/// Which request family is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Cards,
    Accounts,
    Credits,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Cards, Tab::Accounts, Tab::Credits];

    pub fn i18n_key(self) -> &'static str {
        match self {
            Tab::Cards => "requests-tab-cards",
            Tab::Accounts => "requests-tab-accounts",
            Tab::Credits => "requests-tab-credits",
        }
    }
}

pub struct State {
    tab: Tab,
    cards: Vec<ServiceRequest>,
    accounts: Vec<ServiceRequest>,
    credits: Vec<ServiceRequest>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            tab: Tab::default(),
            cards: samples::card_requests(),
            accounts: samples::account_requests(),
            credits: samples::credit_requests(),
        }
    }
}

impl State {
    fn current(&self) -> &[ServiceRequest] {
        match self.tab {
            Tab::Cards => &self.cards,
            Tab::Accounts => &self.accounts,
            Tab::Credits => &self.credits,
        }
    }

    fn current_mut(&mut self) -> &mut Vec<ServiceRequest> {
        match self.tab {
            Tab::Cards => &mut self.cards,
            Tab::Accounts => &mut self.accounts,
            Tab::Credits => &mut self.credits,
        }
    }

    /// Pending requests across every family; shown on the header bell.
    pub fn pending_count(&self) -> usize {
        self.cards
            .iter()
            .chain(&self.accounts)
            .chain(&self.credits)
            .filter(|r| r.is_pending())
            .count()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
    Approve(String),
    Reject(String),
}

pub enum Event {
    None,
    /// A pending request was decided.
    Resolved { product: String, approved: bool },
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SelectTab(tab) => {
            state.tab = tab;
            Event::None
        }
        Message::Approve(id) => resolve(state, &id, RequestStatus::Approved),
        Message::Reject(id) => resolve(state, &id, RequestStatus::Rejected),
    }
}

fn resolve(state: &mut State, id: &str, decision: RequestStatus) -> Event {
    let request = state
        .current_mut()
        .iter_mut()
        .find(|r| r.id == id && r.is_pending());

    match request {
        Some(request) => {
            request.status = decision;
            Event::Resolved {
                product: request.product.clone(),
                approved: decision == RequestStatus::Approved,
            }
        }
        // Already decided or unknown; nothing to report.
        None => Event::None,
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut tabs = Row::new().spacing(spacing::XS);
    for tab in Tab::ALL {
        let style = if tab == state.tab {
            styles::button::primary
        } else {
            styles::button::secondary
        };
        tabs = tabs.push(
            button(Text::new(i18n.tr(tab.i18n_key())).size(typography::BODY))
                .on_press(Message::SelectTab(tab))
                .padding([spacing::XS, spacing::MD])
                .style(style),
        );
    }

    let mut list = Column::new().spacing(spacing::SM);
    if state.current().is_empty() {
        list = list.push(Text::new(i18n.tr("requests-empty")).size(typography::BODY));
    } else {
        for request in state.current() {
            list = list.push(request_row(request, i18n));
        }
    }

    scrollable(
        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(tabs)
            .push(list),
    )
    .into()
}

fn request_row<'a>(request: &'a ServiceRequest, i18n: &'a I18n) -> Element<'a, Message> {
    let avatar = Container::new(
        Text::new(request.applicant.avatar.clone()).size(typography::BODY_SM),
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
        .push(Text::new(request.applicant.name.clone()).size(typography::BODY))
        .push(
            Text::new(request.product.clone())
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );

    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(avatar)
        .push(Container::new(identity).width(Length::FillPortion(3)))
        .push(
            Text::new(request.request_date.format("%Y-%m-%d").to_string())
                .size(typography::BODY_SM)
                .width(Length::FillPortion(1)),
        )
        .push(status_badge::request(request.status, i18n));

    if request.is_pending() {
        row = row
            .push(
                button(icons::sized(
                    icons::tinted(icons::checkmark(), palette::SUCCESS_500),
                    sizing::ICON_SM,
                ))
                .on_press(Message::Approve(request.id.clone()))
                .padding(spacing::XS)
                .style(styles::button::subtle),
            )
            .push(
                button(icons::sized(
                    icons::tinted(icons::cross(), palette::ERROR_500),
                    sizing::ICON_SM,
                ))
                .on_press(Message::Reject(request.id.clone()))
                .padding(spacing::XS)
                .style(styles::button::subtle),
            );
    }

    Container::new(row)
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approve_marks_request_and_reports() {
        let mut state = State::default();
        let pending_before = state.pending_count();

        let event = update(&mut state, Message::Approve("1".into()));
        match event {
            Event::Resolved { approved, .. } => assert!(approved),
            Event::None => panic!("expected a resolution"),
        }
        assert_eq!(state.pending_count(), pending_before - 1);
    }

    #[test]
    fn resolving_twice_is_a_no_op() {
        let mut state = State::default();
        let _ = update(&mut state, Message::Reject("1".into()));
        let event = update(&mut state, Message::Approve("1".into()));
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn tabs_address_separate_queues() {
        let mut state = State::default();
        let _ = update(&mut state, Message::SelectTab(Tab::Credits));
        assert_eq!(state.tab, Tab::Credits);
        // Ids overlap across families; only the active tab's queue is touched.
        let _ = update(&mut state, Message::Approve("1".into()));
        assert!(state.cards.iter().any(|r| r.id == "1" && r.is_pending()));
    }

    #[test]
    fn pending_count_spans_all_tabs() {
        let state = State::default();
        assert_eq!(state.pending_count(), 6);
    }
}
