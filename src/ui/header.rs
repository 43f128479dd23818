// SPDX-License-Identifier: MPL-2.0
//! Top header bar: current page title, notification bell and admin chip.

use crate::app::screen::Screen;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
    /// Count of pending service requests, shown next to the bell.
    pub pending_requests: usize,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    OpenRequests,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Screen),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::OpenRequests => Event::Navigate(Screen::Requests),
    }
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr(ctx.active.i18n_key())).size(typography::TITLE_MD);

    let bell_label = if ctx.pending_requests > 0 {
        format!("{}", ctx.pending_requests)
    } else {
        String::new()
    };
    let bell = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::bell(), sizing::ICON_SM))
            .push(Text::new(bell_label).size(typography::CAPTION)),
    )
    .on_press(Message::OpenRequests)
    .padding(spacing::XS)
    .style(styles::button::subtle);

    let admin_chip = Column::new()
        .push(Text::new(ctx.i18n.tr("header-admin")).size(typography::BODY_SM))
        .push(
            Text::new(ctx.i18n.tr("header-admin-role")).size(typography::CAPTION),
        );

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(Container::new(title).width(Length::Fill).align_x(Horizontal::Left))
        .push(bell)
        .push(admin_chip);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .style(styles::container::chrome)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active: Screen::Users,
            pending_requests: 3,
        };
        let _element = view(ctx);
    }

    #[test]
    fn bell_routes_to_requests() {
        let event = update(Message::OpenRequests);
        assert!(matches!(event, Event::Navigate(Screen::Requests)));
    }
}
