// SPDX-License-Identifier: MPL-2.0
//! Sidebar navigation for app-level routing.
//!
//! A fixed-width vertical rail listing every screen. The active entry is
//! highlighted; selection is propagated to the parent as an event.

use crate::app::screen::Screen;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
}

/// Messages emitted by the sidebar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Screen),
}

/// Process a sidebar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(screen) => Event::Navigate(screen),
    }
}

/// Render the sidebar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Container::new(
        Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_SM),
    )
    .padding(spacing::MD);

    let mut entries = Column::new().spacing(spacing::XXS).padding(spacing::XS);
    for screen in Screen::ALL {
        entries = entries.push(nav_entry(&ctx, screen));
    }

    Container::new(Column::new().push(brand).push(entries))
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::chrome)
        .into()
}

fn nav_entry<'a>(ctx: &ViewContext<'a>, screen: Screen) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icons::sized(screen_icon(screen), sizing::ICON_SM))
        .push(Text::new(ctx.i18n.tr(screen.i18n_key())).size(typography::BODY));

    let style = if screen == ctx.active {
        styles::button::nav_selected
    } else {
        styles::button::nav_unselected
    };

    button(row)
        .on_press(Message::Navigate(screen))
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(style)
        .into()
}

fn screen_icon(screen: Screen) -> Svg<'static> {
    match screen {
        Screen::Dashboard => icons::dashboard(),
        Screen::Users => icons::users(),
        Screen::Cards => icons::credit_card(),
        Screen::Accounts => icons::landmark(),
        Screen::Credits => icons::wallet(),
        Screen::Requests => icons::clipboard(),
        Screen::Broadcast => icons::megaphone(),
        Screen::Settings => icons::cog(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active: Screen::Dashboard,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navigate_message_emits_navigate_event() {
        let event = update(Message::Navigate(Screen::Requests));
        assert!(matches!(event, Event::Navigate(Screen::Requests)));
    }

    #[test]
    fn every_screen_has_an_icon() {
        for screen in Screen::ALL {
            let _ = screen_icon(screen);
        }
    }
}
