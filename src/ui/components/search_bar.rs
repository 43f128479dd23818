// SPDX-License-Identifier: MPL-2.0
//! Text input with a leading magnifier icon.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{text_input, Container, Row};
use iced::{alignment, Element, Length};

/// Renders a search field bound to `value`.
///
/// `on_input` receives the full updated text on every keystroke; filtering
/// happens in the page state, not here.
pub fn view<'a, Message: Clone + 'a>(
    placeholder: &str,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let input = text_input(placeholder, value)
        .on_input(on_input)
        .padding(spacing::XS)
        .width(Length::Fill);

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::search(), sizing::ICON_SM))
        .push(input);

    Container::new(row)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
