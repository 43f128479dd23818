// SPDX-License-Identifier: MPL-2.0
//! Metric tile for the dashboard overview row.

use crate::domain::StatSummary;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Renders a single stat tile: icon, localized title, value and delta.
pub fn view<'a, Message: 'a>(summary: &'a StatSummary, i18n: &'a I18n) -> Element<'a, Message> {
    let icon = icons::sized(
        icons::tinted(icons::by_name(&summary.icon), palette::PRIMARY_500),
        sizing::ICON_LG,
    );

    let title = Text::new(i18n.tr(&summary.title_key))
        .size(typography::BODY_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        });

    let value = Text::new(summary.value.clone()).size(typography::TITLE_MD);

    let delta_color = if summary.delta_value.starts_with('-') {
        palette::ERROR_500
    } else {
        palette::SUCCESS_500
    };
    let delta = Text::new(format!(
        "{} {}",
        summary.delta_value,
        i18n.tr(&summary.delta_key)
    ))
    .size(typography::CAPTION)
    .style(move |_theme: &Theme| text::Style {
        color: Some(delta_color),
    });

    let body = Column::new()
        .spacing(spacing::XXS)
        .push(title)
        .push(value)
        .push(delta);

    let content = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(body);

    Container::new(content)
        .width(Length::FillPortion(1))
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}
