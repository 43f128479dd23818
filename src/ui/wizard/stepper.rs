// SPDX-License-Identifier: MPL-2.0
//! Step indicator row shown at the top of every wizard.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Element, Length, Theme};

pub const STEP_KEYS: [&str; 3] = ["wizard-step-basic", "wizard-step-features", "wizard-step-fees"];

/// Renders the three step dots with labels; `current` is zero-based.
pub fn view<'a, Message: 'a>(current: usize, i18n: &'a I18n) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center);

    for (index, key) in STEP_KEYS.iter().enumerate() {
        let done_or_active = index <= current;
        let dot_color = if done_or_active {
            palette::PRIMARY_500
        } else {
            palette::GRAY_200
        };
        let text_color = if done_or_active {
            palette::WHITE
        } else {
            palette::GRAY_700
        };

        let dot = Container::new(
            Text::new((index + 1).to_string()).size(typography::BODY_SM),
        )
        .width(Length::Fixed(sizing::STEP_DOT))
        .height(Length::Fixed(sizing::STEP_DOT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(dot_color)),
            border: Border::default().rounded(radius::FULL),
            text_color: Some(text_color),
            ..Default::default()
        });

        let label = Text::new(i18n.tr(key))
            .size(typography::CAPTION)
            .style(move |theme: &Theme| text::Style {
                color: Some(if index == current {
                    theme.palette().text
                } else {
                    theme.extended_palette().background.weak.text
                }),
            });

        row = row.push(
            Column::new()
                .spacing(spacing::XXS)
                .align_x(alignment::Horizontal::Center)
                .push(dot)
                .push(label),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_for_every_step() {
        let i18n = I18n::default();
        for step in 0..STEP_KEYS.len() {
            let _element: Element<'_, ()> = view(step, &i18n);
        }
    }
}
