// SPDX-License-Identifier: MPL-2.0
//! Modal confirmation overlay for destructive actions.
//!
//! Rendered above the page with a dimmed backdrop. The caller supplies the
//! confirm/cancel messages; the dialog itself holds no state.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub struct ConfirmDialog<'a, Message> {
    title_key: &'a str,
    body_key: &'a str,
    body_args: Vec<(&'a str, &'a str)>,
    on_confirm: Message,
    on_cancel: Message,
}

impl<'a, Message: Clone + 'a> ConfirmDialog<'a, Message> {
    pub fn new(
        title_key: &'a str,
        body_key: &'a str,
        on_confirm: Message,
        on_cancel: Message,
    ) -> Self {
        Self {
            title_key,
            body_key,
            body_args: Vec::new(),
            on_confirm,
            on_cancel,
        }
    }

    /// Adds an argument interpolated into the body text, e.g. the name of
    /// the record about to be deleted.
    #[must_use]
    pub fn with_arg(mut self, key: &'a str, value: &'a str) -> Self {
        self.body_args.push((key, value));
        self
    }

    pub fn view(self, i18n: &'a I18n) -> Element<'a, Message> {
        let body_text = if self.body_args.is_empty() {
            i18n.tr(self.body_key)
        } else {
            i18n.tr_with_args(self.body_key, &self.body_args)
        };

        let buttons = Row::new()
            .spacing(spacing::SM)
            .push(
                button(Text::new(i18n.tr("dialog-cancel")).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::secondary)
                    .on_press(self.on_cancel.clone()),
            )
            .push(
                button(Text::new(i18n.tr("dialog-confirm")).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::danger)
                    .on_press(self.on_confirm),
            );

        let card = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .push(Text::new(i18n.tr(self.title_key)).size(typography::TITLE_SM))
                .push(Text::new(body_text).size(typography::BODY))
                .push(Container::new(buttons).align_x(alignment::Horizontal::Right)),
        )
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog);

        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::modal_backdrop)
            .into()
    }
}
