// SPDX-License-Identifier: MPL-2.0
//! Pill badge for user and request statuses.

use crate::domain::{RequestStatus, UserStatus};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::{Color, Element};

fn badge<'a, Message: 'a>(label: String, accent: Color) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::badge::pill(accent))
        .into()
}

/// Badge for a user account status.
pub fn user<'a, Message: 'a>(status: UserStatus, i18n: &I18n) -> Element<'a, Message> {
    let accent = match status {
        UserStatus::Active => palette::SUCCESS_500,
        UserStatus::Inactive => palette::GRAY_400,
        UserStatus::Suspended => palette::ERROR_500,
    };
    badge(i18n.tr(status.i18n_key()), accent)
}

/// Badge for a service request status.
pub fn request<'a, Message: 'a>(status: RequestStatus, i18n: &I18n) -> Element<'a, Message> {
    let accent = match status {
        RequestStatus::Pending => palette::WARNING_500,
        RequestStatus::Approved => palette::SUCCESS_500,
        RequestStatus::Rejected => palette::ERROR_500,
    };
    badge(i18n.tr(status.i18n_key()), accent)
}
