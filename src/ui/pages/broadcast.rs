// SPDX-License-Identifier: MPL-2.0
//! Broadcast composer: push an announcement toast to the notification
//! queue with a chosen severity.
//!
//! The free-form title and body are carried as Fluent arguments so the
//! toast renderer stays key-based.

use crate::diagnostics::WarningType;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Kind, Notification};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Delivery channel for an announcement. Only the in-app channel is
/// actually delivered; the others are acknowledged and logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    #[default]
    InApp,
    Email,
    Sms,
}

impl Channel {
    pub fn i18n_key(self) -> &'static str {
        match self {
            Channel::InApp => "broadcast-channel-inapp",
            Channel::Email => "broadcast-channel-email",
            Channel::Sms => "broadcast-channel-sms",
        }
    }

    /// Stable label used in the diagnostics log.
    pub fn name(self) -> &'static str {
        match self {
            Channel::InApp => "in-app",
            Channel::Email => "email",
            Channel::Sms => "sms",
        }
    }
}

#[derive(Default)]
pub struct State {
    title: String,
    body: String,
    kind: Kind,
    channel: Channel,
}

#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    BodyChanged(String),
    KindSelected(Kind),
    ChannelSelected(Channel),
    Send,
}

pub enum Event {
    None,
    /// Validation feedback, not an actual send.
    Notify(Notification),
    /// Composed announcement, ready for the queue.
    Broadcast { notification: Notification, channel: Channel },
}

const KINDS: [(Kind, &str); 4] = [
    (Kind::Default, "broadcast-kind-info"),
    (Kind::Success, "broadcast-kind-success"),
    (Kind::Warning, "broadcast-kind-warning"),
    (Kind::Error, "broadcast-kind-error"),
];

const CHANNELS: [Channel; 3] = [Channel::InApp, Channel::Email, Channel::Sms];

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TitleChanged(title) => {
            state.title = title;
            Event::None
        }
        Message::BodyChanged(body) => {
            state.body = body;
            Event::None
        }
        Message::KindSelected(kind) => {
            state.kind = kind;
            Event::None
        }
        Message::ChannelSelected(channel) => {
            state.channel = channel;
            Event::None
        }
        Message::Send => {
            if state.title.trim().is_empty() {
                return Event::Notify(
                    Notification::warning("broadcast-title-required")
                        .with_warning_type(WarningType::Validation),
                );
            }

            let mut notification = Notification::new(state.kind)
                .title("toast-broadcast-title")
                .with_arg("title", state.title.trim());
            if !state.body.trim().is_empty() {
                notification = notification
                    .description("toast-broadcast-body")
                    .with_arg("message", state.body.trim());
            }

            state.title.clear();
            state.body.clear();
            Event::Broadcast {
                notification,
                channel: state.channel,
            }
        }
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title_input = text_input(&i18n.tr("broadcast-title-placeholder"), &state.title)
        .on_input(Message::TitleChanged)
        .padding(spacing::XS);

    let body_input = text_input(&i18n.tr("broadcast-body-placeholder"), &state.body)
        .on_input(Message::BodyChanged)
        .padding(spacing::XS);

    let mut kind_row = Row::new().spacing(spacing::XS);
    for (kind, key) in KINDS {
        let style = if kind == state.kind {
            styles::button::primary
        } else {
            styles::button::secondary
        };
        kind_row = kind_row.push(
            button(Text::new(i18n.tr(key)).size(typography::BODY_SM))
                .on_press(Message::KindSelected(kind))
                .padding([spacing::XXS, spacing::SM])
                .style(style),
        );
    }

    let mut channel_row = Row::new().spacing(spacing::XS);
    for channel in CHANNELS {
        let style = if channel == state.channel {
            styles::button::primary
        } else {
            styles::button::secondary
        };
        channel_row = channel_row.push(
            button(Text::new(i18n.tr(channel.i18n_key())).size(typography::BODY_SM))
                .on_press(Message::ChannelSelected(channel))
                .padding([spacing::XXS, spacing::SM])
                .style(style),
        );
    }

    let send = button(Text::new(i18n.tr("broadcast-send")).size(typography::BODY))
        .on_press(Message::Send)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let form = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("broadcast-heading")).size(typography::TITLE_SM))
            .push(title_input)
            .push(body_input)
            .push(kind_row)
            .push(channel_row)
            .push(Container::new(send).align_x(alignment::Horizontal::Right).width(Length::Fill)),
    )
    .padding(spacing::LG)
    .style(styles::container::card);

    Container::new(form).padding(spacing::LG).width(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_composes_notification_and_clears_form() {
        let mut state = State::default();
        let _ = update(&mut state, Message::TitleChanged("Maintenance".into()));
        let _ = update(&mut state, Message::BodyChanged("Sunday 2am".into()));
        let _ = update(&mut state, Message::KindSelected(Kind::Warning));

        let event = update(&mut state, Message::Send);
        match event {
            Event::Broadcast { notification, channel } => {
                assert_eq!(notification.kind(), Kind::Warning);
                assert_eq!(channel, Channel::InApp);
                assert!(notification
                    .message_args()
                    .iter()
                    .any(|(k, v)| k == "title" && v == "Maintenance"));
            }
            _ => panic!("expected a broadcast"),
        }
        assert!(state.title.is_empty());
        assert!(state.body.is_empty());
    }

    #[test]
    fn empty_title_yields_warning() {
        let mut state = State::default();
        let event = update(&mut state, Message::Send);
        match event {
            Event::Notify(notification) => {
                assert_eq!(notification.kind(), Kind::Warning);
                assert_eq!(
                    notification.title_key(),
                    Some("broadcast-title-required")
                );
                assert_eq!(notification.warning_type(), Some(WarningType::Validation));
            }
            _ => panic!("expected a warning"),
        }
    }

    #[test]
    fn selected_channel_is_reported() {
        let mut state = State::default();
        let _ = update(&mut state, Message::TitleChanged("Offer".into()));
        let _ = update(&mut state, Message::ChannelSelected(Channel::Email));

        match update(&mut state, Message::Send) {
            Event::Broadcast { channel, .. } => assert_eq!(channel, Channel::Email),
            _ => panic!("expected a broadcast"),
        }
    }
}
