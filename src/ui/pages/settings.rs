// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language, theme, backend endpoint and toast duration,
//! plus a read-only pane showing the recent diagnostics activity.
//!
//! Edits are buffered locally and only applied when the admin saves; the
//! parent receives the assembled [`Config`] and handles persistence.

use crate::config::Config;
use crate::diagnostics::{
    DiagnosticEvent, DiagnosticEventKind, DiagnosticsCollector, UserAction, WarningType,
};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::Notification;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, pick_list, scrollable, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Most recent diagnostic events shown in the activity pane.
const ACTIVITY_ROWS: usize = 8;

pub struct State {
    language: Option<String>,
    languages: Vec<String>,
    theme_mode: ThemeMode,
    api_url: String,
    timeout_secs: String,
    duration_ms: String,
}

impl State {
    /// Seeds the edit buffers from the active configuration.
    pub fn from_config(config: &Config, i18n: &I18n) -> Self {
        Self {
            language: config.general.language.clone(),
            languages: i18n
                .available_locales
                .iter()
                .map(ToString::to_string)
                .collect(),
            theme_mode: config.general.theme_mode,
            api_url: config.api_base_url(),
            timeout_secs: config
                .api
                .timeout_secs
                .map(|t| t.to_string())
                .unwrap_or_default(),
            duration_ms: config
                .notifications
                .default_duration_ms
                .map(|d| d.to_string())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(String),
    ThemeSelected(ThemeMode),
    ApiUrlChanged(String),
    TimeoutChanged(String),
    DurationChanged(String),
    Save,
}

pub enum Event {
    None,
    /// Apply the language immediately, ahead of a save.
    LanguageChanged(String),
    /// Apply the theme immediately, ahead of a save.
    ThemeChanged(ThemeMode),
    /// Persist and apply the assembled configuration.
    Apply(Config),
    Notify(Notification),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::LanguageSelected(language) => {
            state.language = Some(language.clone());
            Event::LanguageChanged(language)
        }
        Message::ThemeSelected(mode) => {
            state.theme_mode = mode;
            Event::ThemeChanged(mode)
        }
        Message::ApiUrlChanged(url) => {
            state.api_url = url;
            Event::None
        }
        Message::TimeoutChanged(value) => {
            state.timeout_secs = value;
            Event::None
        }
        Message::DurationChanged(value) => {
            state.duration_ms = value;
            Event::None
        }
        Message::Save => assemble(state),
    }
}

fn assemble(state: &State) -> Event {
    if state.api_url.trim().is_empty() {
        return Event::Notify(validation_warning("settings-api-url-required"));
    }

    // Empty numeric buffers fall back to the built-in defaults.
    let timeout_secs = match parse_positive(&state.timeout_secs) {
        Ok(value) => value,
        Err(()) => return Event::Notify(validation_warning("settings-timeout-invalid")),
    };
    let duration_ms = match parse_positive(&state.duration_ms) {
        Ok(value) => value,
        Err(()) => return Event::Notify(validation_warning("settings-duration-invalid")),
    };

    let mut config = Config::default();
    config.general.language = state.language.clone();
    config.general.theme_mode = state.theme_mode;
    config.api.base_url = Some(state.api_url.trim().to_string());
    config.api.timeout_secs = timeout_secs;
    config.notifications.default_duration_ms = duration_ms;
    Event::Apply(config)
}

fn validation_warning(key: &'static str) -> Notification {
    Notification::warning(key).with_warning_type(WarningType::Validation)
}

fn parse_positive(value: &str) -> Result<Option<u64>, ()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u64>() {
        Ok(v) if v > 0 => Ok(Some(v)),
        _ => Err(()),
    }
}

pub fn view<'a>(
    state: &'a State,
    i18n: &'a I18n,
    diagnostics: &'a DiagnosticsCollector,
) -> Element<'a, Message> {
    let language_row = labeled(
        i18n.tr("settings-language"),
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(icons::globe(), sizing::ICON_SM))
            .push(pick_list(
                state.languages.clone(),
                state.language.clone(),
                Message::LanguageSelected,
            ))
            .into(),
    );

    let theme_row = labeled(
        i18n.tr("settings-theme"),
        pick_list(
            theme_labels(i18n),
            Some(i18n.tr(state.theme_mode.i18n_key())),
            move |label| Message::ThemeSelected(theme_from_label(&label, i18n)),
        )
        .into(),
    );

    let api_row = labeled(
        i18n.tr("settings-api-url"),
        text_input("http://localhost:5000", &state.api_url)
            .on_input(Message::ApiUrlChanged)
            .padding(spacing::XS)
            .into(),
    );

    let timeout_row = labeled(
        i18n.tr("settings-timeout"),
        text_input("10", &state.timeout_secs)
            .on_input(Message::TimeoutChanged)
            .padding(spacing::XS)
            .into(),
    );

    let duration_row = labeled(
        i18n.tr("settings-toast-duration"),
        text_input("5000", &state.duration_ms)
            .on_input(Message::DurationChanged)
            .padding(spacing::XS)
            .into(),
    );

    let save = button(Text::new(i18n.tr("settings-save")).size(typography::BODY))
        .on_press(Message::Save)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let form = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("settings-heading")).size(typography::TITLE_SM))
            .push(language_row)
            .push(theme_row)
            .push(api_row)
            .push(timeout_row)
            .push(duration_row)
            .push(
                Container::new(save)
                    .align_x(alignment::Horizontal::Right)
                    .width(Length::Fill),
            ),
    )
    .padding(spacing::LG)
    .style(styles::container::card);

    scrollable(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(form)
            .push(activity_panel(diagnostics, i18n)),
    )
    .into()
}

/// Localized theme picker labels, in [`ThemeMode::ALL`] order.
fn theme_labels(i18n: &I18n) -> Vec<String> {
    ThemeMode::ALL
        .iter()
        .map(|mode| i18n.tr(mode.i18n_key()))
        .collect()
}

/// Maps a picker label back to its mode by re-translating the candidates.
fn theme_from_label(label: &str, i18n: &I18n) -> ThemeMode {
    ThemeMode::ALL
        .into_iter()
        .find(|mode| i18n.tr(mode.i18n_key()) == label)
        .unwrap_or_default()
}

/// Read-only card listing the tail of the diagnostics buffer.
fn activity_panel<'a>(
    diagnostics: &'a DiagnosticsCollector,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let mut rows = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("settings-activity")).size(typography::TITLE_SM));

    if diagnostics.is_empty() {
        rows = rows.push(Text::new(i18n.tr("settings-activity-empty")).size(typography::BODY_SM));
    } else {
        let events: Vec<&DiagnosticEvent> = diagnostics.events().collect();
        for event in events.into_iter().rev().take(ACTIVITY_ROWS) {
            rows = rows.push(Text::new(activity_line(event, i18n)).size(typography::BODY_SM));
        }
    }

    Container::new(rows)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn activity_line(event: &DiagnosticEvent, i18n: &I18n) -> String {
    match &event.kind {
        DiagnosticEventKind::Warning { event } => {
            format!("{}: {}", i18n.tr("activity-warning"), i18n.tr(&event.message))
        }
        DiagnosticEventKind::Error { event } => {
            format!("{}: {}", i18n.tr("activity-error"), i18n.tr(&event.message))
        }
        DiagnosticEventKind::UserAction { action } => describe_action(action, i18n),
    }
}

fn describe_action(action: &UserAction, i18n: &I18n) -> String {
    match action {
        UserAction::Navigate { screen } => {
            i18n.tr_with_args("activity-navigate", &[("screen", screen.as_str())])
        }
        UserAction::SubmitCatalogRecord { entity, .. } => {
            i18n.tr_with_args("activity-record-saved", &[("entity", entity.as_str())])
        }
        UserAction::DeleteCatalogRecord { entity } => {
            i18n.tr_with_args("activity-record-deleted", &[("entity", entity.as_str())])
        }
        UserAction::ResolveRequest { approved } => i18n.tr(if *approved {
            "activity-request-approved"
        } else {
            "activity-request-rejected"
        }),
        UserAction::SendBroadcast { channel } => {
            i18n.tr_with_args("activity-broadcast", &[("channel", channel.as_str())])
        }
    }
}

fn labeled<'a>(label: String, control: Element<'a, Message>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(label).size(typography::BODY))
                .width(Length::FillPortion(1)),
        )
        .push(Container::new(control).width(Length::FillPortion(2)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::from_config(&Config::default(), &I18n::default())
    }

    #[test]
    fn save_assembles_config_from_buffers() {
        let mut state = state();
        let _ = update(&mut state, Message::ApiUrlChanged("http://10.0.0.2:5000".into()));
        let _ = update(&mut state, Message::DurationChanged("2500".into()));

        match update(&mut state, Message::Save) {
            Event::Apply(config) => {
                assert_eq!(config.api.base_url.as_deref(), Some("http://10.0.0.2:5000"));
                assert_eq!(config.notifications.default_duration_ms, Some(2500));
            }
            _ => panic!("expected an apply event"),
        }
    }

    #[test]
    fn cleared_numeric_fields_fall_back_to_defaults() {
        let mut state = state();
        let _ = update(&mut state, Message::TimeoutChanged(String::new()));
        let _ = update(&mut state, Message::DurationChanged(String::new()));

        match update(&mut state, Message::Save) {
            Event::Apply(config) => {
                assert_eq!(config.api.timeout_secs, None);
                assert_eq!(config.notifications.default_duration_ms, None);
            }
            _ => panic!("expected an apply event"),
        }
    }

    #[test]
    fn invalid_duration_is_rejected_as_validation_warning() {
        let mut state = state();
        let _ = update(&mut state, Message::DurationChanged("0".into()));
        match update(&mut state, Message::Save) {
            Event::Notify(notification) => {
                assert_eq!(notification.warning_type(), Some(WarningType::Validation));
            }
            _ => panic!("expected a warning"),
        }

        let _ = update(&mut state, Message::DurationChanged("soon".into()));
        assert!(matches!(
            update(&mut state, Message::Save),
            Event::Notify(_)
        ));
    }

    #[test]
    fn theme_picker_labels_round_trip() {
        let i18n = I18n::default();
        for mode in ThemeMode::ALL {
            let label = i18n.tr(mode.i18n_key());
            assert_eq!(theme_from_label(&label, &i18n), mode);
        }
        // Unknown labels fall back to the default mode.
        assert_eq!(theme_from_label("nonsense", &i18n), ThemeMode::System);
    }

    #[test]
    fn activity_panel_renders_collected_events() {
        use crate::diagnostics::{ErrorEvent, ErrorType};

        let mut diagnostics = DiagnosticsCollector::default();
        diagnostics
            .handle()
            .log_error(ErrorEvent::new(ErrorType::Api, "error-api-network"));
        diagnostics.handle().log_action(UserAction::Navigate {
            screen: "cards".into(),
        });
        diagnostics.drain();

        let state = state();
        let i18n = I18n::default();
        let _element = view(&state, &i18n, &diagnostics);
    }

    #[test]
    fn language_change_applies_immediately() {
        let mut state = state();
        let event = update(&mut state, Message::LanguageSelected("fr-FR".into()));
        assert!(matches!(event, Event::LanguageChanged(_)));
    }
}
