// SPDX-License-Identifier: MPL-2.0
//! Card product form.
//!
//! Steps: basic information (with artwork picker), features and benefits,
//! fees and requirements. Artwork is embedded as a base64 data URL, the
//! format the backend stores.

use super::{parse_f64_or_zero, stepper, Mode};
use crate::api::Client;
use crate::diagnostics::ErrorType;
use crate::domain::{Benefit, CardFees, CardRequirements, CardType};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::Notification;
use crate::ui::styles;
use base64::Engine as _;
use iced::widget::{button, image, scrollable, text, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Task, Theme};

pub struct State {
    mode: Mode,
    step: usize,
    name: String,
    tag: String,
    description: String,
    why: String,
    image: String,
    features: Vec<String>,
    benefits: Vec<(String, String)>,
    annual: String,
    withdrawal: String,
    replacement: String,
    min_income: String,
    /// Comma-separated employment statuses.
    employment: String,
    error: Option<&'static str>,
    saving: bool,
}

impl State {
    pub fn new() -> Self {
        Self {
            mode: Mode::Create,
            step: 0,
            name: String::new(),
            tag: String::new(),
            description: String::new(),
            why: String::new(),
            image: String::new(),
            features: vec![String::new()],
            benefits: Vec::new(),
            annual: String::new(),
            withdrawal: String::new(),
            replacement: String::new(),
            min_income: String::new(),
            employment: String::new(),
            error: None,
            saving: false,
        }
    }

    /// Seeds the buffers from an existing record.
    pub fn edit(card: CardType) -> Self {
        Self {
            mode: Mode::Edit(card.id),
            name: card.name,
            tag: card.tag,
            description: card.description,
            why: card.why,
            image: card.image,
            features: if card.features.is_empty() {
                vec![String::new()]
            } else {
                card.features
            },
            benefits: card
                .benefits
                .into_iter()
                .map(|b| (b.text, b.icon))
                .collect(),
            annual: format_fee(card.fees.annual),
            withdrawal: format_fee(card.fees.withdrawal),
            replacement: format_fee(card.fees.replacement),
            min_income: format_fee(card.requirements.min_income),
            employment: card.requirements.employment_status.join(", "),
            ..Self::new()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.mode.is_edit()
    }
}

fn format_fee(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    TagChanged(String),
    DescriptionChanged(String),
    WhyChanged(String),
    PickImage,
    ImagePicked(Option<String>),
    FeatureChanged(usize, String),
    AddFeature,
    RemoveFeature(usize),
    BenefitTextChanged(usize, String),
    BenefitIconChanged(usize, String),
    AddBenefit,
    RemoveBenefit(usize),
    AnnualChanged(String),
    WithdrawalChanged(String),
    ReplacementChanged(String),
    MinIncomeChanged(String),
    EmploymentChanged(String),
    Next,
    Back,
    Cancel,
    Submit,
    Saved(Result<(), String>),
}

pub enum Event {
    None,
    Cancelled,
    /// Record persisted server-side; `created` distinguishes the toast.
    Saved { created: bool },
    Notify(Notification),
}

pub fn update(state: &mut State, message: Message, client: &Client) -> (Task<Message>, Event) {
    match message {
        Message::NameChanged(value) => state.name = value,
        Message::TagChanged(value) => state.tag = value,
        Message::DescriptionChanged(value) => state.description = value,
        Message::WhyChanged(value) => state.why = value,
        Message::PickImage => {
            return (Task::perform(pick_image(), Message::ImagePicked), Event::None);
        }
        Message::ImagePicked(Some(data_url)) => state.image = data_url,
        Message::ImagePicked(None) => {}
        Message::FeatureChanged(index, value) => {
            if let Some(feature) = state.features.get_mut(index) {
                *feature = value;
            }
        }
        Message::AddFeature => state.features.push(String::new()),
        Message::RemoveFeature(index) => {
            if index < state.features.len() {
                state.features.remove(index);
            }
        }
        Message::BenefitTextChanged(index, value) => {
            if let Some(benefit) = state.benefits.get_mut(index) {
                benefit.0 = value;
            }
        }
        Message::BenefitIconChanged(index, value) => {
            if let Some(benefit) = state.benefits.get_mut(index) {
                benefit.1 = value;
            }
        }
        Message::AddBenefit => state.benefits.push((String::new(), String::new())),
        Message::RemoveBenefit(index) => {
            if index < state.benefits.len() {
                state.benefits.remove(index);
            }
        }
        Message::AnnualChanged(value) => state.annual = value,
        Message::WithdrawalChanged(value) => state.withdrawal = value,
        Message::ReplacementChanged(value) => state.replacement = value,
        Message::MinIncomeChanged(value) => state.min_income = value,
        Message::EmploymentChanged(value) => state.employment = value,
        Message::Next => match validate_step(state) {
            Some(key) => state.error = Some(key),
            None => {
                state.error = None;
                state.step = (state.step + 1).min(stepper::STEP_KEYS.len() - 1);
            }
        },
        Message::Back => {
            state.error = None;
            state.step = state.step.saturating_sub(1);
        }
        Message::Cancel => return (Task::none(), Event::Cancelled),
        Message::Submit => return submit(state, client),
        Message::Saved(Ok(())) => {
            state.saving = false;
            let created = !state.is_edit();
            return (Task::none(), Event::Saved { created });
        }
        Message::Saved(Err(key)) => {
            state.saving = false;
            return (
                Task::none(),
                Event::Notify(Notification::error(key).with_error_type(ErrorType::Api)),
            );
        }
    }
    (Task::none(), Event::None)
}

fn validate_step(state: &State) -> Option<&'static str> {
    match state.step {
        0 => {
            if state.name.trim().is_empty() {
                Some("validation-name-required")
            } else if state.description.trim().is_empty() {
                Some("validation-description-required")
            } else {
                None
            }
        }
        1 => {
            if state.features.iter().all(|f| f.trim().is_empty()) {
                Some("validation-feature-required")
            } else {
                None
            }
        }
        _ => None,
    }
}

fn submit(state: &mut State, client: &Client) -> (Task<Message>, Event) {
    let parsed = (|| -> Result<(CardFees, f64), ()> {
        let fees = CardFees {
            annual: parse_f64_or_zero(&state.annual)?,
            withdrawal: parse_f64_or_zero(&state.withdrawal)?,
            replacement: parse_f64_or_zero(&state.replacement)?,
        };
        let min_income = parse_f64_or_zero(&state.min_income)?;
        Ok((fees, min_income))
    })();

    let (fees, min_income) = match parsed {
        Ok(values) => values,
        Err(()) => {
            state.error = Some("validation-number-invalid");
            return (Task::none(), Event::None);
        }
    };
    state.error = None;

    let card = CardType {
        id: match &state.mode {
            Mode::Edit(id) => id.clone(),
            Mode::Create => String::new(),
        },
        name: state.name.trim().to_string(),
        tag: state.tag.trim().to_string(),
        description: state.description.trim().to_string(),
        why: state.why.trim().to_string(),
        image: state.image.clone(),
        features: state
            .features
            .iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect(),
        benefits: state
            .benefits
            .iter()
            .filter(|(text, _)| !text.trim().is_empty())
            .map(|(text, icon)| Benefit::new(text.trim(), icon.trim()))
            .collect(),
        fees,
        requirements: CardRequirements {
            min_income,
            employment_status: state
                .employment
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        },
    };

    state.saving = true;
    let client = client.clone();
    let mode = state.mode.clone();
    let task = Task::perform(
        async move {
            let result = match &mode {
                Mode::Create => client.create_card_type(&card).await,
                Mode::Edit(id) => client.update_card_type(id, &card).await,
            };
            result.map_err(|e| e.i18n_key().to_string())
        },
        Message::Saved,
    );
    (task, Event::None)
}

async fn pick_image() -> Option<String> {
    let file = rfd::AsyncFileDialog::new()
        .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
        .pick_file()
        .await?;
    let mime = match file.path().extension().and_then(|e| e.to_str()) {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "image/png",
    };
    let data = file.read().await;
    let encoded = base64::engine::general_purpose::STANDARD.encode(data);
    Some(format!("data:{mime};base64,{encoded}"))
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title_key = if state.is_edit() {
        "cards-form-edit-title"
    } else {
        "cards-form-new-title"
    };

    let step_content: Element<'a, Message> = match state.step {
        0 => basic_step(state, i18n),
        1 => features_step(state, i18n),
        _ => fees_step(state, i18n),
    };

    let mut column = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(Text::new(i18n.tr(title_key)).size(typography::TITLE_SM))
        .push(stepper::view(state.step, i18n))
        .push(step_content);

    if let Some(key) = state.error {
        column = column.push(
            Text::new(i18n.tr(key))
                .size(typography::BODY_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    column = column.push(nav_row(state, i18n));

    scrollable(
        Container::new(column)
            .width(Length::Fill)
            .style(styles::container::card)
            .padding(spacing::MD),
    )
    .into()
}

/// Thumbnail of the picked artwork, decoded from the data URL.
fn artwork_preview(state: &State) -> Option<Element<'_, Message>> {
    let (_, payload) = state.image.split_once(";base64,")?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .ok()?;
    Some(
        image(image::Handle::from_bytes(bytes))
            .width(sizing::CARD_THUMB_WIDTH * 2.0)
            .into(),
    )
}

fn basic_step<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let image_label = if state.image.is_empty() {
        i18n.tr("cards-form-pick-image")
    } else {
        i18n.tr("cards-form-image-selected")
    };

    Column::new()
        .spacing(spacing::SM)
        .push(
            text_input(&i18n.tr("form-name-placeholder"), &state.name)
                .on_input(Message::NameChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("cards-form-tag-placeholder"), &state.tag)
                .on_input(Message::TagChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("form-description-placeholder"), &state.description)
                .on_input(Message::DescriptionChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("cards-form-why-placeholder"), &state.why)
                .on_input(Message::WhyChanged)
                .padding(spacing::XS),
        )
        .push(
            button(
                Row::new()
                    .spacing(spacing::XXS)
                    .align_y(alignment::Vertical::Center)
                    .push(icons::sized(icons::image(), sizing::ICON_SM))
                    .push(Text::new(image_label).size(typography::BODY_SM)),
            )
            .on_press(Message::PickImage)
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::secondary),
        )
        .extend(artwork_preview(state))
        .into()
}

fn features_step<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("form-features-heading")).size(typography::BODY));

    for (index, feature) in state.features.iter().enumerate() {
        column = column.push(
            Row::new()
                .spacing(spacing::XS)
                .push(
                    text_input(&i18n.tr("form-feature-placeholder"), feature)
                        .on_input(move |value| Message::FeatureChanged(index, value))
                        .padding(spacing::XS),
                )
                .push(
                    button(icons::sized(icons::trash(), sizing::ICON_SM))
                        .on_press(Message::RemoveFeature(index))
                        .padding(spacing::XS)
                        .style(styles::button::subtle),
                ),
        );
    }
    column = column.push(add_button(i18n.tr("form-add-feature"), Message::AddFeature));

    column = column.push(Text::new(i18n.tr("form-benefits-heading")).size(typography::BODY));
    for (index, (benefit_text, benefit_icon)) in state.benefits.iter().enumerate() {
        column = column.push(
            Row::new()
                .spacing(spacing::XS)
                .push(
                    text_input(&i18n.tr("form-benefit-placeholder"), benefit_text)
                        .on_input(move |value| Message::BenefitTextChanged(index, value))
                        .padding(spacing::XS)
                        .width(Length::FillPortion(3)),
                )
                .push(
                    text_input(&i18n.tr("form-benefit-icon-placeholder"), benefit_icon)
                        .on_input(move |value| Message::BenefitIconChanged(index, value))
                        .padding(spacing::XS)
                        .width(Length::FillPortion(1)),
                )
                .push(
                    button(icons::sized(icons::trash(), sizing::ICON_SM))
                        .on_press(Message::RemoveBenefit(index))
                        .padding(spacing::XS)
                        .style(styles::button::subtle),
                ),
        );
    }
    column = column.push(add_button(i18n.tr("form-add-benefit"), Message::AddBenefit));

    column.into()
}

fn fees_step<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("form-fees-heading")).size(typography::BODY))
        .push(
            text_input(&i18n.tr("cards-form-annual-fee"), &state.annual)
                .on_input(Message::AnnualChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("cards-form-withdrawal-fee"), &state.withdrawal)
                .on_input(Message::WithdrawalChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("cards-form-replacement-fee"), &state.replacement)
                .on_input(Message::ReplacementChanged)
                .padding(spacing::XS),
        )
        .push(Text::new(i18n.tr("form-requirements-heading")).size(typography::BODY))
        .push(
            text_input(&i18n.tr("form-min-income"), &state.min_income)
                .on_input(Message::MinIncomeChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("cards-form-employment"), &state.employment)
                .on_input(Message::EmploymentChanged)
                .padding(spacing::XS),
        )
        .into()
}

fn add_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(icons::plus(), sizing::ICON_SM))
            .push(Text::new(label).size(typography::BODY_SM)),
    )
    .on_press(message)
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button::secondary)
    .into()
}

fn nav_row<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let last_step = state.step == stepper::STEP_KEYS.len() - 1;

    let left = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("wizard-cancel")).size(typography::BODY))
                .on_press(Message::Cancel)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        )
        .extend((state.step > 0).then(|| {
            button(
                Row::new()
                    .spacing(spacing::XXS)
                    .align_y(alignment::Vertical::Center)
                    .push(icons::sized(icons::chevron_left(), sizing::ICON_SM))
                    .push(Text::new(i18n.tr("wizard-back")).size(typography::BODY)),
            )
            .on_press(Message::Back)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::secondary)
        }).map(Element::from));

    let forward_label = if last_step {
        if state.is_edit() {
            i18n.tr("wizard-save")
        } else {
            i18n.tr("wizard-create")
        }
    } else {
        i18n.tr("wizard-next")
    };
    let mut forward = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(forward_label).size(typography::BODY))
            .extend(
                (!last_step)
                    .then(|| icons::sized(icons::chevron_right(), sizing::ICON_SM))
                    .map(Element::from),
            ),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary);
    if !state.saving {
        forward = forward.on_press(if last_step { Message::Submit } else { Message::Next });
    }

    Row::new()
        .push(Container::new(left).width(Length::Fill))
        .push(forward)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client() -> Client {
        Client::new("http://localhost:5000", Duration::from_secs(1)).expect("client builds")
    }

    #[test]
    fn step_one_requires_name_and_description() {
        let mut state = State::new();
        let _ = update(&mut state, Message::Next, &client());
        assert_eq!(state.error, Some("validation-name-required"));
        assert_eq!(state.step, 0);

        let _ = update(&mut state, Message::NameChanged("STB Travel".into()), &client());
        let _ = update(&mut state, Message::Next, &client());
        assert_eq!(state.error, Some("validation-description-required"));

        let _ = update(
            &mut state,
            Message::DescriptionChanged("For travellers".into()),
            &client(),
        );
        let _ = update(&mut state, Message::Next, &client());
        assert_eq!(state.error, None);
        assert_eq!(state.step, 1);
    }

    #[test]
    fn feature_rows_can_be_added_and_removed() {
        let mut state = State::new();
        let _ = update(&mut state, Message::AddFeature, &client());
        assert_eq!(state.features.len(), 2);
        let _ = update(&mut state, Message::RemoveFeature(0), &client());
        assert_eq!(state.features.len(), 1);
    }

    #[test]
    fn invalid_fee_blocks_submission() {
        let mut state = State::new();
        state.step = 2;
        state.annual = "a lot".into();
        let (_, event) = update(&mut state, Message::Submit, &client());
        assert!(matches!(event, Event::None));
        assert_eq!(state.error, Some("validation-number-invalid"));
        assert!(!state.saving);
    }

    #[test]
    fn edit_seeds_buffers_from_record() {
        let card = CardType {
            id: "c1".into(),
            name: "STB Travel".into(),
            features: vec!["Lounge access".into()],
            ..CardType::default()
        };
        let state = State::edit(card);
        assert!(state.is_edit());
        assert_eq!(state.name, "STB Travel");
        assert_eq!(state.features.len(), 1);
    }

    #[test]
    fn save_failure_notifies_and_unlocks_form() {
        let mut state = State::new();
        state.saving = true;
        let (_, event) = update(
            &mut state,
            Message::Saved(Err("error-api-network".into())),
            &client(),
        );
        assert!(!state.saving);
        match event {
            Event::Notify(notification) => {
                assert_eq!(notification.error_type(), Some(ErrorType::Api));
            }
            _ => panic!("expected a toast"),
        }
    }
}
