// SPDX-License-Identifier: MPL-2.0
//! Credit product form.

use super::{parse_optional_f64, stepper, Mode};
use crate::api::Client;
use crate::diagnostics::ErrorType;
use crate::domain::{Benefit, CreditFees, CreditRequirements, CreditType};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::widget::{button, scrollable, text, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Task, Theme};

pub struct State {
    mode: Mode,
    step: usize,
    title: String,
    description: String,
    interest_rate: String,
    duration: String,
    eligibility: String,
    icon: String,
    color: String,
    features: Vec<String>,
    benefits: Vec<(String, String)>,
    min_income: String,
    min_credit_score: String,
    employment_duration: String,
    processing_fee: String,
    late_payment_fee: String,
    prepayment_fee: String,
    error: Option<&'static str>,
    saving: bool,
}

impl State {
    pub fn new() -> Self {
        Self {
            mode: Mode::Create,
            step: 0,
            title: String::new(),
            description: String::new(),
            interest_rate: String::new(),
            duration: String::new(),
            eligibility: String::new(),
            icon: String::new(),
            color: String::new(),
            features: vec![String::new()],
            benefits: Vec::new(),
            min_income: String::new(),
            min_credit_score: String::new(),
            employment_duration: String::new(),
            processing_fee: String::new(),
            late_payment_fee: String::new(),
            prepayment_fee: String::new(),
            error: None,
            saving: false,
        }
    }

    pub fn edit(credit: CreditType) -> Self {
        Self {
            mode: Mode::Edit(credit.id),
            title: credit.title,
            description: credit.description,
            interest_rate: credit.interest_rate.to_string(),
            duration: credit.duration,
            eligibility: credit.eligibility,
            icon: credit.icon,
            color: credit.color,
            features: if credit.features.is_empty() {
                vec![String::new()]
            } else {
                credit.features
            },
            benefits: credit
                .benefits
                .into_iter()
                .map(|b| (b.text, b.icon))
                .collect(),
            min_income: option_to_buffer(credit.requirements.min_income),
            min_credit_score: credit
                .requirements
                .min_credit_score
                .map(|s| s.to_string())
                .unwrap_or_default(),
            employment_duration: credit.requirements.employment_duration.unwrap_or_default(),
            processing_fee: option_to_buffer(credit.fees.processing),
            late_payment_fee: option_to_buffer(credit.fees.late_payment),
            prepayment_fee: option_to_buffer(credit.fees.prepayment),
            ..Self::new()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.mode.is_edit()
    }
}

fn option_to_buffer(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    DescriptionChanged(String),
    InterestRateChanged(String),
    DurationChanged(String),
    EligibilityChanged(String),
    IconChanged(String),
    ColorChanged(String),
    FeatureChanged(usize, String),
    AddFeature,
    RemoveFeature(usize),
    BenefitTextChanged(usize, String),
    BenefitIconChanged(usize, String),
    AddBenefit,
    RemoveBenefit(usize),
    MinIncomeChanged(String),
    MinCreditScoreChanged(String),
    EmploymentDurationChanged(String),
    ProcessingFeeChanged(String),
    LatePaymentFeeChanged(String),
    PrepaymentFeeChanged(String),
    Next,
    Back,
    Cancel,
    Submit,
    Saved(Result<(), String>),
}

pub enum Event {
    None,
    Cancelled,
    Saved { created: bool },
    Notify(Notification),
}

pub fn update(state: &mut State, message: Message, client: &Client) -> (Task<Message>, Event) {
    match message {
        Message::TitleChanged(value) => state.title = value,
        Message::DescriptionChanged(value) => state.description = value,
        Message::InterestRateChanged(value) => state.interest_rate = value,
        Message::DurationChanged(value) => state.duration = value,
        Message::EligibilityChanged(value) => state.eligibility = value,
        Message::IconChanged(value) => state.icon = value,
        Message::ColorChanged(value) => state.color = value,
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
        Message::MinIncomeChanged(value) => state.min_income = value,
        Message::MinCreditScoreChanged(value) => state.min_credit_score = value,
        Message::EmploymentDurationChanged(value) => state.employment_duration = value,
        Message::ProcessingFeeChanged(value) => state.processing_fee = value,
        Message::LatePaymentFeeChanged(value) => state.late_payment_fee = value,
        Message::PrepaymentFeeChanged(value) => state.prepayment_fee = value,
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
            if state.title.trim().is_empty() {
                Some("validation-name-required")
            } else if state.description.trim().is_empty() {
                Some("validation-description-required")
            } else if state.interest_rate.trim().parse::<f64>().is_err() {
                Some("validation-number-invalid")
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
    let parsed = (|| -> Result<(f64, CreditRequirements, CreditFees), ()> {
        let interest_rate = state.interest_rate.trim().parse::<f64>().map_err(|_| ())?;
        let min_credit_score = {
            let trimmed = state.min_credit_score.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.parse::<u32>().map_err(|_| ())?)
            }
        };
        let requirements = CreditRequirements {
            min_income: parse_optional_f64(&state.min_income)?,
            min_credit_score,
            employment_duration: {
                let trimmed = state.employment_duration.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            },
        };
        let fees = CreditFees {
            processing: parse_optional_f64(&state.processing_fee)?,
            late_payment: parse_optional_f64(&state.late_payment_fee)?,
            prepayment: parse_optional_f64(&state.prepayment_fee)?,
        };
        Ok((interest_rate, requirements, fees))
    })();

    let (interest_rate, requirements, fees) = match parsed {
        Ok(values) => values,
        Err(()) => {
            state.error = Some("validation-number-invalid");
            return (Task::none(), Event::None);
        }
    };
    state.error = None;

    let credit = CreditType {
        id: match &state.mode {
            Mode::Edit(id) => id.clone(),
            Mode::Create => String::new(),
        },
        title: state.title.trim().to_string(),
        description: state.description.trim().to_string(),
        interest_rate,
        duration: state.duration.trim().to_string(),
        eligibility: state.eligibility.trim().to_string(),
        icon: state.icon.trim().to_string(),
        color: state.color.trim().to_string(),
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
        requirements,
        fees,
    };

    state.saving = true;
    let client = client.clone();
    let mode = state.mode.clone();
    let task = Task::perform(
        async move {
            let result = match &mode {
                Mode::Create => client.create_credit_type(&credit).await,
                Mode::Edit(id) => client.update_credit_type(id, &credit).await,
            };
            result.map_err(|e| e.i18n_key().to_string())
        },
        Message::Saved,
    );
    (task, Event::None)
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title_key = if state.is_edit() {
        "credits-form-edit-title"
    } else {
        "credits-form-new-title"
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

fn basic_step<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(
            text_input(&i18n.tr("form-name-placeholder"), &state.title)
                .on_input(Message::TitleChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("form-description-placeholder"), &state.description)
                .on_input(Message::DescriptionChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("credits-form-rate"), &state.interest_rate)
                .on_input(Message::InterestRateChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("credits-form-duration"), &state.duration)
                .on_input(Message::DurationChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("credits-form-eligibility"), &state.eligibility)
                .on_input(Message::EligibilityChanged)
                .padding(spacing::XS),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(
                    text_input(&i18n.tr("form-icon-placeholder"), &state.icon)
                        .on_input(Message::IconChanged)
                        .padding(spacing::XS)
                        .width(Length::FillPortion(2)),
                )
                .push(
                    text_input(&i18n.tr("credits-form-color"), &state.color)
                        .on_input(Message::ColorChanged)
                        .padding(spacing::XS)
                        .width(Length::FillPortion(1)),
                )
                .push(icons::sized(icons::by_name(&state.icon), sizing::ICON_MD)),
        )
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
            text_input(&i18n.tr("credits-form-processing-fee"), &state.processing_fee)
                .on_input(Message::ProcessingFeeChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(
                &i18n.tr("credits-form-late-payment-fee"),
                &state.late_payment_fee,
            )
            .on_input(Message::LatePaymentFeeChanged)
            .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("credits-form-prepayment-fee"), &state.prepayment_fee)
                .on_input(Message::PrepaymentFeeChanged)
                .padding(spacing::XS),
        )
        .push(Text::new(i18n.tr("form-requirements-heading")).size(typography::BODY))
        .push(
            text_input(&i18n.tr("form-min-income"), &state.min_income)
                .on_input(Message::MinIncomeChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(
                &i18n.tr("credits-form-min-credit-score"),
                &state.min_credit_score,
            )
            .on_input(Message::MinCreditScoreChanged)
            .padding(spacing::XS),
        )
        .push(
            text_input(
                &i18n.tr("credits-form-employment-duration"),
                &state.employment_duration,
            )
            .on_input(Message::EmploymentDurationChanged)
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
    fn interest_rate_is_required_on_the_first_step() {
        let mut state = State::new();
        state.title = "Home Loan".into();
        state.description = "Buy a home".into();
        let _ = update(&mut state, Message::Next, &client());
        assert_eq!(state.error, Some("validation-number-invalid"));

        let _ = update(&mut state, Message::InterestRateChanged("6.8".into()), &client());
        let _ = update(&mut state, Message::Next, &client());
        assert_eq!(state.error, None);
        assert_eq!(state.step, 1);
    }

    #[test]
    fn credit_score_buffer_must_be_an_integer() {
        let mut state = State::new();
        state.step = 2;
        state.title = "Loan".into();
        state.description = "d".into();
        state.interest_rate = "5.0".into();
        state.min_credit_score = "6.5".into();
        let _ = update(&mut state, Message::Submit, &client());
        assert_eq!(state.error, Some("validation-number-invalid"));
        assert!(!state.saving);
    }

    #[test]
    fn edit_seeds_buffers_from_the_record() {
        let credit = CreditType {
            id: "c1".into(),
            title: "Car Loan".into(),
            interest_rate: 7.5,
            requirements: CreditRequirements {
                min_credit_score: Some(640),
                ..CreditRequirements::default()
            },
            ..CreditType::default()
        };
        let state = State::edit(credit);
        assert!(state.is_edit());
        assert_eq!(state.interest_rate, "7.5");
        assert_eq!(state.min_credit_score, "640");
    }
}
