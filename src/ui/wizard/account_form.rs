// SPDX-License-Identifier: MPL-2.0
//! Account product form.

use super::{parse_f64_or_zero, parse_optional_f64, stepper, Mode};
use crate::api::Client;
use crate::diagnostics::ErrorType;
use crate::domain::{AccountFees, AccountRequirements, AccountType, Benefit};
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
    name: String,
    description: String,
    icon: String,
    features: Vec<String>,
    benefits: Vec<(String, String)>,
    interest_rate: String,
    min_deposit: String,
    min_balance: String,
    monthly_fee: String,
    transaction_fee: String,
    transfer_fee: String,
    error: Option<&'static str>,
    saving: bool,
}

impl State {
    pub fn new() -> Self {
        Self {
            mode: Mode::Create,
            step: 0,
            name: String::new(),
            description: String::new(),
            icon: String::new(),
            features: vec![String::new()],
            benefits: Vec::new(),
            interest_rate: String::new(),
            min_deposit: String::new(),
            min_balance: String::new(),
            monthly_fee: String::new(),
            transaction_fee: String::new(),
            transfer_fee: String::new(),
            error: None,
            saving: false,
        }
    }

    pub fn edit(account: AccountType) -> Self {
        Self {
            mode: Mode::Edit(account.id),
            name: account.name,
            description: account.description,
            icon: account.icon,
            features: if account.features.is_empty() {
                vec![String::new()]
            } else {
                account.features
            },
            benefits: account
                .benefits
                .into_iter()
                .map(|b| (b.text, b.icon))
                .collect(),
            interest_rate: option_to_buffer(account.interest_rate),
            min_deposit: if account.requirements.min_deposit == 0.0 {
                String::new()
            } else {
                account.requirements.min_deposit.to_string()
            },
            min_balance: option_to_buffer(account.requirements.min_balance),
            monthly_fee: if account.fees.monthly == 0.0 {
                String::new()
            } else {
                account.fees.monthly.to_string()
            },
            transaction_fee: option_to_buffer(account.fees.transaction),
            transfer_fee: option_to_buffer(account.fees.international_transfer),
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
    NameChanged(String),
    DescriptionChanged(String),
    IconChanged(String),
    FeatureChanged(usize, String),
    AddFeature,
    RemoveFeature(usize),
    BenefitTextChanged(usize, String),
    BenefitIconChanged(usize, String),
    AddBenefit,
    RemoveBenefit(usize),
    InterestRateChanged(String),
    MinDepositChanged(String),
    MinBalanceChanged(String),
    MonthlyFeeChanged(String),
    TransactionFeeChanged(String),
    TransferFeeChanged(String),
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
        Message::NameChanged(value) => state.name = value,
        Message::DescriptionChanged(value) => state.description = value,
        Message::IconChanged(value) => state.icon = value,
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
        Message::InterestRateChanged(value) => state.interest_rate = value,
        Message::MinDepositChanged(value) => state.min_deposit = value,
        Message::MinBalanceChanged(value) => state.min_balance = value,
        Message::MonthlyFeeChanged(value) => state.monthly_fee = value,
        Message::TransactionFeeChanged(value) => state.transaction_fee = value,
        Message::TransferFeeChanged(value) => state.transfer_fee = value,
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
    let parsed = (|| -> Result<(AccountFees, AccountRequirements, Option<f64>), ()> {
        let fees = AccountFees {
            monthly: parse_f64_or_zero(&state.monthly_fee)?,
            transaction: parse_optional_f64(&state.transaction_fee)?,
            international_transfer: parse_optional_f64(&state.transfer_fee)?,
        };
        let requirements = AccountRequirements {
            min_deposit: parse_f64_or_zero(&state.min_deposit)?,
            min_balance: parse_optional_f64(&state.min_balance)?,
        };
        let interest_rate = parse_optional_f64(&state.interest_rate)?;
        Ok((fees, requirements, interest_rate))
    })();

    let (fees, requirements, interest_rate) = match parsed {
        Ok(values) => values,
        Err(()) => {
            state.error = Some("validation-number-invalid");
            return (Task::none(), Event::None);
        }
    };
    state.error = None;

    let account = AccountType {
        id: match &state.mode {
            Mode::Edit(id) => id.clone(),
            Mode::Create => String::new(),
        },
        name: state.name.trim().to_string(),
        description: state.description.trim().to_string(),
        icon: state.icon.trim().to_string(),
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
        interest_rate,
    };

    state.saving = true;
    let client = client.clone();
    let mode = state.mode.clone();
    let task = Task::perform(
        async move {
            let result = match &mode {
                Mode::Create => client.create_account_type(&account).await,
                Mode::Edit(id) => client.update_account_type(id, &account).await,
            };
            result.map_err(|e| e.i18n_key().to_string())
        },
        Message::Saved,
    );
    (task, Event::None)
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title_key = if state.is_edit() {
        "accounts-form-edit-title"
    } else {
        "accounts-form-new-title"
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
            text_input(&i18n.tr("form-name-placeholder"), &state.name)
                .on_input(Message::NameChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("form-description-placeholder"), &state.description)
                .on_input(Message::DescriptionChanged)
                .padding(spacing::XS),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(
                    text_input(&i18n.tr("form-icon-placeholder"), &state.icon)
                        .on_input(Message::IconChanged)
                        .padding(spacing::XS),
                )
                .push(icons::sized(icons::by_name(&state.icon), sizing::ICON_MD)),
        )
        .push(
            text_input(&i18n.tr("accounts-form-interest"), &state.interest_rate)
                .on_input(Message::InterestRateChanged)
                .padding(spacing::XS),
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
            text_input(&i18n.tr("accounts-form-monthly-fee"), &state.monthly_fee)
                .on_input(Message::MonthlyFeeChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("accounts-form-transaction-fee"), &state.transaction_fee)
                .on_input(Message::TransactionFeeChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("accounts-form-transfer-fee"), &state.transfer_fee)
                .on_input(Message::TransferFeeChanged)
                .padding(spacing::XS),
        )
        .push(Text::new(i18n.tr("form-requirements-heading")).size(typography::BODY))
        .push(
            text_input(&i18n.tr("accounts-form-min-deposit"), &state.min_deposit)
                .on_input(Message::MinDepositChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input(&i18n.tr("accounts-form-min-balance"), &state.min_balance)
                .on_input(Message::MinBalanceChanged)
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
    fn optional_fields_round_trip_through_buffers() {
        let account = AccountType {
            id: "a1".into(),
            name: "Savings".into(),
            interest_rate: Some(4.25),
            ..AccountType::default()
        };
        let state = State::edit(account);
        assert_eq!(state.interest_rate, "4.25");
        assert!(state.min_balance.is_empty());
    }

    #[test]
    fn blank_optional_fees_submit_as_absent() {
        let mut state = State::new();
        state.step = 2;
        state.name = "Savings".into();
        state.description = "Grow".into();

        // Submission builds the payload before the network call; an invalid
        // optional field is the only thing that can stop it here.
        let (_, event) = update(&mut state, Message::Submit, &client());
        assert!(matches!(event, Event::None));
        assert!(state.saving);
        assert_eq!(state.error, None);
    }

    #[test]
    fn invalid_interest_rate_blocks_submission() {
        let mut state = State::new();
        state.step = 2;
        state.interest_rate = "four".into();
        let _ = update(&mut state, Message::Submit, &client());
        assert_eq!(state.error, Some("validation-number-invalid"));
        assert!(!state.saving);
    }
}
