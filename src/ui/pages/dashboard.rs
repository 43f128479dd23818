// SPDX-License-Identifier: MPL-2.0
//! Dashboard overview: headline stats, activity charts and the recent
//! transactions table.

use crate::domain::{samples, RecentTransaction, StatSummary};
use crate::i18n::I18n;
use crate::ui::charts::{BarChart, LineChart};
use crate::ui::components::stat_card;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{canvas, text, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

/// Dashboard data, seeded once at startup.
pub struct State {
    stats: Vec<StatSummary>,
    volume: LineChart,
    activity: BarChart,
    transactions: Vec<RecentTransaction>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            stats: samples::stat_summaries(),
            volume: LineChart::new(samples::transaction_volume()),
            activity: BarChart::new(samples::user_activity()),
            transactions: samples::recent_transactions(),
        }
    }
}

/// The dashboard is read-only; it emits no messages.
#[derive(Debug, Clone)]
pub enum Message {}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut stat_row = Row::new().spacing(spacing::MD);
    for summary in &state.stats {
        stat_row = stat_row.push(stat_card::view(summary, i18n));
    }

    let charts = Row::new()
        .spacing(spacing::MD)
        .push(chart_panel(
            i18n.tr("dashboard-chart-volume"),
            canvas(&state.volume)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CHART_HEIGHT))
                .into(),
        ))
        .push(chart_panel(
            i18n.tr("dashboard-chart-activity"),
            canvas(&state.activity)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CHART_HEIGHT))
                .into(),
        ));

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(stat_row)
        .push(charts)
        .push(transactions_table(state, i18n));

    iced::widget::scrollable(content).into()
}

fn chart_panel<'a>(title: String, chart: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(title).size(typography::TITLE_SM))
            .push(chart),
    )
    .width(Length::FillPortion(1))
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}

fn transactions_table<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::SM).push(
        Text::new(i18n.tr("dashboard-recent-transactions")).size(typography::TITLE_SM),
    );

    for transaction in &state.transactions {
        rows = rows.push(transaction_row(transaction, i18n));
    }

    Container::new(rows)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn transaction_row<'a>(
    transaction: &'a RecentTransaction,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let status_color = match transaction.status_key.as_str() {
        "status-completed" => palette::SUCCESS_500,
        "status-failed" => palette::ERROR_500,
        _ => palette::WARNING_500,
    };

    Row::new()
        .spacing(spacing::MD)
        .push(
            Text::new(transaction.user.clone())
                .size(typography::BODY)
                .width(Length::FillPortion(3)),
        )
        .push(
            Text::new(i18n.tr(&transaction.kind_key))
                .size(typography::BODY_SM)
                .width(Length::FillPortion(2)),
        )
        .push(
            Text::new(transaction.amount.clone())
                .size(typography::BODY)
                .width(Length::FillPortion(2)),
        )
        .push(
            Text::new(transaction.time.clone())
                .size(typography::BODY_SM)
                .width(Length::FillPortion(2)),
        )
        .push(
            Text::new(i18n.tr(&transaction.status_key))
                .size(typography::BODY_SM)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(status_color),
                })
                .width(Length::FillPortion(2)),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_seeded() {
        let state = State::default();
        assert_eq!(state.stats.len(), 4);
        assert!(!state.transactions.is_empty());
    }

    #[test]
    fn dashboard_view_renders() {
        let state = State::default();
        let i18n = I18n::default();
        let _element = view(&state, &i18n);
    }
}
