// SPDX-License-Identifier: MPL-2.0
//! Monthly user activity bar chart.

use super::{scale_y, CHART_INSET};
use crate::domain::ActivityPoint;
use crate::ui::design_tokens::{palette, typography};
use iced::widget::canvas;
use iced::{mouse, Point, Rectangle, Size, Theme};

/// Grouped bar chart: active vs newly registered users per month.
#[derive(Debug, Clone)]
pub struct BarChart {
    points: Vec<ActivityPoint>,
}

impl BarChart {
    pub fn new(points: Vec<ActivityPoint>) -> Self {
        Self { points }
    }

    fn max_count(&self) -> f32 {
        self.points
            .iter()
            .map(|p| p.active.max(p.new))
            .fold(1.0_f32, f32::max)
    }
}

impl<Message> canvas::Program<Message> for BarChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        if self.points.is_empty() {
            return vec![frame.into_geometry()];
        }

        let max = self.max_count();
        let group_width = (bounds.width - 2.0 * CHART_INSET) / self.points.len() as f32;
        let bar_width = (group_width / 3.0).max(2.0);
        let baseline = bounds.height - CHART_INSET;
        let label_color = theme.extended_palette().background.weak.text;

        for (index, point) in self.points.iter().enumerate() {
            let group_left = CHART_INSET + index as f32 * group_width;

            let active_top = scale_y(point.active, max, bounds.height);
            let active_bar = canvas::Path::rectangle(
                Point::new(group_left + bar_width * 0.25, active_top),
                Size::new(bar_width, baseline - active_top),
            );
            frame.fill(&active_bar, palette::PRIMARY_500);

            let new_top = scale_y(point.new, max, bounds.height);
            let new_bar = canvas::Path::rectangle(
                Point::new(group_left + bar_width * 1.5, new_top),
                Size::new(bar_width, baseline - new_top),
            );
            frame.fill(&new_bar, palette::SUCCESS_500);

            frame.fill_text(canvas::Text {
                content: point.month.clone(),
                position: Point::new(group_left + group_width / 2.0, baseline + CHART_INSET / 2.0),
                color: label_color,
                size: typography::CAPTION.into(),
                align_x: iced::alignment::Horizontal::Center.into(),
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_count_takes_larger_series() {
        let chart = BarChart::new(vec![
            ActivityPoint {
                month: "Jan".into(),
                active: 400.0,
                new: 120.0,
            },
            ActivityPoint {
                month: "Feb".into(),
                active: 380.0,
                new: 440.0,
            },
        ]);
        assert_eq!(chart.max_count(), 440.0);
    }
}
