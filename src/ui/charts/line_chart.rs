// SPDX-License-Identifier: MPL-2.0
//! Transaction volume line chart.

use super::{scale_y, CHART_INSET};
use crate::domain::TransactionPoint;
use crate::ui::design_tokens::{opacity, palette, typography};
use iced::widget::canvas;
use iced::{mouse, Color, Point, Rectangle, Theme};

/// Line chart over hourly transaction volume.
#[derive(Debug, Clone)]
pub struct LineChart {
    points: Vec<TransactionPoint>,
}

impl LineChart {
    pub fn new(points: Vec<TransactionPoint>) -> Self {
        Self { points }
    }

    fn max_amount(&self) -> f32 {
        self.points
            .iter()
            .map(|p| p.amount)
            .fold(1.0_f32, f32::max)
    }
}

impl<Message> canvas::Program<Message> for LineChart {
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

        if self.points.len() < 2 {
            return vec![frame.into_geometry()];
        }

        let max = self.max_amount();
        let step = (bounds.width - 2.0 * CHART_INSET) / (self.points.len() - 1) as f32;
        let label_color = theme.extended_palette().background.weak.text;

        let position = |index: usize, amount: f32| {
            Point::new(
                CHART_INSET + index as f32 * step,
                scale_y(amount, max, bounds.height),
            )
        };

        // Filled area under the curve
        let area = canvas::Path::new(|builder| {
            builder.move_to(Point::new(CHART_INSET, bounds.height - CHART_INSET));
            for (index, point) in self.points.iter().enumerate() {
                builder.line_to(position(index, point.amount));
            }
            builder.line_to(Point::new(
                CHART_INSET + (self.points.len() - 1) as f32 * step,
                bounds.height - CHART_INSET,
            ));
            builder.close();
        });
        frame.fill(
            &area,
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            },
        );

        // Stroked line on top
        let line = canvas::Path::new(|builder| {
            builder.move_to(position(0, self.points[0].amount));
            for (index, point) in self.points.iter().enumerate().skip(1) {
                builder.line_to(position(index, point.amount));
            }
        });
        frame.stroke(
            &line,
            canvas::Stroke::default()
                .with_color(palette::PRIMARY_500)
                .with_width(2.0),
        );

        // Time labels along the bottom
        for (index, point) in self.points.iter().enumerate() {
            frame.fill_text(canvas::Text {
                content: point.time.clone(),
                position: Point::new(
                    CHART_INSET + index as f32 * step,
                    bounds.height - CHART_INSET / 2.0,
                ),
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

    fn points() -> Vec<TransactionPoint> {
        vec![
            TransactionPoint {
                time: "00:00".into(),
                amount: 1200.0,
            },
            TransactionPoint {
                time: "06:00".into(),
                amount: 3400.0,
            },
        ]
    }

    #[test]
    fn max_amount_tracks_largest_point() {
        let chart = LineChart::new(points());
        assert_eq!(chart.max_amount(), 3400.0);
    }

    #[test]
    fn empty_series_has_unit_max() {
        // Guards against division by zero when the backend returns nothing.
        let chart = LineChart::new(Vec::new());
        assert_eq!(chart.max_amount(), 1.0);
    }
}
