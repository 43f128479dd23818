// SPDX-License-Identifier: MPL-2.0
//! Pill badge styles for status labels.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Pill-shaped badge tinted with a semantic color.
///
/// The accent is used at low opacity for the fill and full strength for
/// the text, the common pattern for status chips.
pub fn pill(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(accent),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn pill_text_matches_accent() {
        let style = pill(palette::SUCCESS_500)(&Theme::Light);
        assert_eq!(style.text_color, Some(palette::SUCCESS_500));
    }
}
