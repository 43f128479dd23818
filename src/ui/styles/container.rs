// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Card surface used for stat tiles, tables and form sections.
///
/// The color is derived from the active Iced `Theme` background so cards
/// stay readable in both light and dark modes without hard-coding colors.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Flat panel without elevation, used for the sidebar and header chrome.
pub fn chrome(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        ..Default::default()
    }
}

/// Dimmed full-window backdrop behind modal dialogs.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    use crate::ui::design_tokens::opacity;
    use iced::Color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Elevated dialog surface shown above the backdrop.
pub fn dialog(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_has_border_and_shadow() {
        let style = card(&Theme::Light);
        assert!(style.background.is_some());
        assert!(style.border.width > 0.0);
    }

    #[test]
    fn backdrop_is_translucent() {
        let style = modal_backdrop(&Theme::Dark);
        if let Some(Background::Color(color)) = style.background {
            assert!(color.a < 1.0);
        } else {
            panic!("Expected background color");
        }
    }
}
