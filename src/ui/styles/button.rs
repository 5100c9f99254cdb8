// SPDX-License-Identifier: MPL-2.0
//! Button styles of the control bar and the error panel.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn filled(background: Color, text: Color, border: Color, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color: text,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Previous/next and retry. A disabled button is grayed out so the first and
/// last page are obvious.
pub fn nav(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => filled(
            palette::PRIMARY_500,
            Color::WHITE,
            palette::PRIMARY_600,
            shadow::SM,
        ),
        button::Status::Hovered => filled(
            palette::PRIMARY_400,
            Color::WHITE,
            palette::PRIMARY_500,
            shadow::MD,
        ),
        button::Status::Disabled => {
            let background = if matches!(theme, Theme::Light) {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            };
            filled(background, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
        }
    }
}

/// Autoplay toggle: looks like [`nav`] while playing, neutral otherwise.
pub fn toggle(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if active {
            return nav(theme, status);
        }
        let (background, text) = if matches!(theme, Theme::Light) {
            (palette::GRAY_100, palette::GRAY_900)
        } else {
            (palette::GRAY_700, Color::WHITE)
        };
        let border = if status == button::Status::Hovered {
            palette::PRIMARY_500
        } else {
            palette::GRAY_400
        };
        filled(background, text, border, shadow::NONE)
    }
}

/// Page dot; the dot of the visible spread is highlighted.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match (active, status) {
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) => palette::PRIMARY_400,
            (false, button::Status::Disabled) => Color {
                a: 0.4,
                ..palette::GRAY_400
            },
            (false, _) => palette::GRAY_400,
        };
        button::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_button_uses_brand_colors() {
        let style = nav(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::PRIMARY_500)));
    }

    #[test]
    fn disabled_nav_button_is_grayed_out() {
        let style = nav(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
        assert_eq!(style.background, Some(Background::Color(palette::GRAY_200)));
    }

    #[test]
    fn active_dot_differs_from_inactive() {
        let active = dot(true)(&Theme::Dark, button::Status::Active);
        let inactive = dot(false)(&Theme::Dark, button::Status::Active);
        assert_ne!(active.background, inactive.background);
    }

    #[test]
    fn playing_toggle_matches_nav_style() {
        let playing = toggle(true)(&Theme::Dark, button::Status::Active);
        let paused = toggle(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(playing.background, nav(&Theme::Dark, button::Status::Active).background);
        assert_ne!(playing.background, paused.background);
    }
}
