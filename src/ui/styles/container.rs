// SPDX-License-Identifier: MPL-2.0
//! Container styles: desk, paper and page-edge shadows.

use crate::book::Shadow;
use crate::ui::design_tokens::{opacity, page, palette, radius, shadow};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Gradient, Theme};

/// Area behind the book.
pub fn desk(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// A single sheet of paper under the page image.
pub fn paper(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PAPER)),
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Edge shadow fading from the spine side of a page.
///
/// A left shadow darkens the right edge of a left-hand page (towards the
/// spine); a right shadow darkens the left edge of a right-hand page.
pub fn edge_shadow(kind: Shadow) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let dark = Color {
            a: page::SHADOW_OPACITY,
            ..palette::BLACK
        };
        let clear = Color {
            a: opacity::TRANSPARENT,
            ..palette::BLACK
        };
        // 90° runs left to right.
        let (start, end) = match kind {
            Shadow::Left => (clear, dark),
            Shadow::Right => (dark, clear),
        };
        let gradient = Linear::new(Degrees(90.0))
            .add_stop(0.0, start)
            .add_stop(1.0, end);
        container::Style {
            background: Some(Background::Gradient(Gradient::Linear(gradient))),
            ..Default::default()
        }
    }
}

/// Panel holding the loading indicator or an error.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
