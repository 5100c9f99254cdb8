// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by the book window.
//!
//! Styles and views read colors, spacing and sizes from here instead of
//! hard-coding them, so the desk, the pages and the controls stay consistent
//! between the light and dark themes.
//!
//! ```
//! use flipbook::ui::design_tokens::{palette, spacing};
//!
//! let gutter = spacing::MD;
//! let desk = palette::DESK_DARK;
//! assert!(gutter > 0.0 && desk.a == 1.0);
//! ```

use iced::Color;

/// Base colors.
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;

    // Neutrals, darkest first.
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Accent used by active dots and the autoplay toggle.
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);

    /// Background of a page before its image is drawn.
    pub const PAPER: Color = Color::from_rgb(0.98, 0.97, 0.94);
    /// Surface the book lies on.
    pub const DESK_LIGHT: Color = Color::from_rgb(0.91, 0.9, 0.88);
    pub const DESK_DARK: Color = Color::from_rgb(0.13, 0.13, 0.14);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
}

/// Spacing on a 4px grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    /// Spinner diameter.
    pub const ICON_XL: f32 = 48.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const NAV_BUTTON_WIDTH: f32 = 110.0;
    pub const ERROR_PANEL_WIDTH: f32 = 500.0;
}

pub mod typography {
    /// Error heading.
    pub const TITLE_MD: f32 = 20.0;
    /// Loading text.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Page indicator.
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    /// Pill and dot shape.
    pub const FULL: f32 = 9999.0;
}

/// Drop shadows of buttons and of the book on the desk.
pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

/// Page-edge overlays and page dots.
pub mod page {
    /// Share of the page width covered by an edge shadow.
    pub const SHADOW_WIDTH_RATIO: f32 = 0.12;
    /// Opacity of an edge shadow at the spine.
    pub const SHADOW_OPACITY: f32 = 0.35;
    pub const DOT_SIZE: f32 = 10.0;
    pub const DOT_SPACING: f32 = 6.0;
}

const _: () = {
    assert!(spacing::SM > spacing::XXS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(page::SHADOW_WIDTH_RATIO > 0.0 && page::SHADOW_WIDTH_RATIO < 0.5);
    assert!(page::SHADOW_OPACITY > 0.0 && page::SHADOW_OPACITY < 1.0);
    assert!(page::DOT_SIZE < sizing::BUTTON_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_four_pixel_grid() {
        for value in [spacing::XXS, spacing::SM, spacing::MD, spacing::LG] {
            assert_eq!(value % 4.0, 0.0);
        }
    }

    #[test]
    fn desk_colors_contrast_with_paper() {
        let luminance = |c: Color| c.r + c.g + c.b;
        assert!(luminance(palette::PAPER) > luminance(palette::DESK_LIGHT));
        assert!(luminance(palette::DESK_LIGHT) > luminance(palette::DESK_DARK));
    }
}
