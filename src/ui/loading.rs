// SPDX-License-Identifier: MPL-2.0
//! Loading indicator and the fatal error panel that replaces it.

use crate::app::Message;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::Horizontal;
use iced::widget::{button, text, Column, Container, Text};
use iced::{Element, Length, Theme};

/// What the panel shows.
#[derive(Debug, Clone, Copy)]
pub enum Status<'a> {
    /// `loaded` of `total` pages are ready.
    Loading { loaded: usize, total: usize },
    /// Pages are loaded, waiting for the engine.
    Initializing,
    Failed(&'a Error),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub status: Status<'a>,
    pub spinner_rotation: f32,
}

/// Localized text for the current status.
#[must_use]
pub fn status_text(i18n: &I18n, status: Status<'_>) -> String {
    match status {
        Status::Loading { total: 0, .. } => i18n.tr("loading-title"),
        Status::Loading { loaded, total } => i18n.tr_with_args(
            "loading-progress",
            &[
                ("loaded", &(loaded + 1).min(total).to_string()),
                ("total", &total.to_string()),
            ],
        ),
        Status::Initializing => i18n.tr("loading-initializing"),
        Status::Failed(error) => error_text(i18n, error),
    }
}

/// Localized message of `error`.
#[must_use]
pub fn error_text(i18n: &I18n, error: &Error) -> String {
    let args = error.i18n_args();
    let borrowed: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();
    i18n.tr_with_args(error.i18n_key(), &borrowed)
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let message = status_text(ctx.i18n, ctx.status);

    let content = match ctx.status {
        Status::Failed(_) => Column::new()
            .push(
                Text::new(ctx.i18n.tr("error-title"))
                    .size(typography::TITLE_MD)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            )
            .push(Text::new(message).size(typography::BODY))
            .push(
                button(Text::new(ctx.i18n.tr("retry-button")))
                    .on_press(Message::Retry)
                    .style(button_styles::nav),
            ),
        Status::Loading { .. } | Status::Initializing => Column::new()
            .push(AnimatedSpinner::new(palette::PRIMARY_500, ctx.spinner_rotation).into_element())
            .push(Text::new(message).size(typography::BODY_LG)),
    };

    let panel = Container::new(
        content
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .width(Length::Fill),
    )
    .max_width(sizing::ERROR_PANEL_WIDTH)
    .padding(spacing::LG)
    .style(container_styles::panel);

    Container::new(panel)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::path::PathBuf;
    use std::time::Duration;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".into()), &Config::default())
    }

    #[test]
    fn loading_text_counts_the_page_in_flight() {
        let text = status_text(&i18n(), Status::Loading { loaded: 2, total: 21 });
        assert_eq!(text, "Loading page 3 of 21…");
    }

    #[test]
    fn timeout_text_names_the_file() {
        let err = Error::LoadTimeout {
            path: PathBuf::from("book/page_007.png"),
            timeout: Duration::from_secs(30),
        };
        let text = status_text(&i18n(), Status::Failed(&err));
        assert_eq!(text, "Loading page_007.png took longer than 30 seconds.");
    }

    #[test]
    fn every_error_key_is_translated() {
        let errors = [
            Error::Io("x".into()),
            Error::Config("x".into()),
            Error::LoadFailure {
                path: PathBuf::from("p.png"),
                reason: "x".into(),
            },
            Error::DependencyMissing(crate::error::Dependency::UiRuntime),
            Error::DependencyMissing(crate::error::Dependency::FlipEngine("x".into())),
            Error::PageOrder {
                expected: 1,
                found: 2,
            },
            Error::EmptyBook,
        ];
        for locale in ["en-US", "fr"] {
            let i18n = I18n::new(Some(locale.into()), &Config::default());
            for err in &errors {
                assert!(
                    !error_text(&i18n, err).starts_with("MISSING"),
                    "{locale}: {}",
                    err.i18n_key()
                );
            }
        }
    }
}
