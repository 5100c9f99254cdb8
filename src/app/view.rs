// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message, Stage};
use crate::ui::loading::{self, Status};
use crate::ui::{book_view, controls};
use iced::widget::Column;
use iced::{Element, Length};
use std::time::Instant;

/// Renders the loading panel, the error panel or the book.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let status = match &app.stage {
        Stage::Loading(preloader) => Some(Status::Loading {
            loaded: preloader.loaded(),
            total: preloader.total(),
        }),
        Stage::AwaitingWindow(_) => Some(Status::Initializing),
        Stage::Failed(err) => Some(Status::Failed(err)),
        Stage::Ready => None,
    };

    match status {
        Some(status) => loading::view(loading::ViewContext {
            i18n: &app.i18n,
            status,
            spinner_rotation: app.spinner_rotation,
        }),
        None => {
            let book = book_view::view(book_view::ViewContext {
                controller: &app.controller,
                config: &app.engine_config,
                now: Instant::now(),
            });
            Column::new()
                .push(book_view::on_desk(book, app.theme_mode.desk_color()))
                .push(controls::view(controls::ViewContext {
                    i18n: &app.i18n,
                    controller: &app.controller,
                    mode: app.engine_config.mode,
                    autoplay: app.autoplay,
                }))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
    }
}
