// SPDX-License-Identifier: MPL-2.0
//! Navigation bar under the book: previous/next, page dots and autoplay.

use crate::app::Message;
use crate::book::{viewport, Controller, Viewport};
use crate::config::DisplayMode;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{page, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::alignment::Vertical;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{Element, Length};

/// Inputs of the navigation bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a Controller,
    pub mode: DisplayMode,
    pub autoplay: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let nav = ctx.controller.nav_buttons();
    let ready = ctx.controller.is_ready();

    let previous = button(Text::new(ctx.i18n.tr("nav-previous")).size(typography::BODY))
        .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press_maybe((ready && nav.previous_enabled).then_some(Message::Previous))
        .style(button_styles::nav);

    let next = button(Text::new(ctx.i18n.tr("nav-next")).size(typography::BODY))
        .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press_maybe((ready && nav.next_enabled).then_some(Message::Next))
        .style(button_styles::nav);

    let autoplay_label = if ctx.autoplay {
        ctx.i18n.tr("autoplay-stop")
    } else {
        ctx.i18n.tr("autoplay-start")
    };
    let autoplay = button(Text::new(autoplay_label).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press_maybe(ready.then_some(Message::ToggleAutoplay))
        .style(button_styles::toggle(ctx.autoplay));

    let centre = iced::widget::Column::new()
        .spacing(spacing::XXS)
        .align_x(iced::alignment::Horizontal::Center)
        .push(dots(ctx.controller, ctx.mode))
        .push(Text::new(page_label(ctx.i18n, ctx.controller)).size(typography::CAPTION));

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(previous)
        .push(Space::new().width(Length::Fill))
        .push(centre)
        .push(Space::new().width(Length::Fill))
        .push(autoplay)
        .push(next);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .into()
}

/// One dot per viewport; the dot of the visible viewport is highlighted.
fn dots(controller: &Controller, mode: DisplayMode) -> Element<'_, Message> {
    let current = controller.viewport();
    let ready = controller.is_ready();

    viewport::spreads(controller.total(), mode)
        .into_iter()
        .fold(Row::new().spacing(page::DOT_SPACING), |row, view| {
            let active = current == Some(view);
            row.push(
                button(Space::new())
                    .width(Length::Fixed(page::DOT_SIZE))
                    .height(Length::Fixed(page::DOT_SIZE))
                    .padding(0)
                    .on_press_maybe((ready && !active).then_some(Message::GoTo(view.first())))
                    .style(button_styles::dot(active)),
            )
        })
        .into()
}

/// "Page 3 of 21" or "Pages 4–5 of 21".
#[must_use]
pub fn page_label(i18n: &I18n, controller: &Controller) -> String {
    let total = controller.total().to_string();
    match controller.viewport() {
        Some(Viewport::Spread(first, last)) => i18n.tr_with_args(
            "page-indicator-spread",
            &[
                ("first", &first.to_string()),
                ("last", &last.to_string()),
                ("total", &total),
            ],
        ),
        Some(Viewport::Single(page)) => i18n.tr_with_args(
            "page-indicator",
            &[("page", &page.to_string()), ("total", &total)],
        ),
        None => String::new(),
    }
}
