// SPDX-License-Identifier: MPL-2.0
//! Renders the visible pages, their edge shadows and the page-turn animation.
//!
//! The book is laid out as two slots around the spine. During a transition the
//! page leaving the book is squeezed towards the spine over the first half of
//! the animation, and the arriving page grows out of the spine over the
//! second half.

use crate::app::Message;
use crate::book::engine::Direction;
use crate::book::{Controller, EngineConfig, Shadow, Viewport};
use crate::config::DisplayMode;
use crate::ui::design_tokens::page;
use crate::ui::styles::container as container_styles;
use iced::alignment::Horizontal;
use iced::widget::{image, Container, Row, Space, Stack};
use iced::{Color, ContentFit, Element, Length};
use std::time::Instant;

/// Which side of the spine a page sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Left,
    Right,
}

/// Page numbers on each side of the spine for a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl Sides {
    /// Places `view` around the spine.
    ///
    /// In double mode the cover sits on the right and a lone back page on the
    /// left. In single mode the page always sits on the right.
    #[must_use]
    pub fn of(view: Viewport, mode: DisplayMode) -> Self {
        match (mode, view) {
            (_, Viewport::Spread(left, right)) => Self {
                left: Some(left),
                right: Some(right),
            },
            (DisplayMode::Double, Viewport::Single(page)) if page > 1 => Self {
                left: Some(page),
                right: None,
            },
            (_, Viewport::Single(page)) => Self {
                left: None,
                right: Some(page),
            },
        }
    }

    #[must_use]
    pub fn get(self, slot: Slot) -> Option<usize> {
        match slot {
            Slot::Left => self.left,
            Slot::Right => self.right,
        }
    }
}

/// What a slot draws: a full page underneath and optionally a squeezed page
/// on top.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlotLayers {
    pub base: Option<usize>,
    /// Page number and width factor in `0.0..=1.0`.
    pub top: Option<(usize, f32)>,
}

impl SlotLayers {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base.is_none() && self.top.is_none()
    }
}

/// Layers of `slot` at `progress` of a turn from `from` to `to`.
#[must_use]
pub fn slot_layers(
    slot: Slot,
    from: Sides,
    to: Sides,
    direction: Direction,
    progress: f32,
) -> SlotLayers {
    let leading = match direction {
        Direction::Forward => Slot::Right,
        Direction::Backward => Slot::Left,
    };
    let (from_page, to_page) = (from.get(slot), to.get(slot));
    let first_half = progress < 0.5;

    if slot == leading {
        if first_half {
            SlotLayers {
                base: to_page,
                top: from_page.map(|p| (p, 1.0 - 2.0 * progress)),
            }
        } else {
            SlotLayers {
                base: to_page,
                top: None,
            }
        }
    } else if first_half {
        SlotLayers {
            base: from_page,
            top: None,
        }
    } else {
        SlotLayers {
            base: from_page,
            top: to_page.map(|p| (p, 2.0 * progress - 1.0)),
        }
    }
}

/// Inputs of the book view.
pub struct ViewContext<'a> {
    pub controller: &'a Controller,
    pub config: &'a EngineConfig,
    pub now: Instant,
}

/// Renders the book.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let Some(current) = ctx.controller.viewport() else {
        return Space::new().into();
    };
    let mode = ctx.config.mode;

    let slots = [Slot::Left, Slot::Right].map(|slot| {
        let layers = match ctx.controller.transition() {
            Some(transition) => slot_layers(
                slot,
                Sides::of(transition.from, mode),
                Sides::of(transition.to, mode),
                transition.direction,
                transition.progress(ctx.now),
            ),
            None => SlotLayers {
                base: Sides::of(current, mode).get(slot),
                top: None,
            },
        };
        (slot, layers)
    });

    let mut row = Row::new();
    for (slot, layers) in slots {
        let skip = layers.is_empty()
            && (ctx.config.centered || mode == DisplayMode::Single);
        if skip {
            continue;
        }
        row = row.push(slot_view(ctx.controller, ctx.config, slot, layers));
    }
    row.into()
}

fn slot_view<'a>(
    controller: &'a Controller,
    config: &EngineConfig,
    slot: Slot,
    layers: SlotLayers,
) -> Element<'a, Message> {
    #[allow(clippy::cast_precision_loss)]
    let (width, height) = (config.width as f32, config.height as f32);
    // Squeezed pages hug the spine.
    let spine = match slot {
        Slot::Left => Horizontal::Right,
        Slot::Right => Horizontal::Left,
    };

    let mut stack = Stack::new()
        .width(Length::Fixed(width))
        .height(Length::Fixed(height));

    if let Some(number) = layers.base {
        stack = stack.push(page_view(controller, number, width, height, 1.0, spine));
    }
    if let Some((number, squeeze)) = layers.top {
        stack = stack.push(page_view(controller, number, width, height, squeeze, spine));
    }
    stack.into()
}

fn page_view<'a>(
    controller: &'a Controller,
    number: usize,
    width: f32,
    height: f32,
    squeeze: f32,
    spine: Horizontal,
) -> Element<'a, Message> {
    let page_width = (width * squeeze.clamp(0.0, 1.0)).max(1.0);

    let content: Element<'a, Message> = match controller.page(number) {
        Some(attached) => image(attached.image.handle.clone())
            .width(Length::Fixed(page_width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Fill)
            .into(),
        None => Space::new()
            .width(Length::Fixed(page_width))
            .height(Length::Fixed(height))
            .into(),
    };

    let mut sheet = Stack::new()
        .push(Container::new(content).style(container_styles::paper));

    if let Some(shadow) = controller.shadows().get(number - 1) {
        sheet = sheet.push(edge_overlay(shadow, page_width, height));
    }

    Container::new(sheet)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_x(spine)
        .into()
}

fn edge_overlay<'a>(shadow: Shadow, page_width: f32, height: f32) -> Element<'a, Message> {
    let band = Container::new(Space::new())
        .width(Length::Fixed(page_width * page::SHADOW_WIDTH_RATIO))
        .height(Length::Fixed(height))
        .style(container_styles::edge_shadow(shadow));

    // The shadow sits on the spine edge of the page.
    let align = match shadow {
        Shadow::Left => Horizontal::Right,
        Shadow::Right => Horizontal::Left,
    };
    Container::new(band)
        .width(Length::Fixed(page_width))
        .height(Length::Fixed(height))
        .align_x(align)
        .into()
}

/// Wraps the book in the desk background, centered in the window.
pub fn on_desk<'a>(book: Element<'a, Message>, desk: Color) -> Element<'a, Message> {
    Container::new(book)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(container_styles::desk(desk))
        .into()
}
