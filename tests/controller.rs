// SPDX-License-Identifier: MPL-2.0
//! Navigation state of a 21-page book (cover plus 20 pages).
use flipbook::book::{
    Controller, Dependencies, EngineConfig, Page, PageContainer, Phase, Shadow, ShadowState,
    Viewport,
};
use flipbook::config::DisplayMode;
use flipbook::media::ImageData;
use iced::window;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const TOTAL: usize = 21;

fn container(total: usize) -> PageContainer {
    let mut container = PageContainer::new();
    for index in 0..total {
        let page = Page::new(index, PathBuf::from(format!("page_{index:03}.png"))).into_loaded();
        container
            .attach(page, ImageData::from_rgba(1, 1, vec![255; 4]))
            .expect("attach in order");
    }
    container
}

fn ready_book() -> Controller {
    let mut controller = Controller::new();
    let config = EngineConfig {
        duration: Duration::ZERO,
        mode: DisplayMode::Double,
        ..EngineConfig::default()
    };
    controller
        .initialize(
            container(TOTAL),
            Dependencies::resolve(Some(window::Id::unique()), "spread"),
            &config,
        )
        .expect("book initializes");
    controller
}

fn shadows(controller: &Controller) -> Vec<(usize, Shadow)> {
    controller.shadows().iter().collect()
}

#[test]
fn cover_has_right_shadow_and_only_next_enabled() {
    let controller = ready_book();
    assert_eq!(controller.viewport(), Some(Viewport::Single(1)));
    assert_eq!(shadows(&controller), vec![(0, Shadow::Right)]);
    assert!(!controller.nav_buttons().previous_enabled);
    assert!(controller.nav_buttons().next_enabled);
}

#[test]
fn last_page_alone_has_left_shadow_and_only_previous_enabled() {
    let mut controller = ready_book();
    controller.on_turned(21, Viewport::Single(21));
    assert_eq!(shadows(&controller), vec![(20, Shadow::Left)]);
    assert!(controller.nav_buttons().previous_enabled);
    assert!(!controller.nav_buttons().next_enabled);
}

#[test]
fn inner_spread_shadows_both_pages() {
    let mut controller = ready_book();
    controller.on_turned(5, Viewport::Spread(4, 5));
    assert_eq!(shadows(&controller), vec![(3, Shadow::Left), (4, Shadow::Right)]);
    assert!(controller.nav_buttons().previous_enabled);
    assert!(controller.nav_buttons().next_enabled);
}

#[test]
fn repeated_turn_notification_is_idempotent() {
    let mut controller = ready_book();
    controller.on_turned(5, Viewport::Spread(4, 5));
    let first = shadows(&controller);
    let first_nav = controller.nav_buttons();
    controller.on_turned(5, Viewport::Spread(4, 5));
    assert_eq!(shadows(&controller), first);
    assert_eq!(controller.nav_buttons(), first_nav);
}

#[test]
fn recompute_replaces_stale_shadows() {
    let mut state = ShadowState::new();
    state.recompute(5, &Viewport::Spread(4, 5), TOTAL);
    state.recompute(1, &Viewport::Single(1), TOTAL);
    assert_eq!(state.iter().collect::<Vec<_>>(), vec![(0, Shadow::Right)]);
}

#[test]
fn next_walks_spreads_to_the_end() {
    let mut controller = ready_book();
    let mut now = Instant::now();
    let mut seen = vec![controller.viewport()];
    for _ in 0..TOTAL {
        if !controller.nav_buttons().next_enabled {
            break;
        }
        controller.next(now);
        now += Duration::from_millis(10);
        controller.tick(now);
        assert_eq!(controller.phase(), Phase::Idle);
        seen.push(controller.viewport());
    }
    assert_eq!(seen.len(), 11);
    assert_eq!(seen.last().copied().flatten(), Some(Viewport::Spread(20, 21)));
    assert_eq!(controller.current_page(), TOTAL);
    assert!(!controller.nav_buttons().next_enabled);
    assert!(controller.at_end());
}

#[test]
fn last_spread_disables_next() {
    let mut controller = ready_book();
    let now = Instant::now();
    controller.go_to(20, now);
    controller.tick(now);
    assert_eq!(controller.viewport(), Some(Viewport::Spread(20, 21)));
    assert_eq!(controller.current_page(), 21);
    assert!(!controller.nav_buttons().next_enabled);
    assert!(controller.nav_buttons().previous_enabled);

    controller.next(now);
    controller.tick(now);
    assert_eq!(controller.current_page(), 21);
    assert_eq!(controller.phase(), Phase::Idle);
}

#[test]
fn mid_book_spread_reports_its_right_page() {
    let mut controller = ready_book();
    let now = Instant::now();
    controller.go_to(4, now);
    controller.tick(now);
    assert_eq!(controller.viewport(), Some(Viewport::Spread(4, 5)));
    assert_eq!(controller.current_page(), 5);
    assert_eq!(shadows(&controller), vec![(3, Shadow::Left), (4, Shadow::Right)]);
}

#[test]
fn navigation_before_ready_changes_nothing() {
    let mut controller = Controller::new();
    let now = Instant::now();
    controller.next(now);
    controller.previous(now);
    controller.go_to(7, now);
    assert!(!controller.is_ready());
    assert!(controller.viewport().is_none());
    assert!(controller.shadows().is_empty());
    assert!(!controller.nav_buttons().next_enabled);
}
