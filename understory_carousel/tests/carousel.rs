// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_carousel` crate.
//!
//! These drive a `Carousel` through the same interactions a user would:
//! button presses, direct slide controls, and pointer swipes.

use understory_carousel::{
    Action, Carousel, NavigationConfig, NavigationState, RawAction, SwipeThreshold, apply,
};

const WIDTH: f64 = 1600.0;

fn config(total: usize) -> NavigationConfig {
    NavigationConfig::new(total)
        .unwrap()
        .with_container_width(WIDTH)
        .unwrap()
        .with_swipe_threshold(SwipeThreshold::fraction(0.5).unwrap())
}

fn swipe(carousel: &mut Carousel, from: f64, to: f64) {
    carousel.dispatch(Action::PointerDown(from));
    carousel.dispatch(Action::PointerMove(to));
    carousel.dispatch(Action::PointerUp(to));
}

fn swipe_left(carousel: &mut Carousel) {
    swipe(carousel, WIDTH, WIDTH / 2.0 - 1.0);
}

fn swipe_right(carousel: &mut Carousel) {
    swipe(carousel, 0.0, WIDTH / 2.0 + 1.0);
}

#[test]
fn next_and_previous_move_the_track() {
    let mut carousel = Carousel::new(config(3));
    assert_eq!(carousel.track_position(), 0.0);

    carousel.next();
    assert_eq!(carousel.track_position(), -WIDTH);

    carousel.next();
    assert_eq!(carousel.track_position(), -WIDTH * 2.0);

    carousel.previous();
    assert_eq!(carousel.track_position(), -WIDTH);
}

#[test]
fn cannot_move_beyond_the_track_length() {
    let mut carousel = Carousel::new(config(3));
    carousel.previous();
    assert_eq!(carousel.track_position(), 0.0);

    for _ in 0..10 {
        carousel.next();
        assert!(carousel.view().visible_slide_index <= 2);
    }
    assert_eq!(carousel.view().visible_slide_index, 2);
    assert_eq!(carousel.track_position(), -WIDTH * 2.0);
}

#[test]
fn infinite_carousel_wraps_at_both_ends() {
    let mut carousel = Carousel::new(config(3).with_infinite(true));
    carousel.go_to(2);
    carousel.next();
    assert_eq!(carousel.view().visible_slide_index, 0);

    carousel.previous();
    assert_eq!(carousel.view().visible_slide_index, 2);
}

#[test]
fn go_to_round_trips_through_the_read_model() {
    for k in 0..5 {
        let mut carousel = Carousel::new(config(5));
        carousel.go_to(k);
        let view = carousel.view();
        assert_eq!(view.visible_slide_index, k);
        assert_eq!(view.track_position, -WIDTH * k as f64);
    }
}

#[test]
fn swipe_below_threshold_snaps_back() {
    let mut carousel = Carousel::new(config(3));
    carousel.go_to(1);
    swipe(&mut carousel, WIDTH, WIDTH - 1.0);

    assert_eq!(carousel.view().visible_slide_index, 1);
    assert_eq!(carousel.track_position(), -WIDTH);
    assert!(!carousel.state().is_swiping());
}

#[test]
fn swipe_past_threshold_commits() {
    let mut carousel = Carousel::new(config(3));

    swipe_left(&mut carousel);
    assert_eq!(carousel.track_position(), -WIDTH);

    swipe_left(&mut carousel);
    assert_eq!(carousel.track_position(), -WIDTH * 2.0);

    swipe_right(&mut carousel);
    assert_eq!(carousel.track_position(), -WIDTH);

    swipe_right(&mut carousel);
    assert_eq!(carousel.track_position(), 0.0);
}

#[test]
fn track_follows_the_pointer_mid_swipe() {
    let mut carousel = Carousel::new(config(3));
    carousel.dispatch(Action::PointerDown(WIDTH));
    carousel.dispatch(Action::PointerMove(WIDTH / 4.0));
    assert_eq!(carousel.track_position(), -WIDTH + WIDTH / 4.0);
}

#[test]
fn stray_move_and_up_leave_state_untouched() {
    let config = config(3);
    let state = NavigationState {
        visible_slide_index: 2,
        swipe_origin: None,
        swipe_distance: 0.0,
    };
    assert_eq!(apply(&state, Action::PointerMove(123.0), &config), state);
    assert_eq!(apply(&state, Action::PointerUp(123.0), &config), state);

    let mut carousel = Carousel::new(config);
    assert!(!carousel.dispatch(Action::PointerMove(5.0)));
    assert!(!carousel.dispatch(Action::PointerUp(5.0)));
    assert_eq!(*carousel.state(), NavigationState::new());
}

#[test]
fn disabled_threshold_never_commits() {
    let config = NavigationConfig::new(3)
        .unwrap()
        .with_container_width(WIDTH)
        .unwrap();
    let mut carousel = Carousel::new(config);

    for (from, to) in [(WIDTH, 0.0), (0.0, WIDTH * 10.0), (0.0, -1.0e12)] {
        swipe(&mut carousel, from, to);
        assert_eq!(carousel.view().visible_slide_index, 0);
        assert_eq!(carousel.state().swipe_distance, 0.0);
    }
}

#[test]
fn slide_controls_track_the_visible_slide() {
    let mut carousel = Carousel::new(config(3));
    assert!(carousel.slide_control(0).disabled);

    let control = carousel.slide_control(2);
    assert_eq!(control.label, "Go to slide 3 of 3");
    carousel.dispatch(control.action);

    assert_eq!(carousel.track_position(), -WIDTH * 2.0);
    assert!(!carousel.slide_control(0).disabled);
    assert!(carousel.slide_control(2).disabled);
}

#[test]
fn hidden_slides_follow_navigation() {
    let mut carousel = Carousel::new(config(3));
    carousel.next();
    assert!(carousel.slide(0).hidden);
    assert!(!carousel.slide(1).hidden);
    assert!(carousel.slide(2).hidden);
}

#[test]
fn raw_actions_drive_the_carousel() {
    let mut carousel = Carousel::new(config(3));
    for raw in [
        RawAction::new("next"),
        RawAction::with_x("pointerdown", WIDTH),
        RawAction::with_x("pointermove", 0.0),
        RawAction::with_x("pointerup", 0.0),
    ] {
        carousel.dispatch_raw(&raw).unwrap();
    }
    assert_eq!(carousel.view().visible_slide_index, 2);

    assert!(carousel.dispatch_raw(&RawAction::new("scroll")).is_err());
    assert_eq!(carousel.view().visible_slide_index, 2);
}
