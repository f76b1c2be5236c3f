//! Pinching on the add-box button spawns exactly one new box per pinch.

mod common;

use bevy::prelude::*;
use common::*;
use handstack::StackBox;

// button center on the default 1280x720 board: 160x56 rect, inset 24,
// anchored to the bottom-right corner
const BUTTON_CENTER: Vec2 = Vec2::new(536.0, -308.0);

fn box_count(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, With<StackBox>>()
        .iter(app.world())
        .count()
}

#[test]
fn pinching_on_the_button_spawns_one_box() {
    let mut app = headless_app(bare_config());
    assert_eq!(box_count(&mut app), 0);

    set_hand(&mut app, 0, BUTTON_CENTER, false);
    step(&mut app, 2);
    set_hand(&mut app, 0, BUTTON_CENTER, true);
    step(&mut app, 3);
    assert_eq!(box_count(&mut app), 1);

    // holding the pinch must not keep spawning
    for _ in 0..20 {
        set_hand(&mut app, 0, BUTTON_CENTER, true);
        step(&mut app, 1);
    }
    assert_eq!(box_count(&mut app), 1);
}

#[test]
fn repinching_spawns_again() {
    let mut app = headless_app(bare_config());

    for expected in 1..=3 {
        set_hand(&mut app, 0, BUTTON_CENTER, false);
        step(&mut app, 10);
        set_hand(&mut app, 0, BUTTON_CENTER, true);
        step(&mut app, 10);
        assert_eq!(box_count(&mut app), expected);
    }
}

#[test]
fn pinching_away_from_the_button_spawns_nothing() {
    let mut app = headless_app(bare_config());

    set_hand(&mut app, 0, Vec2::new(0.0, 0.0), false);
    step(&mut app, 2);
    set_hand(&mut app, 0, Vec2::new(0.0, 0.0), true);
    step(&mut app, 3);
    assert_eq!(box_count(&mut app), 0);
}
