//! Escaped bodies are recycled back onto the board instead of falling forever.

mod common;

use bevy::prelude::*;
use common::*;
use handstack::GrabBindings;

#[test]
fn a_box_far_outside_the_board_is_teleported_back() {
    let mut cfg = bare_config();
    cfg.gravity.y = 0.0;
    let mut app = headless_app(cfg);
    let e = spawn_test_box(&mut app, Vec2::new(2000.0, 0.0));
    step(&mut app, 3);

    let pos = box_pos(&app, e);
    // respawn point is centered, a quarter board-height up
    assert!(
        pos.distance(Vec2::new(0.0, 180.0)) < 5.0,
        "expected respawn near (0, 180), got {pos:?}"
    );
    assert!(box_velocity(&app, e).length() < 1.0);
}

#[test]
fn a_box_inside_the_padding_band_is_left_alone() {
    let mut cfg = bare_config();
    cfg.gravity.y = 0.0;
    let mut app = headless_app(cfg);
    // half-width 640 + padding 100 = 740; 700 is past the edge but inside the band
    let e = spawn_test_box(&mut app, Vec2::new(700.0, 0.0));
    step(&mut app, 3);

    let pos = box_pos(&app, e);
    assert!(pos.distance(Vec2::new(700.0, 0.0)) < 1.0, "got {pos:?}");
}

#[test]
fn recovery_of_a_held_box_also_drops_the_binding() {
    let mut cfg = bare_config();
    cfg.gravity.y = 0.0;
    cfg.bounds.padding = 100.0;
    let mut app = headless_app(cfg);
    let start = Vec2::new(600.0, 0.0);
    let e = spawn_test_box(&mut app, start);
    step(&mut app, 1);

    set_hand(&mut app, 0, start, true);
    step(&mut app, 2);
    assert_eq!(app.world().resource::<GrabBindings>().holder_of(e), Some(0));

    // force the body out of bounds while it is held
    {
        let mut tf = app
            .world_mut()
            .get_mut::<Transform>(e)
            .unwrap();
        tf.translation.x = 3000.0;
    }
    clear_hand(&mut app, 0); // hand drops out in the same breath
    step(&mut app, 3);

    assert!(app.world().resource::<GrabBindings>().holder_of(e).is_none());
    let pos = box_pos(&app, e);
    assert!(pos.distance(Vec2::new(0.0, 180.0)) < 5.0, "got {pos:?}");
}
