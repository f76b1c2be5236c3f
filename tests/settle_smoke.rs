//! Boxes dropped over the floor must come to rest on it, and a single
//! settled layer must report a stack height of zero.

mod common;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use common::*;
use handstack::StackHeight;

#[test]
fn solver_iterations_follow_config() {
    let mut cfg = bare_config();
    cfg.solver.iterations = 9;
    let mut app = headless_app(cfg);
    let mut q = app.world_mut().query::<&RapierContextSimulation>();
    let sim = q.iter(app.world()).next().expect("rapier context");
    assert_eq!(sim.integration_parameters.num_solver_iterations.get(), 9);
}

#[test]
fn dropped_boxes_settle_on_the_floor() {
    let mut app = headless_app(bare_config());
    let boxes = [
        spawn_test_box(&mut app, Vec2::new(-150.0, 0.0)),
        spawn_test_box(&mut app, Vec2::new(0.0, 0.0)),
        spawn_test_box(&mut app, Vec2::new(150.0, 0.0)),
    ];
    step(&mut app, 300); // 5 simulated seconds

    // floor top is -300 on a 720-high board, half extent 40
    for e in boxes {
        let pos = box_pos(&app, e);
        assert!(
            (pos.y - (-260.0)).abs() < 15.0,
            "box should rest on the floor, got y={}",
            pos.y
        );
        let v = box_velocity(&app, e);
        assert!(v.length() < 20.0, "box still moving at {} px/s", v.length());
    }
}

#[test]
fn a_single_settled_layer_reads_zero_height() {
    let mut app = headless_app(bare_config());
    spawn_test_box(&mut app, Vec2::new(-150.0, 0.0));
    spawn_test_box(&mut app, Vec2::new(150.0, 0.0));
    step(&mut app, 300);

    let height = app.world().resource::<StackHeight>();
    assert!(
        height.px < 6.0,
        "floor layer should read ~0, got {}px",
        height.px
    );
    assert!(height.units < 2.0);
}

#[test]
fn a_two_box_tower_reads_one_box_of_height() {
    let mut app = headless_app(bare_config());
    spawn_test_box(&mut app, Vec2::new(0.0, -200.0));
    spawn_test_box(&mut app, Vec2::new(0.0, -100.0));
    step(&mut app, 300);

    let height = app.world().resource::<StackHeight>();
    assert!(
        (height.px - 80.0).abs() < 10.0,
        "two-box tower should read ~80px, got {}px",
        height.px
    );
}
