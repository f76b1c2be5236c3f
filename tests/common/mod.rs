//! Shared harness for the headless scenario tests: a `MinimalPlugins` app
//! with real Rapier stepping at a fixed 1/60 per update, and helpers to
//! inject synthetic hand detections.
#![allow(dead_code)]

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier2d::prelude::*;
use std::time::Duration;

use handstack::core::components::{BoxHalfExtent, StackBox};
use handstack::perception::landmarks::{screen_px_to_landmark, world_to_screen_px};
use handstack::{DetectedHands, GameConfig, HandLandmarks, HeadlessGamePlugin, ScreenBounds};

pub const DT: f64 = 1.0 / 60.0;

/// Config with no startup boxes so each test controls its own scene.
pub fn bare_config() -> GameConfig {
    let mut cfg = GameConfig::default();
    cfg.boxes.count = 0;
    cfg
}

pub fn headless_app(cfg: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(TransformPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(DT)))
        .insert_resource(cfg)
        .add_plugins(HeadlessGamePlugin);
    // run startup: ground, rapier context, screen bounds
    app.update();
    app
}

pub fn step(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

pub fn spawn_test_box(app: &mut App, pos: Vec2) -> Entity {
    let (half, size, density, friction, restitution, lin_damp, ang_damp) = {
        let cfg = app.world().resource::<GameConfig>();
        (
            cfg.boxes.size * 0.5,
            cfg.boxes.size,
            cfg.boxes.density,
            cfg.boxes.friction,
            cfg.boxes.restitution,
            cfg.boxes.linear_damping,
            cfg.boxes.angular_damping,
        )
    };
    app.world_mut()
        .spawn((
            StackBox,
            BoxHalfExtent(half),
            Transform::from_translation(pos.extend(0.0)),
            GlobalTransform::default(),
            RigidBody::Dynamic,
            Collider::cuboid(half, half),
            ColliderMassProperties::Density(density),
            Friction::coefficient(friction),
            Restitution::coefficient(restitution),
            Damping {
                linear_damping: lin_damp,
                angular_damping: ang_damp,
            },
            Velocity::zero(),
            GravityScale(1.0),
            Ccd::enabled(),
            Sleeping::disabled(),
        ))
        .id()
}

/// Place a synthetic hand in `slot` with its fingertip at a world position.
pub fn set_hand(app: &mut App, slot: usize, fingertip_world: Vec2, pinching: bool) {
    let bounds = app.world().resource::<ScreenBounds>().0;
    let lm = screen_px_to_landmark(world_to_screen_px(fingertip_world, bounds), bounds);
    let hand = HandLandmarks::synthetic(lm, 0.0, pinching);
    app.world_mut().resource_mut::<DetectedHands>().hands[slot] = Some(hand);
}

pub fn clear_hand(app: &mut App, slot: usize) {
    app.world_mut().resource_mut::<DetectedHands>().hands[slot] = None;
}

pub fn box_pos(app: &App, entity: Entity) -> Vec2 {
    app.world()
        .get::<Transform>(entity)
        .expect("box transform")
        .translation
        .truncate()
}

pub fn box_velocity(app: &App, entity: Entity) -> Vec2 {
    app.world().get::<Velocity>(entity).expect("box velocity").linvel
}

pub fn gravity_scale(app: &App, entity: Entity) -> f32 {
    app.world().get::<GravityScale>(entity).expect("gravity scale").0
}
