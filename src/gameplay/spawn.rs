use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::core::components::{BoxHalfExtent, StackBox};
use crate::core::config::GameConfig;
use crate::interaction::AddBoxRequested;
use crate::perception::ScreenBounds;

/// Where recovered and initial boxes (re)appear: upper centre of the screen.
pub fn spawn_point(bounds: Vec2, height_frac: f32) -> Vec2 {
    Vec2::new(0.0, bounds.y * height_frac)
}

pub const BOX_IDLE_COLOR: Color = Color::srgb(0.278, 0.333, 0.412); // slate
pub const BOX_HELD_COLOR: Color = Color::srgb(0.984, 0.749, 0.141); // amber

/// Shared by startup spawning and the add-box action.
pub fn spawn_box_entity(commands: &mut Commands, cfg: &GameConfig, pos: Vec2) -> Entity {
    let half = cfg.boxes.size * 0.5;
    commands
        .spawn((
            StackBox,
            BoxHalfExtent(half),
            Transform::from_translation(pos.extend(0.0)),
            GlobalTransform::default(),
            RigidBody::Dynamic,
            Collider::cuboid(half, half),
            ColliderMassProperties::Density(cfg.boxes.density),
            Friction::coefficient(cfg.boxes.friction),
            Restitution::coefficient(cfg.boxes.restitution),
            Damping {
                linear_damping: cfg.boxes.linear_damping,
                angular_damping: cfg.boxes.angular_damping,
            },
            Velocity::zero(),
            GravityScale(1.0),
            // fast hand motion must not tunnel through the stack
            Ccd::enabled(),
            Sleeping::disabled(),
            Sprite {
                color: BOX_IDLE_COLOR,
                custom_size: Some(Vec2::splat(cfg.boxes.size)),
                ..default()
            },
        ))
        .id()
}

pub struct BoxSpawnPlugin;

impl Plugin for BoxSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_initial_boxes)
            .add_systems(Update, handle_add_box);
    }
}

fn spawn_initial_boxes(mut commands: Commands, cfg: Res<GameConfig>) {
    let bounds = Vec2::new(cfg.window.width, cfg.window.height);
    let base = spawn_point(bounds, cfg.boxes.spawn_height_frac);
    let mut rng = rand::thread_rng();
    for i in 0..cfg.boxes.count {
        // fan the fixed spawn set out horizontally so boxes do not stack
        // inside each other on frame one
        let spread = (i as f32 - (cfg.boxes.count.saturating_sub(1)) as f32 * 0.5)
            * cfg.boxes.size
            * 1.5;
        let jitter = rng.gen_range(-cfg.boxes.jitter..=cfg.boxes.jitter);
        spawn_box_entity(
            &mut commands,
            &cfg,
            base + Vec2::new(spread + jitter * 0.2, (i as f32) * cfg.boxes.size * 0.3),
        );
    }
}

fn handle_add_box(
    mut commands: Commands,
    mut requests: EventReader<AddBoxRequested>,
    cfg: Res<GameConfig>,
    bounds: Res<ScreenBounds>,
) {
    let mut rng = rand::thread_rng();
    for _ in requests.read() {
        let jitter = Vec2::new(
            rng.gen_range(-cfg.boxes.jitter..=cfg.boxes.jitter) * 0.25,
            rng.gen_range(0.0..=cfg.boxes.jitter) * 0.25,
        );
        let entity = spawn_box_entity(
            &mut commands,
            &cfg,
            spawn_point(bounds.0, cfg.boxes.spawn_height_frac) + jitter,
        );
        info!("add-box pressed; spawned {entity}");
    }
}
