use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::Ground;
use crate::core::config::GameConfig;

/// World-space Y of the floor surface (top edge of the ground collider).
#[derive(Resource, Debug, Clone, Copy)]
pub struct FloorLevel {
    pub top: f32,
}

pub fn floor_top(cfg: &GameConfig) -> f32 {
    -cfg.window.height * 0.5 + cfg.floor.height_from_bottom
}

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & the ground

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            // fixed sub-stepping: 4 substeps of 1/240 per rendered frame,
            // so simulation stability is decoupled from frame-rate jitter
            .insert_resource(TimestepMode::Fixed {
                dt: 1.0 / 60.0,
                substeps: 4,
            })
            .add_systems(Startup, (configure_gravity, configure_solver, spawn_ground));
    }
}

fn configure_gravity(mut q_cfg: Query<&mut RapierConfiguration>, game_cfg: Res<GameConfig>) {
    // RapierConfiguration is queried as a component on the context entity
    // (bevy_rapier 0.28+ multi-context API).
    if let Ok(mut cfg) = q_cfg.single_mut() {
        cfg.gravity = Vect::new(0.0, game_cfg.gravity.y);
    }
}

fn configure_solver(mut q_sim: Query<&mut RapierContextSimulation>, game_cfg: Res<GameConfig>) {
    // Tower stability depends on contact convergence; the engine default
    // (4 iterations) lets tall stacks creep.
    if let Ok(mut sim) = q_sim.single_mut() {
        if let Some(iterations) = std::num::NonZeroUsize::new(game_cfg.solver.iterations) {
            sim.integration_parameters.num_solver_iterations = iterations;
        }
    }
}

fn spawn_ground(mut commands: Commands, cfg: Res<GameConfig>) {
    let top = floor_top(&cfg);
    let half_thickness = cfg.floor.thickness * 0.5;
    let half_width = cfg.window.width; // overhang so boxes cannot slip off-screen edges
    commands.insert_resource(FloorLevel { top });
    commands.spawn((
        Ground,
        RigidBody::Fixed,
        Collider::cuboid(half_width, half_thickness),
        Friction::coefficient(cfg.floor.friction),
        Restitution::coefficient(cfg.floor.restitution),
        Transform::from_xyz(0.0, top - half_thickness, 0.0),
        GlobalTransform::default(),
        Sprite {
            color: Color::srgb_u8(30, 41, 59),
            custom_size: Some(Vec2::new(half_width * 2.0, cfg.floor.thickness)),
            ..default()
        },
    ));
}
