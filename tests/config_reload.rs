//! Config hot reload must push gravity and solver changes into the live
//! physics context, not just the `GameConfig` resource.

mod common;

use std::io::Write;
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier2d::prelude::*;

use handstack::interaction::session::config_hot_reload::{
    ConfigHotReloadPlugin, ConfigReloadSettings,
};
use handstack::physics::PhysicsSetupPlugin;
use handstack::GameConfig;

#[test]
fn reloaded_gravity_and_solver_reach_the_physics_context() {
    let mut file = tempfile::NamedTempFile::new().expect("temp config");
    write!(file, "(gravity: (y: -100.0), solver: (iterations: 6))").expect("write config");

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(TransformPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            common::DT,
        )))
        .insert_resource(GameConfig::default())
        .add_plugins((PhysicsSetupPlugin, ConfigHotReloadPlugin))
        .insert_resource(ConfigReloadSettings {
            paths: vec![file.path().to_path_buf()],
        });
    app.update(); // startup: defaults applied

    {
        let mut q = app.world_mut().query::<&RapierConfiguration>();
        let rapier = q.iter(app.world()).next().expect("rapier config");
        assert_eq!(rapier.gravity.y, GameConfig::default().gravity.y);
    }

    // the poll timer fires at 0.5s; give it a full second of frames
    common::step(&mut app, 60);

    assert_eq!(app.world().resource::<GameConfig>().gravity.y, -100.0);
    {
        let mut q = app.world_mut().query::<&RapierConfiguration>();
        let rapier = q.iter(app.world()).next().expect("rapier config");
        assert_eq!(rapier.gravity.y, -100.0);
    }
    let mut q = app.world_mut().query::<&RapierContextSimulation>();
    let sim = q.iter(app.world()).next().expect("rapier context");
    assert_eq!(sim.integration_parameters.num_solver_iterations.get(), 6);
}
