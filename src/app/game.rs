use bevy::prelude::*;

use crate::core::system::system_order::{PerceptionSet, PostPhysicsAdjustSet, PrePhysicsSet};
use crate::debug::DebugPlugin;
use crate::gameplay::{BoxSpawnPlugin, StackHeightPlugin};
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::interaction::InteractionPlugin;
use crate::perception::PerceptionPlugin;
use crate::physics::{BoundsRecoveryPlugin, PhysicsSetupPlugin};
use crate::rendering::{CameraPlugin, HudPlugin};

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                PerceptionSet,
                PrePhysicsSet.after(PerceptionSet),
                PostPhysicsAdjustSet.after(PrePhysicsSet),
            ),
        )
        .add_plugins((
            CameraPlugin,
            PhysicsSetupPlugin,
            PerceptionPlugin::default(),
            InteractionPlugin,
            BoxSpawnPlugin,
            BoundsRecoveryPlugin,
            StackHeightPlugin,
            HudPlugin,
            DebugPlugin,
            ConfigHotReloadPlugin,
            AutoClosePlugin,
        ));
    }
}

/// Everything except camera/HUD/debug: the set the scenario tests run
/// headless under `MinimalPlugins`.
pub struct HeadlessGamePlugin;

impl Plugin for HeadlessGamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                PerceptionSet,
                PrePhysicsSet.after(PerceptionSet),
                PostPhysicsAdjustSet.after(PrePhysicsSet),
            ),
        )
        .add_plugins((
            PhysicsSetupPlugin,
            PerceptionPlugin::headless(),
            InteractionPlugin,
            BoxSpawnPlugin,
            BoundsRecoveryPlugin,
            StackHeightPlugin,
        ));
    }
}
