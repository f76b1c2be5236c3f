//! Debug module: feature gated runtime stats overlay & periodic logging.
//! Built only when compiled with `--features debug` (default-on).

#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod overlay;
#[cfg(feature = "debug")]
pub mod stats;

#[cfg(feature = "debug")]
use crate::core::system::system_order::PostPhysicsAdjustSet;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use logging::debug_logging_system;
        use overlay::debug_overlay_update;
        use stats::debug_stats_collect_system;

        app.init_resource::<stats::DebugStats>()
            .init_resource::<logging::DebugLogState>()
            .add_systems(Startup, overlay::debug_overlay_spawn)
            .add_systems(
                Update,
                (
                    debug_stats_collect_system,
                    debug_logging_system,
                    debug_overlay_update,
                )
                    .chain()
                    .after(PostPhysicsAdjustSet),
            );
    }
}


#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
