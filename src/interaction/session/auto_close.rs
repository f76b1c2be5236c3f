use bevy::prelude::*;

use crate::core::config::GameConfig;

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, check_autoclose);
    }
}

/// `window.autoClose` seconds of runtime, then a clean exit. Used by scripted
/// smoke runs; 0 disables.
fn check_autoclose(time: Res<Time>, cfg: Res<GameConfig>, mut ev_exit: EventWriter<AppExit>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 && time.elapsed_secs() >= secs {
        info!("AutoClose: {secs}s elapsed, requesting app exit");
        ev_exit.write(AppExit::Success);
    }
}
