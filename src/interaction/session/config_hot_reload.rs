use bevy::prelude::*;
use std::{collections::HashMap, path::PathBuf, time::SystemTime};

use crate::core::config::GameConfig;

#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
}

impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("assets/config/game.ron"),
                PathBuf::from("assets/config/game.local.ron"),
            ],
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}

impl Default for ConfigReloadState {
    fn default() -> Self {
        Self {
            last_mod: HashMap::new(),
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
        }
    }
}

/// Native-only mtime polling of the config files. Later paths override earlier
/// ones wholesale (game.local.ron shadows game.ron); a file that fails to
/// parse is logged and skipped rather than clobbering the running config.
/// Window, gravity and solver changes are re-applied live; `floor` and the
/// `boxes` spawn set are read once at startup and take effect on restart.
pub struct ConfigHotReloadPlugin;

impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.init_resource::<ConfigReloadSettings>()
                .init_resource::<ConfigReloadState>()
                .add_systems(Update, poll_and_reload_config);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = app;
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<GameConfig>,
    mut windows: Query<&mut Window>,
    mut q_rapier: Query<&mut bevy_rapier2d::prelude::RapierConfiguration>,
    mut q_sim: Query<&mut bevy_rapier2d::prelude::RapierContextSimulation>,
) {
    use std::{fs, time::UNIX_EPOCH};

    if !state.timer.tick(time.delta()).finished() {
        return;
    }
    let mut dirty = false;
    for path in &settings.paths {
        let Ok(meta) = fs::metadata(path) else {
            continue;
        };
        let Ok(mod_time) = meta.modified() else {
            continue;
        };
        let entry = state.last_mod.entry(path.clone()).or_insert(UNIX_EPOCH);
        if mod_time > *entry {
            *entry = mod_time;
            dirty = true;
        }
    }
    if !dirty {
        return;
    }

    let mut new_cfg = None;
    for path in settings.paths.iter().filter(|p| p.exists()) {
        match GameConfig::load_from_file(path) {
            Ok(cfg) => new_cfg = Some(cfg),
            Err(e) => warn!("config hot-reload: {}: {e}", path.display()),
        }
    }
    let Some(new_cfg) = new_cfg else {
        return;
    };
    if *cfg_res == new_cfg {
        return;
    }
    for warning in new_cfg.validate() {
        warn!("config hot-reload: {warning}");
    }
    info!("config hot-reload applied");
    if let Ok(mut window) = windows.single_mut() {
        if window.width() != new_cfg.window.width || window.height() != new_cfg.window.height {
            window.resolution.set(new_cfg.window.width, new_cfg.window.height);
        }
        if window.title != new_cfg.window.title {
            window.title = new_cfg.window.title.clone();
        }
    }
    if let Ok(mut rapier) = q_rapier.single_mut() {
        rapier.gravity = bevy_rapier2d::prelude::Vect::new(0.0, new_cfg.gravity.y);
    }
    if let Ok(mut sim) = q_sim.single_mut() {
        if let Some(iterations) = std::num::NonZeroUsize::new(new_cfg.solver.iterations) {
            sim.integration_parameters.num_solver_iterations = iterations;
        }
    }
    *cfg_res = new_cfg;
}
