use bevy::prelude::*;

use handstack::{GameConfig, GamePlugin};

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(about = "Hand-tracked box stacking minigame")]
struct Cli {
    /// Path to the RON game config.
    #[arg(long, default_value = "assets/config/game.ron")]
    config: std::path::PathBuf,
    /// Exit after this many seconds (overrides window.autoClose).
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    let cfg = load_config()?;
    for warning in cfg.validate() {
        eprintln!("config warning: {warning}");
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(cfg)
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> anyhow::Result<GameConfig> {
    use clap::Parser;
    let cli = Cli::parse();
    let (mut cfg, err) = GameConfig::load_or_default(&cli.config);
    if let Some(err) = err {
        eprintln!(
            "config {} unusable ({err}); continuing with defaults",
            cli.config.display()
        );
    }
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }
    Ok(cfg)
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> anyhow::Result<GameConfig> {
    // The hosting page has no filesystem; ship defaults.
    Ok(GameConfig::default())
}
