//! Perception adapter: turns external hand-landmark detections into the
//! [`DetectedHands`] resource, one write per frame.
//!
//! Two backends exist behind the same resource contract:
//! - native: [`pointer`] synthesizes a hand from the mouse cursor, so the game
//!   is playable without a camera (simulation mode);
//! - wasm32: [`bridge`] receives MediaPipe landmarks pushed by the hosting
//!   page's detector loop.

pub mod landmarks;
#[cfg(not(target_arch = "wasm32"))]
pub mod pointer;

#[cfg(target_arch = "wasm32")]
pub mod bridge;

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::PerceptionSet;
use landmarks::HandLandmarks;

/// Fixed hand slot count (detector is configured for at most two hands).
pub const MAX_HANDS: usize = 2;

/// Per-frame detector output. Slot order is the detector's hand order.
#[derive(Resource, Debug, Default, Clone)]
pub struct DetectedHands {
    pub hands: [Option<HandLandmarks>; MAX_HANDS],
}

/// Logical pixel size of the play area. Mirrors the primary window when one
/// exists; headless runs keep the configured size.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ScreenBounds(pub Vec2);

pub struct PerceptionPlugin {
    /// Run the pointer-simulated hand backend (native). Headless scenario
    /// tests disable it and write [`DetectedHands`] themselves.
    pub simulate_pointer: bool,
}

impl Default for PerceptionPlugin {
    fn default() -> Self {
        Self {
            simulate_pointer: true,
        }
    }
}

impl PerceptionPlugin {
    pub fn headless() -> Self {
        Self {
            simulate_pointer: false,
        }
    }
}

impl Plugin for PerceptionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DetectedHands>()
            .add_systems(Startup, init_screen_bounds)
            .add_systems(Update, sync_screen_bounds.in_set(PerceptionSet));

        #[cfg(not(target_arch = "wasm32"))]
        if self.simulate_pointer {
            app.add_systems(
                Update,
                pointer::emit_pointer_hand
                    .in_set(PerceptionSet)
                    .after(sync_screen_bounds),
            );
        }

        #[cfg(target_arch = "wasm32")]
        {
            app.add_systems(Startup, bridge::install_panic_hook);
            app.add_systems(
                Update,
                bridge::drain_bridge_frames
                    .in_set(PerceptionSet)
                    .after(sync_screen_bounds),
            );
        }
    }
}

fn init_screen_bounds(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.insert_resource(ScreenBounds(Vec2::new(cfg.window.width, cfg.window.height)));
}

fn sync_screen_bounds(windows: Query<&Window>, bounds: Option<ResMut<ScreenBounds>>) {
    let (Ok(window), Some(mut bounds)) = (windows.single(), bounds) else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    if size.x > 0.0 && size.y > 0.0 && bounds.0 != size {
        bounds.0 = size;
    }
}
