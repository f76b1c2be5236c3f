pub mod camera;
pub mod hands;
pub mod hud;

use bevy::prelude::*;

use crate::core::system::system_order::PostPhysicsAdjustSet;

pub use camera::CameraPlugin;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, hud::spawn_hud).add_systems(
            Update,
            (
                hands::draw_hands,
                hands::tint_held_boxes,
                hud::update_height_readout,
                hud::update_button_visual,
            )
                .after(PostPhysicsAdjustSet),
        );
    }
}
