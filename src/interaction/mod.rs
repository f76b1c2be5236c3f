//! Interaction controller: hand kinematics, the grab/hold/release state
//! machine, and the fingertip-operated add-box button.

pub mod grab;
pub mod hand_state;
pub mod session;
pub mod spawn_button;

use bevy::prelude::*;

use crate::core::system::system_order::PrePhysicsSet;

pub use grab::{clamp_speed, GrabBinding, GrabBindings};
pub use hand_state::{HandSlots, HandState};
pub use spawn_button::{AddBoxButton, AddBoxRequested};

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HandSlots>()
            .init_resource::<GrabBindings>()
            .init_resource::<AddBoxButton>()
            .add_event::<AddBoxRequested>()
            .add_systems(
                Update,
                (
                    hand_state::update_hand_states,
                    grab::resolve_grabs,
                    spawn_button::update_add_box_button,
                )
                    .chain()
                    .in_set(PrePhysicsSet),
            );
    }
}
