pub mod bounds;
pub mod world;

use bevy::prelude::*;

use crate::core::system::system_order::PostPhysicsAdjustSet;

pub use world::{floor_top, FloorLevel, PhysicsSetupPlugin};

pub struct BoundsRecoveryPlugin;

impl Plugin for BoundsRecoveryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            bounds::recover_out_of_bounds.in_set(PostPhysicsAdjustSet),
        );
    }
}
