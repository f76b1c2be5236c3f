//! Soft out-of-bounds recovery.
//!
//! A fast launch or a solver blow-up can push a box far outside the play
//! area. Instead of losing the body forever it is teleported back to the
//! spawn point with zeroed velocity, gravity restored, and any grab on it
//! force-released.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::StackBox;
use crate::core::config::GameConfig;
use crate::gameplay::spawn::spawn_point;
use crate::interaction::GrabBindings;
use crate::perception::ScreenBounds;

pub fn recover_out_of_bounds(
    cfg: Res<GameConfig>,
    bounds: Res<ScreenBounds>,
    mut bindings: ResMut<GrabBindings>,
    mut boxes: Query<
        (Entity, &mut Transform, &mut Velocity, &mut GravityScale),
        With<StackBox>,
    >,
) {
    let half = bounds.0 * 0.5 + Vec2::splat(cfg.bounds.padding);
    let respawn = spawn_point(bounds.0, cfg.boxes.spawn_height_frac);
    for (entity, mut tf, mut vel, mut gravity) in boxes.iter_mut() {
        let pos = tf.translation.truncate();
        if pos.x.abs() <= half.x && pos.y.abs() <= half.y {
            continue;
        }
        tf.translation = respawn.extend(tf.translation.z);
        tf.rotation = Quat::IDENTITY;
        *vel = Velocity::zero();
        gravity.0 = 1.0;
        if bindings.release_entity(entity) {
            info!("box {entity} escaped bounds while held; grab released");
        } else {
            info!("box {entity} escaped bounds; recentred");
        }
    }
}
