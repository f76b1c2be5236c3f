#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::core::components::StackBox;
#[cfg(feature = "debug")]
use crate::gameplay::StackHeight;
#[cfg(feature = "debug")]
use crate::interaction::{GrabBindings, HandSlots};

#[cfg(feature = "debug")]
#[derive(Resource, Debug, Default)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub frame_counter: u64,
    pub box_count: usize,
    pub hands_tracked: usize,
    pub grabs_active: usize,
    pub stack_units: f32,
}

#[cfg(feature = "debug")]
pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut stats: ResMut<DebugStats>,
    hands: Res<HandSlots>,
    bindings: Res<GrabBindings>,
    height: Res<StackHeight>,
    q_boxes: Query<&StackBox>,
) {
    stats.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
    }
    let inst_ms = dt * 1000.0;
    if stats.frame_time_ms == 0.0 {
        stats.frame_time_ms = inst_ms;
    } else {
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }
    stats.box_count = q_boxes.iter().count();
    stats.hands_tracked = hands.0.iter().filter(|h| h.tracked).count();
    stats.grabs_active = (0..hands.0.len()).filter(|&s| bindings.get(s).is_some()).count();
    stats.stack_units = height.units;
}
