#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use super::stats::DebugStats;

#[cfg(feature = "debug")]
#[derive(Resource)]
pub struct DebugLogState {
    pub log_interval: f32,
    pub time_accum: f32,
}

#[cfg(feature = "debug")]
impl Default for DebugLogState {
    fn default() -> Self {
        Self {
            log_interval: 1.0,
            time_accum: 0.0,
        }
    }
}

#[cfg(feature = "debug")]
pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugLogState>,
    stats: Res<DebugStats>,
) {
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(
            "SIM frame={} t={:.3}s fps={:.1} ft_ms={:.1} boxes={} hands={} grabs={} stack={:.0}cm",
            stats.frame_counter,
            time.elapsed_secs(),
            stats.fps,
            stats.frame_time_ms,
            stats.box_count,
            stats.hands_tracked,
            stats.grabs_active,
            stats.stack_units
        );
    }
}
