#[cfg(feature = "debug")]
use bevy::prelude::*;
// Bevy 0.16 text API uses components: Text, TextFont, TextColor, Node for UI text.
#[cfg(feature = "debug")]
use super::stats::DebugStats;

#[cfg(feature = "debug")]
#[derive(Component)]
pub(crate) struct DebugOverlayText;

#[cfg(feature = "debug")]
pub fn debug_overlay_spawn(mut commands: Commands) {
    // Top-right anchored UI text node (top-left belongs to the height readout).
    commands.spawn((
        Text::new(String::new()),
        TextFont {
            font_size: 13.0,
            ..Default::default()
        },
        TextColor(Color::srgb(0.75, 0.85, 0.95)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(4.0),
            right: Val::Px(6.0),
            ..Default::default()
        },
        DebugOverlayText,
    ));
}

#[cfg(feature = "debug")]
pub fn debug_overlay_update(
    stats: Res<DebugStats>,
    mut q: Query<&mut Text, With<DebugOverlayText>>,
) {
    let Ok(mut text) = q.single_mut() else {
        return;
    };
    text.0 = format!(
        "fps {:.0} | {:.1} ms\nboxes {} | hands {} | grabs {}",
        stats.fps, stats.frame_time_ms, stats.box_count, stats.hands_tracked, stats.grabs_active
    );
}
