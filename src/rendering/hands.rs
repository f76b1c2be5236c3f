//! Immediate-mode hand drawing: one dot per landmark plus skeleton bones,
//! mirrored with the feed. Slot 0 is emerald, slot 1 violet, pinching amber.

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::interaction::{GrabBindings, HandSlots};
use crate::perception::landmarks::{to_world, HAND_SKELETON};
use crate::perception::{DetectedHands, ScreenBounds};

const SLOT_COLORS: [Color; 2] = [
    Color::srgb(0.063, 0.725, 0.506), // emerald
    Color::srgb(0.545, 0.361, 0.965), // violet
];
const PINCH_COLOR: Color = Color::srgb(0.984, 0.749, 0.141); // amber
const LANDMARK_RADIUS: f32 = 4.0;

pub fn draw_hands(
    mut gizmos: Gizmos,
    bounds: Res<ScreenBounds>,
    cfg: Res<GameConfig>,
    detected: Res<DetectedHands>,
    hands: Res<HandSlots>,
) {
    for (slot, hand) in detected.hands.iter().enumerate() {
        let Some(hand) = hand else { continue };
        let color = if hands.0[slot].pinching {
            PINCH_COLOR
        } else {
            SLOT_COLORS[slot % SLOT_COLORS.len()]
        };
        for (a, b) in HAND_SKELETON {
            gizmos.line_2d(
                to_world(hand.points[a].truncate(), bounds.0),
                to_world(hand.points[b].truncate(), bounds.0),
                color.with_alpha(0.5),
            );
        }
        for point in &hand.points {
            gizmos.circle_2d(to_world(point.truncate(), bounds.0), LANDMARK_RADIUS, color);
        }
        // capture radius hint around the fingertip while gripping
        if hands.0[slot].pinching {
            gizmos.circle_2d(
                hand.fingertip_world(bounds.0),
                cfg.grab.capture_radius,
                color.with_alpha(0.25),
            );
        }
    }
}

/// Held boxes glow amber; everything else stays slate.
pub fn tint_held_boxes(
    bindings: Res<GrabBindings>,
    mut boxes: Query<(Entity, &mut Sprite), With<crate::core::components::StackBox>>,
) {
    use crate::gameplay::spawn::{BOX_HELD_COLOR, BOX_IDLE_COLOR};
    for (entity, mut sprite) in boxes.iter_mut() {
        let held = bindings.holder_of(entity).is_some();
        let target = if held { BOX_HELD_COLOR } else { BOX_IDLE_COLOR };
        if sprite.color != target {
            sprite.color = target;
        }
    }
}
