//! Pointer-simulated hand (native builds).
//!
//! The cursor drives the index fingertip and the left mouse button closes the
//! pinch; holding the right button rotates the grip. No camera or detector is
//! required, which keeps native development and the scenario tests honest: the
//! whole interaction pipeline downstream of [`DetectedHands`] is identical.

use bevy::prelude::*;

use super::landmarks::{screen_px_to_landmark, HandLandmarks};
use super::{DetectedHands, ScreenBounds};

/// Radians per second of grip rotation while the right button is held.
const TWIST_RATE: f32 = 1.6;

#[derive(Default)]
pub struct PointerGrip {
    angle: f32,
}

pub fn emit_pointer_hand(
    time: Res<Time>,
    bounds: Res<ScreenBounds>,
    windows: Query<&Window>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut grip: Local<PointerGrip>,
    mut detected: ResMut<DetectedHands>,
) {
    detected.hands = [None; super::MAX_HANDS];
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    if buttons.pressed(MouseButton::Right) {
        grip.angle += TWIST_RATE * time.delta_secs();
    }
    let fingertip = screen_px_to_landmark(cursor, bounds.0);
    let pinching = buttons.pressed(MouseButton::Left);
    detected.hands[0] = Some(HandLandmarks::synthetic(fingertip, grip.angle, pinching));
}
