//! JS -> wasm landmark bridge.
//!
//! The hosting page runs the MediaPipe `HandLandmarker` against the camera
//! feed and pushes each result here as one flat `Float32Array`:
//! `hands * 21 * 3` values (x, y, z per landmark, normalized `[0,1]`).
//! Malformed payloads are logged and dropped; a bad detector frame must never
//! take the loop down.

use bevy::prelude::*;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::landmarks::{HandLandmarks, LANDMARK_COUNT};
use super::{DetectedHands, MAX_HANDS};

const FLOATS_PER_HAND: usize = LANDMARK_COUNT * 3;

thread_local! {
    // wasm is single-threaded; the page writes, the schedule reads.
    static PENDING: RefCell<Option<DetectedHands>> = const { RefCell::new(None) };
}

/// Called from JavaScript once per detector result.
#[wasm_bindgen]
pub fn push_hand_frame(data: &[f32]) {
    if data.len() % FLOATS_PER_HAND != 0 || data.len() > MAX_HANDS * FLOATS_PER_HAND {
        warn!(
            "dropping landmark payload of {} floats (expected a multiple of {FLOATS_PER_HAND}, at most {MAX_HANDS} hands)",
            data.len()
        );
        return;
    }
    let mut frame = DetectedHands::default();
    for (slot, chunk) in data.chunks_exact(FLOATS_PER_HAND).enumerate() {
        let mut points = [Vec3::ZERO; LANDMARK_COUNT];
        for (p, xyz) in points.iter_mut().zip(chunk.chunks_exact(3)) {
            *p = Vec3::new(xyz[0], xyz[1], xyz[2]);
        }
        frame.hands[slot] = Some(HandLandmarks { points });
    }
    PENDING.with(|p| *p.borrow_mut() = Some(frame));
}

/// Detector results arrive slower than the frame rate, so the last frame
/// holds until the page pushes a new one. A zero-length payload clears the
/// hands explicitly.
pub fn drain_bridge_frames(mut detected: ResMut<DetectedHands>) {
    if let Some(frame) = PENDING.with(|p| p.borrow_mut().take()) {
        *detected = frame;
    }
}

pub fn install_panic_hook() {
    console_error_panic_hook::set_once();
}
