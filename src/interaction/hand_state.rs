//! Per-hand kinematic state derived from the raw detections.
//!
//! Two fixed slots mirror the detector's two-hand limit. Velocity and angular
//! velocity are exponentially smoothed so release launches inherit a stable
//! estimate instead of single-frame detector noise.

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::perception::{DetectedHands, ScreenBounds, MAX_HANDS};

#[derive(Debug, Clone, Copy)]
pub struct HandState {
    pub pos: Vec2,
    pub angle: f32,
    pub velocity: Vec2,
    pub angular_velocity: f32,
    /// Elapsed-time stamp of the last frame with an active pinch.
    pub last_pinch_time: f32,
    /// Elapsed-time stamp of the last frame this slot was detected at all.
    pub last_seen_time: f32,
    pub pinching: bool,
    pub was_pinching: bool,
    pub in_bounds: bool,
    pub tracked: bool,
}

impl Default for HandState {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            angle: 0.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            last_pinch_time: f32::NEG_INFINITY,
            last_seen_time: f32::NEG_INFINITY,
            pinching: false,
            was_pinching: false,
            in_bounds: false,
            tracked: false,
        }
    }
}

impl HandState {
    /// Pinch started this exact frame (used for button presses).
    pub fn pinch_started(&self) -> bool {
        self.pinching && !self.was_pinching
    }

    /// Gripping: a pinch happened within the grace window and the fingertip
    /// is currently inside the margin rect. The grace window smooths detector
    /// flicker without letting edge artifacts grab.
    pub fn gripping(&self, now: f32, grace_secs: f32) -> bool {
        self.tracked && self.in_bounds && now - self.last_pinch_time <= grace_secs
    }
}

#[derive(Resource, Debug, Default)]
pub struct HandSlots(pub [HandState; MAX_HANDS]);

/// One exponential smoothing step: `v += ((dp/dt) - v) * factor`.
pub fn smooth_velocity(v: Vec2, dp: Vec2, dt: f32, factor: f32) -> Vec2 {
    if dt <= 0.0 {
        return v;
    }
    v + (dp / dt - v) * factor
}

pub fn smooth_scalar(v: f32, dp: f32, dt: f32, factor: f32) -> f32 {
    if dt <= 0.0 {
        return v;
    }
    v + (dp / dt - v) * factor
}

/// Wrap an angle delta to the smallest equivalent signed angle.
pub fn wrap_angle(delta: f32) -> f32 {
    use std::f32::consts::PI;
    (delta + PI).rem_euclid(2.0 * PI) - PI
}

pub fn update_hand_states(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    bounds: Res<ScreenBounds>,
    detected: Res<DetectedHands>,
    mut slots: ResMut<HandSlots>,
) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();

    for (slot, hand) in detected.hands.iter().enumerate() {
        let state = &mut slots.0[slot];
        let Some(hand) = hand else {
            state.tracked = false;
            state.was_pinching = state.pinching;
            state.pinching = false;
            continue;
        };

        let pos = hand.fingertip_world(bounds.0);
        let angle = hand.grip_angle(bounds.0);
        let in_bounds = hand.fingertip_in_bounds(bounds.0, cfg.pinch.boundary_margin);
        let pinching = hand.is_pinching(bounds.0, cfg.pinch.threshold, cfg.pinch.boundary_margin);

        if state.tracked {
            state.velocity = smooth_velocity(state.velocity, pos - state.pos, dt, cfg.grab.accel_smooth);
            state.angular_velocity = smooth_scalar(
                state.angular_velocity,
                wrap_angle(angle - state.angle),
                dt,
                cfg.grab.accel_smooth,
            );
        } else {
            // fresh track: no usable displacement history
            state.velocity = Vec2::ZERO;
            state.angular_velocity = 0.0;
        }

        state.pos = pos;
        state.angle = angle;
        state.was_pinching = state.pinching;
        state.pinching = pinching;
        state.in_bounds = in_bounds;
        state.tracked = true;
        state.last_seen_time = now;
        if pinching {
            state.last_pinch_time = now;
        }
    }
}
