//! Grab/hold/release resolution.
//!
//! A gripping hand within the capture radius binds to a box, suspends its
//! gravity, and drives it with a spring-damper velocity command; release hands
//! the smoothed hand velocity over as a clamped launch. Driving through
//! `Velocity` instead of writing the transform keeps Rapier's collision
//! response intact while the box is held.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::StackBox;
use crate::core::config::GameConfig;
use crate::perception::MAX_HANDS;

use super::hand_state::{wrap_angle, HandSlots};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrabBinding {
    pub entity: Entity,
    /// Box centre relative to the fingertip, captured at grab time.
    pub offset: Vec2,
    /// Box rotation relative to the grip angle, captured at grab time.
    pub rot_offset: f32,
}

/// Per-hand-slot bindings. Invariants enforced here, not at the call sites:
/// a hand holds at most one box, and a box is held by at most one hand.
#[derive(Resource, Debug, Default)]
pub struct GrabBindings {
    slots: [Option<GrabBinding>; MAX_HANDS],
}

impl GrabBindings {
    pub fn get(&self, slot: usize) -> Option<&GrabBinding> {
        self.slots.get(slot).and_then(|b| b.as_ref())
    }

    pub fn holder_of(&self, entity: Entity) -> Option<usize> {
        self.slots
            .iter()
            .position(|b| b.map(|b| b.entity) == Some(entity))
    }

    pub fn any_held(&self) -> bool {
        self.slots.iter().any(|b| b.is_some())
    }

    /// Bind `slot` to a box. No-op (returns false) if the hand already holds
    /// something or another hand holds this box — first hand wins.
    pub fn try_bind(&mut self, slot: usize, binding: GrabBinding) -> bool {
        if self.slots[slot].is_some() || self.holder_of(binding.entity).is_some() {
            return false;
        }
        self.slots[slot] = Some(binding);
        true
    }

    pub fn release(&mut self, slot: usize) -> Option<GrabBinding> {
        self.slots[slot].take()
    }

    /// Drop whichever slot holds `entity` (out-of-bounds recovery path).
    pub fn release_entity(&mut self, entity: Entity) -> bool {
        match self.holder_of(entity) {
            Some(slot) => {
                self.slots[slot] = None;
                true
            }
            None => false,
        }
    }
}

/// Clamp a launch velocity to the configured speed cap.
pub fn clamp_speed(v: Vec2, max_speed: f32) -> Vec2 {
    let speed = v.length();
    if speed > max_speed {
        v * (max_speed / speed)
    } else {
        v
    }
}

fn rotation_z(tf: &Transform) -> f32 {
    tf.rotation.to_euler(EulerRot::ZYX).0
}

pub fn resolve_grabs(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    hands: Res<HandSlots>,
    mut bindings: ResMut<GrabBindings>,
    mut boxes: Query<(Entity, &Transform, &mut Velocity, &mut GravityScale), With<StackBox>>,
) {
    let now = time.elapsed_secs();
    let grace = cfg.pinch.grace_secs;

    for slot in 0..MAX_HANDS {
        let hand = hands.0[slot];

        if !hand.tracked {
            // Detector dropout: after the grace window the box is let go with
            // whatever velocity the hand last had.
            if bindings.get(slot).is_some() && now - hand.last_seen_time > grace {
                release_slot(slot, &hands, &cfg, &mut bindings, &mut boxes);
            }
            continue;
        }

        if hand.gripping(now, grace) {
            if bindings.get(slot).is_none() {
                acquire(slot, &hands, &cfg, &mut bindings, &mut boxes);
            }
            if let Some(binding) = bindings.get(slot).copied() {
                drive_held_box(slot, binding, &hands, &cfg, &mut boxes);
            }
        } else if bindings.get(slot).is_some() {
            release_slot(slot, &hands, &cfg, &mut bindings, &mut boxes);
        }
    }
}

fn acquire(
    slot: usize,
    hands: &HandSlots,
    cfg: &GameConfig,
    bindings: &mut GrabBindings,
    boxes: &mut Query<(Entity, &Transform, &mut Velocity, &mut GravityScale), With<StackBox>>,
) {
    let hand = &hands.0[slot];
    let r2 = cfg.grab.capture_radius * cfg.grab.capture_radius;

    let mut nearest: Option<(Entity, f32)> = None;
    for (entity, tf, _, _) in boxes.iter() {
        if bindings.holder_of(entity).is_some() {
            continue;
        }
        let d2 = tf.translation.truncate().distance_squared(hand.pos);
        if d2 <= r2 && nearest.map_or(true, |(_, best)| d2 < best) {
            nearest = Some((entity, d2));
        }
    }
    let Some((entity, _)) = nearest else {
        return;
    };
    let Ok((_, tf, _, mut gravity)) = boxes.get_mut(entity) else {
        return;
    };
    let binding = GrabBinding {
        entity,
        offset: tf.translation.truncate() - hand.pos,
        rot_offset: rotation_z(tf) - hand.angle,
    };
    if bindings.try_bind(slot, binding) {
        // suspend free fall while held
        gravity.0 = 0.0;
    }
}

fn drive_held_box(
    slot: usize,
    binding: GrabBinding,
    hands: &HandSlots,
    cfg: &GameConfig,
    boxes: &mut Query<(Entity, &Transform, &mut Velocity, &mut GravityScale), With<StackBox>>,
) {
    let hand = &hands.0[slot];
    let Ok((_, tf, mut vel, _)) = boxes.get_mut(binding.entity) else {
        return;
    };
    let gain = cfg.grab.spring_k * cfg.grab.spring_damping;
    let target = hand.pos + binding.offset;
    let target_angle = hand.angle + binding.rot_offset;
    vel.linvel = (target - tf.translation.truncate()) * gain;
    vel.angvel = wrap_angle(target_angle - rotation_z(tf)) * gain;
}

fn release_slot(
    slot: usize,
    hands: &HandSlots,
    cfg: &GameConfig,
    bindings: &mut GrabBindings,
    boxes: &mut Query<(Entity, &Transform, &mut Velocity, &mut GravityScale), With<StackBox>>,
) {
    let Some(binding) = bindings.release(slot) else {
        return;
    };
    let hand = &hands.0[slot];
    if let Ok((_, _, mut vel, mut gravity)) = boxes.get_mut(binding.entity) {
        gravity.0 = 1.0;
        vel.linvel = clamp_speed(hand.velocity, cfg.grab.max_launch_speed);
        vel.angvel = hand.angular_velocity;
    }
}
