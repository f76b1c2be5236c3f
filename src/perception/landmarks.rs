//! Hand landmark geometry.
//!
//! Landmarks arrive as 21 normalized `[0,1]` points per hand in camera-frame
//! coordinates (origin top-left, y down, un-mirrored). The video feed is shown
//! mirrored, so every screen/world conversion flips X. All pure functions here
//! are shared by the simulator backend and the tests.

use bevy::prelude::*;

pub const WRIST: usize = 0;
pub const THUMB_MCP: usize = 2;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_TIP: usize = 8;
pub const LANDMARK_COUNT: usize = 21;

/// Bone connections for drawing the hand skeleton.
pub const HAND_SKELETON: [(usize, usize); 21] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (0, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    (0, 9),
    (9, 10),
    (10, 11),
    (11, 12),
    (0, 13),
    (13, 14),
    (14, 15),
    (15, 16),
    (0, 17),
    (17, 18),
    (18, 19),
    (19, 20),
    (5, 9),
];

/// One detected hand: a fixed-length ordered landmark sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks {
    pub points: [Vec3; LANDMARK_COUNT],
}

impl HandLandmarks {
    /// Normalized thumb-tip to index-tip distance (the pinch signal).
    pub fn pinch_distance(&self) -> f32 {
        self.points[THUMB_TIP]
            .truncate()
            .distance(self.points[INDEX_TIP].truncate())
    }

    /// Index fingertip in mirrored screen pixels (origin top-left, y down).
    pub fn fingertip_px(&self, bounds: Vec2) -> Vec2 {
        to_screen_px(self.points[INDEX_TIP].truncate(), bounds)
    }

    /// Index fingertip in world coordinates (origin centre, y up).
    pub fn fingertip_world(&self, bounds: Vec2) -> Vec2 {
        to_world(self.points[INDEX_TIP].truncate(), bounds)
    }

    /// Gripping direction: angle of the thumb-knuckle -> index-base vector in
    /// world space (mirrored with the feed).
    pub fn grip_angle(&self, bounds: Vec2) -> f32 {
        let a = to_world(self.points[THUMB_MCP].truncate(), bounds);
        let b = to_world(self.points[INDEX_MCP].truncate(), bounds);
        (b - a).to_angle()
    }

    /// Pinch is active only below the distance threshold AND with the
    /// fingertip inside the margin-inset screen rectangle; edge detections
    /// never count.
    pub fn is_pinching(&self, bounds: Vec2, threshold: f32, margin: f32) -> bool {
        self.pinch_distance() < threshold && self.fingertip_in_bounds(bounds, margin)
    }

    pub fn fingertip_in_bounds(&self, bounds: Vec2, margin: f32) -> bool {
        in_margin_rect(self.fingertip_px(bounds), bounds, margin)
    }

    /// Build a plausible hand around a fingertip position (landmark space).
    /// Used by the pointer simulation backend and by the scenario tests; only
    /// the landmarks the interaction controller reads (2, 4, 5, 8) carry
    /// meaning, the rest just sketch a skeleton for drawing.
    pub fn synthetic(fingertip: Vec2, grip_angle: f32, pinching: bool) -> Self {
        // World-space angle -> landmark-space direction (mirror X, flip Y).
        let grip_dir = Vec2::new(-grip_angle.cos(), -grip_angle.sin());
        let wrist = fingertip + Vec2::new(0.03, 0.18);
        let thumb_gap = if pinching { 0.02 } else { 0.2 };

        let mut points = [Vec3::ZERO; LANDMARK_COUNT];
        for (i, p) in points.iter_mut().enumerate() {
            // default: spread the remaining joints between wrist and fingertip
            let t = (i as f32) / (LANDMARK_COUNT - 1) as f32;
            *p = wrist.lerp(fingertip, t).extend(0.0);
        }
        points[WRIST] = wrist.extend(0.0);
        points[THUMB_MCP] = (wrist + grip_dir * 0.02).extend(0.0);
        points[INDEX_MCP] = (wrist + grip_dir * 0.12).extend(0.0);
        points[THUMB_TIP] = (fingertip + Vec2::new(thumb_gap, 0.0)).extend(0.0);
        points[INDEX_TIP] = fingertip.extend(0.0);
        Self { points }
    }
}

/// Landmark -> mirrored screen pixels (origin top-left, y down).
pub fn to_screen_px(lm: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new((1.0 - lm.x) * bounds.x, lm.y * bounds.y)
}

/// Landmark -> world coordinates (origin centre, y up, mirrored X).
pub fn to_world(lm: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new((0.5 - lm.x) * bounds.x, (0.5 - lm.y) * bounds.y)
}

/// Screen pixels -> landmark space (inverse of [`to_screen_px`]).
pub fn screen_px_to_landmark(px: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(1.0 - px.x / bounds.x.max(1.0), px.y / bounds.y.max(1.0))
}

/// World -> screen pixels, for UI hit testing.
pub fn world_to_screen_px(world: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(world.x + bounds.x * 0.5, bounds.y * 0.5 - world.y)
}

pub fn in_margin_rect(px: Vec2, bounds: Vec2, margin: f32) -> bool {
    px.x >= margin && px.x <= bounds.x - margin && px.y >= margin && px.y <= bounds.y - margin
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn world_mapping_mirrors_x_and_flips_y() {
        // Landmark at the camera-frame top-left appears at the mirrored
        // screen's top-right, i.e. +x +y in world.
        let w = to_world(Vec2::new(0.0, 0.0), BOUNDS);
        assert_eq!(w, Vec2::new(400.0, 300.0));
        let c = to_world(Vec2::new(0.5, 0.5), BOUNDS);
        assert_eq!(c, Vec2::ZERO);
    }

    #[test]
    fn screen_px_roundtrip() {
        let lm = Vec2::new(0.3, 0.7);
        let px = to_screen_px(lm, BOUNDS);
        let back = screen_px_to_landmark(px, BOUNDS);
        assert!((back - lm).length() < 1e-6);
    }

    #[test]
    fn world_and_screen_agree() {
        let lm = Vec2::new(0.25, 0.4);
        let via_world = world_to_screen_px(to_world(lm, BOUNDS), BOUNDS);
        let direct = to_screen_px(lm, BOUNDS);
        assert!((via_world - direct).length() < 1e-4);
    }

    #[test]
    fn synthetic_hand_pinch_signal() {
        let pinched = HandLandmarks::synthetic(Vec2::new(0.5, 0.5), 0.0, true);
        assert!(pinched.pinch_distance() < 0.06);
        let open = HandLandmarks::synthetic(Vec2::new(0.5, 0.5), 0.0, false);
        assert!(open.pinch_distance() >= 0.06);
    }

    #[test]
    fn synthetic_hand_grip_angle() {
        for angle in [0.0, 1.0, -2.0] {
            let hand = HandLandmarks::synthetic(Vec2::new(0.5, 0.5), angle, false);
            let got = hand.grip_angle(BOUNDS);
            // bounds are not square, so the angle is stretched; sign and
            // quadrant must survive
            assert_eq!(got.signum(), angle.signum(), "angle {angle} -> {got}");
        }
    }

    #[test]
    fn margin_rect_rejects_edges() {
        assert!(in_margin_rect(Vec2::new(400.0, 300.0), BOUNDS, 20.0));
        assert!(!in_margin_rect(Vec2::new(10.0, 300.0), BOUNDS, 20.0));
        assert!(!in_margin_rect(Vec2::new(400.0, 595.0), BOUNDS, 20.0));
        assert!(!in_margin_rect(Vec2::new(795.0, 10.0), BOUNDS, 20.0));
    }
}
