//! Stack-height estimation.
//!
//! A proximity flood-fill, not a contact graph: boxes resting in a narrow
//! band above the floor seed the "grounded" set, and grounded status spreads
//! to any box whose centre sits within per-axis tolerances of an already
//! grounded one. The reported height is how far the topmost grounded edge
//! rises above a single resting box, so an unstacked floor layer reads zero.

use bevy::prelude::*;

use crate::core::components::{BoxHalfExtent, StackBox};
use crate::core::config::{GameConfig, StackConfig};
use crate::core::system::system_order::PostPhysicsAdjustSet;
use crate::interaction::GrabBindings;
use crate::physics::FloorLevel;

#[derive(Debug, Clone, Copy)]
pub struct BoxFootprint {
    pub center: Vec2,
    pub half: f32,
    pub rot: f32,
}

impl BoxFootprint {
    pub fn axis_aligned(center: Vec2, half: f32) -> Self {
        Self {
            center,
            half,
            rot: 0.0,
        }
    }

    /// Vertical half extent of the rotated square.
    fn v_half(&self) -> f32 {
        self.half * (self.rot.cos().abs() + self.rot.sin().abs())
    }

    pub fn top_edge(&self) -> f32 {
        self.center.y + self.v_half()
    }

    pub fn bottom_edge(&self) -> f32 {
        self.center.y - self.v_half()
    }
}

/// Raw tower height in world px above the one-box baseline; 0 when nothing is
/// grounded. Monotone in the topmost grounded top edge.
pub fn estimate_stack_height(boxes: &[BoxFootprint], floor_top: f32, p: &StackConfig) -> f32 {
    if boxes.is_empty() {
        return 0.0;
    }
    let mut grounded: Vec<bool> = boxes
        .iter()
        .map(|b| (b.bottom_edge() - floor_top).abs() <= p.floor_band)
        .collect();

    // fixed-point propagation over the implicit proximity graph
    for _pass in 0..p.max_passes {
        let mut changed = false;
        for i in 0..boxes.len() {
            if grounded[i] {
                continue;
            }
            let adjacent = boxes.iter().enumerate().any(|(j, other)| {
                grounded[j]
                    && (boxes[i].center.x - other.center.x).abs() <= p.neighbor_tol_x
                    && (boxes[i].center.y - other.center.y).abs() <= p.neighbor_tol_y
            });
            if adjacent {
                grounded[i] = true;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    let topmost = boxes
        .iter()
        .zip(&grounded)
        .filter(|(_, g)| **g)
        .map(|(b, _)| b.top_edge())
        .fold(f32::NEG_INFINITY, f32::max);
    if topmost == f32::NEG_INFINITY {
        return 0.0;
    }
    (topmost - floor_top - p.baseline).max(0.0)
}

/// Latest estimate, in world px and display units. Holds its last value while
/// any box is being manipulated.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct StackHeight {
    pub px: f32,
    pub units: f32,
}

pub struct StackHeightPlugin;

impl Plugin for StackHeightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StackHeight>().add_systems(
            Update,
            update_stack_height.in_set(PostPhysicsAdjustSet),
        );
    }
}

fn update_stack_height(
    cfg: Res<GameConfig>,
    floor: Option<Res<FloorLevel>>,
    bindings: Res<GrabBindings>,
    mut height: ResMut<StackHeight>,
    boxes: Query<(&Transform, &BoxHalfExtent), With<StackBox>>,
) {
    // mid-manipulation readings would jump around; keep the last settled one
    if bindings.any_held() {
        return;
    }
    let Some(floor) = floor else {
        return;
    };
    let footprints: Vec<BoxFootprint> = boxes
        .iter()
        .map(|(tf, half)| BoxFootprint {
            center: tf.translation.truncate(),
            half: half.0,
            rot: tf.rotation.to_euler(EulerRot::ZYX).0,
        })
        .collect();
    let px = estimate_stack_height(&footprints, floor.top, &cfg.stack);
    if px != height.px {
        *height = StackHeight {
            px,
            units: px * cfg.stack.units_per_px,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> StackConfig {
        StackConfig {
            floor_band: 15.0,
            neighbor_tol_x: 90.0,
            neighbor_tol_y: 90.0,
            max_passes: 10,
            baseline: 80.0,
            units_per_px: 0.25,
        }
    }

    fn box_at(x: f32, y: f32) -> BoxFootprint {
        BoxFootprint::axis_aligned(Vec2::new(x, y), 40.0)
    }

    #[test]
    fn empty_world_reads_zero() {
        assert_eq!(estimate_stack_height(&[], 0.0, &cfg()), 0.0);
    }

    #[test]
    fn airborne_boxes_read_zero() {
        // nothing inside the floor band
        let boxes = [box_at(0.0, 300.0), box_at(50.0, 400.0)];
        assert_eq!(estimate_stack_height(&boxes, 0.0, &cfg()), 0.0);
    }

    #[test]
    fn single_floor_layer_reads_zero() {
        // three boxes resting side by side on the floor: tops at 80 = baseline
        let boxes = [box_at(-120.0, 40.0), box_at(0.0, 40.0), box_at(120.0, 40.0)];
        assert_eq!(estimate_stack_height(&boxes, 0.0, &cfg()), 0.0);
    }

    #[test]
    fn two_box_tower_reads_one_layer() {
        let boxes = [box_at(0.0, 40.0), box_at(4.0, 120.0)];
        let h = estimate_stack_height(&boxes, 0.0, &cfg());
        assert!((h - 80.0).abs() < 1e-3, "h = {h}");
    }

    #[test]
    fn height_is_monotone_in_topmost_edge() {
        let base = box_at(0.0, 40.0);
        let mut last = 0.0;
        for top_y in [120.0, 140.0, 160.0] {
            let boxes = [base, box_at(0.0, top_y)];
            let h = estimate_stack_height(&boxes, 0.0, &cfg());
            assert!(h >= last, "height must not decrease as the top rises");
            last = h;
        }
    }

    #[test]
    fn floating_box_does_not_count() {
        // tower of two plus one far above: the floater is out of tolerance
        let boxes = [box_at(0.0, 40.0), box_at(0.0, 120.0), box_at(0.0, 400.0)];
        let h = estimate_stack_height(&boxes, 0.0, &cfg());
        assert!((h - 80.0).abs() < 1e-3, "h = {h}");
    }

    #[test]
    fn grounded_status_propagates_through_chain() {
        // vertical chain within tolerance: all grounded, top at 280
        let boxes = [
            box_at(0.0, 40.0),
            box_at(2.0, 120.0),
            box_at(-3.0, 200.0),
            box_at(1.0, 280.0),
        ];
        let h = estimate_stack_height(&boxes, 0.0, &cfg());
        assert!((h - 240.0).abs() < 1e-3, "h = {h}");
    }

    #[test]
    fn rotated_box_uses_rotated_extent() {
        let flat = BoxFootprint::axis_aligned(Vec2::new(0.0, 40.0), 40.0);
        let tilted = BoxFootprint {
            center: Vec2::new(0.0, 40.0),
            half: 40.0,
            rot: std::f32::consts::FRAC_PI_4,
        };
        assert!(tilted.top_edge() > flat.top_edge());
        assert!(tilted.bottom_edge() < flat.bottom_edge());
    }
}
