//! The "add box" button: a screen rectangle hovered by bringing a fingertip
//! near it and pressed by pinching while hovered. Hit testing lives here; the
//! HUD only draws the state.

use bevy::prelude::*;

use crate::perception::landmarks::world_to_screen_px;
use crate::perception::ScreenBounds;

use super::hand_state::HandSlots;

pub const BUTTON_SIZE: Vec2 = Vec2::new(160.0, 56.0);
pub const BUTTON_INSET: f32 = 24.0;

/// Request to spawn one box near screen centre.
#[derive(Event, Debug, Default)]
pub struct AddBoxRequested;

#[derive(Resource, Debug, Default)]
pub struct AddBoxButton {
    pub hovered: bool,
}

/// Button rectangle in screen pixels (origin top-left), bottom-right anchored.
pub fn button_rect(bounds: Vec2) -> Rect {
    let max = bounds - Vec2::splat(BUTTON_INSET);
    Rect::from_corners(max - BUTTON_SIZE, max)
}

pub fn update_add_box_button(
    bounds: Res<ScreenBounds>,
    hands: Res<HandSlots>,
    mut button: ResMut<AddBoxButton>,
    mut requests: EventWriter<AddBoxRequested>,
) {
    let rect = button_rect(bounds.0);
    let mut hovered = false;
    let mut pressed = false;
    for hand in hands.0.iter().filter(|h| h.tracked) {
        let px = world_to_screen_px(hand.pos, bounds.0);
        if rect.contains(px) {
            hovered = true;
            pressed |= hand.pinch_started();
        }
    }
    button.hovered = hovered;
    if pressed {
        requests.write(AddBoxRequested);
    }
}
