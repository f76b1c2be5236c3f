//! HUD: the live stack-height readout and the add-box button visual. The
//! button's hit testing lives in the interaction module; this only draws.

use bevy::prelude::*;

use crate::gameplay::StackHeight;
use crate::interaction::spawn_button::{BUTTON_INSET, BUTTON_SIZE};
use crate::interaction::AddBoxButton;

#[derive(Component)]
pub(crate) struct HeightReadoutText;

#[derive(Component)]
pub(crate) struct AddBoxButtonNode;

const BUTTON_IDLE: Color = Color::srgb(0.18, 0.22, 0.30);
const BUTTON_HOVERED: Color = Color::srgb(0.984, 0.749, 0.141);

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Stack: 0 cm"),
        TextFont {
            font_size: 28.0,
            ..Default::default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(16.0),
            left: Val::Px(16.0),
            ..Default::default()
        },
        HeightReadoutText,
    ));

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(BUTTON_INSET),
                bottom: Val::Px(BUTTON_INSET),
                width: Val::Px(BUTTON_SIZE.x),
                height: Val::Px(BUTTON_SIZE.y),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..Default::default()
            },
            BackgroundColor(BUTTON_IDLE),
            BorderRadius::all(Val::Px(10.0)),
            AddBoxButtonNode,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Add box"),
                TextFont {
                    font_size: 20.0,
                    ..Default::default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn update_height_readout(
    height: Res<StackHeight>,
    mut q: Query<&mut Text, With<HeightReadoutText>>,
) {
    if !height.is_changed() {
        return;
    }
    for mut text in q.iter_mut() {
        text.0 = format!("Stack: {:.0} cm", height.units);
    }
}

pub fn update_button_visual(
    button: Res<AddBoxButton>,
    mut q: Query<&mut BackgroundColor, With<AddBoxButtonNode>>,
) {
    for mut bg in q.iter_mut() {
        let target = if button.hovered {
            BUTTON_HOVERED
        } else {
            BUTTON_IDLE
        };
        if bg.0 != target {
            bg.0 = target;
        }
    }
}
