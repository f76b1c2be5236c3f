use bevy::prelude::*;

/// Marker for a stackable dynamic box body.
#[derive(Component)]
pub struct StackBox;

/// Half side length of a box collider (boxes are square cuboids).
#[derive(Component, Debug, Clone, Copy)]
pub struct BoxHalfExtent(pub f32);

/// Marker for the static ground body.
#[derive(Component)]
pub struct Ground;
