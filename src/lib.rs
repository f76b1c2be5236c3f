pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod perception;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::{GamePlugin, HeadlessGamePlugin};
pub use crate::core::components::{BoxHalfExtent, StackBox};
pub use crate::core::config::GameConfig;
pub use crate::gameplay::{estimate_stack_height, BoxFootprint, StackHeight};
pub use crate::interaction::{GrabBindings, HandSlots};
pub use crate::perception::{landmarks::HandLandmarks, DetectedHands, ScreenBounds};
