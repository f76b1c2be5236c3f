pub mod spawn;
pub mod stack_height;

pub use spawn::BoxSpawnPlugin;
pub use stack_height::{estimate_stack_height, BoxFootprint, StackHeight, StackHeightPlugin};
