pub mod config;

pub use config::{
    BoundsConfig, BoxSpawnConfig, FloorConfig, GameConfig, GrabConfig, GravityConfig, PinchConfig,
    SolverConfig, StackConfig, WindowConfig,
};
