pub mod game;

pub use game::{GamePlugin, HeadlessGamePlugin};
