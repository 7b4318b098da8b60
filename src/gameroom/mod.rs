pub mod config;
pub use config::*;

pub mod game;
pub use game::*;

pub mod scheduler;
pub use scheduler::*;
