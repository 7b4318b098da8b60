pub mod action;
pub use action::*;

pub mod arbiter;
pub use arbiter::*;

pub mod deal;
pub use deal::*;

pub mod hand;
pub use hand::*;

pub mod outcome;
pub use outcome::*;

pub mod round;
pub use round::*;

pub mod size;
pub use size::*;

pub mod who;
pub use who::*;
