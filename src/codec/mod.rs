pub mod entry;
pub use entry::*;

pub mod pov;
pub use pov::*;

pub mod record;
pub use record::*;
