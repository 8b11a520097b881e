pub mod board;
pub mod events;

pub use board::*;
pub use events::*;
