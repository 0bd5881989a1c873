pub mod event;
pub mod macros;
pub mod species;
pub mod units;

pub use event::*;
pub use species::*;
pub use units::*;
