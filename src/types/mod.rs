//! Type definitions

pub mod coordinate;
pub mod order;

pub use coordinate::*;
pub use order::*;
