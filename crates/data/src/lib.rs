//! Config loading and snapshot persistence.

pub mod load;
pub mod persistence;

pub use load::*;
pub use persistence::*;
