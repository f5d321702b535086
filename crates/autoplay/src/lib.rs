//! Seeded self-play driver for the core engine.

mod action;
mod config;
mod error;
mod planner;
mod runner;
mod simulator;
mod trace;

pub use action::*;
pub use config::*;
pub use error::*;
pub use planner::*;
pub use runner::*;
pub use simulator::*;
pub use trace::*;
