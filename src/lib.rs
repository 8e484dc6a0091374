pub mod agent;
mod bitgrid;
mod common;
mod config;
mod engine;
mod grid;
pub mod input;
mod logging;
pub mod placer;
pub mod policy;
pub mod ui;

pub use bitgrid::{BitGrid, BitGridError};
pub use common::*;
pub use config::*;
pub use engine::*;
pub use grid::*;
pub use logging::init_logging;
