//! CIX renderer for generating program text from drill records
//!
//! This module takes the drill records produced by the layout step and
//! writes them out as `DRILL` macros between the program header and footer.

pub mod cix;
pub mod config;

pub use cix::{format_number, serialize, CixBuilder, CixMacro};
pub use config::ProgramConfig;
