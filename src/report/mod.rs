//! Report rendering: JSON inventory files and the terminal summary.

pub mod json;
pub mod terminal;
