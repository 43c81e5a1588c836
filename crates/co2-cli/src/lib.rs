//! Terminal host for the CO2 emissions dashboard.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod script;
pub mod terminal;
