// Crate root library declaration and module exports.
pub mod calendar;
pub mod cli;
pub mod config;
pub mod context;
pub mod controller;
pub mod countdown;
pub mod error;
pub mod logging;
pub mod model;
pub mod resolver;
pub mod storage;
pub mod store;

#[cfg(feature = "tui")]
pub mod tui;
