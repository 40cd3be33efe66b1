//! Library entry for Repotable exposing the table engine and the terminal
//! front end for the binary and integration tests.

pub mod app;
pub mod args;
pub mod events;
pub mod index;
pub mod logic;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
