//! Command handlers shared by the binary and the tests

pub mod orchestration;

pub use orchestration::{handle_latest, handle_next, LatestArgs, NextArgs, Outcome};
