//! Match engine: referee-run rounds and the running tally.

pub mod referee;
pub mod scoreboard;
