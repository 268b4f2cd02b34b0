//! ROSHAMBO: rock/paper/scissors resolver and collaborator seams
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod gesture;
pub mod player;
pub mod account;
pub mod collaborators;
pub mod doubles;
pub mod engine;
