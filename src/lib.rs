// src/lib.rs
//! JobGuardian web UI: turns job-posting checks into backend calls and
//! backend answers into HTML fragments

pub mod cli;
pub mod config;
pub mod core;
pub mod types;
pub mod view;
pub mod web;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ConfigManager;
pub use view::ViewController;
pub use web::start_web_server;
