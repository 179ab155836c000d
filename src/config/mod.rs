// src/config/mod.rs
//! Configuration system for cipher-lab
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{from_path, load, Config, Defaults, History, Paths};

mod app;
mod defaults;
