// src/app/mod.rs
//
// Application bootstrap

pub mod bootstrap;

pub use bootstrap::{assemble, build_app_state};
