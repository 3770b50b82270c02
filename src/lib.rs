// src/lib.rs

#[macro_use]
pub mod macros;

pub mod core;
pub mod specs;

pub mod cli;
pub mod data;
pub mod merge;
pub mod params;
pub mod runner;
pub mod scrape;
pub mod store;
