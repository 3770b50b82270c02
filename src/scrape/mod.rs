// src/scrape/mod.rs

pub mod individual;
pub mod startlist;
pub mod team;
