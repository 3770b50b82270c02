// src/core/mod.rs

pub mod feed;
pub mod name;
pub mod net;
