// src/io/mod.rs
//! Signal persistence

pub mod csv;

pub use self::csv::{load_signal, save_signal};
