// src/text/mod.rs

//! Text formatting helpers.

pub mod hexdump;

pub use hexdump::{HexDump, hexdump};
