//! Audio signal and file I/O
//!
//! This module provides the core Signal data structure, codec-backed
//! decode/encode, and measurement helpers.

pub mod analysis;
mod io;
mod signal;

pub use io::{decode, encode, encode_float};
pub use signal::Signal;
