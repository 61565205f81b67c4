//! Pure data types for vfsh: command output and host sentinels.
//!
//! This crate is a leaf dependency with no async runtime and no I/O, so hosts
//! can consume shell output without pulling in the kernel.

pub mod output;
pub mod sentinel;

pub use output::*;
pub use sentinel::*;
