#![deny(missing_docs)]

//! Multichain SDK - Complete SDK.
//!
//! Re-exports the codec and address crates for single-crate usage, and
//! hosts the command-line front end behind the `mc-address` binary.

pub use mc_address as address;
pub use mc_codec as codec;

pub mod cli;
