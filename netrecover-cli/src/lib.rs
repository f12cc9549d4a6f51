//! Support library for the netrecover CLI binary.
//!
//! Re-exports the command pipeline and logging setup so integration tests
//! can drive the adapter without spawning a subprocess.

pub mod cli;
pub mod logging;
