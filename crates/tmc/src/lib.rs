//! Command line driver for the Turing-machine macro compiler.
//!
//! Reads a macro program, expands it with [`tmc_core`], and writes the fully
//! enumerated transition table next to the input or to an explicit path.
//!
//! # Configuration
//!
//! - `TMC_LOG_LEVEL`: Log verbosity (trace, debug, info, warn, error)
//! - `TMC_OUTPUT_EXTENSION`: Extension appended to the input path when no
//!   output path is given

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
