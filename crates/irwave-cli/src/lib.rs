//! irwave CLI library.
//!
//! This crate provides the command implementations behind the `irwave`
//! binary: WAV generation from NEC command words and timing inspection.

pub mod commands;
