//! CLI command implementations

pub mod encode;
pub mod inspect;
