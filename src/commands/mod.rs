//! Command implementations for Solmod CLI

pub mod add_module;
pub mod completions;
pub mod version;
