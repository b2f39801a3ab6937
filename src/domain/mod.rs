//! Domain models for solmod
//!
//! This module contains pure domain objects: the module manifest fetched from the
//! registry, its dependency declarations, and the solution projects they target.

pub mod application_type;
pub mod module;
pub mod project;
pub mod target;

pub use application_type::ApplicationType;
pub use module::{Module, NativePackageDependency, WebPackageDependency};
pub use project::ProjectFile;
pub use target::TargetClassification;
