//! High-level operations
//!
//! Operations coordinate the resolver, locator and installers. Command
//! handlers in `commands/` build the concrete collaborators and call in here.

pub mod add_module;
