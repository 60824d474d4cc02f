//! Core abstractions for state parsing and diagram generation
//!
//! This module defines the shared data model (resources, the resource
//! database, Mermaid building blocks), the node-ID derivation used by every
//! renderer, and the renderer trait each diagram kind implements.

mod database;
mod error;
pub mod logging;
mod mermaid;
mod node_id;
mod renderer;
mod resource;
mod types;

pub use database::*;
pub use error::*;
pub use logging::*;
pub use mermaid::*;
pub use node_id::*;
pub use renderer::*;
pub use resource::*;
pub use types::*;
