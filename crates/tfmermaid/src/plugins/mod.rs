//! Renderer plugins for the supported diagram kinds
//!
//! Each plugin implements [`crate::core::Renderer`] for one layout. The
//! [`MermaidGenerator`] ties them together behind a single entry point.

pub mod architecture;
pub mod dataflow;
pub mod generator;
pub mod inference;
pub mod network;

pub use architecture::*;
pub use dataflow::*;
pub use generator::*;
pub use inference::*;
pub use network::*;
