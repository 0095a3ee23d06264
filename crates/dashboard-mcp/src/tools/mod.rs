//! MCP tool parameter types and output helpers.
//!
//! All parameter structs derive `Deserialize + JsonSchema` for MCP tool registration.

pub mod helpers;
pub mod params;
pub mod serde_helpers;

pub use helpers::*;
pub use params::*;
