//! CLI command implementations

pub mod headers;
pub mod swap;

pub use headers::{HeadersCommand, OutputFormat};
pub use swap::SwapCommand;
