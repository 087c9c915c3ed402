pub mod cli;
pub mod core;
pub mod error;
pub mod relay;
pub mod types;
pub mod utils;

#[cfg(test)]
pub mod tests;

// Re-export commonly used items
pub use error::{BridgeError, BridgeResult, RelayError};
