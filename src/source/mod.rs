//! IRC message source (prefix) types.

pub mod host;
mod serialize;
mod types;

pub use self::types::Source;
