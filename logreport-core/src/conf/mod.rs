mod discover;
mod error;
mod resolve;
#[cfg(test)]
mod tests;

pub use discover::{discover, resolve_glob};
pub use error::ConfigError;
pub use resolve::{InputSelection, ResolvedInput, resolve_input};
