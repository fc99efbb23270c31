pub mod binary;
pub mod locator;
pub mod types;

pub use binary::*;
pub use types::*;

#[cfg(test)]
pub(crate) mod testutil;
