//! Shared building blocks for the storefront builder crates.

pub mod error;
pub mod filesystem;
pub mod result;
pub mod store;

pub use error::CommonError;
pub use result::CommonResult;
pub use store::{Store, Subscription};
