//! Action type identifiers shared between a feed reader's UI panels and
//! its state store.
//!
//! Components label the messages they exchange with a value from
//! [`action::Action`]; [`registry::get`] exposes the immutable name
//! registry for validating incoming values.

pub mod action;
pub mod error;
pub mod registry;

pub use action::Action;
pub use error::{RegistryError, RegistryResult};
pub use registry::ActionTypeRegistry;
