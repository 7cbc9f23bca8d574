//! # Fabric Common
//!
//! Shared types, utilities, and common functionality for the Automation
//! Fabric site.
//!
//! This crate provides the foundational pieces used across all other crates
//! in the workspace: the error type, logging bootstrap, synchronous
//! reactive primitives ([`Signal`], [`EventSource`], [`Subscription`]), the
//! context [`Scope`] that carries providers down an ownership tree, and the
//! host-facing document types.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod host;
pub mod logging;
pub mod markup;
pub mod scope;
pub mod signal;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use host::*;
pub use scope::Scope;
pub use signal::{EventSource, Signal, Subscription};
pub use types::*;
