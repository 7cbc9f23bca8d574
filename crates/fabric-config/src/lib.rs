//! # Fabric Config
//!
//! Configuration for the Automation Fabric site: a serde schema read from
//! TOML, defaults for every section, environment overrides, validation and
//! an [`arc_swap`] backed cache for lock-free reads.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod schema;
pub mod validator;

pub use cache::*;
pub use error::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
