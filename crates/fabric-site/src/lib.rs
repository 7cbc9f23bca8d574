//! # Fabric Site
//!
//! Application shell of the Automation Fabric Studio site.
//!
//! [`SiteApp`] wires the router, the language context and the theme
//! controller into one scope, renders the header and the active page, and
//! keeps the document title and language attributes current.
//! [`Preview`] drives a mounted shell from text commands; the
//! `fabric-site` binary feeds it from stdin.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;
pub mod host;
pub mod pages;
pub mod preview;

pub use app::*;
pub use error::*;
pub use host::*;
pub use pages::{route_table, Page, PageSelection};
pub use preview::{Command, Outcome, Preview};
