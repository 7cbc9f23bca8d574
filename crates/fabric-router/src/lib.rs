//! # Fabric Router
//!
//! Minimal client-side router for the Automation Fabric site.
//!
//! The router owns the current path, resolves it against a static
//! [`RouteTable`], pushes entries onto the host navigation stack through a
//! [`History`] backend and follows back/forward notifications from it.
//! Consumers reach the router through a [`fabric_common::Scope`]:
//! [`Outlet`] renders whatever view the current path resolves to, and
//! [`Link`] renders navigation anchors with an active indicator.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use fabric_common::Scope;
//! use fabric_router::{MemoryHistory, Outlet, RouteTable, Router};
//!
//! let table = RouteTable::new()
//!     .route("/", "landing")
//!     .route("/plan-my-workflow", "planner");
//! let history = Arc::new(MemoryHistory::new("/"));
//!
//! let scope = Scope::root();
//! let router = Router::new(table, history.clone());
//! router.provide(&scope);
//!
//! let outlet = Outlet::<&str>::new(&scope).unwrap();
//! router.navigate("/plan-my-workflow/");
//! assert_eq!(outlet.view(), Some("planner"));
//!
//! history.back();
//! assert_eq!(outlet.view(), Some("landing"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod history;
pub mod link;
pub mod outlet;
pub mod path;
pub mod route;
pub mod router;

pub use error::{RouterError, RouterResult};
pub use history::{History, MemoryHistory};
pub use link::{Link, LinkState, DEFAULT_ACTIVE_CLASS};
pub use outlet::Outlet;
pub use path::normalize_path;
pub use route::{Route, RouteTable};
pub use router::Router;
