//! Route outlet

use crate::error::RouterResult;
use crate::router::Router;
use fabric_common::{Scope, Subscription};

/// Renders whichever view the current path resolves to.
#[derive(Debug, Clone)]
pub struct Outlet<V> {
    router: Router<V>,
}

impl<V> Outlet<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Binds an outlet to the router provided to `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RouterError::MissingRouter`] when no router is in scope.
    pub fn new(scope: &Scope) -> RouterResult<Self> {
        Router::from_scope(scope, "Outlet").map(|router| Self { router })
    }

    /// The view for the current path. `None` only for an empty route table.
    pub fn view(&self) -> Option<V> {
        self.router.current_view()
    }

    /// Calls `listener` with the freshly resolved view after every path change.
    #[must_use = "dropping the subscription immediately unregisters the listener"]
    pub fn on_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<V>) + Send + Sync + 'static,
    {
        let router = self.router.clone();
        self.router.subscribe(move |_| listener(router.current_view()))
    }
}
