//! Navigation links with active-state detection.

use crate::path::normalize_path;
use crate::router::Router;
use fabric_common::markup::{join_classes, Element};
use fabric_common::ClickEvent;
use tracing::trace;

/// Default class added to a link whose target is the current path.
pub const DEFAULT_ACTIVE_CLASS: &str = "is-active";

/// Render state of a link against the current path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkState {
    /// Normalized target, used as the `href`
    pub href: String,
    /// Joined class list, including the active class when active
    pub class: String,
    /// Whether the target is the current path
    pub active: bool,
    /// `Some("page")` when active
    pub aria_current: Option<&'static str>,
}

/// A link to a path of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    to: String,
    class: String,
    active_class: String,
}

impl Link {
    /// Creates a link to `to`.
    pub fn new(to: &str) -> Self {
        Self {
            to: normalize_path(to),
            class: String::new(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
        }
    }

    /// Sets the base class list.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.class = class.to_string();
        self
    }

    /// Sets the class added while the link is active.
    #[must_use]
    pub fn active_class(mut self, class: &str) -> Self {
        self.active_class = class.to_string();
        self
    }

    /// Normalized target path.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Computes the render state against `router`'s current path.
    pub fn state<V>(&self, router: &Router<V>) -> LinkState
    where
        V: Clone + Send + Sync + 'static,
    {
        let active = router.is_active(&self.to);
        let class = if active {
            join_classes([self.class.as_str(), self.active_class.as_str()])
        } else {
            join_classes([self.class.as_str()])
        };
        LinkState {
            href: self.to.clone(),
            class,
            active,
            aria_current: active.then_some("page"),
        }
    }

    /// Renders an anchor wrapping `children` markup.
    pub fn render<V>(&self, router: &Router<V>, children: &str) -> String
    where
        V: Clone + Send + Sync + 'static,
    {
        let state = self.state(router);
        Element::new("a")
            .attr("href", &state.href)
            .class(&state.class)
            .attr_opt("aria-current", state.aria_current)
            .raw(children)
            .render()
    }

    /// Handles a click on the link.
    ///
    /// Primary activations are taken over: the host default is prevented and
    /// the router navigates. Any other click is left to the host. Returns
    /// whether the click was intercepted.
    pub fn activate<V>(&self, router: &Router<V>, click: &mut ClickEvent) -> bool
    where
        V: Clone + Send + Sync + 'static,
    {
        if !click.is_primary_activation() {
            trace!(to = %self.to, "non-primary click left to host");
            return false;
        }
        click.prevent_default();
        router.navigate(&self.to);
        true
    }
}
