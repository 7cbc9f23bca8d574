//! Static route table

use crate::path::normalize_path;

/// An immutable `{path, view}` binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    path: String,
    view: V,
}

impl<V> Route<V> {
    /// Binds `view` to `path`. The path is stored normalized.
    pub fn new(path: &str, view: V) -> Self {
        Self {
            path: normalize_path(path),
            view,
        }
    }

    /// Normalized path of this route.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// View bound to this route.
    pub const fn view(&self) -> &V {
        &self.view
    }
}

/// Ordered list of routes, assembled once at startup.
///
/// The first route doubles as the fallback for paths that match nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<V> RouteTable<V> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a route.
    #[must_use]
    pub fn route(mut self, path: &str, view: V) -> Self {
        self.routes.push(Route::new(path, view));
        self
    }

    /// Finds the first route whose path equals `path` after normalization.
    pub fn find(&self, path: &str) -> Option<&Route<V>> {
        let wanted = normalize_path(path);
        self.routes.iter().find(|route| route.path == wanted)
    }

    /// The route rendered when nothing matches.
    pub fn fallback(&self) -> Option<&Route<V>> {
        self.routes.first()
    }

    /// Resolves `path` to a view: exact match first, then the fallback.
    ///
    /// Only an empty table resolves to `None`.
    pub fn resolve(&self, path: &str) -> Option<&V> {
        self.find(path).or_else(|| self.fallback()).map(Route::view)
    }

    /// Whether `path` is bound to a route of its own.
    pub fn is_registered(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    /// Iterates routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter()
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<V> FromIterator<(String, V)> for RouteTable<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self {
            routes: iter
                .into_iter()
                .map(|(path, view)| Route::new(&path, view))
                .collect(),
        }
    }
}
