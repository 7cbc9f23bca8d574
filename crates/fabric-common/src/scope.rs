//! Context scopes.
//!
//! A [`Scope`] is a node in an ownership tree. Providers attach a value to a
//! scope with [`Scope::provide`]; consumers look it up with
//! [`Scope::get`], which walks from the given scope towards the root and
//! returns the nearest provided value of the requested type. Values are
//! handles (cheap to clone), so lookups hand out clones.

use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type Slot = Arc<dyn Any + Send + Sync>;

struct ScopeNode {
    parent: Option<Scope>,
    values: RwLock<HashMap<TypeId, Slot>>,
}

/// A node of the context tree.
#[derive(Clone)]
pub struct Scope {
    node: Arc<ScopeNode>,
}

impl Scope {
    /// Creates a root scope with nothing provided.
    pub fn root() -> Self {
        Self {
            node: Arc::new(ScopeNode {
                parent: None,
                values: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Creates a child scope that sees everything provided to `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            node: Arc::new(ScopeNode {
                parent: Some(self.clone()),
                values: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Provides `value` to this scope and its descendants.
    ///
    /// Providing the same type twice on one scope replaces the earlier value;
    /// a child providing the same type shadows the parent.
    pub fn provide<T>(&self, value: T)
    where
        T: Any + Clone + Send + Sync,
    {
        self.node
            .values
            .write()
            .insert(TypeId::of::<T>(), Arc::new(value));
    }

    /// Looks up the nearest value of type `T`.
    pub fn get<T>(&self) -> Option<T>
    where
        T: Any + Clone + Send + Sync,
    {
        let mut current = Some(self);
        while let Some(scope) = current {
            let found = scope
                .node
                .values
                .read()
                .get(&TypeId::of::<T>())
                .and_then(|slot| slot.downcast_ref::<T>().cloned());
            if found.is_some() {
                return found;
            }
            current = scope.node.parent.as_ref();
        }
        None
    }

    /// Whether a value of type `T` is visible from this scope.
    pub fn contains<T>(&self) -> bool
    where
        T: Any + Clone + Send + Sync,
    {
        self.get::<T>().is_some()
    }

    /// Depth of this scope below the root (the root is 0).
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.node.parent.as_ref();
        while let Some(scope) = current {
            depth += 1;
            current = scope.node.parent.as_ref();
        }
        depth
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("depth", &self.depth())
            .field("provided", &self.node.values.read().len())
            .finish()
    }
}
