//! Host navigation stack integration.

use fabric_common::{EventSource, Subscription};
use parking_lot::Mutex;
use tracing::debug;

/// The host's navigation stack, as the router sees it.
pub trait History: Send + Sync {
    /// Current location path, or `None` when the host has no location
    /// (e.g. rendering outside a page).
    fn location(&self) -> Option<String>;

    /// Pushes a new entry without reloading the page.
    fn push(&self, path: &str);

    /// Registers a listener for back/forward navigation.
    ///
    /// The listener is not called for entries added with [`History::push`].
    fn on_pop(&self, listener: Box<dyn Fn() + Send + Sync>) -> Subscription;
}

#[derive(Debug)]
struct Stack {
    entries: Vec<String>,
    index: usize,
}

/// In-memory navigation stack with back/forward traversal.
#[derive(Debug)]
pub struct MemoryHistory {
    stack: Mutex<Option<Stack>>,
    pops: EventSource<()>,
}

impl MemoryHistory {
    /// Creates a stack whose only entry is `initial`.
    pub fn new(initial: &str) -> Self {
        Self {
            stack: Mutex::new(Some(Stack {
                entries: vec![initial.to_string()],
                index: 0,
            })),
            pops: EventSource::new(),
        }
    }

    /// Creates a history with no location. The first push creates one.
    pub fn detached() -> Self {
        Self {
            stack: Mutex::new(None),
            pops: EventSource::new(),
        }
    }

    /// Moves one entry back. Returns `false` at the start of the stack.
    pub fn back(&self) -> bool {
        self.go(-1)
    }

    /// Moves one entry forward. Returns `false` at the end of the stack.
    pub fn forward(&self) -> bool {
        self.go(1)
    }

    /// Moves `delta` entries and notifies pop listeners.
    ///
    /// Out-of-range moves do nothing and notify nobody.
    pub fn go(&self, delta: isize) -> bool {
        let moved = {
            let mut guard = self.stack.lock();
            let Some(stack) = guard.as_mut() else {
                return false;
            };
            match stack.index.checked_add_signed(delta) {
                Some(target) if target < stack.entries.len() && delta != 0 => {
                    stack.index = target;
                    Some(stack.entries[target].clone())
                }
                _ => None,
            }
        };

        match moved {
            Some(location) => {
                debug!(%location, delta, "history traversal");
                self.pops.emit(&());
                true
            }
            None => false,
        }
    }

    /// Every entry on the stack, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.stack
            .lock()
            .as_ref()
            .map(|stack| stack.entries.clone())
            .unwrap_or_default()
    }

    /// Number of entries on the stack.
    pub fn len(&self) -> usize {
        self.stack.lock().as_ref().map_or(0, |stack| stack.entries.len())
    }

    /// Whether the stack has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of registered pop listeners.
    pub fn listener_count(&self) -> usize {
        self.pops.listener_count()
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Option<String> {
        self.stack
            .lock()
            .as_ref()
            .map(|stack| stack.entries[stack.index].clone())
    }

    fn push(&self, path: &str) {
        let mut guard = self.stack.lock();
        match guard.as_mut() {
            Some(stack) => {
                // Pushing discards any forward entries
                stack.entries.truncate(stack.index + 1);
                stack.entries.push(path.to_string());
                stack.index = stack.entries.len() - 1;
            }
            None => {
                *guard = Some(Stack {
                    entries: vec![path.to_string()],
                    index: 0,
                });
            }
        }
    }

    fn on_pop(&self, listener: Box<dyn Fn() + Send + Sync>) -> Subscription {
        self.pops.subscribe(move |()| listener())
    }
}
