//! In-memory host environment the shell mounts against.

use fabric_common::{DocumentEvent, EventSource, MemoryDocument};
use fabric_router::MemoryHistory;
use fabric_theme::AmbientScheme;
use std::sync::Arc;

/// Navigation stack, document, document events and color scheme of one
/// headless host.
#[derive(Debug, Clone)]
pub struct HostBundle {
    /// Navigation stack
    pub history: Arc<MemoryHistory>,
    /// Document receiving title, attribute and class updates
    pub document: Arc<MemoryDocument>,
    /// Pointer and keyboard events at document level
    pub events: EventSource<DocumentEvent>,
    /// Ambient light/dark preference
    pub scheme: Arc<AmbientScheme>,
}

impl HostBundle {
    /// A host showing `location`, with the given color-scheme preference
    /// (`None` for a host without one).
    pub fn new(location: &str, prefers_dark: Option<bool>) -> Self {
        let scheme = prefers_dark.map_or_else(AmbientScheme::unsupported, AmbientScheme::new);
        Self {
            history: Arc::new(MemoryHistory::new(location)),
            document: Arc::new(MemoryDocument::new()),
            events: EventSource::new(),
            scheme: Arc::new(scheme),
        }
    }

    /// Dispatches a document-level event to every mounted listener.
    pub fn dispatch(&self, event: &DocumentEvent) -> usize {
        self.events.emit(event)
    }
}

impl Default for HostBundle {
    fn default() -> Self {
        Self::new("/", None)
    }
}
