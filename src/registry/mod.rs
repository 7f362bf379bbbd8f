//! View registry
//!
//! Maps node identities to zero-argument factories so that search results can
//! render live content without the index holding any views. Entries are written
//! while a tree is built and read while search results are rendered.
//!
//! The registry is passed explicitly to whatever owns a settings session; there
//! is no global instance. Like the [`State`](crate::state::State) handles its
//! factories capture, it belongs to one thread. A factory is always invoked
//! after the map borrow is released, so it may read or write the registry
//! itself. Writes are last-writer-wins.

use crate::node::NodeId;
use crate::view::{IconFactory, View, ViewFactory};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Keyed store of content and icon factories
#[derive(Default)]
pub struct ViewRegistry {
    views: RefCell<HashMap<NodeId, ViewFactory>>,
    icons: RefCell<HashMap<NodeId, IconFactory>>,
}

impl ViewRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry ready to be shared
    #[must_use]
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Store `factory` under `id`, replacing any previous entry
    pub fn register(&self, id: NodeId, factory: ViewFactory) {
        let replaced = self.views.borrow_mut().insert(id, factory).is_some();
        if replaced {
            tracing::trace!(%id, "replaced view factory");
        }
    }

    /// Produce a fresh view for `id`
    ///
    /// The factory runs on every call, so the view reflects current state.
    #[must_use]
    pub fn resolve(&self, id: NodeId) -> Option<Box<dyn View>> {
        let factory = self.views.borrow().get(&id).map(Rc::clone)?;
        Some(factory())
    }

    /// Store a custom icon factory under `id`, replacing any previous entry
    pub fn register_icon(&self, id: NodeId, factory: IconFactory) {
        let replaced = self.icons.borrow_mut().insert(id, factory).is_some();
        if replaced {
            tracing::trace!(%id, "replaced icon factory");
        }
    }

    /// Produce the custom icon for `id`
    #[must_use]
    pub fn resolve_icon(&self, id: NodeId) -> Option<String> {
        let factory = self.icons.borrow().get(&id).map(Rc::clone)?;
        Some(factory())
    }

    /// Whether a view factory is registered for `id`
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.views.borrow().contains_key(&id)
    }

    /// Number of registered view factories
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every view and icon factory
    pub fn clear(&self) {
        self.views.borrow_mut().clear();
        self.icons.borrow_mut().clear();
    }
}

impl std::fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icons = self.icons.borrow().len();
        f.debug_struct("ViewRegistry")
            .field("views", &self.len())
            .field("icons", &icons)
            .finish()
    }
}
