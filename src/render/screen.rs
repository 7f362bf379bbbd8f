//! A searchable settings screen
//!
//! [`SettingsScreen`] holds everything that survives between frames: the root
//! content, the registry, the current query and the stack of opened scopes.
//! The phase follows from the query alone:
//!
//! ```text
//! Browsing  --query with letters/digits-->  Searching | EmptyResults
//! Searching | EmptyResults  --blank query-->  Browsing
//! ```

use super::Dispatcher;
use crate::content::{Content, Scope, build_tree, scope_path};
use crate::node::{Node, NodeId};
use crate::registry::ViewRegistry;
use crate::search::{Query, SearchEngine, SearchOptions, SearchResults};
use crate::view::{Activation, Text, View};
use std::rc::Rc;

/// What the screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No query: the declared hierarchy of the current scope
    Browsing,
    /// A query with at least one hit
    Searching,
    /// A query with no hits
    EmptyResults,
}

/// Root of an interactive settings screen
pub struct SettingsScreen {
    title: String,
    content: Vec<Content>,
    dispatcher: Dispatcher,
    engine: SearchEngine,
    query: String,
    results: Option<SearchResults>,
    scopes: Vec<Scope>,
}

impl SettingsScreen {
    /// Create a screen over `content`
    ///
    /// The registry is populated before the first search.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        content: Vec<Content>,
        registry: Rc<ViewRegistry>,
    ) -> Self {
        let screen = Self {
            title: title.into(),
            content,
            dispatcher: Dispatcher::new(registry),
            engine: SearchEngine::default(),
            query: String::new(),
            results: None,
            scopes: Vec::new(),
        };
        screen.register_content();
        screen
    }

    #[must_use]
    pub const fn with_options(mut self, options: SearchOptions) -> Self {
        self.engine = SearchEngine::new(options);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &[Content] {
        &self.content
    }

    #[must_use]
    pub fn registry(&self) -> &Rc<ViewRegistry> {
        self.dispatcher.registry()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn results(&self) -> Option<&SearchResults> {
        self.results.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.results {
            None => Phase::Browsing,
            Some(results) if results.is_empty() => Phase::EmptyResults,
            Some(_) => Phase::Searching,
        }
    }

    /// Build a fresh node tree, registering content factories
    #[must_use]
    pub fn tree(&self) -> Vec<Node> {
        build_tree(&self.content, self.dispatcher.registry())
    }

    /// Register a view factory for every searchable entry of the content
    pub fn register_content(&self) {
        let nodes = self.tree();
        tracing::trace!(nodes = nodes.len(), "registered content");
    }

    /// Replace the query and search again
    ///
    /// The tree is rebuilt for every query; nothing from a previous pass is
    /// reused.
    pub fn set_query(&mut self, input: &str) {
        let before = self.phase();
        input.clone_into(&mut self.query);
        self.results = Query::parse(input).map(|query| self.engine.search(&self.tree(), &query));

        let after = self.phase();
        if before != after {
            tracing::trace!(?before, ?after, query = input, "screen phase changed");
        }
    }

    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    /// Rows for the current phase and scope
    #[must_use]
    pub fn rows(&self) -> Vec<Box<dyn View>> {
        match &self.results {
            Some(results) if results.is_empty() => {
                vec![Box::new(Text::new(format!("No results for \"{}\"", results.query)).dimmed())]
            }
            Some(results) => self.dispatcher.results(results),
            None => match self.scopes.last() {
                Some(scope) => scope.views(),
                None => self.dispatcher.browse(&self.content),
            },
        }
    }

    /// Open the scope of the group or custom group `id`
    ///
    /// The scope stack is replaced by the declared path to `id`, so going back
    /// walks up the hierarchy no matter where the scope was opened from.
    /// Leaves search. Returns `false` when no declared scope has that identity.
    pub fn open(&mut self, id: NodeId) -> bool {
        let Some(path) = scope_path(&self.content, id) else {
            tracing::debug!(%id, "no declared scope to open");
            return false;
        };
        tracing::debug!(%id, depth = path.len(), "opening scope");
        self.scopes = path;
        self.clear_query();
        true
    }

    /// Close the innermost scope
    pub fn back(&mut self) -> bool {
        match self.scopes.pop() {
            Some(scope) => {
                tracing::debug!(title = scope.title(), "closing scope");
                true
            }
            None => false,
        }
    }

    /// Title of the innermost scope, or the screen title at the root
    #[must_use]
    pub fn scope_title(&self) -> &str {
        self.scopes.last().map_or(self.title.as_str(), Scope::title)
    }

    /// Screen title followed by every opened scope
    #[must_use]
    pub fn breadcrumbs(&self) -> Vec<&str> {
        std::iter::once(self.title.as_str())
            .chain(self.scopes.iter().map(Scope::title))
            .collect()
    }

    /// Number of opened scopes
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Activate `row`, following it if it asks to open a scope
    pub fn activate(&mut self, row: &mut dyn View) -> Activation {
        let activation = row.activate();
        self.follow(activation)
    }

    /// Adjust `row` by `delta`, following it if it asks to open a scope
    pub fn adjust(&mut self, row: &mut dyn View, delta: i64) -> Activation {
        let activation = row.adjust(delta);
        self.follow(activation)
    }

    fn follow(&mut self, activation: Activation) -> Activation {
        if let Activation::Open(id) = activation
            && !self.open(id)
        {
            return Activation::Ignored;
        }
        activation
    }
}

impl std::fmt::Debug for SettingsScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsScreen")
            .field("title", &self.title)
            .field("query", &self.query)
            .field("phase", &self.phase())
            .field("scopes", &self.breadcrumbs())
            .finish_non_exhaustive()
    }
}
