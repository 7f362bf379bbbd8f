//! Tree building
//!
//! Walks declared content and produces the searchable [`Node`] skeleton. As a
//! side effect every group, custom group, item and indexed view registers a
//! factory for its content in the [`ViewRegistry`], so search results can
//! render live content later without the tree holding any views.
//!
//! Rules:
//! - a group yields exactly one group node, whatever its presentation
//! - a custom group yields one childless navigation group node
//! - an item yields one item node carrying its searchable flag
//! - a raw view yields nothing and registers nothing
//! - an indexed view yields one item node keyed by its title or first tag, or
//!   nothing when it has neither

use super::{Content, CustomGroup, Group, IndexedView, Item, RawView, compose};
use crate::node::{GroupNode, ItemNode, Node, NodeIcon, NodeId, Presentation, normalize_tags};
use crate::registry::ViewRegistry;
use crate::view::{Stack, View, ViewFactory};
use std::collections::HashSet;
use std::rc::Rc;

/// Anything that can contribute nodes to a searchable tree
pub trait Declaration {
    /// Produce this declaration's nodes, registering content factories on the way
    fn make_nodes(&self, builder: &mut TreeBuilder<'_>) -> Vec<Node>;
}

/// One tree-building pass
///
/// Tracks identities seen during the pass to report collisions. A fresh builder
/// should be used for every pass.
pub struct TreeBuilder<'a> {
    registry: &'a ViewRegistry,
    seen: HashSet<NodeId>,
    collisions: usize,
}

impl<'a> TreeBuilder<'a> {
    #[must_use]
    pub fn new(registry: &'a ViewRegistry) -> Self {
        Self {
            registry,
            seen: HashSet::new(),
            collisions: 0,
        }
    }

    /// Build the nodes for a list of declarations, in order
    pub fn build(&mut self, content: &[Content]) -> Vec<Node> {
        content
            .iter()
            .flat_map(|entry| entry.make_nodes(self))
            .collect()
    }

    /// Number of identity collisions seen so far in this pass
    #[must_use]
    pub const fn collisions(&self) -> usize {
        self.collisions
    }

    /// Register a content factory, noting collisions within the pass
    pub fn register(&mut self, id: NodeId, title: &str, factory: ViewFactory) {
        if !self.seen.insert(id) {
            self.collisions += 1;
            tracing::warn!(
                %id,
                title,
                "duplicate node identity in settings tree; the last declaration wins in search"
            );
        }
        self.registry.register(id, factory);
    }

    #[must_use]
    pub const fn registry(&self) -> &'a ViewRegistry {
        self.registry
    }
}

/// Build a fresh tree for `content`, registering factories in `registry`
#[must_use]
pub fn build_tree(content: &[Content], registry: &ViewRegistry) -> Vec<Node> {
    let mut builder = TreeBuilder::new(registry);
    let nodes = builder.build(content);
    tracing::trace!(
        roots = nodes.len(),
        collisions = builder.collisions(),
        "built settings tree"
    );
    nodes
}

impl Declaration for Content {
    fn make_nodes(&self, builder: &mut TreeBuilder<'_>) -> Vec<Node> {
        match self {
            Self::Group(group) => group.make_nodes(builder),
            Self::Item(item) => item.make_nodes(builder),
            Self::CustomGroup(custom) => custom.make_nodes(builder),
            Self::View(raw) => raw.make_nodes(builder),
            Self::Indexed(indexed) => indexed.make_nodes(builder),
        }
    }
}

impl Declaration for Group {
    fn make_nodes(&self, builder: &mut TreeBuilder<'_>) -> Vec<Node> {
        let id = self.id();
        let children = builder.build(&self.content);

        let content = Rc::clone(&self.content);
        builder.register(
            id,
            &self.title,
            Rc::new(move || Box::new(Stack::new(compose(&content))) as Box<dyn View>),
        );

        vec![Node::Group(GroupNode {
            id,
            title: self.title.clone(),
            icon: self.icon.clone().map(NodeIcon::Symbol),
            tags: normalize_tags(&self.title, &self.tags),
            presentation: self.presentation,
            children,
            custom: false,
        })]
    }
}

impl Declaration for CustomGroup {
    fn make_nodes(&self, builder: &mut TreeBuilder<'_>) -> Vec<Node> {
        let id = self.id();
        builder.register(id, &self.title, Rc::clone(&self.view));
        if let Some(icon) = &self.icon {
            builder.registry().register_icon(id, Rc::clone(icon));
        }

        vec![Node::Group(GroupNode {
            id,
            title: self.title.clone(),
            icon: self.icon.as_ref().map(|_| NodeIcon::Custom),
            tags: normalize_tags(&self.title, &self.tags),
            presentation: Presentation::Navigation,
            children: Vec::new(),
            custom: true,
        })]
    }
}

impl Declaration for Item {
    fn make_nodes(&self, builder: &mut TreeBuilder<'_>) -> Vec<Node> {
        let id = self.id();
        builder.register(id, &self.title, self.view_factory());

        vec![Node::Item(ItemNode {
            id,
            title: self.title.clone(),
            icon: self.icon.clone().map(NodeIcon::Symbol),
            tags: normalize_tags(&self.title, &self.tags),
            searchable: self.searchable,
        })]
    }
}

impl Declaration for RawView {
    fn make_nodes(&self, _builder: &mut TreeBuilder<'_>) -> Vec<Node> {
        Vec::new()
    }
}

impl Declaration for IndexedView {
    fn make_nodes(&self, builder: &mut TreeBuilder<'_>) -> Vec<Node> {
        let (Some(key), Some(id)) = (self.key(), self.id()) else {
            return Vec::new();
        };
        builder.register(id, key, Rc::clone(&self.view));

        vec![Node::Item(ItemNode {
            id,
            title: key.to_string(),
            icon: None,
            tags: normalize_tags(key, &self.tags),
            searchable: true,
        })]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::walk_tree;
    use crate::testing;
    use crate::view::{Text, factory, icon_factory};

    #[test]
    fn test_group_yields_one_node_per_presentation() {
        let registry = ViewRegistry::new();
        let content: Vec<Content> = vec![
            Group::new("Inline").inline().content(vec![Item::new("A").into()]).into(),
            Group::new("Nav").content(vec![Item::new("B").into()]).into(),
        ];

        let tree = build_tree(&content, &registry);

        assert_eq!(tree.len(), 2);
        let Node::Group(inline) = &tree[0] else { panic!("expected group") };
        assert_eq!(inline.presentation, Presentation::Inline);
        assert_eq!(inline.children.len(), 1);
        let Node::Group(nav) = &tree[1] else { panic!("expected group") };
        assert_eq!(nav.presentation, Presentation::Navigation);
    }

    #[test]
    fn test_every_group_and_indexed_item_is_registered() {
        let registry = ViewRegistry::new();
        let fixture = testing::settings_fixture();
        let tree = build_tree(&fixture.content, &registry);

        for node in walk_tree(&tree) {
            assert!(
                registry.resolve(node.id()).is_some(),
                "no registry entry for {}",
                node.title()
            );
        }
    }

    #[test]
    fn test_raw_view_yields_nothing() {
        let registry = ViewRegistry::new();
        let content: Vec<Content> = vec![RawView::new(factory(|| Text::new("Just text"))).into()];

        assert!(build_tree(&content, &registry).is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_raw_view_inside_group_adds_no_child() {
        let registry = ViewRegistry::new();
        let content: Vec<Content> = vec![
            Group::new("Display")
                .content(vec![
                    RawView::new(factory(|| Text::new("Colors adapt at sunset"))).into(),
                    Item::new("Night Shift").into(),
                ])
                .into(),
        ];

        let tree = build_tree(&content, &registry);
        let titles: Vec<_> = tree[0].children().iter().map(Node::title).collect();
        assert_eq!(titles, vec!["Night Shift"]);
    }

    #[test]
    fn test_indexed_view_promotes_first_tag() {
        let registry = ViewRegistry::new();
        let content: Vec<Content> = vec![
            IndexedView::new(factory(|| Text::new("x")))
                .tags(["theme", "appearance"])
                .into(),
        ];

        let tree = build_tree(&content, &registry);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].title(), "theme");
        assert_eq!(tree[0].tags(), ["appearance".to_string()]);
        assert!(registry.resolve(tree[0].id()).is_some());
    }

    #[test]
    fn test_indexed_view_without_title_or_tags_is_not_indexed() {
        let registry = ViewRegistry::new();
        let content: Vec<Content> = vec![IndexedView::new(factory(|| Text::new("x"))).into()];

        assert!(build_tree(&content, &registry).is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unsearchable_item_still_registered() {
        let registry = ViewRegistry::new();
        let content: Vec<Content> = vec![Item::new("Hidden").searchable(false).into()];

        let tree = build_tree(&content, &registry);
        let Node::Item(item) = &tree[0] else { panic!("expected item") };
        assert!(!item.searchable);
        assert!(registry.contains(item.id));
    }

    #[test]
    fn test_custom_group_registers_content_and_icon() {
        let registry = ViewRegistry::new();
        let content: Vec<Content> = vec![
            CustomGroup::new("Credits")
                .icon_view(icon_factory(|| "★".to_string()))
                .view(factory(|| Text::new("Thanks!")))
                .into(),
        ];

        let tree = build_tree(&content, &registry);
        let Node::Group(group) = &tree[0] else { panic!("expected group") };
        assert!(group.custom);
        assert!(group.children.is_empty());
        assert_eq!(group.icon, Some(NodeIcon::Custom));
        assert_eq!(registry.resolve(group.id).unwrap().plain_text(), "Thanks!");
        assert_eq!(registry.resolve_icon(group.id).as_deref(), Some("★"));
    }

    #[test]
    fn test_group_factory_composes_live_content() {
        let registry = ViewRegistry::new();
        let fixture = testing::settings_fixture();
        let tree = build_tree(&fixture.content, &registry);

        let display = walk_tree(&tree).find(|node| node.title() == "Display").unwrap();
        let before = registry.resolve(display.id()).unwrap().plain_text();
        assert!(before.contains("Dark Mode  [off]"));

        fixture.dark_mode.set(true);
        let after = registry.resolve(display.id()).unwrap().plain_text();
        assert!(after.contains("Dark Mode  [on]"));
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let registry = ViewRegistry::new();
        let fixture = testing::settings_fixture();

        let first = build_tree(&fixture.content, &registry);
        let registered = registry.len();
        let second = build_tree(&fixture.content, &registry);

        assert_eq!(first, second);
        assert_eq!(registry.len(), registered);
    }

    #[test]
    fn test_rebuild_from_fresh_declaration_is_identical() {
        let first = build_tree(&testing::settings_fixture().content, &ViewRegistry::new());
        let second = build_tree(&testing::settings_fixture().content, &ViewRegistry::new());
        assert_eq!(first, second);
    }

    #[test]
    fn test_collisions_are_counted_not_fatal() {
        let registry = ViewRegistry::new();
        let content: Vec<Content> = vec![
            Item::new("Enabled").view(factory(|| Text::new("first"))).into(),
            Item::new("Enabled").view(factory(|| Text::new("second"))).into(),
        ];

        let mut builder = TreeBuilder::new(&registry);
        let tree = builder.build(&content);

        assert_eq!(tree.len(), 2);
        assert_eq!(builder.collisions(), 1);
        assert_eq!(registry.resolve(tree[0].id()).unwrap().plain_text(), "second");
    }
}
