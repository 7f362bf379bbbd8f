//! Searchable skeleton of a settings hierarchy
//!
//! A [`Node`] is an immutable metadata record: title, icon, tags and kind. The
//! node tree mirrors the declared content but carries no views; live content is
//! reached through the [`ViewRegistry`](crate::registry::ViewRegistry) by
//! [`NodeId`].
//!
//! Trees are never persisted. They are rebuilt from the declaration whenever a
//! pass needs one, so nothing here may depend on a previous tree.

mod id;

pub use id::{Discriminator, NodeId};

use serde::Serialize;

/// How a group is presented in its parent's scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// A tappable row that opens the group's own scope
    #[default]
    Navigation,
    /// A labeled section rendered in place
    Inline,
}

/// Icon attached to a node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "name")]
pub enum NodeIcon {
    /// A symbol name, passed through unmodified
    Symbol(String),
    /// A custom icon, produced by the registry's icon factory for this node
    Custom,
}

impl NodeIcon {
    /// Symbol name, if this icon is a plain symbol
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(name),
            Self::Custom => None,
        }
    }
}

/// A group node: a section or a navigable screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupNode {
    pub id: NodeId,
    pub title: String,
    pub icon: Option<NodeIcon>,
    pub tags: Vec<String>,
    pub presentation: Presentation,
    pub children: Vec<Node>,
    /// Set for custom groups, whose content is only reachable through the registry
    pub custom: bool,
}

/// A leaf node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemNode {
    pub id: NodeId,
    pub title: String,
    pub icon: Option<NodeIcon>,
    pub tags: Vec<String>,
    pub searchable: bool,
}

/// One searchable unit of the settings hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum Node {
    Group(GroupNode),
    Item(ItemNode),
}

impl Node {
    #[must_use]
    pub const fn id(&self) -> NodeId {
        match self {
            Self::Group(group) => group.id,
            Self::Item(item) => item.id,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Group(group) => &group.title,
            Self::Item(item) => &item.title,
        }
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        match self {
            Self::Group(group) => &group.tags,
            Self::Item(item) => &item.tags,
        }
    }

    #[must_use]
    pub const fn icon(&self) -> Option<&NodeIcon> {
        match self {
            Self::Group(group) => group.icon.as_ref(),
            Self::Item(item) => item.icon.as_ref(),
        }
    }

    /// Children of a group, empty for items
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Group(group) => &group.children,
            Self::Item(_) => &[],
        }
    }

    /// Depth-first, pre-order iterator over this node and its descendants
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Find a node by identity in this subtree
    #[must_use]
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        self.walk().find(|node| node.id() == id)
    }

    /// Number of nodes in this subtree, including itself
    #[must_use]
    pub fn count(&self) -> usize {
        self.walk().count()
    }
}

/// Depth-first iterator returned by [`Node::walk`] and [`walk_tree`]
pub struct Walk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

/// Depth-first iterator over a whole forest
#[must_use]
pub fn walk_tree(nodes: &[Node]) -> Walk<'_> {
    Walk {
        stack: nodes.iter().rev().collect(),
    }
}

/// Deduplicate tags case-insensitively, keeping the first spelling and order
///
/// Tags equal to the title are dropped since the title is always an implicit tag.
#[must_use]
pub fn normalize_tags(title: &str, tags: &[String]) -> Vec<String> {
    let title = title.to_lowercase();
    let mut seen = Vec::with_capacity(tags.len());
    let mut result = Vec::with_capacity(tags.len());

    for tag in tags {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            continue;
        }
        let lowered = trimmed.to_lowercase();
        if lowered == title || seen.contains(&lowered) {
            continue;
        }
        seen.push(lowered);
        result.push(trimmed.to_string());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> Node {
        Node::Item(ItemNode {
            id: NodeId::derive(title, &Discriminator::item(None)),
            title: title.to_string(),
            icon: None,
            tags: Vec::new(),
            searchable: true,
        })
    }

    fn group(title: &str, children: Vec<Node>) -> Node {
        Node::Group(GroupNode {
            id: NodeId::derive(title, &Discriminator::group(None)),
            title: title.to_string(),
            icon: Some(NodeIcon::Symbol("gear".into())),
            tags: Vec::new(),
            presentation: Presentation::Navigation,
            children,
            custom: false,
        })
    }

    #[test]
    fn test_walk_is_depth_first_pre_order() {
        let tree = group(
            "Root",
            vec![group("A", vec![item("A1"), item("A2")]), item("B")],
        );

        let titles: Vec<_> = tree.walk().map(Node::title).collect();
        assert_eq!(titles, vec!["Root", "A", "A1", "A2", "B"]);
        assert_eq!(tree.count(), 5);
    }

    #[test]
    fn test_walk_tree_over_forest() {
        let forest = vec![group("A", vec![item("A1")]), item("B")];
        let titles: Vec<_> = walk_tree(&forest).map(Node::title).collect();
        assert_eq!(titles, vec!["A", "A1", "B"]);
    }

    #[test]
    fn test_find() {
        let tree = group("Root", vec![group("A", vec![item("A1")])]);
        let id = NodeId::derive("A1", &Discriminator::item(None));

        assert_eq!(tree.find(id).map(Node::title), Some("A1"));
        assert!(tree.find(NodeId::derive("Missing", &Discriminator::item(None))).is_none());
    }

    #[test]
    fn test_accessors() {
        let node = group("Root", vec![item("A")]);
        assert_eq!(node.icon().and_then(NodeIcon::symbol), Some("gear"));
        assert_eq!(node.children().len(), 1);
        assert!(item("A").children().is_empty());
        assert!(NodeIcon::Custom.symbol().is_none());
    }

    #[test]
    fn test_normalize_tags() {
        let tags = vec![
            "Theme".to_string(),
            "theme".to_string(),
            "  ".to_string(),
            "dark mode".to_string(),
            "Appearance".to_string(),
        ];

        assert_eq!(
            normalize_tags("Dark Mode", &tags),
            vec!["Theme".to_string(), "Appearance".to_string()]
        );
    }
}
