//! Declared settings content
//!
//! A settings screen is declared as an ordered list of [`Content`] values:
//! groups, items, custom groups, and raw views (plain or explicitly indexed).
//! Conditional content is expressed by building the list with or without an
//! entry; there is no special branch type.
//!
//! # Examples
//!
//! ```
//! use trellis::content::{Content, Group, IndexedView, Item};
//! use trellis::state::State;
//! use trellis::view::{Toggle, factory};
//!
//! let dark_mode = State::new(false);
//! let content: Vec<Content> = vec![
//!     Group::new("Display")
//!         .icon("☀")
//!         .content(vec![
//!             IndexedView::new(factory(move || Toggle::new("Dark Mode", dark_mode.clone())))
//!                 .title("Dark Mode")
//!                 .tags(["theme", "appearance"])
//!                 .into(),
//!         ])
//!         .into(),
//!     Item::new("About").into(),
//! ];
//! assert_eq!(content.len(), 2);
//! ```

pub mod builder;

pub use builder::{Declaration, TreeBuilder, build_tree};

use crate::node::{Discriminator, NodeId, Presentation};
use crate::view::{self, Header, IconFactory, Label, Link, View, ViewFactory};
use std::fmt;
use std::rc::Rc;

/// One declared entry of a settings hierarchy
#[derive(Clone)]
pub enum Content {
    Group(Group),
    Item(Item),
    CustomGroup(CustomGroup),
    /// Content rendered in place, invisible to search
    View(RawView),
    /// Content opted into search with a title and/or tags
    Indexed(IndexedView),
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group(group) => f
                .debug_struct("Group")
                .field("title", &group.title)
                .field("presentation", &group.presentation)
                .field("content", &group.content)
                .finish(),
            Self::Item(item) => f.debug_struct("Item").field("title", &item.title).finish(),
            Self::CustomGroup(custom) => f
                .debug_struct("CustomGroup")
                .field("title", &custom.title)
                .finish(),
            Self::View(_) => f.write_str("View"),
            Self::Indexed(indexed) => f
                .debug_struct("Indexed")
                .field("key", &indexed.key())
                .finish(),
        }
    }
}

fn collect_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tags.into_iter().map(Into::into).collect()
}

/// A titled group of content, shown inline or as its own screen
#[derive(Clone)]
pub struct Group {
    title: String,
    icon: Option<String>,
    tags: Vec<String>,
    presentation: Presentation,
    content: Rc<Vec<Content>>,
}

impl Group {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            tags: Vec::new(),
            presentation: Presentation::Navigation,
            content: Rc::new(Vec::new()),
        }
    }

    /// Icon symbol, passed through to renderers unmodified
    #[must_use]
    pub fn icon(mut self, symbol: impl Into<String>) -> Self {
        self.icon = Some(symbol.into());
        self
    }

    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = collect_tags(tags);
        self
    }

    /// Render as a section in the parent's scope instead of a navigation row
    #[must_use]
    pub const fn inline(mut self) -> Self {
        self.presentation = Presentation::Inline;
        self
    }

    #[must_use]
    pub const fn presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = presentation;
        self
    }

    #[must_use]
    pub fn content(mut self, content: Vec<Content>) -> Self {
        self.content = Rc::new(content);
        self
    }

    #[must_use]
    pub fn id(&self) -> NodeId {
        NodeId::derive(&self.title, &Discriminator::group(self.icon.as_deref()))
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn is_inline(&self) -> bool {
        matches!(self.presentation, Presentation::Inline)
    }

    #[must_use]
    pub fn children(&self) -> &[Content] {
        &self.content
    }
}

/// A single setting
#[derive(Clone)]
pub struct Item {
    title: String,
    key: Option<String>,
    icon: Option<String>,
    tags: Vec<String>,
    searchable: bool,
    view: Option<ViewFactory>,
}

impl Item {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            key: None,
            icon: None,
            tags: Vec::new(),
            searchable: true,
            view: None,
        }
    }

    /// Settings key, distinguishing items that share a title
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn icon(mut self, symbol: impl Into<String>) -> Self {
        self.icon = Some(symbol.into());
        self
    }

    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = collect_tags(tags);
        self
    }

    #[must_use]
    pub const fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Content shown for the item; defaults to a static label
    #[must_use]
    pub fn view(mut self, view: ViewFactory) -> Self {
        self.view = Some(view);
        self
    }

    #[must_use]
    pub fn id(&self) -> NodeId {
        NodeId::derive(&self.title, &Discriminator::item(self.key.as_deref()))
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The item's content factory, falling back to a label of its title
    #[must_use]
    pub fn view_factory(&self) -> ViewFactory {
        match &self.view {
            Some(view) => Rc::clone(view),
            None => {
                let title = self.title.clone();
                let icon = self.icon.clone();
                view::factory(move || Label::new(title.clone(), icon.clone()))
            }
        }
    }
}

/// A navigable group whose content is an arbitrary view
#[derive(Clone)]
pub struct CustomGroup {
    title: String,
    icon: Option<IconFactory>,
    tags: Vec<String>,
    view: ViewFactory,
}

impl CustomGroup {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            tags: Vec::new(),
            view: view::factory(view::Stack::default),
        }
    }

    /// Custom icon, produced on demand
    #[must_use]
    pub fn icon_view(mut self, icon: IconFactory) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = collect_tags(tags);
        self
    }

    #[must_use]
    pub fn view(mut self, view: ViewFactory) -> Self {
        self.view = view;
        self
    }

    #[must_use]
    pub fn id(&self) -> NodeId {
        NodeId::derive(&self.title, &Discriminator::Custom)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Arbitrary content placed in a hierarchy without indexing
#[derive(Clone)]
pub struct RawView {
    view: ViewFactory,
}

impl RawView {
    #[must_use]
    pub const fn new(view: ViewFactory) -> Self {
        Self { view }
    }
}

/// Arbitrary content explicitly opted into search
///
/// The node is keyed by the title, or when no title is given by the first tag.
/// With neither, the view stays out of the index.
#[derive(Clone)]
pub struct IndexedView {
    view: ViewFactory,
    title: Option<String>,
    tags: Vec<String>,
}

impl IndexedView {
    #[must_use]
    pub const fn new(view: ViewFactory) -> Self {
        Self {
            view,
            title: None,
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = collect_tags(tags);
        self
    }

    /// Title used for the node: the explicit title, else the first non-blank tag
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
            .or_else(|| {
                self.tags
                    .iter()
                    .map(String::as_str)
                    .find(|tag| !tag.trim().is_empty())
            })
    }

    #[must_use]
    pub fn id(&self) -> Option<NodeId> {
        self.key()
            .map(|key| NodeId::derive(key, &Discriminator::Indexed))
    }
}

impl From<Group> for Content {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl From<Item> for Content {
    fn from(item: Item) -> Self {
        Self::Item(item)
    }
}

impl From<CustomGroup> for Content {
    fn from(custom: CustomGroup) -> Self {
        Self::CustomGroup(custom)
    }
}

impl From<RawView> for Content {
    fn from(raw: RawView) -> Self {
        Self::View(raw)
    }
}

impl From<IndexedView> for Content {
    fn from(indexed: IndexedView) -> Self {
        Self::Indexed(indexed)
    }
}

/// Compose content directly, as shown while browsing
///
/// Navigation and custom groups become links, inline groups become a header
/// followed by their content. The registry is never consulted here.
#[must_use]
pub fn compose(content: &[Content]) -> Vec<Box<dyn View>> {
    let mut views: Vec<Box<dyn View>> = Vec::with_capacity(content.len());

    for entry in content {
        match entry {
            Content::Group(group) if group.is_inline() => {
                views.push(Box::new(Header::new(group.title.clone())));
                views.extend(compose(&group.content));
            }
            Content::Group(group) => {
                views.push(Box::new(Link::new(
                    group.id(),
                    group.title.clone(),
                    group.icon.clone(),
                )));
            }
            Content::CustomGroup(custom) => {
                let icon = custom.icon.as_ref().map(|icon| icon());
                views.push(Box::new(Link::new(custom.id(), custom.title.clone(), icon)));
            }
            Content::Item(item) => views.push((item.view_factory())()),
            Content::View(raw) => views.push((raw.view)()),
            Content::Indexed(indexed) => views.push((indexed.view)()),
        }
    }

    view::expand_all(views)
}

/// A scope that can be opened from the live hierarchy
#[derive(Clone)]
pub enum Scope {
    Group(Group),
    Custom(CustomGroup),
}

impl Scope {
    #[must_use]
    pub fn id(&self) -> NodeId {
        match self {
            Self::Group(group) => group.id(),
            Self::Custom(custom) => custom.id(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Group(group) => &group.title,
            Self::Custom(custom) => &custom.title,
        }
    }

    /// Compose the scope's content from the declaration
    #[must_use]
    pub fn views(&self) -> Vec<Box<dyn View>> {
        match self {
            Self::Group(group) => compose(&group.content),
            Self::Custom(custom) => view::expand((custom.view)()),
        }
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("id", &self.id())
            .field("title", &self.title())
            .finish()
    }
}

/// Locate the group or custom group with identity `id`
///
/// Searches depth-first through groups, returning the first match.
#[must_use]
pub fn find_scope(content: &[Content], id: NodeId) -> Option<Scope> {
    scope_path(content, id).and_then(|mut path| path.pop())
}

/// Scopes a user passes through to reach `id` from the root, ending with it
///
/// Inline groups on the way are shown in place by their parent and are not
/// part of the path. The target itself is always last.
#[must_use]
pub fn scope_path(content: &[Content], id: NodeId) -> Option<Vec<Scope>> {
    let mut path = Vec::new();
    collect_path(content, id, &mut path).then_some(path)
}

fn collect_path(content: &[Content], id: NodeId, path: &mut Vec<Scope>) -> bool {
    for entry in content {
        match entry {
            Content::Group(group) => {
                if group.id() == id {
                    path.push(Scope::Group(group.clone()));
                    return true;
                }
                let navigable = group.presentation == Presentation::Navigation;
                if navigable {
                    path.push(Scope::Group(group.clone()));
                }
                if collect_path(&group.content, id, path) {
                    return true;
                }
                if navigable {
                    path.pop();
                }
            }
            Content::CustomGroup(custom) if custom.id() == id => {
                path.push(Scope::Custom(custom.clone()));
                return true;
            }
            Content::CustomGroup(_)
            | Content::Item(_)
            | Content::View(_)
            | Content::Indexed(_) => {}
        }
    }
    false
}
