//! Choosing where rows come from
//!
//! While browsing, rows are composed straight from the declared content. While
//! searching, every hit is resolved through the [`ViewRegistry`] so the row is
//! the live control rather than a copy of its title. A hit whose entry is
//! missing degrades to a static [`Label`].

mod screen;

pub use screen::{Phase, SettingsScreen};

use crate::content::{Content, compose};
use crate::node::{NodeIcon, NodeId, Presentation};
use crate::registry::ViewRegistry;
use crate::search::{HitKind, SearchHit, SearchResults};
use crate::view::{self, Header, Label, Link, View};
use std::rc::Rc;

/// Turns content or search results into rows
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Rc<ViewRegistry>,
}

impl Dispatcher {
    #[must_use]
    pub const fn new(registry: Rc<ViewRegistry>) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &Rc<ViewRegistry> {
        &self.registry
    }

    /// Rows for browsing `content`
    #[must_use]
    pub fn browse(&self, content: &[Content]) -> Vec<Box<dyn View>> {
        compose(content)
    }

    /// Rows for a set of search results
    ///
    /// Each bucket with an ancestor starts with a header that opens the
    /// ancestor's scope. Top-level hits get no header.
    #[must_use]
    pub fn results(&self, results: &SearchResults) -> Vec<Box<dyn View>> {
        let mut rows: Vec<Box<dyn View>> = Vec::new();

        for bucket in &results.buckets {
            if let Some(ancestor) = &bucket.ancestor {
                rows.push(Box::new(Header::new(ancestor.title.clone()).target(ancestor.id)));
            }
            for hit in &bucket.hits {
                self.hit_rows(hit, &mut rows);
            }
        }

        view::expand_all(rows)
    }

    fn hit_rows(&self, hit: &SearchHit, rows: &mut Vec<Box<dyn View>>) {
        match hit.kind {
            HitKind::Group(Presentation::Navigation) | HitKind::CustomGroup => {
                let icon = self.icon(hit.id, hit.icon.as_ref());
                rows.push(Box::new(Link::new(hit.id, hit.title.clone(), icon)));
            }
            HitKind::Group(Presentation::Inline) => {
                rows.push(Box::new(Header::new(hit.title.clone()).target(hit.id)));
                if hit.inline_items.is_empty() {
                    rows.push(self.resolve(hit));
                } else {
                    for item in &hit.inline_items {
                        self.hit_rows(item, rows);
                    }
                }
            }
            HitKind::Item => rows.push(self.resolve(hit)),
        }
    }

    /// Resolve a hit's live view, or a static label when nothing is registered
    #[must_use]
    pub fn resolve(&self, hit: &SearchHit) -> Box<dyn View> {
        self.registry.resolve(hit.id).unwrap_or_else(|| {
            tracing::debug!(id = %hit.id, title = %hit.title, "no registered view, showing label");
            Box::new(Label::new(hit.title.clone(), self.icon(hit.id, hit.icon.as_ref())))
        })
    }

    fn icon(&self, id: NodeId, icon: Option<&NodeIcon>) -> Option<String> {
        match icon? {
            NodeIcon::Symbol(name) => Some(name.clone()),
            NodeIcon::Custom => self.registry.resolve_icon(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Group, Item, build_tree};
    use crate::search::search;
    use crate::testing;

    fn texts(rows: &[Box<dyn View>]) -> Vec<String> {
        rows.iter().map(|row| row.plain_text()).collect()
    }

    #[test]
    fn test_results_render_live_controls_under_headers() {
        let registry = ViewRegistry::shared();
        let fixture = testing::settings_fixture();
        let tree = build_tree(&fixture.content, &registry);
        let dispatcher = Dispatcher::new(Rc::clone(&registry));

        let rows = dispatcher.results(&search(&tree, "wi"));
        assert_eq!(texts(&rows), vec!["CONNECTIONS ›", "Wi-Fi  [on]"]);
        assert!(rows.iter().all(|row| row.is_interactive()));

        fixture.wifi.set(false);
        let rows = dispatcher.results(&search(&tree, "wi"));
        assert_eq!(rows[1].plain_text(), "Wi-Fi  [off]");
    }

    #[test]
    fn test_navigation_and_custom_groups_become_links() {
        let registry = ViewRegistry::shared();
        let tree = build_tree(&testing::settings_fixture().content, &registry);
        let dispatcher = Dispatcher::new(Rc::clone(&registry));

        assert_eq!(texts(&dispatcher.results(&search(&tree, "general"))), vec!["⚙ General ›"]);
        assert_eq!(texts(&dispatcher.results(&search(&tree, "credits"))), vec!["★ Credits ›"]);
    }

    #[test]
    fn test_inline_group_hit_shows_matching_items() {
        let registry = ViewRegistry::shared();
        let content: Vec<Content> = vec![
            Group::new("Sound")
                .inline()
                .content(vec![Item::new("Sound Effects").into(), Item::new("Volume").into()])
                .into(),
        ];
        let tree = build_tree(&content, &registry);
        let dispatcher = Dispatcher::new(Rc::clone(&registry));

        let rows = dispatcher.results(&search(&tree, "sound"));
        assert_eq!(texts(&rows), vec!["SOUND ›", "Sound Effects"]);
    }

    #[test]
    fn test_nested_navigation_group_in_inline_hit_is_a_link() {
        let registry = ViewRegistry::shared();
        let content: Vec<Content> = vec![
            Group::new("Network")
                .inline()
                .content(vec![
                    Item::new("Network Name").into(),
                    Group::new("Network Proxy")
                        .content(vec![Item::new("Network Timeout").into()])
                        .into(),
                ])
                .into(),
        ];
        let tree = build_tree(&content, &registry);
        let dispatcher = Dispatcher::new(Rc::clone(&registry));

        let rows = dispatcher.results(&search(&tree, "network"));
        assert_eq!(texts(&rows), vec!["NETWORK ›", "Network Name", "Network Proxy ›"]);
    }

    #[test]
    fn test_inline_group_hit_without_matching_items_shows_content() {
        let registry = ViewRegistry::shared();
        let tree = build_tree(&testing::settings_fixture().content, &registry);
        let dispatcher = Dispatcher::new(Rc::clone(&registry));

        let rows = dispatcher.results(&search(&tree, "connections"));
        assert_eq!(
            texts(&rows),
            vec!["CONNECTIONS ›", "Airplane Mode  [off]", "Wi-Fi  [on]", "Networks nearby"]
        );
    }

    #[test]
    fn test_missing_entry_falls_back_to_label() {
        let registry = ViewRegistry::shared();
        let tree = build_tree(&testing::settings_fixture().content, &registry);
        registry.clear();
        let dispatcher = Dispatcher::new(Rc::clone(&registry));

        let rows = dispatcher.results(&search(&tree, "brightness"));
        assert_eq!(texts(&rows), vec!["DISPLAY ›", "Brightness"]);
        assert!(!rows[1].is_interactive());
    }

    #[test]
    fn test_browse_composes_without_registry() {
        let registry = ViewRegistry::shared();
        let fixture = testing::settings_fixture();
        let dispatcher = Dispatcher::new(Rc::clone(&registry));

        let rows = dispatcher.browse(&fixture.content);
        assert!(registry.is_empty());
        assert_eq!(rows[0].plain_text(), "CONNECTIONS");
    }
}
