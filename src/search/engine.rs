//! Search over a node tree
//!
//! The engine walks the tree depth-first and groups hits by their nearest
//! ancestor group. Buckets appear in the order the walk first reaches them.
//! Hits inside a bucket keep walk order unless [`ResultOrder::Score`] is
//! configured.

use super::normalize::Query;
use super::score::{Match, ScoreWeights, score_fields};
use crate::node::{GroupNode, ItemNode, Node, NodeIcon, NodeId, Presentation};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordering of hits within one bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultOrder {
    /// Depth-first walk order
    #[default]
    #[serde(rename = "tree")]
    TreeWalk,
    /// Descending score, walk order among equal scores
    Score,
}

/// Tunables for a [`SearchEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub order: ResultOrder,
    pub weights: ScoreWeights,
}

/// The group a bucket of hits is filed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ancestor {
    pub id: NodeId,
    pub title: String,
    pub icon: Option<NodeIcon>,
    pub presentation: Presentation,
}

impl From<&GroupNode> for Ancestor {
    fn from(group: &GroupNode) -> Self {
        Self {
            id: group.id,
            title: group.title.clone(),
            icon: group.icon.clone(),
            presentation: group.presentation,
        }
    }
}

/// What kind of node produced a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "presentation")]
pub enum HitKind {
    Item,
    Group(Presentation),
    CustomGroup,
}

/// One matched node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: NodeId,
    pub title: String,
    pub icon: Option<NodeIcon>,
    pub kind: HitKind,
    pub matched: Match,
    /// For a matched inline group, its descendant items that match on their own
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inline_items: Vec<SearchHit>,
}

impl SearchHit {
    fn item(item: &ItemNode, matched: Match) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            icon: item.icon.clone(),
            kind: HitKind::Item,
            matched,
            inline_items: Vec::new(),
        }
    }

    fn group(group: &GroupNode, matched: Match, inline_items: Vec<Self>) -> Self {
        let kind = if group.custom {
            HitKind::CustomGroup
        } else {
            HitKind::Group(group.presentation)
        };
        Self {
            id: group.id,
            title: group.title.clone(),
            icon: group.icon.clone(),
            kind,
            matched,
            inline_items,
        }
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.matched.score
    }
}

/// Hits sharing one nearest ancestor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultBucket {
    /// `None` for top-level hits
    pub ancestor: Option<Ancestor>,
    pub hits: Vec<SearchHit>,
}

/// Outcome of one search pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub buckets: Vec<ResultBucket>,
}

impl SearchResults {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.hits.is_empty())
    }

    /// Total number of hits, counting inline items
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter_hits().count()
    }

    /// Every hit in display order, inline items right after their group
    pub fn iter_hits(&self) -> impl Iterator<Item = &SearchHit> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.hits.iter())
            .flat_map(|hit| std::iter::once(hit).chain(hit.inline_items.iter()))
    }

    /// Find the bucket filed under `ancestor`
    #[must_use]
    pub fn bucket(&self, ancestor: Option<NodeId>) -> Option<&ResultBucket> {
        self.buckets
            .iter()
            .find(|bucket| bucket.ancestor.as_ref().map(|a| a.id) == ancestor)
    }
}

/// Scores and groups nodes for a query
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    options: SearchOptions,
}

impl SearchEngine {
    #[must_use]
    pub const fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Search `tree` for `query`
    #[must_use]
    pub fn search(&self, tree: &[Node], query: &Query) -> SearchResults {
        let mut collector = Collector::default();
        self.visit(tree, None, query.normalized(), &mut collector);

        let mut buckets = collector.buckets;
        if self.options.order == ResultOrder::Score {
            for bucket in &mut buckets {
                bucket.hits.sort_by(|a, b| b.score().cmp(&a.score()));
                for hit in &mut bucket.hits {
                    hit.inline_items.sort_by(|a, b| b.score().cmp(&a.score()));
                }
            }
        }

        tracing::trace!(
            query = query.raw(),
            buckets = buckets.len(),
            "search finished"
        );

        SearchResults {
            query: query.raw().to_string(),
            buckets,
        }
    }

    fn visit(
        &self,
        nodes: &[Node],
        ancestor: Option<&GroupNode>,
        query: &str,
        out: &mut Collector,
    ) {
        for node in nodes {
            match node {
                Node::Item(item) => {
                    if let Some(hit) = self.match_item(item, query) {
                        out.push(ancestor, hit);
                    }
                }
                Node::Group(group) => match self.match_group(group, query) {
                    Some(matched) if is_inline(group) => {
                        // Push first so the group's bucket precedes any bucket
                        // opened while collecting its inline items.
                        let slot = out.push(ancestor, SearchHit::group(group, matched, Vec::new()));
                        let mut inline_items = Vec::new();
                        self.collect_inline(&group.children, query, &mut inline_items, out);
                        out.hit_mut(slot).inline_items = inline_items;
                    }
                    Some(matched) => {
                        out.push(ancestor, SearchHit::group(group, matched, Vec::new()));
                    }
                    None => self.visit(&group.children, Some(group), query, out),
                },
            }
        }
    }

    fn match_item(&self, item: &ItemNode, query: &str) -> Option<SearchHit> {
        if !item.searchable {
            return None;
        }
        score_fields(&item.title, &item.tags, query, &self.options.weights)
            .map(|matched| SearchHit::item(item, matched))
    }

    fn match_group(&self, group: &GroupNode, query: &str) -> Option<Match> {
        score_fields(&group.title, &group.tags, query, &self.options.weights)
    }

    /// Matches shown inside a matched inline group
    ///
    /// Nested inline sections are flattened into `hits`. A nested navigation or
    /// custom group is a single hit when it matches; otherwise it is searched
    /// as the nearest ancestor of its own matches.
    fn collect_inline(
        &self,
        nodes: &[Node],
        query: &str,
        hits: &mut Vec<SearchHit>,
        out: &mut Collector,
    ) {
        for node in nodes {
            match node {
                Node::Item(item) => hits.extend(self.match_item(item, query)),
                Node::Group(group) if is_inline(group) => {
                    self.collect_inline(&group.children, query, hits, out);
                }
                Node::Group(group) => match self.match_group(group, query) {
                    Some(matched) => hits.push(SearchHit::group(group, matched, Vec::new())),
                    None => self.visit(&group.children, Some(group), query, out),
                },
            }
        }
    }
}

fn is_inline(group: &GroupNode) -> bool {
    !group.custom && group.presentation == Presentation::Inline
}

#[derive(Default)]
struct Collector {
    buckets: Vec<ResultBucket>,
    index: HashMap<Option<NodeId>, usize>,
}

impl Collector {
    /// File `hit` under `ancestor`, returning where it landed
    fn push(&mut self, ancestor: Option<&GroupNode>, hit: SearchHit) -> (usize, usize) {
        let key = ancestor.map(|group| group.id);
        let slot = *self.index.entry(key).or_insert_with(|| {
            self.buckets.push(ResultBucket {
                ancestor: ancestor.map(Ancestor::from),
                hits: Vec::new(),
            });
            self.buckets.len() - 1
        });
        let hits = &mut self.buckets[slot].hits;
        hits.push(hit);
        (slot, hits.len() - 1)
    }

    fn hit_mut(&mut self, (bucket, hit): (usize, usize)) -> &mut SearchHit {
        &mut self.buckets[bucket].hits[hit]
    }
}

/// Search `tree` for raw user input with default options
///
/// Blank input yields empty results.
#[must_use]
pub fn search(tree: &[Node], input: &str) -> SearchResults {
    Query::parse(input).map_or_else(SearchResults::default, |query| {
        SearchEngine::default().search(tree, &query)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Content, Group, Item, build_tree};
    use crate::registry::ViewRegistry;
    use crate::search::score::{MatchField, MatchKind};
    use crate::testing;

    fn tree(content: &[Content]) -> Vec<Node> {
        build_tree(content, &ViewRegistry::new())
    }

    fn fixture_tree() -> Vec<Node> {
        tree(&testing::settings_fixture().content)
    }

    fn titles(results: &SearchResults) -> Vec<&str> {
        results.iter_hits().map(|hit| hit.title.as_str()).collect()
    }

    #[test]
    fn test_ranking_order() {
        let nodes = tree(&[
            Item::new("Wi-Fi Settings").into(),
            Item::new("Wi-Fi").into(),
            Item::new("Bluetooth").tags(["wireless"]).into(),
            Item::new("Private Wi-Fi Address").into(),
        ]);

        let results = search(&nodes, "Wi-Fi");
        let scores: HashMap<&str, u32> = results
            .iter_hits()
            .map(|hit| (hit.title.as_str(), hit.score()))
            .collect();
        assert!(scores["Wi-Fi"] > scores["Wi-Fi Settings"]);
        assert!(scores["Wi-Fi Settings"] > scores["Private Wi-Fi Address"]);

        let tag = search(&nodes, "wireless");
        let bluetooth = tag.iter_hits().next().unwrap();
        assert_eq!(bluetooth.title, "Bluetooth");
        assert!(bluetooth.score() < scores["Private Wi-Fi Address"]);
    }

    #[test]
    fn test_walk_order_is_kept_by_default() {
        let nodes = tree(&[Item::new("Wi-Fi Settings").into(), Item::new("Wi-Fi").into()]);
        let results = search(&nodes, "wifi");
        assert_eq!(titles(&results), vec!["Wi-Fi Settings", "Wi-Fi"]);
    }

    #[test]
    fn test_score_order_is_opt_in() {
        let nodes = tree(&[Item::new("Wi-Fi Settings").into(), Item::new("Wi-Fi").into()]);
        let engine = SearchEngine::new(SearchOptions {
            order: ResultOrder::Score,
            ..SearchOptions::default()
        });

        let results = engine.search(&nodes, &Query::parse("wifi").unwrap());
        assert_eq!(titles(&results), vec!["Wi-Fi", "Wi-Fi Settings"]);
    }

    #[test]
    fn test_grouping_by_nearest_ancestor() {
        let results = search(&fixture_tree(), "wi");

        assert_eq!(results.buckets.len(), 1);
        let bucket = &results.buckets[0];
        let ancestor = bucket.ancestor.as_ref().unwrap();
        assert_eq!(ancestor.title, "Connections");
        assert_eq!(ancestor.presentation, Presentation::Inline);
        assert_eq!(bucket.hits.len(), 1);
        assert_eq!(bucket.hits[0].title, "Wi-Fi");
        assert!(titles(&results).iter().all(|title| *title != "General"));
    }

    #[test]
    fn test_buckets_follow_first_seen_order() {
        let results = search(&fixture_tree(), "e");
        let ancestors: Vec<_> = results
            .buckets
            .iter()
            .map(|bucket| bucket.ancestor.as_ref().map(|a| a.title.as_str()))
            .collect();

        assert_eq!(ancestors, vec![None, Some("Display")]);
        assert_eq!(
            titles(&results),
            vec![
                "Connections",
                "Airplane Mode",
                "Wi-Fi",
                "General",
                "Credits",
                "Dark Mode",
                "Brightness"
            ]
        );
    }

    #[test]
    fn test_matched_navigation_group_is_not_descended() {
        let nodes = tree(&[Group::new("Display")
            .content(vec![Item::new("Display Zoom").into()])
            .into()]);

        let results = search(&nodes, "display");
        assert_eq!(titles(&results), vec!["Display"]);
        assert_eq!(results.buckets[0].hits[0].kind, HitKind::Group(Presentation::Navigation));
        assert!(results.buckets[0].ancestor.is_none());
    }

    #[test]
    fn test_matched_inline_group_carries_matching_items() {
        let nodes = tree(&[Group::new("Sound")
            .inline()
            .content(vec![
                Item::new("Sound Effects").into(),
                Item::new("Volume").into(),
                Item::new("Ringtone Sound").searchable(false).into(),
            ])
            .into()]);

        let results = search(&nodes, "sound");
        assert_eq!(results.buckets.len(), 1);
        let hit = &results.buckets[0].hits[0];
        assert_eq!(hit.kind, HitKind::Group(Presentation::Inline));
        let inline: Vec<_> = hit.inline_items.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(inline, vec!["Sound Effects"]);
        assert_eq!(results.len(), 2);
    }

    fn network_tree(proxy_title: &str) -> Vec<Node> {
        tree(&[Group::new("Network")
            .inline()
            .content(vec![
                Item::new("Network Name").into(),
                Group::new(proxy_title)
                    .content(vec![Item::new("Network Timeout").into()])
                    .into(),
            ])
            .into()])
    }

    #[test]
    fn test_inline_group_keeps_nested_navigation_group_closed() {
        let results = search(&network_tree("Network Proxy"), "network");

        assert_eq!(results.buckets.len(), 1);
        let hit = &results.buckets[0].hits[0];
        let inline: Vec<_> = hit
            .inline_items
            .iter()
            .map(|h| (h.title.as_str(), h.kind))
            .collect();
        assert_eq!(
            inline,
            vec![
                ("Network Name", HitKind::Item),
                ("Network Proxy", HitKind::Group(Presentation::Navigation)),
            ]
        );
        assert!(!titles(&results).contains(&"Network Timeout"));
    }

    #[test]
    fn test_unmatched_nested_navigation_group_becomes_ancestor() {
        let results = search(&network_tree("Proxy"), "network");
        let ancestors: Vec<_> = results
            .buckets
            .iter()
            .map(|bucket| bucket.ancestor.as_ref().map(|a| a.title.as_str()))
            .collect();

        assert_eq!(ancestors, vec![None, Some("Proxy")]);
        assert_eq!(titles(&results), vec!["Network", "Network Name", "Network Timeout"]);
    }

    #[test]
    fn test_nested_inline_sections_are_flattened() {
        let nodes = tree(&[Group::new("Sound")
            .inline()
            .content(vec![
                Group::new("Alerts")
                    .inline()
                    .content(vec![Item::new("Alert Sound").into()])
                    .into(),
                Item::new("Sound Check").into(),
            ])
            .into()]);

        let results = search(&nodes, "sound");
        assert_eq!(results.buckets.len(), 1);
        let inline: Vec<_> = results.buckets[0].hits[0]
            .inline_items
            .iter()
            .map(|h| h.title.as_str())
            .collect();
        assert_eq!(inline, vec!["Alert Sound", "Sound Check"]);
    }

    #[test]
    fn test_score_order_sorts_inline_items() {
        let nodes = tree(&[Group::new("Wi-Fi")
            .inline()
            .content(vec![
                Item::new("Private Wi-Fi Address").into(),
                Item::new("Wi-Fi").into(),
                Item::new("Wi-Fi Settings").into(),
            ])
            .into()]);
        let query = Query::parse("wifi").unwrap();

        let walk = search(&nodes, "wifi");
        assert_eq!(
            titles(&walk),
            vec!["Wi-Fi", "Private Wi-Fi Address", "Wi-Fi", "Wi-Fi Settings"]
        );

        let engine = SearchEngine::new(SearchOptions {
            order: ResultOrder::Score,
            ..SearchOptions::default()
        });
        let ranked = engine.search(&nodes, &query);
        assert_eq!(
            titles(&ranked),
            vec!["Wi-Fi", "Wi-Fi", "Wi-Fi Settings", "Private Wi-Fi Address"]
        );
    }

    #[test]
    fn test_round_trip_tag_match_under_display() {
        let registry = ViewRegistry::new();
        let fixture = testing::settings_fixture();
        let nodes = build_tree(&fixture.content, &registry);

        let results = search(&nodes, "theme");
        assert_eq!(results.buckets.len(), 1);
        let bucket = &results.buckets[0];
        assert_eq!(bucket.ancestor.as_ref().unwrap().title, "Display");
        assert_eq!(bucket.hits.len(), 1);

        let hit = &bucket.hits[0];
        assert_eq!(hit.title, "Dark Mode");
        assert_eq!(hit.matched.field, MatchField::Tag("theme".into()));
        assert_eq!(hit.matched.kind, MatchKind::Exact);

        let mut view = registry.resolve(hit.id).unwrap();
        assert!(view.is_interactive());
        view.activate();
        assert!(fixture.dark_mode.get());
    }

    #[test]
    fn test_raw_text_is_not_searchable() {
        let results = search(&fixture_tree(), "blue");
        assert!(results.is_empty());
        assert_eq!(results.len(), 0);
    }

    #[test]
    fn test_custom_group_hit() {
        let results = search(&fixture_tree(), "credits");
        let hit = results.iter_hits().next().unwrap();
        assert_eq!(hit.kind, HitKind::CustomGroup);
        assert_eq!(hit.icon, Some(NodeIcon::Custom));
    }

    #[test]
    fn test_blank_query_has_no_results() {
        assert!(search(&fixture_tree(), "").is_empty());
        assert!(search(&fixture_tree(), " - ").is_empty());
    }

    #[test]
    fn test_bucket_lookup() {
        let nodes = fixture_tree();
        let results = search(&nodes, "brightness");
        let display = walk_display(&nodes);

        assert!(results.bucket(Some(display)).is_some());
        assert!(results.bucket(None).is_none());
    }

    fn walk_display(nodes: &[Node]) -> NodeId {
        crate::node::walk_tree(nodes)
            .find(|node| node.title() == "Display")
            .map(Node::id)
            .unwrap()
    }
}
