//! Output formatting for CLI display
//!
//! Plain text renditions of search results and node trees for the `search`
//! and `tree` commands. Quiet mode drops decoration and prints titles only.

use crate::node::{Node, NodeIcon, Presentation};
use crate::search::{HitKind, MatchField, MatchKind, ResultBucket, SearchHit};
use colored::Colorize;

fn icon_prefix(icon: Option<&NodeIcon>) -> String {
    match icon {
        Some(NodeIcon::Symbol(symbol)) => format!("{symbol} "),
        Some(NodeIcon::Custom) | None => String::new(),
    }
}

const fn kind_label(kind: HitKind) -> &'static str {
    match kind {
        HitKind::Item => "item",
        HitKind::Group(Presentation::Navigation) => "group",
        HitKind::Group(Presentation::Inline) => "section",
        HitKind::CustomGroup => "page",
    }
}

/// Describe which field matched and how
#[must_use]
pub fn match_description(hit: &SearchHit) -> String {
    let kind = match hit.matched.kind {
        MatchKind::Exact => "exact",
        MatchKind::Prefix => "prefix",
        MatchKind::Contains => "contains",
    };
    match &hit.matched.field {
        MatchField::Title => format!("title {kind}"),
        MatchField::Tag(tag) => format!("tag '{tag}' {kind}"),
    }
}

/// Heading line for a result bucket
///
/// Hits without a grouping ancestor are listed under `root_title`.
#[must_use]
pub fn bucket_heading(bucket: &ResultBucket, root_title: &str, quiet: bool) -> String {
    let title = bucket
        .ancestor
        .as_ref()
        .map_or(root_title, |ancestor| ancestor.title.as_str());
    if quiet {
        title.to_string()
    } else {
        title.bold().to_string()
    }
}

/// Lines for one hit, followed by its inline items
#[must_use]
pub fn hit_lines(hit: &SearchHit, quiet: bool) -> Vec<String> {
    let mut lines = vec![hit_line(hit, 1, quiet)];
    lines.extend(hit.inline_items.iter().map(|item| hit_line(item, 2, quiet)));
    lines
}

fn hit_line(hit: &SearchHit, depth: usize, quiet: bool) -> String {
    let indent = "  ".repeat(depth);
    if quiet {
        return format!("{indent}{}", hit.title);
    }
    let detail = format!(
        "[{}] {} ({})",
        kind_label(hit.kind),
        match_description(hit),
        hit.score()
    );
    format!("{indent}{}{}  {}", icon_prefix(hit.icon.as_ref()), hit.title, detail.dimmed())
}

/// One line per node, indented by depth, with its short identity
#[must_use]
pub fn tree_lines(nodes: &[Node], quiet: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for node in nodes {
        push_tree_lines(node, 0, quiet, &mut lines);
    }
    lines
}

fn push_tree_lines(node: &Node, depth: usize, quiet: bool, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let label = match node {
        Node::Group(group) if group.custom => "page",
        Node::Group(group) => match group.presentation {
            Presentation::Navigation => "group",
            Presentation::Inline => "section",
        },
        Node::Item(item) if !item.searchable => "item, hidden",
        Node::Item(_) => "item",
    };

    if quiet {
        lines.push(format!("{} {indent}{}", node.id().short(), node.title()));
    } else {
        let tags = if node.tags().is_empty() {
            String::new()
        } else {
            format!(" {{{}}}", node.tags().join(", "))
        };
        lines.push(format!(
            "{} {indent}{}{}  {}{}",
            node.id().short().dimmed(),
            icon_prefix(node.icon()),
            node.title(),
            format!("[{label}]").cyan(),
            tags.dimmed()
        ));
    }

    for child in node.children() {
        push_tree_lines(child, depth + 1, quiet, lines);
    }
}
