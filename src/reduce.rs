//! Document tree reduction.
//!
//! Walks a Figma document tree and keeps only frames, components, instances
//! and text layers. Any other node survives as a bare wrapper if something
//! below it is kept, and disappears otherwise.

use std::collections::BTreeMap;

use crate::types::{
    FigmaFileResponse, FigmaNode, KeptNode, SimplifiedNode, TextContent, WrapperNode,
};

/// Node types preserved with their identifying fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeptType {
    Frame,
    Component,
    Instance,
    Text,
}

impl KeptType {
    pub const ALL: [KeptType; 4] = [
        KeptType::Frame,
        KeptType::Component,
        KeptType::Instance,
        KeptType::Text,
    ];

    /// Matches the Figma type string exactly (types are upper-case on the wire).
    pub fn from_node_type(node_type: &str) -> Option<Self> {
        match node_type {
            "FRAME" => Some(KeptType::Frame),
            "COMPONENT" => Some(KeptType::Component),
            "INSTANCE" => Some(KeptType::Instance),
            "TEXT" => Some(KeptType::Text),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KeptType::Frame => "FRAME",
            KeptType::Component => "COMPONENT",
            KeptType::Instance => "INSTANCE",
            KeptType::Text => "TEXT",
        }
    }
}

/// Reduces the subtree rooted at `node`.
///
/// Returns `None` when neither the node nor any descendant is of a kept type.
/// Kept nodes are returned even when none of their children survive.
///
/// Walks the tree with an explicit stack, so nesting depth is bounded only
/// by memory.
pub fn reduce_node(node: &FigmaNode) -> Option<SimplifiedNode> {
    let mut stack = vec![Pending::new(node)];
    while let Some(top) = stack.last_mut() {
        if let Some(child) = top.unvisited.next() {
            stack.push(Pending::new(child));
            continue;
        }
        let reduced = stack.pop().and_then(Pending::finish);
        match stack.last_mut() {
            Some(parent) => parent.reduced.extend(reduced),
            None => return reduced,
        }
    }
    None
}

/// A node whose children are still being reduced.
struct Pending<'a> {
    node: &'a FigmaNode,
    unvisited: std::slice::Iter<'a, FigmaNode>,
    reduced: Vec<SimplifiedNode>,
}

impl<'a> Pending<'a> {
    fn new(node: &'a FigmaNode) -> Self {
        Self {
            node,
            unvisited: node.children.as_deref().unwrap_or(&[]).iter(),
            reduced: Vec::new(),
        }
    }

    fn finish(self) -> Option<SimplifiedNode> {
        let node = self.node;
        match node.type_str().and_then(KeptType::from_node_type) {
            Some(kept_type) => {
                let text = (kept_type == KeptType::Text)
                    .then(|| TextContent::new(node.characters.clone(), node.style.clone()));
                Some(SimplifiedNode::Kept(KeptNode {
                    name: node.name.clone(),
                    node_type: kept_type.as_str().to_string(),
                    absolute_bounding_box: node.absolute_bounding_box.clone(),
                    children: self.reduced,
                    text,
                }))
            }
            None if self.reduced.is_empty() => None,
            None => Some(SimplifiedNode::Wrapper(WrapperNode {
                children: self.reduced,
            })),
        }
    }
}

/// Reduces every top-level child of the file's document, in order.
///
/// A response without a document, or a document without children, reduces
/// to an empty list.
pub fn reduce_document(file: &FigmaFileResponse) -> Vec<SimplifiedNode> {
    file.top_level_nodes()
        .iter()
        .filter_map(reduce_node)
        .collect()
}

/// Tally of a reduced tree, for the verbose summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReduceStats {
    pub kept: BTreeMap<KeptType, usize>,
    pub wrappers: usize,
    pub roots: usize,
}

impl ReduceStats {
    pub fn collect(roots: &[SimplifiedNode]) -> Self {
        let mut stats = ReduceStats {
            roots: roots.len(),
            ..Default::default()
        };
        let mut stack: Vec<&SimplifiedNode> = roots.iter().collect();
        while let Some(node) = stack.pop() {
            match node {
                SimplifiedNode::Kept(kept) => {
                    if let Some(kind) = KeptType::from_node_type(&kept.node_type) {
                        *stats.kept.entry(kind).or_default() += 1;
                    }
                }
                SimplifiedNode::Wrapper(_) => stats.wrappers += 1,
            }
            stack.extend(node.children());
        }
        stats
    }

    pub fn total_kept(&self) -> usize {
        self.kept.values().sum()
    }

    pub fn summary_line(&self) -> String {
        let per_type = KeptType::ALL
            .iter()
            .map(|kind| {
                format!(
                    "{} {}",
                    self.kept.get(kind).copied().unwrap_or(0),
                    kind.as_str().to_ascii_lowercase()
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Reduced to {} root(s): {} kept node(s) ({}), {} wrapper(s)",
            self.roots,
            self.total_kept(),
            per_type,
            self.wrappers
        )
    }
}
