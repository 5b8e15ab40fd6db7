//! Balanced, immutable symbol index
//!
//! Entries are stable-sorted by key and laid out in a flat arena. Every node
//! links to its children by arena position: the node for a range
//! `[start, end)` is the middle entry, its left child is the middle of
//! `[start, mid)` and its right child the middle of `[mid + 1, end)`. The
//! resulting tree is complete by construction and is never rebalanced since
//! nothing is inserted after the build.

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::error::IndexError;
use crate::model::{IndexEntry, TableValue};

#[derive(Debug, Clone)]
struct Node {
    entry: IndexEntry,
    left: Option<u32>,
    right: Option<u32>,
}

/// Read-only binary search tree keyed by symbol name.
#[derive(Debug, Clone, Default)]
pub struct SymbolIndex {
    nodes: Vec<Node>,
    root: Option<u32>,
}

impl SymbolIndex {
    /// Build an index from unordered `(key, value)` pairs.
    ///
    /// Duplicate keys keep the entry that came last in `items`, so a table
    /// registered later shadows an earlier one.
    pub fn build<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<IndexEntry>,
    {
        let mut sorted: Vec<IndexEntry> = items.into_iter().map(Into::into).collect();
        // Stable, so equal keys keep their registration order.
        sorted.sort_by(|a, b| a.key.cmp(&b.key));

        let total = sorted.len();
        let mut nodes: Vec<Node> = Vec::with_capacity(total);
        for entry in sorted {
            match nodes.last_mut() {
                Some(last) if last.entry.key == entry.key => {
                    debug!("Shadowing duplicate key: {}", entry.key);
                    last.entry = entry;
                }
                _ => nodes.push(Node {
                    entry,
                    left: None,
                    right: None,
                }),
            }
        }

        let shadowed = total - nodes.len();
        if shadowed > 0 {
            warn!("{} duplicate keys shadowed by later entries", shadowed);
        }

        let len = nodes.len();
        let root = link(&mut nodes, 0, len);
        debug!("Built symbol index with {} entries", len);

        SymbolIndex { nodes, root }
    }

    /// Like [`SymbolIndex::build`], but an empty result is an error.
    pub fn try_build<I>(items: I) -> Result<Self, IndexError>
    where
        I: IntoIterator,
        I::Item: Into<IndexEntry>,
    {
        let index = Self::build(items);
        if index.is_empty() {
            return Err(IndexError::Empty);
        }
        Ok(index)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Longest root-to-leaf path, counted in nodes. Zero for an empty index.
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    fn subtree_height(&self, node: Option<u32>) -> usize {
        match node {
            None => 0,
            Some(i) => {
                let node = &self.nodes[i as usize];
                1 + self
                    .subtree_height(node.left)
                    .max(self.subtree_height(node.right))
            }
        }
    }

    /// Exact-match tree search. Keys are compared byte-for-byte.
    pub fn get(&self, key: &str) -> Option<&TableValue> {
        let mut cursor = self.root;
        while let Some(i) = cursor {
            let node = &self.nodes[i as usize];
            cursor = match key.cmp(node.entry.key.as_str()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(&node.entry.value),
            };
        }
        None
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// In-order traversal of the tree.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder {
            index: self,
            stack: Vec::new(),
            cursor: self.root,
        }
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|entry| entry.key.as_str())
    }
}

fn link(nodes: &mut [Node], start: usize, end: usize) -> Option<u32> {
    if start == end {
        return None;
    }
    let mid = start + (end - start) / 2;
    nodes[mid].left = link(nodes, start, mid);
    nodes[mid].right = link(nodes, mid + 1, end);
    Some(mid as u32)
}

/// Iterator returned by [`SymbolIndex::iter`].
pub struct InOrder<'a> {
    index: &'a SymbolIndex,
    stack: Vec<u32>,
    cursor: Option<u32>,
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a IndexEntry;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(i) = self.cursor {
            self.stack.push(i);
            self.cursor = self.index.nodes[i as usize].left;
        }
        let i = self.stack.pop()?;
        let node = &self.index.nodes[i as usize];
        self.cursor = node.right;
        Some(&node.entry)
    }
}

impl<E: Into<IndexEntry>> FromIterator<E> for SymbolIndex {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        SymbolIndex::build(iter)
    }
}
