// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{cmp::Reverse, collections::HashSet};

use log::debug;

use super::helper_constants::DIGIT_COUNT;
use crate::catalog::{Catalog, PrefixRecord, RecordId};

/// Index of a node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

pub(crate) const ROOT: NodeId = NodeId(0);

/// Child links of a frozen node. `Leaf` means no catalog path continues
/// below the node, which lets the matcher stop without scanning ten slots.
#[derive(Debug, Clone)]
pub(crate) enum Children {
    Branch([Option<NodeId>; DIGIT_COUNT]),
    Leaf,
}

#[derive(Debug, Clone)]
pub(crate) struct TrieNode {
    children: Children,
    /// Records whose path passes through or ends at this node, by rank.
    partial: Box<[RecordId]>,
    /// Records whose path ends exactly at this node, by rank.
    exact: Box<[RecordId]>,
}

impl TrieNode {
    pub(crate) fn child(&self, digit: usize) -> Option<NodeId> {
        match &self.children {
            Children::Branch(children) => children.get(digit).copied().flatten(),
            Children::Leaf => None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.children, Children::Leaf)
    }

    pub(crate) fn partial(&self) -> &[RecordId] {
        &self.partial
    }

    pub(crate) fn exact(&self) -> &[RecordId] {
        &self.exact
    }
}

/// Immutable 10-ary digit trie over the paths of a [`Catalog`].
///
/// Nodes live in a flat arena and refer to each other by [`NodeId`].
/// Records are referenced by [`RecordId`]; the record ranks are copied in
/// so that ambiguous matches can be ordered without the catalog.
#[derive(Debug, Clone)]
pub(crate) struct PrefixTrie {
    nodes: Box<[TrieNode]>,
    ranks: Box<[u32]>,
}

impl PrefixTrie {
    pub(crate) fn build(catalog: &Catalog) -> Self {
        let mut builder = TrieBuilder::new();
        for record in catalog.records() {
            builder.insert(record);
        }
        let ranks: Box<[u32]> = catalog.records().iter().map(PrefixRecord::rank).collect();
        let trie = builder.finalize(&ranks);
        debug!(
            "Built prefix trie: {} records, {} nodes",
            catalog.len(),
            trie.nodes.len()
        );
        trie
    }

    pub(crate) fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    pub(crate) fn rank(&self, id: RecordId) -> u32 {
        self.ranks[id.index()]
    }

    #[cfg(test)]
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walks `digits` from the root. Used by tests to look at single nodes.
    #[cfg(test)]
    pub(crate) fn find(&self, digits: &str) -> Option<&TrieNode> {
        let mut id = ROOT;
        for digit in digits.chars().filter_map(|ch| ch.to_digit(10)) {
            id = self.node(id).child(digit as usize)?;
        }
        Some(self.node(id))
    }
}

#[derive(Debug, Default)]
struct BuilderNode {
    children: [Option<NodeId>; DIGIT_COUNT],
    partial: Vec<RecordId>,
    exact: Vec<RecordId>,
}

/// Mutable first phase of the build. Lists may hold duplicates and are in
/// insertion order until [`TrieBuilder::finalize`].
struct TrieBuilder {
    nodes: Vec<BuilderNode>,
}

impl TrieBuilder {
    fn new() -> Self {
        Self {
            nodes: vec![BuilderNode::default()],
        }
    }

    fn insert(&mut self, record: &PrefixRecord) {
        for path in record.digit_paths() {
            let mut current = ROOT;
            for digit in path.bytes().map(|b| usize::from(b - b'0')) {
                current = self.child_or_insert(current, digit);
                self.nodes[current.0].partial.push(record.id());
            }
            self.nodes[current.0].exact.push(record.id());
        }
    }

    fn child_or_insert(&mut self, parent: NodeId, digit: usize) -> NodeId {
        if let Some(child) = self.nodes[parent.0].children[digit] {
            return child;
        }
        let child = NodeId(self.nodes.len());
        self.nodes.push(BuilderNode::default());
        self.nodes[parent.0].children[digit] = Some(child);
        child
    }

    fn finalize(self, ranks: &[u32]) -> PrefixTrie {
        let nodes = self
            .nodes
            .into_iter()
            .map(|node| TrieNode {
                children: if node.children.iter().all(Option::is_none) {
                    Children::Leaf
                } else {
                    Children::Branch(node.children)
                },
                partial: rank_ordered(node.partial, ranks),
                exact: rank_ordered(node.exact, ranks),
            })
            .collect();
        PrefixTrie {
            nodes,
            ranks: ranks.into(),
        }
    }
}

/// Deduplicates by id keeping the first occurrence, then sorts by
/// descending rank. The sort is stable, so equal ranks keep catalog order.
fn rank_ordered(mut ids: Vec<RecordId>, ranks: &[u32]) -> Box<[RecordId]> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.retain(|id| seen.insert(*id));
    ids.sort_by_key(|id| Reverse(ranks[id.index()]));
    ids.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::{PrefixTrie, ROOT};
    use crate::catalog::{Catalog, PrefixRecord, RecordId};

    fn trie_for(records: Vec<PrefixRecord>) -> PrefixTrie {
        PrefixTrie::build(&Catalog::from_records(records).unwrap())
    }

    #[test]
    fn every_node_on_the_path_holds_the_record() {
        let trie = trie_for(vec![
            PrefixRecord::new("1", "United States").with_rank(300),
            PrefixRecord::new("1", "Jamaica").with_region_prefixes(["876"]).with_rank(3),
        ]);
        assert_eq!(trie.find("1").unwrap().partial(), &[RecordId(0), RecordId(1)]);
        assert_eq!(trie.find("1").unwrap().exact(), &[RecordId(0)]);
        assert_eq!(trie.find("18").unwrap().partial(), &[RecordId(1)]);
        assert!(trie.find("18").unwrap().exact().is_empty());
        assert_eq!(trie.find("1876").unwrap().exact(), &[RecordId(1)]);
        assert!(trie.find("1877").is_none());
        // root + 1 + 8 + 7 + 6
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn shared_region_prefix_digits_are_deduplicated() {
        let trie = trie_for(vec![
            PrefixRecord::new("44", "Jersey").with_region_prefixes(["1534", "7509", "7700"]),
        ]);
        // both 7509 and 7700 pass through 447
        assert_eq!(trie.find("447").unwrap().partial(), &[RecordId(0)]);
        assert_eq!(trie.find("4475").unwrap().partial(), &[RecordId(0)]);
    }

    #[test]
    fn lists_are_sorted_by_rank_with_stable_ties() {
        let trie = trie_for(vec![
            PrefixRecord::new("590", "Saint Barthélemy").with_rank(10),
            PrefixRecord::new("590", "Guadeloupe").with_rank(400),
            PrefixRecord::new("590", "Saint Martin").with_rank(10),
        ]);
        assert_eq!(
            trie.find("590").unwrap().exact(),
            &[RecordId(1), RecordId(0), RecordId(2)]
        );
    }

    #[test]
    fn nodes_without_children_become_leaves() {
        let trie = trie_for(vec![
            PrefixRecord::new("7", "Russia"),
            PrefixRecord::new("7", "Kazakhstan").with_region_prefixes(["6", "7"]),
        ]);
        assert!(!trie.node(ROOT).is_leaf());
        assert!(!trie.find("7").unwrap().is_leaf());
        assert!(trie.find("76").unwrap().is_leaf());
        assert!(trie.find("77").unwrap().is_leaf());
    }

    #[test]
    fn reserved_records_are_inserted() {
        let trie = trie_for(vec![PrefixRecord::new("881", "Global Mobile Satellite System")]);
        assert_eq!(trie.find("881").unwrap().exact(), &[RecordId(0)]);
    }

    #[test]
    fn empty_catalog_builds_a_leaf_root() {
        let trie = trie_for(Vec::new());
        assert!(trie.node(ROOT).is_leaf());
    }
}
