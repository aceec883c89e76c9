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

use std::cmp::Reverse;

use log::trace;

use super::{
    helper_types::IdMatch,
    prefix_trie::{NodeId, PrefixTrie, ROOT},
};
use crate::{catalog::RecordId, interfaces::MatcherApi};

impl PrefixTrie {
    /// Exact records of `exact_node` followed by the partial records of
    /// `node`, without duplicates, re-sorted by rank. Exact records win
    /// rank ties.
    fn union_by_rank(&self, exact_node: NodeId, node: NodeId) -> Vec<RecordId> {
        let mut union: Vec<RecordId> = self.node(exact_node).exact().to_vec();
        for id in self.node(node).partial() {
            if !union.contains(id) {
                union.push(*id);
            }
        }
        union.sort_by_key(|id| Reverse(self.rank(*id)));
        union
    }
}

impl MatcherApi for PrefixTrie {
    fn match_prefix(&self, input: &str, match_exact_only: bool) -> Option<IdMatch> {
        if !input.bytes().any(|b| b.is_ascii_digit()) {
            return None;
        }

        let mut exact_only = match_exact_only;
        let mut node = ROOT;
        let mut next_index = 0;
        // Deepest node with a non-empty exact list seen so far.
        let mut exact_node = ROOT;
        let mut exact_index = 0;

        for (pos, ch) in input.char_indices() {
            let current = self.node(node);
            if current.is_leaf() {
                // dead end, nothing below can tell candidates apart
                exact_only = true;
                break;
            }
            let Some(digit) = ch.to_digit(10) else {
                continue;
            };
            let Some(child) = current.child(digit as usize) else {
                exact_only = true;
                break;
            };
            node = child;
            next_index = pos + ch.len_utf8();
            if !self.node(child).exact().is_empty() {
                exact_node = child;
                exact_index = next_index;
            }
        }

        let found = if exact_only {
            IdMatch {
                next_index: exact_index,
                candidates: self.node(exact_node).exact().to_vec(),
            }
        } else if node != exact_node {
            IdMatch {
                next_index,
                candidates: self.union_by_rank(exact_node, node),
            }
        } else {
            IdMatch {
                next_index,
                candidates: self.node(node).partial().to_vec(),
            }
        };
        trace!(
            "Matched '{}' (exact only: {}) up to byte {}: {:?}",
            input, exact_only, found.next_index, found.candidates
        );
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        catalog::{Catalog, PrefixRecord, RecordId},
        interfaces::MatcherApi,
        phoneprefixutil::{helper_types::IdMatch, prefix_trie::PrefixTrie},
    };

    // 0: US "1", 1: Jamaica "1876", 2: Dominican Republic "1809"
    // 3: Russia "7", 4: Kazakhstan "76"/"77", 5: Sweden "46"
    fn trie() -> PrefixTrie {
        let catalog = Catalog::from_records(vec![
            PrefixRecord::new("1", "United States").with_rank(331_900),
            PrefixRecord::new("1", "Jamaica").with_region_prefixes(["876"]).with_rank(2_830),
            PrefixRecord::new("1", "Dominican Republic").with_region_prefixes(["809"]).with_rank(11_230),
            PrefixRecord::new("7", "Russia").with_rank(146_000),
            PrefixRecord::new("7", "Kazakhstan").with_region_prefixes(["6", "7"]).with_rank(19_000),
            PrefixRecord::new("46", "Sweden").with_rank(10_400),
        ])
        .unwrap();
        PrefixTrie::build(&catalog)
    }

    fn ids(raw: &[usize]) -> Vec<RecordId> {
        raw.iter().map(|id| RecordId(*id)).collect()
    }

    #[test]
    fn no_digits() {
        let trie = trie();
        assert_eq!(trie.match_prefix("", false), None);
        assert_eq!(trie.match_prefix("+()- ", true), None);
        assert_eq!(trie.match_prefix("tel:+", false), None);
    }

    #[test]
    fn bare_shared_code_returns_all_sharers() {
        let found = trie().match_prefix("1", false).unwrap();
        assert_eq!(found, IdMatch { next_index: 1, candidates: ids(&[0, 2, 1]) });
    }

    #[test]
    fn ambiguous_input_keeps_the_shorter_exact_match() {
        // "18" is not a boundary, US at "1" is
        let found = trie().match_prefix("+18", false).unwrap();
        assert_eq!(found, IdMatch { next_index: 3, candidates: ids(&[0, 2, 1]) });

        let found = trie().match_prefix("+187", false).unwrap();
        assert_eq!(found, IdMatch { next_index: 4, candidates: ids(&[0, 1]) });
    }

    #[test]
    fn exact_only_reports_the_deepest_boundary() {
        let found = trie().match_prefix("+187", true).unwrap();
        assert_eq!(found, IdMatch { next_index: 2, candidates: ids(&[0]) });

        let found = trie().match_prefix("+1 876 555 0100", true).unwrap();
        assert_eq!(found, IdMatch { next_index: 6, candidates: ids(&[1]) });
    }

    #[test]
    fn divergence_forces_exact_mode() {
        // no path continues with "12"
        let found = trie().match_prefix("+12125550100", false).unwrap();
        assert_eq!(found, IdMatch { next_index: 2, candidates: ids(&[0]) });
    }

    #[test]
    fn leaf_forces_exact_mode() {
        let found = trie().match_prefix("+46 70 123", false).unwrap();
        assert_eq!(found, IdMatch { next_index: 3, candidates: ids(&[5]) });

        let found = trie().match_prefix("+7 701 234 5678", false).unwrap();
        assert_eq!(found, IdMatch { next_index: 4, candidates: ids(&[4]) });
    }

    #[test]
    fn complete_boundary_without_more_input() {
        let found = trie().match_prefix("+7", false).unwrap();
        assert_eq!(found, IdMatch { next_index: 2, candidates: ids(&[3, 4]) });

        let found = trie().match_prefix("+46", false).unwrap();
        assert_eq!(found, IdMatch { next_index: 3, candidates: ids(&[5]) });
    }

    #[test]
    fn unknown_first_digit() {
        let found = trie().match_prefix("+0123", false).unwrap();
        assert_eq!(found, IdMatch { next_index: 0, candidates: Vec::new() });

        // "4" alone is not a boundary
        let found = trie().match_prefix("+4", true).unwrap();
        assert_eq!(found, IdMatch { next_index: 0, candidates: Vec::new() });
    }

    #[test]
    fn repeated_calls_are_identical() {
        let trie = trie();
        let first = trie.match_prefix("+18", false);
        for _ in 0..10 {
            assert_eq!(trie.match_prefix("+18", false), first);
        }
    }
}
