//! Property tests for top-k selection.

use kombu_search::{ScoredCandidate, TopKSelector};
use proptest::prelude::*;
use std::cmp::Reverse;

// Reference implementation: stable full sort, then truncate. Stability keeps
// arrival order for equal scores, which is the selector's tie-break contract.
fn naive_topk(pairs: &[(u32, i64)], k: usize) -> Vec<ScoredCandidate<u32>> {
    let mut sorted = pairs.to_vec();
    sorted.sort_by_key(|(_, score)| Reverse(*score));
    sorted
        .into_iter()
        .take(k)
        .map(|(id, score)| ScoredCandidate { id, score })
        .collect()
}

fn arb_pairs() -> impl Strategy<Value = Vec<(u32, i64)>> {
    prop::collection::vec((any::<u32>(), -1_000i64..1_000), 0..200)
}

proptest! {
    #[test]
    fn selection_matches_full_sort(pairs in arb_pairs(), k in 1usize..25) {
        let selected = TopKSelector::select(pairs.iter().cloned(), k).unwrap();
        prop_assert_eq!(selected, naive_topk(&pairs, k));
    }

    #[test]
    fn selection_length_is_min_of_k_and_input(pairs in arb_pairs(), k in 1usize..25) {
        let selected = TopKSelector::select(pairs.iter().cloned(), k).unwrap();
        prop_assert_eq!(selected.len(), k.min(pairs.len()));
    }

    #[test]
    fn scores_never_increase(pairs in arb_pairs(), k in 1usize..25) {
        let selected = TopKSelector::select(pairs.iter().cloned(), k).unwrap();
        for pair in selected.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn selection_is_deterministic(pairs in arb_pairs(), k in 1usize..25) {
        let a = TopKSelector::select(pairs.iter().cloned(), k).unwrap();
        let b = TopKSelector::select(pairs.iter().cloned(), k).unwrap();
        prop_assert_eq!(a, b);
    }
}
