use std::collections::HashSet;

use itertools::Itertools;

use crate::types::{DenseItemset, ItemId};

/// A candidate k-itemset together with the positions, in the previous
/// level, of the two (k-1)-itemsets that generated it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub itemset: DenseItemset,
    pub left: usize,
    pub right: usize,
}

/// Join itemsets sharing their first k-2 items.
///
/// `itemsets` must be sorted and every itemset sorted ascending. Each
/// candidate is produced exactly once.
/// https://github.com/tommyod/Efficient-Apriori/blob/master/efficient_apriori/itemsets.py
pub fn join_prefix(itemsets: &[DenseItemset]) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut tails: Vec<(usize, ItemId)> = Vec::with_capacity(itemsets.len());

    let mut i = 0;
    while i < itemsets.len() {
        let (prefix, last) = match itemsets[i].split_last() {
            Some((&last, prefix)) => (prefix, last),
            None => {
                i += 1;
                continue;
            }
        };

        tails.clear();
        tails.push((i, last));

        for (j, other) in itemsets.iter().enumerate().skip(i + 1) {
            match other.split_last() {
                Some((&other_last, other_prefix)) if other_prefix == prefix => {
                    tails.push((j, other_last));
                }
                _ => break,
            }
        }

        for (&(left, a), &(right, b)) in tails.iter().tuple_combinations() {
            let mut itemset = Vec::with_capacity(prefix.len() + 2);
            itemset.extend_from_slice(prefix);
            itemset.push(a);
            itemset.push(b);
            candidates.push(Candidate {
                itemset,
                left,
                right,
            });
        }

        i += tails.len();
    }

    candidates
}

/// Join every unordered pair whose symmetric difference is exactly two items.
///
/// A candidate reachable from several pairs is kept once, from the first
/// pair that produced it.
pub fn join_pairwise(itemsets: &[DenseItemset]) -> Vec<Candidate> {
    let mut seen: HashSet<DenseItemset> = HashSet::new();
    let mut candidates = Vec::new();

    for (left, right) in (0..itemsets.len()).tuple_combinations() {
        let itemset = match union_if_adjacent(&itemsets[left], &itemsets[right]) {
            Some(itemset) => itemset,
            None => continue,
        };
        if seen.contains(&itemset) {
            continue;
        }
        seen.insert(itemset.clone());
        candidates.push(Candidate {
            itemset,
            left,
            right,
        });
    }

    candidates
}

/// Union of two sorted, equally sized itemsets, if it is exactly one item
/// larger than either of them.
pub fn union_if_adjacent(a: &[ItemId], b: &[ItemId]) -> Option<DenseItemset> {
    if a.len() != b.len() {
        return None;
    }
    let union: DenseItemset = a.iter().merge(b.iter()).dedup().copied().collect();
    if union.len() == a.len() + 1 {
        Some(union)
    } else {
        None
    }
}

/// True when some (k-1)-subset of `candidate` is not among `frequent`.
pub fn has_infrequent_subset(candidate: &[ItemId], frequent: &HashSet<DenseItemset>) -> bool {
    if candidate.len() <= 2 {
        return false;
    }
    let mut subset: DenseItemset = Vec::with_capacity(candidate.len() - 1);
    (0..candidate.len()).any(|skip| {
        subset.clear();
        subset.extend(
            candidate
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &item)| item),
        );
        !frequent.contains(&subset)
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn itemsets(candidates: &[Candidate]) -> Vec<DenseItemset> {
        candidates.iter().map(|c| c.itemset.clone()).sorted().collect()
    }

    #[test]
    fn test_join_prefix() {
        let level: Vec<DenseItemset> = vec![
            vec![1, 2, 3],
            vec![1, 2, 4],
            vec![1, 3, 4],
            vec![1, 3, 5],
            vec![2, 3, 4],
        ];
        let y = join_prefix(&level);
        assert_eq!(itemsets(&y), vec![vec![1, 2, 3, 4], vec![1, 3, 4, 5]]);
        assert_eq!((y[0].left, y[0].right), (0, 1));
        assert_eq!((y[1].left, y[1].right), (2, 3));
    }

    #[test]
    fn test_join_prefix_singletons() {
        let level: Vec<DenseItemset> = vec![vec![0], vec![1], vec![2]];
        let y = join_prefix(&level);
        assert_eq!(itemsets(&y), vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
    }

    #[test]
    fn test_join_prefix_no_shared_prefix() {
        let level: Vec<DenseItemset> = vec![vec![10, 11], vec![13, 14]];
        assert!(join_prefix(&level).is_empty());
        assert!(join_prefix(&[]).is_empty());
    }

    #[test]
    fn test_join_pairwise_deduplicates() {
        // {1,2,3} is reachable from three different pairs.
        let level: Vec<DenseItemset> = vec![vec![1, 2], vec![1, 3], vec![2, 3]];
        let y = join_pairwise(&level);
        assert_eq!(itemsets(&y), vec![vec![1, 2, 3]]);
        assert_eq!((y[0].left, y[0].right), (0, 1));
    }

    #[test]
    fn test_join_pairwise_finds_what_prefix_finds() {
        let level: Vec<DenseItemset> = vec![
            vec![1, 2],
            vec![1, 3],
            vec![1, 4],
            vec![2, 3],
            vec![3, 4],
        ];
        // {2,3,4} only comes out of the pair ({2,3}, {3,4}).
        assert_eq!(
            itemsets(&join_pairwise(&level)),
            vec![
                vec![1, 2, 3],
                vec![1, 2, 4],
                vec![1, 3, 4],
                vec![2, 3, 4]
            ]
        );
        assert_eq!(
            itemsets(&join_prefix(&level)),
            vec![vec![1, 2, 3], vec![1, 2, 4], vec![1, 3, 4]]
        );
    }

    #[test]
    fn test_union_if_adjacent() {
        assert_eq!(union_if_adjacent(&[1, 2], &[1, 3]), Some(vec![1, 2, 3]));
        assert_eq!(union_if_adjacent(&[1, 2], &[3, 4]), None);
        assert_eq!(union_if_adjacent(&[1, 2], &[1, 2]), None);
        assert_eq!(union_if_adjacent(&[5], &[2]), Some(vec![2, 5]));
    }

    #[test]
    fn test_has_infrequent_subset() {
        let frequent: HashSet<DenseItemset> =
            vec![vec![1, 2], vec![1, 3], vec![2, 3], vec![1, 4]]
                .into_iter()
                .collect();
        assert!(!has_infrequent_subset(&[1, 2, 3], &frequent));
        assert!(has_infrequent_subset(&[1, 2, 4], &frequent));
        assert!(!has_infrequent_subset(&[1, 2], &frequent));
    }
}
