use std::collections::HashMap;
use std::hash::Hash;

use crate::types::{FrequentItemsets, ItemsetCounts, ItemsetCountsByLength, ItemsetLength};

/// Support count of every frequent itemset.
pub fn support_counts<I, T>(frequent_itemsets: &FrequentItemsets<I, T>) -> ItemsetCounts<I>
where
    I: Ord + Hash + Clone,
{
    frequent_itemsets
        .iter()
        .map(|(itemset, tids)| (itemset.clone(), tids.len()))
        .collect()
}

/// Support counts grouped by itemset length.
pub fn counts_by_length<I, T>(
    frequent_itemsets: &FrequentItemsets<I, T>,
) -> ItemsetCountsByLength<I>
where
    I: Ord + Hash + Clone,
{
    let mut grouped: ItemsetCountsByLength<I> = HashMap::new();
    for (itemset, tids) in frequent_itemsets {
        grouped
            .entry(itemset.len())
            .or_default()
            .insert(itemset.clone(), tids.len());
    }
    grouped
}

/// Length of the longest frequent itemset, 0 when there are none.
pub fn max_itemset_length<I, T>(frequent_itemsets: &FrequentItemsets<I, T>) -> ItemsetLength {
    frequent_itemsets.keys().map(|itemset| itemset.len()).max().unwrap_or(0)
}
