//! Horizontal-to-vertical transform and the single-item filters applied to it.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::types::{HorizontalDb, Itemset, SupportCount, TidSet, VerticalDb};

/// Map every distinct item to the set of transactions it appears in.
pub fn build<T, I>(horizontal_db: &HorizontalDb<T, I>) -> VerticalDb<I, T>
where
    T: Ord + Hash + Clone,
    I: Ord + Hash + Clone,
{
    let mut tidsets: HashMap<&I, TidSet<T>> = HashMap::new();

    for (tid, items) in horizontal_db {
        for item in items {
            tidsets.entry(item).or_default().insert(tid.clone());
        }
    }

    debug!(
        transactions = horizontal_db.len(),
        items = tidsets.len(),
        "built vertical database"
    );

    tidsets
        .into_iter()
        .map(|(item, tids)| (Itemset::from([item.clone()]), tids))
        .collect()
}

/// Remove items supported by fewer than `min_support_count` transactions.
pub fn prune_infrequent<I, T>(vertical_db: &mut VerticalDb<I, T>, min_support_count: SupportCount)
where
    I: Ord + Hash,
{
    let before = vertical_db.len();
    vertical_db.retain(|_, tids| tids.len() >= min_support_count);
    debug!(
        removed = before - vertical_db.len(),
        min_support_count, "pruned infrequent items"
    );
}

/// Remove items present in all `n_transactions` transactions.
pub fn prune_universal<I, T>(vertical_db: &mut VerticalDb<I, T>, n_transactions: usize)
where
    I: Ord + Hash,
{
    let before = vertical_db.len();
    vertical_db.retain(|_, tids| tids.len() < n_transactions);
    debug!(
        removed = before - vertical_db.len(),
        n_transactions, "pruned universal items"
    );
}
