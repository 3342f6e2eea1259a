use std::collections::HashSet;
use std::hash::Hash;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::{
    combi::{has_infrequent_subset, join_pairwise, join_prefix, Candidate},
    config::{JoinStrategy, MiningConfig},
    error::Result,
    progress::{LogProgress, Progress},
    tidset::{TidBitmap, TidIndex},
    types::{
        DenseItemset, FrequentItemsets, HorizontalDb, Inventory, Itemset, ItemsetLength,
        SupportCount, TidSet, VerticalDb,
    },
    vertical,
};

/// Frequent itemsets of one length, sorted by itemset. `tidsets[i]` belongs
/// to `itemsets[i]`.
#[derive(Debug, Default)]
struct Level {
    itemsets: Vec<DenseItemset>,
    tidsets: Vec<TidBitmap>,
}

impl Level {
    fn len(&self) -> usize {
        self.itemsets.len()
    }

    fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    fn from_sorted(entries: Vec<(DenseItemset, TidBitmap)>) -> Self {
        let (itemsets, tidsets) = entries.into_iter().unzip();
        Self { itemsets, tidsets }
    }
}

/// Find every itemset supported by at least `config.min_support_count`
/// transactions, mapped to the tids of those transactions.
///
/// Level progress is logged through `tracing`.
pub fn mine<T, I>(
    horizontal_db: &HorizontalDb<T, I>,
    config: &MiningConfig,
) -> Result<FrequentItemsets<I, T>>
where
    T: Ord + Hash + Clone,
    I: Ord + Hash + Clone,
{
    mine_with_progress(horizontal_db, config, &mut LogProgress)
}

/// Same as [`mine`], reporting level events to `progress` instead.
pub fn mine_with_progress<T, I, P>(
    horizontal_db: &HorizontalDb<T, I>,
    config: &MiningConfig,
    progress: &mut P,
) -> Result<FrequentItemsets<I, T>>
where
    T: Ord + Hash + Clone,
    I: Ord + Hash + Clone,
    P: Progress + ?Sized,
{
    config.validate()?;

    let n_transactions = horizontal_db.len();
    debug!(
        n_transactions,
        min_support_count = config.min_support_count,
        include_universal = config.include_universal,
        "mining frequent itemsets"
    );

    // 1-itemsets
    let mut vertical_db = vertical::build(horizontal_db);
    progress.level_started(1, vertical_db.len());
    vertical::prune_infrequent(&mut vertical_db, config.min_support_count);
    if !config.include_universal {
        vertical::prune_universal(&mut vertical_db, n_transactions);
    }
    progress.level_finished(1, vertical_db.len());

    let tid_index = TidIndex::new(horizontal_db.keys().cloned());
    let (inventory, mut level) = encode_singletons(vertical_db, &tid_index);

    // k-itemsets, k >= 2
    let mut found: Vec<(DenseItemset, TidBitmap)> = Vec::new();
    let mut size: ItemsetLength = 1;
    while !level.is_empty() && config.max_len.map_or(true, |max_len| size < max_len) {
        size += 1;
        progress.level_started(size, level.len());
        let next = next_level(&level, config);
        progress.level_finished(size, next.len());

        found.extend(level.itemsets.into_iter().zip(level.tidsets));
        level = next;
    }
    found.extend(level.itemsets.into_iter().zip(level.tidsets));

    debug!(frequent = found.len(), levels = size, "mining done");

    Ok(found
        .into_iter()
        .map(|(itemset, tids)| {
            let items: Itemset<I> = itemset.iter().map(|&id| inventory[id].clone()).collect();
            (items, tid_index.decode(&tids))
        })
        .collect())
}

/// Give every surviving item a dense id following the item order.
fn encode_singletons<I, T>(
    vertical_db: VerticalDb<I, T>,
    tid_index: &TidIndex<T>,
) -> (Inventory<I>, Level)
where
    I: Ord + Hash,
    T: Ord + Clone,
{
    let mut entries: Vec<(I, TidSet<T>)> = vertical_db
        .into_iter()
        .filter_map(|(itemset, tids)| itemset.into_iter().next().map(|item| (item, tids)))
        .collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));

    let mut inventory = Vec::with_capacity(entries.len());
    let mut level = Level::default();
    for (id, (item, tids)) in entries.into_iter().enumerate() {
        inventory.push(item);
        level.itemsets.push(vec![id]);
        level.tidsets.push(tid_index.encode(&tids));
    }

    (inventory, level)
}

/// Join the previous level and keep the candidates meeting minimum support.
fn next_level(level: &Level, config: &MiningConfig) -> Level {
    let mut candidates = match config.join {
        JoinStrategy::Prefix => join_prefix(&level.itemsets),
        JoinStrategy::Pairwise => join_pairwise(&level.itemsets),
    };
    let generated = candidates.len();

    if config.prune_subsets {
        let frequent: HashSet<DenseItemset> = level.itemsets.iter().cloned().collect();
        candidates.retain(|candidate| !has_infrequent_subset(&candidate.itemset, &frequent));
    }

    let min_support_count = config.min_support_count;
    let keep = |candidate: Candidate| admit(level, candidate, min_support_count);
    let mut admitted: Vec<(DenseItemset, TidBitmap)> = if config.parallel {
        candidates.into_par_iter().filter_map(keep).collect()
    } else {
        candidates.into_iter().filter_map(keep).collect()
    };
    admitted.sort_unstable_by(|a, b| a.0.cmp(&b.0));

    trace!(generated, admitted = admitted.len(), "joined level");

    Level::from_sorted(admitted)
}

fn admit(
    level: &Level,
    candidate: Candidate,
    min_support_count: SupportCount,
) -> Option<(DenseItemset, TidBitmap)> {
    let tids = level.tidsets[candidate.left].intersect(&level.tidsets[candidate.right]);
    if tids.support() >= min_support_count {
        Some((candidate.itemset, tids))
    } else {
        None
    }
}
