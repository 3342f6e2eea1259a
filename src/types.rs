use std::collections::{BTreeSet, HashMap, HashSet};

/// Dense id handed out to each distinct item before mining.
pub type ItemId = usize;
/// Itemset over dense ids, always sorted ascending.
pub type DenseItemset = Vec<ItemId>;

pub type ItemsetLength = usize;
pub type SupportCount = usize;

/// A set of distinct items. Order-irrelevant, equal iff same members.
pub type Itemset<I> = BTreeSet<I>;
/// Transaction ids in which an itemset occurs. Its length is the support count.
pub type TidSet<T> = BTreeSet<T>;

/// Input representation: transaction id to the items of that transaction.
pub type HorizontalDb<T, I> = HashMap<T, HashSet<I>>;
/// Singleton itemset to the tids of the transactions containing that item.
pub type VerticalDb<I, T> = HashMap<Itemset<I>, TidSet<T>>;
/// Every frequent itemset, of any length, to its tid-set.
pub type FrequentItemsets<I, T> = HashMap<Itemset<I>, TidSet<T>>;

pub type ItemsetCounts<I> = HashMap<Itemset<I>, SupportCount>;
/// Support counts grouped by itemset length.
pub type ItemsetCountsByLength<I> = HashMap<ItemsetLength, ItemsetCounts<I>>;

pub type Inventory<I> = Vec<I>;
