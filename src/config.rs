//! Parameters of a single mining run.

use serde::{Deserialize, Serialize};

use crate::error::{EclatError, Result};
use crate::types::{ItemsetLength, SupportCount};

/// How candidate k-itemsets are produced from the frequent (k-1)-itemsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinStrategy {
    /// Sort the previous level and only pair itemsets sharing their first k-2 items.
    Prefix,
    /// Test every unordered pair for a symmetric difference of exactly two items.
    Pairwise,
}

impl Default for JoinStrategy {
    fn default() -> Self {
        JoinStrategy::Prefix
    }
}

/// Immutable configuration record passed once into [`crate::mine`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// An itemset is frequent iff its tid-set has at least this many tids.
    pub min_support_count: SupportCount,
    /// Keep items that occur in every transaction.
    pub include_universal: bool,
    /// Stop after this level. `None` mines until a level comes up empty.
    pub max_len: Option<ItemsetLength>,
    pub join: JoinStrategy,
    /// Drop a candidate when one of its (k-1)-subsets was not frequent.
    pub prune_subsets: bool,
    /// Intersect candidate tid-sets on the rayon pool.
    pub parallel: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support_count: 1,
            include_universal: true,
            max_len: None,
            join: JoinStrategy::default(),
            prune_subsets: false,
            parallel: true,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support_count: SupportCount) -> Self {
        Self {
            min_support_count,
            ..Self::default()
        }
    }

    /// Build a config from a signed threshold, as handed over by loosely typed callers.
    pub fn from_signed(min_support_count: i64) -> Result<Self> {
        if min_support_count <= 0 {
            return Err(EclatError::invalid_threshold(min_support_count));
        }
        let count = SupportCount::try_from(min_support_count)
            .map_err(|_| EclatError::invalid_threshold(min_support_count))?;
        Ok(Self::new(count))
    }

    pub fn with_include_universal(mut self, include_universal: bool) -> Self {
        self.include_universal = include_universal;
        self
    }

    pub fn with_max_len(mut self, max_len: Option<ItemsetLength>) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn with_join(mut self, join: JoinStrategy) -> Self {
        self.join = join;
        self
    }

    pub fn with_prune_subsets(mut self, prune_subsets: bool) -> Self {
        self.prune_subsets = prune_subsets;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_support_count == 0 {
            return Err(EclatError::invalid_threshold(0));
        }
        if self.max_len == Some(0) {
            return Err(EclatError::invalid_parameter("max_len must be at least 1"));
        }
        Ok(())
    }
}

/// Relative error below which a product is taken to be the integer it rounds to.
const FRACTION_EPSILON: f64 = 1e-9;

/// Convert a relative support into an absolute count over `n_transactions`.
///
/// Products within rounding error of an integer are not bumped to the next
/// one, so 0.07 of 100 transactions is 7 rather than 8.
pub fn min_support_count_from_fraction(
    fraction: f64,
    n_transactions: usize,
) -> Result<SupportCount> {
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(EclatError::InvalidSupportFraction { fraction });
    }
    let exact = fraction * n_transactions as f64;
    let nearest = exact.round();
    let count = if (exact - nearest).abs() <= FRACTION_EPSILON * exact.max(1.0) {
        nearest
    } else {
        exact.ceil()
    };
    Ok((count as SupportCount).max(1))
}
