//! Eclat frequent itemset mining over a vertical (item to tid-set) database.
//!
//! ```
//! use eclat::{mine, MiningConfig};
//! use maplit::{btreeset, hashmap, hashset};
//!
//! let transactions = hashmap! {
//!     1 => hashset!["a", "b"],
//!     2 => hashset!["a", "c"],
//!     3 => hashset!["a", "b", "c"],
//!     4 => hashset!["b", "c"],
//! };
//! let frequent = mine(&transactions, &MiningConfig::new(2)).unwrap();
//!
//! assert_eq!(frequent[&btreeset!["a", "b"]], btreeset![1, 3]);
//! assert!(!frequent.contains_key(&btreeset!["a", "b", "c"]));
//! ```

pub mod combi;
pub mod config;
pub mod error;
pub mod mine;
pub mod progress;
pub mod summary;
pub mod tidset;
pub mod types;
pub mod vertical;

#[cfg(feature = "python")]
mod wrapper;

pub use config::{min_support_count_from_fraction, JoinStrategy, MiningConfig};
pub use error::{EclatError, Result};
pub use mine::{mine, mine_with_progress};
pub use progress::{LogProgress, NoProgress, Progress, ProgressEvent};
pub use types::{FrequentItemsets, HorizontalDb, Itemset, TidSet, VerticalDb};
