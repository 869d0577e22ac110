//! FP-Growth frequent itemset mining.
//!
//! Builds a compressed prefix tree (FP-tree) over a transaction dataset and
//! recursively mines every itemset whose support meets a minimum threshold,
//! without enumerating the full subset lattice.
//!
//! ```
//! use fpgrowth::mine_frequent_itemsets;
//!
//! let transactions = vec![
//!     vec!["a".to_string(), "b".to_string()],
//!     vec!["b".to_string(), "c".to_string()],
//!     vec!["a".to_string(), "b".to_string(), "c".to_string()],
//! ];
//! let itemsets = mine_frequent_itemsets(&transactions, 2).unwrap();
//! assert!(itemsets.iter().any(|f| f.items == ["a", "b"] && f.support == 2));
//! ```

pub mod error;
pub mod fp;
pub mod io;

pub use error::Error;
pub use fp::{mine_frequent_itemsets, FrequentItemset};
