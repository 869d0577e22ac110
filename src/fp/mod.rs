pub mod builder;
pub mod items;
pub mod mining;
pub mod tree;

pub use builder::{build_conditional_tree, build_fp_tree};
pub use items::{count_item_frequencies, ItemCatalog};
pub use mining::{mine_frequent_itemsets, FrequentItemset};
pub use tree::{FPNode, FPTree, HeaderTable};
