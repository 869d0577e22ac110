use tracing::debug;

use super::builder::{build_conditional_tree, build_fp_tree};
use super::items::{count_item_frequencies, ItemCatalog};
use super::tree::FPTree;
use crate::error::Error;

/// A mined itemset: labels in emission order plus the support count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentItemset {
    pub items: Vec<String>,
    pub support: u64,
}

/// Mine every itemset whose support meets `min_support`.
///
/// The threshold is an absolute occurrence count and must be at least 1;
/// zero is rejected before any tree construction. Itemsets are emitted in a
/// deterministic order: at every recursion depth the header table's items
/// are visited in ascending lexicographic label order, each item emitting
/// its itemset before its conditional sub-tree is mined.
pub fn mine_frequent_itemsets(
    transactions: &[Vec<String>],
    min_support: u64,
) -> Result<Vec<FrequentItemset>, Error> {
    if min_support == 0 {
        return Err(Error::Threshold);
    }

    let counts = count_item_frequencies(transactions);
    let catalog = ItemCatalog::from_counts(&counts, min_support);
    debug!(
        transactions = transactions.len(),
        frequent_items = catalog.len(),
        "counted item frequencies"
    );

    if catalog.is_empty() {
        return Ok(Vec::new());
    }

    let tree = build_fp_tree(transactions, &catalog);
    debug!(nodes = tree.nodes.len(), "built initial fp-tree");

    let mut patterns = Vec::new();
    mine_tree(&tree, &catalog, min_support, &[], &mut patterns);
    debug!(itemsets = patterns.len(), "mining finished");

    Ok(patterns
        .into_iter()
        .map(|(ids, support)| FrequentItemset {
            items: ids.iter().map(|&id| catalog.label(id).to_string()).collect(),
            support,
        })
        .collect())
}

/// Recursive core: one call per header table.
///
/// Each conditional tree is owned by the call that builds it and dropped
/// when the branch terminates; only emitted patterns outlive a call.
fn mine_tree(
    tree: &FPTree,
    catalog: &ItemCatalog,
    threshold: u64,
    prefix: &[usize],
    patterns: &mut Vec<(Vec<usize>, u64)>,
) {
    let mut items: Vec<usize> = tree.header.items().to_vec();
    items.sort_by(|&a, &b| catalog.label(a).cmp(catalog.label(b)));

    for item in items {
        let support = tree.chain_support(item);

        let mut itemset = Vec::with_capacity(prefix.len() + 1);
        itemset.extend_from_slice(prefix);
        itemset.push(item);
        patterns.push((itemset.clone(), support));

        let paths = tree.prefix_paths(item);
        if let Some(conditional) = build_conditional_tree(&paths, threshold, catalog) {
            mine_tree(&conditional, catalog, threshold, &itemset, patterns);
        }
    }
}
