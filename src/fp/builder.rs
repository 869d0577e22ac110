use std::collections::HashMap;

use super::items::ItemCatalog;
use super::tree::FPTree;

/// Build the initial FP-tree over the full dataset.
///
/// Each transaction is filtered to catalog items (empty and infrequent
/// tokens drop out), deduplicated, and reordered into canonical header
/// order before insertion with unit weight. Catalog ids are assigned in
/// canonical order, so ascending id order is the canonical order.
pub fn build_fp_tree(transactions: &[Vec<String>], catalog: &ItemCatalog) -> FPTree {
    let mut tree = FPTree::new((0..catalog.len()).collect());

    for transaction in transactions {
        let mut items: Vec<usize> = transaction
            .iter()
            .filter_map(|token| catalog.id_of(token))
            .collect();
        items.sort_unstable();
        items.dedup();

        if !items.is_empty() {
            tree.insert_path(&items, 1);
        }
    }

    tree
}

/// Rebuild a smaller FP-tree from a conditional pattern base.
///
/// Aggregates weight per item across all paths and re-applies the
/// threshold; returns `None` when no item survives, which terminates the
/// recursive branch. Surviving paths are reordered into the local
/// descending-aggregate-weight order (ties broken by ascending label) and
/// inserted with their recorded weights.
pub fn build_conditional_tree(
    paths: &[(Vec<usize>, u64)],
    threshold: u64,
    catalog: &ItemCatalog,
) -> Option<FPTree> {
    let mut weights: HashMap<usize, u64> = HashMap::new();
    for (path, weight) in paths {
        for &item in path {
            *weights.entry(item).or_insert(0) += weight;
        }
    }
    weights.retain(|_, weight| *weight >= threshold);

    if weights.is_empty() {
        return None;
    }

    let mut order: Vec<usize> = weights.keys().copied().collect();
    order.sort_by(|&a, &b| {
        weights[&b]
            .cmp(&weights[&a])
            .then_with(|| catalog.label(a).cmp(catalog.label(b)))
    });
    let ranks: HashMap<usize, usize> = order
        .iter()
        .enumerate()
        .map(|(rank, &item)| (item, rank))
        .collect();

    let mut tree = FPTree::new(order);

    for (path, weight) in paths {
        let mut kept: Vec<usize> = path
            .iter()
            .copied()
            .filter(|item| ranks.contains_key(item))
            .collect();
        kept.sort_by_key(|item| ranks[item]);

        if !kept.is_empty() {
            tree.insert_path(&kept, *weight);
        }
    }

    Some(tree)
}
