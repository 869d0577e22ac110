use std::collections::HashMap;

/// Count per-occurrence item frequencies across all transactions.
///
/// Empty tokens are sentinel values and never counted. An item appearing
/// twice within one transaction contributes two to its count.
pub fn count_item_frequencies(transactions: &[Vec<String>]) -> HashMap<String, u64> {
    let mut counts: HashMap<String, u64> = HashMap::new();

    for transaction in transactions {
        for token in transaction {
            if !token.is_empty() {
                *counts.entry(token.clone()).or_insert(0) += 1;
            }
        }
    }

    counts
}

/// Interned labels of the items that met the support threshold.
///
/// Ids are assigned in canonical header order: descending global count,
/// ascending label as tie-break. At the top level, ascending id order is
/// therefore exactly the order transactions must be reordered into before
/// insertion, so the tree core can work on dense `usize` items.
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl ItemCatalog {
    /// Build the catalog from raw counts, keeping items with count >= threshold.
    pub fn from_counts(counts: &HashMap<String, u64>, threshold: u64) -> Self {
        let mut frequent: Vec<(&String, u64)> = counts
            .iter()
            .filter(|&(_, &count)| count >= threshold)
            .map(|(label, &count)| (label, count))
            .collect();

        frequent.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let labels: Vec<String> = frequent.into_iter().map(|(label, _)| label.clone()).collect();
        let index = labels
            .iter()
            .enumerate()
            .map(|(id, label)| (label.clone(), id))
            .collect();

        Self { labels, index }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, id: usize) -> &str {
        &self.labels[id]
    }

    pub fn id_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }
}
