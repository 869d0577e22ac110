use std::collections::HashMap;

/// A node in the arena. Parent, children, and the node-link chain are all
/// stored as indices into [`FPTree::nodes`], so the parent/child/chain graph
/// never needs shared ownership.
#[derive(Debug, Clone)]
pub struct FPNode {
    /// `None` only for the synthetic root.
    pub item: Option<usize>,
    /// Accumulated weight of every path traversing this node.
    pub count: u64,
    pub parent: Option<usize>,
    pub children: HashMap<usize, usize>,
    /// Next node carrying the same item, in discovery order.
    pub next: Option<usize>,
}

impl FPNode {
    fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
            next: None,
        }
    }

    fn new_item(item: usize, count: u64, parent: usize) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: HashMap::new(),
            next: None,
        }
    }
}

/// Per-item chain heads plus the canonical insertion order of this tree.
///
/// Entries exist only for items that met the active support threshold.
#[derive(Debug, Clone)]
pub struct HeaderTable {
    order: Vec<usize>,
    chains: HashMap<usize, usize>,
}

impl HeaderTable {
    fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            chains: HashMap::new(),
        }
    }

    /// Item keys in canonical insertion order (descending frequency).
    pub fn items(&self) -> &[usize] {
        &self.order
    }

    pub fn chain_head(&self, item: usize) -> Option<usize> {
        self.chains.get(&item).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct FPTree {
    pub nodes: Vec<FPNode>,
    pub header: HeaderTable,
    pub root_index: usize,
}

impl FPTree {
    /// An empty tree whose header table covers `order` (canonical insertion
    /// order of the items that survived the threshold).
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header: HeaderTable::new(order),
            root_index: 0,
        }
    }

    /// Insert a pre-filtered, canonically ordered item sequence.
    ///
    /// `weight` is 1 for raw transactions and the recorded path weight when
    /// rebuilding from a conditional pattern base.
    pub fn insert_path(&mut self, items: &[usize], weight: u64) {
        let mut current_index = self.root_index;

        for &item in items {
            if let Some(&child_index) = self.nodes[current_index].children.get(&item) {
                self.nodes[child_index].count += weight;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes.push(FPNode::new_item(item, weight, current_index));
                self.nodes[current_index].children.insert(item, new_index);
                self.append_to_chain(item, new_index);
                current_index = new_index;
            }
        }
    }

    /// Link a freshly created node at the tail of its item's chain.
    fn append_to_chain(&mut self, item: usize, node_index: usize) {
        match self.header.chains.get(&item).copied() {
            None => {
                self.header.chains.insert(item, node_index);
            }
            Some(head) => {
                let mut tail = head;
                while let Some(next) = self.nodes[tail].next {
                    tail = next;
                }
                self.nodes[tail].next = Some(node_index);
            }
        }
    }

    /// Total support of an item: the sum of counts along its chain.
    pub fn chain_support(&self, item: usize) -> u64 {
        let mut support = 0;
        let mut current = self.header.chain_head(item);

        while let Some(index) = current {
            support += self.nodes[index].count;
            current = self.nodes[index].next;
        }

        support
    }

    /// The conditional pattern base of an item: for every chain node, the
    /// root-to-parent prefix path paired with that node's count. Nodes
    /// hanging directly off the root have an empty prefix and are skipped.
    pub fn prefix_paths(&self, item: usize) -> Vec<(Vec<usize>, u64)> {
        let mut paths = Vec::new();
        let mut current = self.header.chain_head(item);

        while let Some(node_index) = current {
            let node = &self.nodes[node_index];

            let mut path = Vec::new();
            let mut ancestor = node.parent;
            while let Some(index) = ancestor {
                let parent = &self.nodes[index];
                if let Some(parent_item) = parent.item {
                    path.push(parent_item);
                }
                ancestor = parent.parent;
            }
            path.reverse();

            if !path.is_empty() {
                paths.push((path, node.count));
            }

            current = node.next;
        }

        paths
    }
}
