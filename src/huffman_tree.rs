//! Greedy Huffman tree construction.
//!
//! Leaves enter a min-priority queue in ascending symbol order. The two
//! lightest nodes are merged repeatedly until one root remains. Nodes of
//! equal weight leave the queue in the order they entered it, and merged
//! nodes enter after every leaf, so the same frequency table always yields
//! the same tree. The first node extracted becomes the left child.

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{frequency::FrequencyTable, symbol::Symbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode<S: Symbol> {
    Leaf {
        symbol: S,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffmanNode<S>>,
        right: Box<HuffmanNode<S>>,
    },
}

impl<S: Symbol> HuffmanNode<S> {
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    fn merge(left: Self, right: Self) -> Self {
        HuffmanNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Queue entry. `sequence` is the insertion counter used to break weight ties.
struct QueuedNode<S: Symbol> {
    sequence: u64,
    node: HuffmanNode<S>,
}

impl<S: Symbol> PartialEq for QueuedNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: Symbol> Eq for QueuedNode<S> {}

impl<S: Symbol> PartialOrd for QueuedNode<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Symbol> Ord for QueuedNode<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the lightest, then the oldest.
        other
            .node
            .weight()
            .cmp(&self.node.weight())
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S: Symbol> {
    root: Option<HuffmanNode<S>>,
}

impl<S: Symbol> Default for HuffmanTree<S> {
    fn default() -> Self {
        Self { root: None }
    }
}

impl<S: Symbol> HuffmanTree<S> {
    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Self {
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        let mut sequence = 0u64;

        for (symbol, weight) in frequencies.iter() {
            heap.push(QueuedNode {
                sequence,
                node: HuffmanNode::Leaf { symbol, weight },
            });
            sequence += 1;
        }

        while heap.len() > 1 {
            let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
                break;
            };

            heap.push(QueuedNode {
                sequence,
                node: HuffmanNode::merge(left.node, right.node),
            });
            sequence += 1;
        }

        let root = heap.pop().map(|queued| queued.node);

        log::debug!(
            "built huffman tree over {} symbols, root weight {}",
            frequencies.len(),
            root.as_ref().map_or(0, HuffmanNode::weight)
        );

        Self { root }
    }

    pub fn from_symbols(symbols: &[S]) -> Self {
        Self::from_frequencies(&FrequencyTable::from_symbols(symbols))
    }

    pub fn root(&self) -> Option<&HuffmanNode<S>> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of leaves, one per distinct symbol.
    pub fn symbol_count(&self) -> usize {
        self.root.as_ref().map_or(0, HuffmanNode::leaf_count)
    }

    pub fn weight(&self) -> u64 {
        self.root.as_ref().map_or(0, HuffmanNode::weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_symbols(node: &HuffmanNode<u8>, out: &mut Vec<u8>) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => out.push(*symbol),
            HuffmanNode::Internal { left, right, .. } => {
                leaf_symbols(left, out);
                leaf_symbols(right, out);
            }
        }
    }

    fn assert_well_formed(node: &HuffmanNode<u8>) {
        if let HuffmanNode::Internal {
            weight,
            left,
            right,
        } = node
        {
            assert_eq!(*weight, left.weight() + right.weight());
            assert_well_formed(left);
            assert_well_formed(right);
        }
    }

    #[test]
    fn test_empty_frequencies_give_empty_tree() {
        let tree = HuffmanTree::<u8>::from_symbols(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.symbol_count(), 0);
        assert_eq!(tree.weight(), 0);
    }

    #[test]
    fn test_single_symbol_is_a_lone_leaf() {
        let tree = HuffmanTree::from_symbols(b"aaaa");
        assert_eq!(
            tree.root(),
            Some(&HuffmanNode::Leaf {
                symbol: b'a',
                weight: 4
            })
        );
    }

    #[test]
    fn test_root_weight_is_input_length() {
        let data = b"mississippi river";
        let tree = HuffmanTree::from_symbols(data);
        assert_eq!(tree.weight(), data.len() as u64);
        assert_eq!(tree.symbol_count(), 8);
        assert_well_formed(tree.root().unwrap());
    }

    #[test]
    fn test_equal_weights_merge_in_insertion_order() {
        // All weights tie: a+b merge first, then c+d, then (ab)+(cd).
        let tree = HuffmanTree::from_symbols(b"abcd");
        let mut order = Vec::new();
        leaf_symbols(tree.root().unwrap(), &mut order);
        assert_eq!(order, b"abcd".to_vec());

        match tree.root().unwrap() {
            HuffmanNode::Internal { left, right, .. } => {
                assert!(!left.is_leaf());
                assert!(!right.is_leaf());
            }
            HuffmanNode::Leaf { .. } => panic!("expected internal root"),
        }
    }

    #[test]
    fn test_lightest_node_goes_left() {
        let tree = HuffmanTree::from_symbols(b"aaab");
        match tree.root().unwrap() {
            HuffmanNode::Internal { left, right, .. } => {
                assert_eq!(
                    **left,
                    HuffmanNode::Leaf {
                        symbol: b'b',
                        weight: 1
                    }
                );
                assert_eq!(
                    **right,
                    HuffmanNode::Leaf {
                        symbol: b'a',
                        weight: 3
                    }
                );
            }
            HuffmanNode::Leaf { .. } => panic!("expected internal root"),
        }
    }

    #[test]
    fn test_construction_is_deterministic() {
        let data = b"she sells sea shells by the sea shore";
        assert_eq!(HuffmanTree::from_symbols(data), HuffmanTree::from_symbols(data));
    }
}
