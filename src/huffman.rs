use std::collections::{BTreeMap, HashMap};

use bitvec::prelude::*;

use crate::{
    frequency::FrequencyTable,
    huffman_tree::{HuffmanNode, HuffmanTree},
    symbol::Symbol,
};

pub type Code = BitVec<u8, Msb0>;

/// Bidirectional symbol <-> code mapping derived from a [`HuffmanTree`].
///
/// Both directions are filled by the same traversal and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    symbol_to_code: BTreeMap<S, Code>,
    code_to_symbol: HashMap<Code, S>,
    max_code_len: usize,
}

impl<S: Symbol> Default for CodeTable<S> {
    fn default() -> Self {
        Self {
            symbol_to_code: BTreeMap::new(),
            code_to_symbol: HashMap::new(),
            max_code_len: 0,
        }
    }
}

impl<S: Symbol> CodeTable<S> {
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        let mut table = Self::default();

        match tree.root() {
            None => {}
            // A lone leaf has no path bits; an empty code would not be decodable.
            Some(HuffmanNode::Leaf { symbol, .. }) => table.insert(*symbol, bitvec![u8, Msb0; 0]),
            Some(root) => table.generate_codes(root, Code::new()),
        }

        log::debug!(
            "derived {} codes, longest {} bits",
            table.len(),
            table.max_code_len
        );

        table
    }

    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Self {
        Self::from_tree(&HuffmanTree::from_frequencies(frequencies))
    }

    fn generate_codes(&mut self, node: &HuffmanNode<S>, prefix: Code) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => self.insert(*symbol, prefix),
            HuffmanNode::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push(false);
                self.generate_codes(left, left_prefix);

                let mut right_prefix = prefix;
                right_prefix.push(true);
                self.generate_codes(right, right_prefix);
            }
        }
    }

    fn insert(&mut self, symbol: S, code: Code) {
        log::trace!("{:?} -> {}", symbol, code_string(&code));

        self.max_code_len = self.max_code_len.max(code.len());
        self.code_to_symbol.insert(code.clone(), symbol);
        self.symbol_to_code.insert(symbol, code);
    }

    pub fn code(&self, symbol: &S) -> Option<&BitSlice<u8, Msb0>> {
        self.symbol_to_code.get(symbol).map(|code| code.as_bitslice())
    }

    pub fn symbol(&self, code: &Code) -> Option<S> {
        self.code_to_symbol.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.symbol_to_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbol_to_code.is_empty()
    }

    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }

    /// Codes in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (S, &BitSlice<u8, Msb0>)> + '_ {
        self.symbol_to_code
            .iter()
            .map(|(symbol, code)| (*symbol, code.as_bitslice()))
    }

    /// Payload length in bits of encoding an input with these frequencies,
    /// before padding. Symbols missing from the table contribute nothing.
    pub fn encoded_bit_len(&self, frequencies: &FrequencyTable<S>) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| {
                self.symbol_to_code
                    .get(&symbol)
                    .map(|code| count * code.len() as u64)
            })
            .sum()
    }
}

/// Renders a code as a string of `0` and `1`.
pub fn code_string(code: &BitSlice<u8, Msb0>) -> String {
    code.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}
