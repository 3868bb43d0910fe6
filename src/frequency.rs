use std::collections::BTreeMap;

use crate::symbol::Symbol;

/// Occurrence count of every distinct symbol in an input.
///
/// Iteration is in ascending symbol order, which is also the order leaves
/// enter the tree builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    counts: BTreeMap<S, u64>,
}

impl<S: Symbol> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }
}

impl<S: Symbol> FrequencyTable<S> {
    pub fn from_symbols(symbols: &[S]) -> Self {
        let mut counts = BTreeMap::new();
        for symbol in symbols {
            *counts.entry(*symbol).or_insert(0) += 1;
        }

        log::debug!(
            "counted {} distinct symbols over {} inputs",
            counts.len(),
            symbols.len()
        );

        Self { counts }
    }

    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.counts.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the length of the counted input.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, u64)> + '_ {
        self.counts.iter().map(|(symbol, count)| (*symbol, *count))
    }
}

impl<S: Symbol> FromIterator<(S, u64)> for FrequencyTable<S> {
    fn from_iter<T: IntoIterator<Item = (S, u64)>>(iter: T) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
