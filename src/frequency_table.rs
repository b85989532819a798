use std::collections::BTreeMap;

use crate::huffman::Symbol;

const ENGLISH_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

#[rustfmt::skip]
const ENGLISH_LETTER_PERCENTAGES: [f64; 26] = [
    11.602, 4.702, 3.511, 2.670, 2.007, 3.779, 1.950,
    7.232, 6.286, 0.597, 0.590, 2.705, 4.383, 2.365,
    6.264, 2.545, 0.173, 1.653, 7.755, 16.671, 1.487,
    0.649, 6.753, 0.017, 1.620, 0.034,
];

/// Occurrence count per symbol. Symbols iterate in ascending order, which
/// keeps every tree built from the same table identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        for symbol in text.chars() {
            *table.counts.entry(symbol).or_insert(0) += 1;
        }
        table
    }

    /// Relative frequencies of the lowercase English letters, scaled by 1000
    /// and truncated.
    pub fn english_letters() -> Self {
        ENGLISH_ALPHABET
            .chars()
            .zip(ENGLISH_LETTER_PERCENTAGES)
            .map(|(symbol, percentage)| (symbol, (percentage * 1000.0) as usize))
            .collect()
    }

    pub fn insert(&mut self, symbol: Symbol, count: usize) -> Option<usize> {
        self.counts.insert(symbol, count)
    }

    pub fn get(&self, symbol: Symbol) -> usize {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

impl FromIterator<(Symbol, usize)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (Symbol, usize)>>(iter: I) -> Self {
        FrequencyTable {
            counts: iter.into_iter().collect(),
        }
    }
}
