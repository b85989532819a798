use std::collections::HashMap;
use std::fmt;

use super::{HuffmanTree, Symbol};
use crate::error::Error;
use crate::frequency_table::FrequencyTable;
use crate::Result;

/// Maps every symbol of an alphabet to its Huffman code.
///
/// The codes are read from the tree once, on construction. Encoding is a
/// table lookup afterwards, decoding walks the tree returned by
/// [`CodeBook::huffman_tree`].
pub struct CodeBook {
    book: HashMap<Symbol, String>,
    tree: HuffmanTree,
    frequencies: FrequencyTable,
}

impl CodeBook {
    pub fn new(frequencies: FrequencyTable) -> Result<Self> {
        let tree = HuffmanTree::new(&frequencies)?;
        let book = tree.codes();
        let code_book = CodeBook {
            book,
            tree,
            frequencies,
        };
        log::info!(
            "Created code book for {} symbols, weighted average code length {:.3} bits",
            code_book.size(),
            code_book.weighted_average()
        );
        Ok(code_book)
    }

    /// Code book optimized for `text`.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(FrequencyTable::from_text(text))
    }

    /// General purpose code book over the lowercase English letters.
    pub fn english() -> Result<Self> {
        Self::new(FrequencyTable::english_letters())
    }

    pub fn encode_char(&self, symbol: Symbol) -> Result<&str> {
        self.book
            .get(&symbol)
            .map(String::as_str)
            .ok_or(Error::SymbolNotInCodeBook(symbol))
    }

    pub fn huffman_tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn size(&self) -> usize {
        self.book.len()
    }

    /// Sum of code lengths weighted by the relative frequency of their
    /// symbols, i.e. the expected number of bits per encoded symbol.
    pub fn weighted_average(&self) -> f64 {
        let total = self.frequencies.total();
        if total == 0 {
            return 0.0;
        }
        self.frequencies
            .iter()
            .map(|(symbol, count)| {
                let length = self.book.get(&symbol).map_or(0, String::len);
                length as f64 * count as f64 / total as f64
            })
            .sum()
    }
}

impl fmt::Display for CodeBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(&Symbol, &String)> = self.book.iter().collect();
        entries.sort();
        write!(f, "{{")?;
        for (index, (symbol, code)) in entries.into_iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}={}", symbol, code)?;
        }
        write!(f, "}}")
    }
}
