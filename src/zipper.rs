use crate::huffman::{CodeBook, HuffmanTree};
use crate::packing;
use crate::Result;

/// Encodes and decodes text with a [`CodeBook`], and packs the resulting
/// bit strings into bytes.
pub struct Zipper<'a> {
    // used for encoding
    book: &'a CodeBook,
    // used for decoding
    tree: &'a HuffmanTree,
}

impl<'a> Zipper<'a> {
    pub fn new(book: &'a CodeBook) -> Zipper<'a> {
        Zipper {
            book,
            tree: book.huffman_tree(),
        }
    }

    pub fn encode(&self, text: &str) -> Result<String> {
        let mut bits = String::with_capacity(text.len() * 2);
        for symbol in text.chars() {
            bits.push_str(self.book.encode_char(symbol)?);
        }
        Ok(bits)
    }

    pub fn decode(&self, bits: &str) -> Result<String> {
        let mut text = String::new();
        let mut position = 0;
        while position < bits.len() {
            let (symbol, consumed) = self.tree.decode_prefix(&bits[position..])?;
            text.push(symbol);
            position += consumed;
        }
        Ok(text)
    }

    pub fn compress(&self, bits: &str) -> Result<Vec<u8>> {
        packing::pack(bits)
    }

    pub fn decompress(&self, packed: &[u8]) -> Result<String> {
        packing::unpack(packed)
    }
}
