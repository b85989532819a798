pub mod code_book;
pub mod tree;

pub use code_book::CodeBook;
pub use tree::{HuffmanTree, Node};

pub type Symbol = char;

pub const ZERO_BIT: char = '0';
pub const ONE_BIT: char = '1';
