use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use super::{Symbol, ONE_BIT, ZERO_BIT};
use crate::error::Error;
use crate::frequency_table::FrequencyTable;
use crate::priority_queue::PriorityQueue;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        weight: usize,
    },
    Inner {
        weight: usize,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Right child of the synthetic root above a lone leaf. Holds no symbol.
    Vacant,
}

impl Node {
    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } | Node::Inner { weight, .. } => *weight,
            Node::Vacant => 0,
        }
    }

    fn merge(left: Node, right: Node) -> Node {
        Node::Inner {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    // a lone leaf gets the one bit code "0"
    fn wrap_single_leaf(self) -> Node {
        match self {
            Node::Leaf { weight, .. } => Node::Inner {
                weight,
                left: Box::new(self),
                right: Box::new(Node::Vacant),
            },
            node => node,
        }
    }
}

fn compare_weights(a: &Node, b: &Node) -> Ordering {
    a.weight().cmp(&b.weight())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    pub fn new(frequencies: &FrequencyTable) -> Result<HuffmanTree> {
        if frequencies.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        let mut forest = PriorityQueue::with_capacity(frequencies.len(), compare_weights);
        for (symbol, weight) in frequencies.iter() {
            forest.insert(Node::Leaf { symbol, weight });
        }
        // merge the two lightest trees until a single one is left
        while forest.size() > 1 {
            let left = forest.delete()?;
            let right = forest.delete()?;
            forest.insert(Node::merge(left, right));
        }
        let root = forest.delete()?.wrap_single_leaf();
        log::info!(
            "Built Huffman tree over {} symbols with root weight {}",
            frequencies.len(),
            root.weight()
        );
        Ok(HuffmanTree { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Searches the tree for the leaf holding `symbol` and returns the path
    /// to it, '0' for every left and '1' for every right branch.
    pub fn lookup(&self, symbol: Symbol) -> Result<String> {
        let mut path = String::new();
        if find_path(&self.root, symbol, &mut path) {
            Ok(path)
        } else {
            Err(Error::SymbolNotInCodeBook(symbol))
        }
    }

    /// Code of every symbol, collected in a single traversal.
    pub fn codes(&self) -> HashMap<Symbol, String> {
        let mut table = HashMap::new();
        fill_table(&mut table, &self.root, &mut String::new());
        table
    }

    pub fn decode_char(&self, bits: &str) -> Result<Symbol> {
        self.decode_prefix(bits).map(|(symbol, _)| symbol)
    }

    /// Walks from the root along the leading bits of `bits` until a leaf is
    /// reached. Returns the leaf's symbol and the number of bits consumed.
    pub fn decode_prefix(&self, bits: &str) -> Result<(Symbol, usize)> {
        let mut node = &self.root;
        let mut consumed = 0;
        let mut remaining = bits.chars();
        loop {
            match node {
                Node::Leaf { symbol, .. } => return Ok((*symbol, consumed)),
                Node::Vacant => return Err(Error::UndecodableBits(bits[..consumed].to_owned())),
                Node::Inner { left, right, .. } => {
                    node = match remaining.next() {
                        Some(ZERO_BIT) => left,
                        Some(ONE_BIT) => right,
                        Some(other) => return Err(Error::NotABit(other)),
                        None => return Err(Error::UndecodableBits(bits.to_owned())),
                    };
                    consumed += 1;
                }
            }
        }
    }
}

fn find_path(node: &Node, symbol: Symbol, path: &mut String) -> bool {
    match node {
        Node::Leaf { symbol: leaf, .. } => *leaf == symbol,
        Node::Vacant => false,
        Node::Inner { left, right, .. } => {
            for (bit, child) in [(ZERO_BIT, left), (ONE_BIT, right)] {
                path.push(bit);
                if find_path(child, symbol, path) {
                    return true;
                }
                path.pop();
            }
            false
        }
    }
}

fn fill_table(table: &mut HashMap<Symbol, String>, node: &Node, path: &mut String) {
    match node {
        Node::Leaf { symbol, .. } => {
            table.insert(*symbol, path.clone());
        }
        Node::Vacant => (),
        Node::Inner { left, right, .. } => {
            path.push(ZERO_BIT);
            fill_table(table, left, path);
            path.pop();
            path.push(ONE_BIT);
            fill_table(table, right, path);
            path.pop();
        }
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

// Node & Tree visualization
impl Node {
    fn get_string(&self) -> Vec<String> {
        match self {
            Node::Leaf { symbol, weight } => vec![format!("({:?},w:{})", symbol, weight)],
            Node::Vacant => vec!["(-)".to_string()],
            Node::Inner { left, right, .. } => {
                let left_box = left.get_string();
                let right_box = right.get_string();
                let left_width = left_box[0].chars().count();
                let right_width = right_box[0].chars().count();
                let mut result: Vec<String> = Vec::new();

                result.push(format!(
                    "{}•{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));
                result.push(format!(
                    "{}║{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));

                let left_pos = center_of(&left_box[0]);
                let right_pos = center_of(&right_box[0]);
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(left_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                    SPACE.repeat(right_width - right_pos - 1)
                ));

                for i in 0..std::cmp::max(left_box.len(), right_box.len()) {
                    let left_str = left_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(left_width));
                    let right_str = right_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(right_width));
                    result.push(format!("{} {}", left_str, right_str));
                }
                result
            }
        }
    }
}

fn center_of(line: &str) -> usize {
    let indentation = line.chars().position(|c| c != ' ').unwrap_or(0);
    (indentation * 2 + line.trim().chars().count()) / 2
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in self.root.get_string().iter() {
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{HuffmanTree, Node};
    use crate::error::Error;
    use crate::frequency_table::FrequencyTable;

    const SYMBOLS_AND_FREQUENCIES: &[(char, usize); 4] = &[('a', 5), ('b', 2), ('c', 1), ('d', 1)];
    const SYMBOLS_AND_FREQUENCIES_ODD_LEN: &[(char, usize); 7] = &[
        ('a', 17),
        ('b', 3),
        ('c', 12),
        ('d', 3),
        ('e', 18),
        ('f', 12),
        ('g', 13),
    ];

    fn create_tree(symbols_and_frequencies: &[(char, usize)]) -> HuffmanTree {
        let frequencies: FrequencyTable = symbols_and_frequencies.iter().copied().collect();
        HuffmanTree::new(&frequencies).expect("Tree construction failed")
    }

    fn calculate_depth(tree: &HuffmanTree, symbol: char) -> usize {
        tree.lookup(symbol).expect("Symbol must be in tree").len()
    }

    #[test]
    fn test_codes_of_small_alphabet() {
        let tree = create_tree(SYMBOLS_AND_FREQUENCIES);
        assert_eq!(tree.lookup('a').unwrap(), "1");
        assert_eq!(tree.lookup('b').unwrap(), "00");
        assert_eq!(tree.lookup('c').unwrap(), "010");
        assert_eq!(tree.lookup('d').unwrap(), "011");
        assert_eq!(tree.root().weight(), 9);
    }

    #[test]
    fn test_codes_match_lookup() {
        let tree = create_tree(SYMBOLS_AND_FREQUENCIES_ODD_LEN);
        let codes = tree.codes();
        assert_eq!(codes.len(), SYMBOLS_AND_FREQUENCIES_ODD_LEN.len());
        for (symbol, code) in codes {
            assert_eq!(tree.lookup(symbol).unwrap(), code, "Code of {:?} differs", symbol);
        }
    }

    #[test]
    fn test_empty_alphabet_is_rejected() {
        let result = HuffmanTree::new(&FrequencyTable::new());
        assert!(matches!(result, Err(Error::EmptyAlphabet)));
    }

    #[test]
    fn test_single_symbol_gets_one_bit_code() {
        let tree = create_tree(&[('x', 4)]);
        assert_eq!(tree.lookup('x').unwrap(), "0");
        assert_eq!(tree.decode_char("0").unwrap(), 'x');
        match tree.root() {
            Node::Inner { weight, right, .. } => {
                assert_eq!(*weight, 4);
                assert_eq!(**right, Node::Vacant);
            }
            _ => panic!("Root of a single symbol tree must be an inner node"),
        }
    }

    #[test]
    fn test_decoding_into_vacant_node_fails() {
        let tree = create_tree(&[('x', 4)]);
        assert!(matches!(tree.decode_char("1"), Err(Error::UndecodableBits(_))));
    }

    #[test]
    fn test_lookup_unknown_symbol() {
        let tree = create_tree(SYMBOLS_AND_FREQUENCIES);
        assert!(matches!(
            tree.lookup('z'),
            Err(Error::SymbolNotInCodeBook('z'))
        ));
    }

    #[test]
    fn test_decode_prefix_consumes_one_code() {
        let tree = create_tree(SYMBOLS_AND_FREQUENCIES);
        assert_eq!(tree.decode_prefix("0111").unwrap(), ('d', 3));
        assert_eq!(tree.decode_prefix("1000").unwrap(), ('a', 1));
        assert_eq!(tree.decode_char("00").unwrap(), 'b');
    }

    #[test]
    fn test_decode_exhausted_path() {
        let tree = create_tree(SYMBOLS_AND_FREQUENCIES);
        assert!(matches!(tree.decode_char("01"), Err(Error::UndecodableBits(_))));
        assert!(matches!(tree.decode_char(""), Err(Error::UndecodableBits(_))));
    }

    #[test]
    fn test_decode_rejects_non_bit_characters() {
        let tree = create_tree(SYMBOLS_AND_FREQUENCIES);
        assert!(matches!(tree.decode_char("0x1"), Err(Error::NotABit('x'))));
    }

    #[test]
    fn test_higher_frequent_symbols_must_not_have_more_depth() {
        let tree = create_tree(SYMBOLS_AND_FREQUENCIES_ODD_LEN);
        for &(left_symbol, left_frequency) in SYMBOLS_AND_FREQUENCIES_ODD_LEN {
            for &(right_symbol, right_frequency) in SYMBOLS_AND_FREQUENCIES_ODD_LEN {
                if left_frequency < right_frequency {
                    let left_depth = calculate_depth(&tree, left_symbol);
                    let right_depth = calculate_depth(&tree, right_symbol);
                    assert!(
                        left_depth >= right_depth,
                        "Depth {} of symbol {} with frequency {} is less than depth {} of symbol {} with frequency {}",
                        left_depth,
                        left_symbol,
                        left_frequency,
                        right_depth,
                        right_symbol,
                        right_frequency
                    );
                }
            }
        }
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let tree = create_tree(SYMBOLS_AND_FREQUENCIES_ODD_LEN);
        let codes = tree.codes();
        for (a, code_a) in &codes {
            for (b, code_b) in &codes {
                if a != b {
                    assert!(
                        !code_b.starts_with(code_a.as_str()),
                        "Code {} of {:?} is a prefix of code {} of {:?}",
                        code_a,
                        a,
                        code_b,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_construction_is_reproducible() {
        let first = create_tree(SYMBOLS_AND_FREQUENCIES_ODD_LEN);
        let second = create_tree(SYMBOLS_AND_FREQUENCIES_ODD_LEN);
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_shows_every_leaf() {
        let tree = create_tree(SYMBOLS_AND_FREQUENCIES);
        let rendered = tree.to_string();
        for (symbol, frequency) in SYMBOLS_AND_FREQUENCIES {
            assert!(rendered.contains(&format!("({:?},w:{})", symbol, frequency)));
        }
        assert!(rendered.starts_with(' '));
    }
}
