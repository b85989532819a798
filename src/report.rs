use std::fmt;

use crate::error::Error;
use crate::huffman::CodeBook;
use crate::packing::BITS_PER_BYTE;
use crate::zipper::Zipper;
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeBookSource {
    /// A code optimized for the reported text.
    Text,
    /// The general purpose code over lowercase English letters.
    EnglishLetters,
}

impl CodeBookSource {
    pub fn create_code_book(self, text: &str) -> Result<CodeBook> {
        match self {
            CodeBookSource::Text => CodeBook::from_text(text),
            CodeBookSource::EnglishLetters => CodeBook::english(),
        }
    }
}

/// Statistics of one encode, compress, decompress and decode cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionReport {
    pub title: String,
    pub characters: usize,
    pub alphabet_size: usize,
    pub weighted_average: f64,
    pub encoded_bits: usize,
    pub packed_bytes: usize,
    pub unpacked_bits: usize,
    pub recovered_characters: usize,
    pub tree: Option<String>,
}

impl CompressionReport {
    pub fn generate(
        title: &str,
        text: &str,
        source: CodeBookSource,
        show_tree: bool,
    ) -> Result<CompressionReport> {
        log::info!("Generating report for '{}'", title);
        let book = source.create_code_book(text)?;
        let zipper = Zipper::new(&book);
        let bits = zipper.encode(text)?;
        let packed = zipper.compress(&bits)?;
        let unpacked = zipper.decompress(&packed)?;
        let recovered = zipper.decode(&unpacked)?;
        if recovered != text {
            return Err(Error::RoundTripMismatch(title.to_owned()));
        }
        Ok(CompressionReport {
            title: title.to_owned(),
            characters: text.chars().count(),
            alphabet_size: book.size(),
            weighted_average: book.weighted_average(),
            encoded_bits: bits.len(),
            packed_bytes: packed.len(),
            unpacked_bits: unpacked.len(),
            recovered_characters: recovered.chars().count(),
            tree: show_tree.then(|| book.huffman_tree().to_string()),
        })
    }

    /// Bits saved compared to storing every character in one byte.
    pub fn bit_savings(&self) -> i64 {
        (self.characters * BITS_PER_BYTE) as i64 - self.encoded_bits as i64
    }

    pub fn byte_savings(&self) -> i64 {
        self.characters as i64 - self.packed_bytes as i64
    }

    pub fn savings_percentage(&self) -> f64 {
        if self.characters == 0 {
            return 0.0;
        }
        self.byte_savings() as f64 * 100.0 / self.characters as f64
    }
}

impl fmt::Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(tree) = &self.tree {
            write!(f, "{}", tree)?;
        }
        writeln!(f, "The original text has {} characters.", self.characters)?;
        writeln!(f, "The code book holds {} symbols.", self.alphabet_size)?;
        writeln!(
            f,
            "The average length of a code is {:.2} bits.",
            self.weighted_average
        )?;
        writeln!(f, "The text is encoded in {} bits.", self.encoded_bits)?;
        writeln!(f, "The savings is {} bits.", self.bit_savings())?;
        writeln!(
            f,
            "The compressed text is encoded in {} bytes.",
            self.packed_bytes
        )?;
        writeln!(
            f,
            "The savings is {} bytes ({:.1}%).",
            self.byte_savings(),
            self.savings_percentage()
        )?;
        writeln!(f, "Decompressing yields {} bits.", self.unpacked_bits)?;
        writeln!(
            f,
            "The recovered text has {} characters.",
            self.recovered_characters
        )
    }
}

#[cfg(test)]
mod test {
    use super::{CodeBookSource, CompressionReport};
    use crate::error::Error;

    const SAMPLE_TEXT: &str = "abacabad";

    #[test]
    fn test_report_statistics() {
        let report =
            CompressionReport::generate("sample", SAMPLE_TEXT, CodeBookSource::Text, false)
                .unwrap();
        assert_eq!(report.characters, 8);
        assert_eq!(report.alphabet_size, 4);
        // a=0, b=10, c=110, d=111
        assert_eq!(report.encoded_bits, 14);
        assert_eq!(report.packed_bytes, 3);
        assert_eq!(report.unpacked_bits, 14);
        assert_eq!(report.recovered_characters, 8);
        assert_eq!(report.bit_savings(), 64 - 14);
        assert_eq!(report.byte_savings(), 5);
        assert!((report.weighted_average - 14.0 / 8.0).abs() < 1e-9);
        assert!(report.tree.is_none());
    }

    #[test]
    fn test_report_with_tree() {
        let report =
            CompressionReport::generate("sample", SAMPLE_TEXT, CodeBookSource::Text, true)
                .unwrap();
        let tree = report.tree.as_deref().unwrap();
        assert!(tree.contains("('a',w:4)"));
        assert!(report.to_string().contains(tree));
    }

    #[test]
    fn test_report_with_english_book() {
        let report = CompressionReport::generate(
            "letters",
            "hello",
            CodeBookSource::EnglishLetters,
            false,
        )
        .unwrap();
        assert_eq!(report.alphabet_size, 26);
        assert_eq!(report.recovered_characters, 5);
    }

    #[test]
    fn test_report_fails_for_unknown_symbol() {
        let result = CompressionReport::generate(
            "letters",
            "Hello",
            CodeBookSource::EnglishLetters,
            false,
        );
        assert!(matches!(result, Err(Error::SymbolNotInCodeBook('H'))));
    }

    #[test]
    fn test_report_of_empty_text() {
        let result = CompressionReport::generate("empty", "", CodeBookSource::Text, false);
        assert!(matches!(result, Err(Error::EmptyAlphabet)));
    }

    #[test]
    fn test_display() {
        let report =
            CompressionReport::generate("sample", SAMPLE_TEXT, CodeBookSource::Text, false)
                .unwrap();
        let rendered = report.to_string();
        assert!(rendered.starts_with("sample\n"));
        assert!(rendered.contains("The text is encoded in 14 bits."));
        assert!(rendered.contains("The recovered text has 8 characters."));
    }
}
