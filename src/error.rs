use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyQueue,
    EmptyAlphabet,
    SymbolNotInCodeBook(char),
    UndecodableBits(String),
    NotABit(char),
    MissingHeaderByte,
    InvalidHeaderByte(u8),
    SignificantBitsExceeded(u8, u8),
    UnableToOpenInputFileForReading(String, std::io::Error),
    RoundTripMismatch(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyQueue => write!(f, "Priority queue is empty"),
            Self::EmptyAlphabet => {
                write!(f, "Unable to build a Huffman tree from an empty alphabet")
            }
            Self::SymbolNotInCodeBook(symbol) => {
                write!(f, "Cannot encode {:?}, symbol not present in code book", symbol)
            }
            Self::UndecodableBits(bits) => write!(f, "Cannot decode '{}'", bits),
            Self::NotABit(character) => {
                write!(
                    f,
                    "Bit strings may only contain '0' and '1', but found {:?}",
                    character
                )
            }
            Self::MissingHeaderByte => write!(f, "Packed data does not contain a header byte"),
            Self::InvalidHeaderByte(header) => {
                write!(
                    f,
                    "Header byte {} is out of range. Expected a value between 1 and 8.",
                    header
                )
            }
            Self::SignificantBitsExceeded(byte, significant_bits) => {
                write!(
                    f,
                    "Last data byte {:#010b} does not fit into {} significant bits",
                    byte, significant_bits
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::RoundTripMismatch(title) => {
                write!(f, "Recovered text of '{}' differs from the original", title)
            }
        }
    }
}

impl std::error::Error for Error {}
