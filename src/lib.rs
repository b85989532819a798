use std::{fs, path::Path, path::PathBuf, sync::mpsc};

pub use cli::CLIParser;
pub use error::Error;
pub use frequency_table::FrequencyTable;
pub use huffman::{CodeBook, HuffmanTree, Node, Symbol};
pub use report::{CodeBookSource, CompressionReport};
use threadpool::ThreadPool;
pub use zipper::Zipper;

mod cli;
mod error;
pub mod frequency_table;
pub mod huffman;
mod logger;
pub mod packing;
pub mod priority_queue;
pub mod report;
pub mod zipper;

pub type Result<T> = std::result::Result<T, error::Error>;

const SAMPLE_TITLE: &str = "Built-in sample text";

pub const SAMPLE_TEXT: &str = concat!(
    "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
    "bbbbbbbbbbbbbb",
    "cccccccccccc",
    "ddddddddddddddddddddd",
    "eeeeeeeee",
    "fffff",
);

pub struct Arguments {
    input_files: Vec<PathBuf>,
    code_book_source: CodeBookSource,
    number_of_threads: usize,
    show_tree: bool,
}

fn read_input_file(file_path: &Path) -> Result<String> {
    fs::read_to_string(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn load_texts(arguments: &Arguments) -> Result<Vec<(String, String)>> {
    if arguments.input_files.is_empty() {
        return Ok(vec![(SAMPLE_TITLE.to_owned(), SAMPLE_TEXT.to_owned())]);
    }
    arguments
        .input_files
        .iter()
        .map(|path| -> Result<(String, String)> {
            Ok((path.display().to_string(), read_input_file(path)?))
        })
        .collect()
}

/// Report on every input, each one coded by a separate worker.
/// Reports are returned in input order.
pub fn generate_reports(arguments: &Arguments) -> Result<Vec<CompressionReport>> {
    let texts = load_texts(arguments)?;
    let number_of_texts = texts.len();
    let threadpool = ThreadPool::new(arguments.number_of_threads.clamp(1, number_of_texts));
    let (sender, receiver) = mpsc::channel();
    for (index, (title, text)) in texts.into_iter().enumerate() {
        let sender = sender.clone();
        let source = arguments.code_book_source;
        let show_tree = arguments.show_tree;
        threadpool.execute(move || {
            let report = CompressionReport::generate(&title, &text, source, show_tree);
            // the receiver outlives every worker
            let _ = sender.send((index, report));
        });
    }
    drop(sender);
    let mut results: Vec<(usize, Result<CompressionReport>)> = receiver.iter().collect();
    log::info!("Finished {} of {} reports", results.len(), number_of_texts);
    results.sort_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, report)| report).collect()
}
