use huffman_zipper::{CodeBook, Error, FrequencyTable, Zipper};

fn main() -> Result<(), Error> {
    // symbol-frequency pairs
    let frequencies: FrequencyTable = [('a', 5_usize), ('b', 2), ('c', 1), ('d', 1)]
        .into_iter()
        .collect();

    let book = CodeBook::new(frequencies)?;
    println!("huffman tree\n{}", book.huffman_tree());
    println!("code book\n{}", book);
    println!("weighted average\n{:.3}", book.weighted_average());

    let text_to_encode = "abacabad";

    let zipper = Zipper::new(&book);
    let bits = zipper.encode(text_to_encode)?;
    println!("text to encode\n{}", text_to_encode);
    println!("encoded bits\n{}", bits);

    let packed = zipper.compress(&bits)?;
    println!("packed bytes\n{:?}", packed);

    let unpacked = zipper.decompress(&packed)?;
    let decoded = zipper.decode(&unpacked)?;
    println!("decoded text\n{}", decoded);
    Ok(())
}
