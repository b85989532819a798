use std::fmt::Write;

use crate::error::Error;
use crate::huffman::{ONE_BIT, ZERO_BIT};
use crate::logger::log_packing;
use crate::Result;

pub const BITS_PER_BYTE: usize = 8;

/// Pack a bit string into bytes, most significant bit first.
///
/// The first byte of the result is a header holding the number of
/// significant bits in the last data byte (1 to 8). A short last group is
/// stored as its numeric value, so its padding bits are the leading ones.
pub fn pack(bits: &str) -> Result<Vec<u8>> {
    let bit_count = bits.len();
    let mut packed = Vec::with_capacity(1 + bit_count.div_ceil(BITS_PER_BYTE));
    packed.push(last_group_size(bit_count) as u8);
    for group in bits.as_bytes().chunks(BITS_PER_BYTE) {
        packed.push(group_to_byte(group)?);
    }
    log_packing("Packed", bit_count, packed.len());
    Ok(packed)
}

/// Reverse of [`pack`].
pub fn unpack(packed: &[u8]) -> Result<String> {
    let (&header, data) = packed.split_first().ok_or(Error::MissingHeaderByte)?;
    if header == 0 || header as usize > BITS_PER_BYTE {
        return Err(Error::InvalidHeaderByte(header));
    }
    let mut bits = String::with_capacity(data.len() * BITS_PER_BYTE);
    if let Some((&last, full_bytes)) = data.split_last() {
        for &byte in full_bytes {
            push_byte(&mut bits, byte, BITS_PER_BYTE);
        }
        if header < u8::BITS as u8 && last >> header != 0 {
            return Err(Error::SignificantBitsExceeded(last, header));
        }
        push_byte(&mut bits, last, header as usize);
    }
    log_packing("Unpacked", bits.len(), packed.len());
    Ok(bits)
}

fn last_group_size(bit_count: usize) -> usize {
    match bit_count % BITS_PER_BYTE {
        0 => BITS_PER_BYTE,
        remainder => remainder,
    }
}

fn group_to_byte(group: &[u8]) -> Result<u8> {
    group.iter().try_fold(0u8, |byte, &bit| match bit as char {
        ZERO_BIT => Ok(byte << 1),
        ONE_BIT => Ok((byte << 1) | 1),
        other => Err(Error::NotABit(other)),
    })
}

fn push_byte(bits: &mut String, byte: u8, width: usize) {
    // writing into a String never fails
    let _ = write!(bits, "{:0width$b}", byte, width = width);
}
