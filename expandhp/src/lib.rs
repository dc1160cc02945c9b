//! Decompressor for the LZSS variant embedded in HP OfficeJet printer firmware.
//!
//! Firmware images of this family carry several independently compressed
//! segments at fixed byte offsets. Each segment is a bare LZSS token stream
//! with no header or end marker: control bytes hand out one bit per payload
//! unit, a set bit introduces a literal byte, a clear bit a 2-byte
//! back-reference into a 4096-byte sliding dictionary.


mod error;
pub mod lzss;
pub mod segment;


pub use crate::error::{DecompressionError, ExtractionError};


/// Decompresses one complete segment into a fresh buffer.
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>, DecompressionError> {
    let mut decompressed = Vec::new();
    crate::lzss::decompress(compressed, &mut decompressed)?;
    Ok(decompressed)
}
