//! Addressing of compressed segments inside a firmware image.
//!
//! The firmware layout is not discovered; callers state where each segment
//! sits. The image itself is just a byte buffer to this module.

use crate::error::ExtractionError;
use crate::lzss;


/// Location of one compressed segment inside a firmware image.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SegmentLocation {
    /// Offset of the first compressed byte from the start of the image.
    pub offset: usize,

    /// Length of the compressed segment in bytes.
    pub length: usize,
}


/// Returns the compressed bytes of one segment, checking the location
/// against the image bounds.
pub fn segment_bytes(image: &[u8], location: SegmentLocation) -> Result<&[u8], ExtractionError> {
    let out_of_range = ExtractionError::SegmentOutOfRange {
        offset: location.offset,
        length: location.length,
        image_len: image.len(),
    };
    let end = match location.offset.checked_add(location.length) {
        Some(end) => end,
        None => return Err(out_of_range),
    };
    image.get(location.offset..end)
        .ok_or(out_of_range)
}

/// Slices one segment out of the image and decompresses it.
pub fn decompress_segment(image: &[u8], location: SegmentLocation) -> Result<Vec<u8>, ExtractionError> {
    let compressed = segment_bytes(image, location)?;
    let mut decompressed = Vec::new();
    lzss::decompress(compressed, &mut decompressed)?;
    Ok(decompressed)
}


#[cfg(test)]
mod tests {
    use super::{SegmentLocation, decompress_segment, segment_bytes};
    use crate::error::ExtractionError;

    #[test]
    fn test_segment_slicing() {
        let image = [0u8, 1, 2, 3, 4, 5, 6, 7];
        let bytes = segment_bytes(&image, SegmentLocation { offset: 2, length: 3 })
            .expect("failed to slice");
        assert_eq!(bytes, &[2, 3, 4]);
    }

    #[test]
    fn test_segment_out_of_range() {
        let image = [0u8; 16];
        let err = segment_bytes(&image, SegmentLocation { offset: 12, length: 8 })
            .expect_err("sliced past the end of the image");
        match err {
            ExtractionError::SegmentOutOfRange { offset, length, image_len } => {
                assert_eq!(offset, 12);
                assert_eq!(length, 8);
                assert_eq!(image_len, 16);
            },
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_segment_offset_overflow() {
        let image = [0u8; 16];
        segment_bytes(&image, SegmentLocation { offset: usize::MAX, length: 2 })
            .expect_err("sliced past the end of the address space");
    }

    #[test]
    fn test_segment_decompression() {
        // image with one literal-only segment at offset 4, padding around it
        let mut image = vec![0xEE; 4];
        image.extend_from_slice(&[0xFF, 0x48, 0x50, 0x21]);
        image.extend_from_slice(&[0xEE; 4]);

        let decompressed = decompress_segment(&image, SegmentLocation { offset: 4, length: 4 })
            .expect("failed to decompress segment");
        assert_eq!(&decompressed, b"HP!");
    }
}
