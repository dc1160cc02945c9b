//! The LZSS token stream decoder.
//!
//! The stream interleaves control bytes with payload. Each control byte
//! supplies eight flag bits, consumed least significant first, one per
//! payload unit: a set bit is followed by a literal byte, a clear bit by a
//! 2-byte back-reference into the 4096-byte dictionary window.
//!
//! The window is not kept as a separate buffer; references are resolved
//! directly against the output produced so far. Window slot positions map
//! to absolute output offsets through a running window origin, and slots
//! that precede the first output byte read as zero.

use tracing::debug;

use crate::error::DecompressionError;


const WINDOW_SIZE: usize = 4096;

/// Window slot the first output byte lands in. The encoder leaves the final
/// 18 slots of the first window lap for the longest possible match.
const INITIAL_WINDOW_POSITION: usize = WINDOW_SIZE - 18;


/// Flag bits of the most recently read control byte.
///
/// Bits are handed out least significant first. Once all eight have been
/// consumed, the next source byte refills the word.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
struct ControlWord {
    bits: u8,
    bits_left: u8,
}
impl ControlWord {
    pub fn refill(&mut self, byte: u8) {
        self.bits = byte;
        self.bits_left = 8;
    }

    pub fn is_exhausted(&self) -> bool { self.bits_left == 0 }

    pub fn take_bit(&mut self) -> bool {
        let bit = (self.bits & 1) != 0;
        self.bits >>= 1;
        self.bits_left -= 1;
        bit
    }
}


/// Decompresses a complete LZSS stream, appending to `dst`.
///
/// Returns the number of bytes appended. The stream carries no end marker;
/// decoding stops once `src` is fully consumed. A stream whose final
/// back-reference token is cut off by the end of `src` yields
/// [`DecompressionError::SourceOverrun`]; everything appended up to that
/// token is left in `dst`.
pub fn decompress(src: &[u8], dst: &mut Vec<u8>) -> Result<usize, DecompressionError> {
    let base = dst.len();
    let mut cursor = 0;
    let mut control = ControlWord::default();
    let mut window_position = INITIAL_WINDOW_POSITION;
    // absolute output offset of window slot 0; negative as long as the first
    // window lap still overlaps the zero preamble
    let mut window_origin = -(INITIAL_WINDOW_POSITION as isize);

    while cursor < src.len() {
        if control.is_exhausted() {
            control.refill(src[cursor]);
            cursor += 1;
            debug!("control bits: {:08b}", control.bits);
            if cursor == src.len() {
                // a trailing control byte with no payload behind it is
                // tolerated padding
                break;
            }
        }

        if control.take_bit() {
            // literal
            let byte = src[cursor];
            cursor += 1;
            dst.push(byte);
            if window_position + 1 >= WINDOW_SIZE {
                window_origin += WINDOW_SIZE as isize;
            }
            window_position = (window_position + 1) % WINDOW_SIZE;
        } else {
            // back-reference, two bytes:
            // b0 = P7 P6 P5 P4 P3 P2 P1 P0
            // b1 = Pb Pa P9 P8 L3 L2 L1 L0
            // where P = window slot of the match, L = match length - 3
            if src.len() - cursor < 2 {
                return Err(DecompressionError::SourceOverrun {
                    token_offset: cursor,
                    available: src.len() - cursor,
                });
            }
            let low = usize::from(src[cursor]);
            let high = usize::from(src[cursor + 1]);
            cursor += 2;
            let window_offset = low | ((high & 0xF0) << 4);
            let length = (high & 0x0F) + 3;
            debug!("match at window slot {:#05X} for {} bytes", window_offset, length);

            // the origin moves up before the reference is resolved if the
            // copy crosses the end of the window
            if window_position + length >= WINDOW_SIZE {
                window_origin += WINDOW_SIZE as isize;
            }

            let written = (dst.len() - base) as isize;
            let mut from = window_offset as isize + window_origin;
            // references always point behind the write cursor; with the
            // origin already moved up this can take two corrections
            while from >= written {
                from -= WINDOW_SIZE as isize;
            }

            // byte-at-a-time so that a reference overlapping the copy reads
            // the bytes just written, not stale window content
            for step in 0..length {
                let at = from + step as isize;
                let byte = if at >= 0 { dst[base + at as usize] } else { 0 };
                dst.push(byte);
            }
            window_position = (window_position + length) % WINDOW_SIZE;
        }
    }

    Ok(dst.len() - base)
}
