use std::fmt;


#[derive(Debug)]
pub enum DecompressionError {
    SourceOverrun { token_offset: usize, available: usize },
}
impl fmt::Display for DecompressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceOverrun { token_offset, available }
                => write!(f, "back-reference token at source offset {} needs 2 payload bytes but only {} remain", token_offset, available),
        }
    }
}
impl std::error::Error for DecompressionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceOverrun { .. } => None,
        }
    }
}


#[derive(Debug)]
pub enum ExtractionError {
    SegmentOutOfRange { offset: usize, length: usize, image_len: usize },
    Decompression(DecompressionError),
}
impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SegmentOutOfRange { offset, length, image_len }
                => write!(f, "segment at offset {} of length {} does not fit into an image of {} bytes", offset, length, image_len),
            Self::Decompression(e)
                => write!(f, "decompression error: {}", e),
        }
    }
}
impl std::error::Error for ExtractionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SegmentOutOfRange { .. } => None,
            Self::Decompression(e) => Some(e),
        }
    }
}
impl From<DecompressionError> for ExtractionError {
    fn from(value: DecompressionError) -> Self { Self::Decompression(value) }
}
