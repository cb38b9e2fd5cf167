use std::fmt;

pub type Result<T> = std::result::Result<T, PagingError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagingError {
    /// The logical address lies at or past the end of the process.
    AddressOutOfBounds { address: usize, process_size: usize },

    /// The engine was asked to model an impossible memory layout.
    InvalidConstruction { reason: String },

    PageOutOfRange { page_number: usize, page_count: usize },

    FrameOutOfRange { frame_number: usize, frame_count: usize },
}

impl fmt::Display for PagingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PagingError::AddressOutOfBounds {
                address,
                process_size,
            } => {
                write!(
                    f,
                    "logical address {} exceeds process size ({} bytes)",
                    address, process_size
                )
            }

            PagingError::InvalidConstruction { reason } => {
                write!(f, "invalid simulation parameters: {}", reason)
            }

            PagingError::PageOutOfRange {
                page_number,
                page_count,
            } => {
                write!(
                    f,
                    "page {} out of range (process has {} pages)",
                    page_number, page_count
                )
            }

            PagingError::FrameOutOfRange {
                frame_number,
                frame_count,
            } => {
                write!(
                    f,
                    "frame {} out of range (memory has {} frames)",
                    frame_number, frame_count
                )
            }
        }
    }
}

impl std::error::Error for PagingError {}
