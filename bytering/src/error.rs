use thiserror::Error;

/// Errors reported by [`RingBuffer`](crate::ring_buffer::RingBuffer).
///
/// A failing operation never leaves the buffer partially modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingBufferError {
    /// A ring buffer must hold at least one byte.
    #[error("ring buffer capacity must be greater than zero")]
    InvalidCapacity,

    /// A shaped write could not be flattened into whole frames.
    #[error("cannot flatten {len} bytes into frames of width {frame_width}")]
    InvalidInput { len: usize, frame_width: usize },
}

pub type Result<T> = std::result::Result<T, RingBufferError>;
