//! A fixed-capacity byte ring buffer.
//!
//! [`RingBuffer`] keeps a rolling window of the most recently written bytes.
//! Once full, every write overwrites the oldest bytes, and
//! [`RingBuffer::getvalue`] returns the retained window oldest first.
//!
//! ```
//! use bytering::RingBuffer;
//!
//! let mut ring = RingBuffer::new(5)?;
//! ring.put(b"abc");
//! ring.put(b"defg");
//! assert_eq!(ring.getvalue(), b"cdefg");
//! # Ok::<(), bytering::RingBufferError>(())
//! ```
//!
//! The buffer does no locking. Wrap it in a `Mutex` when it has to be shared
//! between threads.

pub mod error;
pub mod ring_buffer;

pub use error::{Result, RingBufferError};
pub use ring_buffer::RingBuffer;
