use std::fmt;
use std::io;

use crate::error::{Result, RingBufferError};

/// Fixed-capacity buffer holding the most recent bytes written to it.
///
/// While the buffer has not filled up since the last [`clear`](Self::clear),
/// the valid bytes are `buffer[..length]` and `pos == length`. Once full, the
/// whole storage is valid and the oldest byte sits at `pos`.
pub struct RingBuffer {
    buffer: Box<[u8]>,
    pos: usize,
    length: usize,
}

impl RingBuffer {
    /// Creates an empty buffer that retains up to `capacity` bytes.
    ///
    /// A zero capacity is rejected with [`RingBufferError::InvalidCapacity`].
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            log::warn!("rejecting ring buffer with zero capacity");
            return Err(RingBufferError::InvalidCapacity);
        }

        log::debug!("creating ring buffer with capacity {}", capacity);

        Ok(RingBuffer {
            buffer: vec![0; capacity].into_boxed_slice(),
            pos: 0,
            length: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Index the next byte will be written to. When the buffer is full this is
    /// also the index of the oldest byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn is_full(&self) -> bool {
        self.length == self.buffer.len()
    }

    /// Logically empties the buffer. The storage itself is left as is.
    pub fn clear(&mut self) {
        self.pos = 0;
        self.length = 0;
    }

    /// Appends `data`, overwriting the oldest bytes once the buffer is full.
    ///
    /// A write of at least `capacity` bytes keeps only its last `capacity`
    /// bytes. The leading bytes are dropped silently, exactly as if they had
    /// been written and then overwritten.
    pub fn put<D: AsRef<[u8]>>(&mut self, data: D) {
        let data = data.as_ref();
        let n = data.len();
        if n == 0 {
            return;
        }

        let capacity = self.buffer.len();

        if n >= capacity {
            if n > capacity {
                log::trace!(
                    "oversized write of {} bytes, dropping the first {}",
                    n,
                    n - capacity
                );
            }

            let tail = &data[n - capacity..];
            let pos = n % capacity;

            // Reading from `pos` to the end and then from the start must
            // reproduce `tail`.
            let (older, newer) = tail.split_at(capacity - pos);
            self.buffer[pos..].copy_from_slice(older);
            self.buffer[..pos].copy_from_slice(newer);

            self.pos = pos;
            self.length = capacity;
            return;
        }

        let end = self.pos + n;
        if end <= capacity {
            self.buffer[self.pos..end].copy_from_slice(data);
            self.pos = if end == capacity { 0 } else { end };
        } else {
            let (first, second) = data.split_at(capacity - self.pos);
            self.buffer[self.pos..].copy_from_slice(first);
            self.buffer[..second.len()].copy_from_slice(second);
            self.pos = second.len();
        }

        self.length = capacity.min(self.length + n);
    }

    /// Appends a row-major block of frames, each `frame_width` bytes wide.
    ///
    /// The block is flattened and written like [`put`](Self::put). If it is
    /// not a whole number of frames the buffer is left untouched and
    /// [`RingBufferError::InvalidInput`] is returned.
    pub fn put_frames(&mut self, data: &[u8], frame_width: usize) -> Result<()> {
        if frame_width == 0 || data.len() % frame_width != 0 {
            log::warn!(
                "rejecting {} bytes that do not split into frames of width {}",
                data.len(),
                frame_width
            );
            return Err(RingBufferError::InvalidInput {
                len: data.len(),
                frame_width,
            });
        }

        self.put(data);
        Ok(())
    }

    /// Appends typed samples as their native-endian bytes.
    #[cfg(feature = "bytemuck")]
    pub fn put_samples<T: bytemuck::NoUninit>(&mut self, samples: &[T]) {
        self.put(bytemuck::cast_slice::<T, u8>(samples));
    }

    /// Borrows the valid bytes as two slices, oldest segment first.
    ///
    /// The second slice is empty unless the buffer is full and has wrapped.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        if self.length < self.buffer.len() {
            return (&self.buffer[..self.length], &[]);
        }

        let (newer, older) = self.buffer.split_at(self.pos);
        (older, newer)
    }

    /// Copies the valid bytes out in chronological order.
    pub fn getvalue(&self) -> Vec<u8> {
        let (older, newer) = self.as_slices();
        let mut out = Vec::with_capacity(self.length);
        out.extend_from_slice(older);
        out.extend_from_slice(newer);
        out
    }
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.buffer.len())
            .field("pos", &self.pos)
            .field("length", &self.length)
            .finish()
    }
}

impl io::Write for RingBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.put(buf);
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.put(buf);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Extend<u8> for RingBuffer {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        let chunk: Vec<u8> = iter.into_iter().collect();
        self.put(chunk);
    }
}

impl<'a> Extend<&'a u8> for RingBuffer {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl From<&RingBuffer> for Vec<u8> {
    fn from(ring: &RingBuffer) -> Self {
        ring.getvalue()
    }
}
