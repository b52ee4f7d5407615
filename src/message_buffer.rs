use std::fmt;

/// Capacity, in bytes, of the buffer behind every [`Record`](crate::Record),
/// terminator included.
pub const MESSAGE_CAPACITY: usize = 256;

/// Written in place of whatever did not fit.
pub const TRUNCATION_MARKER: &str = "[TRUNCATED]";

/// A fixed-capacity, append-only, NUL-terminated message buffer.
///
/// The buffer never allocates. One byte is always reserved for the
/// terminator, so at most `CAP - 1` bytes of text are stored. When an append
/// does not fit, the buffer keeps as much of the fragment as it can, writes
/// [`TRUNCATION_MARKER`] (or as much of its start as still fits) and stops
/// accepting content: every later append is a no-op.
///
/// Cuts always land on UTF-8 character boundaries, so the stored text is
/// always a valid `&str`.
///
/// # Type Parameters
///
/// * `CAP` - Total size in bytes, terminator included. Must be at least 1.
///
/// # Examples
///
/// ```
/// use logger_lite::message_buffer::{MessageBuffer, TRUNCATION_MARKER};
///
/// let mut buffer = MessageBuffer::<32>::new();
/// buffer.append("Hello, ");
/// buffer.append("world");
/// assert_eq!(buffer.as_str(), "Hello, world");
///
/// buffer.append("this part no longer fits in 32 bytes");
/// assert!(buffer.is_truncated());
/// assert!(buffer.as_str().ends_with(TRUNCATION_MARKER));
/// assert_eq!(buffer.len(), 31);
/// ```
pub struct MessageBuffer<const CAP: usize = MESSAGE_CAPACITY> {
    data: [u8; CAP],
    pos: usize,
    truncated: bool,
}

impl<const CAP: usize> MessageBuffer<CAP> {
    const NON_EMPTY: () = assert!(CAP > 0, "MessageBuffer needs room for the terminator");

    /// Creates an empty buffer.
    #[inline(always)]
    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self {
            data: [0; CAP],
            pos: 0,
            truncated: false,
        }
    }

    /// Appends a text fragment.
    ///
    /// If `fragment` fits in the remaining space (one byte stays reserved for
    /// the terminator) it is copied verbatim. Otherwise the leading part of
    /// `fragment` that still leaves room for [`TRUNCATION_MARKER`] is copied,
    /// followed by the marker. If less room than the marker remains, only the
    /// leading marker bytes that fit are written. Text already in the buffer
    /// is never touched.
    ///
    /// # Arguments
    ///
    /// * `fragment` - Text to append
    pub fn append(&mut self, fragment: &str) {
        if self.truncated {
            return;
        }

        let bytes = fragment.as_bytes();
        let available = self.available();

        if bytes.len() <= available {
            self.data[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
            self.pos += bytes.len();
        } else {
            self.truncate(fragment, available);
        }

        self.data[self.pos] = 0;
    }

    fn truncate(&mut self, fragment: &str, available: usize) {
        let marker = &TRUNCATION_MARKER.as_bytes()[..TRUNCATION_MARKER.len().min(available)];
        let keep = floor_char_boundary(fragment, available - marker.len());

        self.data[self.pos..self.pos + keep].copy_from_slice(&fragment.as_bytes()[..keep]);
        self.pos += keep;
        self.data[self.pos..self.pos + marker.len()].copy_from_slice(marker);
        self.pos += marker.len();
        self.truncated = true;
    }

    /// Bytes that can still be appended without truncation.
    #[inline(always)]
    pub fn available(&self) -> usize {
        CAP - self.pos - 1
    }

    /// Stored text length in bytes, terminator excluded.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        CAP
    }

    /// Whether an append overflowed. A truncated buffer accepts no more text.
    #[inline(always)]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// The stored text.
    pub fn as_str(&self) -> &str {
        // SAFETY: only `&str` prefixes cut at char boundaries and ASCII
        // marker bytes are ever copied in, so `data[..pos]` is always valid
        // UTF-8.
        unsafe { std::str::from_utf8_unchecked(&self.data[..self.pos]) }
    }

    /// The stored text followed by its terminating NUL byte.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data[..=self.pos]
    }
}

impl<const CAP: usize> Default for MessageBuffer<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> fmt::Write for MessageBuffer<CAP> {
    /// Never fails: overflow is absorbed by truncation.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}

impl<const CAP: usize> fmt::Debug for MessageBuffer<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBuffer")
            .field("capacity", &CAP)
            .field("len", &self.pos)
            .field("truncated", &self.truncated)
            .field("text", &self.as_str())
            .finish()
    }
}

/// Largest index `<= index` that falls on a char boundary of `s`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}
