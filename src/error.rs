use core::fmt::Display;

/// Error cases of positional access into a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    /// OutOfBounds => The sequence ends before the requested position.
    /// * `index` is the requested position,
    /// * `len` is the number of elements the sequence turned out to have.
    OutOfBounds {
        /// Requested position.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },
}

impl Display for SeqError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => write!(
                f,
                "index {} is out of bounds of a sequence with {} elements",
                index, len
            ),
        }
    }
}

impl core::error::Error for SeqError {}
