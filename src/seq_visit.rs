use crate::{Iter, Seq, SeqError};
use alloc::vec::Vec;

impl<'a, T> Seq<'a, T> {
    /// Returns an iterator yielding references to the elements of the sequence, resolving tails on the way.
    pub fn iter(&self) -> Iter<'_, 'a, T> {
        Iter::new(self)
    }

    /// ***O(n)*** Returns the number of elements of the sequence.
    ///
    /// Resolves every tail; never returns if the sequence is infinite.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// ***O(n)*** Resolves every tail of the sequence and returns the very same sequence.
    ///
    /// Never returns if the sequence is infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_lazy_seq::*;
    ///
    /// let seq = series(0, 1).take(3);
    /// assert!(!seq.is_resolved());
    ///
    /// let forced = seq.force();
    /// assert!(forced.ptr_eq(&seq));
    /// assert!(seq.is_resolved());
    /// ```
    pub fn force(&self) -> &Self {
        let mut current = self;
        while !current.is_empty() {
            current = current.tail();
        }
        self
    }

    /// Applies `f` to each element of the sequence in order, and returns the very same sequence.
    pub fn each<F>(&self, f: F) -> &Self
    where
        F: FnMut(&T),
    {
        self.iter().for_each(f);
        self
    }

    /// Returns whether all elements satisfy `predicate`; stops at the first element which does not.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns whether any element satisfies `predicate`; stops at the first element which does.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// ***O(n)*** Strict left fold threading the accumulator `init` through `f` over all elements.
    ///
    /// Never returns if the sequence is infinite.
    pub fn fold<R, F>(&self, init: R, f: F) -> R
    where
        F: FnMut(R, &T) -> R,
    {
        self.iter().fold(init, f)
    }

    /// ***O(index)*** Returns a reference to the element at the given `index`;
    /// None if the sequence has no more than `index` elements.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// ***O(index)*** Returns a reference to the element at the given `index`.
    ///
    /// If the sequence is too short, returns the `SeqError::OutOfBounds` error reporting the length of the sequence.
    pub fn get_or_error(&self, index: usize) -> Result<&T, SeqError> {
        let mut current = self;
        for position in 0..index {
            match current.split() {
                Some((_, tail)) => current = tail,
                None => return Err(SeqError::OutOfBounds { index, len: position }),
            }
        }
        current
            .head()
            .ok_or(SeqError::OutOfBounds { index, len: index })
    }

    /// ***O(n)*** Collects clones of all elements into a vector.
    ///
    /// Never returns if the sequence is infinite.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}
