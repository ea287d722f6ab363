use crate::Seq;
use core::iter::FusedIterator;

/// Iterator over references to the elements of a sequence.
///
/// The tail of an element is resolved only when the element after it is requested;
/// the resolved tails stay memoized in the sequence.
pub struct Iter<'s, 'a, T> {
    current: &'s Seq<'a, T>,
    advance: bool,
}

impl<'s, 'a, T> Iter<'s, 'a, T> {
    pub(crate) fn new(seq: &'s Seq<'a, T>) -> Self {
        Self {
            current: seq,
            advance: false,
        }
    }
}

impl<'s, T> Iterator for Iter<'s, '_, T> {
    type Item = &'s T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance {
            self.current = self.current.tail();
        }
        let value = self.current.head()?;
        self.advance = true;
        Some(value)
    }
}

impl<T> FusedIterator for Iter<'_, '_, T> {}

impl<T> Clone for Iter<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            advance: self.advance,
        }
    }
}

/// Owning iterator over clones of the elements of a sequence.
///
/// The iterator holds a cursor rather than the whole sequence; nodes behind the cursor are
/// released unless another sequence still refers to them.
pub struct IntoIter<'a, T> {
    current: Seq<'a, T>,
    advance: bool,
}

impl<'a, T> IntoIter<'a, T> {
    pub(crate) fn new(seq: Seq<'a, T>) -> Self {
        Self {
            current: seq,
            advance: false,
        }
    }
}

impl<T: Clone> Iterator for IntoIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance {
            self.current = self.current.tail().clone();
        }
        let value = self.current.head()?.clone();
        self.advance = true;
        Some(value)
    }
}

impl<T: Clone> FusedIterator for IntoIter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn iter_by_ref() {
        let seq: Seq<_> = (0..4).collect();
        let values: Vec<_> = seq.iter().copied().collect();
        assert_eq!(values, [0, 1, 2, 3]);

        let mut iter = seq.iter();
        assert_eq!(iter.next(), Some(&0));
        let forked = iter.clone();
        assert_eq!(iter.count(), 3);
        assert_eq!(forked.count(), 3);
    }

    #[test]
    fn iter_fused() {
        let seq: Seq<_> = [1].into_iter().collect();
        let mut iter = seq.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iter_resolves_on_demand() {
        let seq = Seq::new(0, || Seq::new(1, Seq::empty));
        let mut iter = seq.iter();

        assert_eq!(iter.next(), Some(&0));
        assert!(!seq.is_resolved());

        assert_eq!(iter.next(), Some(&1));
        assert!(seq.is_resolved());
        assert!(!seq.tail().is_resolved());
    }

    #[test]
    fn into_iter_owned() {
        let seq: Seq<_> = ['x', 'y'].into_iter().collect();
        let values: Vec<char> = seq.clone().into_iter().collect();
        assert_eq!(values, ['x', 'y']);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn into_iter_on_infinite() {
        let seq = Seq::new(0, || crate::repeat(1));
        let values: Vec<_> = seq.into_iter().take(4).collect();
        assert_eq!(values, [0, 1, 1, 1]);
    }
}
