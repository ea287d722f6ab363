use crate::Seq;
use alloc::vec::Vec;

/// Builds a fully resolved sequence; the iterator is consumed eagerly.
///
/// See [`from_iter_lazy`] to pull the elements on demand instead.
///
/// [`from_iter_lazy`]: crate::from_iter_lazy
impl<T> FromIterator<T> for Seq<'_, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<_> = iter.into_iter().collect();
        values
            .into_iter()
            .rev()
            .fold(Seq::empty(), |tail, value| Seq::from_parts(value, tail))
    }
}
