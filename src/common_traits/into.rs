use crate::{IntoIter, Iter, Seq};

impl<'s, 'a, T> IntoIterator for &'s Seq<'a, T> {
    type Item = &'s T;
    type IntoIter = Iter<'s, 'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

impl<'a, T: Clone> IntoIterator for Seq<'a, T> {
    type Item = T;
    type IntoIter = IntoIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
