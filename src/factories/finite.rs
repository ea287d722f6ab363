use crate::Seq;

/// Creates the sequence of the given `values`, in order.
///
/// An empty collection yields the empty sequence.
///
/// # Examples
///
/// ```rust
/// use orx_lazy_seq::*;
///
/// let seq = of(['a', 'b', 'c']);
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq.head(), Some(&'a'));
///
/// assert!(of(Vec::<char>::new()).is_empty());
/// ```
pub fn of<'a, T, I>(values: I) -> Seq<'a, T>
where
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect()
}

/// Creates a sequence pulling its elements from `iter` on demand.
///
/// The first element is pulled immediately; every later element is pulled when the tail holding it is first accessed.
/// The iterator is dropped once it is exhausted.
pub fn from_iter_lazy<'a, I>(iter: I) -> Seq<'a, I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    pull(iter.into_iter())
}

fn pull<'a, I>(mut iter: I) -> Seq<'a, I::Item>
where
    I: Iterator + 'a,
    I::Item: 'a,
{
    match iter.next() {
        Some(value) => Seq::new(value, move || pull(iter)),
        None => Seq::empty(),
    }
}
