use crate::{Seq, of};
use alloc::rc::Rc;
use alloc::vec::Vec;

/// Creates the lazy concatenation of the given sequences.
///
/// Each input is traversed only once the previous one is exhausted; the last input is shared, not copied.
///
/// # Examples
///
/// ```rust
/// use orx_lazy_seq::*;
///
/// let seq = concat([of([1, 2]), Seq::empty(), repeat(0)]);
/// assert_eq!(seq.take(5).to_vec(), [1, 2, 0, 0, 0]);
/// ```
pub fn concat<'a, T, I>(seqs: I) -> Seq<'a, T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = Seq<'a, T>>,
{
    of(seqs).flatten()
}

/// Creates the lazy sequence combining the elements of the given sequences position by position with `f`.
///
/// `f` receives one element from each input, in the order of the inputs.
/// The result is as long as the shortest input; it is empty if there are no inputs.
///
/// # Examples
///
/// ```rust
/// use orx_lazy_seq::*;
///
/// let sums = zip_with([series(0, 1), series(100, 100), of([7, 7, 7])], |xs| {
///     xs.iter().copied().sum::<i32>()
/// });
/// assert_eq!(sums.to_vec(), [107, 208, 309]);
/// ```
pub fn zip_with<'a, T, U, I, F>(seqs: I, f: F) -> Seq<'a, U>
where
    T: 'a,
    U: 'a,
    I: IntoIterator<Item = Seq<'a, T>>,
    F: Fn(&[&T]) -> U + 'a,
{
    zip_from(seqs.into_iter().collect(), Rc::new(f))
}

fn zip_from<'a, T, U, F>(seqs: Vec<Seq<'a, T>>, f: Rc<F>) -> Seq<'a, U>
where
    T: 'a,
    U: 'a,
    F: Fn(&[&T]) -> U + 'a,
{
    if seqs.is_empty() {
        return Seq::empty();
    }

    let heads: Option<Vec<&T>> = seqs.iter().map(Seq::head).collect();
    let value = match heads {
        Some(heads) => f(heads.as_slice()),
        None => return Seq::empty(),
    };

    Seq::new(value, move || {
        let tails = seqs.iter().map(|seq| seq.tail().clone()).collect();
        zip_from(tails, f)
    })
}
