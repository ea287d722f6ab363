use crate::Seq;
use alloc::rc::Rc;
use core::ops::Add;

/// Creates the infinite sequence repeating `value`.
///
/// # Examples
///
/// ```rust
/// use orx_lazy_seq::*;
///
/// let zeros = repeat(0);
/// assert_eq!(zeros.take(3).to_vec(), [0, 0, 0]);
/// ```
pub fn repeat<'a, T>(value: T) -> Seq<'a, T>
where
    T: Clone + 'a,
{
    Seq::new(value.clone(), move || repeat(value))
}

/// Creates the infinite arithmetic sequence `start, start + step, start + 2 * step, ...`.
///
/// # Examples
///
/// ```rust
/// use orx_lazy_seq::*;
///
/// let odds = series(1, 2);
/// assert_eq!(odds.take(4).to_vec(), [1, 3, 5, 7]);
///
/// let sum = series(0, 1).take(8).fold(0, |acc, x| acc + x);
/// assert_eq!(sum, 28);
/// ```
pub fn series<'a, T>(start: T, step: T) -> Seq<'a, T>
where
    T: Clone + Add<Output = T> + 'a,
{
    Seq::new(start.clone(), move || {
        let next = start + step.clone();
        series(next, step)
    })
}

/// Creates the infinite sequence `first, f(first), f(f(first)), ...`.
///
/// `f` is called once per element, when the tail holding the element is first accessed.
///
/// # Examples
///
/// ```rust
/// use orx_lazy_seq::*;
///
/// let powers = iterate(1u64, |x| x * 2);
/// assert_eq!(powers.take(5).to_vec(), [1, 2, 4, 8, 16]);
/// ```
pub fn iterate<'a, T, F>(first: T, f: F) -> Seq<'a, T>
where
    T: Clone + 'a,
    F: Fn(&T) -> T + 'a,
{
    iterate_from(first, Rc::new(f))
}

fn iterate_from<'a, T, F>(value: T, f: Rc<F>) -> Seq<'a, T>
where
    T: Clone + 'a,
    F: Fn(&T) -> T + 'a,
{
    Seq::new(value.clone(), move || {
        let next = f(&value);
        iterate_from(next, f)
    })
}
