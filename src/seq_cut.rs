use crate::Seq;
use alloc::rc::Rc;

impl<'a, T: Clone + 'a> Seq<'a, T> {
    /// Returns the lazy sequence without the last `n` elements.
    ///
    /// A lookahead cursor runs `n` steps ahead of the emitting cursor; an element is emitted only
    /// while the lookahead has not reached the end. The removed suffix is never materialized.
    ///
    /// `cut(0)` returns this very sequence. The result is empty if the sequence has no more than `n` elements.
    ///
    /// Never terminates on an infinite sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_lazy_seq::*;
    ///
    /// let seq = series(0, 1).take(6);
    /// assert_eq!(seq.cut(3).to_vec(), [0, 1, 2]);
    /// assert!(seq.cut(0).ptr_eq(&seq));
    /// assert!(seq.cut(6).is_empty());
    /// ```
    pub fn cut(&self, n: usize) -> Self {
        match n {
            0 => self.clone(),
            _ => cut_from(self.clone(), self.drop(n)),
        }
    }

    /// Returns the lazy sequence without its trailing run of elements satisfying `predicate`.
    ///
    /// Only a run reaching the very end of the sequence is removed; a run of matching elements
    /// followed by a non-matching element is kept.
    ///
    /// Whenever a run of matching elements starts, a probe cursor skips over the whole run to find
    /// out whether it reaches the end. Tails are memoized, so the overlapping traversals of the probe
    /// and the emitting cursor resolve each node once.
    ///
    /// Never terminates on an infinite sequence, unless the predicate fails on every element beyond some bounded prefix
    /// and runs of matching elements are finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_lazy_seq::*;
    ///
    /// let seq = of([3, 1, 4, 1, 5, 9]);
    /// assert_eq!(seq.cut_while(|x| *x > 4).to_vec(), [3, 1, 4, 1]);
    /// assert_eq!(seq.cut_while(|x| *x < 4).to_vec(), [3, 1, 4, 1, 5, 9]);
    /// ```
    pub fn cut_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        cut_while_from(self.clone(), self.clone(), Rc::new(predicate))
    }
}

fn cut_from<'a, T>(base: Seq<'a, T>, lookahead: Seq<'a, T>) -> Seq<'a, T>
where
    T: Clone + 'a,
{
    if lookahead.is_empty() {
        return Seq::empty();
    }
    let value = match base.head() {
        Some(x) => x.clone(),
        None => return Seq::empty(),
    };
    Seq::new(value, move || {
        cut_from(base.tail().clone(), lookahead.tail().clone())
    })
}

fn cut_while_from<'a, T, P>(
    out: Seq<'a, T>,
    probe: Seq<'a, T>,
    predicate: Rc<P>,
) -> Seq<'a, T>
where
    T: Clone + 'a,
    P: Fn(&T) -> bool + 'a,
{
    let probe = match out.ptr_eq(&probe) {
        true => probe.drop_while(&*predicate),
        false => probe,
    };

    if probe.is_empty() {
        return Seq::empty();
    }

    let value = match out.head() {
        Some(x) => x.clone(),
        None => return Seq::empty(),
    };

    Seq::new(value, move || {
        let probe = match out.ptr_eq(&probe) {
            true => probe.tail().clone(),
            false => probe,
        };
        cut_while_from(out.tail().clone(), probe, predicate)
    })
}
