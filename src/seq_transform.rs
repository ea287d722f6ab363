use crate::Seq;
use alloc::rc::Rc;

impl<'a, T: 'a> Seq<'a, T> {
    /// Returns the lazy sequence of `f` applied to each element of this sequence.
    ///
    /// `f` is applied to an element when the node holding it is created, which is exactly once per element.
    /// The empty sequence maps to the empty sequence.
    pub fn map<U, F>(&self, f: F) -> Seq<'a, U>
    where
        U: 'a,
        F: Fn(&T) -> U + 'a,
    {
        map_from(self.clone(), Rc::new(f))
    }

    /// ***O(n)*** Advances `n` steps, or until the sequence is exhausted, and returns the remaining sequence.
    ///
    /// `drop(0)` returns this very sequence.
    pub fn drop(&self, n: usize) -> Self {
        let mut current = self;
        for _ in 0..n {
            match current.is_empty() {
                true => break,
                false => current = current.tail(),
            }
        }
        current.clone()
    }

    /// Advances as long as the elements satisfy `predicate` and returns the remaining sequence,
    /// starting with the first element which does not satisfy it.
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self;
        while let Some(value) = current.head() {
            match predicate(value) {
                true => current = current.tail(),
                false => break,
            }
        }
        current.clone()
    }
}

impl<'a, T: Clone + 'a> Seq<'a, T> {
    /// Returns the lazy sequence of the elements satisfying `predicate`.
    ///
    /// Finding the first matching element is eager: elements are inspected until a match is found.
    /// Every later match is found only when the tail is requested.
    ///
    /// Returns the empty sequence if no element matches; never returns if the sequence is infinite and no element matches.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        filter_from(self, Rc::new(predicate))
    }

    /// Returns the lazy sequence of the first `n` elements, or of all elements if there are fewer.
    ///
    /// `take(0)` is the empty sequence. Tails of this sequence are resolved only as far as the
    /// taken sequence is traversed; the tail of the last taken element is never inspected.
    pub fn take(&self, n: usize) -> Self {
        take_from(self.clone(), n)
    }

    /// Returns the lazy sequence of the leading elements satisfying `predicate`.
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        take_while_from(self.clone(), Rc::new(predicate))
    }

    /// Returns the lazy sequence of the elements of this sequence followed by the elements of `other`.
    ///
    /// The nodes of `other` are shared, not copied.
    pub fn chain(&self, other: &Self) -> Self {
        Seq::from_parts(self.clone(), Seq::from_parts(other.clone(), Seq::empty())).flatten()
    }
}

impl<'a, T: Clone + 'a> Seq<'a, Seq<'a, T>> {
    /// Returns the lazy concatenation of the sequences of this sequence.
    ///
    /// Moves on to the next sequence only once the current one is exhausted.
    /// The nodes of the last sequence are shared, not copied.
    pub fn flatten(&self) -> Seq<'a, T> {
        flatten_from(Seq::empty(), self.clone())
    }
}

fn map_from<'a, T, U, F>(seq: Seq<'a, T>, f: Rc<F>) -> Seq<'a, U>
where
    T: 'a,
    U: 'a,
    F: Fn(&T) -> U + 'a,
{
    let value = match seq.head() {
        Some(x) => f(x),
        None => return Seq::empty(),
    };
    Seq::new(value, move || map_from(seq.tail().clone(), f))
}

fn filter_from<'a, T, P>(seq: &Seq<'a, T>, predicate: Rc<P>) -> Seq<'a, T>
where
    T: Clone + 'a,
    P: Fn(&T) -> bool + 'a,
{
    let mut current = seq;
    while let Some(value) = current.head() {
        if predicate(value) {
            let value = value.clone();
            let found = current.clone();
            return Seq::new(value, move || filter_from(found.tail(), predicate));
        }
        current = current.tail();
    }
    Seq::empty()
}

fn take_from<'a, T>(seq: Seq<'a, T>, n: usize) -> Seq<'a, T>
where
    T: Clone + 'a,
{
    let value = match (n, seq.head()) {
        (0, _) | (_, None) => return Seq::empty(),
        (_, Some(x)) => x.clone(),
    };
    match n {
        1 => Seq::from_parts(value, Seq::empty()),
        _ => Seq::new(value, move || take_from(seq.tail().clone(), n - 1)),
    }
}

fn take_while_from<'a, T, P>(seq: Seq<'a, T>, predicate: Rc<P>) -> Seq<'a, T>
where
    T: Clone + 'a,
    P: Fn(&T) -> bool + 'a,
{
    let value = match seq.head() {
        Some(x) if predicate(x) => x.clone(),
        _ => return Seq::empty(),
    };
    Seq::new(value, move || take_while_from(seq.tail().clone(), predicate))
}

fn flatten_from<'a, T>(current: Seq<'a, T>, rest: Seq<'a, Seq<'a, T>>) -> Seq<'a, T>
where
    T: Clone + 'a,
{
    let (mut current, mut rest) = (current, rest);
    loop {
        if rest.is_empty() {
            return current;
        }

        if let Some(x) = current.head() {
            let value = x.clone();
            return Seq::new(value, move || flatten_from(current.tail().clone(), rest));
        }

        let (next, remaining) = match rest.split() {
            Some((next, remaining)) => (next.clone(), remaining.clone()),
            None => return Seq::empty(),
        };
        current = next;
        rest = remaining;
    }
}
